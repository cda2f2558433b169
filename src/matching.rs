//! Extended language-range matching.
//!
//! The walk is the RFC 4647 §3.3.2 two-cursor algorithm, with one deliberate
//! tightening at the end: when the range runs out, a singleton in the tag
//! right past the matched prefix blocks the match unless the range ended in
//! `*`. A plain `en` range therefore matches `en` and `en-GB` but not
//! `en-a-bbb`, while `*` keeps matching everything.

use crate::subtag::subtags;

/// Does `tag` satisfy the extended language range `range`?
///
/// Both sides are compared raw, ASCII-case-insensitively; neither is
/// canonicalized first.
pub fn extended_match(tag: &str, range: &str) -> bool {
    let mut tag_cursor = subtags(tag).peekable();
    let mut range_cursor = subtags(range).peekable();

    // The first subtags must match outright, wildcard aside.
    let first_range = range_cursor.next().unwrap_or("");
    let first_tag = tag_cursor.next().unwrap_or("");
    let mut trailing_wildcard = first_range == "*";
    if !trailing_wildcard && !first_range.eq_ignore_ascii_case(first_tag) {
        return false;
    }

    while let Some(&sub) = range_cursor.peek() {
        if sub == "*" {
            // wildcard consumes nothing on the tag side
            trailing_wildcard = true;
            range_cursor.next();
            continue;
        }
        trailing_wildcard = false;
        let Some(&tag_sub) = tag_cursor.peek() else {
            return false;
        };
        if sub.eq_ignore_ascii_case(tag_sub) {
            range_cursor.next();
            tag_cursor.next();
        } else if tag_sub.len() == 1 {
            // singletons fence off extension/private-use spans
            return false;
        } else {
            // tag subtag more specific than anything in the range
            tag_cursor.next();
        }
    }

    trailing_wildcard || tag_cursor.peek().is_none_or(|s| s.len() != 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_prefix() {
        assert!(extended_match("en", "en"));
        assert!(extended_match("en-GB", "en"));
        assert!(extended_match("zh-Hans-CN", "zh"));
        assert!(!extended_match("fr", "en"));
        assert!(!extended_match("eng", "en"));
    }

    #[test]
    fn case_insensitive() {
        assert!(extended_match("EN-gb", "en-GB"));
        assert!(extended_match("zh-hans", "ZH-Hans"));
    }

    #[test]
    fn universal_wildcard() {
        assert!(extended_match("en", "*"));
        assert!(extended_match("zh-Hans-CN", "*"));
        assert!(extended_match("en-a-bbb", "*"));
        assert!(extended_match("x-priv", "*"));
    }

    #[test]
    fn interior_wildcard_skips_one_position() {
        assert!(extended_match("de-DE", "de-*-DE"));
        assert!(extended_match("de-Latn-DE", "de-*-DE"));
        assert!(extended_match("de-Latf-DE", "de-*-DE"));
        assert!(extended_match("de-DE-x-goethe", "de-*-DE-x-goethe"));
        assert!(!extended_match("de", "de-*-DE"));
        assert!(!extended_match("de-x-DE", "de-*-DE"));
    }

    #[test]
    fn range_subtags_may_skip_specific_tag_subtags() {
        assert!(extended_match("de-Latn-DE", "de-DE"));
        assert!(extended_match("de-Deva-DE-1996", "de-DE"));
        assert!(!extended_match("de-Deva", "de-DE"));
    }

    #[test]
    fn singleton_blocks_generalization() {
        assert!(!extended_match("en-a-bbb", "en"));
        assert!(!extended_match("en-x-priv", "en"));
        assert!(!extended_match("de-DE-x-goethe", "de-DE"));
        // ... but an explicit trailing wildcard opts back in
        assert!(extended_match("en-a-bbb", "en-*"));
        // ... and matching the singleton itself is fine
        assert!(extended_match("en-a-bbb", "en-a-bbb"));
        assert!(extended_match("en-x-priv-more", "en-x-priv"));
    }

    #[test]
    fn exhausted_tag_fails_concrete_range() {
        assert!(!extended_match("en", "en-GB"));
        assert!(!extended_match("de-DE", "de-DE-1996"));
    }

    #[test]
    fn degenerate_inputs() {
        assert!(extended_match("", ""));
        assert!(!extended_match("en", ""));
        assert!(!extended_match("", "en"));
    }
}
