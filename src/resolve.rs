//! Accept-language resolution: pick the single best-matching group of tagged
//! items for a prioritized client range list.
//!
//! Tokens are tried strictly in order. Per token, an exact canonical hit
//! wins unconditionally; otherwise the longest boundary-aligned prefix match
//! across the remaining groups does. The first token that selects a group
//! ends the resolution; the group is removed from the pool, so no group is
//! ever returned twice.

use crate::{
    canonical::canonic_tag,
    context::Context,
};
use smallvec::SmallVec;
use std::collections::HashMap;

type Group<I> = SmallVec<[I; 4]>;

/// Items grouped by canonical tag, plus one default group holding untagged
/// items and items whose tag has no canonical form.
///
/// Group enumeration order during the fuzzy scan is unspecified: when two
/// groups match a token with equal-length spans, whichever the scan visits
/// first wins. Don't rely on it.
#[derive(Debug)]
pub struct Pool<I> {
    groups: HashMap<String, Group<I>>,
    default_group: Group<I>,
}

impl<I> Default for Pool<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Pool<I> {
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
            default_group: SmallVec::new(),
        }
    }

    /// Number of distinct canonical tags currently pooled.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.default_group.is_empty()
    }

    /// Add one item. Untagged items and items whose tag cannot be
    /// canonicalized land in the default group.
    pub fn insert(&mut self, item: I, tag: Option<&str>, ctx: &Context) {
        match tag.and_then(|t| canonic_tag(t, true, ctx).ok()) {
            Some(key) => self.groups.entry(key).or_default().push(item),
            None => self.default_group.push(item),
        }
    }

    /// Resolve `range_list` against the pool, removing and returning the
    /// winning group.
    ///
    /// Falls back to (and consumes) the default group when no token selects
    /// anything; a fully consumed pool yields an empty vec. Malformed or
    /// uncanonicalizable tokens are skipped, so resolution itself never
    /// fails.
    pub fn take(&mut self, range_list: &str, ctx: &Context) -> Vec<I> {
        for segment in range_list.split(',') {
            let Some(token) = scan_range(segment) else {
                continue;
            };
            let Ok(token) = canonic_tag(token, true, ctx) else {
                continue;
            };

            // a preferred exact match: the keys are canonical and the token
            // has just been converted
            if let Some(group) = self.groups.remove(&token) {
                return group.into_vec();
            }

            // no exact match: scan for the best (longest) span
            let mut best_key: Option<&String> = None;
            let mut best_len = 0usize;
            for key in self.groups.keys() {
                let len = if token == "*" {
                    key.len()
                } else {
                    match_span(key, &token)
                };
                if len > best_len {
                    best_len = len;
                    best_key = Some(key);
                }
            }
            if let Some(key) = best_key.cloned()
                && let Some(group) = self.groups.remove(&key)
            {
                return group.into_vec();
            }
        }
        std::mem::take(&mut self.default_group).into_vec()
    }
}

/// Length of the usable common span between a canonical group key and a
/// canonical range token.
///
/// The maximal ASCII-case-insensitive common prefix counts only if it lands
/// on a subtag boundary on both sides and the token byte two before the
/// boundary is not `-`: a `-x` there means the span stops inside a
/// singleton-introduced unit rather than after a complete subtag.
fn match_span(key: &str, token: &str) -> usize {
    let k = key.as_bytes();
    let t = token.as_bytes();
    let span = k
        .iter()
        .zip(t)
        .take_while(|(a, b)| a.eq_ignore_ascii_case(b))
        .count();
    if span == 0 {
        return 0;
    }
    let key_boundary = span == k.len() || k[span] == b'-';
    let token_boundary = span == t.len() || t[span] == b'-';
    let splits_singleton = span > 2 && t[span - 2] == b'-';
    if key_boundary && token_boundary && !splits_singleton {
        span
    } else {
        0
    }
}

/// Scan one range token out of a comma-delimited segment: leading whitespace
/// is skipped, the token is `*` or an alphabetic-leading name, and anything
/// after it in the segment (`;q=0.8`, stray text) is ignored.
fn scan_range(segment: &str) -> Option<&str> {
    let s = segment.trim_start();
    if s.starts_with('*') {
        return Some("*");
    }
    scan_name(s)
}

/// A name token: alphabetic first character, then alphanumerics and
/// hyphens, at least two characters, no hyphen dangling before a
/// non-alphanumeric. Malformed input is rejected rather than mis-split.
fn scan_name(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    if !b.first().is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    if !b.get(1).is_some_and(|&c| c.is_ascii_alphanumeric() || c == b'-') {
        return None;
    }
    let mut end = 0;
    while end < b.len() && (b[end].is_ascii_alphanumeric() || b[end] == b'-') {
        if b[end] == b'-' && !b.get(end + 1).is_some_and(u8::is_ascii_alphanumeric) {
            return None;
        }
        end += 1;
    }
    Some(&s[..end])
}
