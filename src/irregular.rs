//! The irregular-tag table.
//!
//! RFC 4646 grandfathered registrations that do not decompose under the
//! standard subtag grammar, plus a few historical `zh-` spellings beyond the
//! irregular set proper (`zh-guoyu`, `zh-hakka`, `zh-xiang`). `zh-cmn-Hans`
//! and `zh-cmn-Hant` are left out on purpose: that way `zh-cmn` is extracted
//! as the first unit and the script subtag canonicalizes normally.
//!
//! The table is ordered by descending spelling length. The scan takes the
//! first hit, so the order is a semantic invariant, not a tuning knob: the
//! longest irregular prefix must win before any shorter one is considered.

/// Irregular spellings in their canonical capitalization.
pub static IRREGULAR: &[&str] = &[
    "zh-min-nan",
    "i-enochian",
    "sgn-BE-fr",
    "sgn-BE-nl",
    "sgn-CH-de",
    "en-GB-oed",
    "i-default",
    "i-klingon",
    "i-navajo",
    "zh-guoyu",
    "zh-hakka",
    "zh-xiang",
    "i-mingo",
    "no-bok",
    "no-nyn",
    "zh-cmn",
    "zh-gan",
    "zh-min",
    "zh-wuu",
    "zh-yue",
    "i-ami",
    "i-bnn",
    "i-hak",
    "i-lux",
    "i-pwn",
    "i-tao",
    "i-tay",
    "i-tsu",
];

/// Longest irregular spelling matching a case-insensitive prefix of `tag`.
///
/// The match must land on a subtag boundary: either the whole input, or the
/// byte right after the spelling is `-`. Returns the canonical spelling.
pub(crate) fn step_irregular(tag: &str) -> Option<&'static str> {
    let b = tag.as_bytes();
    IRREGULAR.iter().copied().find(|irr| {
        let n = irr.len();
        (n == b.len() || (n < b.len() && b[n] == b'-'))
            && b[..n].eq_ignore_ascii_case(irr.as_bytes())
    })
}
