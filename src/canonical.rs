//! Tag canonicalization.
//!
//! Canonical casing is language lower, script titlecase, region upper:
//! `zh-hans-cn` becomes `zh-Hans-CN`. The first unit is special: it may be
//! an irregular spelling from [`crate::irregular`], a singleton-led
//! grandfathered tag, or a plain ISO 639 code, and both lookup hooks from
//! [`Context`] get a say before the syntactic rules do.

use crate::{
    context::Context,
    irregular::step_irregular,
    subtag::{SubtagClass, classify, step_tag},
};
use thiserror::Error;

/// Longest tag the engine accepts, in bytes. Checked up front so a failure
/// can never leave a partially built result behind.
pub const MAX_TAG_LEN: usize = 255;

/// Public error type for canonicalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("invalid language tag `{0}`")]
    Invalid(String),

    #[error("language tag exceeds the 255-byte bound")]
    TooLong,
}

/// Canonical spelling of `tag`.
///
/// With `full = false` only the first unit is returned (the language, or a
/// whole irregular spelling), which is the tag-extraction operation. With
/// `full = true` every remaining subtag is canonicalized as well.
///
/// Canonicalization is idempotent and ASCII-case-insensitive on its input.
pub fn canonic_tag(tag: &str, full: bool, ctx: &Context) -> Result<String, TagError> {
    if tag.len() > MAX_TAG_LEN {
        return Err(TagError::TooLong);
    }

    // First unit: an irregular spelling, or a singleton-stepped subtag.
    let irregular = step_irregular(tag);
    let consumed = irregular.map_or_else(|| step_tag(tag), str::len);
    let raw_unit = &tag[..consumed];

    let mut out = String::with_capacity(tag.len());
    if let Some(canon) = ctx.lookup_canonical(irregular.unwrap_or(raw_unit)) {
        // hook output is the authoritative spelling, emitted verbatim
        out.push_str(&canon);
    } else if let Some(irr) = irregular {
        out.push_str(irr);
    } else if consumed == 2 || consumed == 3 {
        // ISO 639 primary language
        out.push_str(&raw_unit.to_ascii_lowercase());
    } else if tag == "*" {
        out.push('*');
    } else if consumed >= 4 && tag.as_bytes().get(1) == Some(&b'-') {
        // singleton-led grandfathered or private-use tag, e.g. `x-pig-latin`
        out.push_str(&raw_unit.to_ascii_lowercase());
    } else {
        return Err(TagError::Invalid(tag.to_owned()));
    }

    if full {
        let mut rest = &tag[consumed..];
        while let Some(r) = rest.strip_prefix('-') {
            let len = step_tag(r);
            out.push('-');
            canonic_subtag(&mut out, &r[..len], ctx);
            rest = &r[len..];
        }
    }
    Ok(out)
}

/// Canonicalize one non-initial unit into `out`. `unit` may be a stepped
/// singleton span (`a-bbb`), which always lands in the Other arm.
fn canonic_subtag(out: &mut String, unit: &str, ctx: &Context) {
    match classify(unit) {
        SubtagClass::Script => {
            for (i, b) in unit.bytes().enumerate() {
                let b = if i == 0 {
                    b.to_ascii_uppercase()
                } else {
                    b.to_ascii_lowercase()
                };
                out.push(b as char);
            }
        }
        SubtagClass::Region => out.push_str(&unit.to_ascii_uppercase()),
        SubtagClass::NumericRegion => match ctx.lookup_un_region(unit) {
            Some(region) => out.push_str(&region),
            None => out.push_str(unit),
        },
        _ => out.push_str(&unit.to_ascii_lowercase()),
    }
}
