//! Ready-made lookup hooks.
//!
//! Canonicalization consults at most two pluggable lookups: an "extra
//! canonical name" for the first unit and a numeric-region replacement for
//! 3-digit region subtags. Neither is installed by default (a bare engine
//! is purely syntactic), but most embedders want the data below, so it
//! ships as static tables with hook-shaped accessors.
//!
//! Install via [`crate::TaggyBuilder::with_preferred_values`] and
//! [`crate::TaggyBuilder::with_un_regions`], or pass your own closures.

use phf::{Map, phf_map};

/// RFC 4646 preferred values for grandfathered and deprecated spellings.
/// Keys are lower case; sign-language entries map to their ISO 639-3 codes.
/// `i-default`, `i-enochian` and `i-mingo` have no preferred value and are
/// intentionally absent.
pub static PREFERRED_VALUES: Map<&'static str, &'static str> = phf_map! {
    "i-ami" => "ami",
    "i-bnn" => "bnn",
    "i-hak" => "hak",
    "i-klingon" => "tlh",
    "i-lux" => "lb",
    "i-navajo" => "nv",
    "i-pwn" => "pwn",
    "i-tao" => "tao",
    "i-tay" => "tay",
    "i-tsu" => "tsu",
    "no-bok" => "nb",
    "no-nyn" => "nn",
    "zh-cmn" => "cmn",
    "zh-gan" => "gan",
    "zh-guoyu" => "cmn",
    "zh-hakka" => "hak",
    "zh-min-nan" => "nan",
    "zh-wuu" => "wuu",
    "zh-xiang" => "hsn",
    "zh-yue" => "yue",
    "sgn-be-fr" => "sfb",
    "sgn-be-nl" => "vgt",
    "sgn-ch-de" => "sgg",
    // deprecated ISO 639-1 codes
    "iw" => "he",
    "in" => "id",
    "ji" => "yi",
};

/// UN M.49 numeric area codes with a one-to-one ISO 3166 replacement.
/// Aggregate areas such as `419` (Latin America) have none and stay
/// numeric on purpose.
pub static UN_M49_REGIONS: Map<&'static str, &'static str> = phf_map! {
    "032" => "AR",
    "036" => "AU",
    "040" => "AT",
    "056" => "BE",
    "076" => "BR",
    "124" => "CA",
    "152" => "CL",
    "156" => "CN",
    "170" => "CO",
    "208" => "DK",
    "246" => "FI",
    "250" => "FR",
    "276" => "DE",
    "300" => "GR",
    "344" => "HK",
    "348" => "HU",
    "356" => "IN",
    "360" => "ID",
    "372" => "IE",
    "376" => "IL",
    "380" => "IT",
    "392" => "JP",
    "410" => "KR",
    "458" => "MY",
    "484" => "MX",
    "528" => "NL",
    "554" => "NZ",
    "578" => "NO",
    "608" => "PH",
    "616" => "PL",
    "620" => "PT",
    "643" => "RU",
    "702" => "SG",
    "704" => "VN",
    "710" => "ZA",
    "724" => "ES",
    "752" => "SE",
    "756" => "CH",
    "764" => "TH",
    "792" => "TR",
    "804" => "UA",
    "826" => "GB",
    "840" => "US",
};

/// Hook-shaped accessor over [`PREFERRED_VALUES`].
pub fn preferred_value(unit: &str) -> Option<String> {
    PREFERRED_VALUES
        .get(unit.to_ascii_lowercase().as_str())
        .map(|s| (*s).to_string())
}

/// Hook-shaped accessor over [`UN_M49_REGIONS`].
pub fn un_m49_region(code: &str) -> Option<String> {
    UN_M49_REGIONS.get(code).map(|s| (*s).to_string())
}
