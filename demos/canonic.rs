//! Canonicalization with and without the built-in lookup tables.
//!
//! Run with `cargo run --example canonic`

use taggy::Taggy;

fn main() {
    let plain = Taggy::default();
    let hooked = Taggy::builder()
        .with_preferred_values()
        .with_un_regions()
        .build();

    for tag in [
        "en-us",
        "ZH-HANS-cn",
        "sgn-be-fr",
        "i-klingon",
        "zh-min-nan-TW",
        "en-840",
        "not a tag",
    ] {
        println!(
            "{tag:<16} syntactic: {:<12} hooked: {:<12}",
            plain.canonicalize(tag, true).unwrap_or_default(),
            hooked.canonicalize(tag, true).unwrap_or_default(),
        );
    }
}
