//! Accept-language negotiation over a small document pool.
//!
//! Run with `cargo run --example negotiate`

use taggy::Taggy;

fn main() {
    let taggy = Taggy::default();

    let pages = [
        ("index.en-GB.html", Some("en-GB")),
        ("index.en.html", Some("en")),
        ("index.fr.html", Some("fr-FR")),
        ("index.html", None),
    ];

    for header in [
        "en-GB, en;q=0.8, *;q=0.1",
        "en-AU, en",
        "fr-CH, fr;q=0.9",
        "ja, ko",
    ] {
        let winner = taggy.resolve(header, pages);
        println!("{header:<28} -> {winner:?}");
    }
}
