//! Quickstart — censoring your first sentence with Hush
//!
//! This minimal example shows how to:
//! 1. Seed a lexicon from the built-in word lists
//! 2. Add your own words
//! 3. Filter sentences and inspect what matched
//!
//! Run with: `cargo run --example quickstart`

use hush::{LexiconSource, ProfanityFilter};

fn main() -> hush::Result<()> {
    println!("=== Hush Quickstart ===\n");

    // 1. Seed the lexicon: built-in lists plus your own words
    let mut source = LexiconSource::builtin();
    source.push("grommet");

    // 2. Build the filter
    let filter = ProfanityFilter::new(&source);

    // 3. Filter text — exact hits and close misspellings both count
    for line in [
        "You absolute GROMMET",
        "what a lovely day",
        "you grommmet you",
    ] {
        let outcome = filter.scan(line);
        if outcome.is_clean() {
            println!("clean:    {}", outcome.text);
        } else {
            println!("censored: {}", outcome.text);
        }
    }

    // 4. Grow the lexicon at runtime
    filter.add_word("doofus");
    println!("censored: {}", filter.filter("total DOOFUS energy"));

    Ok(())
}
