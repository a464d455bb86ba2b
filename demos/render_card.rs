//! Render card example - validates a card file and prints each page's body text
//!
//! Run: `cargo run --example render_card -- tests/fixtures/steps.json simple-2`

use cardposter::{render_all, validate_str};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "tests/fixtures/steps.json".to_string());
    let format = args.next().unwrap_or_else(|| cardposter::DEFAULT_FORMAT.to_string());

    let card = validate_str(&std::fs::read_to_string(&path)?)?;
    println!("{} ({} card, {} items) in {}\n", card.title, card.card_type(), card.len(), format);

    for view in render_all(&card, &format)? {
        println!("[{}] {:?}", view.position.label, view.variant);
        println!("{}", "-".repeat(40));
        println!("{}\n", view.body_text());
    }

    Ok(())
}
