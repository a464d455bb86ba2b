//! Carousel walk example - hands a card over through a store and pages through it

use cardposter::storage::{MemoryStore, CURRENT_CARD_KEY};
use cardposter::{validate_str, Viewer};

const CARD: &str = r#"{
    "type": "stats",
    "title": "Weekly run",
    "items": [
        {"id": 1, "type": "stat", "title": "Distance", "description": "", "value": 42.2, "suffix": " km", "trend": "up"},
        {"id": 2, "type": "stat", "title": "Pace", "description": "Average", "value": "5:12", "suffix": " /km"},
        {"id": 3, "type": "stat", "title": "Goal", "description": "", "value": 84, "suffix": "%", "percentage": 84}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::new();

    // generator side
    let mut producer = Viewer::default();
    producer.replace(validate_str(CARD)?);
    producer.save_to(&store, CURRENT_CARD_KEY)?;

    // viewer side
    let mut viewer = Viewer::new("simple-2");
    if !viewer.load_from(&store, CURRENT_CARD_KEY)? {
        println!("nothing stored");
        return Ok(());
    }

    for _ in 0..4 {
        if let Some(view) = viewer.view()? {
            println!("{:>6}  {}", view.position.label, view.body_text().replace('\n', " | "));
        }
        viewer.next();
    }
    Ok(())
}
