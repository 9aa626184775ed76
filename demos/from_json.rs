//! Decoding the JSON input shape and rendering the document.
//!
//! Upstream deserialization is the caller's job; this demo plays that role
//! with serde_json, then renders. Decoding straight into `Order` runs the
//! full validation gate, so a bad field fails here with its path.
//!
//! Run with: cargo run --example from_json

use fixedwidth_order::{to_string, Order};
use std::error::Error;

const INPUT: &str = r#"{
    "pizzas": [
        {
            "quantity": 1,
            "name": "Mozzarella",
            "ingredients": ["Tomato sauce", "Mozzarella cheese"]
        },
        {
            "quantity": 20,
            "name": "Brazilian Calabresa",
            "ingredients": ["Tomato sauce", "Calabresa sausage", "Onion"]
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let order: Order = serde_json::from_str(INPUT)?;
    println!("{}", to_string(&order));

    // Rejected input reports the offending field path.
    let bad = r#"{"pizzas":[{"quantity":0,"name":"Mozzarella",
        "ingredients":["Tomato sauce","Mozzarella cheese"]}]}"#;
    if let Err(err) = serde_json::from_str::<Order>(bad) {
        eprintln!("rejected: {}", err);
    }

    Ok(())
}
