//! Building a validated order in code and rendering it.
//!
//! Run with: cargo run --example simple

use fixedwidth_order::{to_string, FixedWidthString, Ingredients, Order, Pizza, Quantity};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let margherita = Pizza::new(
        Quantity::new(2)?,
        FixedWidthString::new("Margherita")?,
        Ingredients::from_names(["Tomato sauce", "Mozzarella cheese", "Basil"])?,
    );

    let quattro_formaggi = Pizza::new(
        Quantity::new(1)?,
        FixedWidthString::new("Quattro Formaggi")?,
        Ingredients::from_names(["Mozzarella", "Gorgonzola", "Parmesan", "Fontina"])?,
    );

    let order = Order::new(vec![margherita, quattro_formaggi]);
    println!("{}", to_string(&order));

    Ok(())
}
