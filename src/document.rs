//! Document rendering.
//!
//! This module provides the [`DocumentFormatter`] that turns a validated
//! [`Order`] into the fixed-width document text described in
//! [`crate::layout`].
//!
//! Rendering is a single pass over the order: the header line, one
//! three-line block per pizza, the footer line. All validation happened at
//! construction, so nothing here can fail.
//!
//! ## Usage
//!
//! Most users should use [`crate::to_string`]:
//!
//! ```rust
//! use fixedwidth_order::{to_string, Order, OrderRequest, PizzaRequest};
//!
//! let order = Order::try_from(OrderRequest {
//!     pizzas: vec![PizzaRequest {
//!         quantity: 1,
//!         name: "Mozzarella".to_string(),
//!         ingredients: vec!["Tomato sauce".to_string(), "Mozzarella cheese".to_string()],
//!     }],
//! })?;
//!
//! let document = to_string(&order);
//! assert!(document.starts_with("PIZZAS ORDER\n"));
//! assert!(document.ends_with("\nEND OF PIZZAS ORDER"));
//! # Ok::<(), fixedwidth_order::Error>(())
//! ```

use crate::layout;
use crate::model::{Order, Pizza};

/// Accumulates the fixed-width document for one order.
///
/// Created via [`DocumentFormatter::new`]; the finished text is taken out
/// with [`DocumentFormatter::into_inner`].
pub struct DocumentFormatter {
    output: String,
}

impl DocumentFormatter {
    #[must_use]
    pub fn new() -> Self {
        // Header, footer, and roughly one 3-line block fit without growing.
        DocumentFormatter {
            output: String::with_capacity(256),
        }
    }

    /// Consumes the formatter and returns the document text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes the full document: header, pizza blocks, footer.
    ///
    /// Blocks are joined by single newlines; an empty order leaves the
    /// header and footer adjacent. No trailing newline.
    pub fn write_order(&mut self, order: &Order) {
        self.output.push_str(layout::HEADER);
        for pizza in order.pizzas() {
            self.output.push('\n');
            self.write_pizza(pizza);
        }
        self.output.push('\n');
        self.output.push_str(layout::FOOTER);
    }

    /// Writes the three-line block of one pizza, without a trailing newline.
    pub fn write_pizza(&mut self, pizza: &Pizza) {
        self.output.push_str(layout::QUANTITY_PREFIX);
        pizza.quantity().write_fixed_width(&mut self.output);
        self.output.push('\n');

        self.output.push_str(layout::NAME_PREFIX);
        pizza.name().write_fixed_width(&mut self.output);
        self.output.push('\n');

        self.output.push_str(layout::INGREDIENTS_PREFIX);
        let mut first = true;
        for ingredient in pizza.ingredients().as_slice() {
            if !first {
                self.output.push(layout::INGREDIENT_SEPARATOR);
            }
            ingredient.write_fixed_width(&mut self.output);
            first = false;
        }
    }
}

impl Default for DocumentFormatter {
    fn default() -> Self {
        DocumentFormatter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderRequest, PizzaRequest};

    fn order_of(pizzas: Vec<PizzaRequest>) -> Order {
        Order::try_from(OrderRequest { pizzas }).unwrap()
    }

    #[test]
    fn pizza_block_is_three_lines_with_literal_prefixes() {
        let order = order_of(vec![PizzaRequest {
            quantity: 20,
            name: "Brazilian Calabresa".to_string(),
            ingredients: vec![
                "Tomato sauce".to_string(),
                "Calabresa sausage".to_string(),
                "Onion".to_string(),
            ],
        }]);

        let mut formatter = DocumentFormatter::new();
        formatter.write_pizza(&order.pizzas()[0]);
        let block = formatter.into_inner();

        let lines: Vec<&str> = block.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "QUANTITY: 020");
        assert_eq!(lines[1], "NAME: Brazilian Calabresa-----------");
        assert_eq!(
            lines[2],
            "INGREDIENTS: Tomato sauce------------------ \
             Calabresa sausage------------- Onion-------------------------"
        );
        assert!(!block.ends_with('\n'));
    }

    #[test]
    fn empty_order_has_adjacent_marker_lines() {
        let mut formatter = DocumentFormatter::new();
        formatter.write_order(&order_of(vec![]));
        assert_eq!(formatter.into_inner(), "PIZZAS ORDER\nEND OF PIZZAS ORDER");
    }

    #[test]
    fn blocks_are_joined_by_a_single_newline() {
        let pizza = PizzaRequest {
            quantity: 1,
            name: "Mozzarella".to_string(),
            ingredients: vec!["Tomato sauce".to_string(), "Mozzarella cheese".to_string()],
        };
        let order = order_of(vec![pizza.clone(), pizza]);

        let mut formatter = DocumentFormatter::new();
        formatter.write_order(&order);
        let document = formatter.into_inner();

        assert!(!document.contains("\n\n"));
        assert!(!document.ends_with('\n'));
        assert_eq!(document.matches("QUANTITY: 001").count(), 2);
    }
}
