//! # fixedwidth_order
//!
//! Schema-validated fixed-width formatting for pizza order documents.
//!
//! This library takes a structured order description (line items with a
//! quantity, a name, and a list of ingredients), validates it once at
//! construction, and renders it as a fixed-width text document: every field
//! is padded with a designated fill character to an exact column width, and
//! the whole output is wrapped in literal header/footer marker lines.
//!
//! ## Key Properties
//!
//! - **Validate once, format forever**: every constraint is checked when a
//!   value enters the model; the rendering layer never fails
//! - **Precise failures**: rejected input yields an [`Error`] naming the
//!   offending field path (`pizzas[1].name`) and the violated constraint
//! - **Deterministic output**: the same validated order renders to
//!   byte-for-byte identical text on every run
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fixedwidth_order = "0.1"
//! ```
//!
//! ### Validating and Rendering an Order
//!
//! ```rust
//! use fixedwidth_order::{to_string, Order, OrderRequest, PizzaRequest};
//!
//! let request = OrderRequest {
//!     pizzas: vec![PizzaRequest {
//!         quantity: 1,
//!         name: "Mozzarella".to_string(),
//!         ingredients: vec!["Tomato sauce".to_string(), "Mozzarella cheese".to_string()],
//!     }],
//! };
//!
//! let order = Order::try_from(request)?;
//! let document = to_string(&order);
//!
//! assert_eq!(
//!     document,
//!     "PIZZAS ORDER\n\
//!      QUANTITY: 001\n\
//!      NAME: Mozzarella--------------------\n\
//!      INGREDIENTS: Tomato sauce------------------ Mozzarella cheese-------------\n\
//!      END OF PIZZAS ORDER"
//! );
//! # Ok::<(), fixedwidth_order::Error>(())
//! ```
//!
//! ### Decoding the Input Shape from JSON
//!
//! Parsing raw text is the caller's job; [`OrderRequest`] derives serde's
//! traits so any serde decoder produces the accepted input shape. [`Order`]
//! itself deserializes through the validation gate:
//!
//! ```rust
//! use fixedwidth_order::{to_string, Order};
//!
//! let order: Order = serde_json::from_str(
//!     r#"{"pizzas":[{"quantity":20,"name":"Brazilian Calabresa",
//!         "ingredients":["Tomato sauce","Calabresa sausage","Onion"]}]}"#,
//! )?;
//! let document = to_string(&order);
//! assert!(document.contains("QUANTITY: 020"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Document Format
//!
//! For the complete layout (column widths, fill characters, marker lines),
//! see the [`layout`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`simple.rs`** - building a validated order in code
//! - **`from_json.rs`** - decoding the JSON input shape, then rendering
//!
//! Run any example with: `cargo run --example <name>`

pub mod document;
pub mod error;
pub mod field;
pub mod layout;
pub mod model;

pub use document::DocumentFormatter;
pub use error::{Error, Result};
pub use field::{FixedWidthString, Quantity};
pub use model::{Ingredients, Order, OrderRequest, Pizza, PizzaRequest};

use std::io;

/// Renders a validated [`Order`] as its fixed-width document.
///
/// Infallible: all constraints were enforced when the order was built.
///
/// # Examples
///
/// ```rust
/// use fixedwidth_order::{to_string, Order, OrderRequest};
///
/// let empty = Order::try_from(OrderRequest::default())?;
/// assert_eq!(to_string(&empty), "PIZZAS ORDER\nEND OF PIZZAS ORDER");
/// # Ok::<(), fixedwidth_order::Error>(())
/// ```
#[must_use]
pub fn to_string(order: &Order) -> String {
    let mut formatter = DocumentFormatter::new();
    formatter.write_order(order);
    formatter.into_inner()
}

/// Renders a validated [`Order`] into a writer.
///
/// # Examples
///
/// ```rust
/// use fixedwidth_order::{to_writer, Order, OrderRequest};
///
/// let order = Order::try_from(OrderRequest::default())?;
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &order)?;
/// assert!(buffer.starts_with(b"PIZZAS ORDER"));
/// # Ok::<(), fixedwidth_order::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, order: &Order) -> Result<()>
where
    W: io::Write,
{
    let document = to_string(order);
    writer
        .write_all(document.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
