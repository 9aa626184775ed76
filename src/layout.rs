//! Pizza Order Document Layout
//!
//! This module documents the fixed-width order format as produced by this
//! library, and holds the layout constants every other module renders
//! against.
//!
//! # Overview
//!
//! An order document is plain text. Every data field is padded with a
//! designated fill character to an exact column width, so that a downstream
//! consumer can slice the document by position rather than by delimiter.
//!
//! # Document Structure
//!
//! ```text
//! PIZZAS ORDER
//! QUANTITY: 001
//! NAME: Mozzarella--------------------
//! INGREDIENTS: Tomato sauce------------------ Mozzarella cheese-------------
//! END OF PIZZAS ORDER
//! ```
//!
//! **Rules**:
//! - The document opens with the literal header line `PIZZAS ORDER` and
//!   closes with the literal footer line `END OF PIZZAS ORDER`.
//! - Each pizza contributes exactly three lines, in order: `QUANTITY: `,
//!   `NAME: `, `INGREDIENTS: `, each followed by the padded field value.
//! - Pizza blocks are joined by a single newline. There are no blank lines
//!   anywhere, and no trailing newline at the end of the document.
//! - An order with zero pizzas is legal: the header and footer lines are
//!   adjacent.
//!
//! # Fields
//!
//! | Field | Width | Fill | Justification |
//! |-------|-------|------|---------------|
//! | Name / ingredient | 30 | `-` | Left, padded on the right |
//! | Quantity | 3 | `0` | Right, padded on the left |
//!
//! Widths count characters, not bytes. A quantity is always between 1 and
//! 999, so its decimal form never exceeds three digits and no truncation
//! case exists.
//!
//! Ingredients of one pizza are rendered on a single line, each padded
//! independently, joined by one space, in their original order. A pizza
//! carries at least two ingredients.
//!
//! # Determinism
//!
//! The layout is fixed at compile time. For the same validated order the
//! produced document is byte-for-byte identical across runs.

/// Column width of every text field (name, ingredient), in characters.
pub const STRING_WIDTH: usize = 30;

/// Fill character used to right-pad text fields.
pub const STRING_FILL: char = '-';

/// Column width of the quantity field, in digits.
pub const QUANTITY_WIDTH: usize = 3;

/// Fill character used to left-pad the quantity field.
pub const QUANTITY_FILL: char = '0';

/// Smallest accepted quantity.
pub const QUANTITY_MIN: i64 = 1;

/// Largest accepted quantity. Three decimal digits.
pub const QUANTITY_MAX: i64 = 999;

/// Minimum number of ingredients per pizza.
pub const MIN_INGREDIENTS: usize = 2;

/// First line of every document.
pub const HEADER: &str = "PIZZAS ORDER";

/// Last line of every document.
pub const FOOTER: &str = "END OF PIZZAS ORDER";

/// Prefix of a pizza block's quantity line.
pub const QUANTITY_PREFIX: &str = "QUANTITY: ";

/// Prefix of a pizza block's name line.
pub const NAME_PREFIX: &str = "NAME: ";

/// Prefix of a pizza block's ingredients line.
pub const INGREDIENTS_PREFIX: &str = "INGREDIENTS: ";

/// Separator between padded ingredients on the ingredients line.
pub const INGREDIENT_SEPARATOR: char = ' ';
