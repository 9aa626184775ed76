//! Validated fixed-width scalar fields.
//!
//! This module provides the two leaf value types of the order model:
//!
//! - [`FixedWidthString`]: a text value of at most 30 characters, rendered
//!   left-justified and right-padded with `-`
//! - [`Quantity`]: an integer in `1..=999`, rendered right-justified and
//!   left-padded with `0` to three digits
//!
//! Both are immutable once constructed. Every constraint is checked by the
//! constructor; the rendering methods assume validity and never fail.
//!
//! ## Examples
//!
//! ```rust
//! use fixedwidth_order::{FixedWidthString, Quantity};
//!
//! let name = FixedWidthString::new("Mozzarella")?;
//! assert_eq!(name.fixed_width(), "Mozzarella--------------------");
//!
//! let quantity = Quantity::new(20)?;
//! assert_eq!(quantity.fixed_width(), "020");
//! # Ok::<(), fixedwidth_order::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::layout;

/// A text field padded to a fixed column width.
///
/// Holds the raw value; padding is applied on rendering. The value is
/// limited to [`layout::STRING_WIDTH`] characters so the padded form always
/// occupies exactly that width.
///
/// # Examples
///
/// ```rust
/// use fixedwidth_order::FixedWidthString;
///
/// let name = FixedWidthString::new("Onion")?;
/// assert_eq!(name.as_str(), "Onion");
/// assert_eq!(name.fixed_width().chars().count(), 30);
/// # Ok::<(), fixedwidth_order::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedWidthString(String);

impl FixedWidthString {
    /// Accepts a string of at most [`layout::STRING_WIDTH`] characters.
    ///
    /// Width is counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StringTooLong`] if the value is longer than the
    /// column width.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let len = value.chars().count();
        if len > layout::STRING_WIDTH {
            return Err(Error::string_too_long("string", len));
        }
        Ok(FixedWidthString(value))
    }

    /// Returns the raw, unpadded value.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the value padded to the full column width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedwidth_order::FixedWidthString;
    ///
    /// let sauce = FixedWidthString::new("Tomato sauce")?;
    /// assert_eq!(sauce.fixed_width(), "Tomato sauce------------------");
    /// # Ok::<(), fixedwidth_order::Error>(())
    /// ```
    #[must_use]
    pub fn fixed_width(&self) -> String {
        let mut out = String::with_capacity(layout::STRING_WIDTH);
        self.write_fixed_width(&mut out);
        out
    }

    /// Appends the padded value to an output buffer.
    pub(crate) fn write_fixed_width(&self, out: &mut String) {
        out.push_str(&self.0);
        for _ in self.0.chars().count()..layout::STRING_WIDTH {
            out.push(layout::STRING_FILL);
        }
    }
}

impl TryFrom<&str> for FixedWidthString {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        FixedWidthString::new(value)
    }
}

impl TryFrom<String> for FixedWidthString {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        FixedWidthString::new(value)
    }
}

/// A positive item count padded to three digits.
///
/// # Examples
///
/// ```rust
/// use fixedwidth_order::Quantity;
///
/// let quantity = Quantity::new(7)?;
/// assert_eq!(quantity.get(), 7);
/// assert_eq!(quantity.fixed_width(), "007");
/// # Ok::<(), fixedwidth_order::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantity(u16);

impl Quantity {
    /// Accepts an integer in [`layout::QUANTITY_MIN`]`..=`[`layout::QUANTITY_MAX`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IntOutOfRange`] for zero, negative, or too-large
    /// values.
    pub fn new(value: i64) -> Result<Self> {
        if !(layout::QUANTITY_MIN..=layout::QUANTITY_MAX).contains(&value) {
            return Err(Error::int_out_of_range("quantity", value));
        }
        // Range-checked above; QUANTITY_MAX fits in u16.
        Ok(Quantity(value as u16))
    }

    /// Returns the raw count.
    #[inline]
    #[must_use]
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Renders the count padded to [`layout::QUANTITY_WIDTH`] digits.
    #[must_use]
    pub fn fixed_width(&self) -> String {
        let mut out = String::with_capacity(layout::QUANTITY_WIDTH);
        self.write_fixed_width(&mut out);
        out
    }

    /// Appends the padded count to an output buffer.
    pub(crate) fn write_fixed_width(&self, out: &mut String) {
        let digits = self.0.to_string();
        for _ in digits.len()..layout::QUANTITY_WIDTH {
            out.push(layout::QUANTITY_FILL);
        }
        out.push_str(&digits);
    }
}

impl TryFrom<i64> for Quantity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Quantity::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_within_width_is_accepted() {
        let field = FixedWidthString::new("Mozzarella").unwrap();
        assert_eq!(field.as_str(), "Mozzarella");
    }

    #[test]
    fn string_at_exact_width_is_accepted() {
        let value = "a".repeat(30);
        let field = FixedWidthString::new(value.clone()).unwrap();
        // Already full width, nothing to pad.
        assert_eq!(field.fixed_width(), value);
    }

    #[test]
    fn string_over_width_is_rejected() {
        let err = FixedWidthString::new("a".repeat(31)).unwrap_err();
        assert_eq!(
            err,
            Error::StringTooLong {
                path: "string".to_string(),
                len: 31,
                max: 30,
            }
        );
    }

    #[test]
    fn string_width_counts_characters_not_bytes() {
        // 30 two-byte characters: 60 bytes, but exactly the column width.
        let value = "é".repeat(30);
        let field = FixedWidthString::new(value).unwrap();
        assert_eq!(field.fixed_width().chars().count(), 30);
        assert!(FixedWidthString::new("é".repeat(31)).is_err());
    }

    #[test]
    fn empty_string_pads_to_full_width() {
        let field = FixedWidthString::new("").unwrap();
        assert_eq!(field.fixed_width(), "-".repeat(30));
    }

    #[test]
    fn quantity_bounds() {
        assert_eq!(Quantity::new(1).unwrap().fixed_width(), "001");
        assert_eq!(Quantity::new(999).unwrap().fixed_width(), "999");

        for value in [0, -5, 1000] {
            let err = Quantity::new(value).unwrap_err();
            assert_eq!(
                err,
                Error::IntOutOfRange {
                    path: "quantity".to_string(),
                    value,
                    min: 1,
                    max: 999,
                }
            );
        }
    }

    #[test]
    fn quantity_pads_on_the_left() {
        assert_eq!(Quantity::new(7).unwrap().fixed_width(), "007");
        assert_eq!(Quantity::new(20).unwrap().fixed_width(), "020");
        assert_eq!(Quantity::new(300).unwrap().fixed_width(), "300");
    }
}
