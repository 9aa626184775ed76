//! Error types for order validation and document output.
//!
//! Every constraint on the order data model is checked exactly once, when a
//! value is accepted into the model. A failed check produces an [`Error`]
//! naming the offending field path and the violated constraint; the
//! formatting layer never validates and never fails.
//!
//! ## Error Categories
//!
//! - **String length**: a text field exceeds the fixed column width
//! - **Integer range**: a quantity falls outside the accepted range
//! - **Cardinality**: an ingredient list is shorter than the required minimum
//! - **I/O**: writing the finished document to a writer failed
//!
//! ## Field Paths
//!
//! Validation errors carry the path of the rejected field relative to the
//! order request, e.g. `pizzas[1].name` or `pizzas[0].ingredients[2]`.
//! Callers are expected to surface the path verbatim.
//!
//! ## Examples
//!
//! ```rust
//! use fixedwidth_order::{Error, FixedWidthString};
//!
//! let result = FixedWidthString::new("x".repeat(31));
//! assert!(matches!(result, Err(Error::StringTooLong { .. })));
//! ```

use thiserror::Error;

/// Represents all possible errors produced while building or writing an order.
///
/// Validation variants identify the rejected field via [`Error::path`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A string field exceeds the fixed column width.
    #[error("{path}: string is {len} characters long, maximum is {max}")]
    StringTooLong {
        path: String,
        len: usize,
        max: usize,
    },

    /// An integer field falls outside the accepted range.
    #[error("{path}: {value} is outside the accepted range {min}..={max}")]
    IntOutOfRange {
        path: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// An ingredient list is shorter than the required minimum.
    #[error("{path}: got {count} ingredient(s), at least {min} required")]
    TooFewIngredients {
        path: String,
        count: usize,
        min: usize,
    },

    /// IO error while writing the document
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a string-length error for a value of `len` characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedwidth_order::Error;
    ///
    /// let err = Error::string_too_long("name", 42);
    /// assert!(err.to_string().contains("42 characters"));
    /// ```
    pub fn string_too_long(path: impl Into<String>, len: usize) -> Self {
        Error::StringTooLong {
            path: path.into(),
            len,
            max: crate::layout::STRING_WIDTH,
        }
    }

    /// Creates a range error for an out-of-range integer field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedwidth_order::Error;
    ///
    /// let err = Error::int_out_of_range("quantity", 0);
    /// assert!(err.to_string().contains("1..=999"));
    /// ```
    pub fn int_out_of_range(path: impl Into<String>, value: i64) -> Self {
        Error::IntOutOfRange {
            path: path.into(),
            value,
            min: crate::layout::QUANTITY_MIN,
            max: crate::layout::QUANTITY_MAX,
        }
    }

    /// Creates a cardinality error for an ingredient list of `count` elements.
    pub fn too_few_ingredients(path: impl Into<String>, count: usize) -> Self {
        Error::TooFewIngredients {
            path: path.into(),
            count,
            min: crate::layout::MIN_INGREDIENTS,
        }
    }

    /// Creates an I/O error for document writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the path of the rejected field, if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixedwidth_order::Error;
    ///
    /// let err = Error::string_too_long("pizzas[0].name", 31);
    /// assert_eq!(err.path(), Some("pizzas[0].name"));
    /// assert_eq!(Error::io("disk full").path(), None);
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::StringTooLong { path, .. }
            | Error::IntOutOfRange { path, .. }
            | Error::TooFewIngredients { path, .. } => Some(path),
            Error::Io(_) => None,
        }
    }

    /// Returns the same error with its field path replaced.
    ///
    /// Constructors of composite values use this to attach the full path
    /// (item index and sub-field) to errors raised by scalar constructors.
    /// Has no effect on [`Error::Io`].
    #[must_use]
    pub fn with_path(self, path: impl Into<String>) -> Self {
        match self {
            Error::StringTooLong { len, max, .. } => Error::StringTooLong {
                path: path.into(),
                len,
                max,
            },
            Error::IntOutOfRange {
                value, min, max, ..
            } => Error::IntOutOfRange {
                path: path.into(),
                value,
                min,
                max,
            },
            Error::TooFewIngredients { count, min, .. } => Error::TooFewIngredients {
                path: path.into(),
                count,
                min,
            },
            Error::Io(msg) => Error::Io(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
