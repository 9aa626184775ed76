//! The validated order model and its raw request shape.
//!
//! Two layers live here:
//!
//! - **Requests** ([`OrderRequest`], [`PizzaRequest`]): the raw structured
//!   input shape, `{ pizzas: [ { quantity, name, ingredients }, .. ] }`.
//!   Requests are plain serde-derived data and carry no invariants; an
//!   upstream decoder (serde_json or similar) produces them from the wire.
//! - **Validated model** ([`Order`], [`Pizza`], [`Ingredients`]): immutable
//!   value objects whose constructors enforce every constraint exactly once.
//!   The formatting layer only ever sees these.
//!
//! Conversion from request to model is the single validation gate,
//! implemented as `TryFrom<OrderRequest> for Order`. It fails on the first
//! invalid field with an error carrying the full field path, and produces no
//! partial result.
//!
//! ## Examples
//!
//! ```rust
//! use fixedwidth_order::{Order, OrderRequest, PizzaRequest};
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
//! assert_eq!(order.pizzas().len(), 1);
//! # Ok::<(), fixedwidth_order::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::field::{FixedWidthString, Quantity};
use crate::layout;
use serde::{Deserialize, Serialize};

/// Raw shape of one pizza, before validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaRequest {
    pub quantity: i64,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Raw shape of a whole order, before validation.
///
/// This is the only accepted input shape. Deserializing it from text or
/// bytes is the caller's job; see the crate-level docs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub pizzas: Vec<PizzaRequest>,
}

/// An ordered, validated list of at least two ingredients.
///
/// # Examples
///
/// ```rust
/// use fixedwidth_order::Ingredients;
///
/// let ingredients = Ingredients::from_names(["Tomato sauce", "Onion"])?;
/// assert_eq!(ingredients.as_slice().len(), 2);
///
/// assert!(Ingredients::from_names(["Tomato sauce"]).is_err());
/// # Ok::<(), fixedwidth_order::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ingredients(Vec<FixedWidthString>);

impl Ingredients {
    /// Accepts a list of at least [`layout::MIN_INGREDIENTS`] ingredients.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewIngredients`] if the list is too short.
    pub fn new(ingredients: Vec<FixedWidthString>) -> Result<Self> {
        if ingredients.len() < layout::MIN_INGREDIENTS {
            return Err(Error::too_few_ingredients("ingredients", ingredients.len()));
        }
        Ok(Ingredients(ingredients))
    }

    /// Validates each name, then the list length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StringTooLong`] for an over-long name (path
    /// `ingredients[i]`) or [`Error::TooFewIngredients`] for a short list.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ingredients = Vec::new();
        for (index, name) in names.into_iter().enumerate() {
            let ingredient = FixedWidthString::new(name)
                .map_err(|e| e.with_path(format!("ingredients[{index}]")))?;
            ingredients.push(ingredient);
        }
        Ingredients::new(ingredients)
    }

    /// Returns the ingredients in their original order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[FixedWidthString] {
        &self.0
    }
}

/// One validated line item: a quantity, a name, and its ingredients.
///
/// Constructed from already-validated parts ([`Pizza::new`]) or from a raw
/// [`PizzaRequest`] via `TryFrom`. There are no cross-field invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pizza {
    quantity: Quantity,
    name: FixedWidthString,
    ingredients: Ingredients,
}

impl Pizza {
    /// Assembles a pizza from validated parts. Infallible.
    #[must_use]
    pub fn new(quantity: Quantity, name: FixedWidthString, ingredients: Ingredients) -> Self {
        Pizza {
            quantity,
            name,
            ingredients,
        }
    }

    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &FixedWidthString {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn ingredients(&self) -> &Ingredients {
        &self.ingredients
    }
}

impl TryFrom<PizzaRequest> for Pizza {
    type Error = Error;

    /// Validates a raw pizza. Error paths are relative to the pizza
    /// (`quantity`, `name`, `ingredients[i]`, `ingredients`).
    fn try_from(request: PizzaRequest) -> Result<Self> {
        let quantity =
            Quantity::new(request.quantity).map_err(|e| e.with_path("quantity"))?;
        let name = FixedWidthString::new(request.name).map_err(|e| e.with_path("name"))?;
        let ingredients = Ingredients::from_names(request.ingredients)?;
        Ok(Pizza::new(quantity, name, ingredients))
    }
}

/// A validated order: zero or more pizzas, in their original order.
///
/// The empty order is legal; it renders as the header and footer lines with
/// nothing between them.
///
/// `Order` deserializes through [`OrderRequest`], so decoding e.g. JSON
/// directly into an `Order` runs the full validation gate:
///
/// ```rust
/// use fixedwidth_order::Order;
///
/// let order: Order = serde_json::from_str(
///     r#"{"pizzas":[{"quantity":1,"name":"Mozzarella",
///         "ingredients":["Tomato sauce","Mozzarella cheese"]}]}"#,
/// )?;
/// assert_eq!(order.pizzas().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "OrderRequest")]
pub struct Order {
    pizzas: Vec<Pizza>,
}

impl Order {
    /// Assembles an order from validated pizzas. Infallible.
    #[must_use]
    pub fn new(pizzas: Vec<Pizza>) -> Self {
        Order { pizzas }
    }

    /// Returns the pizzas in their original order.
    #[inline]
    #[must_use]
    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }
}

impl TryFrom<OrderRequest> for Order {
    type Error = Error;

    /// Validates a raw order, failing on the first invalid pizza.
    ///
    /// Error paths are absolute, e.g. `pizzas[1].quantity`.
    fn try_from(request: OrderRequest) -> Result<Self> {
        let mut pizzas = Vec::with_capacity(request.pizzas.len());
        for (index, pizza) in request.pizzas.into_iter().enumerate() {
            let pizza = Pizza::try_from(pizza).map_err(|e| {
                let path = match e.path() {
                    Some(field) => format!("pizzas[{index}].{field}"),
                    None => format!("pizzas[{index}]"),
                };
                e.with_path(path)
            })?;
            pizzas.push(pizza);
        }
        Ok(Order::new(pizzas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mozzarella() -> PizzaRequest {
        PizzaRequest {
            quantity: 1,
            name: "Mozzarella".to_string(),
            ingredients: vec!["Tomato sauce".to_string(), "Mozzarella cheese".to_string()],
        }
    }

    #[test]
    fn valid_pizza_is_accepted() {
        let pizza = Pizza::try_from(mozzarella()).unwrap();
        assert_eq!(pizza.quantity().get(), 1);
        assert_eq!(pizza.name().as_str(), "Mozzarella");
        assert_eq!(pizza.ingredients().as_slice().len(), 2);
    }

    #[test]
    fn single_ingredient_is_rejected() {
        let mut request = mozzarella();
        request.ingredients.truncate(1);

        let err = Pizza::try_from(request).unwrap_err();
        assert_eq!(
            err,
            Error::TooFewIngredients {
                path: "ingredients".to_string(),
                count: 1,
                min: 2,
            }
        );
    }

    #[test]
    fn empty_ingredient_list_is_rejected() {
        let mut request = mozzarella();
        request.ingredients.clear();
        assert!(matches!(
            Pizza::try_from(request),
            Err(Error::TooFewIngredients { count: 0, .. })
        ));
    }

    #[test]
    fn overlong_ingredient_reports_its_index() {
        let mut request = mozzarella();
        request.ingredients.push("x".repeat(31));

        let err = Pizza::try_from(request).unwrap_err();
        assert_eq!(err.path(), Some("ingredients[2]"));
    }

    #[test]
    fn order_error_paths_carry_the_pizza_index() {
        let mut bad = mozzarella();
        bad.quantity = 0;
        let request = OrderRequest {
            pizzas: vec![mozzarella(), bad],
        };

        let err = Order::try_from(request).unwrap_err();
        assert_eq!(err.path(), Some("pizzas[1].quantity"));
    }

    #[test]
    fn order_fails_on_the_first_invalid_pizza() {
        let mut first_bad = mozzarella();
        first_bad.name = "n".repeat(40);
        let mut second_bad = mozzarella();
        second_bad.quantity = -1;
        let request = OrderRequest {
            pizzas: vec![first_bad, second_bad],
        };

        let err = Order::try_from(request).unwrap_err();
        assert_eq!(err.path(), Some("pizzas[0].name"));
    }

    #[test]
    fn empty_order_is_legal() {
        let order = Order::try_from(OrderRequest::default()).unwrap();
        assert!(order.pizzas().is_empty());
    }

    #[test]
    fn order_deserializes_through_the_validation_gate() {
        let err = serde_json::from_str::<Order>(
            r#"{"pizzas":[{"quantity":1000,"name":"Mozzarella",
                "ingredients":["Tomato sauce","Mozzarella cheese"]}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("pizzas[0].quantity"));
    }
}
