//! Cart

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{customization::Customization, menu::DrinkKey};

/// Errors related to cart construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A line was created with a quantity of zero (line index).
    #[error("Cart line {0} has a quantity of zero")]
    ZeroQuantity(usize),
}

/// One line of a cart: a drink, its customization and a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Stable identifier for the line, used to address it from view events.
    pub id: String,

    /// The drink this line refers to.
    pub drink: DrinkKey,

    /// The options picked for this line.
    pub customization: Customization,

    /// Number of servings, always at least one.
    pub quantity: u32,
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a new cart with the given lines.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if any line has a quantity of zero.
    pub fn with_items(
        items: impl Into<Vec<CartItem>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            if item.quantity == 0 {
                Err(CartError::ZeroQuantity(i))
            } else {
                Ok(())
            }
        })?;

        Ok(Cart { items, currency })
    }

    /// Get the lines of the cart in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over the lines of the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
