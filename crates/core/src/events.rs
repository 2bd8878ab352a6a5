//! Events
//!
//! Actions a cart view surfaces to its host. The view never mutates cart
//! state itself; every control emits one of these and the host application
//! decides how to respond.

/// An action requested from the cart view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// Set a line to the requested quantity.
    ///
    /// The requested value is exactly what the control asked for, with no
    /// clamping applied. Zero is possible and the host decides whether that
    /// means removing the line.
    UpdateQuantity {
        /// Identifier of the cart line.
        id: String,

        /// Requested new quantity.
        quantity: u32,
    },

    /// Remove a line outright, whatever its quantity.
    Remove {
        /// Identifier of the cart line.
        id: String,
    },

    /// Start checkout for the current cart.
    Checkout,

    /// Leave the cart and go back to browsing the menu.
    ContinueShopping,
}
