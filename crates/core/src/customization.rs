//! Customization

use std::fmt;

/// Serving size for a drink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// The base serving, priced as listed on the menu.
    Small,

    /// A medium serving, which carries a surcharge for drinks.
    Medium,

    /// A large serving, which carries a larger surcharge for drinks.
    Large,
}

impl fmt::Display for Size {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        };

        write!(formatter, "{label}")
    }
}

/// The options a customer picked for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customization {
    /// Serving size
    pub size: Size,

    /// Milk choice, such as `Whole Milk` or `Oat Milk`
    pub milk: String,

    /// Ice level, such as `Regular Ice` or `No Ice`
    pub ice: String,

    /// Paid extras, such as `Extra Shot`
    pub extras: Vec<String>,
}

impl Customization {
    /// The size, milk and ice options joined for display.
    ///
    /// Produces strings such as `Large • Oat Milk • No Ice`.
    pub fn options_summary(&self) -> String {
        format!("{} • {} • {}", self.size, self.milk, self.ice)
    }

    /// The extras joined for display, or `None` when there are no extras.
    ///
    /// Produces strings such as `Extra Shot, Whipped Cream`.
    pub fn extras_summary(&self) -> Option<String> {
        if self.extras.is_empty() {
            None
        } else {
            Some(self.extras.join(", "))
        }
    }
}
