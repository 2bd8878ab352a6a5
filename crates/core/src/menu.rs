//! Menu

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

new_key_type! {
    /// Drink Key
    pub struct DrinkKey;
}

/// Menu category a drink belongs to.
///
/// Size surcharges apply to every category except [`Category::Snacks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Espresso-based and brewed coffees.
    Coffee,

    /// Brewed and blended teas.
    Tea,

    /// Iced and chilled drinks.
    ColdDrinks,

    /// Pastries and other food items.
    Snacks,
}

/// Drink
#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    /// Drink name
    pub name: String,

    /// Menu category
    pub category: Category,

    /// Base price for a small serving with no extras
    pub price: Money<'static, Currency>,
}

/// Errors related to menu construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// A drink is priced in a different currency to the menu.
    #[error("Drink '{0}' is priced in {1}, but the menu currency is {2}")]
    CurrencyMismatch(String, &'static str, &'static str),
}

/// A catalogue of drinks priced in a single currency.
#[derive(Debug, Clone)]
pub struct Menu {
    /// Drinks keyed by their stable menu key.
    drinks: SlotMap<DrinkKey, Drink>,

    /// Lookup from fixture identifier to menu key.
    keys_by_id: FxHashMap<String, DrinkKey>,

    /// Menu keys sorted by drink name for display.
    display_order: Vec<DrinkKey>,

    /// Currency every drink on the menu is priced in.
    currency: &'static Currency,
}

impl Menu {
    /// Builds a menu from `(identifier, drink)` pairs.
    ///
    /// A later entry with the same identifier replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::CurrencyMismatch`] if any drink is priced in a
    /// currency other than `currency`.
    pub fn with_drinks(
        entries: impl IntoIterator<Item = (String, Drink)>,
        currency: &'static Currency,
    ) -> Result<Self, MenuError> {
        let mut drinks = SlotMap::with_key();
        let mut keys_by_id = FxHashMap::default();

        for (id, drink) in entries {
            let drink_currency = drink.price.currency();

            if drink_currency != currency {
                return Err(MenuError::CurrencyMismatch(
                    id,
                    drink_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            let key = drinks.insert(drink);

            if let Some(previous) = keys_by_id.insert(id, key) {
                drinks.remove(previous);
            }
        }

        let mut display_order: Vec<DrinkKey> = drinks.keys().collect();

        display_order.sort_by(|left, right| {
            let left_name = drinks.get(*left).map(|drink| drink.name.as_str());
            let right_name = drinks.get(*right).map(|drink| drink.name.as_str());

            left_name.cmp(&right_name)
        });

        Ok(Self {
            drinks,
            keys_by_id,
            display_order,
            currency,
        })
    }

    /// The drink for a menu key, if it is still on the menu.
    pub fn drink(&self, key: DrinkKey) -> Option<&Drink> {
        self.drinks.get(key)
    }

    /// The menu key for a fixture identifier such as `latte`.
    pub fn key_for(&self, id: &str) -> Option<DrinkKey> {
        self.keys_by_id.get(id).copied()
    }

    /// Iterates over the menu in display order, sorted by drink name.
    pub fn iter(&self) -> impl Iterator<Item = (DrinkKey, &Drink)> {
        self.display_order
            .iter()
            .filter_map(|key| self.drinks.get(*key).map(|drink| (*key, drink)))
    }

    /// Number of drinks on the menu.
    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    /// Whether the menu has no drinks.
    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    /// The currency every drink on the menu is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{self, Currency},
    };
    use testresult::TestResult;

    use super::{Category, Drink, Menu, MenuError};

    fn drink(name: &str, category: Category, minor_units: i64, currency: &'static Currency) -> Drink {
        Drink {
            name: name.to_string(),
            category,
            price: Money::from_minor(minor_units, currency),
        }
    }

    #[test]
    fn iterates_in_name_order() -> TestResult {
        let menu = Menu::with_drinks(
            [
                ("latte".to_string(), drink("Latte", Category::Coffee, 450, iso::USD)),
                ("earl-grey".to_string(), drink("Earl Grey", Category::Tea, 325, iso::USD)),
                ("cold-brew".to_string(), drink("Cold Brew", Category::ColdDrinks, 400, iso::USD)),
            ],
            iso::USD,
        )?;

        let names: Vec<&str> = menu.iter().map(|(_, drink)| drink.name.as_str()).collect();

        assert_eq!(names, vec!["Cold Brew", "Earl Grey", "Latte"]);

        Ok(())
    }

    #[test]
    fn looks_up_drinks_by_identifier() -> TestResult {
        let menu = Menu::with_drinks(
            [("latte".to_string(), drink("Latte", Category::Coffee, 450, iso::USD))],
            iso::USD,
        )?;

        let key = menu.key_for("latte").ok_or("Latte should be on the menu")?;
        let latte = menu.drink(key).ok_or("Key should resolve to a drink")?;

        assert_eq!(latte.name, "Latte");
        assert_eq!(latte.category, Category::Coffee);
        assert!(menu.key_for("flat-white").is_none());

        Ok(())
    }

    #[test]
    fn rejects_mixed_currencies() {
        let result = Menu::with_drinks(
            [
                ("latte".to_string(), drink("Latte", Category::Coffee, 450, iso::USD)),
                ("earl-grey".to_string(), drink("Earl Grey", Category::Tea, 325, iso::GBP)),
            ],
            iso::USD,
        );

        assert_eq!(
            result.err(),
            Some(MenuError::CurrencyMismatch("earl-grey".to_string(), "GBP", "USD")),
            "GBP drink on a USD menu should be rejected"
        );
    }

    #[test]
    fn later_duplicate_identifier_replaces_earlier() -> TestResult {
        let menu = Menu::with_drinks(
            [
                ("latte".to_string(), drink("Latte", Category::Coffee, 450, iso::USD)),
                ("latte".to_string(), drink("Oat Latte", Category::Coffee, 500, iso::USD)),
            ],
            iso::USD,
        )?;

        let key = menu.key_for("latte").ok_or("Latte should be on the menu")?;
        let latte = menu.drink(key).ok_or("Key should resolve to a drink")?;

        assert_eq!(menu.len(), 1);
        assert_eq!(latte.name, "Oat Latte");
        assert_eq!(latte.price, Money::from_minor(500, iso::USD));

        Ok(())
    }

    #[test]
    fn empty_menu_is_empty() -> TestResult {
        let menu = Menu::with_drinks([], iso::USD)?;

        assert!(menu.is_empty());
        assert_eq!(menu.len(), 0);
        assert_eq!(menu.iter().count(), 0);

        Ok(())
    }
}
