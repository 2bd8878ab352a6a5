//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    cart::Cart,
    customization::{Customization, Size},
    menu::{Category, Drink, DrinkKey, Menu},
};

/// Surcharge for a medium drink, in minor units.
pub const MEDIUM_SURCHARGE_MINOR: i64 = 50;

/// Surcharge for a large drink, in minor units.
pub const LARGE_SURCHARGE_MINOR: i64 = 100;

/// Surcharge per extra, in minor units.
pub const EXTRA_SURCHARGE_MINOR: i64 = 50;

/// Errors related to totalling a cart.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A cart line refers to a drink that is not on the menu.
    #[error("Drink not found on the menu")]
    MissingDrink(DrinkKey),

    /// Money arithmetic or currency mismatch error.
    #[error(transparent)]
    MoneyError(#[from] MoneyError),
}

/// Price of a single serving with its customization applied.
///
/// Size surcharges apply to drinks only; snacks are priced flat at every
/// size. Each extra adds a fixed surcharge regardless of category.
pub fn unit_price(drink: &Drink, customization: &Customization) -> Money<'static, Currency> {
    let mut minor_units = drink.price.to_minor_units();

    if drink.category != Category::Snacks {
        minor_units = minor_units.saturating_add(match customization.size {
            Size::Small => 0,
            Size::Medium => MEDIUM_SURCHARGE_MINOR,
            Size::Large => LARGE_SURCHARGE_MINOR,
        });
    }

    let extras = i64::try_from(customization.extras.len()).unwrap_or(i64::MAX);
    minor_units = minor_units.saturating_add(extras.saturating_mul(EXTRA_SURCHARGE_MINOR));

    Money::from_minor(minor_units, drink.price.currency())
}

/// Total for one cart line: the unit price multiplied by the quantity.
pub fn line_total(
    drink: &Drink,
    customization: &Customization,
    quantity: u32,
) -> Money<'static, Currency> {
    let unit = unit_price(drink, customization);
    let minor_units = unit.to_minor_units().saturating_mul(i64::from(quantity));

    Money::from_minor(minor_units, unit.currency())
}

/// Total for a whole cart, summed over its line totals.
///
/// An empty cart totals zero in the cart's currency.
///
/// # Errors
///
/// Returns a `PricingError` if a line refers to a drink that is not on the
/// menu, or if there was a money arithmetic error.
pub fn cart_total(menu: &Menu, cart: &Cart) -> Result<Money<'static, Currency>, PricingError> {
    cart.iter()
        .try_fold(Money::from_minor(0, cart.currency()), |total, item| {
            let drink = menu
                .drink(item.drink)
                .ok_or(PricingError::MissingDrink(item.drink))?;

            Ok(total.add(line_total(drink, &item.customization, item.quantity))?)
        })
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::{
        cart::{Cart, CartItem},
        customization::{Customization, Size},
        menu::{Category, Drink, Menu},
    };

    use super::*;

    fn drink(name: &str, category: Category, minor_units: i64) -> Drink {
        Drink {
            name: name.to_string(),
            category,
            price: Money::from_minor(minor_units, iso::USD),
        }
    }

    fn customization(size: Size, extras: &[&str]) -> Customization {
        Customization {
            size,
            milk: "Whole Milk".to_string(),
            ice: "Regular Ice".to_string(),
            extras: extras.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn small_drinks_have_no_size_surcharge() {
        let latte = drink("Latte", Category::Coffee, 450);

        let price = unit_price(&latte, &customization(Size::Small, &[]));

        assert_eq!(price, Money::from_minor(450, iso::USD));
    }

    #[test]
    fn medium_and_large_surcharges_apply_to_drinks() {
        let latte = drink("Latte", Category::Coffee, 450);
        let earl_grey = drink("Earl Grey", Category::Tea, 325);
        let cold_brew = drink("Cold Brew", Category::ColdDrinks, 400);

        assert_eq!(
            unit_price(&latte, &customization(Size::Medium, &[])),
            Money::from_minor(500, iso::USD)
        );
        assert_eq!(
            unit_price(&earl_grey, &customization(Size::Large, &[])),
            Money::from_minor(425, iso::USD)
        );
        assert_eq!(
            unit_price(&cold_brew, &customization(Size::Large, &[])),
            Money::from_minor(500, iso::USD)
        );
    }

    #[test]
    fn snacks_are_priced_flat_at_every_size() {
        let cookie = drink("Chocolate Chip Cookie", Category::Snacks, 275);

        let small = unit_price(&cookie, &customization(Size::Small, &[]));
        let medium = unit_price(&cookie, &customization(Size::Medium, &[]));
        let large = unit_price(&cookie, &customization(Size::Large, &[]));

        assert_eq!(small, Money::from_minor(275, iso::USD));
        assert_eq!(medium, small);
        assert_eq!(large, small);
    }

    #[test]
    fn extras_are_charged_per_extra_for_every_category() {
        let latte = drink("Latte", Category::Coffee, 450);
        let cookie = drink("Chocolate Chip Cookie", Category::Snacks, 275);

        assert_eq!(
            unit_price(&latte, &customization(Size::Small, &["Extra Shot"])),
            Money::from_minor(500, iso::USD)
        );
        assert_eq!(
            unit_price(&cookie, &customization(Size::Small, &["Extra Shot", "Whipped Cream"])),
            Money::from_minor(375, iso::USD)
        );
    }

    #[test]
    fn line_total_multiplies_by_quantity() {
        let latte = drink("Latte", Category::Coffee, 450);
        let options = customization(Size::Large, &["Extra Shot"]);

        let total = line_total(&latte, &options, 3);

        assert_eq!(total, Money::from_minor(1800, iso::USD));
    }

    #[test]
    fn line_total_with_zero_quantity_is_zero() {
        let latte = drink("Latte", Category::Coffee, 450);

        let total = line_total(&latte, &customization(Size::Small, &[]), 0);

        assert_eq!(total, Money::from_minor(0, iso::USD));
    }

    #[test]
    fn cart_total_sums_line_totals() -> TestResult {
        let menu = Menu::with_drinks(
            [
                ("latte".to_string(), drink("Latte", Category::Coffee, 450)),
                (
                    "matcha-latte".to_string(),
                    drink("Matcha Latte", Category::Tea, 475),
                ),
            ],
            iso::USD,
        )?;

        let latte = menu.key_for("latte").ok_or("Latte should be on the menu")?;
        let matcha = menu
            .key_for("matcha-latte")
            .ok_or("Matcha Latte should be on the menu")?;

        let cart = Cart::with_items(
            [
                CartItem {
                    id: "line-1".to_string(),
                    drink: latte,
                    customization: customization(Size::Large, &["Extra Shot"]),
                    quantity: 1,
                },
                CartItem {
                    id: "line-2".to_string(),
                    drink: matcha,
                    customization: customization(Size::Medium, &[]),
                    quantity: 2,
                },
            ],
            iso::USD,
        )?;

        assert_eq!(cart_total(&menu, &cart)?, Money::from_minor(1650, iso::USD));

        Ok(())
    }

    #[test]
    fn cart_total_of_empty_cart_is_zero() -> TestResult {
        let menu = Menu::with_drinks([], iso::USD)?;
        let cart = Cart::new(iso::USD);

        assert_eq!(cart_total(&menu, &cart)?, Money::from_minor(0, iso::USD));

        Ok(())
    }

    #[test]
    fn cart_total_reports_missing_drinks() -> TestResult {
        let menu = Menu::with_drinks([], iso::USD)?;

        let cart = Cart::with_items(
            [CartItem {
                id: "line-1".to_string(),
                drink: DrinkKey::default(),
                customization: customization(Size::Small, &[]),
                quantity: 1,
            }],
            iso::USD,
        )?;

        let result = cart_total(&menu, &cart);

        assert!(
            matches!(result, Err(PricingError::MissingDrink(_))),
            "a line with an unknown drink key should fail to total"
        );

        Ok(())
    }
}
