//! Menu Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    menu::{Category, Drink, Menu},
};

/// Wrapper for drinks in YAML
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Map of drink identifier -> drink fixture
    pub drinks: FxHashMap<String, DrinkFixture>,
}

/// Drink Fixture
#[derive(Debug, Deserialize)]
pub struct DrinkFixture {
    /// Drink name
    pub name: String,

    /// Menu category (e.g., "coffee")
    pub category: String,

    /// Base price (e.g., "4.50 USD")
    pub price: String,
}

impl TryFrom<DrinkFixture> for Drink {
    type Error = FixtureError;

    fn try_from(fixture: DrinkFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let price = Money::from_minor(minor_units, currency);
        let category = parse_category(&fixture.category)?;

        Ok(Drink {
            name: fixture.name,
            category,
            price,
        })
    }
}

/// Build a [`Menu`] from YAML fixture contents.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed, if it defines no drinks,
/// or if the drinks do not form a valid single-currency menu.
pub fn load_menu(contents: &str) -> Result<Menu, FixtureError> {
    let fixture: MenuFixture = serde_norway::from_str(contents)?;

    if fixture.drinks.is_empty() {
        return Err(FixtureError::NoDrinks);
    }

    let mut currency: Option<&'static Currency> = None;
    let mut entries: Vec<(String, Drink)> = Vec::with_capacity(fixture.drinks.len());

    for (id, drink_fixture) in fixture.drinks {
        let drink: Drink = drink_fixture.try_into()?;

        currency.get_or_insert(drink.price.currency());
        entries.push((id, drink));
    }

    let currency = currency.ok_or(FixtureError::NoDrinks)?;

    Ok(Menu::with_drinks(entries, currency)?)
}

/// Parse price string (e.g., "4.50 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

/// Parse a category string (e.g., "cold-drinks") into a [`Category`]
///
/// # Errors
///
/// Returns an error if the category is not one of `coffee`, `tea`,
/// `cold-drinks` or `snacks`.
pub fn parse_category(s: &str) -> Result<Category, FixtureError> {
    match s {
        "coffee" => Ok(Category::Coffee),
        "tea" => Ok(Category::Tea),
        "cold-drinks" => Ok(Category::ColdDrinks),
        "snacks" => Ok(Category::Snacks),
        other => Err(FixtureError::UnknownCategory(other.to_string())),
    }
}
