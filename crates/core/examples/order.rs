//! Drink Order Summary Example
//!
//! Builds a sample order from a menu fixture and prints it as a table,
//! together with the loyalty points the order earns.
//!
//! Use `-f` to load a menu fixture by name
//! Use `-n` to limit the number of cart lines
//! Use `-b` to set the loyalty balance held before the order

use std::{io, path::Path};

use anyhow::Result;
use clap::Parser;

use cuppa::{
    cart::{Cart, CartItem},
    customization::{Customization, Size},
    fixtures::load_menu_file,
    menu::Menu,
    receipt::OrderSummary,
    utils::ExampleOrderArgs,
};

/// Drink Order Summary Example
pub fn main() -> Result<()> {
    let args = ExampleOrderArgs::parse();

    let base_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    let menu = load_menu_file(base_path, &args.fixture)?;
    let cart = sample_cart(&menu, args.n)?;

    let summary = OrderSummary::build(&menu, &cart, args.balance)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    summary.write_to(&mut handle)?;

    Ok(())
}

/// Builds a cart with one line per drink, cycling through customizations.
fn sample_cart(menu: &Menu, n: Option<usize>) -> Result<Cart> {
    let items: Vec<CartItem> = menu
        .iter()
        .take(n.unwrap_or(menu.len()))
        .enumerate()
        .map(|(index, (key, _))| CartItem {
            id: format!("line-{}", index + 1),
            drink: key,
            customization: sample_customization(index),
            quantity: if index % 2 == 0 { 1 } else { 2 },
        })
        .collect();

    Ok(Cart::with_items(items, menu.currency())?)
}

fn sample_customization(index: usize) -> Customization {
    let size = match index % 3 {
        0 => Size::Small,
        1 => Size::Medium,
        _ => Size::Large,
    };

    let milk = match index % 3 {
        0 => "Whole Milk",
        1 => "Oat Milk",
        _ => "Almond Milk",
    };

    let ice = match index % 3 {
        0 => "Regular Ice",
        1 => "Light Ice",
        _ => "No Ice",
    };

    let extras = if index % 4 == 0 {
        vec!["Extra Shot".to_string()]
    } else {
        vec![]
    };

    Customization {
        size,
        milk: milk.to_string(),
        ice: ice.to_string(),
        extras,
    }
}
