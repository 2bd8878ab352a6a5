//! End-to-end order pricing tests against the demo menu fixture

use cuppa::{
    cart::{Cart, CartItem},
    customization::{Customization, Size},
    fixtures::load_menu_file,
    loyalty::{points_earned, projected_balance},
    menu::Menu,
    pricing::cart_total,
    receipt::OrderSummary,
};
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

fn order_line(
    menu: &Menu,
    id: &str,
    drink_id: &str,
    size: Size,
    extras: &[&str],
    quantity: u32,
) -> Option<CartItem> {
    Some(CartItem {
        id: id.to_string(),
        drink: menu.key_for(drink_id)?,
        customization: Customization {
            size,
            milk: "Whole Milk".to_string(),
            ice: "Regular Ice".to_string(),
            extras: extras.iter().map(ToString::to_string).collect(),
        },
        quantity,
    })
}

#[test]
fn demo_fixture_loads_a_sorted_usd_menu() -> TestResult {
    let menu = load_menu_file("./fixtures", "demo")?;

    let names: Vec<&str> = menu.iter().map(|(_, drink)| drink.name.as_str()).collect();

    assert_eq!(menu.len(), 8);
    assert_eq!(menu.currency(), USD);
    assert_eq!(
        names,
        vec![
            "Butter Croissant",
            "Cappuccino",
            "Chocolate Chip Cookie",
            "Cold Brew",
            "Earl Grey",
            "Latte",
            "Matcha Latte",
            "Sparkling Lemonade",
        ]
    );

    Ok(())
}

#[test]
fn demo_order_walkthrough() -> TestResult {
    // A large latte with an extra shot, two medium matcha lattes, and a
    // cookie where the large size adds nothing but two extras do:
    //
    //   4.50 + 1.00 + 0.50          =  6.00
    //   (4.75 + 0.50) * 2           = 10.50
    //   2.75 + 0.50 + 0.50          =  3.75
    //                         total = 20.25
    let menu = load_menu_file("./fixtures", "demo")?;

    let cart = Cart::with_items(
        [
            order_line(&menu, "line-1", "latte", Size::Large, &["Extra Shot"], 1)
                .ok_or("Latte should be on the menu")?,
            order_line(&menu, "line-2", "matcha-latte", Size::Medium, &[], 2)
                .ok_or("Matcha Latte should be on the menu")?,
            order_line(
                &menu,
                "line-3",
                "chocolate-chip-cookie",
                Size::Large,
                &["Extra Shot", "Whipped Cream"],
                1,
            )
            .ok_or("Chocolate Chip Cookie should be on the menu")?,
        ],
        menu.currency(),
    )?;

    let total = cart_total(&menu, &cart)?;

    assert_eq!(total, Money::from_minor(20_25, USD));
    assert_eq!(points_earned(total.to_minor_units()), 20);
    assert_eq!(projected_balance(10, 20), 30);

    let summary = OrderSummary::build(&menu, &cart, 10)?;

    assert_eq!(summary.total(), total);
    assert_eq!(summary.points_earned(), 20);
    assert_eq!(summary.points_balance(), 30);

    let mut buffer = Vec::new();
    summary.write_to(&mut buffer)?;
    let output = String::from_utf8(buffer)?;

    assert!(
        output.contains("Large • Whole Milk • Regular Ice"),
        "options should be rendered"
    );
    assert!(
        output.contains("+ Extra Shot, Whipped Cream"),
        "extras should be rendered"
    );
    assert!(output.contains("$20.25"), "the order total should be rendered");

    Ok(())
}

#[test]
fn a_single_snack_order_floors_its_points() -> TestResult {
    // 2.75 + two 0.50 extras = 3.75, which earns 3 whole points.
    let menu = load_menu_file("./fixtures", "demo")?;

    let cart = Cart::with_items(
        [order_line(
            &menu,
            "line-1",
            "chocolate-chip-cookie",
            Size::Small,
            &["Extra Shot", "Whipped Cream"],
            1,
        )
        .ok_or("Chocolate Chip Cookie should be on the menu")?],
        menu.currency(),
    )?;

    let total = cart_total(&menu, &cart)?;
    let earned = points_earned(total.to_minor_units());

    assert_eq!(total, Money::from_minor(3_75, USD));
    assert_eq!(earned, 3);
    assert_eq!(projected_balance(10, earned), 13);

    Ok(())
}
