//! Leptos Cuppa Demo Application

use std::sync::Arc;

use leptos::prelude::*;

use cuppa::{
    cart::{Cart, CartItem},
    customization::{Customization, Size},
    events::CartEvent,
    fixtures,
    loyalty,
    menu::Menu,
    pricing,
};

mod cart;
mod money;

const MENU_FIXTURE_YAML: &str = include_str!("../../core/fixtures/menu/demo.yml");

/// Loyalty points the demo account starts with.
const STARTING_LOYALTY_POINTS: u64 = 25;

/// Parsed application fixtures/state used by the UI.
#[derive(Debug)]
struct AppData {
    /// Menu the cart lines refer to.
    menu: Arc<Menu>,
}

impl AppData {
    fn load() -> Result<Self, String> {
        let menu = fixtures::menu::load_menu(MENU_FIXTURE_YAML)
            .map_err(|error| format!("Failed to load menu fixture: {error}"))?;

        Ok(Self {
            menu: Arc::new(menu),
        })
    }
}

/// Cart lines the demo starts with, so the panel has something to show.
fn seed_cart(menu: &Menu) -> Vec<CartItem> {
    let mut entries = Vec::new();

    if let Some(latte) = menu.key_for("latte") {
        entries.push(CartItem {
            id: "latte-large-oat".to_string(),
            drink: latte,
            customization: Customization {
                size: Size::Large,
                milk: "Oat Milk".to_string(),
                ice: "No Ice".to_string(),
                extras: vec!["Extra Shot".to_string()],
            },
            quantity: 1,
        });
    }

    if let Some(matcha) = menu.key_for("matcha-latte") {
        entries.push(CartItem {
            id: "matcha-medium".to_string(),
            drink: matcha,
            customization: Customization {
                size: Size::Medium,
                milk: "Whole Milk".to_string(),
                ice: "Regular Ice".to_string(),
                extras: vec![],
            },
            quantity: 2,
        });
    }

    if let Some(cookie) = menu.key_for("chocolate-chip-cookie") {
        entries.push(CartItem {
            id: "cookie".to_string(),
            drink: cookie,
            customization: Customization {
                size: Size::Small,
                milk: "No Milk".to_string(),
                ice: "No Ice".to_string(),
                extras: vec![],
            },
            quantity: 1,
        });
    }

    entries
}

/// Order total in minor units for the current cart lines.
fn order_total_minor(menu: &Menu, entries: &[CartItem]) -> i64 {
    let Ok(order) = Cart::with_items(entries.to_vec(), menu.currency()) else {
        return 0;
    };

    pricing::cart_total(menu, &order).map_or(0, |total| total.to_minor_units())
}

fn set_line_quantity(entries: &mut [CartItem], id: &str, quantity: u32) {
    if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
        entry.quantity = quantity;
    }
}

fn remove_line(entries: &mut Vec<CartItem>, id: &str) {
    entries.retain(|entry| entry.id != id);
}

fn line_drink_name(menu: &Menu, entries: &[CartItem], id: &str) -> String {
    entries
        .iter()
        .find(|entry| entry.id == id)
        .and_then(|entry| menu.drink(entry.drink))
        .map_or_else(|| "item".to_string(), |drink| drink.name.clone())
}

/// Applies one cart event to the host-owned signals.
///
/// A quantity of zero removes the line; the view sends quantities unclamped
/// and leaves that decision here.
fn apply_cart_event(
    menu: &Menu,
    cart_items: RwSignal<Vec<CartItem>>,
    loyalty_points: RwSignal<u64>,
    live_message: RwSignal<(u64, String)>,
    event: CartEvent,
) {
    match event {
        CartEvent::UpdateQuantity { id, quantity } => {
            let name = line_drink_name(menu, &cart_items.get_untracked(), &id);

            if quantity == 0 {
                cart_items.update(|entries| remove_line(entries, &id));
                announce(live_message, format!("Removed {name} from cart."));
            } else {
                cart_items.update(|entries| set_line_quantity(entries, &id, quantity));
                announce(live_message, format!("Set {name} quantity to {quantity}."));
            }
        }
        CartEvent::Remove { id } => {
            let name = line_drink_name(menu, &cart_items.get_untracked(), &id);

            cart_items.update(|entries| remove_line(entries, &id));
            announce(live_message, format!("Removed {name} from cart."));
        }
        CartEvent::Checkout => {
            let earned =
                loyalty::points_earned(order_total_minor(menu, &cart_items.get_untracked()));

            loyalty_points.update(|balance| *balance = balance.saturating_add(earned));
            cart_items.update(|entries| entries.clear());
            announce(
                live_message,
                format!("Order placed. You earned {earned} points!"),
            );
        }
        CartEvent::ContinueShopping => {
            if cart_items.get_untracked().is_empty() {
                cart_items.set(seed_cart(menu));
                announce(live_message, "Restocked the demo cart.".to_string());
            }
        }
    }
}

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let menu = app_data.menu;
            let cart_items = RwSignal::new(seed_cart(&menu));
            let loyalty_points = RwSignal::new(STARTING_LOYALTY_POINTS);
            let live_message = RwSignal::new((0_u64, String::new()));

            let total_menu = Arc::clone(&menu);
            let total_minor = Signal::derive(move || {
                cart_items.with(|entries| order_total_minor(&total_menu, entries))
            });

            let event_menu = Arc::clone(&menu);
            let on_event = Callback::new(move |event: CartEvent| {
                apply_cart_event(&event_menu, cart_items, loyalty_points, live_message, event);
            });

            view! {
                <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || live_message.get().1}
                    </p>
                    <div class="mx-auto mb-6 max-w-5xl">
                        <h1 class="text-2xl font-semibold tracking-tight">"Cuppa Demo"</h1>
                    </div>
                    <div class="mx-auto max-w-2xl">
                        <cart::CartPanel
                            menu=Arc::clone(&menu)
                            entries=cart_items
                            total_minor=total_minor
                            loyalty_points=loyalty_points
                            on_event=on_event
                        />
                    </div>
                </main>
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
                <div class="mx-auto mb-6 max-w-5xl">
                    <h1 class="text-2xl font-semibold tracking-tight">"Cuppa Demo"</h1>
                </div>
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

/// Demo entry point.
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}
