use std::sync::Arc;

use leptos::prelude::*;

use cuppa::{cart::CartItem, events::CartEvent, loyalty, menu::Menu, pricing};

use crate::money::format_minor;

pub(super) mod line_item;
pub(super) mod summary;

use line_item::CartLine;
use summary::CartSummary;

/// Render model for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CartLineView {
    /// Cart line identifier (used for quantity and remove events).
    id: String,

    /// Drink name.
    name: String,

    /// Size, milk and ice summary.
    options: String,

    /// Extras summary, present only when the line has extras.
    extras: Option<String>,

    /// Line quantity.
    quantity: u32,

    /// Unit price times quantity.
    line_total: String,
}

/// Render model for the populated cart.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CartViewModel {
    /// One entry per cart line, in cart order.
    lines: Vec<CartLineView>,

    /// Order total as supplied by the host.
    total: String,

    /// Points this order will earn at checkout.
    points_earned: u64,

    /// Point balance once the earned points are added.
    points_projected: u64,
}

fn build_cart_view(
    menu: &Menu,
    entries: &[CartItem],
    total_minor: i64,
    loyalty_points: u64,
) -> Result<CartViewModel, String> {
    let currency = menu.currency();
    let mut lines: Vec<CartLineView> = Vec::new();

    for entry in entries {
        let drink = menu
            .drink(entry.drink)
            .ok_or_else(|| format!("Drink not found for cart line: {}", entry.id))?;

        let line_total = pricing::line_total(drink, &entry.customization, entry.quantity);

        lines.push(CartLineView {
            id: entry.id.clone(),
            name: drink.name.clone(),
            options: entry.customization.options_summary(),
            extras: entry
                .customization
                .extras_summary()
                .map(|extras| format!("+{extras}")),
            quantity: entry.quantity,
            line_total: format_minor(line_total.to_minor_units(), currency),
        });
    }

    let points_earned = loyalty::points_earned(total_minor);

    Ok(CartViewModel {
        lines,
        total: format_minor(total_minor, currency),
        points_earned,
        points_projected: loyalty::projected_balance(loyalty_points, points_earned),
    })
}

#[component]
fn CartHeading() -> impl IntoView {
    view! {
        <h2 class="panel-title panel-title-spaced">
            <span class="panel-title-leading cart-title-label">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="cart-title-icon lucide lucide-shopping-bag-icon lucide-shopping-bag"
                    aria-hidden="true"
                >
                    <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"></path>
                    <path d="M3 6h18"></path>
                    <path d="M16 10a4 4 0 0 1-8 0"></path>
                </svg>
                <span>"Your Cart"</span>
            </span>
        </h2>
    }
}

#[component]
fn EmptyCart(on_event: Callback<CartEvent>) -> impl IntoView {
    view! {
        <div class="cart-empty">
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="cart-empty-icon lucide lucide-shopping-bag-icon lucide-shopping-bag"
                aria-hidden="true"
            >
                <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"></path>
                <path d="M3 6h18"></path>
                <path d="M16 10a4 4 0 0 1-8 0"></path>
            </svg>
            <p class="cart-empty-title">"Your cart is empty"</p>
            <p class="cart-empty-hint">"Add some delicious drinks to get started!"</p>
            <button
                type="button"
                class="cart-browse-button"
                on:click=move |_| on_event.run(CartEvent::ContinueShopping)
            >
                "Browse Menu"
            </button>
        </div>
    }
}

#[component]
fn CartBody(cart: CartViewModel, on_event: Callback<CartEvent>) -> impl IntoView {
    view! {
        <div>
            <ul class="cart-lines">
                {cart
                    .lines
                    .into_iter()
                    .map(|line| view! { <CartLine line=line on_event=on_event /> })
                    .collect_view()}
            </ul>
            <CartSummary
                total=cart.total
                points_earned=cart.points_earned
                points_projected=cart.points_projected
                on_event=on_event
            />
        </div>
    }
}

fn render_cart_panel_content(
    menu: &Menu,
    entries: &[CartItem],
    total_minor: i64,
    loyalty_points: u64,
    on_event: Callback<CartEvent>,
) -> AnyView {
    if entries.is_empty() {
        return view! { <EmptyCart on_event=on_event /> }.into_any();
    }

    match build_cart_view(menu, entries, total_minor, loyalty_points) {
        Ok(cart) => view! {
            <CartHeading />
            <div class="panel-card">
                <CartBody cart=cart on_event=on_event />
            </div>
        }
        .into_any(),
        Err(error_message) => view! {
            <CartHeading />
            <div class="panel-card">
                <p class="error-text">{error_message}</p>
            </div>
        }
        .into_any(),
    }
}

/// Cart panel component.
#[component]
pub fn CartPanel(
    /// Menu the cart lines refer to.
    menu: Arc<Menu>,
    /// Cart lines to render, owned by the host.
    #[prop(into)]
    entries: Signal<Vec<CartItem>>,
    /// Order total in minor units, priced by the host.
    #[prop(into)]
    total_minor: Signal<i64>,
    /// Current loyalty point balance.
    #[prop(into)]
    loyalty_points: Signal<u64>,
    /// Receives quantity, removal and navigation events.
    on_event: Callback<CartEvent>,
) -> impl IntoView {
    view! {
        <aside id="cart-panel" class="cart-panel">
            <div class="cart-panel-content">
                {move || {
                    entries
                        .with(|entries| {
                            render_cart_panel_content(
                                &menu,
                                entries,
                                total_minor.get(),
                                loyalty_points.get(),
                                on_event,
                            )
                        })
                }}
            </div>
        </aside>
    }
}
