use leptos::prelude::*;

use cuppa::events::CartEvent;

/// Loyalty preview shown above the order total.
pub(super) fn earned_callout(points_earned: u64) -> String {
    format!("You'll earn {points_earned} points! ⭐")
}

/// Balance the account will hold once the earned points land.
pub(super) fn projected_line(points_projected: u64) -> String {
    format!("Total: {points_projected} pts")
}

#[component]
pub(super) fn CartSummary(
    total: String,
    points_earned: u64,
    points_projected: u64,
    on_event: Callback<CartEvent>,
) -> impl IntoView {
    view! {
        <div class="cart-summary">
            <div class="cart-loyalty-callout">
                <p class="cart-loyalty-earned">{earned_callout(points_earned)}</p>
                <p class="cart-loyalty-projected">{projected_line(points_projected)}</p>
            </div>
            <p class="cart-summary-row cart-summary-total">
                <span>"Total"</span>
                <span>{total}</span>
            </p>
            <button
                type="button"
                class="cart-checkout-button"
                on:click=move |_| on_event.run(CartEvent::Checkout)
            >
                "Proceed to Checkout"
            </button>
        </div>
    }
}
