use leptos::prelude::*;

use cuppa::events::CartEvent;

use super::CartLineView;

/// Event asking the host to lower the line quantity by one.
///
/// The new quantity is sent as-is; zero is the host's cue to drop the line.
pub(super) fn decrement_event(id: &str, quantity: u32) -> CartEvent {
    CartEvent::UpdateQuantity {
        id: id.to_string(),
        quantity: quantity.saturating_sub(1),
    }
}

/// Event asking the host to raise the line quantity by one.
pub(super) fn increment_event(id: &str, quantity: u32) -> CartEvent {
    CartEvent::UpdateQuantity {
        id: id.to_string(),
        quantity: quantity.saturating_add(1),
    }
}

/// Event asking the host to remove the line, whatever its quantity.
pub(super) fn remove_event(id: &str) -> CartEvent {
    CartEvent::Remove { id: id.to_string() }
}

#[component]
fn DecrementButton(
    line_id: String,
    item_name_for_decrement: String,
    quantity: u32,
    on_event: Callback<CartEvent>,
) -> impl IntoView {
    let decrement_button_label = format!("Decrease {item_name_for_decrement} quantity");

    view! {
        <button
            type="button"
            aria-label=decrement_button_label
            class="icon-button icon-button-secondary icon-button-compact"
            on:click=move |_| on_event.run(decrement_event(&line_id, quantity))
        >
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
                class="lucide lucide-minus-icon lucide-minus"
            >
                <path d="M5 12h14"></path>
            </svg>
        </button>
    }
}

#[component]
fn IncrementButton(
    line_id: String,
    item_name_for_increment: String,
    quantity: u32,
    on_event: Callback<CartEvent>,
) -> impl IntoView {
    let increment_button_label = format!("Increase {item_name_for_increment} quantity");

    view! {
        <button
            type="button"
            aria-label=increment_button_label
            class="icon-button icon-button-primary icon-button-compact"
            on:click=move |_| on_event.run(increment_event(&line_id, quantity))
        >
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
                class="lucide lucide-plus-icon lucide-plus"
            >
                <path d="M5 12h14"></path>
                <path d="M12 5v14"></path>
            </svg>
        </button>
    }
}

#[component]
fn RemoveLineButton(
    line_id: String,
    item_name_for_remove: String,
    on_event: Callback<CartEvent>,
) -> impl IntoView {
    let remove_button_label = format!("Remove {item_name_for_remove} from cart");

    view! {
        <button
            type="button"
            aria-label=remove_button_label
            class="icon-button icon-button-secondary icon-button-compact"
            on:click=move |_| on_event.run(remove_event(&line_id))
        >
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
                class="lucide lucide-trash-2-icon lucide-trash-2"
            >
                <path d="M10 11v6"></path>
                <path d="M14 11v6"></path>
                <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"></path>
                <path d="M3 6h18"></path>
                <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"></path>
            </svg>
        </button>
    }
}

#[component]
pub(super) fn CartLine(line: CartLineView, on_event: Callback<CartEvent>) -> impl IntoView {
    let line_id = line.id;
    let decrement_id = line_id.clone();
    let increment_id = line_id.clone();

    let item_name_for_decrement = line.name.clone();
    let item_name_for_increment = line.name.clone();
    let item_name_for_remove = line.name.clone();

    let quantity = line.quantity;

    view! {
        <li>
            <div class="cart-line-content">
                <div>
                    <p class="cart-line-name">{line.name}</p>
                    <p class="cart-line-options">{line.options}</p>
                    {line.extras.map(|extras| view! { <p class="cart-line-extras">{extras}</p> })}
                </div>

                <div class="cart-line-actions">
                    <div class="cart-quantity-controls">
                        <DecrementButton
                            line_id=decrement_id
                            item_name_for_decrement=item_name_for_decrement
                            quantity=quantity
                            on_event=on_event
                        />
                        <span class="cart-quantity-value">{quantity}</span>
                        <IncrementButton
                            line_id=increment_id
                            item_name_for_increment=item_name_for_increment
                            quantity=quantity
                            on_event=on_event
                        />
                    </div>
                    <span class="cart-line-total">{line.line_total}</span>
                    <RemoveLineButton
                        line_id=line_id
                        item_name_for_remove=item_name_for_remove
                        on_event=on_event
                    />
                </div>
            </div>
        </li>
    }
}
