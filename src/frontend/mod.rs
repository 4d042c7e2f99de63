//! This module contains the frontend components for the order page.
use crate::catalog::ToppingCatalog;
use crate::form::{OrderForm, ServerNote};
use crate::schema::Field;
use crate::submit::{OrderPayload, place_order};
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ### OrderPage Component
/// Renders the pizza order form: full name input, size select, one
/// checkbox per catalog topping, and a submit control that stays disabled
/// until the whole form validates.
///
/// ### Parameters
/// `form` the reactive form state
/// `catalog` the immutable topping reference list
#[component]
pub fn OrderPage(form: OrderForm, catalog: ToppingCatalog) -> impl IntoView {
    let values = form.values;
    let errors = form.errors;
    let server_note = form.server_note;
    let enabled = form.enabled;

    let name_form = form.clone();
    let on_name = move |event| name_form.edit_field(Field::FullName, event_target_value(&event));

    let size_form = form.clone();
    let on_size = move |event| size_form.edit_field(Field::Size, event_target_value(&event));

    let submit_form = form.clone();
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let payload = OrderPayload::from(values.get_untracked());
        let form = submit_form.clone();
        // No cancellation: a reply from an older attempt that lands late
        // simply overwrites the note
        spawn_local(async move {
            let note = place_order(&payload).await;
            log!("order reply: {note:?}");
            form.record_note(note);
            form.reset_values();
        });
    };

    let topping_rows = catalog
        .toppings()
        .iter()
        .map(|topping| {
            let id = topping.id;
            let toggle_form = form.clone();
            view! {
                <label>
                    <input
                        type="checkbox"
                        name=id
                        prop:checked=move || values.get().has_topping(id)
                        on:change=move |event| {
                            toggle_form.toggle_topping(id, event_target_checked(&event))
                        }
                    />
                    {topping.text}
                    <br />
                </label>
            }
        })
        .collect_view();

    view! {
        <form on:submit=on_submit>
            <h2>"Order Your Pizza"</h2>
            {move || {
                server_note
                    .get()
                    .map(|note| {
                        let (class, message) = match note {
                            ServerNote::Success(message) => ("success", message),
                            ServerNote::Failure(message) => ("failure", message),
                        };
                        view! { <div class=class>{message}</div> }
                    })
            }}

            <div class="input-group">
                <label for="fullName">"Full Name"</label>
                <br />
                <input
                    id="fullName"
                    type="text"
                    placeholder="Type full name"
                    prop:value=move || values.get().full_name
                    on:input=on_name
                />
                <Show when=move || !errors.get().full_name.is_empty()>
                    <div class="error">{move || errors.get().full_name}</div>
                </Show>
            </div>

            <div class="input-group">
                <label for="size">"Size"</label>
                <br />
                <select id="size" prop:value=move || values.get().size on:change=on_size>
                    <option value="">"----Choose Size----"</option>
                    <option value="S">"Small"</option>
                    <option value="M">"Medium"</option>
                    <option value="L">"Large"</option>
                </select>
                <Show when=move || !errors.get().size.is_empty()>
                    <div class="error">{move || errors.get().size}</div>
                </Show>
            </div>

            <div class="input-group">{topping_rows}</div>

            <input type="submit" disabled=move || !enabled.get() />
        </form>
    }
}
