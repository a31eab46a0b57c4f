//! Create-a-user form with name and color fields.

use leptos::prelude::*;

use crate::state::roster::RosterState;

/// Form for adding a new identity to the roster.
///
/// The fields start prefilled with the first seeded identity so a bare click
/// still creates a usable entry.
#[component]
pub fn UserForm() -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();

    let name = RwSignal::new("Matt".to_owned());
    let color = RwSignal::new("red".to_owned());

    let on_create = move |_| {
        roster.update(|r| r.create_user(&name.get(), &color.get()));
    };

    view! {
        <div class="user-form">
            <h2>"Create a user"</h2>
            <input
                class="user-form__name"
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="user-form__color"
                type="text"
                placeholder="Color"
                prop:value=move || color.get()
                on:input=move |ev| color.set(event_target_value(&ev))
            />
            <button class="btn user-form__create" on:click=on_create>
                "Create user"
            </button>
        </div>
    }
}
