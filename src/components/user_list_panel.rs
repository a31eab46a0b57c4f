//! Roster panel listing local identities with selection and delete controls.

use leptos::prelude::*;

use crate::components::user_form::UserForm;
use crate::state::roster::RosterState;

/// Panel showing the current selection, the roster, and the create form.
///
/// Selection is exclusive: checking one identity unchecks whichever was
/// active before, and unchecking the active one leaves nothing selected.
#[component]
pub fn UserListPanel() -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();

    let current_name = move || roster.get().selected.name;
    let current_color = move || roster.get().selected.color;

    view! {
        <div class="user-panel">
            <h2 class="user-panel__current">{move || format!("Current user: {}", current_name())}</h2>
            <h2 class="user-panel__current">{move || format!("Current color: {}", current_color())}</h2>

            <h2 class="user-panel__heading">"Users online"</h2>
            <div class="user-panel__list">
                {move || {
                    roster
                        .get()
                        .users
                        .iter()
                        .map(|user| {
                            let color = user.color.clone();
                            let name = user.name.clone();
                            let checked_user = user.clone();
                            let toggled_user = user.clone();
                            let deleted_name = user.name.clone();
                            let is_selected = move || roster.get().selected == checked_user;
                            view! {
                                <div class="user-panel__row">
                                    <span class="user-panel__name" style:color=color>
                                        {name}
                                    </span>
                                    <input
                                        type="checkbox"
                                        prop:checked=is_selected
                                        on:change=move |_| {
                                            let user = toggled_user.clone();
                                            roster.update(|r| {
                                                if r.selected == user {
                                                    r.clear_selection();
                                                } else {
                                                    r.select(user);
                                                }
                                            });
                                        }
                                    />
                                    <button
                                        class="btn user-panel__delete"
                                        on:click=move |_| roster.update(|r| r.delete_user(&deleted_name))
                                    >
                                        "Delete user"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <UserForm/>
        </div>
    }
}
