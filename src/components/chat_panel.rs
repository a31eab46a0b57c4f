//! Chat panel displaying the message sequence, clear actions, and the composer.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::app::EventSender;
use crate::state::chat::ChatState;
use crate::state::roster::RosterState;
use crate::util::compose::send_chat_message;

/// Chat panel showing the message display sequence and an input for sending
/// new messages under the selected identity.
///
/// The composer is only rendered while an identity is selected; deselecting
/// (or deleting) the active user hides it again.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let roster = expect_context::<RwSignal<RosterState>>();
    let sender = expect_context::<RwSignal<EventSender>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view, but only when one was actually
    // appended. The state signal notifies on clears and duplicate discards
    // too, so the effect gates on the append sequence having moved past the
    // value it last handled.
    let last_scroll_seq = RwSignal::new(0_u64);
    Effect::new(move || {
        let seq = chat.get().scroll_seq;
        if !scroll_seq_advanced(seq, last_scroll_seq.get_untracked()) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }

        last_scroll_seq.set(seq);
    });

    let do_send = move || {
        let author = roster.get().selected;
        if send_chat_message(sender, &input.get(), &author) {
            input.set(String::new());
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let has_selection = move || roster.get().has_selection();

    view! {
        <div class="chat-panel">
            <h1 class="chat-panel__title">"Chat"</h1>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    messages
                        .iter()
                        .map(|msg| {
                            let color = msg.user.color.clone();
                            let name = msg.user.name.clone();
                            let body = msg.body.clone();
                            let clear_label = format!("Delete all messages for {name}");
                            let author = msg.user.name.clone();
                            view! {
                                <div class="chat-panel__message">
                                    <span class="chat-panel__author" style:color=color>
                                        {name}
                                    </span>
                                    <span class="chat-panel__text">{body}</span>
                                    <button
                                        class="btn chat-panel__clear-user"
                                        on:click=move |_| chat.update(|c| c.clear_user(&author))
                                    >
                                        {clear_label}
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__actions">
                <button class="btn chat-panel__clear-all" on:click=move |_| chat.update(|c| c.clear_all())>
                    "Delete all messages"
                </button>
            </div>

            <Show when=has_selection>
                <div class="chat-panel__composer">
                    <h2>"Send Message"</h2>
                    <div class="chat-panel__input-row">
                        <input
                            class="chat-panel__input"
                            type="text"
                            placeholder="Message"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button class="btn btn--primary chat-panel__send" on:click=on_click>
                            "Send message"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Gate for the scroll-to-newest effect.
///
/// Only an append moves the sequence, so equality with the last handled value
/// means nothing new arrived and the scroll position must stay put.
fn scroll_seq_advanced(seq: u64, last_seq: u64) -> bool {
    seq != last_seq
}
