//! Floating assistant chat widget: toggle bubble, message panel, input row.

use leptos::prelude::*;

use crate::config::AssistantConfig;
use crate::state::assistant::{AssistantState, Sender};

/// Floating chat widget for the rover assistant.
///
/// Renders the toggle bubble and, while open, the conversation panel.
/// Accepted submissions make one POST to the configured endpoint;
/// `AssistantState::loading` admits at most one request in flight.
/// Closing the panel does not cancel a request in flight.
#[component]
pub fn ChatWidget(
    /// Backend configuration, injected by the host.
    #[prop(default = AssistantConfig::default())]
    config: AssistantConfig,
) -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();

    let config = StoredValue::new(config);
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view as the list grows.
    Effect::new(move || {
        let _ = assistant.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_submit = move || {
        let raw = input.get();
        let Some(text) = assistant.try_update(|a| a.begin_exchange(&raw)).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let endpoint = config.get_value().endpoint;
            leptos::task::spawn_local(async move {
                let reply = match crate::net::api::send_chat_message(&endpoint, &text).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        leptos::logging::warn!("assistant request failed: {e}");
                        crate::state::assistant::FALLBACK_REPLY.to_owned()
                    }
                };
                assistant.update(|a| a.finish_exchange(reply));
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
            let _ = config;
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_submit();
        }
    };

    let open = move || assistant.get().open;
    let can_send = move || !input.get().trim().is_empty() && !assistant.get().loading;

    view! {
        <button
            type="button"
            class="chat-widget__toggle"
            on:click=move |_| assistant.update(|a| a.toggle_open())
            title="Rover assistant"
        >
            {move || if open() { "×" } else { "AI" }}
        </button>

        <Show when=open>
            <div class="chat-widget__panel">
                <div class="chat-widget__header">
                    <span class="chat-widget__title">"Deakin Rover Assistant"</span>
                    <button
                        type="button"
                        class="chat-widget__close"
                        on:click=move |_| assistant.update(|a| a.toggle_open())
                    >
                        "×"
                    </button>
                </div>

                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || {
                        assistant
                            .get()
                            .messages
                            .iter()
                            .map(|msg| {
                                let is_user = msg.sender == Sender::User;
                                let text = msg.text.clone();
                                view! {
                                    <div
                                        class="chat-widget__message"
                                        class:chat-widget__message--user=is_user
                                    >
                                        <div class="chat-widget__text">{text}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    {move || {
                        assistant
                            .get()
                            .loading
                            .then(|| view! { <div class="chat-widget__thinking">"Thinking…"</div> })
                    }}
                </div>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Ask about the rover..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary chat-widget__send"
                        on:click=move |_| do_submit()
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
