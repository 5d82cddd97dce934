//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::chat_widget::ChatWidget;
use crate::config::AssistantConfig;
use crate::state::assistant::AssistantState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared assistant state context and mounts the floating
/// chat widget. The endpoint is injected here so the widget itself never
/// reads the environment.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let assistant = RwSignal::new(AssistantState::default());
    provide_context(assistant);

    view! {
        <Stylesheet id="leptos" href="/pkg/rover-assistant.css"/>
        <Title text="Deakin Rover"/>

        <ChatWidget config=AssistantConfig::default()/>
    }
}
