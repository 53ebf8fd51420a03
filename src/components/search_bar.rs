//! Search input for the explore page.

use dioxus::prelude::*;
use inkstream_ui::{Button, ButtonVariant};

#[component]
pub fn SearchBar(
    /// Current search term
    value: String,
    /// Fired on every keystroke
    oninput: EventHandler<String>,
    /// Fired when the user submits the search
    onsearch: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "search-bar",
            input {
                class: "field-input",
                r#type: "search",
                placeholder: "Search posts...",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        onsearch.call(());
                    }
                },
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| onsearch.call(()),
                "Search"
            }
        }
    }
}
