//! Avatar image with an initials fallback.

use dioxus::prelude::*;

/// Round avatar; renders the profile's image URL when present and an
/// initials disc otherwise.
#[component]
pub fn Avatar(
    /// Display name, used for alt text and the fallback initials
    name: String,
    /// Avatar image URL, if any
    #[props(default = None)]
    url: Option<String>,
    /// Diameter in pixels
    #[props(default = 40)]
    size: u32,
) -> Element {
    let style = format!("width: {size}px; height: {size}px;");

    match url {
        Some(url) if !url.is_empty() => rsx! {
            img {
                class: "avatar",
                style: "{style}",
                src: "{url}",
                alt: "{name}",
            }
        },
        _ => {
            let initials: String = name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .take(2)
                .collect::<String>()
                .to_uppercase();
            rsx! {
                span {
                    class: "avatar-fallback",
                    style: "{style} font-size: {size / 2}px;",
                    "{initials}"
                }
            }
        }
    }
}
