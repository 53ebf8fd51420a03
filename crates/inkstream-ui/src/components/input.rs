//! Input field components
//!
//! Text inputs, textareas, and selects with a shared label/hint layout.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Label text rendered above the field
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Labeled text input
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label { class: "field",
            if let Some(label) = &props.label {
                span { class: "field-label", "{label}" }
            }
            input {
                class: "field-input",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.unwrap_or_default(),
                required: props.required,
                disabled: props.disabled,
                oninput: move |evt| props.oninput.call(evt.value()),
            }
        }
    }
}

/// Properties for the Textarea component
#[derive(Clone, PartialEq, Props)]
pub struct TextareaProps {
    /// Current value
    pub value: String,
    /// Handler called when content changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Label text rendered above the field
    #[props(default)]
    pub label: Option<String>,
    /// Visible rows
    #[props(default = 8)]
    pub rows: i64,
}

/// Labeled multi-line text input
#[component]
pub fn Textarea(props: TextareaProps) -> Element {
    rsx! {
        label { class: "field",
            if let Some(label) = &props.label {
                span { class: "field-label", "{label}" }
            }
            textarea {
                class: "field-input field-textarea",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.unwrap_or_default(),
                oninput: move |evt| props.oninput.call(evt.value()),
            }
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Currently selected value
    pub value: String,
    /// Selectable values
    pub options: Vec<String>,
    /// Handler called when the selection changes
    pub onchange: EventHandler<String>,
    /// Label text rendered above the field
    #[props(default)]
    pub label: Option<String>,
}

/// Labeled select dropdown
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        label { class: "field",
            if let Some(label) = &props.label {
                span { class: "field-label", "{label}" }
            }
            select {
                class: "field-input field-select",
                value: "{props.value}",
                onchange: move |evt| props.onchange.call(evt.value()),
                for option in props.options.iter() {
                    option {
                        value: "{option}",
                        selected: *option == props.value,
                        "{option}"
                    }
                }
            }
        }
    }
}
