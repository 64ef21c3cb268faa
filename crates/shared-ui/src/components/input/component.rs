use dioxus::prelude::*;

/// Text input bound to a caller-owned value.
#[component]
pub fn Input(
    #[props(default = String::from("text"))] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] oninput: Option<EventHandler<FormEvent>>,
    #[props(default = false)] invalid: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            class: if invalid { "input invalid" } else { "input" },
            r#type,
            placeholder,
            value,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
