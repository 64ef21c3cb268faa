use dioxus::prelude::*;

/// Form field label.
#[component]
pub fn Label(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "label", {children} }
    }
}
