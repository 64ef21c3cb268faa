use dioxus::prelude::*;

/// Form wrapper that prevents default submission before invoking the handler.
#[component]
pub fn Form(#[props(default)] onsubmit: EventHandler<FormEvent>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "form",
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            {children}
        }
    }
}
