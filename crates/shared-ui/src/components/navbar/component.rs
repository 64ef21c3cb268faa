use dioxus::prelude::*;

/// Top navigation bar.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "navbar", {children} }
    }
}

/// Brand slot on the left edge of the navbar.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        div { class: "navbar-brand", {children} }
    }
}

/// Link group on the right edge of the navbar.
#[component]
pub fn NavbarLinks(children: Element) -> Element {
    rsx! {
        nav { class: "navbar-links", {children} }
    }
}
