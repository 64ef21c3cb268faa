use dioxus::prelude::*;

/// Table for list pages.
///
/// Column captions come in as a plain list and the header is rendered here;
/// callers compose only the rows. Every list in this app has a fixed column
/// set, so there is no need for a composable header.
#[component]
pub fn DataTable(columns: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for caption in columns {
                            th { "{caption}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

/// Table row, navigable when an `onclick` is given.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    match onclick {
        Some(handler) => rsx! {
            tr {
                class: "data-table-row clickable",
                onclick: move |evt| handler.call(evt),
                {children}
            }
        },
        None => rsx! {
            tr { class: "data-table-row", {children} }
        },
    }
}

/// Table data cell.
#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
