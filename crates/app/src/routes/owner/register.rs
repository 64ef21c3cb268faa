use api::StoreApi;
use dioxus::prelude::*;
use shared_types::RegisterStoreRequest;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input, Label,
    PageHeader, PageTitle,
};
use validator::Validate;

use crate::routes::Route;

/// Store registration page — an owner claims an existing store by id.
#[component]
pub fn OwnerRegister() -> Element {
    let api = use_context::<StoreApi>();

    let mut store_id_input = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_evt: FormEvent| {
        error_msg.set(None);

        let Ok(store_id) = store_id_input.read().trim().parse::<i64>() else {
            error_msg.set(Some("Enter the numeric store id.".to_string()));
            return;
        };
        let request = RegisterStoreRequest { store_id };
        if request.validate().is_err() {
            error_msg.set(Some("The store id must be positive.".to_string()));
            return;
        }

        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            match api.register_store(&request).await {
                Ok(()) => {
                    navigator().push(Route::OwnerStoreList {});
                }
                Err(err) => {
                    tracing::error!("failed to register store {store_id}: {err}");
                    error_msg.set(Some(err.friendly_message()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        PageHeader {
            PageTitle { "Register a store" }
        }
        Card {
            CardHeader {
                CardTitle { "Claim your store" }
                CardDescription {
                    "Enter the store id printed on your participation letter. "
                    "An administrator reviews the claim before it goes live."
                }
            }
            CardContent {
                Form { onsubmit: handle_submit,
                    div { class: "form-field",
                        Label { "Store id" }
                        Input {
                            r#type: "number",
                            placeholder: "e.g. 42",
                            value: store_id_input(),
                            invalid: error_msg().is_some(),
                            oninput: move |evt: FormEvent| store_id_input.set(evt.value()),
                        }
                        if let Some(message) = error_msg() {
                            p { class: "inline-error", "{message}" }
                        }
                    }
                    Button { disabled: submitting(),
                        if submitting() { "Registering..." } else { "Register" }
                    }
                }
            }
        }
    }
}
