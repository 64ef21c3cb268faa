use api::StoreApi;
use dioxus::prelude::*;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle,
    Skeleton,
};

/// Child profile page — name, contact, and remaining support balance.
#[component]
pub fn ChildUser() -> Element {
    let api = use_context::<StoreApi>();

    let mut profile = use_resource(move || {
        let api = api.clone();
        async move {
            api.child_profile()
                .await
                .inspect_err(|err| tracing::error!("failed to load child profile: {err}"))
        }
    });

    rsx! {
        PageHeader {
            PageTitle { "My page" }
        }
        match &*profile.read() {
            Some(Ok(profile)) => rsx! {
                Card {
                    CardHeader {
                        CardTitle { "{profile.child_name}" }
                    }
                    CardContent {
                        dl { class: "detail-list",
                            dt { "Email" }
                            dd { {profile.child_email.clone().unwrap_or_else(|| "--".to_string())} }
                            dt { "Meal balance" }
                            dd { "{profile.support_balance} won" }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                Card {
                    CardContent {
                        div { class: "empty-state",
                            h2 { "Could not load your profile" }
                            p { "{err.friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| profile.restart(),
                                "Retry"
                            }
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                }
            },
        }
    }
}
