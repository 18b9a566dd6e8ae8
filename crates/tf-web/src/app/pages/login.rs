use dioxus::prelude::*;
use tf_types::Identity;

use crate::{app::services::AppServices, routes::Routes};

#[component]
pub fn LoginPage() -> Element {
    let services = use_context::<AppServices>();
    let navigator = use_navigator();

    let mut identity = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        error_message.set(None);

        let Some(id) = Identity::new(identity()) else {
            error_message.set(Some("User ID is required".to_string()));
            return;
        };

        services.auth.sign_in(id);
        navigator.push(Routes::HomePage {});
    };

    rsx! {
        div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
            div { class: "card w-96 bg-base-100 shadow-xl",
                div { class: "card-body",
                    h2 { class: "card-title justify-center mb-4", "Login to Ticketify" }

                    form { onsubmit: on_submit,
                        class: "flex flex-col gap-4",
                        div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                            label { class: "label",
                                span { class: "label-text", "User ID" }
                            }
                            input {
                                r#type: "text",
                                placeholder: "user id",
                                class: "input input-bordered w-full max-w-xs",
                                value: "{identity}",
                                oninput: move |evt| identity.set(evt.value()),
                                autocomplete: "username",
                            }
                        }

                        if let Some(error) = error_message() {
                            div { class: "alert alert-error mt-4",
                                span { "{error}" }
                            }
                        }

                        div { class: "card-actions justify-end mt-6",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary w-full",
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    }
}
