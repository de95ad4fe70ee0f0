use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorDisplay;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ErrorBoundary {
                handle_error: |err: ErrorContext| {
                    let error_txt = match err.error() {
                        Some(error) => format!("{:#?}", error.0),
                        None => "Unknown error".to_string(),
                    };
                    rsx! {
                        ComponentErrorDisplay {
                            error_txt,
                            button {
                                style: "color:#1D4ED8; font-size: 16px; border: 1px solid #1D4ED8; padding: 8px 14px; border-radius: 8px; background: white; cursor: pointer;",
                                onclick: move |_| {
                                    err.clear_errors();
                                },
                                "Coba lagi"
                            }
                        }
                    }
                },
                {children}
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color:#334155; font-size: 18px; padding: 12px 18px; border-radius: 8px; margin: 15px; background: #F1F5F9;",
            "Memuat hasil..."
        }
    }
}
