//! Error boundary component for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:#B91C1C; font-size: 40px; padding: 10px; margin: 15px;",
                        "Terjadi kesalahan",
                    }
                    p {
                        style: "color:#7F1D1D; font-size: 20px; padding: 10px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:#1D4ED8; font-size: 20px; padding: 10px; margin: 15px;",
                        "Kembali ke beranda"
                    }
                    pre {
                        style: "color:black; border: 1px solid #FCA5A5; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "12px",
            padding: "24px",

            h2 {
                style: "color:#B91C1C; font-size: 24px; margin: 5px;",
                "Gagal memuat data",
            }

            pre {
                style: "color:#7F1D1D; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; margin: 5px; text-wrap: auto; max-width: 560px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}

/// Link back to the unfiltered listing, shown under errors.
#[component]
pub fn BackToListingLink() -> Element {
    rsx! {
        Link {
            to: Route::listing_home(),
            span { style: "color:#1D4ED8; font-size: 16px;", "Kembali ke daftar lowongan" }
        }
    }
}
