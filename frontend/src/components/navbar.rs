//! Top navigation bar component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

/// Shared page frame: header with the home link, page content below.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
                background: #F8FAFC;
                font-family: 'Plus Jakarta Sans', sans-serif;
            ",

            div {
                id: "x-nav-header",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                    height: 64px;
                    padding: 0 32px;
                    background-color: #0F172A;
                ",
                Link {
                    to: Route::listing_home(),
                    span { style: "color: white; font-size: 22px; font-weight: 700;", "Cari Magang" }
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; padding: 24px 32px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
