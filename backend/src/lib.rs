//! Server-side access to the magang listing API.

pub mod api;
pub mod api_utils;

pub use api_utils::api_config::ApiConfig;
pub use api_utils::magang_api_utils::{MagangApiClient, shared_client};
