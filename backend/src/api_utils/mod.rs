pub mod api_config;
pub mod magang_api_utils;
