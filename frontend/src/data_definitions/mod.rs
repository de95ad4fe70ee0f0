pub mod filter_params;
pub mod search_session;
