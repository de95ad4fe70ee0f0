pub mod search_workspace;
pub mod results_summary;
pub mod filter_panel;
pub mod active_filter_chips;
pub mod keyword_search_box;
pub mod vacancy_card;
