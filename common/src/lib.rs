//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod search_query;
pub mod search_query_codec;
pub mod search_result;
pub mod program_studi;
pub mod text_fold;
mod payload_coercion;
