//! Request handler module
//!
//! Maps a small fixed set of literal paths to precomputed JSON payloads.

pub mod router;
pub mod routes;

// Re-export main entry point
pub use router::handle_request;
