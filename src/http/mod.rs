//! HTTP protocol layer module
//!
//! Response builders and body encoding, decoupled from route selection.

pub mod json;
pub mod response;

pub use response::{build_501_response, build_json_response};
