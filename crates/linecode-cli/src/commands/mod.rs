//! CLI command implementations

pub mod encode;
pub mod json_output;
pub mod plot;
pub mod schemes;
pub mod validate;

mod reporting;
