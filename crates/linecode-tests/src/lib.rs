//! LineCode End-to-End Test Infrastructure
//!
//! Integration tests for the encode-and-plot pipeline:
//!
//! - **Plotting**: plot spec -> PNG file on disk
//! - **Validation**: bad requests are rejected before anything is written
//! - **Determinism**: the same request yields byte-identical PNGs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p linecode-tests
//! ```

pub mod determinism;
pub mod harness;
pub mod png_info;
