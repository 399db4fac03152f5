//! CLI command implementations
//!
//! Each command is in its own submodule and takes an `XOptions` struct.

pub mod catalog;
pub mod init;
pub mod output;
pub mod replay;
pub mod variants;

pub use catalog::{execute_catalog, CatalogOptions};
pub use init::{execute_init, InitOptions};
pub use output::{render_panel, render_report};
pub use replay::{execute_replay, ReplayOptions};
pub use variants::execute_variants;
