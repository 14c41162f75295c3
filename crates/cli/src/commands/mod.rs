//! CLI command implementations

mod admin;
mod export;
mod search;

pub use admin::{cmd_config_init, cmd_config_reset, cmd_config_show, cmd_tui};
pub use export::cmd_export;
pub use search::{cmd_search, cmd_sections, cmd_show};
