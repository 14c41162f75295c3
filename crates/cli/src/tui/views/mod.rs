//! TUI views

pub mod content;
pub mod sidebar;

pub use content::ContentView;
pub use sidebar::{SidebarState, SidebarView};
