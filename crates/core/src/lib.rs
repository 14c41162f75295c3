pub mod catalog;
pub mod config;
pub mod content;
pub mod diagram;
pub mod error;
pub mod scroll;
pub mod state;

pub use catalog::{Catalog, DocContent, DocSection, Icon, SectionId, Subsection};
pub use config::{Config, LogConfig, UiConfig};
pub use content::{APP_SUBTITLE, APP_TITLE, SEARCH_PLACEHOLDER};
pub use diagram::{
  ARCHITECTURE_TIERS, ARCHITECTURE_TITLE, Accent, FLOW_BRANCH, FLOW_BRANCH_FROM, FLOW_NODES, FlowNode, Tier,
  WORKFLOW_STEPS, WORKFLOW_TITLE, WorkflowStep,
};
pub use error::{Error, Result};
pub use scroll::{SCROLL_TOP_THRESHOLD, ScrollState};
pub use state::ViewState;
