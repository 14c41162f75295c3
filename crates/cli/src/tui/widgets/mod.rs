//! Reusable diagram widgets

pub mod architecture;
pub mod workflow;

pub use architecture::architecture_lines;
pub use workflow::workflow_lines;
