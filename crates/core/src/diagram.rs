//! Static data behind the two decorative diagrams.
//!
//! The diagrams carry no state or logic; drawing is a pure function of these
//! constants and lives with the rendering surface.

use serde::{Deserialize, Serialize};

use crate::catalog::Icon;

/// Palette-independent color tag; each surface maps tags to concrete colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
  Blue,
  Green,
  Purple,
  Amber,
  Orange,
  Red,
  Pink,
}

pub const ARCHITECTURE_TITLE: &str = "System Architecture";
pub const WORKFLOW_TITLE: &str = "Automation Workflow";

/// One tier of the architecture stack with its component list
#[derive(Debug, Clone, Copy)]
pub struct Tier {
  pub name: &'static str,
  pub accent: Accent,
  pub items: [&'static str; 4],
}

/// The three-tier system architecture, top to bottom
pub const ARCHITECTURE_TIERS: [Tier; 3] = [
  Tier {
    name: "Frontend Layer",
    accent: Accent::Blue,
    items: [
      "React/Next.js Dashboard",
      "Responsive UI Components",
      "Real-time Updates",
      "Interactive Charts",
    ],
  },
  Tier {
    name: "Backend Services",
    accent: Accent::Green,
    items: [
      "Authentication Service",
      "Web Scraper Engine",
      "Data Processing Pipeline",
      "Notification System",
    ],
  },
  Tier {
    name: "Data Layer",
    accent: Accent::Purple,
    items: [
      "PostgreSQL Database",
      "Redis Caching",
      "File Storage (AWS S3)",
      "Message Queues",
    ],
  },
];

/// One node of the data-flow illustration
#[derive(Debug, Clone, Copy)]
pub struct FlowNode {
  /// Two label lines, stacked inside the node box
  pub label: [&'static str; 2],
  pub accent: Accent,
}

/// Main flow, left to right: portal, scraper, processor, storage
pub const FLOW_NODES: [FlowNode; 4] = [
  FlowNode {
    label: ["CDAS", "Portal"],
    accent: Accent::Blue,
  },
  FlowNode {
    label: ["Web", "Scraper"],
    accent: Accent::Green,
  },
  FlowNode {
    label: ["Data", "Processor"],
    accent: Accent::Purple,
  },
  FlowNode {
    label: ["Database", "Storage"],
    accent: Accent::Amber,
  },
];

/// Branch off the processor node down to notifications
pub const FLOW_BRANCH: FlowNode = FlowNode {
  label: ["Notification", "System"],
  accent: Accent::Pink,
};

/// Index into [`FLOW_NODES`] the branch hangs under
pub const FLOW_BRANCH_FROM: usize = 2;

/// One step in the automation workflow
#[derive(Debug, Clone, Copy)]
pub struct WorkflowStep {
  pub number: u8,
  pub title: &'static str,
  pub icon: Icon,
  pub accent: Accent,
}

/// The six-step download workflow, in execution order
pub const WORKFLOW_STEPS: [WorkflowStep; 6] = [
  WorkflowStep {
    number: 1,
    title: "Login to CDAS",
    icon: Icon::Lock,
    accent: Accent::Blue,
  },
  WorkflowStep {
    number: 2,
    title: "Schedule Download",
    icon: Icon::Activity,
    accent: Accent::Green,
  },
  WorkflowStep {
    number: 3,
    title: "Process Bills",
    icon: Icon::FileText,
    accent: Accent::Purple,
  },
  WorkflowStep {
    number: 4,
    title: "Validate Data",
    icon: Icon::Shield,
    accent: Accent::Orange,
  },
  WorkflowStep {
    number: 5,
    title: "Store Results",
    icon: Icon::Settings,
    accent: Accent::Red,
  },
  WorkflowStep {
    number: 6,
    title: "Send Notifications",
    icon: Icon::Zap,
    accent: Accent::Pink,
  },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_workflow_steps_are_ordered() {
    assert_eq!(WORKFLOW_STEPS.len(), 6);
    for (i, step) in WORKFLOW_STEPS.iter().enumerate() {
      assert_eq!(step.number as usize, i + 1);
    }
    assert_eq!(WORKFLOW_STEPS[0].title, "Login to CDAS");
    assert_eq!(WORKFLOW_STEPS[5].title, "Send Notifications");
  }

  #[test]
  fn test_architecture_tiers() {
    assert_eq!(ARCHITECTURE_TIERS.len(), 3);
    assert_eq!(ARCHITECTURE_TIERS[0].name, "Frontend Layer");
    assert_eq!(ARCHITECTURE_TIERS[1].name, "Backend Services");
    assert_eq!(ARCHITECTURE_TIERS[2].name, "Data Layer");
  }

  #[test]
  fn test_flow_branch_hangs_under_processor() {
    assert_eq!(FLOW_NODES[FLOW_BRANCH_FROM].label, ["Data", "Processor"]);
    assert_eq!(FLOW_BRANCH.label, ["Notification", "System"]);
  }
}
