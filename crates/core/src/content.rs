//! The built-in CDAS documentation content.
//!
//! Six sections covering the bill processing platform: overview, user
//! management, authentication, the download workflow, the API surface, and
//! troubleshooting. Text is fixed at compile time.

use crate::catalog::{Catalog, DocContent, DocSection, Icon, SectionId, Subsection};
use crate::error::Result;

/// Header shown above the navigation list
pub const APP_TITLE: &str = "CDAS Documentation";
pub const APP_SUBTITLE: &str = "Bill Processing & Management";
pub const SEARCH_PLACEHOLDER: &str = "Search documentation...";

impl Catalog {
  /// The documentation shipped with the binary.
  pub fn builtin() -> Result<Self> {
    Self::new(vec![
      DocSection {
        id: SectionId::from("overview"),
        title: "System Overview".to_string(),
        icon: Icon::Home,
        content: DocContent {
          title: "CDAS Bill Documentation System".to_string(),
          subtitle: "Automated bill processing and management platform".to_string(),
          sections: vec![
            Subsection::new(
              "System Purpose",
              "The CDAS Bill Documentation System is designed to automate the process of downloading, processing, \
               and managing bills from the CDAS portal. It provides a comprehensive workflow for bill verification, \
               approval, and business process automation.",
            ),
            Subsection::new(
              "Key Features",
              "Automated bill downloads, intelligent data extraction, secure user management, comprehensive \
               reporting, and real-time notifications ensure efficient bill processing workflows.",
            ),
          ],
          image: None,
          architecture: true,
          workflow: false,
        },
      },
      DocSection {
        id: SectionId::from("user-management"),
        title: "User Management".to_string(),
        icon: Icon::Users,
        content: DocContent {
          title: "User Management System".to_string(),
          subtitle: "Complete guide for managing users, roles, and permissions".to_string(),
          sections: vec![
            Subsection::new(
              "Creating New Users",
              "To create a new user, navigate to the Users section and click \"Add User\". Use email as the \
               identifier and assign appropriate profiles and groups. A welcome email will be sent automatically.",
            ),
            Subsection::new(
              "User Roles & Permissions",
              "The system supports multiple user roles including Admin, Manager, and Viewer. Each role has specific \
               permissions for accessing different sections of the application.",
            ),
            Subsection::new(
              "Profile Management",
              "Users can update their profiles, change passwords, and configure notification preferences through \
               the profile management interface.",
            ),
          ],
          image: Some("https://iili.io/KBpgFRe.jpg".to_string()),
          architecture: false,
          workflow: false,
        },
      },
      DocSection {
        id: SectionId::from("authentication"),
        title: "Authentication & Security".to_string(),
        icon: Icon::Shield,
        content: DocContent {
          title: "Authentication & Security".to_string(),
          subtitle: "Secure login, password management, and account protection".to_string(),
          sections: vec![
            Subsection::new(
              "Account Lock/Unlock",
              "Administrators can manually lock or unlock user accounts. It is recommended to lock accounts when \
               users leave the organization for security purposes.",
            ),
            Subsection::new(
              "Password Reset",
              "Password resets can be initiated by administrators or users themselves. Reset links are sent via \
               email and expire after 24 hours for security.",
            ),
            Subsection::new(
              "Two-Factor Authentication",
              "Enable 2FA for enhanced security. Users can configure authentication apps or SMS-based verification \
               for additional account protection.",
            ),
          ],
          image: Some("https://iili.io/KBpbS2a.jpg".to_string()),
          architecture: false,
          workflow: false,
        },
      },
      DocSection {
        id: SectionId::from("workflow"),
        title: "Automation Workflow".to_string(),
        icon: Icon::Activity,
        content: DocContent {
          title: "CDAS Download Workflow".to_string(),
          subtitle: "Automated bill processing and data extraction pipeline".to_string(),
          sections: vec![
            Subsection::new(
              "Automated Process Overview",
              "The system automatically connects to the CDAS portal, downloads bills based on configured schedules, \
               processes the data using AI extraction, and updates relevant systems.",
            ),
            Subsection::new(
              "Data Processing Pipeline",
              "Downloaded bills are processed through multiple stages: data extraction, validation, categorization, \
               and storage. Each stage includes error handling and retry mechanisms.",
            ),
            Subsection::new(
              "Integration Points",
              "The workflow integrates with various systems including email notifications, database storage, \
               reporting tools, and external APIs for comprehensive data management.",
            ),
          ],
          image: Some("https://iili.io/KByJkEN.jpg".to_string()),
          architecture: false,
          workflow: true,
        },
      },
      DocSection {
        id: SectionId::from("api-reference"),
        title: "API Reference".to_string(),
        icon: Icon::FileText,
        content: DocContent {
          title: "API Documentation".to_string(),
          subtitle: "Complete API reference for developers and integrators".to_string(),
          sections: vec![
            Subsection::new(
              "Authentication Endpoints",
              "POST /api/auth/login - User authentication\nPOST /api/auth/logout - User logout\nPOST /api/auth/refresh - Token refresh\nPOST /api/auth/reset-password - Password reset",
            ),
            Subsection::new(
              "User Management APIs",
              "GET /api/users - List all users\nPOST /api/users - Create new user\nPUT /api/users/:id - Update user\nDELETE /api/users/:id - Delete user",
            ),
            Subsection::new(
              "Bill Processing APIs",
              "GET /api/bills - List bills\nPOST /api/bills/process - Process bills\nGET /api/bills/:id/status - Check processing status\nPOST /api/bills/download - Download bills",
            ),
          ],
          image: None,
          architecture: false,
          workflow: false,
        },
      },
      DocSection {
        id: SectionId::from("troubleshooting"),
        title: "Troubleshooting".to_string(),
        icon: Icon::Settings,
        content: DocContent {
          title: "Troubleshooting Guide".to_string(),
          subtitle: "Common issues and solutions".to_string(),
          sections: vec![
            Subsection::new(
              "Connection Issues",
              "If experiencing connection problems to CDAS portal, check network connectivity, verify credentials, \
               and ensure firewall settings allow the required connections.",
            ),
            Subsection::new(
              "Processing Errors",
              "Common processing errors include file format issues, corrupted downloads, and timeout errors. Check \
               logs for detailed error messages and retry mechanisms.",
            ),
            Subsection::new(
              "Performance Optimization",
              "For optimal performance, ensure adequate system resources, regular database maintenance, and proper \
               caching configuration.",
            ),
          ],
          image: None,
          architecture: false,
          workflow: false,
        },
      },
    ])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builtin_catalog_shape() {
    let catalog = Catalog::builtin().unwrap();
    let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
      ids,
      vec![
        "overview",
        "user-management",
        "authentication",
        "workflow",
        "api-reference",
        "troubleshooting"
      ]
    );
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.topic_count(), 17);
  }

  #[test]
  fn test_builtin_first_is_overview() {
    let catalog = Catalog::builtin().unwrap();
    let first = catalog.first();
    assert_eq!(first.id, "overview");
    assert_eq!(first.content.title, "CDAS Bill Documentation System");
  }

  #[test]
  fn test_builtin_diagram_flags() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.get("overview").unwrap().content.architecture);
    assert!(!catalog.get("overview").unwrap().content.workflow);
    assert!(catalog.get("workflow").unwrap().content.workflow);
    assert!(!catalog.get("workflow").unwrap().content.architecture);
  }

  #[test]
  fn test_builtin_images() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.get("user-management").unwrap().content.image.is_some());
    assert!(catalog.get("authentication").unwrap().content.image.is_some());
    assert!(catalog.get("workflow").unwrap().content.image.is_some());
    assert!(catalog.get("overview").unwrap().content.image.is_none());
    assert!(catalog.get("api-reference").unwrap().content.image.is_none());
  }

  #[test]
  fn test_builtin_api_bodies_keep_newlines() {
    let catalog = Catalog::builtin().unwrap();
    let api = catalog.get("api-reference").unwrap();
    let auth = &api.content.sections[0];
    assert_eq!(auth.heading, "Authentication Endpoints");
    assert_eq!(auth.content.lines().count(), 4);
    assert!(auth.content.starts_with("POST /api/auth/login"));
  }

  #[test]
  fn test_builtin_search_password() {
    let catalog = Catalog::builtin().unwrap();
    let filtered = catalog.filtered("password");
    let ids: Vec<&str> = filtered.iter().map(|s| s.id.as_str()).collect();

    // "Password Reset" lives under authentication; profile management and the
    // auth API endpoints mention passwords too, overview and troubleshooting
    // never do.
    assert!(ids.contains(&"authentication"));
    assert!(!ids.contains(&"overview"));
    assert!(!ids.contains(&"troubleshooting"));
  }

  #[test]
  fn test_builtin_search_unique_matches() {
    let catalog = Catalog::builtin().unwrap();

    let filtered = catalog.filtered("two-factor");
    let ids: Vec<&str> = filtered.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["authentication"]);

    let filtered = catalog.filtered("firewall");
    let ids: Vec<&str> = filtered.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["troubleshooting"]);
  }

  #[test]
  fn test_builtin_search_no_match() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.filtered("zzz-no-such-text").is_empty());
  }
}
