use std::fs;

use sea_orm::Iterable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::employee::EmployeeRole;

/// How many of a role's catalog tasks are pre-selected when the role is picked.
pub const DEFAULT_TASK_COUNT: usize = 3;

const BUILTIN_ROLES: &str = include_str!("default_roles.yaml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("FileSystem Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse Error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog is missing role '{0}'")]
    MissingRole(String),

    #[error("Catalog lists role '{0}' more than once")]
    DuplicateRole(String),

    #[error("Role '{role}' has {found} tasks, needs at least {DEFAULT_TASK_COUNT}")]
    TooFewTasks { role: String, found: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: EmployeeRole,
    pub description: String,
    pub tasks: Vec<String>,
}

/// The fixed six-role catalog: one entry per [`EmployeeRole`], each with an
/// ordered full task list. Loaded once at startup and held in `AppState`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCatalog {
    pub roles: Vec<RoleEntry>,
}

impl RoleCatalog {
    /// The compiled-in catalog, used when no `roles.yaml` is present.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse(BUILTIN_ROLES)
    }

    /// Load the catalog from a YAML file, falling back to the built-in
    /// catalog when the file is absent or empty.
    pub fn load_from_file(path: &str) -> Result<Self, CatalogError> {
        if !std::path::Path::new(path).exists() {
            return Self::builtin();
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Self::builtin();
        }

        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self, CatalogError> {
        let catalog: RoleCatalog = serde_yaml::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every role appears exactly once with enough tasks to seed a default
    /// selection from.
    fn validate(&self) -> Result<(), CatalogError> {
        for role in EmployeeRole::iter() {
            let matches = self.roles.iter().filter(|e| e.role == role).count();
            match matches {
                0 => return Err(CatalogError::MissingRole(role.display_name())),
                1 => {}
                _ => return Err(CatalogError::DuplicateRole(role.display_name())),
            }
        }

        for entry in &self.roles {
            if entry.tasks.len() < DEFAULT_TASK_COUNT {
                return Err(CatalogError::TooFewTasks {
                    role: entry.role.display_name(),
                    found: entry.tasks.len(),
                });
            }
        }

        Ok(())
    }

    pub fn entry(&self, role: EmployeeRole) -> Option<&RoleEntry> {
        self.roles.iter().find(|e| e.role == role)
    }

    /// The tasks pre-selected when `role` is picked in the wizard.
    pub fn default_tasks(&self, role: EmployeeRole) -> Option<&[String]> {
        self.entry(role).map(|e| &e.tasks[..DEFAULT_TASK_COUNT])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = RoleCatalog::builtin().unwrap();
        assert_eq!(catalog.roles.len(), 6);
    }

    #[test]
    fn default_tasks_are_first_three_for_every_role() {
        let catalog = RoleCatalog::builtin().unwrap();

        for role in EmployeeRole::iter() {
            let entry = catalog.entry(role).unwrap();
            let defaults = catalog.default_tasks(role).unwrap();
            assert_eq!(defaults, &entry.tasks[..3]);
        }
    }

    #[test]
    fn hr_manager_defaults_match_catalog_order() {
        let catalog = RoleCatalog::builtin().unwrap();
        let defaults = catalog.default_tasks(EmployeeRole::HrManager).unwrap();

        assert_eq!(
            defaults,
            [
                "Onboarding new employees",
                "Managing payroll",
                "Handling employee benefits",
            ]
        );
    }

    #[test]
    fn rejects_catalog_with_missing_role() {
        let yaml = r#"
roles:
  - role: HR Manager
    description: hr
    tasks: [a, b, c]
"#;
        assert!(matches!(
            RoleCatalog::parse(yaml),
            Err(CatalogError::MissingRole(_))
        ));
    }

    #[test]
    fn rejects_catalog_listing_a_role_twice() {
        let full = RoleCatalog::builtin().unwrap();
        let mut roles = full.roles;
        roles.push(roles[0].clone());
        let catalog = RoleCatalog { roles };

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateRole(_))
        ));
    }

    #[test]
    fn rejects_catalog_with_too_few_tasks() {
        let full = RoleCatalog::builtin().unwrap();
        let mut roles = full.roles;
        roles[0].tasks.truncate(2);
        let catalog = RoleCatalog { roles };

        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::TooFewTasks { .. })
        ));
    }
}
