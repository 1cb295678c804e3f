//! Static, read-only definitions referenced by id from components.

use serde::{Deserialize, Serialize};

/// Icon used when a job prototype does not name one.
pub const DEFAULT_JOB_ICON: &str = "JobIconUnknown";

fn default_job_icon() -> String {
    DEFAULT_JOB_ICON.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobPrototype {
    pub id: String,
    /// Localized display name, used as the default job title.
    pub name: String,
    #[serde(default = "default_job_icon")]
    pub icon: String,
    #[serde(default)]
    pub access: Vec<String>,
    #[serde(default)]
    pub access_groups: Vec<String>,
    /// Tags granted on top of `access` when the station runs extended access.
    #[serde(default)]
    pub extended_access: Vec<String>,
    #[serde(default)]
    pub extended_access_groups: Vec<String>,
}

impl JobPrototype {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: default_job_icon(),
            access: Vec::new(),
            access_groups: Vec::new(),
            extended_access: Vec::new(),
            extended_access_groups: Vec::new(),
        }
    }

    pub fn localized_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentPrototype {
    pub id: String,
    pub name: String,
    /// Job prototype ids belonging to this department.
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusIconPrototype {
    pub id: String,
    pub sprite: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessGroupPrototype {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrototypeCatalog {
    #[serde(default)]
    pub jobs: Vec<JobPrototype>,
    #[serde(default)]
    pub departments: Vec<DepartmentPrototype>,
    #[serde(default)]
    pub status_icons: Vec<StatusIconPrototype>,
    #[serde(default)]
    pub access_groups: Vec<AccessGroupPrototype>,
}
