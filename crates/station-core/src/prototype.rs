//! Prototype registry: indexes the static catalogue by id.

use std::collections::{BTreeMap, BTreeSet};

use contracts::{
    AccessGroupPrototype, DepartmentPrototype, JobPrototype, PrototypeCatalog,
    StatusIconPrototype,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrototypeError {
    #[error("duplicate {kind} prototype: {id}")]
    Duplicate { kind: &'static str, id: String },
}

#[derive(Debug, Clone, Default)]
pub struct PrototypeManager {
    jobs: BTreeMap<String, JobPrototype>,
    /// Kept in catalogue order; department lists on cards follow it.
    departments: Vec<DepartmentPrototype>,
    status_icons: BTreeMap<String, StatusIconPrototype>,
    access_groups: BTreeMap<String, AccessGroupPrototype>,
}

fn index_unique<T>(
    kind: &'static str,
    entries: Vec<T>,
    id_of: impl Fn(&T) -> &str,
) -> Result<BTreeMap<String, T>, PrototypeError> {
    let mut indexed = BTreeMap::new();
    for entry in entries {
        let id = id_of(&entry).to_string();
        if indexed.contains_key(&id) {
            return Err(PrototypeError::Duplicate { kind, id });
        }
        indexed.insert(id, entry);
    }
    Ok(indexed)
}

impl PrototypeManager {
    pub fn from_catalog(catalog: PrototypeCatalog) -> Result<Self, PrototypeError> {
        let PrototypeCatalog {
            jobs,
            departments,
            status_icons,
            access_groups,
        } = catalog;

        let mut seen = BTreeSet::new();
        for department in &departments {
            if !seen.insert(department.id.as_str()) {
                return Err(PrototypeError::Duplicate {
                    kind: "department",
                    id: department.id.clone(),
                });
            }
        }

        Ok(Self {
            jobs: index_unique("job", jobs, |job| job.id.as_str())?,
            departments,
            status_icons: index_unique("status icon", status_icons, |icon| icon.id.as_str())?,
            access_groups: index_unique("access group", access_groups, |group| group.id.as_str())?,
        })
    }

    pub fn try_index_job(&self, id: &str) -> Option<&JobPrototype> {
        self.jobs.get(id)
    }

    pub fn try_index_status_icon(&self, id: &str) -> Option<&StatusIconPrototype> {
        self.status_icons.get(id)
    }

    pub fn try_index_access_group(&self, id: &str) -> Option<&AccessGroupPrototype> {
        self.access_groups.get(id)
    }

    /// Departments listing `job_id` among their roles, in catalogue order.
    pub fn departments_for_job<'a>(
        &'a self,
        job_id: &'a str,
    ) -> impl Iterator<Item = &'a DepartmentPrototype> + 'a {
        self.departments
            .iter()
            .filter(move |department| department.roles.iter().any(|role| role == job_id))
    }

    /// References that do not resolve. Dangling references are tolerated at
    /// runtime (lookups simply miss), so this only reports them.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for job in self.jobs.values() {
            if !self.status_icons.contains_key(&job.icon) {
                issues.push(format!("job {} references unknown icon {}", job.id, job.icon));
            }
            for group in job.access_groups.iter().chain(&job.extended_access_groups) {
                if !self.access_groups.contains_key(group) {
                    issues.push(format!(
                        "job {} references unknown access group {}",
                        job.id, group
                    ));
                }
            }
        }
        for department in &self.departments {
            for role in &department.roles {
                if !self.jobs.contains_key(role) {
                    issues.push(format!(
                        "department {} lists unknown job {}",
                        department.id, role
                    ));
                }
            }
        }
        issues
    }
}
