//! Scenario files: the prototype catalogue plus the stations and cards to spawn.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prototypes::{
    AccessGroupPrototype, DepartmentPrototype, JobPrototype, PrototypeCatalog,
    StatusIconPrototype,
};
use crate::{PresetIdCard, StationJobs, SCHEMA_VERSION_V1};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported scenario schema version {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationSpec {
    pub name: String,
    /// Job configuration present when the station spawns; `None` means the
    /// station has no job component at all.
    #[serde(default)]
    pub jobs: Option<StationJobs>,
    /// Extended-access policy decided once players have their jobs.
    #[serde(default)]
    pub extended_access_on_assignment: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordSpec {
    pub name: String,
    pub job_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardSpec {
    /// Station the card spawns on; `None` spawns it in open space.
    #[serde(default)]
    pub station: Option<String>,
    #[serde(flatten)]
    pub preset: PresetIdCard,
    #[serde(default)]
    pub record: Option<RecordSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub schema_version: String,
    pub scenario_id: String,
    #[serde(default)]
    pub prototypes: PrototypeCatalog,
    #[serde(default)]
    pub stations: Vec<StationSpec>,
    #[serde(default)]
    pub cards: Vec<CardSpec>,
}

impl ScenarioConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.schema_version != SCHEMA_VERSION_V1 {
            return Err(ScenarioError::UnsupportedVersion(config.schema_version));
        }
        Ok(config)
    }

    /// Cross-references between cards and stations that cannot be resolved.
    pub fn station_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut names = BTreeSet::new();
        for station in &self.stations {
            if !names.insert(station.name.as_str()) {
                issues.push(format!("duplicate station name: {}", station.name));
            }
        }
        for (index, card) in self.cards.iter().enumerate() {
            if let Some(station) = card.station.as_deref() {
                if !names.contains(station) {
                    issues.push(format!("card {index} references unknown station: {station}"));
                }
            }
        }
        issues
    }
}

fn job(id: &str, name: &str, icon: &str, access: &[&str], extended: &[&str]) -> JobPrototype {
    let mut job = JobPrototype::new(id, name);
    job.icon = icon.to_string();
    job.access = access.iter().map(|tag| tag.to_string()).collect();
    job.extended_access = extended.iter().map(|tag| tag.to_string()).collect();
    job
}

fn department(id: &str, name: &str, roles: &[&str]) -> DepartmentPrototype {
    DepartmentPrototype {
        id: id.to_string(),
        name: name.to_string(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
    }
}

fn icon(id: &str) -> StatusIconPrototype {
    StatusIconPrototype {
        id: id.to_string(),
        sprite: format!("Interface/Misc/job_icons.rsi/{}", id.trim_start_matches("JobIcon")),
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let mut captain = job("Captain", "Captain", "JobIconCaptain", &[], &[]);
        captain.access_groups = vec!["AllAccess".to_string()];
        let mut passenger = job("Passenger", "Passenger", "JobIconPassenger", &[], &[]);
        passenger.extended_access_groups = vec!["Maintenance".to_string()];

        Self {
            schema_version: SCHEMA_VERSION_V1.to_string(),
            scenario_id: "scenario_local_001".to_string(),
            prototypes: PrototypeCatalog {
                jobs: vec![
                    captain,
                    job(
                        "ChiefEngineer",
                        "Chief Engineer",
                        "JobIconChiefEngineer",
                        &["ChiefEngineer", "Engineering", "Command", "Maintenance"],
                        &[],
                    ),
                    job(
                        "StationEngineer",
                        "Station Engineer",
                        "JobIconStationEngineer",
                        &["Engineering", "Maintenance", "External"],
                        &["Atmospherics"],
                    ),
                    job(
                        "Janitor",
                        "Janitor",
                        "JobIconJanitor",
                        &["Janitor", "Maintenance"],
                        &["Service"],
                    ),
                    passenger,
                ],
                departments: vec![
                    department("Command", "Command", &["Captain", "ChiefEngineer"]),
                    department("Engineering", "Engineering", &["ChiefEngineer", "StationEngineer"]),
                    department("Civilian", "Civilian", &["Janitor", "Passenger"]),
                ],
                status_icons: vec![
                    icon("JobIconCaptain"),
                    icon("JobIconChiefEngineer"),
                    icon("JobIconStationEngineer"),
                    icon("JobIconJanitor"),
                    icon("JobIconPassenger"),
                    icon("JobIconUnknown"),
                ],
                access_groups: vec![
                    AccessGroupPrototype {
                        id: "AllAccess".to_string(),
                        tags: [
                            "Command",
                            "Captain",
                            "Engineering",
                            "Maintenance",
                            "External",
                            "Janitor",
                            "Service",
                            "Security",
                            "Medical",
                        ]
                        .iter()
                        .map(|tag| tag.to_string())
                        .collect(),
                    },
                    AccessGroupPrototype {
                        id: "Maintenance".to_string(),
                        tags: vec!["Maintenance".to_string()],
                    },
                ],
            },
            stations: vec![
                StationSpec {
                    name: "Aurora Station".to_string(),
                    jobs: Some(StationJobs::default()),
                    extended_access_on_assignment: Some(true),
                },
                StationSpec {
                    name: "Kestrel Outpost".to_string(),
                    jobs: None,
                    extended_access_on_assignment: None,
                },
            ],
            cards: vec![
                CardSpec {
                    station: Some("Aurora Station".to_string()),
                    preset: PresetIdCard {
                        job_name: Some("Janitor".to_string()),
                        ..PresetIdCard::default()
                    },
                    record: None,
                },
                CardSpec {
                    station: Some("Aurora Station".to_string()),
                    preset: PresetIdCard {
                        job_name: Some("StationEngineer".to_string()),
                        id_name: Some("Mira Okafor".to_string()),
                        custom_job_name: None,
                    },
                    record: None,
                },
                CardSpec {
                    station: Some("Aurora Station".to_string()),
                    preset: PresetIdCard {
                        job_name: Some("Captain".to_string()),
                        id_name: Some("Tomas Reyes".to_string()),
                        custom_job_name: Some("Acting Captain".to_string()),
                    },
                    record: Some(RecordSpec {
                        name: "Tomas Reyes".to_string(),
                        job_title: "Captain".to_string(),
                    }),
                },
                CardSpec {
                    station: Some("Kestrel Outpost".to_string()),
                    preset: PresetIdCard {
                        job_name: Some("Passenger".to_string()),
                        ..PresetIdCard::default()
                    },
                    record: None,
                },
            ],
        }
    }
}
