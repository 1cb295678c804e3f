//! v1 contracts shared by the station world, the card configurator, and the CLI.

pub mod prototypes;
pub mod scenario;
mod serde_u64_string;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use prototypes::{
    AccessGroupPrototype, DepartmentPrototype, JobPrototype, PrototypeCatalog,
    StatusIconPrototype, DEFAULT_JOB_ICON,
};
pub use scenario::{CardSpec, RecordSpec, ScenarioConfig, ScenarioError, StationSpec};

pub const SCHEMA_VERSION_V1: &str = "1.0";

/// Longest full name an ID card will display.
pub const MAX_FULL_NAME_LENGTH: usize = 30;
/// Longest job title an ID card will display.
pub const MAX_JOB_TITLE_LENGTH: usize = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityUid(#[serde(with = "serde_u64_string")] pub u64);

impl fmt::Display for EntityUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uid:{}", self.0)
    }
}

/// Preset configuration carried by an ID card from the moment it spawns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresetIdCard {
    /// Job prototype the card is configured from.
    #[serde(default)]
    pub job_name: Option<String>,
    /// Explicit full name written onto the card.
    #[serde(default)]
    pub id_name: Option<String>,
    /// Explicit job title overriding the prototype's name.
    #[serde(default)]
    pub custom_job_name: Option<String>,
}

/// What an ID card shows to anyone who examines it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdCard {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    #[serde(default)]
    pub job_departments: Vec<String>,
    pub job_icon: Option<String>,
}

impl IdCard {
    /// Label used as the card entity's name.
    pub fn entity_label(&self) -> String {
        match (self.full_name.as_deref(), self.job_title.as_deref()) {
            (Some(name), Some(title)) => format!("{name}'s ID card ({title})"),
            (Some(name), None) => format!("{name}'s ID card"),
            (None, Some(title)) => format!("ID card ({title})"),
            (None, None) => "ID card".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTags {
    pub tags: BTreeSet<String>,
}

impl AccessTags {
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Station-wide job configuration. Stations without it (outposts, shuttles)
/// never grant extended access.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StationJobs {
    pub extended_access: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationRecordKey {
    pub station: EntityUid,
    pub id: u32,
}

impl fmt::Display for StationRecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record:{}:{}", self.station.0, self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralStationRecord {
    pub name: String,
    pub job_title: String,
    pub job_icon: Option<String>,
    pub job_prototype: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GameEventKind {
    MapInit,
    RulePlayerJobsAssigned,
}

/// Events delivered by the world's dispatcher to subscribed systems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    MapInit { entity: EntityUid },
    RulePlayerJobsAssigned,
}

impl GameEvent {
    pub fn kind(&self) -> GameEventKind {
        match self {
            Self::MapInit { .. } => GameEventKind::MapInit,
            Self::RulePlayerJobsAssigned => GameEventKind::RulePlayerJobsAssigned,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorldEventType {
    StationSpawned,
    CardSpawned,
    CardConfigured,
    InvalidJobId,
    RecordSynchronized,
    JobsAssigned,
    EntityDeleted,
}

/// Audit entry appended by the world as it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldEvent {
    pub schema_version: String,
    pub sequence: u64,
    pub event_type: WorldEventType,
    pub entity: Option<EntityUid>,
    pub details: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardSnapshot {
    pub uid: EntityUid,
    pub label: String,
    pub station: Option<String>,
    pub preset: PresetIdCard,
    pub id_card: IdCard,
    pub access: Vec<String>,
    pub record: Option<GeneralStationRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorldSnapshot {
    pub schema_version: String,
    pub scenario_id: String,
    pub cards: Vec<CardSnapshot>,
}
