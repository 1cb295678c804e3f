use std::collections::{BTreeMap, VecDeque};

mod dispatch;
mod events;
mod host;
mod snapshot;

use contracts::{
    AccessTags, EntityUid, GameEvent, GeneralStationRecord, IdCard, PresetIdCard, RecordSpec,
    ScenarioConfig, StationJobs, StationRecordKey, WorldEvent, WorldEventType,
};
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

pub use dispatch::EntitySystem;

use crate::preset::PresetIdCardSystem;
use crate::prototype::{PrototypeError, PrototypeManager};
use crate::records::StationRecords;
use crate::station::StationRegistry;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown station: {0}")]
    UnknownStation(String),
    #[error("duplicate station name: {0}")]
    DuplicateStation(String),
    #[error("{0} is not a station")]
    NotAStation(EntityUid),
    #[error(transparent)]
    Prototype(#[from] PrototypeError),
}

/// In-memory station simulation: entity and component storage, the
/// collaborator contracts the card configurator consumes, and an event
/// dispatcher for registered systems.
#[derive(Debug)]
pub struct StationWorld {
    scenario_id: String,
    prototypes: PrototypeManager,
    stations: StationRegistry,
    records: StationRecords,
    next_uid: u64,
    names: BTreeMap<EntityUid, String>,
    presets: BTreeMap<EntityUid, PresetIdCard>,
    id_cards: BTreeMap<EntityUid, IdCard>,
    access: BTreeMap<EntityUid, AccessTags>,
    record_keys: BTreeMap<EntityUid, StationRecordKey>,
    systems: Vec<Box<dyn EntitySystem>>,
    pending_events: VecDeque<GameEvent>,
    dispatching: bool,
    event_log: Vec<WorldEvent>,
}

impl StationWorld {
    /// A world with the preset card system already registered.
    pub fn new(scenario_id: impl Into<String>, prototypes: PrototypeManager) -> Self {
        let mut world = Self::without_systems(scenario_id, prototypes);
        world.register_system(Box::new(PresetIdCardSystem));
        world
    }

    pub fn without_systems(scenario_id: impl Into<String>, prototypes: PrototypeManager) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            prototypes,
            stations: StationRegistry::default(),
            records: StationRecords::default(),
            next_uid: 0,
            names: BTreeMap::new(),
            presets: BTreeMap::new(),
            id_cards: BTreeMap::new(),
            access: BTreeMap::new(),
            record_keys: BTreeMap::new(),
            systems: Vec::new(),
            pending_events: VecDeque::new(),
            dispatching: false,
            event_log: Vec::new(),
        }
    }

    /// Spawn every station and card a scenario lists. Job assignment is a
    /// separate step; see [`StationWorld::apply_job_assignment`].
    pub fn from_scenario(config: &ScenarioConfig) -> Result<Self, WorldError> {
        let prototypes = PrototypeManager::from_catalog(config.prototypes.clone())?;
        let mut world = Self::new(config.scenario_id.clone(), prototypes);

        for station in &config.stations {
            if world.stations.station_by_name(&station.name).is_some() {
                return Err(WorldError::DuplicateStation(station.name.clone()));
            }
            world.spawn_station(station.name.clone(), station.jobs);
        }
        for card in &config.cards {
            let station = match card.station.as_deref() {
                Some(name) => Some(
                    world
                        .stations
                        .station_by_name(name)
                        .ok_or_else(|| WorldError::UnknownStation(name.to_string()))?,
                ),
                None => None,
            };
            world.spawn_card(station, card.preset.clone(), card.record.clone())?;
        }
        Ok(world)
    }

    /// Apply each station's post-assignment access policy, then announce
    /// that jobs are assigned.
    pub fn apply_job_assignment(&mut self, config: &ScenarioConfig) -> Result<(), WorldError> {
        for station in &config.stations {
            let Some(extended) = station.extended_access_on_assignment else {
                continue;
            };
            let uid = self
                .stations
                .station_by_name(&station.name)
                .ok_or_else(|| WorldError::UnknownStation(station.name.clone()))?;
            self.set_extended_access(uid, extended)?;
        }
        self.assign_jobs();
        Ok(())
    }

    pub fn register_system(&mut self, system: Box<dyn EntitySystem>) {
        self.systems.push(system);
    }

    fn allocate_uid(&mut self) -> EntityUid {
        self.next_uid += 1;
        EntityUid(self.next_uid)
    }

    pub fn spawn_station(&mut self, name: impl Into<String>, jobs: Option<StationJobs>) -> EntityUid {
        let uid = self.allocate_uid();
        let name = name.into();
        self.stations.add_station(uid, name.clone(), jobs);
        self.names.insert(uid, name.clone());
        info!(station = %uid, name = %name, has_jobs = jobs.is_some(), "station spawned");
        self.push_event(
            WorldEventType::StationSpawned,
            Some(uid),
            Some(json!({ "name": name, "jobs": jobs })),
        );
        uid
    }

    /// Spawn an ID card carrying `preset`, optionally on a station and with
    /// a personnel record, then run map init for it.
    pub fn spawn_card(
        &mut self,
        station: Option<EntityUid>,
        preset: PresetIdCard,
        record: Option<RecordSpec>,
    ) -> Result<EntityUid, WorldError> {
        if let Some(station) = station {
            if self.stations.station(station).is_none() {
                return Err(WorldError::NotAStation(station));
            }
        }

        let uid = self.allocate_uid();
        if let Some(station) = station {
            self.stations.add_member(station, uid);
        }

        match (station, record) {
            (Some(station), Some(record)) => {
                let job_icon = preset
                    .job_name
                    .as_deref()
                    .and_then(|job_id| self.prototypes.try_index_job(job_id))
                    .and_then(|job| self.prototypes.try_index_status_icon(&job.icon))
                    .map(|icon| icon.id.clone());
                let key = self.records.add_record(
                    station,
                    GeneralStationRecord {
                        name: record.name,
                        job_title: record.job_title,
                        job_icon,
                        job_prototype: preset.job_name.clone(),
                    },
                );
                self.record_keys.insert(uid, key);
            }
            (None, Some(record)) => {
                warn!(card = %uid, name = %record.name, "dropping personnel record for card without a station");
            }
            _ => {}
        }

        let card = IdCard::default();
        self.names.insert(uid, card.entity_label());
        self.id_cards.insert(uid, card);
        self.access.insert(uid, AccessTags::default());
        self.presets.insert(uid, preset.clone());

        self.push_event(
            WorldEventType::CardSpawned,
            Some(uid),
            Some(json!({ "station": station, "preset": preset })),
        );
        self.raise(GameEvent::MapInit { entity: uid });
        Ok(uid)
    }

    pub fn set_extended_access(&mut self, station: EntityUid, extended: bool) -> Result<(), WorldError> {
        if !self.stations.set_extended_access(station, extended) {
            return Err(WorldError::NotAStation(station));
        }
        Ok(())
    }

    pub fn assign_jobs(&mut self) {
        self.push_event(WorldEventType::JobsAssigned, None, None);
        self.raise(GameEvent::RulePlayerJobsAssigned);
    }

    /// Remove an entity and every component it carries. Deleting a station
    /// also drops its personnel records.
    pub fn delete_entity(&mut self, uid: EntityUid) -> bool {
        let existed = self.names.remove(&uid).is_some();
        if self.stations.station(uid).is_some() {
            self.records.remove_station(uid);
            self.record_keys.retain(|_, key| key.station != uid);
        }
        self.stations.remove_entity(uid);
        self.presets.remove(&uid);
        self.id_cards.remove(&uid);
        self.access.remove(&uid);
        self.record_keys.remove(&uid);
        if existed {
            self.push_event(WorldEventType::EntityDeleted, Some(uid), None);
        }
        existed
    }

    pub fn scenario_id(&self) -> &str {
        &self.scenario_id
    }

    pub fn prototypes(&self) -> &PrototypeManager {
        &self.prototypes
    }

    pub fn station_by_name(&self, name: &str) -> Option<EntityUid> {
        self.stations.station_by_name(name)
    }

    pub fn entity_name(&self, uid: EntityUid) -> Option<&str> {
        self.names.get(&uid).map(String::as_str)
    }

    pub fn id_card(&self, uid: EntityUid) -> Option<&IdCard> {
        self.id_cards.get(&uid)
    }

    pub fn access_tags(&self, uid: EntityUid) -> Option<&AccessTags> {
        self.access.get(&uid)
    }

    pub fn preset(&self, uid: EntityUid) -> Option<&PresetIdCard> {
        self.presets.get(&uid)
    }

    /// Edit a card's preset after spawn, as a card console would.
    pub fn preset_mut(&mut self, uid: EntityUid) -> Option<&mut PresetIdCard> {
        self.presets.get_mut(&uid)
    }

    pub fn card_record_key(&self, uid: EntityUid) -> Option<StationRecordKey> {
        self.record_keys.get(&uid).copied()
    }

    pub fn record(&self, key: StationRecordKey) -> Option<&GeneralStationRecord> {
        self.records.try_get_record(key)
    }

    pub fn record_sync_count(&self, key: StationRecordKey) -> u64 {
        self.records.sync_count(key)
    }

    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }
}

#[cfg(test)]
mod tests;
