//! Stations and which entities belong to them.

use std::collections::{BTreeMap, BTreeSet};

use contracts::{EntityUid, StationJobs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationState {
    pub name: String,
    pub jobs: Option<StationJobs>,
    pub members: BTreeSet<EntityUid>,
}

#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: BTreeMap<EntityUid, StationState>,
    owner_by_entity: BTreeMap<EntityUid, EntityUid>,
}

impl StationRegistry {
    pub fn add_station(&mut self, station: EntityUid, name: impl Into<String>, jobs: Option<StationJobs>) {
        self.stations.insert(
            station,
            StationState {
                name: name.into(),
                jobs,
                members: BTreeSet::new(),
            },
        );
    }

    /// Returns `false` when `station` is not a station.
    pub fn add_member(&mut self, station: EntityUid, entity: EntityUid) -> bool {
        let Some(state) = self.stations.get_mut(&station) else {
            return false;
        };
        state.members.insert(entity);
        self.owner_by_entity.insert(entity, station);
        true
    }

    pub fn remove_entity(&mut self, entity: EntityUid) {
        if let Some(station) = self.owner_by_entity.remove(&entity) {
            if let Some(state) = self.stations.get_mut(&station) {
                state.members.remove(&entity);
            }
        }
        if let Some(state) = self.stations.remove(&entity) {
            for member in state.members {
                self.owner_by_entity.remove(&member);
            }
        }
    }

    pub fn owning_station(&self, entity: EntityUid) -> Option<EntityUid> {
        self.owner_by_entity.get(&entity).copied()
    }

    pub fn station(&self, station: EntityUid) -> Option<&StationState> {
        self.stations.get(&station)
    }

    pub fn station_by_name(&self, name: &str) -> Option<EntityUid> {
        self.stations
            .iter()
            .find(|(_, state)| state.name == name)
            .map(|(uid, _)| *uid)
    }

    /// Set the extended-access policy, adding a jobs component if missing.
    /// Returns `false` when `station` is not a station.
    pub fn set_extended_access(&mut self, station: EntityUid, extended: bool) -> bool {
        let Some(state) = self.stations.get_mut(&station) else {
            return false;
        };
        state.jobs.get_or_insert_with(StationJobs::default).extended_access = extended;
        true
    }
}
