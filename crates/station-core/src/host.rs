//! Collaborator contracts consumed by the card configurator.
//!
//! The configurator never touches component storage directly; everything it
//! needs from the surrounding world goes through these traits.

use contracts::{
    EntityUid, GeneralStationRecord, JobPrototype, PresetIdCard, StationJobs, StationRecordKey,
    StatusIconPrototype,
};

pub trait PrototypeLookup {
    fn job_prototype(&self, id: &str) -> Option<JobPrototype>;
    fn status_icon(&self, id: &str) -> Option<StatusIconPrototype>;
}

pub trait StationLookup {
    fn owning_station(&self, entity: EntityUid) -> Option<EntityUid>;
    /// `None` when the station has no job configuration at all.
    fn station_jobs(&self, station: EntityUid) -> Option<StationJobs>;
}

pub trait AccessControl {
    fn set_access_to_job(&mut self, entity: EntityUid, job: &JobPrototype, extended: bool);
}

/// Mutations on the visible face of an ID card. Each returns `false` when
/// the entity carries no card.
pub trait CardDisplay {
    fn try_change_full_name(&mut self, entity: EntityUid, full_name: &str) -> bool;
    fn try_change_job_title(&mut self, entity: EntityUid, job_title: &str) -> bool;
    fn try_change_job_department(&mut self, entity: EntityUid, job: &JobPrototype) -> bool;
    fn try_change_job_icon(&mut self, entity: EntityUid, icon: &StatusIconPrototype) -> bool;
}

pub trait RecordRegistry {
    fn record_key(&self, entity: EntityUid) -> Option<StationRecordKey>;
    fn try_get_record_mut(&mut self, key: StationRecordKey) -> Option<&mut GeneralStationRecord>;
    fn synchronize(&mut self, key: StationRecordKey);
}

pub trait PresetCardQuery {
    fn preset_card(&self, entity: EntityUid) -> Option<PresetIdCard>;
    /// Every entity carrying a preset, in entity order.
    fn preset_cards(&self) -> Vec<(EntityUid, PresetIdCard)>;
}

pub trait CardHost:
    PrototypeLookup + StationLookup + AccessControl + CardDisplay + RecordRegistry + PresetCardQuery
{
}

impl<T> CardHost for T where
    T: PrototypeLookup
        + StationLookup
        + AccessControl
        + CardDisplay
        + RecordRegistry
        + PresetCardQuery
{
}
