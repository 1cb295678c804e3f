use contracts::{
    EntityUid, GeneralStationRecord, IdCard, JobPrototype, PresetIdCard, StationJobs,
    StationRecordKey, StatusIconPrototype, WorldEventType,
};
use serde_json::json;

use super::StationWorld;
use crate::host::{
    AccessControl, CardDisplay, PresetCardQuery, PrototypeLookup, RecordRegistry, StationLookup,
};
use crate::{access, id_card};

impl StationWorld {
    /// Mutate a card and keep the entity's name in step with it.
    fn with_card(&mut self, entity: EntityUid, change: impl FnOnce(&mut IdCard, &Self)) -> bool {
        let Some(mut card) = self.id_cards.remove(&entity) else {
            return false;
        };
        change(&mut card, self);
        self.names.insert(entity, card.entity_label());
        self.id_cards.insert(entity, card);
        true
    }
}

impl PrototypeLookup for StationWorld {
    fn job_prototype(&self, id: &str) -> Option<JobPrototype> {
        self.prototypes.try_index_job(id).cloned()
    }

    fn status_icon(&self, id: &str) -> Option<StatusIconPrototype> {
        self.prototypes.try_index_status_icon(id).cloned()
    }
}

impl StationLookup for StationWorld {
    fn owning_station(&self, entity: EntityUid) -> Option<EntityUid> {
        self.stations.owning_station(entity)
    }

    fn station_jobs(&self, station: EntityUid) -> Option<StationJobs> {
        self.stations.station(station).and_then(|state| state.jobs)
    }
}

impl AccessControl for StationWorld {
    fn set_access_to_job(&mut self, entity: EntityUid, job: &JobPrototype, extended: bool) {
        let tags = self.access.entry(entity).or_default();
        access::set_access_to_job(tags, job, extended, &self.prototypes);
    }
}

impl CardDisplay for StationWorld {
    fn try_change_full_name(&mut self, entity: EntityUid, full_name: &str) -> bool {
        self.with_card(entity, |card, _| id_card::change_full_name(card, full_name))
    }

    fn try_change_job_title(&mut self, entity: EntityUid, job_title: &str) -> bool {
        self.with_card(entity, |card, _| id_card::change_job_title(card, job_title))
    }

    fn try_change_job_department(&mut self, entity: EntityUid, job: &JobPrototype) -> bool {
        self.with_card(entity, |card, world| {
            id_card::change_job_department(card, job, &world.prototypes)
        })
    }

    fn try_change_job_icon(&mut self, entity: EntityUid, icon: &StatusIconPrototype) -> bool {
        self.with_card(entity, |card, _| id_card::change_job_icon(card, icon))
    }
}

impl RecordRegistry for StationWorld {
    fn record_key(&self, entity: EntityUid) -> Option<StationRecordKey> {
        self.record_keys.get(&entity).copied()
    }

    fn try_get_record_mut(&mut self, key: StationRecordKey) -> Option<&mut GeneralStationRecord> {
        self.records.try_get_record_mut(key)
    }

    fn synchronize(&mut self, key: StationRecordKey) {
        let count = self.records.synchronize(key);
        let job_title = self
            .records
            .try_get_record(key)
            .map(|record| record.job_title.clone());
        self.push_event(
            WorldEventType::RecordSynchronized,
            Some(key.station),
            Some(json!({
                "record": key.to_string(),
                "job_title": job_title,
                "sync_count": count,
            })),
        );
    }
}

impl PresetCardQuery for StationWorld {
    fn preset_card(&self, entity: EntityUid) -> Option<PresetIdCard> {
        self.presets.get(&entity).cloned()
    }

    fn preset_cards(&self) -> Vec<(EntityUid, PresetIdCard)> {
        self.presets
            .iter()
            .map(|(uid, preset)| (*uid, preset.clone()))
            .collect()
    }
}
