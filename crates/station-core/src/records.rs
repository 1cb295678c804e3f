//! Per-station personnel records.

use std::collections::BTreeMap;

use contracts::{EntityUid, GeneralStationRecord, StationRecordKey};

#[derive(Debug, Clone, Default)]
pub struct StationRecords {
    records: BTreeMap<StationRecordKey, GeneralStationRecord>,
    next_id_by_station: BTreeMap<EntityUid, u32>,
    sync_count_by_key: BTreeMap<StationRecordKey, u64>,
}

impl StationRecords {
    pub fn add_record(
        &mut self,
        station: EntityUid,
        record: GeneralStationRecord,
    ) -> StationRecordKey {
        let next_id = self.next_id_by_station.entry(station).or_insert(0);
        *next_id += 1;
        let key = StationRecordKey {
            station,
            id: *next_id,
        };
        self.records.insert(key, record);
        key
    }

    pub fn try_get_record(&self, key: StationRecordKey) -> Option<&GeneralStationRecord> {
        self.records.get(&key)
    }

    pub fn try_get_record_mut(&mut self, key: StationRecordKey) -> Option<&mut GeneralStationRecord> {
        self.records.get_mut(&key)
    }

    /// Mark a record as pushed to everyone watching the station's records.
    pub fn synchronize(&mut self, key: StationRecordKey) -> u64 {
        let count = self.sync_count_by_key.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    pub fn sync_count(&self, key: StationRecordKey) -> u64 {
        self.sync_count_by_key.get(&key).copied().unwrap_or(0)
    }

    /// Drop every record a station owns, e.g. when the station is deleted.
    pub fn remove_station(&mut self, station: EntityUid) {
        self.records.retain(|key, _| key.station != station);
        self.sync_count_by_key.retain(|key, _| key.station != station);
        self.next_id_by_station.remove(&station);
    }
}
