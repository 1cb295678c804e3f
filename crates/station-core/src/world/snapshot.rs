use contracts::{CardSnapshot, WorldSnapshot, SCHEMA_VERSION_V1};

use super::StationWorld;

impl StationWorld {
    /// Every ID card in entity order, with its station, access and record.
    pub fn snapshot(&self) -> WorldSnapshot {
        let cards = self
            .id_cards
            .iter()
            .map(|(uid, card)| {
                let station = self
                    .stations
                    .owning_station(*uid)
                    .and_then(|station| self.stations.station(station))
                    .map(|state| state.name.clone());
                let record = self
                    .record_keys
                    .get(uid)
                    .and_then(|key| self.records.try_get_record(*key))
                    .cloned();
                CardSnapshot {
                    uid: *uid,
                    label: card.entity_label(),
                    station,
                    preset: self.presets.get(uid).cloned().unwrap_or_default(),
                    id_card: card.clone(),
                    access: self
                        .access
                        .get(uid)
                        .map(|tags| tags.tags.iter().cloned().collect())
                        .unwrap_or_default(),
                    record,
                }
            })
            .collect();

        WorldSnapshot {
            schema_version: SCHEMA_VERSION_V1.to_string(),
            scenario_id: self.scenario_id.clone(),
            cards,
        }
    }
}
