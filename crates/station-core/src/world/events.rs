use contracts::{EntityUid, GameEventKind, WorldEvent, WorldEventType, SCHEMA_VERSION_V1};
use serde_json::{json, Value};

use super::StationWorld;
use crate::preset::{AccessOutcome, CardOutcome, JobTitleOutcome, StepOutcome};

impl StationWorld {
    pub(super) fn push_event(
        &mut self,
        event_type: WorldEventType,
        entity: Option<EntityUid>,
        details: Option<Value>,
    ) -> u64 {
        let sequence = self.event_log.len() as u64 + 1;
        self.event_log.push(WorldEvent {
            schema_version: SCHEMA_VERSION_V1.to_string(),
            sequence,
            event_type,
            entity,
            details,
        });
        sequence
    }

    pub(super) fn record_card_outcome(&mut self, outcome: &CardOutcome, trigger: GameEventKind) {
        if outcome.access == AccessOutcome::UnknownJob {
            let job_id = self
                .presets
                .get(&outcome.entity)
                .and_then(|preset| preset.job_name.clone());
            self.push_event(
                WorldEventType::InvalidJobId,
                Some(outcome.entity),
                Some(json!({ "job_id": job_id, "trigger": trigger })),
            );
        }

        let access = match outcome.access {
            AccessOutcome::NoJob => "no_job",
            AccessOutcome::UnknownJob => "unknown_job",
            AccessOutcome::Applied { .. } => "applied",
        };
        let icon_set = matches!(outcome.access, AccessOutcome::Applied { icon_set: true, .. });
        let record_synced = matches!(
            outcome.job_title,
            JobTitleOutcome::Applied {
                record_synced: true
            }
        );
        self.push_event(
            WorldEventType::CardConfigured,
            Some(outcome.entity),
            Some(json!({
                "trigger": trigger,
                "extended": outcome.extended,
                "access": access,
                "icon_set": icon_set,
                "name_applied": outcome.name == StepOutcome::Applied,
                "job_title_applied": outcome.job_title != JobTitleOutcome::Skipped,
                "record_synced": record_synced,
            })),
        );
    }

    /// Audit entries of one type, in order.
    pub fn events_of(&self, event_type: WorldEventType) -> impl Iterator<Item = &WorldEvent> {
        self.event_log
            .iter()
            .filter(move |event| event.event_type == event_type)
    }
}
