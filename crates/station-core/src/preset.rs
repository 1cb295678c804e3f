//! Preset ID cards: configure a card from its job prototype when it spawns,
//! and again once the round's jobs are assigned.
//!
//! A card can spawn before its station exists, or before the station knows
//! whether it runs extended access (players are not spawned yet). Cards on
//! such stations come up with base access at map init and are reconfigured
//! when `RulePlayerJobsAssigned` fires.
//!
//! Reconfiguration is not guarded against the event firing more than once
//! per round. Card state converges to the same values each time, but a
//! linked personnel record is synchronised again on every run.

use contracts::{EntityUid, PresetIdCard};
use tracing::{debug, error};

use crate::host::CardHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The preset names no job.
    NoJob,
    /// The preset names a job the registry does not know; nothing changed.
    UnknownJob,
    Applied { extended: bool, icon_set: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Skipped,
    Applied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobTitleOutcome {
    Skipped,
    Applied { record_synced: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardOutcome {
    pub entity: EntityUid,
    pub extended: bool,
    pub access: AccessOutcome,
    pub name: StepOutcome,
    pub job_title: JobTitleOutcome,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PresetIdCardSystem;

impl PresetIdCardSystem {
    /// Returns `None` when `entity` carries no preset.
    pub fn on_map_init<H: CardHost>(&self, host: &mut H, entity: EntityUid) -> Option<CardOutcome> {
        let preset = host.preset_card(entity)?;

        // Stations without a jobs component (outposts, shuttles) never
        // grant extended access.
        let extended = host
            .owning_station(entity)
            .and_then(|station| host.station_jobs(station))
            .map(|jobs| jobs.extended_access)
            .unwrap_or(false);

        Some(self.configure(host, entity, &preset, extended))
    }

    /// Reconfigure every preset card whose station runs extended access.
    /// Everything else was already configured correctly at map init.
    pub fn on_jobs_assigned<H: CardHost>(&self, host: &mut H) -> Vec<CardOutcome> {
        let mut outcomes = Vec::new();
        for (entity, preset) in host.preset_cards() {
            let Some(station) = host.owning_station(entity) else {
                continue;
            };
            let extended = host
                .station_jobs(station)
                .is_some_and(|jobs| jobs.extended_access);
            if !extended {
                continue;
            }
            outcomes.push(self.configure(host, entity, &preset, true));
        }
        debug!(reconfigured = outcomes.len(), "preset cards reconfigured after job assignment");
        outcomes
    }

    fn configure<H: CardHost>(
        &self,
        host: &mut H,
        entity: EntityUid,
        preset: &PresetIdCard,
        extended: bool,
    ) -> CardOutcome {
        let access = self.setup_id_access(host, entity, preset, extended);
        let name = self.setup_id_name(host, entity, preset);
        let job_title = self.setup_id_job(host, entity, preset);
        CardOutcome {
            entity,
            extended,
            access,
            name,
            job_title,
        }
    }

    pub fn setup_id_access<H: CardHost>(
        &self,
        host: &mut H,
        entity: EntityUid,
        preset: &PresetIdCard,
        extended: bool,
    ) -> AccessOutcome {
        let Some(job_id) = preset.job_name.as_deref() else {
            return AccessOutcome::NoJob;
        };

        let Some(job) = host.job_prototype(job_id) else {
            error!(%entity, job_id, "invalid job id for preset card");
            return AccessOutcome::UnknownJob;
        };

        host.set_access_to_job(entity, &job, extended);
        host.try_change_job_title(entity, job.localized_name());
        host.try_change_job_department(entity, &job);

        let icon_set = match host.status_icon(&job.icon) {
            Some(icon) => host.try_change_job_icon(entity, &icon),
            None => false,
        };

        AccessOutcome::Applied { extended, icon_set }
    }

    pub fn setup_id_name<H: CardHost>(
        &self,
        host: &mut H,
        entity: EntityUid,
        preset: &PresetIdCard,
    ) -> StepOutcome {
        let Some(full_name) = preset.id_name.as_deref() else {
            return StepOutcome::Skipped;
        };
        host.try_change_full_name(entity, full_name);
        StepOutcome::Applied
    }

    /// Apply the job-title override and carry it into the linked record.
    pub fn setup_id_job<H: CardHost>(
        &self,
        host: &mut H,
        entity: EntityUid,
        preset: &PresetIdCard,
    ) -> JobTitleOutcome {
        let Some(custom) = preset.custom_job_name.as_deref() else {
            return JobTitleOutcome::Skipped;
        };
        host.try_change_job_title(entity, custom);

        let Some(key) = host.record_key(entity) else {
            return JobTitleOutcome::Applied {
                record_synced: false,
            };
        };
        let Some(record) = host.try_get_record_mut(key) else {
            return JobTitleOutcome::Applied {
                record_synced: false,
            };
        };
        record.job_title = custom.to_string();
        host.synchronize(key);

        JobTitleOutcome::Applied {
            record_synced: true,
        }
    }
}
