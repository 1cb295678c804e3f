use std::fmt;

use contracts::{GameEvent, GameEventKind};
use tracing::trace;

use super::StationWorld;
use crate::preset::PresetIdCardSystem;

/// A system subscribed to world events.
pub trait EntitySystem: fmt::Debug {
    fn name(&self) -> &'static str;
    fn subscriptions(&self) -> &'static [GameEventKind];
    fn handle(&mut self, world: &mut StationWorld, event: &GameEvent);
}

impl EntitySystem for PresetIdCardSystem {
    fn name(&self) -> &'static str {
        "preset_id_card"
    }

    fn subscriptions(&self) -> &'static [GameEventKind] {
        &[GameEventKind::MapInit, GameEventKind::RulePlayerJobsAssigned]
    }

    fn handle(&mut self, world: &mut StationWorld, event: &GameEvent) {
        match event {
            GameEvent::MapInit { entity } => {
                if let Some(outcome) = self.on_map_init(world, *entity) {
                    world.record_card_outcome(&outcome, event.kind());
                }
            }
            GameEvent::RulePlayerJobsAssigned => {
                for outcome in self.on_jobs_assigned(world) {
                    world.record_card_outcome(&outcome, event.kind());
                }
            }
        }
    }
}

impl StationWorld {
    /// Queue `event` and deliver it to every subscribed system. Events raised
    /// while handlers run are delivered after the current one, in order.
    pub fn raise(&mut self, event: GameEvent) {
        self.pending_events.push_back(event);
        if self.dispatching {
            return;
        }

        self.dispatching = true;
        while let Some(event) = self.pending_events.pop_front() {
            let kind = event.kind();
            let mut systems = std::mem::take(&mut self.systems);
            for system in systems.iter_mut() {
                if system.subscriptions().contains(&kind) {
                    trace!(system = system.name(), ?kind, "dispatching event");
                    system.handle(self, &event);
                }
            }
            // Systems registered by a handler land after the existing ones.
            systems.append(&mut self.systems);
            self.systems = systems;
        }
        self.dispatching = false;
    }
}
