//! Preset ID card configuration over an in-memory station world.

pub mod access;
pub mod host;
pub mod id_card;
pub mod preset;
pub mod prototype;
pub mod records;
pub mod station;
pub mod world;

pub use preset::{AccessOutcome, CardOutcome, JobTitleOutcome, PresetIdCardSystem, StepOutcome};
pub use prototype::{PrototypeError, PrototypeManager};
pub use world::{EntitySystem, StationWorld, WorldError};
