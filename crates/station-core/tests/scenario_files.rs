use std::path::PathBuf;

use contracts::{ScenarioConfig, WorldEventType};
use station_core::{PrototypeManager, StationWorld};

fn aurora_scenario() -> ScenarioConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenarios/aurora.json");
    ScenarioConfig::load(path).expect("aurora scenario loads")
}

#[test]
fn aurora_scenario_runs_end_to_end() {
    let config = aurora_scenario();
    let mut world = StationWorld::from_scenario(&config).expect("spawn");
    world.apply_job_assignment(&config).expect("assignment");

    let snapshot = world.snapshot();
    assert_eq!(snapshot.cards.len(), 5);

    let quartermaster = &snapshot.cards[0];
    assert_eq!(quartermaster.label, "Hollis Brandt's ID card (Logistics Officer)");
    assert_eq!(
        quartermaster.id_card.job_departments,
        vec!["Cargo".to_string(), "Command".to_string()]
    );
    assert!(quartermaster.access.contains(&"External".to_string()));
    let record = quartermaster.record.as_ref().expect("record");
    assert_eq!(record.job_title, "Logistics Officer");
    assert_eq!(record.job_prototype.as_deref(), Some("Quartermaster"));
    assert_eq!(record.job_icon.as_deref(), Some("JobIconQuarterMaster"));

    let chaplain = &snapshot.cards[2];
    assert_eq!(chaplain.id_card.job_title.as_deref(), Some("Chaplain"));
    assert!(chaplain.id_card.job_icon.is_none());

    let salvager = &snapshot.cards[3];
    assert_eq!(salvager.station.as_deref(), Some("Salvage Wreck"));
    assert!(!salvager.access.contains(&"Salvage".to_string()));

    let bartender = &snapshot.cards[4];
    assert!(bartender.station.is_none());
    assert!(bartender.access.is_empty());
    assert_eq!(world.events_of(WorldEventType::InvalidJobId).count(), 1);
}

#[test]
fn aurora_scenario_reports_dangling_references() {
    let config = aurora_scenario();
    assert!(config.station_issues().is_empty());
    let issues = PrototypeManager::from_catalog(config.prototypes)
        .expect("catalog")
        .validate();
    assert_eq!(issues, vec!["job Chaplain references unknown icon JobIconChaplain".to_string()]);
}
