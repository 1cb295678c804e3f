use super::*;

fn default_world() -> (ScenarioConfig, StationWorld) {
    let config = ScenarioConfig::default();
    let world = StationWorld::from_scenario(&config).expect("scenario spawns");
    (config, world)
}

fn card_on(world: &StationWorld, station: &str, job: &str) -> EntityUid {
    let station = world.station_by_name(station).expect("station");
    world
        .snapshot()
        .cards
        .into_iter()
        .find(|card| {
            card.preset.job_name.as_deref() == Some(job)
                && world.stations.owning_station(card.uid) == Some(station)
        })
        .map(|card| card.uid)
        .expect("card present")
}

#[test]
fn spawn_configures_cards_with_base_access() {
    let (_, world) = default_world();
    let janitor = card_on(&world, "Aurora Station", "Janitor");

    let card = world.id_card(janitor).expect("id card");
    assert_eq!(card.job_title.as_deref(), Some("Janitor"));
    assert_eq!(card.job_departments, vec!["Civilian".to_string()]);
    assert_eq!(card.job_icon.as_deref(), Some("JobIconJanitor"));

    let tags = world.access_tags(janitor).expect("access");
    assert!(tags.contains("Janitor"));
    assert!(!tags.contains("Service"));
}

#[test]
fn jobs_assigned_upgrades_cards_on_extended_stations_only() {
    let (config, mut world) = default_world();
    world.apply_job_assignment(&config).expect("assignment");

    let janitor = card_on(&world, "Aurora Station", "Janitor");
    assert!(world.access_tags(janitor).expect("access").contains("Service"));

    let passenger = card_on(&world, "Kestrel Outpost", "Passenger");
    assert!(world
        .access_tags(passenger)
        .expect("access")
        .tags
        .is_empty());
}

#[test]
fn overrides_win_over_prototype_title() {
    let (config, mut world) = default_world();
    world.apply_job_assignment(&config).expect("assignment");

    let captain = card_on(&world, "Aurora Station", "Captain");
    let card = world.id_card(captain).expect("id card");
    assert_eq!(card.full_name.as_deref(), Some("Tomas Reyes"));
    assert_eq!(card.job_title.as_deref(), Some("Acting Captain"));
    assert_eq!(card.job_departments, vec!["Command".to_string()]);
    assert_eq!(
        world.entity_name(captain),
        Some("Tomas Reyes's ID card (Acting Captain)")
    );
}

#[test]
fn job_override_updates_record_and_syncs_per_configuration() {
    let (config, mut world) = default_world();
    let captain = card_on(&world, "Aurora Station", "Captain");
    let key = world.card_record_key(captain).expect("record key");

    assert_eq!(world.record(key).expect("record").job_title, "Acting Captain");
    assert_eq!(world.record_sync_count(key), 1);

    world.apply_job_assignment(&config).expect("assignment");
    assert_eq!(world.record_sync_count(key), 2);
    assert_eq!(world.events_of(WorldEventType::RecordSynchronized).count(), 2);
}

#[test]
fn unknown_job_is_logged_and_leaves_card_blank() {
    let mut world = StationWorld::new(
        "test",
        PrototypeManager::from_catalog(ScenarioConfig::default().prototypes).expect("catalog"),
    );
    let card = world
        .spawn_card(
            None,
            PresetIdCard {
                job_name: Some("Clown".to_string()),
                id_name: Some("Honk".to_string()),
                custom_job_name: None,
            },
            None,
        )
        .expect("spawn");

    let id_card = world.id_card(card).expect("id card");
    assert!(id_card.job_title.is_none());
    assert!(id_card.job_icon.is_none());
    assert_eq!(id_card.full_name.as_deref(), Some("Honk"));
    assert!(world.access_tags(card).expect("access").tags.is_empty());

    let invalid = world
        .events_of(WorldEventType::InvalidJobId)
        .collect::<Vec<_>>();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].entity, Some(card));
    let details = invalid[0].details.as_ref().expect("details");
    assert_eq!(details["job_id"], "Clown");
    assert_eq!(details["trigger"], "map_init");
}

#[test]
fn spawning_onto_a_non_station_fails() {
    let (_, mut world) = default_world();
    let janitor = card_on(&world, "Aurora Station", "Janitor");
    let err = world
        .spawn_card(Some(janitor), PresetIdCard::default(), None)
        .expect_err("not a station");
    assert!(matches!(err, WorldError::NotAStation(uid) if uid == janitor));
}

#[test]
fn unknown_station_in_scenario_fails() {
    let mut config = ScenarioConfig::default();
    config.cards[0].station = Some("Nowhere".to_string());
    let err = StationWorld::from_scenario(&config).expect_err("unknown station");
    assert!(matches!(err, WorldError::UnknownStation(name) if name == "Nowhere"));
}

#[test]
fn deleted_cards_are_not_reconfigured() {
    let (config, mut world) = default_world();
    let janitor = card_on(&world, "Aurora Station", "Janitor");
    assert!(world.delete_entity(janitor));
    assert!(!world.delete_entity(janitor));
    let logged_before = world.events().len();

    world.apply_job_assignment(&config).expect("assignment");
    assert!(world.id_card(janitor).is_none());

    let reconfigured = world.events()[logged_before..]
        .iter()
        .filter(|event| event.event_type == WorldEventType::CardConfigured)
        .filter_map(|event| event.entity)
        .collect::<Vec<_>>();
    assert!(!reconfigured.is_empty());
    assert!(!reconfigured.contains(&janitor));
}

#[test]
fn unknown_job_after_configuration_keeps_prior_card_state() {
    let (config, mut world) = default_world();
    let janitor = card_on(&world, "Aurora Station", "Janitor");
    let card_before = world.id_card(janitor).cloned().expect("id card");
    let access_before = world.access_tags(janitor).cloned().expect("access");
    assert_eq!(card_before.job_title.as_deref(), Some("Janitor"));

    world.preset_mut(janitor).expect("preset").job_name = Some("Clown".to_string());
    world.apply_job_assignment(&config).expect("assignment");

    assert_eq!(world.id_card(janitor), Some(&card_before));
    assert_eq!(world.access_tags(janitor), Some(&access_before));
    assert!(!world.access_tags(janitor).expect("access").contains("Service"));

    let invalid = world
        .events_of(WorldEventType::InvalidJobId)
        .collect::<Vec<_>>();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].entity, Some(janitor));
    let details = invalid[0].details.as_ref().expect("details");
    assert_eq!(details["trigger"], "rule_player_jobs_assigned");
}

#[test]
fn duplicate_station_names_are_rejected() {
    let mut config = ScenarioConfig::default();
    let mut twin = config.stations[0].clone();
    twin.extended_access_on_assignment = Some(false);
    config.stations.push(twin);

    let err = StationWorld::from_scenario(&config).expect_err("duplicate station");
    assert!(matches!(err, WorldError::DuplicateStation(name) if name == "Aurora Station"));
}

#[test]
fn card_records_carry_the_job_icon() {
    let (_, world) = default_world();
    let captain = card_on(&world, "Aurora Station", "Captain");
    let key = world.card_record_key(captain).expect("record key");
    let record = world.record(key).expect("record");
    assert_eq!(record.job_icon.as_deref(), Some("JobIconCaptain"));
    assert_eq!(record.job_prototype.as_deref(), Some("Captain"));
}

#[test]
fn deleting_a_station_drops_its_records() {
    let (_, mut world) = default_world();
    let captain = card_on(&world, "Aurora Station", "Captain");
    let key = world.card_record_key(captain).expect("record key");
    let station = world.station_by_name("Aurora Station").expect("station");

    assert!(world.delete_entity(station));
    assert!(world.record(key).is_none());
    assert!(world.card_record_key(captain).is_none());
    assert!(world.snapshot().cards.iter().all(|card| card.uid != captain || card.station.is_none()));
}

#[test]
fn snapshot_lists_cards_in_entity_order() {
    let (_, world) = default_world();
    let snapshot = world.snapshot();
    assert_eq!(snapshot.scenario_id, "scenario_local_001");
    assert_eq!(snapshot.cards.len(), 4);
    assert!(snapshot.cards.windows(2).all(|pair| pair[0].uid < pair[1].uid));
    let captain = snapshot
        .cards
        .iter()
        .find(|card| card.preset.job_name.as_deref() == Some("Captain"))
        .expect("captain");
    assert_eq!(captain.station.as_deref(), Some("Aurora Station"));
    assert!(captain.record.is_some());
    assert!(captain.access.contains(&"Captain".to_string()));
}

#[test]
fn record_without_station_is_dropped() {
    let mut world = StationWorld::new("test", PrototypeManager::default());
    let card = world
        .spawn_card(
            None,
            PresetIdCard::default(),
            Some(RecordSpec {
                name: "Drifter".to_string(),
                job_title: "Passenger".to_string(),
            }),
        )
        .expect("spawn");
    assert!(world.card_record_key(card).is_none());
}
