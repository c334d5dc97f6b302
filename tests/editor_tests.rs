//! Integration tests for the editor workflow: author a campaign, persist it
//! through the store, reload it, and play the edited content.

use magetower::{
    tile, CampaignConfig, CampaignStore, CustomTileKind, GameSession, KeyRing, MonsterStats,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn authored_campaign_survives_a_store_round_trip() {
    init_logs();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campaigns.json");

    let mut store = CampaignStore::open(&path).unwrap();
    let id = store.create("Spire of Trials");

    // Author a second floor with a guarded staircase.
    let mut config = store.get(id).unwrap().config.clone();
    let upper = config.add_floor();
    config.paint_tile(0, 3, 5, tile::STAIRS_UP).unwrap();
    config.paint_tile(upper, 5, 5, tile::STAIRS_DOWN).unwrap();
    config.paint_tile(upper, 5, 4, tile::MONSTER_ORC).unwrap();
    let charm = config.create_custom_tile(
        "Lucky Charm",
        "Star",
        "#fde047",
        CustomTileKind::Item {
            hp: 0,
            atk: 1,
            def: 1,
            gold: 50,
            exp: 0,
            keys: KeyRing::default(),
            pickaxes: 0,
        },
    );
    config.paint_tile(upper, 5, 3, charm).unwrap();
    store.update_config(id, config.clone()).unwrap();
    store.save().unwrap();

    let reloaded = CampaignStore::open(&path).unwrap();
    let found = reloaded.get(id).unwrap();
    assert_eq!(found.config, config);
    assert_eq!(found.config.floors.len(), 4);
    assert_eq!(found.config.floors[upper].get(5, 3), Some(charm));
    assert!(found.last_played > 0);
}

#[test]
fn monster_edits_change_combat_outcomes() {
    let mut config = CampaignConfig::default();
    // Floor 0 keeps a Green Slime at (1, 3); buff it beyond the hero's reach.
    let buffed = MonsterStats {
        def: 50,
        ..config.monster_defs[&tile::MONSTER_SLIME_GREEN].clone()
    };
    config.set_monster(tile::MONSTER_SLIME_GREEN, buffed).unwrap();

    // Drop the hero next to the slime.
    let mut hero = config.initial_hero.clone();
    hero.x = 1;
    hero.y = 4;
    config.set_initial_hero(hero);

    let mut session = GameSession::new(&config).unwrap();
    session.attempt_move(&config, 0, -1);

    assert_eq!(session.log.latest(), Some("You cannot hurt the Green Slime!"));
    assert_eq!(session.floors[0].get(1, 3), Some(tile::MONSTER_SLIME_GREEN));
}

#[test]
fn edits_never_leak_into_a_running_session() {
    let mut config = CampaignConfig::default();
    let session = GameSession::new(&config).unwrap();

    config.paint_tile(0, 5, 5, tile::WALL).unwrap();

    // The session's snapshot predates the edit.
    assert_eq!(session.floors[0].get(5, 5), Some(tile::EMPTY));
    // A fresh session picks it up.
    let restarted = GameSession::new(&config).unwrap();
    assert_eq!(restarted.floors[0].get(5, 5), Some(tile::WALL));
}

#[test]
fn removing_a_floor_can_invalidate_the_start_position() {
    let mut config = CampaignConfig::default();
    let mut hero = config.initial_hero.clone();
    hero.floor = 2;
    config.set_initial_hero(hero);
    assert!(GameSession::new(&config).is_ok());

    config.remove_floor(2).unwrap();
    // The editor accepted the removal; session creation reports the fault.
    assert!(GameSession::new(&config).is_err());
}

#[test]
fn custom_tile_json_uses_the_type_tag() {
    let mut config = CampaignConfig::default();
    config.create_custom_tile(
        "Gloom",
        "Ghost",
        "#334155",
        CustomTileKind::Monster {
            hp: 80,
            atk: 25,
            def: 4,
            gold: 10,
            exp: 6,
        },
    );

    let json = config.to_json().unwrap();
    assert!(json.contains("\"type\": \"MONSTER\""));

    let back = CampaignConfig::from_json(&json).unwrap();
    assert_eq!(back, config);
}
