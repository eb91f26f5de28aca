//! Content domain: tests for RON parsing and profile collection.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::loader::{collect_profiles, parse_data_file};
use super::{
    ActiveProfile, ContentPaths, MotionProfileDef, MotionProfiles, load_content,
    load_motion_profiles,
};
use crate::movement::dev::{DEMO_GRAVITY, demo_motion};
use crate::movement::{MotionConfig, MotionDefaults};

const PROFILES: &str = r#"
(
    schema_version: 1,
    items: [
        (
            id: "platformer",
            name: "Platformer",
            motion: (jump_speed: 420.0, move_speed: 240.0),
        ),
        (
            id: "runner",
            name: "Runner",
            motion: (
                jump_speed: 420.0,
                move_speed: 200.0,
                const_move: true,
                chasing: true,
                chasing_rate: 1.5,
            ),
        ),
    ],
)
"#;

fn profile(id: &str, motion: MotionConfig) -> MotionProfileDef {
    MotionProfileDef {
        id: id.to_string(),
        name: id.to_string(),
        motion,
    }
}

#[test]
fn test_parse_profiles_fills_missing_fields_with_defaults() {
    let items: Vec<MotionProfileDef> =
        parse_data_file("motion_profiles.ron", PROFILES).expect("profiles parse");

    assert_eq!(items.len(), 2);
    let platformer = &items[0].motion;
    assert_eq!(platformer.jump_speed, 420.0);
    assert_eq!(platformer.move_speed, 240.0);
    assert_eq!(platformer.fall_multiplier, 2.5);
    assert_eq!(platformer.low_jump_multiplier, 2.0);
    assert!(!platformer.const_move);

    let runner = &items[1].motion;
    assert!(runner.const_move);
    assert!(runner.chasing);
    assert_eq!(runner.chasing_rate, 1.5);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_data_file::<MotionProfileDef>("broken.ron", "(items: [")
        .expect_err("truncated file must fail");

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_collect_profiles_keeps_file_order() {
    let (profiles, errors) = collect_profiles(
        "motion_profiles.ron",
        vec![
            profile("b", MotionConfig::default()),
            profile("a", MotionConfig::default()),
        ],
    );

    assert!(errors.is_empty());
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles.first().map(|p| p.id.as_str()), Some("b"));
    assert_eq!(profiles.next_after("b").map(|p| p.id.as_str()), Some("a"));
    assert_eq!(profiles.next_after("a").map(|p| p.id.as_str()), Some("b"));
    assert!(profiles.next_after("missing").is_none());
}

#[test]
fn test_collect_profiles_rejects_invalid_and_duplicate() {
    let invalid = MotionConfig {
        fall_multiplier: 0.5,
        ..MotionConfig::default()
    };
    let (profiles, errors) = collect_profiles(
        "motion_profiles.ron",
        vec![
            profile("ok", MotionConfig::default()),
            profile("bad", invalid),
            profile("ok", MotionConfig::default()),
        ],
    );

    assert_eq!(profiles.len(), 1);
    assert!(profiles.get("bad").is_none());
    assert_eq!(errors.len(), 2);
    assert!(errors[0].message.contains("fall_multiplier"));
    assert!(errors[1].message.contains("Duplicate"));
}

#[test]
fn test_missing_directory_reports_io_error() {
    let (profiles, errors) =
        load_motion_profiles(std::path::Path::new("definitely/not/a/data/dir"));

    assert!(profiles.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.starts_with("IO error"));
}

#[test]
fn test_shipped_profiles_load_cleanly() {
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let (profiles, errors) = load_motion_profiles(&data_dir);

    assert!(errors.is_empty(), "{:?}", errors);
    assert!(profiles.get("platformer").is_some());
    assert!(profiles.get("runner").is_some());
}

#[test]
fn test_demo_tuning_matches_shipped_platformer_profile() {
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let (profiles, _) = load_motion_profiles(&data_dir);
    let platformer = profiles.get("platformer").expect("platformer profile");

    assert_eq!(platformer.motion, demo_motion());
    assert_eq!(profiles.first().map(|p| p.id.as_str()), Some("platformer"));

    // Held jump reaches a playable height at demo gravity
    let apex = demo_motion().held_jump_height(DEMO_GRAVITY);
    assert!(apex > 60.0 && apex < 200.0, "apex {}", apex);
}

fn content_world(data_dir: std::path::PathBuf) -> World {
    let mut world = World::new();
    world.insert_resource(ContentPaths { data_dir });
    world.insert_resource(MotionDefaults(demo_motion()));
    world.init_resource::<ActiveProfile>();
    world
}

#[test]
fn test_missing_content_keeps_seeded_defaults() {
    let mut world = content_world("definitely/not/a/data/dir".into());

    world.run_system_once(load_content).expect("load runs");

    assert_eq!(world.resource::<MotionDefaults>().0, demo_motion());
    assert!(world.resource::<ActiveProfile>().id.is_none());
    assert!(world.resource::<MotionProfiles>().is_empty());
}

#[test]
fn test_loaded_content_selects_first_profile() {
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data");
    let mut world = content_world(data_dir);
    world.resource_mut::<MotionDefaults>().0 = MotionConfig::default();

    world.run_system_once(load_content).expect("load runs");

    assert_eq!(world.resource::<MotionDefaults>().0, demo_motion());
    assert_eq!(
        world.resource::<ActiveProfile>().id.as_deref(),
        Some("platformer")
    );
    assert_eq!(world.resource::<MotionProfiles>().len(), 2);
}
