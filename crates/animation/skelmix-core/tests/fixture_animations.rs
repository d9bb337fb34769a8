use approx::assert_abs_diff_eq;
use skelmix_core::{parse_animation_json, Animation, Skeleton, Timeline};

fn load(name: &str) -> Animation {
    let json = skelmix_test_fixtures::animations::json(name).expect("load animation fixture");
    parse_animation_json(&json).expect("parse animation fixture")
}

fn biped() -> Skeleton {
    skelmix_test_fixtures::skeletons::load("biped").expect("load biped skeleton")
}

#[test]
fn walk_fixture_loads_with_derived_duration() {
    let walk = load("walk");
    assert_eq!(walk.name, "walk");
    assert_eq!(walk.duration(), 1.0);
    assert_eq!(walk.timelines().len(), 4);
    assert!(walk.check_targets(&biped()).is_ok());
    assert!(walk.overlapping_targets().is_empty());
    // Omitted curves were filled in as linear.
    match &walk.timelines()[1] {
        Timeline::Rotate(t) => assert_eq!(t.frame_count(), 3),
        other => panic!("expected rotate, got {other:?}"),
    }
    assert_eq!(walk.timelines()[2].curves().map(|c| c.len()), Some(4));
}

#[test]
fn walk_legs_swing_through_zero() {
    let walk = load("walk");
    let mut sk = biped();
    let leg_l = sk.find_bone("leg_l").unwrap();
    let leg_r = sk.find_bone("leg_r").unwrap();

    walk.apply(&mut sk, 0.25, true);
    // Symmetric ease: halfway through 330 -> 30 is 360.
    assert_abs_diff_eq!(sk.bones[leg_l].pose.rotation, 360.0, epsilon = 0.05);
    // Linear: halfway through 30 -> 330 is 0.
    assert_abs_diff_eq!(sk.bones[leg_r].pose.rotation, 0.0, epsilon = 1e-4);
}

#[test]
fn walk_hip_bob_and_stepped_head_scale() {
    let walk = load("walk");
    let mut sk = biped();
    let hip = sk.find_bone("hip").unwrap();
    let head = sk.find_bone("head").unwrap();

    walk.apply(&mut sk, 0.125, false);
    assert_abs_diff_eq!(sk.bones[hip].pose.y, 42.0, epsilon = 1e-4);

    walk.apply(&mut sk, 0.4, false);
    assert_eq!(sk.bones[head].pose.scale_x, 1.0);
    assert_eq!(sk.bones[head].pose.scale_y, 1.0);

    walk.apply(&mut sk, 0.5, false);
    assert_abs_diff_eq!(sk.bones[head].pose.scale_x, 1.1, epsilon = 1e-6);

    walk.apply(&mut sk, 0.75, false);
    assert_abs_diff_eq!(sk.bones[head].pose.scale_x, 1.05, epsilon = 1e-5);
    assert_abs_diff_eq!(sk.bones[head].pose.scale_y, 0.95, epsilon = 1e-5);
}

#[test]
fn blink_switches_attachments_and_tints() {
    let blink = load("blink");
    assert_eq!(blink.duration(), 3.0);
    let mut sk = biped();
    let eyes = sk.find_slot("eyes").unwrap();
    let head = sk.find_slot("head").unwrap();
    let body = sk.find_slot("body").unwrap();

    // Eyes timeline starts at 0.5s; before that the slot keeps its attachment.
    sk.slots[eyes].attachment = Some("eyes_squint".into());
    blink.apply(&mut sk, 0.25, false);
    assert_eq!(sk.attachment(eyes), Some("eyes_squint"));

    blink.apply(&mut sk, 1.0, false);
    assert_eq!(sk.attachment(eyes), Some("eyes_open"));
    let c = sk.slots[body].color;
    assert_abs_diff_eq!(c[1], 0.8, epsilon = 1e-6);
    assert_abs_diff_eq!(c[2], 0.8, epsilon = 1e-6);

    blink.apply(&mut sk, 2.1, false);
    assert_eq!(sk.attachment(eyes), Some("eyes_closed"));
    assert_eq!(sk.attachment(head), Some("head_damaged"));

    blink.apply(&mut sk, 2.6, false);
    assert_eq!(sk.attachment(head), None);

    // 5.1s wraps to 2.1s.
    blink.apply(&mut sk, 5.1, true);
    assert_eq!(sk.attachment(eyes), Some("eyes_closed"));
    assert_eq!(sk.attachment(head), Some("head_damaged"));
}

#[test]
fn fixtures_round_trip_through_json() {
    for key in skelmix_test_fixtures::animations::keys() {
        let anim = load(&key);
        let json = anim.to_json().expect("serialize");
        let back = parse_animation_json(&json).expect("reparse");
        assert_eq!(back, anim, "fixture {key} changed after round trip");
    }
}
