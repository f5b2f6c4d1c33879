//! Properties of ColorState that hold after any sequence of updates

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tricolor_core::{
    ColorState, ColorUpdate, Gamut, Lab, Model, Rgb8, Xyz, lab_to_xyz, rgb_to_xyz, xyz_to_lab,
    xyz_to_rgb,
};
use tricolor_tests::patterns::{TestPattern, generate_pattern, random_lab, random_xyz};

/// The three fields describe one color, derived from `source`
fn assert_synchronized(state: &ColorState, source: Model) {
    match source {
        Model::Rgb => {
            assert_eq!(state.xyz(), rgb_to_xyz(state.rgb()));
            assert_eq!(state.lab(), xyz_to_lab(state.xyz()));
        }
        Model::Xyz => {
            assert_eq!(state.rgb(), xyz_to_rgb(state.xyz()).rgb);
            assert_eq!(state.lab(), xyz_to_lab(state.xyz()));
        }
        Model::Lab => {
            assert_eq!(state.xyz(), lab_to_xyz(state.lab()));
            assert_eq!(state.rgb(), xyz_to_rgb(state.xyz()).rgb);
        }
    }
    assert_eq!(state.hex(), state.rgb().to_hex());
}

fn random_update(rng: &mut ChaCha8Rng) -> ColorUpdate {
    match rng.gen_range(0..3) {
        0 => ColorUpdate::Rgb(Rgb8::from_array(rng.r#gen())),
        1 => ColorUpdate::Xyz(Xyz::new(
            rng.gen_range(-20.0..130.0),
            rng.gen_range(-20.0..130.0),
            rng.gen_range(-20.0..130.0),
        )),
        _ => ColorUpdate::Lab(Lab::new(
            rng.gen_range(0.0..100.0),
            rng.gen_range(-128.0..127.0),
            rng.gen_range(-128.0..127.0),
        )),
    }
}

#[test]
fn test_random_update_sequences_stay_synchronized() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x7121);
    let mut state = ColorState::new();

    for _ in 0..10_000 {
        let update = random_update(&mut rng);
        let gamut = state.apply(update);

        assert_synchronized(&state, update.model());
        match update {
            ColorUpdate::Rgb(rgb) => {
                assert_eq!(state.rgb(), rgb);
                assert_eq!(gamut, Gamut::InGamut);
            }
            ColorUpdate::Xyz(xyz) => {
                assert_eq!(state.xyz(), xyz);
                assert_eq!(gamut.is_clipped(), xyz_to_rgb(xyz).out_of_gamut);
            }
            ColorUpdate::Lab(lab) => {
                assert_eq!(state.lab(), lab);
                assert_eq!(gamut.is_clipped(), xyz_to_rgb(lab_to_xyz(lab)).out_of_gamut);
            }
        }
    }
}

#[test]
fn test_xyz_of_displayable_colors_is_in_gamut() {
    for pattern in [
        TestPattern::ColorCube,
        TestPattern::HueRamp,
        TestPattern::Grayscale,
        TestPattern::Random(5),
        TestPattern::GammaKnee,
        TestPattern::GamutBoundary,
    ] {
        for rgb in generate_pattern(pattern, 200) {
            let mut state = ColorState::new();
            let gamut = state.set_from_xyz(rgb_to_xyz(rgb));
            assert_eq!(gamut, Gamut::InGamut, "{:?} via XYZ", rgb);
            assert_eq!(state.rgb(), rgb);

            let gamut = state.set_from_lab(xyz_to_lab(rgb_to_xyz(rgb)));
            assert_eq!(gamut, Gamut::InGamut, "{:?} via Lab", rgb);
            assert_eq!(state.rgb(), rgb);
        }
    }
}

#[test]
fn test_wide_xyz_values_are_kept_verbatim() {
    let mut state = ColorState::new();
    let mut clipped = 0;

    for xyz in random_xyz(21, 5000, -50.0, 200.0) {
        if state.set_from_xyz(xyz).is_clipped() {
            clipped += 1;
        }
        assert_eq!(state.xyz(), xyz);
        assert_synchronized(&state, Model::Xyz);
    }

    // Most of that cube lies outside sRGB
    assert!(clipped > 2500, "only {} of 5000 clipped", clipped);
}

#[test]
fn test_lab_values_are_kept_verbatim() {
    let mut state = ColorState::new();
    for lab in random_lab(22, 5000) {
        let _ = state.set_from_lab(lab);
        assert_eq!(state.lab(), lab);
        assert_synchronized(&state, Model::Lab);
    }
}

#[test]
fn test_set_channel_matches_whole_update() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);

    for _ in 0..2000 {
        let mut by_channel = ColorState::new();
        by_channel.randomize(&mut rng);
        let mut by_update = by_channel;

        let index = rng.gen_range(0..3);
        let value = rng.gen_range(-10.0..110.0);
        let mut lab = by_update.lab().to_array();
        lab[index] = value;

        let a = by_channel.set_channel(Model::Lab, index, value).unwrap();
        let b = by_update.set_from_lab(Lab::from_array(lab));

        assert_eq!(a, b);
        assert_eq!(by_channel, by_update);
    }
}

#[test]
fn test_snapshot_identity_after_updates() {
    let mut rng = ChaCha8Rng::seed_from_u64(41);
    let mut state = ColorState::new();

    for _ in 0..1000 {
        let _ = state.apply(random_update(&mut rng));

        let json = state.to_snapshot().to_json().unwrap();
        let snapshot = tricolor_core::ColorSnapshot::from_json(&json).unwrap();
        let restored = ColorState::from_snapshot(&snapshot).unwrap();

        assert_eq!(restored, state);
    }
}
