// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
fn image_list_is_non_empty_and_unique() {
    assert!(!IMAGES.is_empty());
    for (i, a) in IMAGES.iter().enumerate() {
        assert!(IMAGES[i + 1..].iter().all(|b| a != b), "duplicate {a}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn exponential_ramps_stay_positive() {
    // exponentialRampToValueAtTime rejects zero and sign changes
    assert!(CLICK_FREQ_END_HZ > 0.0);
    assert!(CLICK_GAIN_END > 0.0);
    assert!(SUCCESS_GAIN_END > 0.0);
    assert!(CLICK_GAIN_START > CLICK_GAIN_END);
    assert!(SUCCESS_GAIN_START > SUCCESS_GAIN_END);
    assert!(CLICK_FREQ_START_HZ > CLICK_FREQ_END_HZ);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_parameters_are_sane() {
    assert!(PARTICLE_SPEED_MIN > 0.0);
    assert!(PARTICLE_SPEED_MAX > PARTICLE_SPEED_MIN);
    assert_eq!(PARTICLE_LIFETIME_MS, 1000);
    assert!(PARTICLE_PALETTE.iter().all(|c| c.starts_with('#') && c.len() == 7));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn chime_fits_inside_success_window() {
    let last_offset = (SUCCESS_NOTES_HZ.len() as u32 - 1) * SUCCESS_NOTE_SPACING_MS;
    assert_eq!(last_offset, 200);
    assert!(SUCCESS_DELAY_MS > 0);
}

#[test]
fn dom_selectors_are_well_formed() {
    for sel in [
        IMAGE_DISPLAY_SELECTOR,
        COMPLETION_MESSAGE_SELECTOR,
        EFFECTS_CONTAINER_SELECTOR,
    ] {
        assert!(sel.starts_with('.'));
    }
    assert!(!ACTIVATION_BUTTON_ID.starts_with('#'));
    assert!(PARTICLE_DX_VAR.starts_with("--") && PARTICLE_DY_VAR.starts_with("--"));
}
