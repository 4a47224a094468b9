// Host-side tests for the slideshow state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod slideshow {
    include!("../src/core/slideshow.rs");
}

use constants::SUCCESS_DELAY_MS;
use slideshow::*;

fn abc() -> Slideshow {
    Slideshow::new(ImageSequence::new(["A", "B", "C"]).unwrap())
}

#[test]
fn empty_sequence_is_rejected() {
    let err = ImageSequence::new(Vec::<String>::new()).unwrap_err();
    assert_eq!(err, SlideshowError::EmptySequence);
}

#[test]
fn starts_on_first_image_and_active() {
    let show = abc();
    assert_eq!(show.cursor(), 0);
    assert_eq!(show.stage(), Stage::Active);
    assert_eq!(show.current_image(), Some("A"));
}

#[test]
fn three_image_walkthrough() {
    let mut show = abc();

    let first = show.activate();
    assert_eq!(first.show, Some(1));
    assert!(!first.completed);
    assert_eq!(first.chime_after_ms, None);
    assert_eq!(show.current_image(), Some("B"));
    assert_eq!(show.stage(), Stage::Active);

    let second = show.activate();
    assert_eq!(second.show, Some(2));
    assert!(second.completed);
    assert_eq!(second.chime_after_ms, Some(200));
    assert_eq!(show.current_image(), Some("C"));
    assert_eq!(show.stage(), Stage::Complete);
}

#[test]
fn cursor_tracks_activation_count() {
    let images: Vec<String> = (0..6).map(|i| format!("image-{i}.png")).collect();
    let mut show = Slideshow::new(ImageSequence::new(images.clone()).unwrap());
    for n in 0..images.len() - 1 {
        let a = show.activate();
        assert_eq!(show.cursor(), n + 1);
        assert_eq!(a.show, Some(n + 1));
        assert_eq!(show.current_image(), Some(images[n + 1].as_str()));
    }
}

#[test]
fn completes_exactly_once() {
    let images: Vec<String> = (0..6).map(|i| format!("{i}")).collect();
    let mut show = Slideshow::new(ImageSequence::new(images).unwrap());
    let completions: Vec<usize> = (0..20)
        .map(|_| show.activate())
        .enumerate()
        .filter(|(_, a)| a.completed)
        .map(|(i, _)| i)
        .collect();
    // fifth press moves the cursor to index 5 == len - 1
    assert_eq!(completions, vec![4]);
    assert_eq!(show.cursor(), 5);
}

#[test]
fn complete_is_terminal() {
    let mut show = abc();
    show.activate();
    show.activate();
    assert_eq!(show.stage(), Stage::Complete);

    let after = show.activate();
    assert_eq!(after, Activation::default());
    assert_eq!(show.cursor(), 2);
    assert_eq!(show.stage(), Stage::Complete);
}

#[test]
fn single_image_never_leaves_range() {
    let mut show = Slideshow::new(ImageSequence::new(["only"]).unwrap());
    for _ in 0..3 {
        let a = show.activate();
        assert_eq!(a.show, None);
        assert!(!a.completed);
        assert_eq!(show.cursor(), 0);
        assert_eq!(show.stage(), Stage::Active);
    }
    assert_eq!(show.current_image(), Some("only"));
}

#[test]
fn two_images_complete_on_first_press() {
    let mut show = Slideshow::new(ImageSequence::new(["a", "b"]).unwrap());
    let a = show.activate();
    assert_eq!(a.show, Some(1));
    assert!(a.completed);
}

#[test]
fn sequence_accessors() {
    let seq = ImageSequence::new(["x", "y"]).unwrap();
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.last_index(), 1);
    assert_eq!(seq.get(1), Some("y"));
    assert_eq!(seq.get(2), None);
}

#[test]
fn chime_is_planned_only_on_the_completing_press() {
    let images: Vec<String> = (0..6).map(|i| format!("{i}")).collect();
    let mut show = Slideshow::new(ImageSequence::new(images).unwrap());
    let presses: Vec<Activation> = (0..8).map(|_| show.activate()).collect();

    for (i, a) in presses.iter().enumerate() {
        match i {
            0..=3 => assert_eq!(
                *a,
                Activation {
                    show: Some(i + 1),
                    completed: false,
                    chime_after_ms: None,
                }
            ),
            4 => assert_eq!(
                *a,
                Activation {
                    show: Some(5),
                    completed: true,
                    chime_after_ms: Some(SUCCESS_DELAY_MS),
                }
            ),
            _ => assert_eq!(*a, Activation::default()),
        }
    }
}

#[test]
fn single_image_never_plans_a_chime() {
    let mut show = Slideshow::new(ImageSequence::new(["only"]).unwrap());
    assert!((0..5).all(|_| show.activate().chime_after_ms.is_none()));
}
