//! Integration tests for ComboGestureDetector

use chroma_tone::{ComboGestureDetector, Millis};

const HOLD: u32 = 2000;

#[test]
fn fires_once_at_threshold_while_held() {
    let mut combo = ComboGestureDetector::<Millis>::new(HOLD as u64);

    let mut fired_at = None;
    let mut fires = 0;
    for t in (0..=HOLD + 1000).step_by(10) {
        if combo.tick(Millis(t), true, true) {
            fires += 1;
            fired_at.get_or_insert(t);
        }
    }

    assert_eq!(fires, 1);
    assert_eq!(fired_at, Some(HOLD));
}

#[test]
fn release_before_threshold_restarts_timer() {
    let mut combo = ComboGestureDetector::<Millis>::new(HOLD as u64);

    assert!(!combo.tick(Millis(0), true, true));
    assert!(!combo.tick(Millis(1500), true, true));
    assert!(!combo.tick(Millis(1600), true, false));
    assert!(!combo.in_progress());

    // Re-press: the earlier 1.5 s do not count.
    assert!(!combo.tick(Millis(1700), true, true));
    assert!(!combo.tick(Millis(2100), true, true));
    assert!(!combo.tick(Millis(3600), true, true));
    assert!(combo.tick(Millis(3700), true, true));
}

#[test]
fn either_button_release_clears_hold() {
    let mut combo = ComboGestureDetector::<Millis>::new(HOLD as u64);
    combo.tick(Millis(0), true, true);
    assert!(combo.in_progress());
    combo.tick(Millis(10), false, true);
    assert!(!combo.in_progress());

    combo.tick(Millis(20), true, true);
    combo.tick(Millis(30), true, false);
    assert!(!combo.in_progress());
}

#[test]
fn reset_discards_progress() {
    let mut combo = ComboGestureDetector::<Millis>::new(HOLD as u64);
    combo.tick(Millis(0), true, true);
    combo.reset();
    assert!(!combo.in_progress());
    assert!(!combo.tick(Millis(2500), true, true));
}
