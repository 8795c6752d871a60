// Host-side tests for the loading screen progress.

use heart_core::*;

#[test]
fn progress_is_monotone_and_capped() {
    let mut p = LoadingProgress::new(7);
    let mut last = p.percent();
    assert_eq!(last, 0.0);
    for _ in 0..40 {
        let next = p.advance();
        assert!(next >= last);
        assert!(next <= 100.0);
        last = next;
    }
    assert!(p.is_complete());
    assert_eq!(p.advance(), 100.0);
}

#[test]
fn completes_within_twenty_ticks() {
    // every step is at least 5%
    for seed in 0..32 {
        let mut p = LoadingProgress::new(seed);
        let ticks = (1..=20).find(|_| {
            p.advance();
            p.is_complete()
        });
        assert!(ticks.is_some(), "seed {seed}");
    }
}

#[test]
fn steps_stay_in_range() {
    let mut p = LoadingProgress::new(99);
    let first = p.advance();
    assert!((LOADING_STEP_MIN..LOADING_STEP_MIN + LOADING_STEP_SPAN).contains(&first));
}

#[test]
fn facts_come_from_the_table() {
    let mut p = LoadingProgress::new(1);
    for _ in 0..10 {
        assert!(DID_YOU_KNOW_FACTS.contains(&p.pick_fact()));
    }
}
