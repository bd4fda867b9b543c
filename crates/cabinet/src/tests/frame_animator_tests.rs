use super::*;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn spring_converges_to_the_target() {
    let mut animator = FrameAnimator::new();
    animator.animate_primary(44.0, 328.0, SpringSpec::settle());

    let mut finished = false;
    let mut last_offset = 44.0;
    for _ in 0..2_000 {
        let update = animator.tick(FRAME);
        if let Some(offset) = update.offset {
            last_offset = offset;
        }
        if update.primary_finished {
            finished = true;
            break;
        }
    }

    assert!(finished, "spring should come to rest");
    assert_eq!(last_offset, 328.0);
    assert!(animator.is_empty());
}

#[test]
fn spring_with_initial_velocity_still_settles_on_the_anchor() {
    let mut animator = FrameAnimator::new();
    animator.animate_primary(
        300.0,
        328.0,
        SpringSpec::settle().with_initial_velocity(18.0),
    );

    let mut last_offset = 300.0;
    let mut finished = false;
    for _ in 0..2_000 {
        let update = animator.tick(FRAME);
        if let Some(offset) = update.offset {
            last_offset = offset;
        }
        if update.primary_finished {
            finished = true;
            break;
        }
    }

    assert!(finished);
    assert_eq!(last_offset, 328.0);
}

#[test]
fn zero_distance_animation_finishes_immediately() {
    let mut animator = FrameAnimator::new();
    animator.animate_primary(100.0, 100.0, SpringSpec::settle());

    let update = animator.tick(FRAME);
    assert!(update.primary_finished);
    assert_eq!(update.offset, Some(100.0));
}

#[test]
fn paused_animations_do_not_advance() {
    let mut animator = FrameAnimator::new();
    animator.animate_primary(44.0, 328.0, SpringSpec::settle());
    animator.pause_all();

    let update = animator.tick(FRAME);
    assert_eq!(update.offset, None);
    assert!(!update.primary_finished);

    animator.continue_all();
    let update = animator.tick(FRAME);
    assert!(update.offset.is_some());
}

#[test]
fn feedback_can_be_scrubbed_while_paused() {
    let mut animator = FrameAnimator::new();
    animator.start_feedback();
    animator.pause_all();

    animator.scrub_feedback(0.5);
    let update = animator.tick(FRAME);
    assert_eq!(update.dimming, 0.5);

    animator.scrub_feedback(2.0);
    assert_eq!(animator.dimming_fraction(), 1.0);
}

#[test]
fn forward_fade_completes_and_keeps_the_backdrop_dimmed() {
    let mut animator = FrameAnimator::new();
    animator.start_feedback();

    for _ in 0..30 {
        animator.tick(FRAME);
    }

    assert!(animator.is_empty(), "completed fade is discarded");
    assert_eq!(animator.dimming_fraction(), 1.0);
}

#[test]
fn reversed_fade_runs_back_to_clear() {
    let mut animator = FrameAnimator::new();
    animator.start_feedback();
    animator.pause_all();
    animator.scrub_feedback(0.6);
    animator.set_feedback_reversed(true);
    animator.continue_all();

    for _ in 0..30 {
        animator.tick(FRAME);
    }

    assert!(animator.is_empty());
    assert_eq!(animator.dimming_fraction(), 0.0);
}

#[test]
fn cancel_primary_abandons_the_spring() {
    let mut animator = FrameAnimator::new();
    animator.animate_primary(44.0, 328.0, SpringSpec::settle());
    assert_eq!(animator.primary_target(), Some(328.0));

    animator.cancel_primary();
    assert_eq!(animator.primary_target(), None);

    let update = animator.tick(FRAME);
    assert_eq!(update.offset, None);
    assert!(!update.primary_finished);
}

#[test]
fn start_feedback_is_idempotent_for_a_running_fade() {
    let mut animator = FrameAnimator::new();
    animator.start_feedback();
    animator.scrub_feedback(0.4);
    animator.set_feedback_reversed(true);

    // A second start does not stack a new fade; it re-aims the existing one.
    animator.start_feedback();
    assert_eq!(animator.dimming_fraction(), 0.4);

    animator.tick(FRAME);
    assert!(animator.dimming_fraction() > 0.4, "fade runs forward again");
}
