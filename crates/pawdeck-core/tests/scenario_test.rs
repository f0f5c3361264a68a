//! End-to-end walkthroughs of a full session: mixed drags and direction
//! commands over a three-card deck, snap-backs, and restart.

use std::time::Duration;

use pawdeck_core::{
    IgnoredReason, Outcome, Point, PointerEvent, PointerId, SwipeDirection, SwipeSession,
    Transition,
};
use web_time::Instant;

const SETTLE: Duration = Duration::from_millis(260);
const P1: PointerId = PointerId(1);

fn down(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down {
        pointer: P1,
        at: Point::new(x, y),
    }
}

fn mv(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move {
        pointer: P1,
        at: Point::new(x, y),
    }
}

fn up() -> PointerEvent {
    PointerEvent::Up { pointer: P1 }
}

#[test]
fn three_card_deck_full_walkthrough() {
    let mut s = SwipeSession::new(vec!["A", "B", "C"]);
    let mut t = Instant::now();

    // Card A: liked via button.
    assert_eq!(
        s.like(t),
        Outcome::Applied(Transition::Committed(SwipeDirection::Right))
    );
    assert_eq!(s.liked(), &["A"]);
    assert_eq!(s.position(), 0, "advancement waits for the settle");
    t += SETTLE;
    assert_eq!(s.tick(t), Outcome::Applied(Transition::Settled));
    assert_eq!(s.position(), 1);
    assert_eq!(s.current(), Some(&"B"));

    // Card B: dragged left past the threshold.
    s.handle(down(300.0, 100.0), t);
    s.handle(mv(240.0, 100.0), t);
    s.handle(mv(170.0, 110.0), t);
    assert_eq!(
        s.handle(up(), t),
        Outcome::Applied(Transition::Committed(SwipeDirection::Left))
    );
    assert_eq!(s.disliked(), &["B"]);
    t += SETTLE;
    assert_eq!(s.tick(t), Outcome::Applied(Transition::Settled));
    assert_eq!(s.position(), 2);
    assert_eq!(s.current(), Some(&"C"));
    assert_eq!(s.next_up(), None);

    // Card C: liked via button; deck exhausts.
    s.like(t);
    t += SETTLE;
    s.tick(t);
    assert_eq!(s.liked(), &["A", "C"]);
    assert_eq!(s.disliked(), &["B"]);
    assert_eq!(s.position(), 3);
    assert!(s.is_exhausted());
    assert_eq!(s.current(), None);
    assert_eq!(s.liked().len() + s.disliked().len(), s.position());
}

#[test]
fn sub_threshold_drag_snaps_back() {
    let mut s = SwipeSession::new(vec!["A", "B", "C"]);
    let t = Instant::now();

    s.handle(down(100.0, 100.0), t);
    s.handle(mv(150.0, 90.0), t);
    assert_eq!(s.handle(up(), t), Outcome::Applied(Transition::SnappedBack));

    assert!(s.offset().is_zero());
    assert_eq!(s.position(), 0);
    assert!(s.liked().is_empty());
    assert!(s.disliked().is_empty());
    assert_eq!(s.current(), Some(&"A"));
}

#[test]
fn drag_survives_leaving_card_bounds() {
    // No hit testing after capture: coordinates far outside any plausible
    // card still update the captured drag.
    let mut s = SwipeSession::new(vec!["A"]);
    let t = Instant::now();

    s.handle(down(10.0, 10.0), t);
    s.handle(mv(-2000.0, 5000.0), t);
    assert_eq!(
        s.handle(up(), t),
        Outcome::Applied(Transition::Committed(SwipeDirection::Left))
    );
}

#[test]
fn stray_events_between_cards_are_ignored() {
    let mut s = SwipeSession::new(vec!["A", "B"]);
    let t = Instant::now();

    s.handle(down(0.0, 0.0), t);
    s.handle(mv(140.0, 0.0), t);
    s.handle(up(), t);

    // Late duplicate release and a move from a stale pointer, mid-settle.
    assert_eq!(
        s.handle(up(), t),
        Outcome::Ignored(IgnoredReason::NotDragging)
    );
    assert_eq!(
        s.handle(mv(500.0, 0.0), t),
        Outcome::Ignored(IgnoredReason::Locked)
    );
    assert_eq!(s.liked(), &["A"]);
    assert_eq!(s.position(), 0);
}

#[test]
fn restart_replays_the_same_deck() {
    let mut s = SwipeSession::new(vec!["A", "B"]);
    let mut t = Instant::now();

    s.like(t);
    t += SETTLE;
    s.tick(t);
    s.dislike(t);
    t += SETTLE;
    s.tick(t);
    assert!(s.is_exhausted());

    s.reset();
    assert_eq!(s.position(), 0);
    assert_eq!(s.len(), 2);
    assert_eq!(s.current(), Some(&"A"), "reset re-shows the same order");
    assert!(s.liked().is_empty() && s.disliked().is_empty());

    // The replayed deck behaves like a fresh one.
    s.dislike(t);
    t += SETTLE;
    s.tick(t);
    assert_eq!(s.disliked(), &["A"]);
}

#[test]
fn settle_timing_is_exact() {
    let mut s = SwipeSession::new(vec!["A"]);
    let t = Instant::now();
    s.like(t);

    assert_eq!(
        s.tick(t + Duration::from_millis(259)),
        Outcome::Ignored(IgnoredReason::NotDue)
    );
    assert!(s.is_locked());
    assert_eq!(
        s.tick(t + Duration::from_millis(260)),
        Outcome::Applied(Transition::Settled)
    );
    assert!(!s.is_locked());
    assert!(s.is_exhausted());
}

#[test]
fn default_cat_deck_session() {
    let deck = pawdeck_core::CatCatalog::default().build();
    let mut s = SwipeSession::new(deck);
    assert_eq!(s.len(), 20);
    assert_eq!(s.progress(), 0.0);

    let mut t = Instant::now();
    for i in 0..20 {
        let outcome = if i % 2 == 0 { s.like(t) } else { s.dislike(t) };
        assert!(outcome.is_applied());
        t += SETTLE;
        assert_eq!(s.tick(t), Outcome::Applied(Transition::Settled));
    }
    assert!(s.is_exhausted());
    assert_eq!(s.liked().len(), 10);
    assert_eq!(s.disliked().len(), 10);
    assert_eq!(s.progress(), 1.0);
}
