#![forbid(unsafe_code)]

//! Script language and replay driver.
//!
//! A [`Script`] is an ordered list of steps: pointer events, direction
//! commands, clock advances, and resets. [`ScriptDriver::run`] replays the
//! steps and records one [`TranscriptEntry`] per step, tagging each with the
//! clock reading at dispatch time.
//!
//! # Invariants
//!
//! 1. Replaying the same script against the same deck yields an identical
//!    transcript (same outcomes at the same elapsed milliseconds).
//! 2. Every step, including ignored ones, appears in the transcript.

use tracing::info_span;
use web_time::Instant;

use pawdeck_core::{Outcome, Point, PointerEvent, PointerId, SwipeSession};

use crate::clock::ManualClock;

/// Pointer id used by the script helpers.
pub const SCRIPT_POINTER: PointerId = PointerId(1);

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// One step of a scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    /// Dispatch a raw pointer event at the current clock reading.
    Pointer(PointerEvent),
    /// Press the like button.
    Like,
    /// Press the dislike button.
    Dislike,
    /// Advance the clock by `ms` milliseconds, then tick the session.
    AdvanceMs(u64),
    /// Tick the session without moving the clock.
    Tick,
    /// Reset gesture state and deck together.
    Reset,
}

/// An ordered scripted interaction.
pub type Script = Vec<ScriptStep>;

/// Steps for one complete rightward swipe of the current card: press,
/// drag past the default threshold, release, and wait out the settle.
#[must_use]
pub fn swipe_right() -> Script {
    horizontal_swipe(150.0)
}

/// Steps for one complete leftward swipe of the current card.
#[must_use]
pub fn swipe_left() -> Script {
    horizontal_swipe(-150.0)
}

fn horizontal_swipe(dx: f32) -> Script {
    vec![
        ScriptStep::Pointer(PointerEvent::Down {
            pointer: SCRIPT_POINTER,
            at: Point::new(0.0, 0.0),
        }),
        ScriptStep::Pointer(PointerEvent::Move {
            pointer: SCRIPT_POINTER,
            at: Point::new(dx / 2.0, 0.0),
        }),
        ScriptStep::Pointer(PointerEvent::Move {
            pointer: SCRIPT_POINTER,
            at: Point::new(dx, 0.0),
        }),
        ScriptStep::Pointer(PointerEvent::Up {
            pointer: SCRIPT_POINTER,
        }),
        ScriptStep::AdvanceMs(260),
    ]
}

// ---------------------------------------------------------------------------
// Transcript
// ---------------------------------------------------------------------------

/// Outcome record for one replayed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranscriptEntry {
    /// Index of the step within the script.
    pub step: usize,
    /// Clock reading (elapsed ms) when the step was dispatched.
    pub at_ms: u64,
    /// What the session did with the step.
    pub outcome: Outcome,
}

/// The full record of one script replay.
pub type Transcript = Vec<TranscriptEntry>;

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Replays scripts against one session under a manual clock.
#[derive(Debug)]
pub struct ScriptDriver<T> {
    session: SwipeSession<T>,
    clock: ManualClock,
}

impl<T: Clone> ScriptDriver<T> {
    /// Create a driver over a fresh session and a clock at zero.
    #[must_use]
    pub fn new(session: SwipeSession<T>) -> Self {
        Self {
            session,
            clock: ManualClock::new(),
        }
    }

    /// Replay `script`, appending to the session's state, and return the
    /// transcript of outcomes.
    pub fn run(&mut self, script: &[ScriptStep]) -> Transcript {
        let span = info_span!("script_run", steps = script.len());
        let _guard = span.enter();

        script
            .iter()
            .enumerate()
            .map(|(step, s)| {
                let outcome = self.dispatch(*s);
                TranscriptEntry {
                    step,
                    at_ms: self.clock.elapsed_ms(),
                    outcome,
                }
            })
            .collect()
    }

    fn dispatch(&mut self, step: ScriptStep) -> Outcome {
        let now: Instant = self.clock.now();
        match step {
            ScriptStep::Pointer(event) => self.session.handle(event, now),
            ScriptStep::Like => self.session.like(now),
            ScriptStep::Dislike => self.session.dislike(now),
            ScriptStep::AdvanceMs(ms) => {
                self.clock.advance_ms(ms);
                self.session.tick(self.clock.now())
            }
            ScriptStep::Tick => self.session.tick(now),
            ScriptStep::Reset => self.session.reset(),
        }
    }

    /// The session under test, for state assertions between scripts.
    #[must_use]
    pub fn session(&self) -> &SwipeSession<T> {
        &self.session
    }

    /// The driver's clock.
    #[must_use]
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }
}
