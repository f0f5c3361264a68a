#![forbid(unsafe_code)]

//! Deterministic scripted driver for swipe sessions.
//!
//! Tests and E2E harnesses describe an interaction as a [`Script`] of
//! [`ScriptStep`]s, replay it against a [`pawdeck_core::SwipeSession`] under
//! a [`ManualClock`], and assert on the resulting [`Transcript`]. Time only
//! moves when a step says so, so replaying the same script always produces
//! the same transcript.

pub mod clock;
pub mod script;

pub use clock::ManualClock;
pub use script::{Script, ScriptDriver, ScriptStep, Transcript, TranscriptEntry};
