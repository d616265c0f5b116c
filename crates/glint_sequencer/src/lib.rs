// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation sequencer for the Glint toolkit.
//!
//! This crate provides frame-paced UI animation:
//! - Timelines of pause and step entries
//! - Tick-at-a-time playback at a nominal 25 frames per second
//! - Thread-safe mutation and advancement
//!
//! ## Architecture
//!
//! The sequencer is built on:
//! - A tagged timeline entry (pause or step)
//! - A cursor with a pending-wait countdown
//! - One mutex serializing every operation per instance
//! - Wall-clock to tick-cycle conversion
//!
//! A driving loop (typically a UI timer firing every tick) calls
//! [`AnimationSequencer::tick`] once per frame and renders whatever value
//! comes back. Producers on any thread append or replace timeline entries
//! at any time relative to ticking.

pub mod entry;
pub mod sequencer;
pub mod timing;

pub use entry::Entry;
pub use sequencer::{AnimationSequencer, SequencerId};
pub use timing::{cycles_for, FRAME_RATE, TICK_INTERVAL};
