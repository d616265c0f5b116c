// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline playback under a per-instance lock.

use crate::entry::Entry;
use crate::timing;
use parking_lot::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for a sequencer instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequencerId(pub Uuid);

impl SequencerId {
    /// Create a new random sequencer ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SequencerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Timeline and cursor state, only ever touched behind the lock
#[derive(Debug)]
struct Inner<T> {
    /// Ordered playback entries
    timeline: Vec<Entry<T>>,
    /// Index of the next unconsumed entry
    next_index: usize,
    /// Remaining pause ticks; `None` until the first rewind or clear
    pending_wait: Option<u32>,
}

impl<T> Inner<T> {
    /// Reset the cursor to the start of the timeline
    fn reset(&mut self) {
        self.next_index = 0;
        self.pending_wait = Some(0);
    }
}

/// A frame-paced animation sequencer.
///
/// Stores an ordered timeline of [`Entry`] values and advances it one
/// tick at a time. A driving loop calls [`tick`](Self::tick) once per
/// frame (nominally every 40 ms) and renders whatever value comes back;
/// producers on any thread append or replace entries concurrently. All
/// operations serialize through one per-instance lock, so calls are
/// atomic with respect to each other, but a mutation concurrent with
/// ticking can change what the very next tick observes.
#[derive(Debug)]
pub struct AnimationSequencer<T> {
    /// Instance ID, used to correlate log output
    id: SequencerId,
    inner: Mutex<Inner<T>>,
}

impl<T> AnimationSequencer<T> {
    /// Create an empty sequencer.
    ///
    /// The pause countdown starts undefined; see
    /// [`is_finished`](Self::is_finished) for the consequence.
    pub fn new() -> Self {
        Self {
            id: SequencerId::new(),
            inner: Mutex::new(Inner {
                timeline: Vec::new(),
                next_index: 0,
                pending_wait: None,
            }),
        }
    }

    /// Get this instance's ID
    pub fn id(&self) -> SequencerId {
        self.id
    }

    /// Discard every timeline entry and reset playback.
    ///
    /// Unlike construction this leaves the sequencer in the defined
    /// ready state, so [`is_finished`](Self::is_finished) reports true
    /// immediately afterwards.
    pub fn clear(&self) {
        {
            let mut inner = self.inner.lock();
            inner.timeline.clear();
            inner.reset();
        }
        tracing::debug!("Sequencer {:?} cleared", self.id);
    }

    /// Reset playback to the start without touching the timeline
    pub fn rewind(&self) {
        self.inner.lock().reset();
        tracing::trace!("Sequencer {:?} rewound", self.id);
    }

    /// Append a pause of `cycles` ticks.
    ///
    /// Cycle counts of zero or less are silently dropped.
    pub fn append_pause(&self, cycles: i32) {
        if cycles <= 0 {
            return;
        }
        let mut inner = self.inner.lock();
        inner.timeline.push(Entry::Pause(cycles as u32));
    }

    /// Append a pause expressed as a wall-clock delay.
    ///
    /// Delays shorter than one tick ([`timing::TICK_INTERVAL`]) cannot
    /// be represented at the nominal frame rate and are silently
    /// dropped. Longer delays round up to whole cycles, so the
    /// sequencer waits at least as long as requested.
    pub fn append_delay(&self, delay: Duration) {
        let Some(cycles) = timing::cycles_for(delay) else {
            return;
        };
        let mut inner = self.inner.lock();
        inner.timeline.push(Entry::Pause(cycles));
    }

    /// Append a step carrying `value`
    pub fn append_step(&self, value: T) {
        let mut inner = self.inner.lock();
        inner.timeline.push(Entry::Step(value));
    }

    /// Append one step per value, in iteration order.
    ///
    /// An empty sequence is a no-op.
    pub fn append_steps<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        // Collect before locking; caller iterators never run while the
        // lock is held.
        let entries: Vec<Entry<T>> = values.into_iter().map(Entry::Step).collect();
        let mut inner = self.inner.lock();
        inner.timeline.extend(entries);
    }

    /// Replace the whole timeline with one step per value.
    ///
    /// Clear and append happen under a single lock acquisition, so no
    /// other caller can observe the intermediate empty state. An empty
    /// sequence leaves the sequencer in its ready state with nothing to
    /// play.
    pub fn store_steps<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let entries: Vec<Entry<T>> = values.into_iter().map(Entry::Step).collect();
        self.replace(entries);
    }

    /// Replace the whole timeline with arbitrary entries.
    ///
    /// The general form of [`store_steps`](Self::store_steps): pauses
    /// and steps may be interleaved. Zero-cycle pauses are dropped,
    /// matching [`append_pause`](Self::append_pause).
    pub fn store_entries<I>(&self, entries: I)
    where
        I: IntoIterator<Item = Entry<T>>,
    {
        let entries: Vec<Entry<T>> = entries
            .into_iter()
            .filter(|entry| entry.cycles() != Some(0))
            .collect();
        self.replace(entries);
    }

    /// Swap in a new timeline and reset the cursor, atomically
    fn replace(&self, entries: Vec<Entry<T>>) {
        let count = entries.len();
        {
            let mut inner = self.inner.lock();
            inner.timeline = entries;
            inner.reset();
        }
        tracing::debug!("Sequencer {:?} stored {} entries", self.id, count);
    }

    /// Whether playback has consumed the whole timeline and is not
    /// mid-pause.
    ///
    /// A freshly constructed sequencer has an undefined pause countdown
    /// and reports false even with an empty timeline; call
    /// [`rewind`](Self::rewind) or [`clear`](Self::clear) at least once
    /// before relying on this query.
    pub fn is_finished(&self) -> bool {
        let inner = self.inner.lock();
        inner.pending_wait == Some(0) && inner.next_index >= inner.timeline.len()
    }

    /// Number of entries in the timeline
    pub fn len(&self) -> usize {
        self.inner.lock().timeline.len()
    }

    /// Whether the timeline holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.lock().timeline.is_empty()
    }

    /// Snapshot of the current timeline contents
    pub fn entries(&self) -> Vec<Entry<T>>
    where
        T: Clone,
    {
        self.inner.lock().timeline.clone()
    }

    /// Advance playback by exactly one tick.
    ///
    /// Returns the value to render this frame, or `None` while a pause
    /// is running or once the timeline is exhausted (there is no
    /// auto-rewind). Consuming a pause entry counts as the first of its
    /// waited ticks, so a pause of `k` cycles yields exactly `k` empty
    /// ticks before the next entry plays. A call never emits more than
    /// one value and never combines a pause expiry with an emission.
    pub fn tick(&self) -> Option<T>
    where
        T: Clone,
    {
        let mut inner = self.inner.lock();

        if let Some(wait) = inner.pending_wait {
            if wait > 0 {
                inner.pending_wait = Some(wait - 1);
                return None;
            }
        }

        if inner.next_index >= inner.timeline.len() {
            return None;
        }

        let entry = inner.timeline[inner.next_index].clone();
        inner.next_index += 1;

        match entry {
            Entry::Pause(cycles) => {
                // cycles > 0 by construction; this tick is the first of
                // the waited ticks.
                inner.pending_wait = Some(cycles - 1);
                None
            }
            Entry::Step(value) => Some(value),
        }
    }
}

impl<T> Default for AnimationSequencer<T> {
    fn default() -> Self {
        Self::new()
    }
}
