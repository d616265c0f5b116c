// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline entry definitions for the sequencer.

use serde::{Deserialize, Serialize};

/// A single element of a sequencer timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entry<T> {
    /// Wait this many ticks before the next entry is consumed.
    ///
    /// Stored timelines only ever contain pauses with a cycle count
    /// greater than zero.
    Pause(u32),
    /// A payload emitted verbatim on the tick that consumes it
    Step(T),
}

impl<T> Entry<T> {
    /// Whether this entry is a pause
    pub fn is_pause(&self) -> bool {
        matches!(self, Self::Pause(_))
    }

    /// Whether this entry is a step
    pub fn is_step(&self) -> bool {
        matches!(self, Self::Step(_))
    }

    /// Get the step payload if present
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Step(value) => Some(value),
            Self::Pause(_) => None,
        }
    }

    /// Get the pause cycle count if present
    pub fn cycles(&self) -> Option<u32> {
        match self {
            Self::Pause(cycles) => Some(*cycles),
            Self::Step(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let pause: Entry<&str> = Entry::Pause(3);
        assert!(pause.is_pause());
        assert!(!pause.is_step());
        assert_eq!(pause.cycles(), Some(3));
        assert_eq!(pause.value(), None);

        let step = Entry::Step("fade");
        assert!(step.is_step());
        assert!(!step.is_pause());
        assert_eq!(step.value(), Some(&"fade"));
        assert_eq!(step.cycles(), None);
    }

    #[test]
    fn test_entry_serialization() {
        let entries = vec![Entry::Pause(2), Entry::Step("fade".to_string())];
        let text = ron::to_string(&entries).unwrap();
        let loaded: Vec<Entry<String>> = ron::from_str(&text).unwrap();
        assert_eq!(loaded, entries);
    }
}
