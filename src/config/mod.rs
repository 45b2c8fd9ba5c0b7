//! Event-kind selection configuration.

use std::fmt;

use crate::models::EventKind;

/// Which event kinds feed aggregation and map-code extraction.
///
/// Defaults to all six enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventKindSet {
    enabled: [bool; 6],
}

impl Default for EventKindSet {
    fn default() -> Self {
        Self { enabled: [true; 6] }
    }
}

impl EventKindSet {
    /// All six kinds enabled
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// No kind enabled
    #[must_use]
    pub fn none() -> Self {
        Self { enabled: [false; 6] }
    }

    /// Whether a kind is enabled
    #[must_use]
    pub fn contains(&self, kind: EventKind) -> bool {
        self.enabled[kind as usize]
    }

    /// Enable a kind
    pub fn enable(&mut self, kind: EventKind) {
        self.enabled[kind as usize] = true;
    }

    /// Disable a kind
    pub fn disable(&mut self, kind: EventKind) {
        self.enabled[kind as usize] = false;
    }

    /// Flip a kind's state, returning the new state
    pub fn toggle(&mut self, kind: EventKind) -> bool {
        self.enabled[kind as usize] = !self.enabled[kind as usize];
        self.enabled[kind as usize]
    }

    /// Enabled kinds in table-rendering order
    pub fn iter_enabled(&self) -> impl Iterator<Item = EventKind> {
        EventKind::ALL.into_iter().filter(|kind| self.contains(*kind))
    }
}

impl fmt::Display for EventKindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Event kinds:")?;
        for kind in EventKind::ALL {
            writeln!(
                f,
                "  {kind}: {}",
                if self.contains(kind) { "ON" } else { "OFF" }
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EventKindSet;
    use crate::models::EventKind;

    #[test]
    fn default_enables_all_six_kinds() {
        let set = EventKindSet::default();
        assert_eq!(set.iter_enabled().count(), 6);
    }

    #[test]
    fn toggle_flips_state() {
        let mut set = EventKindSet::all();
        assert!(!set.toggle(EventKind::Marriage));
        assert!(!set.contains(EventKind::Marriage));
        assert!(set.toggle(EventKind::Marriage));
    }
}
