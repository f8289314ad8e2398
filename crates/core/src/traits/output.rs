//! Output sink abstraction
//!
//! The line the controller drives. Writes are fire-and-forget: a sink that
//! can fail reports the failure itself, the controller never retries.

use crate::blink::Logic;

/// Physical or simulated output line
pub trait OutputSink {
    /// Drive the line to the given level
    fn set_level(&mut self, level: Logic);
}

impl<O: OutputSink + ?Sized> OutputSink for &mut O {
    fn set_level(&mut self, level: Logic) {
        (**self).set_level(level);
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock output sink recording the last level and write counts
///
/// # Example
///
/// ```
/// use pico_blink_core::blink::Logic;
/// use pico_blink_core::traits::{MockOutput, OutputSink};
///
/// let mut line = MockOutput::new();
/// assert_eq!(line.level(), None);
///
/// line.set_level(Logic::High);
/// assert_eq!(line.level(), Some(Logic::High));
/// assert_eq!(line.write_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockOutput {
    level: Option<Logic>,
    high_writes: u32,
    low_writes: u32,
}

impl MockOutput {
    /// Create a sink that has never been written
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written level, `None` before the first write
    pub fn level(&self) -> Option<Logic> {
        self.level
    }

    /// Total number of writes
    pub fn write_count(&self) -> u32 {
        self.high_writes + self.low_writes
    }

    /// Number of `High` writes
    pub fn high_writes(&self) -> u32 {
        self.high_writes
    }

    /// Number of `Low` writes
    pub fn low_writes(&self) -> u32 {
        self.low_writes
    }
}

impl OutputSink for MockOutput {
    fn set_level(&mut self, level: Logic) {
        match level {
            Logic::High => self.high_writes += 1,
            Logic::Low => self.low_writes += 1,
        }
        self.level = Some(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_output_counts_writes() {
        let mut line = MockOutput::new();

        line.set_level(Logic::High);
        line.set_level(Logic::Low);
        line.set_level(Logic::Low);

        assert_eq!(line.level(), Some(Logic::Low));
        assert_eq!(line.high_writes(), 1);
        assert_eq!(line.low_writes(), 2);
        assert_eq!(line.write_count(), 3);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn drive<O: OutputSink>(mut sink: O) {
            sink.set_level(Logic::High);
        }

        let mut line = MockOutput::new();
        drive(&mut line);
        assert_eq!(line.level(), Some(Logic::High));
    }
}
