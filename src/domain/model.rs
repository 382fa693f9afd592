use serde::{Deserialize, Serialize};

/// Sense of a rotation on the dial. `Increase` moves toward higher numbers
/// (clockwise, the `R` tokens), `Decrease` toward lower ones (`L` tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Increase,
    Decrease,
}

/// One parsed rotation instruction.
///
/// Malformed tokens parse to `Invalid` rather than an error so that a bad
/// line skips cleanly instead of aborting the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationCommand {
    Valid { direction: Direction, magnitude: u64 },
    Invalid,
}

impl RotationCommand {
    pub fn is_valid(&self) -> bool {
        matches!(self, RotationCommand::Valid { .. })
    }
}

/// Which of the two zero counters answers the question at hand.
///
/// The two puzzle parts differ only in which counter they read, so this is a
/// runtime selector rather than two dial types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountingPolicy {
    /// Count commands after which the dial rests exactly on 0.
    TerminalRest,
    /// Count every instant the sweeping pointer coincides with 0.
    SweepCrossing,
}

/// Final state of a dial after a full command sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialReport {
    pub position: u8,
    pub terminal_zero_count: u64,
    pub crossing_count: u64,
}

impl DialReport {
    pub fn answer(&self, policy: CountingPolicy) -> u64 {
        match policy {
            CountingPolicy::TerminalRest => self.terminal_zero_count,
            CountingPolicy::SweepCrossing => self.crossing_count,
        }
    }
}
