use crate::core::parser::parse_token;
use crate::core::{DialReport, Direction, Result, RotationCommand};
use crate::utils::error::DialError;

/// Number of discrete positions on the ring.
pub const DIAL_SIZE: u64 = 100;

/// Where the dial sits before any rotation is applied.
pub const START_POSITION: u8 = 50;

/// Distance, in the direction of travel, from `position` to the next
/// coincidence with 0. Increasing from p reaches 0 after 100-p steps,
/// decreasing after p steps.
fn distance_to_zero(position: u8, direction: Direction) -> u64 {
    match direction {
        Direction::Increase => DIAL_SIZE - u64::from(position),
        Direction::Decrease => u64::from(position),
    }
}

/// Whether a sweep of `span` steps from `position` touches 0 at least once.
/// Boundary-inclusive: landing exactly on 0 counts.
fn touches_zero(position: u8, direction: Direction, span: u64) -> bool {
    span >= distance_to_zero(position, direction)
}

/// How many times a rotation of `magnitude` steps from `position` sweeps the
/// pointer across (or onto) 0.
///
/// Each full 100-step loop crosses 0 exactly once; the remaining partial
/// loop contributes one more crossing iff it reaches 0 from the starting
/// position. Starting exactly on 0 and decreasing needs a correction: the
/// partial term fires for any remainder (distance-to-zero is 0), but that
/// counts the initial rest instant, which is not a crossing. The correction
/// can only apply when the partial term is 1, so the subtraction never
/// underflows.
pub fn zero_crossings(position: u8, direction: Direction, magnitude: u64) -> u64 {
    let full_loops = magnitude / DIAL_SIZE;
    let remainder = magnitude % DIAL_SIZE;
    let partial = u64::from(touches_zero(position, direction, remainder));
    let correction = u64::from(position == 0 && direction == Direction::Decrease);

    full_loops + partial - correction
}

/// The circular position indicator: 100 positions, two running zero
/// counters, driven one command at a time.
///
/// State only ever changes through [`apply`](Dial::apply) (and `reset`);
/// invalid commands leave the dial untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dial {
    position: u8,
    start: u8,
    terminal_zero_count: u64,
    crossing_count: u64,
}

impl Dial {
    /// A dial at the standard start position, 50.
    pub fn new() -> Self {
        Self {
            position: START_POSITION,
            start: START_POSITION,
            terminal_zero_count: 0,
            crossing_count: 0,
        }
    }

    /// A dial seeded at an arbitrary start position. Intended for test
    /// setups and the `--start-position` override; rejects anything
    /// outside the ring.
    pub fn seeded(position: u8) -> Result<Self> {
        if u64::from(position) >= DIAL_SIZE {
            return Err(DialError::PositionOutOfRange { value: position });
        }
        Ok(Self {
            position,
            start: position,
            terminal_zero_count: 0,
            crossing_count: 0,
        })
    }

    /// Applies one parsed command and returns the resting position.
    ///
    /// For a valid command the crossing count is accumulated first, against
    /// the pre-command position, then the position moves (wrapping both
    /// ways), then the terminal-zero counter bumps if the dial came to rest
    /// on 0. An invalid command is a complete no-op.
    pub fn apply(&mut self, command: &RotationCommand) -> u8 {
        let RotationCommand::Valid {
            direction,
            magnitude,
        } = command
        else {
            return self.position;
        };

        self.crossing_count += zero_crossings(self.position, *direction, *magnitude);

        let step = (magnitude % DIAL_SIZE) as u32;
        let position = u32::from(self.position);
        self.position = match direction {
            Direction::Increase => ((position + step) % 100) as u8,
            Direction::Decrease => ((position + 100 - step) % 100) as u8,
        };

        if self.position == 0 {
            self.terminal_zero_count += 1;
        }

        self.position
    }

    /// Parses and applies one raw token. Malformed tokens skip silently;
    /// only a magnitude overflow propagates.
    pub fn apply_token(&mut self, token: &str) -> Result<u8> {
        let command = parse_token(token)?;
        Ok(self.apply(&command))
    }

    /// Applies a whole token sequence in order and returns the final
    /// resting position.
    pub fn apply_all<I, T>(&mut self, tokens: I) -> Result<u8>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for token in tokens {
            self.apply_token(token.as_ref())?;
        }
        Ok(self.position)
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn is_zero(&self) -> bool {
        self.position == 0
    }

    /// Commands after which the dial rested exactly on 0.
    pub fn terminal_zero_count(&self) -> u64 {
        self.terminal_zero_count
    }

    /// Cumulative sweep crossings of 0 across all commands so far.
    pub fn crossing_count(&self) -> u64 {
        self.crossing_count
    }

    /// Back to the seeded start position with both counters zeroed.
    pub fn reset(&mut self) {
        self.position = self.start;
        self.terminal_zero_count = 0;
        self.crossing_count = 0;
    }

    pub fn report(&self) -> DialReport {
        DialReport {
            position: self.position,
            terminal_zero_count: self.terminal_zero_count,
            crossing_count: self.crossing_count,
        }
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
    }
}
