use crate::core::dial::{Dial, START_POSITION};
use crate::core::{CountingPolicy, DialReport, Result, TokenSource};

/// Drives one full simulation: pull the token sequence from its source,
/// feed a fresh dial, hand back the report.
pub struct DialEngine<S: TokenSource> {
    source: S,
    start_position: u8,
}

impl<S: TokenSource> DialEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            start_position: START_POSITION,
        }
    }

    pub fn with_start_position(source: S, start_position: u8) -> Self {
        Self {
            source,
            start_position,
        }
    }

    pub fn run(&self) -> Result<DialReport> {
        tracing::info!("Reading rotation tokens...");
        let tokens = self.source.tokens()?;
        tracing::info!("Read {} tokens", tokens.len());

        let mut dial = Dial::seeded(self.start_position)?;

        tracing::info!("Applying rotations from position {}...", dial.position());
        for token in &tokens {
            let position = dial.apply_token(token)?;
            tracing::debug!("{} -> {}", token, position);
        }

        let report = dial.report();
        tracing::info!("Final position: {}", report.position);
        for policy in [CountingPolicy::TerminalRest, CountingPolicy::SweepCrossing] {
            tracing::info!("{:?} answer: {}", policy, report.answer(policy));
        }

        Ok(report)
    }
}
