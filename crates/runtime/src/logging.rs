#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLogEventKind {
    RunStarted,
    RoundSettled,
    RoundsExhausted,
    InsufficientFunds,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunLogEvent {
    pub round: u64,
    pub kind: RunLogEventKind,
    pub balance: f64,
    pub bet_amount: Option<f64>,
}

impl RunLogEvent {
    pub fn new(round: u64, kind: RunLogEventKind, balance: f64) -> Self {
        Self {
            round,
            kind,
            balance,
            bet_amount: None,
        }
    }

    pub fn settled(round: u64, balance: f64, bet_amount: f64) -> Self {
        Self {
            round,
            kind: RunLogEventKind::RoundSettled,
            balance,
            bet_amount: Some(bet_amount),
        }
    }
}

pub trait RunLogWriter {
    fn write(&mut self, event: RunLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemoryRunLogWriter {
    events: Vec<RunLogEvent>,
}

impl InMemoryRunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RunLogEvent] {
        &self.events
    }

    pub fn count(&self, kind: RunLogEventKind) -> usize {
        self.events.iter().filter(|event| event.kind == kind).count()
    }
}

impl RunLogWriter for InMemoryRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        self.events.push(event);
    }
}

/// Forwards run events to `tracing`, tagged with the game being played.
#[derive(Debug, Clone, Copy)]
pub struct TracingRunLogWriter {
    game: &'static str,
}

impl TracingRunLogWriter {
    pub fn new(game: &'static str) -> Self {
        Self { game }
    }
}

impl RunLogWriter for TracingRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        let game = self.game;
        let RunLogEvent {
            round,
            balance,
            bet_amount,
            ..
        } = event;

        match event.kind {
            RunLogEventKind::RunStarted => {
                tracing::debug!(game, balance, "simulation started");
            }
            RunLogEventKind::RoundSettled => {
                tracing::trace!(game, round, balance, bet_amount, "round settled");
            }
            RunLogEventKind::RoundsExhausted => {
                tracing::debug!(game, round, balance, "all rounds played");
            }
            RunLogEventKind::InsufficientFunds => {
                tracing::debug!(game, round, balance, "balance below base bet, stopping");
            }
            RunLogEventKind::Cancelled => {
                tracing::debug!(game, round, balance, "simulation cancelled");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRunLogWriter, RunLogEvent, RunLogEventKind, RunLogWriter};

    #[test]
    fn in_memory_writer_keeps_events_in_order() {
        let mut writer = InMemoryRunLogWriter::new();

        writer.write(RunLogEvent::new(0, RunLogEventKind::RunStarted, 100.0));
        writer.write(RunLogEvent::settled(1, 90.0, 10.0));
        writer.write(RunLogEvent::new(1, RunLogEventKind::RoundsExhausted, 90.0));

        assert_eq!(writer.events().len(), 3);
        assert_eq!(writer.events()[1].bet_amount, Some(10.0));
        assert_eq!(writer.count(RunLogEventKind::RoundSettled), 1);
        assert_eq!(
            writer.events()[2].kind,
            RunLogEventKind::RoundsExhausted
        );
    }
}
