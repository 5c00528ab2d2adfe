use std::io::Write;

use anyhow::Result;
use mancala::{Player, Score, Stones};

use super::GameEvent;

pub trait GameLogger {
    fn on_sow(&mut self, stones: &Stones, player: Player, pit: usize) -> Result<()>;
    fn on_end(&mut self, score: Score, winner: Option<Player>) -> Result<()>;
}

impl<L: GameLogger + ?Sized> GameLogger for &mut L {
    fn on_sow(&mut self, stones: &Stones, player: Player, pit: usize) -> Result<()> {
        (**self).on_sow(stones, player, pit)
    }

    fn on_end(&mut self, score: Score, winner: Option<Player>) -> Result<()> {
        (**self).on_end(score, winner)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl GameLogger for NullLogger {
    fn on_sow(&mut self, _stones: &Stones, _player: Player, _pit: usize) -> Result<()> {
        Ok(())
    }

    fn on_end(&mut self, _score: Score, _winner: Option<Player>) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryLogger {
    events: Vec<GameEvent>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }
}

impl GameLogger for MemoryLogger {
    fn on_sow(&mut self, stones: &Stones, player: Player, pit: usize) -> Result<()> {
        self.events.push(GameEvent::Sow {
            stones: *stones,
            player,
            pit,
        });

        Ok(())
    }

    fn on_end(&mut self, score: Score, winner: Option<Player>) -> Result<()> {
        self.events.push(GameEvent::End { score, winner });

        Ok(())
    }
}

/// Appends each event as one JSON line. Read back with [`read_events`](super::read_events).
pub struct FileLogger<W: Write> {
    writer: W,
}

impl<W: Write> FileLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_event(&mut self, event: &GameEvent) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        writeln!(self.writer)?;

        Ok(())
    }
}

impl<W: Write> GameLogger for FileLogger<W> {
    fn on_sow(&mut self, stones: &Stones, player: Player, pit: usize) -> Result<()> {
        self.write_event(&GameEvent::Sow {
            stones: *stones,
            player,
            pit,
        })
    }

    fn on_end(&mut self, score: Score, winner: Option<Player>) -> Result<()> {
        self.write_event(&GameEvent::End { score, winner })
    }
}
