use std::io::{BufRead, Lines};

use anyhow::Result;
use mancala::{Player, Score, Stones};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::GameLogger;

/// One record of a self-play trajectory. Serialized as a single JSON object per line:
///
/// ```text
/// {"event":"sow","stones":[4,4,4,4,4,4,0,4,4,4,4,4,4,0],"player":"A","pit":2}
/// {"event":"end","score":[26,22],"winner":"A"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case", deny_unknown_fields)]
pub enum GameEvent {
    /// The board as it was before `player` sowed `pit`.
    Sow {
        stones: Stones,
        player: Player,
        pit: usize,
    },
    End {
        score: Score,
        winner: Option<Player>,
    },
}

impl GameEvent {
    pub fn replay<L: GameLogger + ?Sized>(&self, logger: &mut L) -> Result<()> {
        match self {
            GameEvent::Sow {
                stones,
                player,
                pit,
            } => logger.on_sow(stones, *player, *pit),
            GameEvent::End { score, winner } => logger.on_end(*score, *winner),
        }
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            GameEvent::Sow { player, pit, .. } if !player.pits().contains(pit) => Err(format!(
                "pit {} is not a playable pit of player {}",
                pit, player
            )),
            GameEvent::Sow {
                stones,
                player,
                pit,
            } if stones[*pit] == 0 => Err(format!(
                "pit {} of player {} is empty",
                pit, player
            )),
            GameEvent::End { score, winner } if score.leader() != *winner => Err(format!(
                "winner {:?} does not match {}",
                winner, score
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LogParseError {
    #[error("line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: malformed event: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: invalid event: {reason}")]
    InvalidEvent { line: usize, reason: String },
}

pub fn parse_event(line: &str, line_num: usize) -> Result<GameEvent, LogParseError> {
    let event: GameEvent = serde_json::from_str(line).map_err(|source| LogParseError::Json {
        line: line_num,
        source,
    })?;

    event
        .validate()
        .map_err(|reason| LogParseError::InvalidEvent {
            line: line_num,
            reason,
        })?;

    Ok(event)
}

/// Strictly parses a JSON-lines event log. Blank lines are skipped; anything else that is not a
/// well-formed event is an error carrying its 1-based line number.
pub fn read_events<R: BufRead>(reader: R) -> EventReader<R> {
    EventReader {
        lines: reader.lines(),
        line_num: 0,
    }
}

/// Parses a log and feeds every event into `logger`, returning how many were replayed.
pub fn replay_events<R: BufRead, L: GameLogger + ?Sized>(reader: R, logger: &mut L) -> Result<usize> {
    let mut replayed = 0;

    for event in read_events(reader) {
        event?.replay(logger)?;
        replayed += 1;
    }

    Ok(replayed)
}

pub struct EventReader<R> {
    lines: Lines<R>,
    line_num: usize,
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<GameEvent, LogParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_num += 1;

            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(LogParseError::Io {
                        line: self.line_num,
                        source,
                    }))
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            return Some(parse_event(line.trim(), self.line_num));
        }
    }
}
