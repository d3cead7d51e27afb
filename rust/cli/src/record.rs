//! JSONL move log: one [`MoveRecord`] per accepted move.
//!
//! ```text
//! {"seq":1,"player":"alice","role":"cat","origin":0,"target":9,"ts":"2024-05-01T12:00:00Z"}
//! {"seq":2,"player":"bob","role":"mouse","origin":59,"target":50,"ts":"2024-05-01T12:00:04Z"}
//! ```

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use ratongato_engine::player::{PlayerId, Role};

use crate::io_utils::ensure_parent_dir;

/// One accepted move as written to a move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based position of the move in its game
    pub seq: u32,
    /// Player who made the move
    pub player: String,
    pub role: Role,
    pub origin: u8,
    pub target: u8,
    /// Time the move was accepted (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Appends move records to a JSONL file. A disabled logger only counts.
pub struct MoveLogger {
    writer: Option<BufWriter<File>>,
    seq: u32,
}

impl MoveLogger {
    /// Creates (or truncates) the log at `path`, creating missing directories.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let f = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            seq: 0,
        })
    }

    pub fn disabled() -> Self {
        Self {
            writer: None,
            seq: 0,
        }
    }

    pub fn next_seq(&mut self) -> u32 {
        self.seq += 1;
        self.seq
    }

    pub fn write(&mut self, record: &MoveRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    /// Numbers and writes one accepted move, returning the record written.
    pub fn record(
        &mut self,
        player: &PlayerId,
        role: Role,
        origin: u8,
        target: u8,
    ) -> std::io::Result<MoveRecord> {
        let rec = MoveRecord {
            seq: self.next_seq(),
            player: player.to_string(),
            role,
            origin,
            target,
            ts: None,
        };
        self.write(&rec)?;
        Ok(rec)
    }
}

/// Parses a move log, keeping each record's 1-based line number.
///
/// Blank lines are skipped. A line that is not a valid record yields an `Err`
/// carrying the parser message, so callers decide whether to stop or go on.
pub fn parse_lines(content: &str) -> Vec<(usize, Result<MoveRecord, String>)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let parsed = serde_json::from_str::<MoveRecord>(line).map_err(|e| e.to_string());
            (i + 1, parsed)
        })
        .collect()
}

/// Recovers who sat on each side from the log itself: the first player seen
/// moving for a role holds that seat. Falls back to `default_cat` /
/// `default_mouse` for a side that never moved.
pub fn seat_players<'a, I>(
    records: I,
    default_cat: &str,
    default_mouse: &str,
) -> (PlayerId, PlayerId)
where
    I: IntoIterator<Item = &'a MoveRecord>,
{
    let mut cat: Option<&str> = None;
    let mut mouse: Option<&str> = None;
    for r in records {
        match r.role {
            Role::Cat if cat.is_none() => cat = Some(r.player.as_str()),
            Role::Mouse if mouse.is_none() => mouse = Some(r.player.as_str()),
            _ => {}
        }
        if cat.is_some() && mouse.is_some() {
            break;
        }
    }
    (
        PlayerId::from(cat.unwrap_or(default_cat)),
        PlayerId::from(mouse.unwrap_or(default_mouse)),
    )
}
