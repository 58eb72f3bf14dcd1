//! Optional per-step snapshot channel (§4.I). Each strategy decides *when*
//! to snapshot (see the trigger table in the spec); this module only
//! defines *where* a snapshot goes.
//!
//! A snapshot row is the full colouring vector at an instant, with `-1`
//! standing in for an uncoloured vertex in partial-construction strategies
//! (DSATUR, Welsh–Powell, Exact). Writes are synchronous to the search
//! loop (§9 "Snapshot back-pressure"); [`BufferedFileSink`] buffers them and
//! flushes once, on drop, rather than after every line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::coloring::Coloring;
use crate::error::Result;

/// A sink that records colouring states over the course of a strategy run.
pub trait SnapshotSink {
    /// Appends one snapshot row, `n` values in vertex order.
    fn record(&mut self, row: &[i64]);
}

/// The default sink: discards every snapshot. Strategies pay no recording
/// cost beyond a single dynamic dispatch when snapshotting is disabled.
#[derive(Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn record(&mut self, _row: &[i64]) {}
}

/// In-memory sink, used by tests to assert snapshot coherence (§8 property 8).
#[derive(Debug, Default)]
pub struct VecSink {
    /// one entry per recorded snapshot, in recording order
    pub rows: Vec<Vec<i64>>,
}

impl VecSink {
    /// Starts an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotSink for VecSink {
    fn record(&mut self, row: &[i64]) {
        self.rows.push(row.to_vec());
    }
}

/// File-backed sink: one line per snapshot, values space-separated,
/// buffered and flushed explicitly on drop.
#[derive(Debug)]
pub struct BufferedFileSink {
    writer: BufWriter<File>,
}

impl BufferedFileSink {
    /// Creates (or truncates) `path` and wraps it in a buffered writer.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl SnapshotSink for BufferedFileSink {
    fn record(&mut self, row: &[i64]) {
        let mut line = String::with_capacity(row.len() * 2);
        for (i, v) in row.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&v.to_string());
        }
        line.push('\n');
        // A snapshot write failing mid-search must not abort the search
        // (§9): the recorder is best-effort once opened successfully.
        let _ = self.writer.write_all(line.as_bytes());
    }
}

impl Drop for BufferedFileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Converts a partial colouring (uncoloured = `None`) into a snapshot row.
pub fn row_from_partial(partial: &[Option<usize>]) -> Vec<i64> {
    partial
        .iter()
        .map(|c| c.map_or(-1, |c| c as i64))
        .collect()
}

/// Converts a complete colouring into a snapshot row.
pub fn row_from_coloring(coloring: &Coloring) -> Vec<i64> {
    coloring.iter().map(|&c| c as i64).collect()
}
