//! Metrics CSV appender (§6 "External interfaces", fixed schema).
//!
//! Grounded on the teacher's plain-`std::fs` file handling (`dimacs.rs`
//! writes solutions with `fs::write`); this module only adds the
//! header-iff-empty and append-only behaviour the schema requires.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::Result;

const HEADER: &str = "algorithm,graph_name,vertices,edges,colors_used,known_optimal,runtime_ms";

/// One row of the metrics CSV.
#[derive(Debug, Clone)]
pub struct MetricsRow {
    /// strategy name, one of the dispatcher's accepted set
    pub algorithm: String,
    /// identifying name of the input graph, supplied by the caller
    pub graph_name: String,
    /// vertices in the input graph
    pub vertices: usize,
    /// edges in the input graph
    pub edges: usize,
    /// colours used by the returned colouring
    pub colors_used: usize,
    /// known chromatic number, when the caller supplies one
    pub known_optimal: Option<usize>,
    /// wall-clock runtime of the strategy call, in milliseconds
    pub runtime_ms: f64,
}

/// Appends `row` to the CSV at `path`, writing the header first iff the
/// file is absent or empty.
pub fn append_metrics_row(path: &Path, row: &MetricsRow) -> Result<()> {
    let needs_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_header {
        writeln!(file, "{HEADER}")?;
    }
    let known_optimal = row
        .known_optimal
        .map(|k| k.to_string())
        .unwrap_or_default();
    writeln!(
        file,
        "{},{},{},{},{},{},{:.3}",
        row.algorithm,
        row.graph_name,
        row.vertices,
        row.edges,
        row.colors_used,
        known_optimal,
        row.runtime_ms
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(algorithm: &str) -> MetricsRow {
        MetricsRow {
            algorithm: algorithm.to_string(),
            graph_name: "triangle".to_string(),
            vertices: 3,
            edges: 3,
            colors_used: 3,
            known_optimal: Some(3),
            runtime_ms: 1.5,
        }
    }

    #[test]
    fn writes_header_once_then_appends() {
        let path = std::env::temp_dir().join("graphcolor_test_metrics_header_once.csv");
        let _ = fs::remove_file(&path);

        append_metrics_row(&path, &sample_row("welsh_powell")).unwrap();
        append_metrics_row(&path, &sample_row("dsatur")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("welsh_powell,"));
        assert!(lines[2].starts_with("dsatur,"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unknown_optimal_is_empty_field() {
        let path = std::env::temp_dir().join("graphcolor_test_metrics_unknown_optimal.csv");
        let _ = fs::remove_file(&path);

        let mut row = sample_row("genetic");
        row.known_optimal = None;
        append_metrics_row(&path, &row).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let data_line = contents.lines().nth(1).unwrap();
        assert_eq!(data_line, "genetic,triangle,3,3,3,,1.500");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn runtime_uses_three_decimal_places() {
        let path = std::env::temp_dir().join("graphcolor_test_metrics_runtime_precision.csv");
        let _ = fs::remove_file(&path);

        let mut row = sample_row("tabu_search");
        row.runtime_ms = 42.0;
        append_metrics_row(&path, &row).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains(",42.000\n"));

        let _ = fs::remove_file(&path);
    }
}
