//! Materialized table snapshots for export and printing.
//!
//! A [`Table`] decodes lazily and borrows the mesh. A snapshot decodes
//! every cell once and owns the result, so it can be serialized or
//! printed after the mesh is gone.

use std::fmt::Write as _;

use mfxview_types::Attachment;
use serde::{Deserialize, Serialize};

use crate::projector::Table;

/// A fully decoded table.
///
/// Cells that fail to decode (unknown component type) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub attachment: Attachment,
    pub row_count: usize,
    /// One header per scalar column.
    pub headers: Vec<String>,
    /// At most `max_rows` rows, each `headers.len()` long.
    pub rows: Vec<Vec<Option<f64>>>,
}

impl TableSnapshot {
    /// Decodes the first `max_rows` rows of `table`.
    pub fn capture(table: &Table<'_, '_>, max_rows: usize) -> Self {
        let shown = table.row_count.min(max_rows);
        let mut rows = Vec::with_capacity(shown);
        for row in 0..shown {
            let mut cells = Vec::with_capacity(table.scalar_column_count());
            for column in &table.columns {
                for k in 0..column.component_count() {
                    cells.push(column.cell_value(row, k).ok());
                }
            }
            rows.push(cells);
        }

        Self {
            attachment: table.attachment,
            row_count: table.row_count,
            headers: table.headers(),
            rows,
        }
    }

    /// True when rows were cut off by `max_rows`.
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.row_count
    }

    /// Renders the snapshot as aligned plain text.
    ///
    /// Undecodable cells print as `?`.
    pub fn to_text(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| format_cell(*c)).collect())
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "{} ({} rows)", self.attachment, self.row_count);
        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:>w$}", h, w = *w))
            .collect();
        let _ = writeln!(out, "{}", header.join("  "));
        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:>w$}", c, w = *w))
                .collect();
            let _ = writeln!(out, "{}", line.join("  "));
        }
        if self.is_truncated() {
            let _ = writeln!(out, "... {} more rows", self.row_count - self.rows.len());
        }
        out
    }
}

fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => format!("{:.4}", v),
        None => "?".to_string(),
    }
}
