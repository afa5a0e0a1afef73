//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right, visible_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }
}

/// One rendered line: either one cell per column, or a label spanning the
/// leading columns followed by cells for the remaining ones.
pub enum Row {
    Cells(Vec<String>),
    Merged { span: usize, label: String, cells: Vec<String> },
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(Row::Cells(row));
    }

    pub fn add_merged_row(&mut self, span: usize, label: String, cells: Vec<String>) {
        self.rows.push(Row::Merged { span, label, cells });
    }

    fn cell(col: &Column, value: &str) -> String {
        match col.align {
            Align::Left => pad_right(value, col.width),
            Align::Right => pad_left(value, col.width),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&Self::cell(col, &col.header));
            out.push(' ');
        }
        out.push('\n');

        let total_width: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total_width.saturating_sub(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            match row {
                Row::Cells(cells) => {
                    for (col, value) in self.columns.iter().zip(cells) {
                        out.push_str(&Self::cell(col, value));
                        out.push(' ');
                    }
                }
                Row::Merged { span, label, cells } => {
                    let span = (*span).min(self.columns.len());
                    let merged_width: usize =
                        self.columns[..span].iter().map(|c| c.width + 1).sum();
                    let label_width = merged_width.max(visible_width(label) + 1);
                    out.push_str(&pad_right(label, label_width));
                    for (col, value) in self.columns[span..].iter().zip(cells) {
                        out.push_str(&Self::cell(col, value));
                        out.push(' ');
                    }
                }
            }
            out.push('\n');
        }

        out
    }
}
