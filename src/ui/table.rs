//! Table rendering for routine and history listings.

use console::measure_text_width;

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A simple box-drawn table.
///
/// Column widths are measured in terminal cells, so accented names line up.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    alignments: Vec<Align>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();
        let alignments = vec![Align::Left; headers.len()];

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
            alignments,
        }
    }

    /// Right-align a column (for numbers).
    pub fn align_right(mut self, column: usize) -> Self {
        if let Some(a) = self.alignments.get_mut(column) {
            *a = Align::Right;
        }
        self
    }

    /// Add a row to the table. Extra cells beyond the headers are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        let mut row = row;
        row.truncate(self.headers.len());

        for (i, cell) in row.iter().enumerate() {
            self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
        }

        self.rows.push(row);
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        lines.push(self.render_border('┌', '┬', '┐'));
        lines.push(self.render_row(&self.headers));
        lines.push(self.render_border('├', '┼', '┤'));
        for row in &self.rows {
            lines.push(self.render_row(row));
        }
        lines.push(self.render_border('└', '┴', '┘'));

        lines.join("\n")
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|w| "─".repeat(w + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&mid.to_string()), right)
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let pad = " ".repeat(width - measure_text_width(cell));
            match self.alignments[i] {
                Align::Left => s.push_str(&format!(" {}{} │", cell, pad)),
                Align::Right => s.push_str(&format!(" {}{} │", pad, cell)),
            }
        }

        s
    }
}
