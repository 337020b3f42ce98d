//! Fixed-width text tables for the `list` and `employee list` outputs.

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
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    /// Right-aligned column, for numbers.
    pub fn numeric(header: &str, width: usize) -> Self {
        Self {
            align: Align::Right,
            ..Self::new(header, width)
        }
    }

    fn cell(&self, text: &str) -> String {
        let text = fit(text, self.width);
        match self.align {
            Align::Left => format!("{:<w$}", text, w = self.width),
            Align::Right => format!("{:>w$}", text, w = self.width),
        }
    }
}

/// Cut `text` to `width` chars, marking the cut with `~`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width || width == 0 {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('~');
    out
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn render_line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let line: Vec<String> = self
            .columns
            .iter()
            .zip(cells.chain(std::iter::repeat("")))
            .map(|(col, text)| col.cell(text))
            .collect();
        line.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let mut out = self.render_line(self.columns.iter().map(|c| c.header.as_str()));
        out.push('\n');

        let rule: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        out.push_str(&rule.join(" "));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.render_line(row.iter().map(String::as_str)));
            out.push('\n');
        }

        out
    }
}
