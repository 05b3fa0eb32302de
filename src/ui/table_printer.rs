use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub header: &'a str,
    pub align: Align,
}

impl<'a> Column<'a> {
    pub const fn left(header: &'a str) -> Self {
        Self {
            header,
            align: Align::Left,
        }
    }

    pub const fn right(header: &'a str) -> Self {
        Self {
            header,
            align: Align::Right,
        }
    }
}

const CELL_SEPARATOR: &str = " | ";

/// Plain-text tables: a dashed banner with the upper-cased title, a
/// header row, and one padded line per row.
#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a clone that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            util: self.util.clone(),
            left_pad: pad,
        }
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_rule(out, w)?;
        self.write_line(out, &title.to_uppercase())?;
        self.write_rule(out, w)
    }

    pub fn table_width<T: AsRef<str>>(&self, columns: &[Column<'_>], rows: &[Vec<T>]) -> usize {
        let widths = self.column_widths(columns, rows);
        if widths.is_empty() {
            return 0;
        }
        widths.iter().sum::<usize>() + (widths.len() - 1) * CELL_SEPARATOR.len()
    }

    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        columns: &[Column<'_>],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        let widths = self.column_widths(columns, rows);
        let mut total = self.table_width(columns, rows);

        if rows.is_empty() {
            if let Some(msg) = empty_message {
                total = total.max(self.util.visible_width(msg));
                self.render_banner(title, total, out)?;
                self.write_line(out, msg)?;
                return self.write_rule(out, total);
            }
        }

        self.render_banner(title, total, out)?;
        let header: Vec<&str> = columns.iter().map(|c| c.header).collect();
        self.write_line(out, &self.join_cells(columns, &widths, &header))?;
        self.write_rule(out, total)?;
        for row in rows {
            self.write_line(out, &self.join_cells(columns, &widths, row))?;
        }
        self.write_rule(out, total)
    }

    fn column_widths<T: AsRef<str>>(&self, columns: &[Column<'_>], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = columns
            .iter()
            .map(|c| self.util.visible_width(c.header))
            .collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn join_cells<T: AsRef<str>>(
        &self,
        columns: &[Column<'_>],
        widths: &[usize],
        cells: &[T],
    ) -> String {
        columns
            .iter()
            .zip(widths)
            .zip(cells)
            .map(|((col, &w), cell)| match col.align {
                Align::Left => self.util.pad_right(cell.as_ref(), w),
                Align::Right => self.util.pad_left(cell.as_ref(), w),
            })
            .collect::<Vec<_>>()
            .join(CELL_SEPARATOR)
            .trim_end()
            .to_string()
    }

    fn write_line<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> io::Result<()> {
        writeln!(out, "{}{s}", " ".repeat(self.left_pad))
    }

    fn write_rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        self.write_line(out, &"-".repeat(width.max(1)))
    }
}
