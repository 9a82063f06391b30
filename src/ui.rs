//! Terminal output helpers.
//!
//! - `Table` - box-drawn table that shrinks its widest column to fit the terminal
//! - `print_build_summary` - artifact table shown after a successful release build

use crate::build::BuildReport;
use colored::*;
use std::cmp;
use std::fs;
use std::time::Duration;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows with the wrong number of cells are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    /// Column widths after fitting into `max_width` terminal columns.
    fn column_widths(&self, max_width: usize) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = cmp::max(widths[i], console::measure_text_width(cell));
            }
        }

        let overhead = 3 + 3 * self.headers.len();
        let available = max_width.saturating_sub(overhead);
        let mut total: usize = widths.iter().sum();

        // Shave the widest column until it fits; never below 8.
        while total > available {
            let (idx, &widest) = match widths.iter().enumerate().max_by_key(|(_, w)| **w) {
                Some(found) => found,
                None => break,
            };
            if widest <= 8 {
                break;
            }
            widths[idx] -= 1;
            total -= 1;
        }

        widths
    }

    pub fn render(&self, max_width: usize) -> Vec<String> {
        if self.headers.is_empty() {
            return Vec::new();
        }

        let widths = self.column_widths(max_width);
        let sep = |left: &str, mid: &str, right: &str| -> String {
            let inner: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("  {}{}{}", left, inner.join(mid), right)
        };
        let line = |cells: &[String], bold: bool| -> String {
            let mut s = String::from("  │");
            for (cell, &width) in cells.iter().zip(&widths) {
                let text = console::truncate_str(cell, width, "...").to_string();
                let padding = width.saturating_sub(console::measure_text_width(&text));
                let text = if bold { text.bold().to_string() } else { text };
                s.push_str(&format!(" {} {}│", text, " ".repeat(padding)));
            }
            s
        };

        let mut out = vec![sep("┌", "┬", "┐"), line(&self.headers[..], true), sep("├", "┼", "┤")];
        out.extend(self.rows.iter().map(|row| line(&row[..], false)));
        out.push(sep("└", "┴", "┘"));
        out
    }

    pub fn print(&self) {
        let (_height, width) = console::Term::stdout().size();
        for line in self.render(width as usize) {
            println!("{}", line);
        }
    }
}

pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// One row per built target: target, artifact path, size on disk, build time.
pub fn summary_table(reports: &[BuildReport]) -> Table {
    let mut table = Table::new(&["Target", "Artifact", "Size", "Time"]);
    for report in reports {
        let size = fs::metadata(&report.artifact)
            .map(|m| format_size(m.len()))
            .unwrap_or_else(|_| "-".to_string());
        table.add_row(vec![
            report.target.to_string(),
            report.artifact.display().to_string(),
            size,
            format!("{:.2?}", report.elapsed),
        ]);
    }
    table
}

pub fn print_build_summary(reports: &[BuildReport], total: Duration) {
    println!();
    summary_table(reports).print();
    println!(
        "{} {} target(s) built in {:.2?}",
        "✓".green(),
        reports.len(),
        total
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MiB");
    }

    #[test]
    fn test_render_box() {
        colored::control::set_override(false);
        let mut table = Table::new(&["Target", "Size"]);
        table.add_row(vec!["linux/arm".into(), "1 B".into()]);
        table.add_row(vec!["ignored".into()]);

        let lines = table.render(80);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  ┌───────────┬──────┐");
        assert_eq!(lines[1], "  │ Target    │ Size │");
        assert_eq!(lines[3], "  │ linux/arm │ 1 B  │");
        assert_eq!(lines[4], "  └───────────┴──────┘");
    }

    #[test]
    fn test_render_shrinks_to_width() {
        let mut table = Table::new(&["Artifact"]);
        table.add_row(vec!["/a/very/long/path/to/dist/pho-arm64".into()]);

        let lines = table.render(20);
        // 20 columns minus the table overhead leaves 14 for content.
        assert_eq!(console::measure_text_width(&lines[0]), 2 + 14 + 4);
        assert!(lines[3].contains("..."));
    }

    #[test]
    fn test_summary_table_rows() {
        use crate::toolchain::{Arch, Target};

        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("pho-arm");
        fs::write(&artifact, [0u8; 2048]).unwrap();
        let reports = vec![BuildReport {
            target: Target::new("linux", Arch::Arm),
            artifact: artifact.clone(),
            elapsed: Duration::from_millis(1500),
        }];

        let table = summary_table(&reports);

        assert_eq!(table.headers, ["Target", "Artifact", "Size", "Time"]);
        assert_eq!(
            table.rows,
            [vec![
                "linux/arm".to_string(),
                artifact.display().to_string(),
                "2.0 KiB".to_string(),
                "1.50s".to_string(),
            ]]
        );
    }
}
