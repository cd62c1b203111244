//! Plain-text evaluation report.
//!
//! Layout, top to bottom:
//!
//! ```text
//! ========================================
//!            Vastu Aayadi Report
//! ========================================
//!
//! Dimensions: 40 x 30 ft    Height: 11 ft
//! Entrance: NE
//!
//! Aayadi Calculation Results
//!   Aaya (Income): 9.33
//!   Vyaya (Expenditure): 6.00
//!   Yoni (Source): 5
//!   Score: 100/100
//!
//! Recommendations:
//!   • Excellent Main Entrance direction chosen.
//! ```

use std::fmt::{Display, Formatter};

use vastu_base::{AayadiResult, Measurement};

/// Title printed in the header band.
pub const REPORT_TITLE: &str = "Vastu Aayadi Report";

/// Default line width for the header band and wrapped recommendations.
pub const DEFAULT_REPORT_WIDTH: usize = 72;

/// A report over one evaluation. Render with `to_string()` or `{}`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub measurement: &'a Measurement,
    /// Entrance as the user entered it, canonical or not.
    pub entrance: &'a str,
    pub result: &'a AayadiResult,
    /// Total line width. Values below 20 are treated as 20.
    pub width: usize,
}

impl<'a> Report<'a> {
    pub fn new(measurement: &'a Measurement, entrance: &'a str, result: &'a AayadiResult) -> Self {
        Self {
            measurement,
            entrance,
            result,
            width: DEFAULT_REPORT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self.width.max(20);
        let band = "=".repeat(width);
        let m = self.measurement;
        let unit = m.unit().label();
        let r = self.result;

        writeln!(f, "{band}")?;
        writeln!(f, "{REPORT_TITLE:^width$}")?;
        writeln!(f, "{band}")?;
        writeln!(f)?;

        writeln!(
            f,
            "Dimensions: {} x {} {unit}    Height: {} {unit}",
            m.length(),
            m.breadth(),
            m.height()
        )?;
        writeln!(f, "Entrance: {}", self.entrance)?;
        writeln!(f)?;

        writeln!(f, "Aayadi Calculation Results")?;
        writeln!(f, "  Aaya (Income): {:.2}", r.aaya)?;
        writeln!(f, "  Vyaya (Expenditure): {:.2}", r.vyaya)?;
        writeln!(f, "  Yoni (Source): {}", r.yoni)?;
        writeln!(f, "  Score: {}/100", r.score)?;
        writeln!(f)?;

        writeln!(f, "Recommendations:")?;
        // "  • " prefix, continuation lines aligned under the text
        let text_width = width.saturating_sub(4);
        for rec in &r.recommendations {
            for (i, line) in wrap_words(rec.message(), text_width).iter().enumerate() {
                let lead = if i == 0 { "  • " } else { "    " };
                writeln!(f, "{lead}{line}")?;
            }
        }
        Ok(())
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
