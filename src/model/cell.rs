//! Cell values and their display rules.
//!
//! A cell is one value at a (row, column) position. Keeping the variants a
//! closed set makes display formatting exhaustive: a new kind of cell fails
//! to compile until every formatting site handles it.

use chrono::NaiveDate;

/// One value in a table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
}

/// Iconographic indicator for boolean cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckIndicator {
    Checked,
    Unchecked,
}

impl CheckIndicator {
    pub fn glyph(self) -> &'static str {
        match self {
            CheckIndicator::Checked => "✓",
            CheckIndicator::Unchecked => "✗",
        }
    }
}

impl Cell {
    /// Human-readable rendering of the value.
    ///
    /// Floats are fixed to two decimal places, dates to `YYYY-MM-DD`;
    /// everything else renders in its natural string form.
    pub fn display(&self) -> String {
        match self {
            Cell::Bool(b) => b.to_string(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => format!("{:.2}", f),
            Cell::Date(d) => d.format("%Y-%m-%d").to_string(),
            Cell::Text(s) => s.clone(),
        }
    }

    /// Indicator for boolean cells; `None` for every other kind.
    pub fn decoration(&self) -> Option<CheckIndicator> {
        match self {
            Cell::Bool(true) => Some(CheckIndicator::Checked),
            Cell::Bool(false) => Some(CheckIndicator::Unchecked),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_displays_two_decimals() {
        assert_eq!(Cell::Float(3.14159).display(), "3.14");
        assert_eq!(Cell::Float(2.5).display(), "2.50");
        assert_eq!(Cell::Float(-0.005).display(), "-0.01");
    }

    #[test]
    fn test_date_displays_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(Cell::Date(date).display(), "2024-01-05");
    }

    #[test]
    fn test_natural_forms() {
        assert_eq!(Cell::Int(-42).display(), "-42");
        assert_eq!(Cell::Text("Item 1-2".to_string()).display(), "Item 1-2");
        assert_eq!(Cell::Bool(true).display(), "true");
    }

    #[test]
    fn test_decoration_only_for_bool() {
        assert_eq!(
            Cell::Bool(true).decoration(),
            Some(CheckIndicator::Checked)
        );
        assert_eq!(
            Cell::Bool(false).decoration(),
            Some(CheckIndicator::Unchecked)
        );
        assert_eq!(Cell::Int(1).decoration(), None);
        assert_eq!(Cell::Text("true".to_string()).decoration(), None);
    }

    #[test]
    fn test_indicator_glyphs_differ() {
        assert_ne!(
            CheckIndicator::Checked.glyph(),
            CheckIndicator::Unchecked.glyph()
        );
    }
}
