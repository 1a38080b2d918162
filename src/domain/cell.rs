// src/domain/cell.rs

/// A raw value as stored in a SQLite column.
///
/// SQLite is dynamically typed, so a `REAL` column can still hold text
/// such as `"8.5"` or `"要問合せ"`. Blobs are read as `Null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Cell {
    /// Numeric coercion: anything that cannot be read as a finite number
    /// becomes `None` instead of an error.
    pub fn to_number(&self) -> Option<f64> {
        let n = match self {
            Cell::Null => return None,
            Cell::Integer(i) => *i as f64,
            Cell::Real(r) => *r,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
        };

        n.is_finite().then_some(n)
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Integer(i) => Some(i.to_string()),
            Cell::Real(r) => Some(r.to_string()),
            Cell::Text(s) => Some(s),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Real(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}
