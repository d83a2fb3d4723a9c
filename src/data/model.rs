use std::collections::BTreeMap;
use std::fmt;

/// Column holding the measurement identifier.
pub const NAME_COLUMN: &str = "Name";
/// Column holding the measured diameter in mm.
pub const VALUE_COLUMN: &str = "Value";

/// Placeholder printed for a cell the row's source file did not have.
const MISSING_CELL: &str = "NaN";

// ---------------------------------------------------------------------------
// Measurement – one row of the combined table
// ---------------------------------------------------------------------------

/// A single diameter measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    /// Diameter in mm.
    pub value: f64,
    /// Raw text of every column in the source row, `Name` and `Value` included.
    pub cells: BTreeMap<String, String>,
}

#[cfg(test)]
impl Measurement {
    /// Build a measurement with only the two required columns.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        let mut cells = BTreeMap::new();
        cells.insert(NAME_COLUMN.to_string(), name.clone());
        cells.insert(VALUE_COLUMN.to_string(), value.to_string());
        Self { name, value, cells }
    }
}

// ---------------------------------------------------------------------------
// MeasurementTable – ordered rows plus the column layout for printing
// ---------------------------------------------------------------------------

/// All measurements of a run. The row index is the position in `rows`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTable {
    /// Column names in first-seen order.
    pub columns: Vec<String>,
    pub rows: Vec<Measurement>,
}

impl MeasurementTable {
    pub fn new(columns: Vec<String>, rows: Vec<Measurement>) -> Self {
        Self { columns, rows }
    }

    /// Build a two-column table from `(name, value)` pairs.
    #[cfg(test)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            columns: vec![NAME_COLUMN.to_string(), VALUE_COLUMN.to_string()],
            rows: pairs
                .into_iter()
                .map(|(n, v)| Measurement::new(n, v))
                .collect(),
        }
    }

    /// Append `other` after `self`. Columns are unioned, rows keep their
    /// order, and the index restarts at 0 for the combined table.
    pub fn concat(mut self, other: MeasurementTable) -> Self {
        for col in other.columns {
            if !self.columns.contains(&col) {
                self.columns.push(col);
            }
        }
        self.rows.extend(other.rows);
        self
    }

    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|m| m.value).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Pandas-style listing: index column, right-aligned cells.
impl fmt::Display for MeasurementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| {
                self.rows
                    .iter()
                    .map(|r| r.cells.get(col).map_or(MISSING_CELL.len(), String::len))
                    .chain(std::iter::once(col.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (col, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {col:>width$}")?;
        }
        for (idx, row) in self.rows.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{idx:<index_width$}")?;
            for (col, width) in self.columns.iter().zip(&widths) {
                let cell = row.cells.get(col).map_or(MISSING_CELL, String::as_str);
                write!(f, "  {cell:>width$}")?;
            }
        }
        Ok(())
    }
}
