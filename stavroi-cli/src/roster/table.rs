//! In-memory roster table.

use calamine::Data;

/// First day-of-month column, counted within a row after the identity
/// column is removed. Fixed by the sheet schema: three metadata columns
/// (duty-service, group, contact), then one column per calendar day.
pub const DAY_COLUMN_OFFSET: usize = 3;

/// One retained roster row: the identity string plus the remaining cells
/// in sheet order (identity column already stripped).
#[derive(Debug, Clone)]
pub struct RosterRow {
    pub identity: String,
    pub cells: Vec<Data>,
}

impl RosterRow {
    /// Duty cell for day-of-month `day` (1-based), or `None` when the row
    /// has no column for that day.
    pub fn duty_cell(&self, day: u32) -> Option<&Data> {
        self.cells.get(DAY_COLUMN_OFFSET + day as usize - 1)
    }
}

/// Roster rows in sheet order.
///
/// Order matters: duplicate surnames resolve last-row-wins during index
/// construction, so the loader must not reorder rows.
#[derive(Debug, Default)]
pub struct RosterTable {
    rows: Vec<RosterRow>,
}

impl RosterTable {
    pub fn new(rows: Vec<RosterRow>) -> Self {
        Self { rows }
    }

    pub fn row(&self, identity: &str) -> Option<&RosterRow> {
        self.rows.iter().find(|r| r.identity == identity)
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Convert a cell to its text form. Blank cells come back as non-string
/// data, so every variant is coerced before any comparison.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Whole numbers print without the trailing ".0"
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format!("{dt}"),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_coercions() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("ΤΙΜ".into())), "ΤΙΜ");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::Float(2.0)), "2");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_duty_cell_offset() {
        let row = RosterRow {
            identity: "ΛΟΧΙΑΣ ΠΑΠΑΔΟΠΟΥΛΟΣ ΓΙΑΝΝΗΣ".into(),
            cells: vec![
                Data::String("Χ".into()),
                Data::String("Α".into()),
                Data::Empty,
                Data::String("Ε".into()),
                Data::String("ΤΙΜ".into()),
            ],
        };

        assert_eq!(row.duty_cell(1), Some(&Data::String("Ε".into())));
        assert_eq!(row.duty_cell(2), Some(&Data::String("ΤΙΜ".into())));
        assert_eq!(row.duty_cell(3), None);
    }

    #[test]
    fn test_row_lookup_finds_first_match() {
        let table = RosterTable::new(vec![
            RosterRow {
                identity: "ΣΤΡ ΝΙΚΟΛΑΟΥ ΚΩΣΤΑΣ".into(),
                cells: vec![],
            },
            RosterRow {
                identity: "ΔΝΕΑΣ ΓΕΩΡΓΙΟΥ ΑΝΝΑ".into(),
                cells: vec![],
            },
        ]);

        assert!(table.row("ΣΤΡ ΝΙΚΟΛΑΟΥ ΚΩΣΤΑΣ").is_some());
        assert!(table.row("ΑΓΝΩΣΤΟΣ").is_none());
        assert_eq!(table.len(), 2);
    }
}
