//! Load the roster from an Excel workbook.
//!
//! The first worksheet holds one row per person: the identity column, a
//! duty-service and a group column (both used only as keep-row filters),
//! and one column per calendar day of the month.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};

use super::table::{cell_text, RosterRow, RosterTable};

/// Header names fixed by the sheet schema.
mod headers {
    pub const IDENTITY: &str = "ΟΝΟΜΑ ΟΠΛΙΤΗ";
    pub const DUTY_SERVICE: &str = "ΥΠΗΡΕΣΙΕΣ";
    pub const GROUP: &str = "ΓΚΡΟΥΠ";
}

/// Read the roster from `path`, keeping only duty personnel.
pub fn load_roster(path: &Path) -> Result<RosterTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open roster spreadsheet: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .context("Roster spreadsheet has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();
    let roster = rows_to_roster(&rows)?;
    log::info!(
        "Loaded {} duty rows from sheet '{}' ({} sheet rows)",
        roster.len(),
        sheet_name,
        rows.len()
    );

    Ok(roster)
}

/// Build a [`RosterTable`] from raw sheet rows (header row first).
///
/// Rows with a blank identity are skipped; rows with an empty duty-service
/// or group cell are non-duty personnel and are dropped entirely. The
/// identity column is stripped so the remaining cells line up with the
/// fixed day-column offset.
pub fn rows_to_roster(rows: &[Vec<Data>]) -> Result<RosterTable> {
    let header = rows.first().context("Roster sheet is empty")?;
    let header: Vec<String> = header.iter().map(|c| cell_text(c).trim().to_string()).collect();

    let identity_col = find_column(&header, headers::IDENTITY)?;
    let service_col = find_column(&header, headers::DUTY_SERVICE)?;
    let group_col = find_column(&header, headers::GROUP)?;

    let mut kept = Vec::new();
    for row in rows.iter().skip(1) {
        let identity = row
            .get(identity_col)
            .map(cell_text)
            .unwrap_or_default()
            .trim()
            .to_string();
        if identity.is_empty() {
            continue;
        }

        if !has_value(row, service_col) || !has_value(row, group_col) {
            continue;
        }

        let cells: Vec<Data> = row
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != identity_col)
            .map(|(_, c)| c.clone())
            .collect();

        kept.push(RosterRow { identity, cells });
    }

    Ok(RosterTable::new(kept))
}

fn find_column(header: &[String], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("Roster sheet has no '{}' column", name))
}

fn has_value(row: &[Data], col: usize) -> bool {
    row.get(col)
        .map(cell_text)
        .is_some_and(|v| !v.trim().is_empty())
}
