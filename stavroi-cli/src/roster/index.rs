//! Surname index over the roster.

use std::collections::HashMap;

use anyhow::{Context, Result};

use super::table::RosterTable;
use crate::text::normalize_key;

/// Map each normalized surname to its full roster identity.
///
/// Identities are stored as "RANK SURNAME NAME", so the surname is the
/// second whitespace token. Duplicate surnames silently resolve to the
/// later row (known limitation: the sheet carries no tie-break policy).
pub fn build_surname_index(roster: &RosterTable) -> Result<HashMap<String, String>> {
    let mut index = HashMap::new();

    for row in roster.rows() {
        let surname = row
            .identity
            .split_whitespace()
            .nth(1)
            .with_context(|| {
                format!(
                    "Malformed roster identity '{}': expected \"RANK SURNAME NAME\"",
                    row.identity
                )
            })?;

        index.insert(normalize_key(surname), row.identity.clone());
    }

    log::debug!("Surname index holds {} entries", index.len());
    Ok(index)
}
