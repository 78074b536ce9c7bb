//! Lookup-key normalization.

use deunicode::deunicode;

/// Uppercase, then transliterate to plain ASCII.
///
/// Roster identities are Greek while lookup input may arrive in either
/// script and any casing, so both sides are reduced to the same ASCII form
/// before comparison.
pub fn normalize_key(text: &str) -> String {
    deunicode(&text.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greek_surname_transliterates() {
        assert_eq!(normalize_key("ΠΑΠΑΔΟΠΟΥΛΟΣ"), "PAPADOPOULOS");
    }

    #[test]
    fn test_casing_and_accents_collapse() {
        assert_eq!(normalize_key("παπαδόπουλος"), "PAPADOPOULOS");
        assert_eq!(normalize_key("Παπαδόπουλος"), "PAPADOPOULOS");
    }

    #[test]
    fn test_latin_input_matches_greek_key() {
        assert_eq!(normalize_key("papadopoulos"), normalize_key("ΠΑΠΑΔΟΠΟΥΛΟΣ"));
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_key("Βασιλείου");
        assert_eq!(normalize_key(&once), once);
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(normalize_key("SMITH"), "SMITH");
    }
}
