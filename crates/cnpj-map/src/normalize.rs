//! Header cell normalization.
//!
//! Spreadsheet authors disagree on casing, accents, and separators
//! (`E-mail`, `EMAIL`, `e mail`). Normalization collapses all of those
//! variants onto one comparable form: lowercase ASCII alphanumerics with
//! every separator removed. Alias patterns are stored in the same form, so
//! matching reduces to a substring test.

/// Normalizes a raw header cell for alias comparison.
///
/// Strips the UTF-8 BOM and surrounding whitespace, lowercases, folds
/// Latin diacritics (`ç` → `c`, `ã` → `a`, …), and drops everything that
/// is not an ASCII alphanumeric. Total and idempotent.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.trim_matches('\u{feff}').trim().chars() {
        for lower in ch.to_lowercase() {
            let folded = fold_diacritic(lower);
            if folded.is_ascii_alphanumeric() {
                out.push(folded);
            }
        }
    }
    out
}

/// Maps a lowercase Latin letter with a diacritic onto its base letter.
fn fold_diacritic(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        _ => ch,
    }
}
