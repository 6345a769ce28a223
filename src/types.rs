// src/types.rs

use std::path::Path;
use std::sync::Mutex;

use serde::Deserialize;

use crate::command::inspection_form::SubmissionStatus;
use crate::error::{AppError, AppResult};

/// Known-good values fed to the autocomplete fields, one list per field
/// category. Loaded once at startup, read-only afterwards.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ValueCatalogue {
    pub trucks: Vec<String>,
    pub trailers: Vec<String>,
    pub drivers: Vec<String>,
    pub locations: Vec<String>,
    pub inspectors: Vec<String>,
    pub positions: Vec<String>,
}

impl Default for ValueCatalogue {
    fn default() -> Self {
        fn list(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            trucks: list(&["ZM1234", "ABJ4561", "ACF2214", "BAD7730"]),
            trailers: list(&["TR99", "TRL4410", "TRL5182"]),
            drivers: list(&["John Phiri", "Moses Banda", "Agnes Zulu", "Kelvin Mulenga"]),
            locations: list(&["Lusaka", "Ndola", "Kitwe", "Solwezi", "Chingola"]),
            inspectors: list(&["D. Mwansa", "P. Tembo"]),
            positions: list(&["Driver", "Relief Driver"]),
        }
    }
}

/// Load the catalogue from a JSON5 file. A missing file falls back to the
/// built-in defaults; a malformed one is an error worth surfacing.
pub fn load_value_catalogue(path: &Path) -> AppResult<ValueCatalogue> {
    if !path.exists() {
        return Ok(ValueCatalogue::default());
    }

    let text = std::fs::read_to_string(path)?;
    json5::from_str(&text).map_err(|e| AppError::CatalogueParse(e.to_string()))
}

pub struct AppState {
    /// Outcome of the last/ongoing submission handoff; the wizard panel reads
    /// it to disable the submit control while one is outstanding.
    pub submission: Mutex<SubmissionStatus>,

    pub catalogue: ValueCatalogue,
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_catalogue_file_yields_defaults() {
        let cat = load_value_catalogue(Path::new("/definitely/not/here.json5")).unwrap();
        assert!(cat.trucks.contains(&"ZM1234".to_string()));
        assert!(!cat.inspectors.is_empty());
    }

    #[test]
    fn partial_catalogue_file_fills_missing_lists_with_defaults() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("catalogue.json5");
        std::fs::write(&path, "{ trucks: [\"KAA100\"] }").unwrap();

        let cat = load_value_catalogue(&path).unwrap();
        assert_eq!(cat.trucks, vec!["KAA100".to_string()]);
        // serde(default) backfills the rest
        assert!(cat.locations.contains(&"Lusaka".to_string()));
    }

    #[test]
    fn malformed_catalogue_is_a_parse_error() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("catalogue.json5");
        std::fs::write(&path, "{ trucks: [").unwrap();

        let err = load_value_catalogue(&path).unwrap_err();
        assert!(matches!(err, AppError::CatalogueParse(_)));
    }
}
