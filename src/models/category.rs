//! Status categories
//!
//! Entries are grouped for display by a category derived from their free-text
//! status label. The category is never stored; it is recomputed on demand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived classification of a backup status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Backup completed successfully
    Ok,
    /// Backup failed
    Nok,
    /// Backup completed with errors
    Error,
    /// Unrecognized or missing status
    Unknown,
}

const OK_STATUSES: &[&str] = &["terminé", "ok", "succès"];
const NOK_STATUSES: &[&str] = &["échec", "nok", "ko"];
const ERROR_MARKER: &str = "erreurs";

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Ok,
        Category::Nok,
        Category::Error,
        Category::Unknown,
    ];

    /// Classify a status label
    ///
    /// Exact matches are checked before the `erreurs` substring, so
    /// "Terminé avec erreurs" is an error while "Terminé" is OK. The
    /// comparison is case-insensitive and ignores surrounding whitespace.
    pub fn from_status(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return Self::Unknown;
        };
        let s = status.trim().to_lowercase();

        if OK_STATUSES.contains(&s.as_str()) {
            Self::Ok
        } else if NOK_STATUSES.contains(&s.as_str()) {
            Self::Nok
        } else if s.contains(ERROR_MARKER) {
            Self::Error
        } else {
            Self::Unknown
        }
    }

    /// Column label shown on the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Nok => "NOK",
            Self::Error => "Erreurs /!\\",
            Self::Unknown => "Inconnu",
        }
    }

    /// Stable key used in JSON and CSV output
    pub fn key(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Nok => "NOK",
            Self::Error => "ERROR",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Ok => 0,
            Self::Nok => 1,
            Self::Error => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a status label; shorthand for [`Category::from_status`]
pub fn categorize(status: Option<&str>) -> Category {
    Category::from_status(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_statuses() {
        assert_eq!(categorize(Some("Terminé")), Category::Ok);
        assert_eq!(categorize(Some("OK")), Category::Ok);
        assert_eq!(categorize(Some("Succès")), Category::Ok);
        assert_eq!(categorize(Some("TERMINÉ")), Category::Ok);
    }

    #[test]
    fn test_nok_statuses() {
        assert_eq!(categorize(Some("Échec")), Category::Nok);
        assert_eq!(categorize(Some("nok")), Category::Nok);
        assert_eq!(categorize(Some("KO")), Category::Nok);
    }

    #[test]
    fn test_error_substring() {
        assert_eq!(categorize(Some("Terminé avec erreurs")), Category::Error);
        assert_eq!(
            categorize(Some("terminé avec erreurs réseau")),
            Category::Error
        );
        assert_eq!(categorize(Some("ERREURS")), Category::Error);
    }

    #[test]
    fn test_unknown_statuses() {
        assert_eq!(categorize(None), Category::Unknown);
        assert_eq!(categorize(Some("")), Category::Unknown);
        assert_eq!(categorize(Some("En cours")), Category::Unknown);
        // Singular "erreur" is not the marker
        assert_eq!(categorize(Some("Terminé avec erreur")), Category::Unknown);
        // Exact match only: "ok" inside a longer label does not count
        assert_eq!(categorize(Some("okay")), Category::Unknown);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(categorize(Some("  ok \n")), Category::Ok);
    }

    #[test]
    fn test_categorize_is_total() {
        let samples = [
            None,
            Some(""),
            Some(" "),
            Some("Terminé"),
            Some("Échec"),
            Some("erreurs"),
            Some("\u{0}"),
            Some("ÉCHEC AVEC ERREURS"),
            Some("🙂"),
        ];
        for status in samples {
            let category = categorize(status);
            assert!(Category::ALL.contains(&category));
        }
    }

    #[test]
    fn test_index_matches_display_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Error.label(), "Erreurs /!\\");
        assert_eq!(Category::Unknown.to_string(), "Inconnu");
        assert_eq!(Category::Error.key(), "ERROR");
    }
}
