use calendar_core::model::{TaskCatalog, TaskDraft};

use crate::error::CatalogParseError;

/// Parse the external task catalog document.
///
/// The document is a JSON array of raw task records (`day`, `title`,
/// `difficulty`, `task`, optional `tips` and `bonus`); records are
/// validated and assembled into a dense catalog.
///
/// # Errors
///
/// Returns `CatalogParseError` for malformed JSON, invalid records, or a
/// non-dense day sequence.
pub fn parse_catalog(json: &str) -> Result<TaskCatalog, CatalogParseError> {
    let drafts: Vec<TaskDraft> = serde_json::from_str(json)?;
    Ok(TaskCatalog::from_drafts(drafts)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calendar_core::model::{DayNumber, Difficulty};

    #[test]
    fn parses_a_small_catalog() {
        let json = r#"[
            {"day": 1, "title": "Walk", "difficulty": "easy",
             "task": "Walk for 20 minutes", "tips": ["bring water"]},
            {"day": 2, "title": "Stretch", "difficulty": "medium",
             "task": "Full-body stretch", "bonus": "hold each pose longer"}
        ]"#;

        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let first = catalog.get(DayNumber::new(1)).unwrap();
        assert_eq!(first.title(), "Walk");
        assert_eq!(first.difficulty(), Difficulty::Easy);
        assert_eq!(first.tips(), ["bring water"]);

        let second = catalog.get(DayNumber::new(2)).unwrap();
        assert_eq!(second.bonus(), Some("hold each pose longer"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_catalog("[{"),
            Err(CatalogParseError::Json(_))
        ));
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let json = r#"[{"day": 1, "title": "X", "difficulty": "brutal", "task": "y"}]"#;
        assert!(matches!(
            parse_catalog(json),
            Err(CatalogParseError::Json(_))
        ));
    }

    #[test]
    fn rejects_non_dense_days() {
        let json = r#"[
            {"day": 1, "title": "A", "difficulty": "easy", "task": "a"},
            {"day": 3, "title": "B", "difficulty": "easy", "task": "b"}
        ]"#;
        assert!(matches!(
            parse_catalog(json),
            Err(CatalogParseError::Invalid(_))
        ));
    }

    #[test]
    fn empty_document_yields_empty_catalog() {
        let catalog = parse_catalog("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
