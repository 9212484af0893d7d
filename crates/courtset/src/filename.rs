//! Filename contract: `<case>_<YYYY-MM-DD>.pdf`.
//!
//! The case identifier and decision date are not read from the document —
//! they come from the upload filename, a fixed-format split. Date validation
//! is a range check on the digits, not calendar math; the date is carried
//! through the pipeline as a plain string.

use std::path::Path;

use crate::error::DatasetError;

/// Case identifier and decision date parsed from a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameParts {
    /// Case identifier, e.g. `А40-12345-2023`.
    pub case_number: String,
    /// Decision date as `YYYY-MM-DD`.
    pub decision_date: String,
}

/// Parse case number and decision date from a PDF path.
///
/// The file stem must be `<case>_<YYYY-MM-DD>` with a non-empty case part;
/// the split is on the *last* underscore, so case identifiers may themselves
/// contain underscores. Anything else is [`DatasetError::BadFilename`].
pub fn parse_filename(path: &Path) -> Result<FilenameParts, DatasetError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some((case_number, date)) = stem.rsplit_once('_') else {
        return Err(DatasetError::BadFilename { name });
    };

    if case_number.is_empty() || !is_valid_date(date) {
        return Err(DatasetError::BadFilename { name });
    }

    Ok(FilenameParts {
        case_number: case_number.to_string(),
        decision_date: date.to_string(),
    })
}

/// Whether `s` is `YYYY-MM-DD` with month 01–12 and day 01–31.
fn is_valid_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    if !digits_ok {
        return false;
    }
    let month: u32 = s[5..7].parse().unwrap_or(0);
    let day: u32 = s[8..10].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_and_date() {
        let parts = parse_filename(Path::new("А40-12345-2023_2023-11-02.pdf")).unwrap();
        assert_eq!(parts.case_number, "А40-12345-2023");
        assert_eq!(parts.decision_date, "2023-11-02");
    }

    #[test]
    fn splits_on_last_underscore() {
        let parts = parse_filename(Path::new("дело_А40_2024-01-15.pdf")).unwrap();
        assert_eq!(parts.case_number, "дело_А40");
        assert_eq!(parts.decision_date, "2024-01-15");
    }

    #[test]
    fn works_with_a_full_path() {
        let parts = parse_filename(Path::new("/data/uploads/2-123-2022_2022-05-30.pdf")).unwrap();
        assert_eq!(parts.case_number, "2-123-2022");
    }

    #[test]
    fn rejects_missing_underscore() {
        let err = parse_filename(Path::new("scan001.pdf")).unwrap_err();
        assert!(matches!(err, DatasetError::BadFilename { name } if name == "scan001.pdf"));
    }

    #[test]
    fn rejects_empty_case_part() {
        assert!(parse_filename(Path::new("_2023-11-02.pdf")).is_err());
    }

    #[test]
    fn rejects_malformed_dates() {
        for name in [
            "А40-1_2023-13-02.pdf",
            "А40-1_2023-00-10.pdf",
            "А40-1_2023-01-32.pdf",
            "А40-1_23-01-02.pdf",
            "А40-1_2023.01.02.pdf",
            "А40-1_today.pdf",
        ] {
            assert!(
                parse_filename(Path::new(name)).is_err(),
                "accepted bad date in {name}"
            );
        }
    }

    #[test]
    fn date_boundaries_are_inclusive() {
        assert!(parse_filename(Path::new("а_2023-01-01.pdf")).is_ok());
        assert!(parse_filename(Path::new("а_2023-12-31.pdf")).is_ok());
    }
}
