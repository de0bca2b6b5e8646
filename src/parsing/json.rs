use std::path::Path;

use crate::core::candidates::GeneCandidates;
use crate::parsing::ParseError;

/// Parse a JSON coverage summary file: gene → version → stats record
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the errors
/// documented on [`parse_json_text`].
pub fn parse_json_file(path: &Path) -> Result<GeneCandidates, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_json_text(&content)
}

/// Parse JSON coverage summary text.
///
/// # Errors
///
/// Returns `ParseError::Json` if the text is not the expected shape,
/// `ParseError::InvalidStats` if any record fails validation, or
/// `ParseError::InvalidFormat` if no genes are present.
pub fn parse_json_text(text: &str) -> Result<GeneCandidates, ParseError> {
    let candidates: GeneCandidates = serde_json::from_str(text)?;

    if candidates.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No genes found in input".to_string(),
        ));
    }

    for (gene, versions) in &candidates {
        for (version, stats) in versions {
            stats.validate().map_err(|source| ParseError::InvalidStats {
                gene: gene.clone(),
                version: version.clone(),
                source,
            })?;
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_text() {
        let text = r#"{
            "mecA": {
                "allele-1": {"percent_coverage": 97.5, "median_depth": 42.0},
                "allele-2": {"percent_coverage": 88.0, "median_depth": 51.0}
            },
            "blaZ": {
                "v1": {"percent_coverage": 12.0, "median_depth": 3.0}
            }
        }"#;

        let candidates = parse_json_text(text).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates["mecA"].len(), 2);
        assert_eq!(candidates["mecA"]["allele-1"].median_depth, 42.0);
    }

    #[test]
    fn test_parse_json_rejects_empty_object() {
        assert!(parse_json_text("{}").is_err());
    }

    #[test]
    fn test_parse_json_rejects_bad_coverage() {
        let text = r#"{"mecA": {"v1": {"percent_coverage": 120.0, "median_depth": 1.0}}}"#;
        let err = parse_json_text(text).unwrap_err();
        assert!(matches!(err, ParseError::InvalidStats { .. }));
    }

    #[test]
    fn test_parse_json_rejects_missing_field() {
        let text = r#"{"mecA": {"v1": {"percent_coverage": 50.0}}}"#;
        assert!(parse_json_text(text).is_err());
    }

    #[test]
    fn test_parse_json_allows_empty_version_map() {
        // An empty inner map parses; it is the typer's job to report it
        // as a per-gene error.
        let text = r#"{"mecA": {}, "blaZ": {"v1": {"percent_coverage": 50.0, "median_depth": 1.0}}}"#;
        let candidates = parse_json_text(text).unwrap();
        assert!(candidates["mecA"].is_empty());
    }
}
