use std::path::Path;

use crate::core::candidates::GeneCandidates;
use crate::core::stats::GeneVersionStats;
use crate::parsing::ParseError;

/// Parse a TSV/CSV coverage table with columns:
/// gene, version, `percent_coverage`, `median_depth`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse
/// errors if the content is invalid.
pub fn parse_tsv_file(path: &Path, delimiter: char) -> Result<GeneCandidates, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_tsv_text(&content, delimiter)
}

/// Parse TSV/CSV coverage table text.
///
/// Blank lines and `#` comments are skipped; an optional header line
/// starting with `gene` is tolerated.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has fewer than 4 fields,
/// a numeric field does not parse, or no rows are found;
/// `ParseError::InvalidStats` if a record fails validation; or
/// `ParseError::DuplicateVersion` if a (gene, version) pair repeats.
pub fn parse_tsv_text(text: &str, delimiter: char) -> Result<GeneCandidates, ParseError> {
    let mut candidates = GeneCandidates::new();
    let mut first_data_line = true;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).collect();

        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.to_lowercase()).unwrap_or_default();
            if first == "gene" || first == "gene_name" {
                continue;
            }
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if fields.len() < 4 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 4 fields"
            )));
        }

        let gene = fields[0].trim().to_string();
        let version = fields[1].trim().to_string();
        let percent_coverage = parse_field(fields[2], "percent_coverage", line_num)?;
        let median_depth = parse_field(fields[3], "median_depth", line_num)?;

        let stats = GeneVersionStats::new(percent_coverage, median_depth);
        stats.validate().map_err(|source| ParseError::InvalidStats {
            gene: gene.clone(),
            version: version.clone(),
            source,
        })?;

        let versions = candidates.entry(gene.clone()).or_default();
        if versions.insert(version.clone(), stats).is_some() {
            return Err(ParseError::DuplicateVersion { gene, version });
        }
    }

    if candidates.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No coverage rows found in input".to_string(),
        ));
    }

    Ok(candidates)
}

fn parse_field(raw: &str, name: &str, line_num: usize) -> Result<f64, ParseError> {
    raw.trim().parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid {name} on line {line_num}: '{}'",
            raw.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tsv_text() {
        let tsv = "gene\tversion\tpercent_coverage\tmedian_depth
mecA\tallele-1\t97.5\t42
mecA\tallele-2\t88.0\t51
blaZ\tv1\t12\t3
";

        let candidates = parse_tsv_text(tsv, '\t').unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates["mecA"].len(), 2);
        assert_eq!(candidates["blaZ"]["v1"].percent_coverage, 12.0);
    }

    #[test]
    fn test_parse_csv_text() {
        let csv = "gene,version,percent_coverage,median_depth
mecA,allele-1,97.5,42
";
        let candidates = parse_tsv_text(csv, ',').unwrap();
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_parse_tsv_no_header_with_comments() {
        let tsv = "# coverage summary\nmecA\tv1\t50\t10\nmecA\tv2\t60\t4\n";
        let candidates = parse_tsv_text(tsv, '\t').unwrap();
        assert_eq!(candidates["mecA"].len(), 2);
    }

    #[test]
    fn test_parse_tsv_rejects_short_line() {
        let err = parse_tsv_text("mecA\tv1\t50\n", '\t').unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_tsv_rejects_bad_number() {
        let err = parse_tsv_text("mecA\tv1\thigh\t10\n", '\t').unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_parse_tsv_rejects_duplicate_version() {
        let tsv = "mecA\tv1\t50\t10\nmecA\tv1\t60\t4\n";
        let err = parse_tsv_text(tsv, '\t').unwrap_err();
        assert!(matches!(err, ParseError::DuplicateVersion { .. }));
    }

    #[test]
    fn test_parse_tsv_rejects_negative_depth() {
        let err = parse_tsv_text("mecA\tv1\t50\t-3\n", '\t').unwrap_err();
        assert!(matches!(err, ParseError::InvalidStats { .. }));
    }

    #[test]
    fn test_parse_tsv_rejects_empty_input() {
        assert!(parse_tsv_text("# nothing here\n", '\t').is_err());
    }
}
