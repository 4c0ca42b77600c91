use crate::roster::RosterError;

/// Column layout detected from a roster header row.
///
/// Either a direct URL column, or the owner/repo/number columns needed to
/// rebuild the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterFormat {
    url: Option<usize>,
    owner: Option<usize>,
    repo: Option<usize>,
    number: Option<usize>,
}

impl RosterFormat {
    /// Detects which columns carry URL or URL-component data, matching
    /// header names case-insensitively against common synonyms.
    pub fn detect(headers: &csv::StringRecord) -> Result<Self, RosterError> {
        let mut format = RosterFormat {
            url: None,
            owner: None,
            repo: None,
            number: None,
        };

        for (i, header) in headers.iter().enumerate() {
            match header.trim().to_lowercase().as_str() {
                "url" | "pr url" | "pull request url" => format.url = Some(i),
                "owner" | "repository owner" | "repo owner" => format.owner = Some(i),
                "repo" | "repository" | "repo name" => format.repo = Some(i),
                "pr" | "pr number" | "pull request" | "pull request number" => {
                    format.number = Some(i)
                }
                _ => {}
            }
        }

        let has_components =
            format.owner.is_some() && format.repo.is_some() && format.number.is_some();
        if format.url.is_none() && !has_components {
            return Err(RosterError::MissingColumns);
        }

        Ok(format)
    }

    /// Extracts or reconstructs the PR URL from one data row, preferring a
    /// direct URL column. Returns `None` when the row lacks the needed
    /// fields.
    pub fn url_for(&self, record: &csv::StringRecord) -> Option<String> {
        if let Some(i) = self.url {
            let url = record.get(i)?.trim();
            if url.is_empty() {
                return None;
            }
            return Some(url.to_string());
        }

        let owner = record.get(self.owner?)?.trim();
        let repo = record.get(self.repo?)?.trim();
        let number = record.get(self.number?)?.trim();
        if owner.is_empty() || repo.is_empty() || number.is_empty() {
            return None;
        }

        Some(format!(
            "https://github.com/{}/{}/pull/{}",
            owner, repo, number
        ))
    }
}

/// Guesses the delimiter from the header line by counting tabs against
/// commas. Ties go to comma, the more common format.
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");
    let tabs = first_line.matches('\t').count();
    let commas = first_line.matches(',').count();

    if tabs > commas {
        b'\t'
    } else {
        b','
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_detect_url_column() {
        let format = RosterFormat::detect(&headers(&["PR Number", "Title", "URL"])).unwrap();
        let row = csv::StringRecord::from(vec!["1", "t", "https://github.com/a/b/pull/1"]);

        assert_eq!(
            format.url_for(&row).unwrap(),
            "https://github.com/a/b/pull/1"
        );
    }

    #[test]
    fn test_detect_component_columns() {
        let format = RosterFormat::detect(&headers(&["owner", "repo", "pr number"])).unwrap();
        let row = csv::StringRecord::from(vec!["acme", "widgets", "7"]);

        assert_eq!(
            format.url_for(&row).unwrap(),
            "https://github.com/acme/widgets/pull/7"
        );
    }

    #[test]
    fn test_url_column_preferred_over_components() {
        let format =
            RosterFormat::detect(&headers(&["owner", "repo", "pr number", "url"])).unwrap();
        let row = csv::StringRecord::from(vec!["x", "y", "1", "https://github.com/a/b/pull/2"]);

        assert_eq!(
            format.url_for(&row).unwrap(),
            "https://github.com/a/b/pull/2"
        );
    }

    #[test]
    fn test_missing_columns_rejected() {
        assert!(matches!(
            RosterFormat::detect(&headers(&["owner", "repo"])),
            Err(RosterError::MissingColumns)
        ));
    }

    #[test]
    fn test_short_row_yields_none() {
        let format = RosterFormat::detect(&headers(&["PR Number", "Title", "URL"])).unwrap();
        let row = csv::StringRecord::from(vec!["1"]);

        assert!(format.url_for(&row).is_none());
    }

    #[test]
    fn test_detect_delimiter_tabs() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3\n"), b'\t');
        assert_eq!(detect_delimiter("a,b,c\n"), b',');
        // Ties go to comma
        assert_eq!(detect_delimiter("a,b\tc\n"), b',');
        assert_eq!(detect_delimiter(""), b',');
    }
}
