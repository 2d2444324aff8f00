use crate::domain::{CandidateRecord, FieldKind, RecordSchema};

use super::plausibility::{NameRole, PlausibilityFilter};
use super::text::PageText;

/// Line-window fallback for when the monolithic regex finds nothing.
///
/// Scans the page as a flat line sequence looking for a player-like line,
/// immediately followed by a team-like line, immediately followed by exactly
/// as many purely-numeric lines as the schema has metric columns. Matches are
/// non-overlapping; a hit advances past the consumed lines, a miss advances
/// by one line. Trailing stretches shorter than the window are never matched.
pub struct HeuristicStrategy<'a> {
    filter: &'a PlausibilityFilter,
}

impl<'a> HeuristicStrategy<'a> {
    pub fn new(filter: &'a PlausibilityFilter) -> Self {
        Self { filter }
    }

    pub fn extract(&self, page: &PageText, schema: &RecordSchema) -> Vec<CandidateRecord> {
        let lines = page.lines();
        let numeric_count = schema.numeric_field_count();
        let window = numeric_count + 3;

        let mut candidates = Vec::new();
        let mut i = 0;
        while i + window <= lines.len() {
            match self.match_window(&lines, i, schema) {
                Some(values) => {
                    let mut row = vec![(candidates.len() + 1).to_string()];
                    row.extend(values);
                    candidates.push(CandidateRecord::new(row));
                    // Skip the consumed name, team and metric lines
                    i += 2 + numeric_count;
                }
                None => i += 1,
            }
        }
        candidates
    }

    /// Test identity line, team line, then each numeric line in schema order
    fn match_window(&self, lines: &[&str], at: usize, schema: &RecordSchema) -> Option<Vec<String>> {
        let identity = lines[at];
        if !self.filter.plausible_name(identity, NameRole::Identity) {
            return None;
        }

        let team = lines[at + 1];
        if !self.filter.plausible_name(team, NameRole::Team) {
            return None;
        }

        let mut values = vec![identity.to_string(), team.to_string()];
        for (offset, field) in schema.numeric_fields().enumerate() {
            let line = lines[at + 2 + offset];
            if !Self::is_numeric_line(line, field.kind) {
                return None;
            }
            values.push(line.to_string());
        }
        Some(values)
    }

    fn is_numeric_line(line: &str, kind: FieldKind) -> bool {
        match kind {
            FieldKind::Count => {
                let digits = line.trim_end_matches('*');
                !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
            }
            FieldKind::Rate => {
                !line.is_empty()
                    && line.chars().all(|c| c.is_ascii_digit() || c == '.')
                    && line.parse::<f64>().is_ok()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldSpec;

    fn schema() -> RecordSchema {
        RecordSchema::new(
            vec![
                FieldSpec::new("Rank", FieldKind::Rank),
                FieldSpec::new("Player", FieldKind::Identity),
                FieldSpec::new("Team", FieldKind::Team),
                FieldSpec::new("Mat", FieldKind::Count),
                FieldSpec::new("Inns", FieldKind::Count),
                FieldSpec::new("Runs", FieldKind::Count),
            ],
            "Runs",
            10.0..=1000.0,
        )
    }

    fn filter() -> PlausibilityFilter {
        PlausibilityFilter::from_config()
    }

    #[test]
    fn matches_name_team_numeric_run() {
        let page = PageText::new("Section Header\nJane Doe\nExample Team\n10\n8\n250\nfooter text\n");
        let f = filter();
        let candidates = HeuristicStrategy::new(&f).extract(&page, &schema());
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0].values,
            vec!["1", "Jane Doe", "Example Team", "10", "8", "250"]
        );
    }

    #[test]
    fn consumed_lines_are_not_rescanned() {
        // "Example Team" must not be retried as an identity line
        let page = PageText::new(
            "Jane Doe\nExample Team\n10\n8\n250\nAmy Poe\nOther Side\n9\n7\n231\ntrailer\ntrailer",
        );
        let f = filter();
        let candidates = HeuristicStrategy::new(&f).extract(&page, &schema());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].values[1], "Amy Poe");
    }

    #[test]
    fn no_partial_trailing_window() {
        // Window for three metrics is six lines; only five remain
        let page = PageText::new("Jane Doe\nExample Team\n10\n8\n250");
        let f = filter();
        let candidates = HeuristicStrategy::new(&f).extract(&page, &schema());
        assert!(candidates.is_empty());
    }

    #[test]
    fn non_numeric_line_breaks_the_window() {
        let page = PageText::new("Jane Doe\nExample Team\n10\neight\n250\nfiller\nfiller");
        let f = filter();
        let candidates = HeuristicStrategy::new(&f).extract(&page, &schema());
        assert!(candidates.is_empty());
    }
}
