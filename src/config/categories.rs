use crate::domain::{FieldKind, FieldSpec, RecordSchema};

/// Output grouping for a statistic category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatGroup {
    Batting,
    Bowling,
}

impl StatGroup {
    pub fn dir_name(&self) -> &'static str {
        match self {
            StatGroup::Batting => "batting_stats",
            StatGroup::Bowling => "bowling_stats",
        }
    }
}

/// One scrapeable statistic category.
///
/// `slug` doubles as the cache key, the URL path segment under the stats
/// section, and the output file prefix. `derived_from` names a richer
/// category whose persisted snapshot can stand in when text extraction fails.
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    pub slug: &'static str,
    pub group: StatGroup,
    pub derived_from: Option<&'static str>,
    pub schema: RecordSchema,
}

impl CategoryConfig {
    pub fn new(
        slug: &'static str,
        group: StatGroup,
        derived_from: Option<&'static str>,
        schema: RecordSchema,
    ) -> Self {
        Self {
            slug,
            group,
            derived_from,
            schema,
        }
    }
}

fn base_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("Rank", FieldKind::Rank),
        FieldSpec::new("Player", FieldKind::Identity),
        FieldSpec::new("Team", FieldKind::Team),
        FieldSpec::new("Mat", FieldKind::Count),
        FieldSpec::new("Inns", FieldKind::Count),
    ]
}

fn with_counts(extra: &[&'static str]) -> Vec<FieldSpec> {
    let mut fields = base_fields();
    for name in extra {
        fields.push(FieldSpec::new(name, FieldKind::Count));
    }
    fields
}

fn with_counts_and_rate(counts: &[&'static str], rate: &'static str) -> Vec<FieldSpec> {
    let mut fields = with_counts(counts);
    fields.push(FieldSpec::new(rate, FieldKind::Rate));
    fields
}

/// The statistic categories scraped on a full run.
///
/// Batting sub-stats (hundreds, fifties, boundaries) are all projections of
/// the most-runs table, so they declare it as their derivation parent.
pub fn get_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new(
            "most-runs",
            StatGroup::Batting,
            None,
            RecordSchema::new(
                with_counts_and_rate(&["Runs", "HS"], "Avg")
                    .into_iter()
                    .chain([
                        FieldSpec::new("100s", FieldKind::Count),
                        FieldSpec::new("50s", FieldKind::Count),
                        FieldSpec::new("4s", FieldKind::Count),
                        FieldSpec::new("6s", FieldKind::Count),
                    ])
                    .collect(),
                "Runs",
                10.0..=1000.0,
            ),
        ),
        CategoryConfig::new(
            "most-hundreds",
            StatGroup::Batting,
            Some("most-runs"),
            RecordSchema::new(with_counts(&["100s"]), "100s", 1.0..=20.0),
        ),
        CategoryConfig::new(
            "most-fifties",
            StatGroup::Batting,
            Some("most-runs"),
            RecordSchema::new(with_counts(&["50s"]), "50s", 1.0..=20.0),
        ),
        CategoryConfig::new(
            "most-6s",
            StatGroup::Batting,
            Some("most-runs"),
            RecordSchema::new(with_counts(&["6s"]), "6s", 1.0..=200.0),
        ),
        CategoryConfig::new(
            "most-4s",
            StatGroup::Batting,
            Some("most-runs"),
            RecordSchema::new(with_counts(&["4s"]), "4s", 1.0..=200.0),
        ),
        CategoryConfig::new(
            "most-wickets",
            StatGroup::Bowling,
            None,
            RecordSchema::new(with_counts(&["Wkts"]), "Wkts", 1.0..=50.0),
        ),
        CategoryConfig::new(
            "most-maidens",
            StatGroup::Bowling,
            None,
            RecordSchema::new(with_counts(&["Maidens"]), "Maidens", 1.0..=20.0),
        ),
        CategoryConfig::new(
            "best-bowling-average",
            StatGroup::Bowling,
            None,
            RecordSchema::new(
                with_counts_and_rate(&["Wkts"], "Avg"),
                "Avg",
                1.0..=100.0,
            ),
        ),
        CategoryConfig::new(
            "best-bowling-strike-rate",
            StatGroup::Bowling,
            None,
            RecordSchema::new(
                with_counts_and_rate(&["Wkts"], "SR"),
                "SR",
                1.0..=100.0,
            ),
        ),
        CategoryConfig::new(
            "best-economy-rates",
            StatGroup::Bowling,
            None,
            RecordSchema::new(
                with_counts_and_rate(&["Overs"], "Econ"),
                "Econ",
                1.0..=20.0,
            ),
        ),
    ]
}

/// Look up a single category by slug
pub fn find_category(slug: &str) -> Option<CategoryConfig> {
    get_categories().into_iter().find(|c| c.slug == slug)
}
