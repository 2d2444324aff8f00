use std::ops::RangeInclusive;

/// Kind tag for a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 1-based leaderboard position
    Rank,
    /// Player name
    Identity,
    /// Team name
    Team,
    /// Non-negative integer metric (Mat, Inns, Runs, Wkts, ...)
    Count,
    /// Non-negative decimal metric (Avg, Econ, ...)
    Rate,
}

/// One named, kind-tagged column of a statistic category
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, FieldKind::Count | FieldKind::Rate)
    }
}

/// Ordered column layout of one statistic category.
///
/// Built once per category at startup and immutable afterwards. The headline
/// metric is the column the leaderboard is ranked by; its plausible range is
/// used to reject junk rows whose numbers cannot belong to a real entry.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    fields: Vec<FieldSpec>,
    headline_metric: &'static str,
    headline_range: RangeInclusive<f64>,
}

impl RecordSchema {
    /// Panics on a malformed layout. Schemas only ever come from the static
    /// category registry, so a violation here is a programming error.
    pub fn new(
        fields: Vec<FieldSpec>,
        headline_metric: &'static str,
        headline_range: RangeInclusive<f64>,
    ) -> Self {
        assert!(
            fields.len() >= 3,
            "schema needs at least rank, identity and one metric"
        );
        assert!(
            fields.iter().filter(|f| f.kind == FieldKind::Rate).count() <= 1,
            "at most one decimal field per schema"
        );
        assert!(
            fields.iter().any(|f| f.name == headline_metric),
            "headline metric must be one of the schema fields"
        );
        assert!(
            fields[0].kind == FieldKind::Rank
                && fields[1].kind == FieldKind::Identity
                && fields[2].kind == FieldKind::Team
                && fields[3..].iter().all(FieldSpec::is_numeric),
            "fields must be ordered rank, identity, team, then metrics"
        );

        Self {
            fields,
            headline_metric,
            headline_range,
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Numeric columns in schema order
    pub fn numeric_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_numeric())
    }

    pub fn numeric_field_count(&self) -> usize {
        self.numeric_fields().count()
    }

    pub fn headline_metric(&self) -> &'static str {
        self.headline_metric
    }

    pub fn headline_range(&self) -> &RangeInclusive<f64> {
        &self.headline_range
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}
