use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::domain::{RecordSchema, RecordSet};
use crate::fetchers::PointsTable;

/// Write one record set as a CSV with the schema's column order
pub fn write_record_set(path: &Path, set: &RecordSet, schema: &RecordSchema) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(schema.column_names())?;

    for record in &set.records {
        let mut row = vec![
            record.rank.to_string(),
            record.identity.clone(),
            record.team.clone(),
        ];
        for field in schema.numeric_fields() {
            let cell = record
                .metric(field.name)
                .map(|v| v.to_string())
                .unwrap_or_default();
            row.push(cell);
        }
        writer.write_record(&row)?;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    info!("Data saved to {}", path.display());
    Ok(())
}

/// Write the standings table exactly as scraped, headers first
pub fn write_points_table(path: &Path, table: &PointsTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    writer.flush().context("Failed to flush CSV writer")?;
    info!("Points table saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::find_category;
    use crate::domain::{MetricValue, Record};

    #[test]
    fn record_set_round_trips_through_csv_text() {
        let category = find_category("most-wickets").unwrap();
        let mut set = RecordSet::new("most-wickets");
        set.push(Record {
            rank: 1,
            identity: "Jane Doe".to_string(),
            team: "Example Team".to_string(),
            metrics: vec![
                ("Mat".to_string(), MetricValue::Count(10)),
                ("Inns".to_string(), MetricValue::Count(9)),
                ("Wkts".to_string(), MetricValue::Count(17)),
            ],
        });

        let dir = std::env::temp_dir().join("ipl_stats_scraper_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("most-wickets.csv");
        write_record_set(&path, &set, &category.schema).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Rank,Player,Team,Mat,Inns,Wkts"));
        assert_eq!(lines.next(), Some("1,Jane Doe,Example Team,10,9,17"));
    }
}
