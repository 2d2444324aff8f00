use chrono::Local;
use serde::Serialize;
use std::collections::HashMap;

use crate::config::StatGroup;
use crate::domain::RecordSet;

/// Per-category outcome of one scraping run
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub slug: String,
    #[serde(skip)]
    pub group: StatGroup,
    pub success: bool,
    pub file: Option<String>,
    /// Last strategy attempted, present only on failure
    pub failed_strategy: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopPlayer {
    pub name: String,
    pub team: String,
    pub value: String,
}

/// Run summary persisted as JSON and rendered as HTML
#[derive(Debug, Serialize)]
pub struct Summary {
    pub scraping_date: String,
    pub stats_scraped: usize,
    pub successful_scrapes: usize,
    pub failed_scrapes: usize,
    pub batting_stats: Vec<CategoryResult>,
    pub bowling_stats: Vec<CategoryResult>,
    pub top_run_scorer: Option<TopPlayer>,
    pub top_wicket_taker: Option<TopPlayer>,
}

impl Summary {
    pub fn build(results: &[CategoryResult], produced: &HashMap<String, RecordSet>) -> Self {
        let (batting, bowling): (Vec<_>, Vec<_>) = results
            .iter()
            .cloned()
            .partition(|r| r.group == StatGroup::Batting);

        Self {
            scraping_date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            stats_scraped: results.len(),
            successful_scrapes: results.iter().filter(|r| r.success).count(),
            failed_scrapes: results.iter().filter(|r| !r.success).count(),
            batting_stats: batting,
            bowling_stats: bowling,
            top_run_scorer: Self::leader(produced, "most-runs", "Runs"),
            top_wicket_taker: Self::leader(produced, "most-wickets", "Wkts"),
        }
    }

    fn leader(
        produced: &HashMap<String, RecordSet>,
        slug: &str,
        metric: &str,
    ) -> Option<TopPlayer> {
        let top = produced.get(slug)?.records.first()?;
        Some(TopPlayer {
            name: top.identity.clone(),
            team: top.team.clone(),
            value: top
                .metric(metric)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        })
    }
}

/// Static HTML rendering of a run summary
pub fn render_html(summary: &Summary) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>IPL Stats Report - {date}</title>
<style>
body {{ font-family: Arial, sans-serif; margin: 20px; }}
h1, h2, h3 {{ color: #1a5276; }}
.success {{ color: green; }}
.failure {{ color: red; }}
table {{ border-collapse: collapse; width: 100%; margin-bottom: 20px; }}
th, td {{ padding: 8px; text-align: left; border: 1px solid #ddd; }}
th {{ background-color: #f2f2f2; }}
</style>
</head>
<body>
<h1>IPL Statistics Report</h1>
<p>Generated on: {date}</p>
<p>Total statistics scraped: {total}</p>
<p>Successful scrapes: <span class="success">{ok}</span></p>
<p>Failed scrapes: <span class="failure">{failed}</span></p>
"#,
        date = summary.scraping_date,
        total = summary.stats_scraped,
        ok = summary.successful_scrapes,
        failed = summary.failed_scrapes,
    );

    render_section(&mut html, "Batting Statistics", &summary.batting_stats);
    render_section(&mut html, "Bowling Statistics", &summary.bowling_stats);

    html.push_str("<h2>Top Players</h2>\n");
    render_top_player(&mut html, "Top Run Scorer", &summary.top_run_scorer);
    render_top_player(&mut html, "Top Wicket Taker", &summary.top_wicket_taker);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_section(html: &mut String, title: &str, results: &[CategoryResult]) {
    html.push_str(&format!(
        "<h2>{}</h2>\n<table>\n<tr><th>Statistic</th><th>Status</th><th>File</th></tr>\n",
        title
    ));
    for result in results {
        let (class, status) = if result.success {
            ("success", "Success")
        } else {
            ("failure", "Failed")
        };
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"{}\">{}</td><td>{}</td></tr>\n",
            result.slug,
            class,
            status,
            result.file.as_deref().unwrap_or("N/A"),
        ));
    }
    html.push_str("</table>\n");
}

fn render_top_player(html: &mut String, title: &str, player: &Option<TopPlayer>) {
    if let Some(p) = player {
        html.push_str(&format!(
            "<h3>{}</h3>\n<p>Player: {}</p>\n<p>Team: {}</p>\n<p>Value: {}</p>\n",
            title, p.name, p.team, p.value
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MetricValue, Record};

    fn result(slug: &str, group: StatGroup, success: bool) -> CategoryResult {
        CategoryResult {
            slug: slug.to_string(),
            group,
            success,
            file: success.then(|| format!("{}.csv", slug)),
            failed_strategy: (!success).then(|| "fallback-derivation".to_string()),
        }
    }

    #[test]
    fn summary_counts_and_partitions_by_group() {
        let results = vec![
            result("most-runs", StatGroup::Batting, true),
            result("most-wickets", StatGroup::Bowling, true),
            result("most-maidens", StatGroup::Bowling, false),
        ];
        let summary = Summary::build(&results, &HashMap::new());
        assert_eq!(summary.successful_scrapes, 2);
        assert_eq!(summary.failed_scrapes, 1);
        assert_eq!(summary.batting_stats.len(), 1);
        assert_eq!(summary.bowling_stats.len(), 2);
    }

    #[test]
    fn leader_comes_from_the_top_ranked_record() {
        let mut set = RecordSet::new("most-runs");
        set.push(Record {
            rank: 1,
            identity: "Jane Doe".to_string(),
            team: "Example Team".to_string(),
            metrics: vec![("Runs".to_string(), MetricValue::Count(400))],
        });
        let mut produced = HashMap::new();
        produced.insert("most-runs".to_string(), set);

        let summary = Summary::build(&[], &produced);
        let top = summary.top_run_scorer.unwrap();
        assert_eq!(top.name, "Jane Doe");
        assert_eq!(top.value, "400");
    }

    #[test]
    fn html_report_marks_failures() {
        let results = vec![result("most-maidens", StatGroup::Bowling, false)];
        let summary = Summary::build(&results, &HashMap::new());
        let html = render_html(&summary);
        assert!(html.contains("most-maidens"));
        assert!(html.contains("class=\"failure\""));
    }
}
