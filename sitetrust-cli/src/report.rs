//! Terminal rendering of a finished trust report

use sitetrust_core::TrustReport;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Rating badge word for a score band
pub fn badge(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "strong",
        60..=79 => "reasonable",
        40..=59 => "concerning",
        _ => "caution",
    }
}

// Table row structure for factor display
#[derive(Tabled)]
struct FactorRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Impact")]
    impact: u8,
    #[tabled(rename = "Factor")]
    title: String,
    #[tabled(rename = "Details")]
    details: String,
}

const DETAILS_WIDTH: usize = 60;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Render the full report for terminal output
pub fn render(report: &TrustReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Trust report for {}\n", report.target));
    out.push_str(&format!(
        "Score:    {}/100 ({})\n",
        report.score,
        badge(report.score)
    ));
    out.push_str(&format!(
        "Protocol: {}\n",
        if report.secure_transport { "HTTPS" } else { "HTTP" }
    ));
    if let Some(server) = &report.server {
        out.push_str(&format!("Server:   {server}\n"));
    }
    if let Some(title) = &report.page_title {
        out.push_str(&format!("Title:    {title}\n"));
    }
    out.push_str(&format!(
        "Analyzed: {}\n",
        report.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    out.push('\n');
    out.push_str(&report.summary);
    out.push('\n');

    if !report.signals.is_empty() {
        let rows: Vec<FactorRow> = report
            .signals
            .iter()
            .map(|s| FactorRow {
                status: s.status.as_str().to_string(),
                impact: s.impact,
                title: s.title.clone(),
                details: truncate(&s.description, DETAILS_WIDTH),
            })
            .collect();

        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        out.push('\n');
        out.push_str(&table);
        out.push('\n');
    }

    out
}
