use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::portfolio::{EvaluatedSupplier, Portfolio, PortfolioSummary, RejectedSupplier};
use crate::recommend::{Confidence, SegmentRecommendation};
use crate::scoring::{Criterion, ScoringWeights, SupplierCriteria};
use crate::segment::SegmentType;
use crate::supplier::RiskLevel;

/// Widest segment label plus the drift marker
const SEGMENT_WIDTH: usize = 24;
const SCORE_WIDTH: usize = 5;
const CONFIDENCE_WIDTH: usize = 6;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a total score with one decimal ("66.8", "70.0")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn paint_segment(segment: SegmentType, text: &str) -> String {
    match segment {
        SegmentType::TrustedSuppliers => text.green().to_string(),
        SegmentType::SwitchCandidates => text.red().to_string(),
        SegmentType::CommodityPartnerships => text.dimmed().to_string(),
        SegmentType::InnovativePartnerships => text.blue().to_string(),
        SegmentType::ProprietaryInformation => text.yellow().to_string(),
        SegmentType::SupplierIntegration => text.cyan().to_string(),
    }
}

fn paint_confidence(confidence: Confidence, text: &str) -> String {
    match confidence {
        Confidence::High => text.bold().to_string(),
        Confidence::Medium => text.to_string(),
        Confidence::Low => text.dimmed().to_string(),
    }
}

/// Format ranked suppliers as a table with columns: Rank, Score, Segment, Confidence, Name
/// No headers. Rank is the position in the full ranking, so it survives filtering.
/// A `*` after the segment marks a stored segment that no longer matches.
pub fn format_scored_table(suppliers: &[EvaluatedSupplier], use_colors: bool) -> String {
    if suppliers.is_empty() {
        return "No suppliers evaluated.".to_string();
    }

    let term_width = get_terminal_width();
    let index_width = 3;
    let separator = "  ";
    let fixed_width =
        index_width + 1 + SCORE_WIDTH + SEGMENT_WIDTH + CONFIDENCE_WIDTH + separator.len() * 3;

    suppliers
        .iter()
        .map(|supplier| {
            let rec = &supplier.recommendation;
            let index_str = format!("{:>2}.", supplier.rank);
            let score_str = format!(
                "{:>width$}",
                format_score(rec.total_score),
                width = SCORE_WIDTH
            );
            let marker = if supplier.drifted() { "*" } else { "" };
            let segment_str = format!(
                "{:<width$}",
                format!("{}{}", rec.segment.label(), marker),
                width = SEGMENT_WIDTH
            );
            let confidence_str = format!(
                "{:<width$}",
                rec.confidence.as_str(),
                width = CONFIDENCE_WIDTH
            );

            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&supplier.record.name, width - fixed_width)
                }
                // Very narrow terminal, show truncated
                Some(_) => truncate_name(&supplier.record.name, 20),
                // No terminal (pipe), don't truncate
                None => supplier.record.name.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    paint_segment(rec.segment, &segment_str),
                    separator,
                    paint_confidence(rec.confidence, &confidence_str),
                    separator,
                    name
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str,
                    score_str,
                    separator,
                    segment_str,
                    separator,
                    confidence_str,
                    separator,
                    name
                )
                .trim_end()
                .to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked suppliers as tab-separated values for scripting
/// Columns: score, segment, confidence, name, category (no headers, no colors)
pub fn format_tsv(suppliers: &[EvaluatedSupplier]) -> String {
    suppliers
        .iter()
        .map(|supplier| {
            let rec = &supplier.recommendation;
            format!(
                "{}\t{}\t{}\t{}\t{}",
                format_score(rec.total_score),
                rec.segment.as_str(),
                rec.confidence.as_str(),
                supplier.record.name,
                supplier.record.category
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSupplier<'a> {
    name: &'a str,
    category: &'a str,
    stored_segment: Option<SegmentType>,
    drifted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
    criteria: &'a SupplierCriteria,
    recommendation: &'a SegmentRecommendation,
}

#[derive(Serialize)]
struct JsonRejected<'a> {
    name: &'a str,
    errors: Vec<String>,
}

#[derive(Serialize)]
struct JsonPortfolio<'a> {
    suppliers: Vec<JsonSupplier<'a>>,
    rejected: Vec<JsonRejected<'a>>,
}

/// Format a whole portfolio as pretty-printed JSON
pub fn format_json(portfolio: &Portfolio) -> serde_json::Result<String> {
    let doc = JsonPortfolio {
        suppliers: portfolio
            .evaluated
            .iter()
            .map(|s| JsonSupplier {
                name: &s.record.name,
                category: &s.record.category,
                stored_segment: s.record.segment_type,
                drifted: s.drifted(),
                tags: s.record.tags.as_deref(),
                notes: s.record.notes.as_deref(),
                criteria: &s.criteria,
                recommendation: &s.recommendation,
            })
            .collect(),
        rejected: portfolio
            .rejected
            .iter()
            .map(|r| JsonRejected {
                name: &r.name,
                errors: r.errors.iter().map(|e| e.to_string()).collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&doc)
}

/// Format one supplier with breakdown and reasoning (multi-line)
pub fn format_supplier_detail(
    supplier: &EvaluatedSupplier,
    weights: &ScoringWeights,
    use_colors: bool,
) -> String {
    let rec = &supplier.recommendation;
    let record = &supplier.record;
    let mut lines = Vec::new();

    let heading = if record.category.is_empty() {
        record.name.clone()
    } else {
        format!("{} ({})", record.name, record.category)
    };
    lines.push(if use_colors {
        heading.bold().to_string()
    } else {
        heading
    });

    let segment_label = if use_colors {
        paint_segment(rec.segment, rec.segment.label())
    } else {
        rec.segment.label().to_string()
    };
    match record.segment_type {
        Some(stored) if stored != rec.segment => {
            lines.push(format!("  Segment: {} (stored: {})", segment_label, stored.label()))
        }
        _ => lines.push(format!("  Segment: {}", segment_label)),
    }
    lines.push(format!(
        "  Score: {}/100  Confidence: {}",
        format_score(rec.total_score),
        rec.confidence
    ));
    lines.push(format!(
        "  Risk level: {}",
        RiskLevel::from_score(supplier.criteria.risk_score)
    ));
    if let Some(spend) = record.annual_spend {
        lines.push(format!("  Annual spend: {:.0}", spend));
    }
    if let Some(tags) = record.tags.as_ref().filter(|t| !t.is_empty()) {
        lines.push(format!("  Tags: {}", tags.join(", ")));
    }

    lines.push("  Breakdown:".to_string());
    for criterion in Criterion::ALL {
        lines.push(format!(
            "    {:<13}{:>5.1} / {}",
            criterion.label(),
            rec.score_breakdown.get(criterion),
            weights.weight(criterion)
        ));
    }

    lines.push(format!("  {}", rec.reasoning));
    lines.push(format!("  Management: {}", rec.segment.management()));

    if let Some(notes) = record.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        lines.push(format!("  Notes: {}", notes));
    }

    lines.join("\n")
}

/// Format the segment catalog: label, description, characteristics, management
pub fn format_segment_catalog(use_colors: bool) -> String {
    SegmentType::ALL
        .iter()
        .map(|segment| {
            let label = if use_colors {
                paint_segment(*segment, segment.label()).bold().to_string()
            } else {
                segment.label().to_string()
            };
            format!(
                "{} ({})\n  {}\n  Characteristics: {}\n  Management: {}",
                label,
                segment.as_str(),
                segment.description(),
                segment.characteristics(),
                segment.management()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_average(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())
}

/// Format portfolio metrics (multi-line)
pub fn format_summary(summary: &PortfolioSummary, use_colors: bool) -> String {
    let mut lines = vec![
        format!("Suppliers: {}", summary.total_suppliers),
        format!("Rejected: {}", summary.rejected_suppliers),
        format!("Annual spend: {:.0}", summary.total_spend),
        format!(
            "Average risk score: {}",
            format_average(summary.avg_risk_score)
        ),
        format!(
            "Average performance: {}",
            format_average(summary.avg_performance)
        ),
        format!(
            "Average total score: {}",
            format_average(summary.avg_total_score)
        ),
        format!("Segment drift: {}", summary.drifted_suppliers),
        "Segments (count, spend, avg risk, avg performance, risk level):".to_string(),
    ];

    for entry in &summary.segments {
        let label = format!("{:<width$}", entry.segment.label(), width = SEGMENT_WIDTH);
        let label = if use_colors {
            paint_segment(entry.segment, &label)
        } else {
            label
        };
        let risk_level = entry.risk_level.map(|r| r.label()).unwrap_or("-");
        lines.push(format!(
            "  {}{:>4}{:>14.0}{:>6}{:>7}  {}",
            label,
            entry.count,
            entry.total_spend,
            format_average(entry.avg_risk_score),
            format_average(entry.avg_performance),
            risk_level
        ));
    }

    lines.push("Risk levels:".to_string());
    for entry in &summary.risk_levels {
        lines.push(format!(
            "  {:<width$}{:>4}",
            entry.level.label(),
            entry.count,
            width = SEGMENT_WIDTH
        ));
    }

    lines.join("\n")
}

/// Format rejected suppliers, one line per error
pub fn format_rejected(rejected: &[RejectedSupplier]) -> String {
    rejected
        .iter()
        .flat_map(|r| r.errors.iter().map(move |e| format!("{}: {}", r.name, e)))
        .collect::<Vec<_>>()
        .join("\n")
}
