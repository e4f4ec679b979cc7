use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use supplier_seg::config::Config;
use supplier_seg::portfolio::{evaluate, EvaluatedSupplier, Portfolio, SupplierFilter};
use supplier_seg::scoring::ScoringWeights;
use supplier_seg::segment::SegmentType;
use supplier_seg::supplier::SupplierRecord;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INTERNAL: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_VALIDATION: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List suppliers ranked by score (default if no subcommand)
    List {
        /// Only show suppliers in this computed segment (e.g. switch_candidates)
        #[arg(long)]
        segment: Option<SegmentType>,
        /// Only show suppliers whose name or category contains this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },
    /// Show score breakdown and reasoning for one supplier
    Show {
        /// Index number of the supplier (1-based, as shown in list)
        index: usize,
    },
    /// Show portfolio metrics
    Summary,
    /// Describe the six segments
    Segments,
    /// Score a single supplier given on the command line
    Evaluate {
        /// Display name for the supplier
        #[arg(long, default_value = "(ad hoc)")]
        name: String,
        /// Risk score, 1-10 (higher is riskier)
        #[arg(long)]
        risk: f64,
        /// Performance score, 0-100
        #[arg(long)]
        performance: f64,
        /// Innovation potential, 1-10
        #[arg(long)]
        innovation: f64,
        /// low, medium or high
        #[arg(long)]
        complexity: String,
        /// many_alternatives, limited_alternatives, few_alternatives or monopolistic
        #[arg(long)]
        market: String,
        /// routine, important, critical or strategic
        #[arg(long)]
        criticality: String,
        /// transactional, collaborative, partnership or integration
        #[arg(long)]
        relationship: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "supplier-seg")]
#[command(about = "Supplier scoring and segmentation CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/supplier-seg/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load config and weights, exiting with EXIT_CONFIG on any problem
fn load_config_or_exit(path: Option<PathBuf>) -> (Config, ScoringWeights) {
    let config = match supplier_seg::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let weights = config.effective_weights();
    if let Err(errors) = supplier_seg::scoring::validate_weights(&weights) {
        eprintln!("Scoring weights errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    (config, weights)
}

/// Load config and evaluate every configured supplier, exiting on config problems
fn load_portfolio_or_exit(
    config_path: Option<PathBuf>,
    format: OutputFormat,
    start_time: Instant,
) -> (Portfolio, ScoringWeights) {
    let (config, weights) = load_config_or_exit(config_path);
    info!(
        suppliers = config.suppliers.len(),
        custom_weights = config.weights.is_some(),
        "loaded config"
    );

    if config.suppliers.is_empty() {
        eprintln!("No suppliers configured in config file.");
        eprintln!("Add suppliers to ~/.config/supplier-seg/config.yaml:");
        eprintln!("  suppliers:");
        eprintln!("    - name: Acme Metals");
        eprintln!("      category: Raw Materials");
        eprintln!("      risk_score: 2");
        eprintln!("      ...");
        std::process::exit(EXIT_CONFIG);
    }

    let portfolio = evaluate(config.suppliers, &weights);
    debug!(
        evaluated = portfolio.evaluated.len(),
        rejected = portfolio.rejected.len(),
        elapsed = ?start_time.elapsed(),
        "portfolio evaluated"
    );

    if !portfolio.rejected.is_empty() && format != OutputFormat::Json {
        eprintln!("Skipped {} invalid supplier(s):", portfolio.rejected.len());
        eprintln!("{}", supplier_seg::output::format_rejected(&portfolio.rejected));
    }

    (portfolio, weights)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_INTERNAL);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::List {
        segment: None,
        search: None,
    });
    let config_path = cli.config.map(PathBuf::from);
    let use_colors = supplier_seg::output::should_use_colors();
    let start_time = Instant::now();

    match command {
        Commands::Segments => {
            println!("{}", supplier_seg::output::format_segment_catalog(use_colors));
        }
        Commands::Evaluate {
            name,
            risk,
            performance,
            innovation,
            complexity,
            market,
            criticality,
            relationship,
        } => {
            // Only read a config file for weights when one was asked for
            let weights = if config_path.is_some() {
                load_config_or_exit(config_path).1
            } else {
                ScoringWeights::DEFAULT
            };

            let record = SupplierRecord {
                risk_score: Some(risk),
                performance_score: Some(performance),
                innovation_potential: Some(innovation),
                supplier_complexity: Some(complexity),
                market_availability: Some(market),
                business_criticality: Some(criticality),
                relationship_type: Some(relationship),
                ..SupplierRecord::new(name, "")
            };

            let criteria = match record.criteria() {
                Ok(c) => c,
                Err(errors) => {
                    eprintln!("Invalid supplier criteria:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(EXIT_VALIDATION);
                }
            };

            let recommendation = supplier_seg::recommend_with(&criteria, &weights);
            if cli.format == OutputFormat::Json {
                print_json(&recommendation);
            } else {
                let supplier = EvaluatedSupplier {
                    rank: 1,
                    record,
                    criteria,
                    recommendation,
                };
                println!(
                    "{}",
                    supplier_seg::output::format_supplier_detail(&supplier, &weights, use_colors)
                );
            }
        }
        Commands::Show { index } => {
            let (portfolio, weights) = load_portfolio_or_exit(config_path, cli.format, start_time);
            // Validate index bounds (1-based)
            if index < 1 || index > portfolio.evaluated.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    portfolio.evaluated.len()
                );
                std::process::exit(EXIT_CONFIG);
            }
            let supplier = &portfolio.evaluated[index - 1];
            if cli.format == OutputFormat::Json {
                print_json(&supplier.recommendation);
            } else {
                let detail =
                    supplier_seg::output::format_supplier_detail(supplier, &weights, use_colors);
                println!("{}", detail);
            }
        }
        Commands::Summary => {
            let (portfolio, _) = load_portfolio_or_exit(config_path, cli.format, start_time);
            let summary = portfolio.summary();
            if cli.format == OutputFormat::Json {
                print_json(&summary);
            } else {
                println!("{}", supplier_seg::output::format_summary(&summary, use_colors));
            }
        }
        Commands::List { segment, search } => {
            let (portfolio, _) = load_portfolio_or_exit(config_path, cli.format, start_time);
            let filter = SupplierFilter { search, segment };
            let filtered = !filter.is_empty();
            let portfolio = portfolio.filter(&filter);
            debug!(shown = portfolio.evaluated.len(), filtered, "applied list filter");

            match cli.format {
                OutputFormat::Table if filtered && portfolio.evaluated.is_empty() => {
                    println!("No suppliers match the filter.");
                }
                OutputFormat::Table => println!(
                    "{}",
                    supplier_seg::output::format_scored_table(&portfolio.evaluated, use_colors)
                ),
                OutputFormat::Tsv => {
                    let output = supplier_seg::output::format_tsv(&portfolio.evaluated);
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                }
                OutputFormat::Json => match supplier_seg::output::format_json(&portfolio) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize output: {}", e);
                        std::process::exit(EXIT_INTERNAL);
                    }
                },
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [EXIT_SUCCESS, EXIT_INTERNAL, EXIT_CONFIG, EXIT_VALIDATION];
        for (i, code) in codes.iter().enumerate() {
            assert!(!codes[i + 1..].contains(code));
        }
    }

    #[test]
    fn test_list_filter_flags() {
        let cli = Cli::try_parse_from([
            "supplier-seg",
            "list",
            "--segment",
            "switch_candidates",
            "--search",
            "metal",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List { segment, search }) => {
                assert_eq!(segment, Some(SegmentType::SwitchCandidates));
                assert_eq!(search.as_deref(), Some("metal"));
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_list_rejects_unknown_segment() {
        let result = Cli::try_parse_from(["supplier-seg", "list", "--segment", "preferred"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["supplier-seg"]).unwrap();
        assert!(cli.command.is_none());
    }
}
