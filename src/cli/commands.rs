//! Command implementations for the holiday importer CLI
//!
//! Each command sets up logging, builds an importer over the bundled or
//! directory datasets and writes its report to stdout.

use crate::app::models::HolidayRecord;
use crate::app::services::dataset_locator::{DatasetLocator, DirectoryDatasets, EmbeddedDatasets};
use crate::app::services::holiday_importer::{HolidayImporter, ImportResult};
use crate::cli::args::{Args, Commands, DatasetsArgs, ListArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use tracing::{debug, info};

/// Main command runner
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::List(list_args)) => run_list(list_args),
        Some(Commands::Datasets(datasets_args)) => run_datasets(datasets_args),
        None => Ok(()),
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("brazilian_holidays={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// List command runner
pub fn run_list(args: ListArgs) -> Result<()> {
    setup_logging(args.get_log_level());
    debug!("List arguments: {:?}", args);

    args.validate().context("Invalid arguments")?;
    let config = args.import_config();

    let results = match &args.data_dir {
        Some(dir) => collect(&HolidayImporter::new(DirectoryDatasets::new(dir), config)?, &args)?,
        None => collect(&HolidayImporter::embedded(config)?, &args)?,
    };

    let records = displayed_records(&results, args.state_filter().as_deref());

    info!("Listing {} holidays", records.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Human => write_human(&mut out, &results, &records)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &records)
                .context("Failed to write JSON output")?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&mut out, &records)?,
    }

    Ok(())
}

/// Records to display, optionally narrowed to one state
///
/// Holidays without a state code (national ones) are always shown. This only
/// narrows the listing; imports are never filtered.
fn displayed_records<'a>(
    results: &'a [ImportResult],
    state: Option<&str>,
) -> Vec<&'a HolidayRecord> {
    results
        .iter()
        .flat_map(|result| result.records.iter())
        .filter(|record| match state {
            Some(state) => record.state_code.is_empty() || record.state_code == state,
            None => true,
        })
        .collect()
}

fn collect<L: DatasetLocator>(
    importer: &HolidayImporter<L>,
    args: &ListArgs,
) -> Result<Vec<ImportResult>> {
    args.scope
        .scopes()
        .into_iter()
        .map(|scope| {
            importer
                .import(scope, args.year)
                .with_context(|| format!("Failed to import {} holidays", scope))
        })
        .collect()
}

fn write_human(
    out: &mut impl Write,
    results: &[ImportResult],
    records: &[&HolidayRecord],
) -> Result<()> {
    for record in records {
        writeln!(
            out,
            "{}  {:<10} {:<22} {}",
            record.date.format("%Y-%m-%d").to_string().bright_white().bold(),
            record.coverage_scope.cyan(),
            record.location(),
            record.title
        )?;
    }

    writeln!(out)?;
    for result in results {
        let summary = format!("{}: {}", result.scope, result.stats.summary());
        if result.stats.has_errors() {
            writeln!(out, "{}", summary.yellow())?;
            for error in &result.stats.errors {
                writeln!(out, "  {}", error.dimmed())?;
            }
        } else {
            writeln!(out, "{}", summary.green())?;
        }
    }

    Ok(())
}

fn write_csv(out: &mut impl Write, records: &[&HolidayRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer
            .serialize(record)
            .context("Failed to write CSV record")?;
    }
    writer.flush()?;
    Ok(())
}

/// Datasets command runner
pub fn run_datasets(args: DatasetsArgs) -> Result<()> {
    setup_logging(args.get_log_level());

    match &args.data_dir {
        Some(dir) => report_datasets(&HolidayImporter::new(
            DirectoryDatasets::new(dir),
            Default::default(),
        )?),
        None => {
            println!("{}", "Embedded resources".bright_green().bold());
            for name in EmbeddedDatasets::resource_names() {
                println!("  {}", name);
            }
            println!();
            report_datasets(&HolidayImporter::<EmbeddedDatasets>::default())
        }
    }
}

fn report_datasets<L: DatasetLocator>(importer: &HolidayImporter<L>) -> Result<()> {
    for result in importer.import_all(0) {
        println!(
            "{:<10} {:<40} {}",
            result.scope.to_string().bright_white().bold(),
            importer.locator().describe(result.scope),
            result.stats.summary()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Scope;
    use chrono::NaiveDate;

    fn sample_record() -> HolidayRecord {
        HolidayRecord::new(
            NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
            "Revolução Constitucionalista de 1932".to_string(),
            "Estadual".to_string(),
            "BR".to_string(),
            "SP".to_string(),
            String::new(),
            String::new(),
            String::new(),
            false,
            false,
        )
    }

    #[test]
    fn test_write_csv_has_header_and_row() {
        let record = sample_record();
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[&record]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,title,coverage_scope,country_code,state_code,federal_code,ibge_code,city_name,reserved_a,reserved_b"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-07-09,Revolução Constitucionalista de 1932,Estadual,BR,SP,,,,false,false"
        );
    }

    #[test]
    fn test_state_filter_keeps_national_holidays() {
        let importer = HolidayImporter::<EmbeddedDatasets>::default();
        let results = importer.import_all(2024);

        let all = displayed_records(&results, None);
        let sao_paulo = displayed_records(&results, Some("SP"));
        assert!(sao_paulo.len() < all.len());
        assert!(
            sao_paulo
                .iter()
                .all(|r| r.state_code.is_empty() || r.state_code == "SP")
        );
        assert!(sao_paulo.iter().any(|r| r.title == "Independência do Brasil"));
        assert!(sao_paulo.iter().any(|r| r.city_name == "São Paulo"));
    }

    #[test]
    fn test_write_human_includes_summary() {
        colored::control::set_override(false);
        let importer = HolidayImporter::<EmbeddedDatasets>::default();
        let result = importer.import(Scope::National, 2024).unwrap();
        let records: Vec<&HolidayRecord> = result.records.iter().collect();

        let mut buffer = Vec::new();
        write_human(&mut buffer, std::slice::from_ref(&result), &records).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("2024-09-07"));
        assert!(text.contains("Independência do Brasil"));
        assert!(text.contains("national: Imported 9 of 9 rows"));
    }
}
