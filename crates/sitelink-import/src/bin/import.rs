//! Sitelink import runner
//!
//! Run one asset-import pass for a work order from the command line.
//!
//! Usage:
//!   cargo run --bin sitelink-import -- --work-order WO-1
//!   cargo run --bin sitelink-import -- --work-order WO-1 --search "pump housing"

use std::env;
use std::sync::Arc;

use sitelink_core::{logging, LogNotifier};
use sitelink_import::{ImportRequest, Importer};
use sitelink_records::RecordsClient;
use sitelink_workspace::WorkspaceClient;

#[derive(Debug, Default)]
struct Args {
    work_order_id: Option<String>,
    search_text: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--work-order" | "-w" => {
                i += 1;
                if i < args.len() {
                    result.work_order_id = Some(args[i].clone());
                }
            }
            "--search" | "-s" => {
                i += 1;
                if i < args.len() {
                    result.search_text = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    result
}

fn print_help() {
    println!(
        r#"
Sitelink import runner

Usage: cargo run --bin sitelink-import -- [OPTIONS]

Options:
  -w, --work-order <ID>   Work order to import assets for (required)
  -s, --search <TEXT>     Also match documents with this metadata value
  -h, --help              Print help

Environment:
  SITELINK_WORKSPACE_URL / SITELINK_WORKSPACE_API_KEY
  SITELINK_RECORDS_URL / SITELINK_RECORDS_API_KEY
  RUST_LOG                Tracing filter (default: sitelink crates at debug)
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging::DEFAULT_ENV_FILTER.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = parse_args();
    let Some(work_order_id) = args.work_order_id else {
        print_help();
        std::process::exit(2);
    };

    let importer = Importer::new(
        Arc::new(WorkspaceClient::from_env()?),
        Arc::new(RecordsClient::from_env()?),
        Arc::new(LogNotifier),
    );

    let mut request = ImportRequest::new(work_order_id);
    if let Some(text) = args.search_text {
        request = request.with_search_text(text);
    }

    let report = importer.run(&request).await?;

    println!(
        "Imported {} asset(s) ({} skipped) in {}ms",
        report.imported(),
        report.skipped(),
        report.duration_ms()
    );
    for outcome in &report.outcomes {
        match &outcome.reason {
            Some(reason) => println!("  {:<18} {} ({})", outcome.status.to_string(), outcome.document_id, reason),
            None => println!("  {:<18} {}", outcome.status.to_string(), outcome.document_id),
        }
    }

    Ok(())
}
