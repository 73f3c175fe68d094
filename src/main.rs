use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

use even_adder::app::{AppState, create_router};
use even_adder::commands;
use even_adder::parity::logger::CheckLogger;
use even_adder::parity::types::ReportFormat;
use even_adder::telemetry;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service configuration file; overrides the layered config/ lookup.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print add_even(A, B)
    Eval {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
        #[arg(long)]
        json: bool,
    },
    /// Run a case set and report every mismatch
    Check {
        #[arg(long)]
        cases: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
        format: ReportFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Start the HTTP service (the default)
    Serve,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;
    telemetry::init_tracing(&config);

    if let Ok(run_mode) = env::var("RUN_MODE") {
        info!("Running in {run_mode} mode");
    }

    match cli.command {
        Some(Commands::Eval { a, b, json }) => {
            println!("{}", commands::eval(a, b, json)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Check {
            cases,
            format,
            output,
        }) => {
            let subject = cases
                .as_ref()
                .map(|p| p.display().to_string())
                .or_else(|| config.cases_path.clone())
                .unwrap_or_else(|| "default cases".to_string());
            CheckLogger::step(&format!("Running case set from {}...", subject));

            let run = match commands::check(&config, cases.as_deref(), format, output.as_deref()) {
                Ok(run) => run,
                Err(e) => {
                    CheckLogger::error(&format!("Check of {} failed: {}", subject, e));
                    return Ok(ExitCode::FAILURE);
                }
            };

            match &output {
                Some(path) => CheckLogger::info_file(&path.display().to_string(), "Report written to"),
                None => println!("{}", run.rendered),
            }

            let report = &run.report;
            CheckLogger::info_file(
                &report.case_set,
                &format!(
                    "Passed: {} | Failed: {} | Pass Rate: {:.1}%",
                    report.passed_cases, report.failed_cases, report.pass_rate
                ),
            );

            if report.is_success() {
                CheckLogger::info("All cases passed.");
            } else {
                CheckLogger::warn("Some cases failed.");
                for failure in report.failures() {
                    CheckLogger::warn_file(
                        &failure.case.label(),
                        &format!("expected {}, got {}", failure.case.expected, failure.actual),
                    );
                }
            }
            Ok(run.exit_code())
        }
        Some(Commands::Serve) | None => {
            info!("Starting {} service", config.service_name);

            let address = config.server_address.clone();
            let state = Arc::new(AppState { config });
            let app = create_router(state);

            let listener = tokio::net::TcpListener::bind(&address).await?;
            info!("Server listening on {}", address);

            axum::serve(listener, app).await?;

            Ok(ExitCode::SUCCESS)
        }
    }
}
