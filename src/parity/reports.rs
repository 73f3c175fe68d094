use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::parity::types::{CaseOutcome, CheckReport, ReportFormat};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Renders `report` and writes it to `output_path` when one is given.
    pub fn generate_report(
        &self,
        report: &CheckReport,
        format: ReportFormat,
        output_path: Option<&Path>,
    ) -> Result<String, ReportError> {
        let rendered = match format {
            ReportFormat::Json => serde_json::to_string_pretty(report)?,
            ReportFormat::Csv => self.generate_csv_report(report),
            ReportFormat::Markdown => self.generate_markdown_report(report),
            ReportFormat::Console => self.generate_console_report(report),
        };

        if let Some(path) = output_path {
            fs::write(path, &rendered).map_err(|source| ReportError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(format = ?format, "Report written to {}", path.display());
        }

        Ok(rendered)
    }

    fn generate_csv_report(&self, report: &CheckReport) -> String {
        let mut csv_content = String::from("name,a,b,expected,actual,outcome\n");

        for result in &report.results {
            csv_content.push_str(&format!(
                "{},{},{},{},{},{}\n",
                csv_escape(&result.case.label()),
                result.case.a,
                result.case.b,
                result.case.expected,
                result.actual,
                result.outcome.as_str()
            ));
        }

        csv_content
    }

    fn generate_markdown_report(&self, report: &CheckReport) -> String {
        let mut md = format!("# add_even Check Report: {}\n\n", report.case_set);

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- **Total Cases**: {}\n", report.total_cases));
        md.push_str(&format!("- **Passed**: {}\n", report.passed_cases));
        md.push_str(&format!("- **Failed**: {}\n", report.failed_cases));
        md.push_str(&format!("- **Pass Rate**: {:.2}%\n", report.pass_rate));
        md.push_str(&format!(
            "- **Generated At**: {}\n\n",
            report.generated_at.to_rfc3339()
        ));

        md.push_str("## Results\n\n");
        md.push_str("| Case | a | b | Expected | Actual | Result |\n");
        md.push_str("|------|---|---|----------|--------|--------|\n");

        for result in &report.results {
            let outcome = match result.outcome {
                CaseOutcome::Passed => "✅ Passed",
                CaseOutcome::Failed => "❌ Failed",
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                markdown_escape(&result.case.label()),
                result.case.a,
                result.case.b,
                result.case.expected,
                result.actual,
                outcome
            ));
        }

        md
    }

    fn generate_console_report(&self, report: &CheckReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n=== CHECK REPORT: {} ===\n\n", report.case_set));
        output.push_str(&format!("Total Cases: {}\n", report.total_cases));
        output.push_str(&format!("Passed: {}\n", report.passed_cases));
        output.push_str(&format!("Failed: {}\n", report.failed_cases));
        output.push_str(&format!("Pass Rate: {:.2}%\n\n", report.pass_rate));

        if report.is_success() {
            output.push_str("All cases passed.\n");
        } else {
            output.push_str("Failed Cases:\n");
            output.push_str("-------------\n");
            for result in report.failures() {
                output.push_str(&format!(
                    "{}: expected {}, got {}\n",
                    result.case.label(),
                    result.case.expected,
                    result.actual
                ));
            }
        }

        output.push_str("\n=== END OF REPORT ===\n");
        output
    }
}

fn markdown_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '|' | '`' | '*' | '_' | '[' | ']' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
