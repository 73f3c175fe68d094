use std::path::Path;
use std::process::ExitCode;

use crate::{
    config::AppConfig,
    error::AppResult,
    models::AddEvenRequest,
    parity::{
        config_loader::CaseSetLoader,
        reports::ReportGenerator,
        runner::CaseRunner,
        types::{CheckReport, ReportFormat},
    },
    services::evaluation_service,
};

pub fn load_config(path: Option<&str>) -> AppResult<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };
    Ok(config)
}

/// Output of `eval`: the bare result, or the full response as JSON.
pub fn eval(a: i32, b: i32, json: bool) -> AppResult<String> {
    let response = evaluation_service::evaluate(AddEvenRequest { a, b });
    if json {
        Ok(serde_json::to_string_pretty(&response)?)
    } else {
        Ok(response.result.to_string())
    }
}

pub struct CheckRun {
    pub report: CheckReport,
    pub rendered: String,
}

impl CheckRun {
    /// 0 when every case passed, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.report.is_success() { 0 } else { 1 }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Runs `cases`, or the configured `cases_path` when no file is given, so the
/// CLI resolves the same case set as `GET /api/v1/check`.
pub fn check(
    config: &AppConfig,
    cases: Option<&Path>,
    format: ReportFormat,
    output: Option<&Path>,
) -> AppResult<CheckRun> {
    let cases = cases.or(config.cases_path.as_deref().map(Path::new));
    let case_set = CaseSetLoader::default().load_case_set(cases)?;
    let report = CaseRunner::new(case_set).run();
    let rendered = ReportGenerator::new().generate_report(&report, format, output)?;
    Ok(CheckRun { report, rendered })
}
