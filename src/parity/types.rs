use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const BUILTIN_CASE_SET: &str = "add_even_success";

/// One assertion: `add_even(a, b)` must equal `expected`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub a: i32,
    pub b: i32,
    pub expected: i64,
}

impl CaseSpec {
    pub fn new(a: i32, b: i32, expected: i64) -> Self {
        Self {
            name: None,
            a,
            b,
            expected,
        }
    }

    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("add_even({}, {})", self.a, self.b),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseSet {
    #[serde(default)]
    pub name: String,
    pub cases: Vec<CaseSpec>,
}

impl CaseSet {
    pub fn new(name: impl Into<String>, cases: Vec<CaseSpec>) -> Self {
        Self {
            name: name.into(),
            cases,
        }
    }

    /// The assertions every build must satisfy.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_CASE_SET,
            vec![
                CaseSpec::new(2, 2, 4),
                CaseSpec::new(100, 1, 100),
                CaseSpec::new(1, 2, 2),
            ],
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseOutcome {
    Passed,
    Failed,
}

impl CaseOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseOutcome::Passed => "passed",
            CaseOutcome::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub case: CaseSpec,
    pub actual: i64,
    pub outcome: CaseOutcome,
    pub execution_time_us: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
    Csv,
    Markdown,
}

impl FromStr for ReportFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Ok(ReportFormat::Console),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub case_set: String,
    pub total_cases: usize,
    pub passed_cases: usize,
    pub failed_cases: usize,
    pub pass_rate: f64,
    pub execution_time_seconds: f64,
    pub generated_at: DateTime<Utc>,
    pub results: Vec<CaseResult>,
}

impl CheckReport {
    pub fn new(case_set: impl Into<String>) -> Self {
        Self {
            case_set: case_set.into(),
            total_cases: 0,
            passed_cases: 0,
            failed_cases: 0,
            pass_rate: 0.0,
            execution_time_seconds: 0.0,
            generated_at: Utc::now(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: CaseResult) {
        self.total_cases += 1;
        self.execution_time_seconds += result.execution_time_us as f64 / 1_000_000.0;

        match result.outcome {
            CaseOutcome::Passed => self.passed_cases += 1,
            CaseOutcome::Failed => self.failed_cases += 1,
        }

        self.results.push(result);
        self.calculate_pass_rate();
    }

    pub fn is_success(&self) -> bool {
        self.failed_cases == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| r.outcome == CaseOutcome::Failed)
    }

    fn calculate_pass_rate(&mut self) {
        self.pass_rate = if self.total_cases > 0 {
            (self.passed_cases as f64 / self.total_cases as f64) * 100.0
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(outcome: CaseOutcome) -> CaseResult {
        CaseResult {
            case: CaseSpec::new(2, 2, 4),
            actual: 4,
            outcome,
            execution_time_us: 500_000,
        }
    }

    #[test]
    fn test_report_counts_and_pass_rate() {
        let mut report = CheckReport::new("sample");
        assert_eq!(report.pass_rate, 0.0);
        assert!(report.is_success());

        report.add_result(result(CaseOutcome::Passed));
        report.add_result(result(CaseOutcome::Passed));
        report.add_result(result(CaseOutcome::Passed));
        report.add_result(result(CaseOutcome::Failed));

        assert_eq!(report.total_cases, 4);
        assert_eq!(report.passed_cases, 3);
        assert_eq!(report.failed_cases, 1);
        assert_eq!(report.pass_rate, 75.0);
        assert_eq!(report.execution_time_seconds, 2.0);
        assert!(!report.is_success());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn test_builtin_case_set() {
        let set = CaseSet::builtin();
        assert_eq!(set.name, BUILTIN_CASE_SET);
        assert_eq!(set.cases.len(), 3);
        assert_eq!(set.cases[1], CaseSpec::new(100, 1, 100));
    }

    #[test]
    fn test_case_label() {
        let mut case = CaseSpec::new(1, 2, 2);
        assert_eq!(case.label(), "add_even(1, 2)");
        case.name = Some("odd_then_even".to_string());
        assert_eq!(case.label(), "odd_then_even");
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("csv".parse::<ReportFormat>(), Ok(ReportFormat::Csv));
        assert!("html".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_case_outcome_serializes_lowercase() {
        let json = serde_json::to_string(&CaseOutcome::Failed).unwrap();
        assert_eq!(json, "\"failed\"");
    }
}
