use std::path::Path;
use tracing::{info, instrument};

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{AddEvenRequest, AddEvenResponse, CheckRequest, SumEvenRequest, SumEvenResponse},
    parity::{
        config_loader::CaseSetLoader,
        even::{add_even, even_operands, is_even, sum_even},
        runner::CaseRunner,
        types::{CaseSet, CheckReport},
    },
};

pub const MAX_BATCH_VALUES: usize = 10_000;
pub const MAX_CHECK_CASES: usize = 1_000;

#[instrument]
pub fn evaluate(request: AddEvenRequest) -> AddEvenResponse {
    AddEvenResponse {
        a: request.a,
        b: request.b,
        result: add_even(request.a, request.b),
        even_operands: even_operands(request.a, request.b),
    }
}

#[instrument(skip(request), fields(count = request.values.len()))]
pub fn evaluate_many(request: SumEvenRequest) -> AppResult<SumEvenResponse> {
    if request.values.is_empty() {
        return Err(AppError::Validation("values must not be empty".to_string()));
    }
    if request.values.len() > MAX_BATCH_VALUES {
        return Err(AppError::Validation(format!(
            "values cannot exceed {} entries",
            MAX_BATCH_VALUES
        )));
    }

    let even_count = request.values.iter().filter(|n| is_even(**n)).count();

    Ok(SumEvenResponse {
        count: request.values.len(),
        even_count,
        result: sum_even(request.values),
    })
}

#[instrument(skip(request), fields(cases = request.cases.len()))]
pub fn check(request: CheckRequest) -> AppResult<CheckReport> {
    if request.cases.is_empty() {
        return Err(AppError::Validation("cases must not be empty".to_string()));
    }
    if request.cases.len() > MAX_CHECK_CASES {
        return Err(AppError::Validation(format!(
            "cases cannot exceed {} entries",
            MAX_CHECK_CASES
        )));
    }

    let name = request
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "adhoc".to_string());

    Ok(CaseRunner::new(CaseSet::new(name, request.cases)).run())
}

/// Runs the case set named by `cases_path`, or the default search.
#[instrument(skip(config))]
pub fn check_configured(config: &AppConfig) -> AppResult<CheckReport> {
    let case_set = CaseSetLoader::default().load_case_set(config.cases_path.as_deref().map(Path::new))?;
    info!("Running case set {}", case_set.name);
    Ok(CaseRunner::new(case_set).run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parity::types::CaseSpec;

    #[test]
    fn test_evaluate() {
        let response = evaluate(AddEvenRequest { a: 100, b: 1 });
        assert_eq!(response.result, 100);
        assert_eq!(response.even_operands, vec![100]);
    }

    #[test]
    fn test_evaluate_many() {
        let response = evaluate_many(SumEvenRequest {
            values: vec![1, 2, 3, 4],
        })
        .unwrap();
        assert_eq!(response.count, 4);
        assert_eq!(response.even_count, 2);
        assert_eq!(response.result, 6);
    }

    #[test]
    fn test_evaluate_many_rejects_empty_and_oversized() {
        assert!(matches!(
            evaluate_many(SumEvenRequest { values: vec![] }),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            evaluate_many(SumEvenRequest {
                values: vec![2; MAX_BATCH_VALUES + 1]
            }),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_check_names_adhoc_sets() {
        let report = check(CheckRequest {
            name: Some("  ".to_string()),
            cases: vec![CaseSpec::new(2, 2, 4)],
        })
        .unwrap();
        assert_eq!(report.case_set, "adhoc");
        assert!(report.is_success());
    }

    #[test]
    fn test_check_rejects_empty() {
        let result = check(CheckRequest {
            name: None,
            cases: vec![],
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_check_rejects_oversized() {
        let result = check(CheckRequest {
            name: None,
            cases: vec![CaseSpec::new(2, 2, 4); MAX_CHECK_CASES + 1],
        });
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("1000")));

        let at_limit = check(CheckRequest {
            name: None,
            cases: vec![CaseSpec::new(2, 2, 4); MAX_CHECK_CASES],
        })
        .unwrap();
        assert_eq!(at_limit.total_cases, MAX_CHECK_CASES);
    }

    #[test]
    fn test_check_configured_missing_file() {
        let config = AppConfig {
            cases_path: Some("does/not/exist.yaml".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(
            check_configured(&config),
            Err(AppError::CaseSet(_))
        ));
    }

    #[test]
    fn test_check_configured_reads_cases_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("service.yaml");
        std::fs::write(&path, "cases:\n  - { a: 8, b: 5, expected: 8 }\n").unwrap();

        let config = AppConfig {
            cases_path: Some(path.to_string_lossy().into_owned()),
            ..AppConfig::default()
        };
        let report = check_configured(&config).unwrap();

        assert_eq!(report.case_set, "service");
        assert_eq!(report.passed_cases, 1);
    }
}
