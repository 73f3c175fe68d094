use std::time::Instant;
use tracing::{debug, info, warn};

use crate::parity::even::add_even;
use crate::parity::types::{CaseOutcome, CaseResult, CaseSet, CaseSpec, CheckReport};

pub struct CaseRunner {
    case_set: CaseSet,
}

impl CaseRunner {
    pub fn new(case_set: CaseSet) -> Self {
        Self { case_set }
    }

    /// Runs every case. A failing case is recorded and does not stop the run.
    pub fn run(&self) -> CheckReport {
        let mut report = CheckReport::new(self.case_set.name.clone());

        for case in &self.case_set.cases {
            report.add_result(self.run_case(case));
        }

        info!(
            case_set = %report.case_set,
            total = report.total_cases,
            passed = report.passed_cases,
            failed = report.failed_cases,
            "Case set finished"
        );
        report
    }

    pub fn run_case(&self, case: &CaseSpec) -> CaseResult {
        let start_time = Instant::now();
        let actual = add_even(case.a, case.b);
        let execution_time_us = start_time.elapsed().as_micros() as u64;

        let outcome = if actual == case.expected {
            debug!(case = %case.label(), actual, "Case passed");
            CaseOutcome::Passed
        } else {
            warn!(
                case = %case.label(),
                a = case.a,
                b = case.b,
                expected = case.expected,
                actual,
                "Case failed"
            );
            CaseOutcome::Failed
        };

        CaseResult {
            case: case.clone(),
            actual,
            outcome,
            execution_time_us,
        }
    }
}
