use serde::{Deserialize, Serialize};

use crate::parity::types::CaseSpec;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AddEvenRequest {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddEvenResponse {
    pub a: i32,
    pub b: i32,
    pub result: i64,
    pub even_operands: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumEvenRequest {
    pub values: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SumEvenResponse {
    pub count: usize,
    pub even_count: usize,
    pub result: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    pub name: Option<String>,
    pub cases: Vec<CaseSpec>,
}
