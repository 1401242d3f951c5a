// @file: okx_adapter/src/core/classifier.rs
// @description: Response classification. Advisory logging, benign absence, and structural checks are kept apart.
// @author: LAS.

use serde_json::Value;
use log::warn;

// Symbol not tradable / feature disabled. Benign, never an error.
pub const SOFT_FAILURE_CODES: [&str; 2] = ["51001", "50011"];


//
// TYPE DEFINITIONS
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderStatus {
    pub code: Option<String>,
    pub msg: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum Classification<'a> {
    Payload(&'a Value),
    SoftFailure(String),
    ShapeViolation(String),
}


//
// CHECK #1: PROVIDER STATUS / ADVISORIES
//

pub fn read_status(body: &Value) -> ProviderStatus {
    // OKX sends "code" as a string, some endpoints as a number
    let code = match body.get("code") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    let msg = body
        .get("msg")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    ProviderStatus { code, msg }
}

/// Any non-empty message is logged, the provider also uses it for advisories.
pub fn log_advisory(target: &str, status: &ProviderStatus, url: &str) {
    if let Some(msg) = &status.msg {
        warn!(
            target: target,
            "({}) {} for {}",
            status.code.as_deref().unwrap_or(""),
            msg,
            url
        );
    }
}


//
// CHECK #2: BENIGN ABSENCE
//

pub fn soft_failure_code(status: &ProviderStatus) -> Option<&str> {
    status
        .code
        .as_deref()
        .filter(|code| SOFT_FAILURE_CODES.contains(code))
}


//
// CHECK #3: STRUCTURE
//

pub fn extract_field<'a>(body: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(body, |node, key| node.get(*key))
}

pub fn extract_array<'a>(body: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    extract_field(body, path).and_then(Value::as_array)
}


//
// COMBINED PASS
//

/// Runs the three checks in order and returns the value found at `path`.
pub fn classify<'a>(target: &str, body: &'a Value, path: &[&str], url: &str) -> Classification<'a> {
    // #1. Advisories
    let status = read_status(body);
    log_advisory(target, &status, url);

    // #2. Known "no data" codes
    if let Some(code) = soft_failure_code(&status) {
        return Classification::SoftFailure(code.to_string());
    }

    // #3. Expected field present
    match extract_field(body, path) {
        Some(v) if !v.is_null() => Classification::Payload(v),
        _ => Classification::ShapeViolation(format!("missing field '{}'", path.join("."))),
    }
}
