//! JSON boundary for hardware and requirements documents.
//!
//! Malformed documents (missing keys, wrong types, impossible values) are
//! rejected with `InvalidInput`; unknown but well-formed hardware is not an
//! error and goes through the usual estimation fallback.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::data::{EvaluationResult, RequirementsProfile, UserProfile};
use crate::error::{Result, RigcheckError};
use crate::evaluator::evaluate_with;
use crate::scores::ScoreTables;

fn parse_document<T: DeserializeOwned>(kind: &str, json: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| RigcheckError::InvalidInput(format!("{} document: {}", kind, e)))
}

/// Parse and validate a user hardware document
pub fn parse_user_profile(json: &str) -> Result<UserProfile> {
    let profile: UserProfile = parse_document("hardware", json)?;
    profile.validate()?;
    Ok(profile)
}

/// Parse and validate a requirements document
pub fn parse_requirements(json: &str) -> Result<RequirementsProfile> {
    let reqs: RequirementsProfile = parse_document("requirements", json)?;
    reqs.validate()?;
    Ok(reqs)
}

pub fn read_user_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    parse_user_profile(&fs::read_to_string(path)?)
}

pub fn read_requirements<P: AsRef<Path>>(path: P) -> Result<RequirementsProfile> {
    parse_requirements(&fs::read_to_string(path)?)
}

/// Evaluate two JSON documents and return the result as pretty JSON
pub fn check_compatibility_json(
    tables: &ScoreTables,
    hardware_json: &str,
    requirements_json: &str,
) -> Result<String> {
    let user = parse_user_profile(hardware_json)?;
    let reqs = parse_requirements(requirements_json)?;
    let result = evaluate_with(tables, &user, &reqs)?;
    render_result(&result)
}

/// Pretty JSON for one result
pub fn render_result(result: &EvaluationResult) -> Result<String> {
    serde_json::to_string_pretty(result)
        .map_err(|e| RigcheckError::InvalidInput(format!("unserializable result: {}", e)))
}
