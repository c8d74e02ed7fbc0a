//! Title lookup collaborator.
//!
//! The lookup service itself lives outside this crate. It is invoked as an
//! external program taking the title as its last argument and printing one
//! JSON object: either the best match or `{"error": "..."}`. Evaluation never
//! depends on it; callers may use it to resolve a title before fetching that
//! title's requirements elsewhere.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RigcheckError};
use crate::utils::command::capture_command;

const NOT_FOUND: &str = "Not found";

/// Best match returned by the lookup service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleInfo {
    pub name: String,
    pub main_story: f64,
    pub main_extra: f64,
    pub completionist: f64,
    pub all_styles: f64,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TitleLookupResult {
    Found(TitleInfo),
    NotFound,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LookupResponse {
    Error { error: String },
    Found(TitleInfo),
}

/// Decode one response document from the lookup service
pub fn parse_lookup_response(json: &str) -> Result<TitleLookupResult> {
    let response: LookupResponse = serde_json::from_str(json)
        .map_err(|e| RigcheckError::Lookup(format!("unreadable response: {}", e)))?;

    match response {
        LookupResponse::Found(info) => Ok(TitleLookupResult::Found(info)),
        LookupResponse::Error { error } if error == NOT_FOUND => Ok(TitleLookupResult::NotFound),
        LookupResponse::Error { error } => Err(RigcheckError::Lookup(error)),
    }
}

/// Resolves a free-text title to its best match
pub trait TitleLookup {
    fn lookup(&self, title: &str) -> Result<TitleLookupResult>;
}

/// Runs an external program per lookup
#[derive(Debug, Clone)]
pub struct CommandTitleLookup {
    program: String,
    args: Vec<String>,
}

impl CommandTitleLookup {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl TitleLookup for CommandTitleLookup {
    fn lookup(&self, title: &str) -> Result<TitleLookupResult> {
        let mut args = self.args.clone();
        args.push(title.to_string());

        tracing::debug!(program = %self.program, title, "running title lookup");
        let output = capture_command(&self.program, &args)?;

        if output.stdout.is_empty() {
            return Err(RigcheckError::Lookup(format!(
                "'{}' produced no output (exit code {:?})",
                self.program, output.code
            )));
        }
        parse_lookup_response(&output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_found() {
        let json = r#"{"name": "Portal 2", "main_story": 8.5, "main_extra": 13.0,
            "completionist": 22.5, "all_styles": 12.0, "similarity": 1.0}"#;
        match parse_lookup_response(json).unwrap() {
            TitleLookupResult::Found(info) => {
                assert_eq!(info.name, "Portal 2");
                assert_eq!(info.completionist, 22.5);
            }
            TitleLookupResult::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn test_parse_not_found() {
        assert_eq!(
            parse_lookup_response(r#"{"error": "Not found"}"#).unwrap(),
            TitleLookupResult::NotFound
        );
    }

    #[test]
    fn test_parse_other_error() {
        let err = parse_lookup_response(r#"{"error": "No game name provided"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Lookup error: No game name provided");
    }

    #[test]
    fn test_command_lookup_passes_title_as_last_argument() {
        let script = r#"printf '{"name": "%s", "main_story": 1, "main_extra": 2, "completionist": 3, "all_styles": 2, "similarity": 0.9}' "$1""#;
        let lookup = CommandTitleLookup::new(
            "sh",
            vec!["-c".to_string(), script.to_string(), "lookup".to_string()],
        );
        match lookup.lookup("Celeste").unwrap() {
            TitleLookupResult::Found(info) => {
                assert_eq!(info.name, "Celeste");
                assert_eq!(info.similarity, 0.9);
            }
            TitleLookupResult::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn test_command_lookup_without_output() {
        let lookup = CommandTitleLookup::new("sh", vec!["-c".to_string(), "exit 1".to_string()]);
        assert!(matches!(
            lookup.lookup("anything"),
            Err(RigcheckError::Lookup(_))
        ));
    }
}
