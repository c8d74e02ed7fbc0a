//! String parsing utilities

use crate::error::{Result, RigcheckError};

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse memory value in kB to GB
pub fn kb_to_gb(kb_str: &str) -> Result<f64> {
    let kb: u64 = kb_str
        .trim()
        .parse()
        .map_err(|_| RigcheckError::Detection(format!("Invalid memory value: {}", kb_str)))?;
    Ok(kb as f64 / 1_048_576.0) // 1024^2
}
