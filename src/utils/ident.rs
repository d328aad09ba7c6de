use crate::errors::{AppError, AppResult};
use regex::Regex;

/// Normalize a platform identity key: strip the optional leading '@' so
/// `@bob` and `bob` resolve to the same roster entry, then validate the
/// username shape.
pub fn normalize(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    let key = trimmed.strip_prefix('@').unwrap_or(trimmed);

    let re = Regex::new(r"^[A-Za-z0-9_]{3,32}$").unwrap();
    if re.is_match(key) {
        Ok(key.to_string())
    } else {
        Err(AppError::InvalidIdentity(raw.to_string()))
    }
}
