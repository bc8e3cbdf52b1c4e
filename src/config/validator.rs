//! Settings validation: identifiers that end up spliced into SQL text.

use crate::error::ConfigError;
use regex::Regex;

/// Plain unquoted PostgreSQL identifier, at most 63 bytes.
const IDENT_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]{0,62}$";

pub fn validate_table_name(name: &str) -> Result<(), ConfigError> {
    let re = Regex::new(IDENT_PATTERN).map_err(|_| ConfigError::InvalidTableName(name.to_string()))?;
    if !re.is_match(name) {
        return Err(ConfigError::InvalidTableName(name.to_string()));
    }
    Ok(())
}
