use std::str::FromStr;

/// Read an environment variable, treating blank values as unset.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse a trimmed override value, handing the raw text back on failure so
/// the caller can report it.
pub fn parse_override<T: FromStr>(raw: &str) -> Result<T, String> {
    raw.trim().parse::<T>().map_err(|_| raw.to_string())
}
