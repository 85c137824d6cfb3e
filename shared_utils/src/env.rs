/// Reads an optional environment variable.
///
/// Unset, empty, and whitespace-only values all yield `None`, so callers can
/// treat `FOO=` the same as not exporting `FOO` at all.
pub fn get_optional_env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
