use std::str::FromStr;

/// Parse a tag argument (`high`, `HIGH`, `in-progress`) into its enum.
pub fn parse_tag<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(raw.parse::<T>()?)
}

/// Optional variant of [`parse_tag`].
pub fn parse_optional_tag<T>(raw: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(parse_tag).transpose()
}

/// Read a secret from `flag`, falling back to an environment variable.
pub fn secret_from(flag: Option<&str>, env_var: &str, what: &str) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }
    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => anyhow::bail!("{what} required: pass --password or set {env_var}"),
    }
}
