/// Compute effective limit with precedence: local arg -> global flag -> config default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> usize {
    usize::try_from(local.or(global).unwrap_or(fallback)).unwrap_or(usize::MAX)
}
