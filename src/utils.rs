/// reads `k` from the environment, treating empty values as unset
pub fn env_var(k: &str) -> Option<String> {
    std::env::var(k).ok().filter(|v| !v.is_empty())
}

pub fn env_var_or(k: &str, default: &str) -> String {
    env_var(k).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::{env_var, env_var_or};

    #[test]
    fn test_env_var_or_unset() {
        assert_eq!(None, env_var("SWISS_TOURNAMENT_SURELY_UNSET_VAR"));
        assert_eq!(
            "fallback",
            env_var_or("SWISS_TOURNAMENT_SURELY_UNSET_VAR", "fallback")
        );
    }
}
