// src/utils/env.rs
use log::{debug, info, warn};

/// Loads variables from a `.env` file in the working directory (or a parent).
/// Variables already present in the process environment are left untouched.
pub fn load_env() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => warn!(
            "No .env file loaded ({}). Proceeding with system environment variables.",
            e
        ),
    }
    for key in ["DATABASE_URL", "NEXT_PUBLIC_SITE_URL", "NEXT_PUBLIC_API_URL", "NEXT_PUBLIC_BASE_PATH"] {
        match std::env::var(key) {
            Ok(value) if key == "DATABASE_URL" && !value.is_empty() => debug!("{} = [hidden]", key),
            Ok(value) => debug!("{} = {}", key, value),
            Err(_) => debug!("{} is not set", key),
        }
    }
}

/// Reads a numeric environment variable, falling back to `default` when unset or unparsable.
pub fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or(default)
}

pub fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_env_usize_parsing() {
        env::set_var("SEO_TEST_USIZE", "42");
        assert_eq!(env_usize("SEO_TEST_USIZE", 7), 42);

        env::set_var("SEO_TEST_USIZE", "not-a-number");
        assert_eq!(env_usize("SEO_TEST_USIZE", 7), 7);

        env::remove_var("SEO_TEST_USIZE");
        assert_eq!(env_usize("SEO_TEST_USIZE", 7), 7);
    }

    #[test]
    fn test_env_bool_parsing() {
        env::set_var("SEO_TEST_BOOL", "false");
        assert!(!env_bool("SEO_TEST_BOOL", true));
        env::remove_var("SEO_TEST_BOOL");
        assert!(env_bool("SEO_TEST_BOOL", true));
    }
}
