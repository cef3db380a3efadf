use std::env;

use crate::error::{EngineError, Result};
use crate::services::recommendation::DEFAULT_RECOMMENDATION_LIMIT;

/// Engine tuning, loaded from the environment with working defaults.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub recommendation: RecommendationConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// How many entries each recommendation rail shows.
    pub limit: usize,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Off by default: search replaces the structured filters, matching the
    /// shipped behavior. Turning this on stacks search on top of them.
    pub compose_filters: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recommendation: RecommendationConfig {
                limit: DEFAULT_RECOMMENDATION_LIMIT,
            },
            search: SearchConfig {
                compose_filters: false,
            },
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            recommendation: RecommendationConfig {
                limit: parse_var(
                    "RECOMMENDATION_LIMIT",
                    defaults.recommendation.limit,
                    parse_limit,
                )?,
            },
            search: SearchConfig {
                compose_filters: parse_var(
                    "SEARCH_COMPOSE_FILTERS",
                    defaults.search.compose_filters,
                    parse_flag,
                )?,
            },
        })
    }
}

fn parse_var<T>(name: &str, default: T, parse: fn(&str) -> Option<T>) -> Result<T> {
    match env::var(name) {
        Ok(raw) => parse(&raw).ok_or_else(|| {
            EngineError::Config(format!("{name} has invalid value {raw:?}"))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_limit(raw: &str) -> Option<usize> {
    raw.trim().parse().ok().filter(|limit| *limit > 0)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_behavior() {
        let config = EngineConfig::default();
        assert_eq!(config.recommendation.limit, 5);
        assert!(!config.search.compose_filters);
    }

    #[test]
    fn limit_must_be_a_positive_integer() {
        assert_eq!(parse_limit("5"), Some(5));
        assert_eq!(parse_limit(" 10 "), Some(10));
        assert_eq!(parse_limit("0"), None);
        assert_eq!(parse_limit("five"), None);
    }

    #[test]
    fn flags_accept_the_usual_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
