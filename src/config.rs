use crate::pagination::{DEFAULT_LIMIT, MAX_LIMIT};

const DEFAULT_PORT: u16 = 39100;

/// Bounds applied when resolving `page`/`limit` on list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub pagination: PaginationConfig,
}

fn positive_env(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&v| v > 0)
}

impl Config {
    pub fn from_env() -> Self {
        let max_limit = positive_env("CHAPTERHOUSE_MAX_PAGE_LIMIT").unwrap_or(MAX_LIMIT);
        let default_limit = positive_env("CHAPTERHOUSE_DEFAULT_PAGE_LIMIT")
            .unwrap_or(DEFAULT_LIMIT)
            .min(max_limit);

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            pagination: PaginationConfig {
                default_limit,
                max_limit,
            },
        }
    }
}
