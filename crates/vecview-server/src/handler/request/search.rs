use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::handler::{ErrorKind, Result};

/// Smallest number of results a search may ask for.
pub const MIN_TOP_K: usize = 1;

/// Largest number of results a search may ask for.
pub const MAX_TOP_K: usize = 10;

/// Number of results used when `top_k` is omitted.
pub const DEFAULT_TOP_K: usize = 3;

const TOP_K_RANGE: RangeInclusive<usize> = MIN_TOP_K..=MAX_TOP_K;

/// Query string of `GET /api/collections/{name}/search`.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free text to search for; empty means "no search".
    #[serde(default)]
    pub query: String,
    /// Number of results to return.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl SearchParams {
    pub fn new(query: impl Into<String>, top_k: usize) -> Self {
        Self {
            query: query.into(),
            top_k,
        }
    }

    /// Returns `top_k` if it lies within `1..=10`.
    pub fn validated_top_k(&self) -> Result<usize> {
        if TOP_K_RANGE.contains(&self.top_k) {
            return Ok(self.top_k);
        }

        Err(ErrorKind::BadRequest
            .with_message(format!(
                "top_k must be between {MIN_TOP_K} and {MAX_TOP_K}"
            ))
            .with_resource("top_k")
            .with_context(format!("received top_k = {}", self.top_k)))
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_TOP_K)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_omitted() -> serde_json::Result<()> {
        let params: SearchParams = serde_json::from_str("{}")?;
        assert_eq!(params, SearchParams::default());
        assert_eq!(params.top_k, 3);
        Ok(())
    }

    #[test]
    fn top_k_bounds() {
        assert!(SearchParams::new("q", 0).validated_top_k().is_err());
        assert!(SearchParams::new("q", 11).validated_top_k().is_err());
        assert!(matches!(SearchParams::new("q", 1).validated_top_k(), Ok(1)));
        assert!(matches!(SearchParams::new("q", 10).validated_top_k(), Ok(10)));
    }
}
