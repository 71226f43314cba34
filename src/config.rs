// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, time::Duration};
use url::Url;

/// The published sheet the page renders from.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR1CSi77xtaTLy7SewVBbYxxje96VjdNx61ljrVpmYVCAl7wJa3faWB3WI5GsM0AsPaBU3OcXSveOiX/pub?gid=399960736&single=true&output=csv";

pub const URL_VAR: &str = "SHEET_URL";
pub const TIMEOUT_VAR: &str = "SHEET_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub url: Url,
    /// Only applied when building the default client; the loader itself never times out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_SHEET_URL).expect("default sheet URL should parse"),
            timeout_secs: None,
        }
    }
}

impl SheetConfig {
    pub fn with_url(url: Url) -> Self {
        Self {
            url,
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Defaults, overridden by `SHEET_URL` / `SHEET_TIMEOUT_SECS` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        // empty values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(URL_VAR) {
            cfg.url = Url::parse(raw.trim())
                .with_context(|| format!("parsing {} = {:?}", URL_VAR, raw))?;
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("parsing {} = {:?}", TIMEOUT_VAR, raw))?;
            cfg.timeout_secs = Some(secs);
        }

        Ok(cfg)
    }
}
