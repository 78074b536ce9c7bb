//! Environment-backed configuration.
//!
//! File locations come from `.env` (untracked) or the process environment;
//! command-line flags override both.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// File locations resolved once at startup.
#[derive(Debug)]
pub struct Config {
    pub roster_path: PathBuf,
    pub duties_path: PathBuf,
}

impl Config {
    pub fn load(
        roster_override: Option<PathBuf>,
        duties_override: Option<PathBuf>,
    ) -> Result<Self> {
        // .env is optional; the variables may already be in the environment
        let _ = dotenvy::dotenv();

        Ok(Self {
            roster_path: resolve("STAVROI_LOCATION", "--roster", roster_override)?,
            duties_path: resolve("DUTIES_LOCATION", "--duties", duties_override)?,
        })
    }
}

fn resolve(var: &str, flag: &str, override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }

    let value = env::var(var)
        .with_context(|| format!("{var} is not set; add it to .env or pass {flag}"))?;
    Ok(PathBuf::from(value))
}
