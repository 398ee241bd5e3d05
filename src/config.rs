use std::time::Duration;

use anyhow::{bail, Result};

/// Output format for the reporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Pretty,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub namespace: String,
    pub interval: Duration,
    /// Inventory mode: one cycle, then exit.
    pub once: bool,
    pub format: Format,
}

impl Config {
    /// Validates startup parameters. Any failure here is fatal: the audit
    /// never starts with a bad namespace or interval.
    pub fn new(namespace: String, interval_secs: u64, once: bool, format: Format) -> Result<Self> {
        if namespace.trim().is_empty() {
            bail!("namespace must not be empty");
        }
        if interval_secs == 0 {
            bail!("interval must be a positive number of seconds");
        }
        Ok(Self {
            namespace,
            interval: Duration::from_secs(interval_secs),
            once,
            format,
        })
    }
}
