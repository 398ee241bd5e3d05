use std::fmt::Display;

use crate::config::Format;
use crate::types::AuditResult;

mod json;
mod pretty;

pub enum Formatter {
    Pretty(pretty::Pretty),
    Json(json::Json),
}

impl Formatter {
    pub fn new(format: Format, result: AuditResult) -> Self {
        match format {
            Format::Json => Formatter::Json(json::Json::new(result)),
            Format::Pretty => Formatter::Pretty(pretty::Pretty::new(result)),
        }
    }
}

impl Display for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formatter::Pretty(p) => p.fmt(f),
            Formatter::Json(j) => j.fmt(f),
        }
    }
}
