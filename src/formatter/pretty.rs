use std::fmt::Display;

use comfy_table::{presets::NOTHING, Attribute, Cell, CellAlignment, Color, Table};

use crate::types::{AuditResult, Outcome, ProbeAction, Scope};

pub struct Pretty {
    result: AuditResult,
}

impl Pretty {
    pub fn new(result: AuditResult) -> Self {
        Self { result }
    }
}

impl Display for Pretty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table.load_preset(NOTHING);

        table.set_header(vec![
            Cell::new("Kind").add_attribute(Attribute::Bold),
            Cell::new("Scope").add_attribute(Attribute::Bold),
            Cell::new("Probe").add_attribute(Attribute::Bold),
            Cell::new("Verdict").add_attribute(Attribute::Bold),
            Cell::new("Detail").add_attribute(Attribute::Bold),
        ]);

        for verdict in &self.result.verdicts {
            let scope = match verdict.probe.scope {
                Scope::Namespaced => self.result.namespace.as_str(),
                Scope::ClusterWide => "cluster-wide",
            };
            let action = match verdict.probe.action {
                ProbeAction::List => "list",
                ProbeAction::WriteCycle => "create+patch+delete",
            };
            let outcome = match verdict.outcome {
                Outcome::Granted => Cell::new("✔ granted")
                    .fg(Color::AnsiValue(34))
                    .set_alignment(CellAlignment::Center),
                Outcome::Denied => Cell::new("✖ denied")
                    .fg(Color::Red)
                    .set_alignment(CellAlignment::Center),
            };
            table.add_row(vec![
                Cell::new(verdict.probe.kind),
                Cell::new(scope),
                Cell::new(action),
                outcome,
                Cell::new(verdict.detail.as_deref().unwrap_or("")),
            ]);
        }

        table.fmt(f)?;

        for leak in &self.result.leaks {
            writeln!(f)?;
            write!(f, "WARNING: {leak}")?;
        }
        Ok(())
    }
}
