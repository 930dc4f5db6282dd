//! Patterns command implementation
//!
//! Lists the built-in detection rules so reviewers can see what the scanner
//! looks for without reading the source.

use crate::engine::PatternCatalog;
use clap::Args;

/// Arguments for the patterns command
#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Emit the rule table as JSON
    #[arg(long)]
    pub json: bool,
}

impl PatternsArgs {
    /// Execute the patterns command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let catalog = PatternCatalog::builtin()?;

        if self.json {
            let rows: Vec<serde_json::Value> = catalog
                .rules()
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "id": r.id(),
                        "display_name": r.display_name(),
                        "category": r.category(),
                        "regulatory_label": r.regulatory_label(),
                        "base_confidence": r.base_confidence(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(0);
        }

        println!("Built-in PHI detection rules ({} total)\n", catalog.len());
        println!(
            "{:<16} {:<32} {:<9} {:>4}  {}",
            "ID", "NAME", "CATEGORY", "CONF", "REGULATORY LABEL"
        );
        for rule in catalog.rules() {
            println!(
                "{:<16} {:<32} {:<9} {:>4}  {}",
                rule.id(),
                rule.display_name(),
                rule.category().label(),
                rule.base_confidence(),
                rule.regulatory_label()
            );
        }

        Ok(0)
    }
}
