use colored::*;

use crate::core::locale::Locale;
use crate::reports::Report;

pub struct OutputFormatter {
    format: String,
}

impl OutputFormatter {
    pub fn new(format: &str) -> Self {
        Self {
            format: format.to_string(),
        }
    }

    pub fn display_reports(&self, reports: &[Box<dyn Report>], locale: &Locale) {
        match self.format.as_str() {
            "json" => self.display_json(reports, locale),
            _ => self.display_table(reports, locale),
        }
    }

    fn display_json(&self, reports: &[Box<dyn Report>], locale: &Locale) {
        let entries: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| {
                serde_json::json!({
                    "output_path": r.output_path(),
                    "category": r.category().to_string(),
                    "external": r.is_external(),
                    "name": r.name(locale),
                    "description": r.description(locale),
                })
            })
            .collect();
        let output = serde_json::json!({
            "locale": locale.to_string(),
            "reports": entries,
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    }

    fn display_table(&self, reports: &[Box<dyn Report>], locale: &Locale) {
        println!();
        println!(
            "  {:<16} {:<18} {:<10} {}",
            "Output path".bold(),
            "Category".bold(),
            "External".bold(),
            "Name".bold()
        );
        println!("  {}", "─".repeat(64));

        for report in reports {
            let external = if report.is_external() {
                "yes".yellow().to_string()
            } else {
                "no".to_string()
            };
            println!(
                "  {:<16} {:<18} {:<10} {}",
                report.output_path().cyan(),
                report.category().to_string(),
                external,
                report.name(locale)
            );
            println!("  {:<16} {}", "", report.description(locale).dimmed());
        }
        println!();
    }
}
