//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::config::LinkOrigin;
use crate::utils::plural_s;

/// A single unresolved link
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The link that failed.
    pub target: String,
    /// Entry label and what was tried.
    pub reason: String,
}

/// Unresolved links grouped by where they were declared
#[derive(Debug, Default)]
pub struct ValidationReport {
    sections: BTreeMap<&'static str, Vec<ValidationError>>,
}

impl ValidationReport {
    pub fn add(&mut self, origin: LinkOrigin, link: String, reason: String) {
        self.sections
            .entry(origin.label())
            .or_default()
            .push(ValidationError {
                target: link,
                reason,
            });
    }

    /// Total unresolved link count.
    pub fn error_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Print every section to stderr.
    pub fn print(&self) {
        for (name, errors) in &self.sections {
            print_section(name, errors);
        }
    }
}

fn print_section(name: &str, errors: &[ValidationError]) {
    eprintln!();
    eprintln!(
        "{} {}",
        name.red().bold(),
        format!("({} error{})", errors.len(), plural_s(errors.len())).dimmed()
    );

    for e in errors {
        if e.reason.is_empty() {
            eprintln!("{} {}", "→".red(), e.target);
        } else {
            eprintln!("{} {} {}", "→".red(), e.target, e.reason.dimmed());
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();

        if total == 0 {
            write!(f, "{}", "all links resolved".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("unresolved link{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_and_count() {
        let mut report = ValidationReport::default();
        assert!(report.is_empty());

        report.add(LinkOrigin::Sidebar, "/a".into(), String::new());
        report.add(LinkOrigin::Nav, "/b".into(), String::new());
        report.add(LinkOrigin::Sidebar, "/c".into(), String::new());

        assert_eq!(report.error_count(), 3);
        let order: Vec<_> = report.sections.keys().copied().collect();
        assert_eq!(order, ["nav", "sidebar"]);
        assert_eq!(report.sections["sidebar"][1].target, "/c");
    }
}
