//! Check command implementation.

use crate::error::Result;
use crate::output::Formatter;
use kinship_graph::{diagnose, Dataset, EngineConfig};

/// Execute the check command.
///
/// Findings are informational; the command succeeds whatever it reports.
pub fn execute_check(dataset: &Dataset, engine: &EngineConfig, formatter: &Formatter) -> Result<()> {
    println!("{}", render_check(dataset, engine, formatter)?);
    Ok(())
}

/// Run diagnostics and format the report.
pub fn render_check(dataset: &Dataset, engine: &EngineConfig, formatter: &Formatter) -> Result<String> {
    let report = diagnose(dataset, engine);
    formatter.format_report(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use crate::config::OutputFormat;
    use kinship_domain::Relationship;

    #[test]
    fn test_clean_fixture() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = render_check(&fixtures::north(), &EngineConfig::default(), &formatter).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_strict_reports_unknown_years() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = render_check(&fixtures::north(), &EngineConfig::strict(), &formatter).unwrap();
        assert_eq!(output, "person 'jon' has non-numeric birth year 'unknown'");
    }

    #[test]
    fn test_dangling_edge_reported() {
        let mut dataset = fixtures::north();
        dataset.relationships.push(Relationship::spousal("robb", "talisa"));

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = render_check(&dataset, &EngineConfig::default(), &formatter).unwrap();
        assert!(output.contains("1 data issue(s) found"));
        assert!(output.contains("talisa"));
    }
}
