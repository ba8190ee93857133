//! Scope command implementation.

use super::{build_view, parse_house};
use crate::cli::ScopeArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinship_graph::{Dataset, EngineConfig, ViewOptions};

/// Execute the scope command.
pub fn execute_scope(
    args: ScopeArgs,
    dataset: &Dataset,
    engine: &EngineConfig,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_scope(&args, dataset, engine, formatter)?);
    Ok(())
}

/// Resolve and format the scope of one house.
pub fn render_scope(
    args: &ScopeArgs,
    dataset: &Dataset,
    engine: &EngineConfig,
    formatter: &Formatter,
) -> Result<String> {
    let house = parse_house(&args.house)?;
    let options =
        ViewOptions::from_config(engine).with_cadets(args.cadets.resolve(engine.include_cadets));

    let view = build_view(dataset, Some(&house), &options);
    formatter.format_scope(&view.scope, &dataset.people_by_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CadetArgs;
    use crate::commands::fixtures;
    use crate::config::OutputFormat;

    fn args(house: &str, cadets: bool) -> ScopeArgs {
        ScopeArgs {
            house: house.to_string(),
            cadets: CadetArgs {
                cadets,
                no_cadets: false,
            },
        }
    }

    #[test]
    fn test_scope_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = render_scope(
            &args("stark", false),
            &fixtures::north(),
            &EngineConfig::default(),
            &formatter,
        )
        .unwrap();
        assert_eq!(output, "catelyn\neddard\nrickard\nrobb");
    }

    #[test]
    fn test_scope_follows_configured_cadets() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = render_scope(
            &args("stark", false),
            &fixtures::north(),
            &EngineConfig::permissive(),
            &formatter,
        )
        .unwrap();
        assert!(output.contains("karlon"));
        assert!(output.contains("rickard-k"));
    }

    #[test]
    fn test_unknown_house_is_empty() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = render_scope(
            &args("lannister", true),
            &fixtures::north(),
            &EngineConfig::default(),
            &formatter,
        )
        .unwrap();
        assert!(output.is_empty());
    }
}
