//! Gaps command implementation.

use super::{build_view, parse_house};
use crate::cli::FilterArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinship_graph::{Dataset, EngineConfig, ViewOptions};

/// Execute the gaps command.
pub fn execute_gaps(
    args: FilterArgs,
    dataset: &Dataset,
    engine: &EngineConfig,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_gaps(&args, dataset, engine, formatter)?);
    Ok(())
}

/// Resolve and format lineage-gap bridges between visible fragments.
pub fn render_gaps(
    args: &FilterArgs,
    dataset: &Dataset,
    engine: &EngineConfig,
    formatter: &Formatter,
) -> Result<String> {
    let house = args.house.as_deref().map(parse_house).transpose()?;
    let options =
        ViewOptions::from_config(engine).with_cadets(args.cadets.resolve(engine.include_cadets));

    let view = build_view(dataset, house.as_ref(), &options);
    formatter.format_bridges(&view.bridges)
}
