//! View command implementation.

use super::{build_view, parse_house, parse_person};
use crate::cli::ViewArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinship_graph::{Dataset, EngineConfig, ViewOptions};

/// Execute the view command.
pub fn execute_view(
    args: ViewArgs,
    dataset: &Dataset,
    engine: &EngineConfig,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_view(&args, dataset, engine, formatter)?);
    Ok(())
}

/// Build and format the view of one house.
pub fn render_view(
    args: &ViewArgs,
    dataset: &Dataset,
    engine: &EngineConfig,
    formatter: &Formatter,
) -> Result<String> {
    let house = parse_house(&args.house)?;
    let center = args.center.as_deref().map(parse_person).transpose()?;

    let options = ViewOptions::from_config(engine)
        .with_cadets(args.cadets.resolve(engine.include_cadets))
        .with_center(center);
    let view = build_view(dataset, Some(&house), &options);

    formatter.format_view(&view, &dataset.people_by_id())
}
