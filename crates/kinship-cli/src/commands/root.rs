//! Root command implementation.

use super::{build_view, parse_house, parse_person};
use crate::cli::RootArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinship_graph::{Dataset, EngineConfig, ViewOptions};

/// Execute the root command.
pub fn execute_root(
    args: RootArgs,
    dataset: &Dataset,
    engine: &EngineConfig,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_root(&args, dataset, engine, formatter)?);
    Ok(())
}

/// Select and format the anchor person.
pub fn render_root(
    args: &RootArgs,
    dataset: &Dataset,
    engine: &EngineConfig,
    formatter: &Formatter,
) -> Result<String> {
    let house = args.house.as_deref().map(parse_house).transpose()?;
    let center = args.center.as_deref().map(parse_person).transpose()?;
    let options = ViewOptions::from_config(engine)
        .with_cadets(args.cadets.resolve(engine.include_cadets))
        .with_center(center);

    let view = build_view(dataset, house.as_ref(), &options);
    if let Some(center) = &options.center {
        if view.root.as_ref() != Some(center) {
            tracing::info!(center = %center, "center is not a visible recorded person; ignoring it");
        }
    }

    formatter.format_root(view.root.as_ref(), &dataset.people_by_id())
}
