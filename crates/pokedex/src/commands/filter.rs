use super::{open_session, print_location};
use crate::prelude::{println, *};
use crate::render::{format_view_json, format_view_text};
use pokedex_core::filter::FilterCriteria;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct FilterOptions {
    /// Name filter; omit to clear it
    #[arg(short, long)]
    pub name: Option<String>,

    /// Type filter; omit to clear it
    #[arg(short = 't', long = "type")]
    pub category: Option<String>,

    /// Output the resulting view as JSON
    #[arg(long)]
    pub json: bool,
}

/// Replace the session filter. With the url store the new filter is part of
/// the printed session URL.
pub async fn run(options: FilterOptions, global: crate::Global) -> Result<()> {
    let mut session = open_session(&global).await?;

    session
        .set_filter(FilterCriteria::from_options(options.name, options.category))
        .wrap_err("Failed to store filter")?;

    let view = session.view();
    if options.json {
        println!("{}", format_view_json(&view)?);
    } else {
        print!("{}", format_view_text(&view));
    }
    print_location(&session);

    Ok(())
}
