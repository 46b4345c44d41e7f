use super::open_session;
use crate::prelude::{println, *};
use crate::render::format_categories_text;
use pokedex_core::catalog::distinct_categories;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct TypesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: TypesOptions, global: crate::Global) -> Result<()> {
    let session = open_session(&global).await?;
    let categories = distinct_categories(session.catalog());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        print!("{}", format_categories_text(&categories));
    }

    Ok(())
}
