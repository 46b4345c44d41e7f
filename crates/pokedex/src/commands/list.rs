use super::open_session;
use crate::prelude::{println, *};
use crate::render::{format_view_json, format_view_text};
use pokedex_core::filter::FilterCriteria;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Only show available pokemon whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Only show available pokemon of this type
    #[arg(short = 't', long = "type")]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    /// One-off filter for this listing; falls back to the session's own filter
    fn criteria(&self, session_filter: &FilterCriteria) -> FilterCriteria {
        if self.name.is_none() && self.category.is_none() {
            return session_filter.clone();
        }
        FilterCriteria::from_options(self.name.clone(), self.category.clone())
    }
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let session = open_session(&global).await?;
    let view = session.view_with(&options.criteria(session.filter()));

    if options.json {
        println!("{}", format_view_json(&view)?);
    } else {
        print!("{}", format_view_text(&view));
    }

    Ok(())
}
