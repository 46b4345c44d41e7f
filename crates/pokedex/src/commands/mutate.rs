use super::{open_session, print_location};
use crate::prelude::{eprintln, println, *};
use crate::render::{capture_message, format_view_json, format_view_text, release_message};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct MutateOptions {
    /// Pokemon ID (e.g. 25)
    pub id: u64,

    /// Output the resulting view as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn capture(options: MutateOptions, global: crate::Global) -> Result<()> {
    let mut session = open_session(&global).await?;

    let outcome = session
        .capture(options.id)
        .wrap_err_with(|| format!("Failed to capture pokemon {}", options.id))?;
    eprintln!("{}", capture_message(options.id, outcome));

    print_view(&session, options.json)
}

pub async fn release(options: MutateOptions, global: crate::Global) -> Result<()> {
    let mut session = open_session(&global).await?;

    let outcome = session
        .release(options.id)
        .wrap_err_with(|| format!("Failed to release pokemon {}", options.id))?;
    eprintln!("{}", release_message(options.id, outcome));

    print_view(&session, options.json)
}

fn print_view(session: &crate::session::Session, json: bool) -> Result<()> {
    let view = session.view();

    if json {
        println!("{}", format_view_json(&view)?);
    } else {
        print!("{}", format_view_text(&view));
    }
    print_location(session);

    Ok(())
}
