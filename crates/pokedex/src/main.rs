use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod catalog;
mod commands;
mod config;
mod error;
mod prelude;
mod render;
mod session;
mod store;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse Pokemon from the PokeAPI, filter them by name and type, and keep a list of captured ones"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Where captured pokemon are kept [default: file]
    #[clap(long, env = "POKEDEX_STORE", global = true, value_enum)]
    store: Option<store::StoreKind>,

    /// Session URL used by the url store
    #[clap(long, env = "POKEDEX_URL", global = true)]
    url: Option<String>,

    /// Directory of the file store
    #[clap(long, env = "POKEDEX_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// PokeAPI base URL
    #[clap(long, env = "POKEAPI_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Number of pokemon to load
    #[clap(long, env = "POKEDEX_LIMIT", global = true)]
    limit: Option<usize>,

    /// Offset of the first pokemon to load
    #[clap(long, env = "POKEDEX_OFFSET", global = true)]
    offset: Option<usize>,

    /// Whether to display additional information.
    #[clap(long, env = "POKEDEX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Show available and captured pokemon
    List(commands::list::ListOptions),

    /// List the pokemon types present in the catalog
    Types(commands::types::TypesOptions),

    /// Capture a pokemon
    Capture(commands::mutate::MutateOptions),

    /// Release a captured pokemon
    Release(commands::mutate::MutateOptions),

    /// Set the name/type filter of the session
    Filter(commands::filter::FilterOptions),

    /// Run an interactive session on stdin
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => commands::list::run(options, app.global).await,
        SubCommands::Types(options) => commands::types::run(options, app.global).await,
        SubCommands::Capture(options) => commands::mutate::capture(options, app.global).await,
        SubCommands::Release(options) => commands::mutate::release(options, app.global).await,
        SubCommands::Filter(options) => commands::filter::run(options, app.global).await,
        SubCommands::Interactive => commands::interactive::run(app.global).await,
    }
}
