use super::open_session;
use crate::prelude::{eprintln, *};
use crate::render::{capture_message, format_categories_text, format_view_text, release_message};
use crate::session::Session;
use pokedex_core::catalog::distinct_categories;
use pokedex_core::filter::FilterCriteria;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  list              show available and captured pokemon
  capture <id>      move a pokemon to the captured list
  release <id>      move a pokemon back to the available list
  name [text]       filter available pokemon by name (no text clears it)
  type [type]       filter available pokemon by type (no type or 'All' clears it)
  types             list the known types
  clear             clear both filters
  help              show this message
  quit              leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Capture(u64),
    Release(u64),
    Name(String),
    Type(String),
    Types,
    Clear,
    Help,
    Quit,
}

/// Parse one line of input
pub fn parse_command(line: &str) -> std::result::Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let parse_id = |raw: &str| {
        raw.parse::<u64>()
            .map_err(|_| format!("Invalid pokemon ID: {raw:?}"))
    };

    let command = match word.to_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "capture" | "+" => Command::Capture(parse_id(rest)?),
        "release" | "-" => Command::Release(parse_id(rest)?),
        "name" => Command::Name(rest.to_string()),
        "type" => {
            if rest.eq_ignore_ascii_case(crate::render::ALL_TYPES) {
                Command::Type(String::new())
            } else {
                Command::Type(rest.to_string())
            }
        }
        "types" => Command::Types,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command: {other}. Type 'help' for a list.")),
    };

    Ok(Some(command))
}

/// Apply a command to the session and return the text to show
fn apply(session: &mut Session, command: Command) -> Result<String> {
    let output = match command {
        Command::List => format_view_text(&session.view()),
        Command::Capture(id) => {
            let outcome = session.capture(id)?;
            format!("{}\n{}", capture_message(id, outcome), format_view_text(&session.view()))
        }
        Command::Release(id) => {
            let outcome = session.release(id)?;
            format!("{}\n{}", release_message(id, outcome), format_view_text(&session.view()))
        }
        Command::Name(name) => {
            let category = session.filter().category.clone();
            session.set_filter(FilterCriteria::new(name, category))?;
            format_view_text(&session.view())
        }
        Command::Type(category) => {
            let name = session.filter().name_substring.clone();
            session.set_filter(FilterCriteria::new(name, category))?;
            format_view_text(&session.view())
        }
        Command::Types => format_categories_text(&distinct_categories(session.catalog())),
        Command::Clear => {
            session.set_filter(FilterCriteria::default())?;
            format_view_text(&session.view())
        }
        Command::Help => format!("{HELP}\n"),
        Command::Quit => String::new(),
    };

    Ok(output)
}

/// Line-oriented session over stdin; the catalog is loaded once up front
pub async fn run(global: crate::Global) -> Result<()> {
    let mut session = open_session(&global).await?;

    print!("{}", format_view_text(&session.view()));
    eprintln!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .wrap_err("Failed to read from stdin")?
    {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{}", message);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        match apply(&mut session, command) {
            Ok(output) => print!("{}", output),
            Err(e) => eprintln!("Error: {:#}", e),
        }
    }

    super::print_location(&session);

    Ok(())
}
