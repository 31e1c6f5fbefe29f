use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    process::ExitCode,
};

use apl::{
    errors::errors::{Error, ErrorPhase},
    executor::{executor::Executor, loader::FileLoader},
    lexer::lexer::tokenize,
    logger::{self, LogLevel},
    parser::parser::parse_source,
};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "apl", version, about = "Front end for apl programs")]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Type check a program and everything it imports
    Check {
        /// Import path of the root file
        path: String,
        /// Directory to search for imports, in order (defaults to `.`)
        #[arg(short = 'I', long = "include")]
        include: Vec<PathBuf>,
    },
    /// Print the syntax tree of a single file
    Parse { file: PathBuf },
    /// Print the token stream of a single file
    Tokens { file: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_with_level(LogLevel::from_verbosity(cli.verbose));

    match cli.command {
        Command::Check { path, include } => {
            let search_paths = if include.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                include
            };

            let mut executor = Executor::new(FileLoader::new(search_paths));
            match executor.check(&path) {
                Ok(()) => {
                    info!("{} ok", path);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    display_error(&err, None);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Parse { file } => {
            let (name, source) = match read_source(&file) {
                Some(read) => read,
                None => return ExitCode::FAILURE,
            };

            match parse_source(&source, &name) {
                Ok(ast) => {
                    println!("{}", ast);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    display_error(&err, Some(&source));
                    ExitCode::FAILURE
                }
            }
        }
        Command::Tokens { file } => {
            let (name, source) = match read_source(&file) {
                Some(read) => read,
                None => return ExitCode::FAILURE,
            };

            match tokenize(&source, Some(name)) {
                Ok(tokens) => {
                    for token in tokens.iter() {
                        println!("{}", token);
                    }
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    display_error(&err, Some(&source));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn read_source(file: &Path) -> Option<(String, String)> {
    let name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    match read_to_string(file) {
        Ok(source) => Some((name, source)),
        Err(err) => {
            eprintln!("cannot read {}: {}", file.display(), err);
            None
        }
    }
}

fn display_error(error: &Error, source: Option<&str>) {
    /*
        error at pos 16 (=): assignment not yet implemented
          |
        1 | func main() { x = 1; }
          | ----------------^
    */
    eprintln!("{}", error);

    if error.get_phase() == ErrorPhase::Import {
        return;
    }
    let line = error.get_position().line as usize;
    let line_text = match source.and_then(|source| source.lines().nth(line)) {
        Some(line_text) => line_text,
        None => return,
    };

    let line_str = (error.get_position().line + 1).to_string();
    let padding = line_str.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let column = error.get_position().column as usize;
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$}", "|");
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());
    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.chars().count() - trimmed.chars().count())
}
