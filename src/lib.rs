pub mod cxr;
pub mod prefs;
pub mod query;
pub mod rerrs;
pub mod rvals;

pub use cxr::{generate_accessor_predicate, AccessorChain};
pub use prefs::{map_preferences_to_tasks, PreferenceMap, Ranking, TaskPreferenceMap};
pub use query::{
    build_match_query, build_match_query_compact, normalize_whitespace, MatchQuery,
};
pub use rerrs::GenErr;
pub use rvals::{render_literal, QueryVal};

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;

/// Prolog match queries and Scheme pair predicates
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(subcommand)]
    action: Action,

    /// Raise the log level (-v info, -vv debug). RUST_LOG takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Action {
    /// Print the match/3 query for a JSON object of person -> ranked tasks
    Match {
        /// Preference file, stdin when absent
        file: Option<PathBuf>,
        /// Print the query on a single line
        #[clap(long)]
        compact: bool,
        /// Name of the unbound result variable
        #[clap(long, default_value = query::DEFAULT_RESULT_VAR)]
        result_var: String,
    },
    /// Print the task -> [person, rank] mapping as JSON
    Tasks { file: Option<PathBuf> },
    /// Print the pair predicate for each accessor chain, e.g. `dda`
    Cxr {
        #[clap(required = true)]
        chains: Vec<String>,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

fn read_preferences(file: Option<PathBuf>) -> rerrs::Result<PreferenceMap> {
    let contents = match file {
        Some(path) => {
            info!("reading preferences from {}", path.display());
            fs::read_to_string(&path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Runs one command, writing its output to `out`.
pub fn run(clap_args: Args, mut out: impl Write) -> rerrs::Result<()> {
    match clap_args.action {
        Action::Match {
            file,
            compact,
            result_var,
        } => {
            let prefs = read_preferences(file)?;
            let query = MatchQuery::new(&prefs).with_result_var(&result_var)?;
            let text = if compact {
                query.compact()
            } else {
                query.pretty()
            };
            writeln!(out, "{}", text)?;
        }
        Action::Tasks { file } => {
            let prefs = read_preferences(file)?;
            let tasks = map_preferences_to_tasks(&prefs);
            writeln!(out, "{}", serde_json::to_string_pretty(&tasks)?)?;
        }
        Action::Cxr { chains } => {
            for chain in chains {
                writeln!(out, "{}", generate_accessor_predicate(&chain)?)?;
            }
        }
        Action::Completions { shell } => {
            clap_complete::generate(shell, &mut Args::command(), "prefquery", &mut out);
        }
    }
    Ok(())
}

pub fn finish(result: rerrs::Result<()>) -> ! {
    let code = match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!(
                "{}: {}",
                std::env::args().next().unwrap_or_else(|| "prefquery".into()),
                e
            );
            1
        }
    };

    process::exit(code);
}

#[cfg(test)]
fn run_to_string(argv: &[&str]) -> rerrs::Result<String> {
    let args = Args::try_parse_from(argv).map_err(|e| GenErr::InvalidArgument(e.to_string()))?;
    let mut out = Vec::new();
    run(args, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn cxr_command() {
    assert_eq!(
        run_to_string(&["prefquery", "cxr", "dda", "ad"]).unwrap(),
        "(lambda (x) (and (pair? x) (pair? (car x)) (pair? (cdar x))))\n\
         (lambda (x) (and (pair? x) (pair? (cdr x))))\n"
    );
    assert!(run_to_string(&["prefquery", "cxr", "x"])
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn missing_file_is_io_error() {
    let err = run_to_string(&["prefquery", "match", "does/not/exist.json"]).unwrap_err();
    assert!(matches!(err, GenErr::Io(_)));
}

#[test]
fn verify_cli() {
    Args::command().debug_assert();
}
