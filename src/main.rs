use std::io;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use prefquery::{finish, run, Args};

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    Builder::new()
        .filter_level(level)
        .parse_env(Env::default())
        .init();

    finish(run(args, io::stdout().lock()));
}
