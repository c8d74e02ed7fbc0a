use std::{env, process};

use rigcheck::collectors::hardware::detect_user_profile;
use rigcheck::config::{load_config, Config};
use rigcheck::input::{read_requirements, read_user_profile, render_result};
use rigcheck::title::{TitleLookup, TitleLookupResult};
use rigcheck::{evaluate_with, Result};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: rigcheck <requirements.json> [hardware.json] [--title <name>]";

struct Args {
    requirements: String,
    hardware: Option<String>,
    title: Option<String>,
}

fn parse_args(raw: &[String]) -> Option<Args> {
    let mut positional = Vec::new();
    let mut title = None;
    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        if arg == "--title" {
            title = Some(iter.next()?.clone());
        } else {
            positional.push(arg.clone());
        }
    }

    let mut positional = positional.into_iter();
    let args = Args {
        requirements: positional.next()?,
        hardware: positional.next(),
        title,
    };
    if positional.next().is_some() {
        return None;
    }
    Some(args)
}

fn init_logging(level: Option<&str>) {
    // RUST_LOG takes precedence over the config file
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn lookup_title(config: &Config, title: &str) -> Result<()> {
    let lookup = config.require_title_lookup()?;
    match lookup.lookup(title)? {
        TitleLookupResult::Found(info) => tracing::info!(
            title,
            name = %info.name,
            similarity = info.similarity,
            main_story = info.main_story,
            "resolved title"
        ),
        TitleLookupResult::NotFound => tracing::warn!(title, "no matching title"),
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = load_config()?;
    init_logging(config.log_level.as_deref());

    if let Some(title) = args.title.as_deref() {
        lookup_title(&config, title)?;
    }

    let tables = config.score_tables()?;
    let reqs = read_requirements(&args.requirements)?;
    let user = match args.hardware.as_deref() {
        Some(path) => read_user_profile(path)?,
        None => detect_user_profile()?,
    };

    let result = evaluate_with(&tables, &user, &reqs)?;
    println!("{}", render_result(&result)?);
    Ok(())
}

fn main() {
    let raw: Vec<String> = env::args().skip(1).collect();
    let Some(args) = parse_args(&raw) else {
        eprintln!("{}", USAGE);
        process::exit(2);
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
