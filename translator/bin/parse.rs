extern crate ippcode_translator;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use annotate_snippets::display_list::DisplayList;
use clap::{App, Arg, ArgMatches};
use ippcode_translator::{emit, translate, Error as TranslationError, Stat, StatsRequest};
use thiserror::Error;

const ABOUT: &str = "Reads IPPcode19 source from standard input, checks its lexical and \
syntactic correctness and writes its XML representation to standard output.";

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Params(String),
    #[error("could not read standard input: {0}")]
    Input(#[source] io::Error),
    #[error("could not write `{path}`: {source}")]
    Stats { path: String, source: io::Error },
    #[error("could not write standard output: {0}")]
    Output(#[source] io::Error),
    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Params(_) => 10,
            CliError::Input(_) => 11,
            CliError::Stats { .. } | CliError::Output(_) => 12,
            CliError::Translation(error) => error.kind().exit_code(),
        }
    }
}

fn app() -> App<'static, 'static> {
    let stat_flag = |stat: Stat, help: &'static str| {
        Arg::with_name(stat.flag())
            .long(stat.flag())
            .multiple(true)
            .help(help)
    };
    App::new("parse_ippcode")
        .about(ABOUT)
        .arg(stat_flag(Stat::Loc, "Reports the number of instructions"))
        .arg(stat_flag(Stat::Comments, "Reports the number of lines with a comment"))
        .arg(stat_flag(Stat::Labels, "Reports the number of LABEL instructions"))
        .arg(stat_flag(Stat::Jumps, "Reports the number of jump instructions"))
        .arg(Arg::with_name("stats")
            .long("stats")
            .takes_value(true)
            .value_name("FILE")
            .help("Writes the selected statistics to FILE, one per line, in the order given"))
        .arg(Arg::with_name("annotate")
            .long("annotate")
            .help("Prints errors with the offending source line"))
}

fn stats_request(matches: &ArgMatches) -> Result<StatsRequest, CliError> {
    let positions = Stat::ALL.iter()
        .flat_map(|stat| {
            matches.indices_of(stat.flag())
                .into_iter()
                .flatten()
                .map(move |index| (index, *stat))
        })
        .collect::<Vec<_>>();
    let destination = matches.value_of("stats").map(PathBuf::from);
    let request = StatsRequest::from_positions(positions, destination);
    if request.is_missing_destination() {
        return Err(CliError::Params("statistics were selected without --stats=FILE".to_string()));
    }
    Ok(request)
}

fn run(matches: &ArgMatches, source: &mut String) -> Result<(), CliError> {
    let request = stats_request(matches)?;

    io::stdin().read_to_string(source).map_err(CliError::Input)?;
    let translation = translate(source)?;

    if let Some(path) = request.destination {
        let report = translation.stats.report(&request.selection);
        fs::write(&path, report)
            .map_err(|error| CliError::Stats { path: path.display().to_string(), source: error })?;
    }

    if let Some(document) = emit(&translation.program) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(document.as_bytes())
            .and_then(|()| handle.flush())
            .map_err(CliError::Output)?;
    }
    Ok(())
}

fn report(error: &CliError, source: &str, annotate: bool) {
    match error {
        CliError::Translation(error) if annotate => {
            let message = error.to_string();
            let snippet = error.create_snippet(&message, source, Some("<stdin>"), true);
            eprintln!("{}", DisplayList::from(snippet));
        }
        _ => eprintln!("error: {}", error),
    }
}

fn main() {
    env_logger::init();

    let matches = match app().get_matches_safe() {
        Ok(matches) => matches,
        Err(error) if error.use_stderr() => {
            eprintln!("{}", error.message);
            process::exit(10);
        }
        Err(error) => error.exit(),
    };

    let mut source = String::new();
    if let Err(error) = run(&matches, &mut source) {
        log::debug!("failed: {:?}", error);
        report(&error, &source, matches.is_present("annotate"));
        process::exit(error.exit_code());
    }
}
