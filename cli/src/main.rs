use std::env;

use clap::{arg, command, ArgAction, Command};
use log::{debug, error, info, LevelFilter};

use crate::errors::DozeError;
use crate::manifest::DozeToml;
use crate::run::RunOptions;

mod errors;
mod logger;
mod manifest;
mod run;

fn main() {
    if let Err(e) = run_main() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), DozeError> {
    let matches = command!()
        .arg(arg!(--"log-level" <LEVEL> "Set log level").value_parser(logger::LEVEL_NAMES).global(true))
        .arg(arg!(--"no-color" "Disable colored output").action(ArgAction::SetTrue).global(true))
        .subcommand(
            Command::new("run")
                .about("Run a JavaScript file with the delay ops installed")
                .arg(arg!([script] "A name from doze.toml's [run] block or a relative path. Defaults to 'default'."))
                .arg(arg!([args] ... "Arguments exposed to the script as argv").trailing_var_arg(true).allow_hyphen_values(true))
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate inline JavaScript and print the result")
                .arg(arg!(<code> "The source to evaluate"))
                .arg(arg!([args] ... "Arguments exposed to the script as argv").trailing_var_arg(true).allow_hyphen_values(true))
        )
        .arg_required_else_help(true)
        .args_conflicts_with_subcommands(true)
        .get_matches();

    let current_dir = env::current_dir().map_err(|e| DozeError::CurrentDirectory { source: e })?;
    // A broken doze.toml is reported once the logger is up
    let manifest = match DozeToml::load_nearest(current_dir) {
        Ok(found) => Ok(Some(found)),
        Err(DozeError::ManifestNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    };

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .or_else(|| {
            manifest
                .as_ref()
                .ok()
                .and_then(|found| found.as_ref())
                .and_then(|(_, toml)| toml.log_level())
        })
        .and_then(logger::level_from_str)
        .unwrap_or(LevelFilter::Error);

    let use_colors = !matches.get_flag("no-color");
    if let Err(e) = logger::install(level, use_colors) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    info!("Doze starting with log level: {:?}", level);

    let manifest = manifest?;
    match &manifest {
        Some((dir, _)) => info!("Found doze.toml at: {}", dir.display()),
        None => debug!("No doze.toml found"),
    }
    let toml = manifest.as_ref().map(|(_, toml)| toml);

    if let Some(matches) = matches.subcommand_matches("run") {
        let script = matches
            .get_one::<String>("script")
            .map(String::as_str)
            .unwrap_or("default");
        let args = collect_args(matches);
        debug!("Script to run: {} with args {:?}", script, args);

        let options = RunOptions::new(toml, args);
        run::run(manifest.as_ref(), script, &options)?;
    } else if let Some(matches) = matches.subcommand_matches("eval") {
        let code = matches
            .get_one::<String>("code")
            .map(String::as_str)
            .unwrap_or_default();
        let options = RunOptions::new(toml, collect_args(matches));

        if let Some(result) = run::eval(code, &options)? {
            println!("{}", result);
        }
    }

    Ok(())
}

fn collect_args(matches: &clap::ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("args")
        .unwrap_or_default()
        .cloned()
        .collect()
}
