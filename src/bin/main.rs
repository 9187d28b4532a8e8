extern crate clap;
extern crate data_date;
extern crate env_logger;
extern crate failure;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate toml;

mod config;

use std::io;
use std::process;

use clap::{App, Arg, SubCommand};

use data_date::dataset::{DateSource, JsonDataset};
use data_date::help::{FileHelp, HelpProvider, TextHelp};
use data_date::localize::{self, Identity};
use data_date::submit::{Submitter, WriterSubmitter};

fn main() {
    env_logger::init();

    let matches = App::new("data-date")
        .about("derive a host DATE command from the data")
        .arg(
            Arg::with_name("config")
                .long("config")
                .takes_value(true)
                .help("path to a config file"),
        )
        .subcommand(
            SubCommand::with_name("define")
                .about("build and submit the DATE command")
                .arg(
                    Arg::with_name("data")
                        .long("data")
                        .required(true)
                        .takes_value(true)
                        .help("dataset file, a JSON array of cases"),
                )
                .arg(
                    Arg::with_name("date-var")
                        .long("date-var")
                        .required(true)
                        .takes_value(true)
                        .help("date variable supplying the starting date"),
                )
                .arg(
                    Arg::with_name("structure")
                        .long("structure")
                        .required(true)
                        .takes_value(true)
                        .help("periodicity codes drawn from y q m w d h i s"),
                )
                .arg(
                    Arg::with_name("week-period")
                        .long("week-period")
                        .takes_value(true)
                        .help("override the 7-day week period, e.g. 5"),
                )
                .arg(
                    Arg::with_name("by")
                        .long("by")
                        .takes_value(true)
                        .help("increment between observations, default 1"),
                ),
        )
        .subcommand(
            SubCommand::with_name("manual")
                .about("show the extended help and do nothing else"),
        )
        .get_matches();

    let conf = config::Config::load(matches.value_of("config")).unwrap_or_default();

    match matches.subcommand() {
        ("define", Some(sub_m)) => {
            if let Err(err) = define(sub_m) {
                eprintln!("{}", localize::describe(&err, &Identity));
                process::exit(1);
            }
        }
        ("manual", _) => {
            if let Err(err) = helper(&conf).show() {
                eprintln!("{}", localize::describe(&err, &Identity));
                process::exit(1);
            }
        }
        (cmd, _) => {
            eprintln!("Unknown command: {}", cmd);
            process::exit(2);
        }
    }
}

fn define(matches: &clap::ArgMatches) -> data_date::Result<()> {
    // required args, clap has already enforced presence
    let data = matches.value_of("data").unwrap();
    let variable = matches.value_of("date-var").unwrap();
    let structure = matches.value_of("structure").unwrap();

    let week_period = match matches.value_of("week-period") {
        Some(raw) => Some(
            raw.parse::<u32>()
                .map_err(|e| data_date::Error::BadInt("week-period", e))?,
        ),
        None => None,
    };
    let by = match matches.value_of("by") {
        Some(raw) => raw.parse::<u32>()
            .map_err(|e| data_date::Error::BadInt("by", e))?,
        None => 1,
    };

    let anchor = JsonDataset::open(data).first_case(variable)?;
    let command = data_date::build_command(anchor, variable, structure, week_period, by)?;

    let stdout = io::stdout();
    let mut submitter = WriterSubmitter::new(stdout.lock());
    submitter.submit_all(&command)
}

fn helper(conf: &config::Config) -> Box<HelpProvider> {
    match conf.help.as_ref().and_then(|h| h.file.clone()) {
        Some(path) => Box::new(FileHelp::new(path)),
        None => Box::new(TextHelp),
    }
}
