/*
 * Copyright 2019 Constantin A.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

#[macro_use]
extern crate log;

use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::LevelFilter;

use discord_emoji::configs::lookup_options::LookupOptions;
use discord_emoji::loadable::{Loadable, LoadingError};
use discord_emoji::lookup::EmojiLookup;
use discord_emoji::tables::emoji_tables::{bundled_table, EmojiTable};

const TABLE: &str = "table";
const CONFIG: &str = "config";
const NO_TONES: &str = "no-tones";
const KEEP_SELECTORS: &str = "keep-variation-selectors";
const VERBOSE: &str = "verbose";
const NAME: &str = "NAME";
const EMOJI: &str = "EMOJI";

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("discord_emoji")
        .version(clap::crate_version!())
        .about("Converts between Discord emoji names, Unicode emojis and Twemoji image URLs")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name(TABLE)
            .long(TABLE)
            .value_name("FILE")
            .takes_value(true)
            .help("Uses the emoji table in this JSON/YAML file instead of the bundled one"))
        .arg(Arg::with_name(CONFIG)
            .long(CONFIG)
            .short("c")
            .value_name("FILE")
            .takes_value(true)
            .help("Reads the lookup options from this JSON/YAML file"))
        .arg(Arg::with_name(NO_TONES)
            .long(NO_TONES)
            .help("Disables skin tone variants"))
        .arg(Arg::with_name(KEEP_SELECTORS)
            .long(KEEP_SELECTORS)
            .help("Treats emojis with and without VS-16 as different emojis"))
        .arg(Arg::with_name(VERBOSE)
            .short("v")
            .multiple(true)
            .help("Increases the log level (may be repeated)"))
        .subcommand(SubCommand::with_name("name")
            .about("Prints the emoji for a name")
            .arg(Arg::with_name(NAME).required(true)))
        .subcommand(SubCommand::with_name("unicode")
            .about("Prints the name of an emoji")
            .arg(Arg::with_name(EMOJI).required(true))
            .arg(Arg::with_name("all")
                .long("all")
                .short("a")
                .help("Prints all names, one per line"))
            .arg(Arg::with_name("colons")
                .long("colons")
                .help("Wraps the names in colons")))
        .subcommand(SubCommand::with_name("image")
            .about("Prints the image URL of an emoji")
            .arg(Arg::with_name(EMOJI).required(true)))
        .subcommand(SubCommand::with_name("name-image")
            .about("Prints the image URL for a name")
            .arg(Arg::with_name(NAME).required(true)))
        .subcommand(SubCommand::with_name("check")
            .about("Checks that all names and tone variants of the table round-trip"))
}

fn main() {
    let matches = app().get_matches();

    let level = match matches.occurrences_of(VERBOSE) {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&matches) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(err) => {
            error!("{}", err);
            exit(2)
        }
    }
}

/// Returns whether the requested lookup was successful
fn run(matches: &ArgMatches) -> Result<bool, LoadingError> {
    let custom_table;
    let table = match matches.value_of(TABLE) {
        Some(path) => {
            custom_table = EmojiTable::from_file(Path::new(path))?;
            info!("Using {} emojis from {}", custom_table.len(), path);
            &custom_table
        }
        None => bundled_table(),
    };

    let mut options = match matches.value_of(CONFIG) {
        Some(path) => LookupOptions::from_file(Path::new(path))?,
        None => LookupOptions::default(),
    };
    if matches.is_present(NO_TONES) {
        options.enable_tone_support = false;
    }
    if matches.is_present(KEEP_SELECTORS) {
        options.strip_variation_selectors = false;
    }
    debug!("{:?}", options);

    let lookup = EmojiLookup::with_options(table, options);

    let found = match matches.subcommand() {
        ("name", Some(sub)) => print_found(lookup.name_to_unicode(sub.value_of(NAME).unwrap_or_default())),
        ("unicode", Some(sub)) => {
            let emoji = sub.value_of(EMOJI).unwrap_or_default();
            let colons = sub.is_present("colons");
            if sub.is_present("all") {
                match lookup.unicode_to_all_names(emoji, colons) {
                    Some(names) => {
                        names.iter().for_each(|name| println!("{}", name));
                        true
                    }
                    None => false
                }
            } else {
                print_found(lookup.unicode_to_name(emoji, colons))
            }
        }
        ("image", Some(sub)) => print_found(lookup.unicode_to_image(sub.value_of(EMOJI).unwrap_or_default())),
        ("name-image", Some(sub)) => print_found(lookup.name_to_image(sub.value_of(NAME).unwrap_or_default())),
        ("check", _) => {
            let violations = lookup.verify();
            violations.iter().for_each(|violation| println!("{}", violation));
            info!("Checked {} emojis, found {} problems", table.len(), violations.len());
            violations.is_empty()
        }
        _ => false
    };
    Ok(found)
}

fn print_found(result: Option<String>) -> bool {
    match result {
        Some(result) => {
            println!("{}", result);
            true
        }
        None => {
            warn!("Not found");
            false
        }
    }
}
