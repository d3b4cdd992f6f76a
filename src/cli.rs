use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::core::{passwords, twofa};

pub fn passwords_command() -> Command {
    let default_destination = passwords::default_destination();

    Command::new("common-passwords")
        .about("Download common password lists and write the merged, ordered list")
        .override_usage("common-passwords DST_FILE")
        .after_help(format!("(defaults to {})", default_destination.display()))
        .disable_version_flag(true)
        .arg(
            Arg::new("dst_file")
                .value_name("DST_FILE")
                .help("Where to write the password list")
                .value_parser(clap::value_parser!(PathBuf))
                .allow_hyphen_values(true)
                .index(1),
        )
}

pub fn twofa_domains_command() -> Command {
    let after_help = format!(
        "(defaults to {}, reading {} and {})",
        twofa::default_destination().display(),
        twofa::default_custom_domains_file().display(),
        twofa::default_excluded_domains_file().display()
    );

    Command::new("twofa-domains")
        .about("Download the TOTP directory and write the sorted list of 2FA domains")
        .override_usage("twofa-domains [--custom FILE] [--exclude FILE] DST_FILE")
        .after_help(after_help)
        .disable_version_flag(true)
        .arg(
            Arg::new("custom")
                .long("custom")
                .value_name("FILE")
                .help("Extra domains to include, one per line")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("FILE")
                .help("Domains to leave out, one per line")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dst_file")
                .value_name("DST_FILE")
                .help("Where to write the domain list")
                .value_parser(clap::value_parser!(PathBuf))
                .allow_hyphen_values(true)
                .index(1),
        )
}

pub fn filter_words_command() -> Command {
    Command::new("filter-words")
        .about("Remove forbidden words from a wordlist, rewriting it in place")
        .disable_version_flag(true)
        .arg(
            Arg::new("substring")
                .long("substring")
                .help("Drop every line that contains a forbidden word, not only exact matches")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("filter_file")
                .value_name("FILTER_FILE")
                .help("Forbidden words, one per line")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target_file")
                .value_name("TARGET_FILE")
                .help("Wordlist to filter")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true)
                .index(2),
        )
}

/// Help output is a success, every other parse failure is a usage error.
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Parse the process arguments, printing help or usage errors and exiting
/// before any work is done.
pub fn parse_or_exit(command: Command) -> ArgMatches {
    match command.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let code = exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    }
}
