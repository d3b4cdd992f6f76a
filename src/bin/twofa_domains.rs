use anyhow::Result;

use listgen::cli::{parse_or_exit, twofa_domains_command};
use listgen::commands;

fn main() -> Result<()> {
    let matches = parse_or_exit(twofa_domains_command());
    listgen::init_logging();

    commands::twofa_domains(&matches)
}
