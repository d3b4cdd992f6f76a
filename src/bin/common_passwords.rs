use anyhow::Result;

use listgen::cli::{parse_or_exit, passwords_command};
use listgen::commands;

fn main() -> Result<()> {
    let matches = parse_or_exit(passwords_command());
    listgen::init_logging();

    commands::passwords(&matches)
}
