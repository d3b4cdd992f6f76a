use anyhow::Result;

use listgen::cli::{parse_or_exit, filter_words_command};
use listgen::commands;

fn main() -> Result<()> {
    let matches = parse_or_exit(filter_words_command());
    listgen::init_logging();

    commands::filter_words(&matches)
}
