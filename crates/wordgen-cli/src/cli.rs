use anyhow::Result;
use clap::Parser;
use wordgen_core::words::WordPool;
use wordgen_core::{config, namegen, setup};

/// Top-level CLI for the wordgen username generator.
#[derive(Debug, Parser)]
#[command(name = "wordgen", version)]
#[command(about = "Generate random pronounceable usernames from the WordNet dictionary", long_about = None)]
pub struct Cli {
    /// Number of usernames to generate.
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

/// Parses arguments and runs the pipeline.
///
/// `--version` and `--help` short-circuit with exit code 0; argument-parse
/// failures exit with code 1 (clap's default of 2 is not used).
pub fn run_from_args() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let dict = setup::ensure_dictionary(&cfg)?;

    let nouns = WordPool::load(&dict.noun_path);
    let verbs = WordPool::load(&dict.verb_path);

    for name in namegen::generate(cli.count, nouns, verbs)? {
        println!("{name}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_one() {
        let cli = Cli::try_parse_from(["wordgen"]).unwrap();
        assert_eq!(cli.count, 1);
    }

    #[test]
    fn count_short_and_long_flags() {
        let cli = Cli::try_parse_from(["wordgen", "-c", "5"]).unwrap();
        assert_eq!(cli.count, 5);
        let cli = Cli::try_parse_from(["wordgen", "--count", "12"]).unwrap();
        assert_eq!(cli.count, 12);
    }

    #[test]
    fn bad_count_is_a_parse_error() {
        let err = Cli::try_parse_from(["wordgen", "--count", "many"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn version_flag_is_not_an_error_display() {
        let err = Cli::try_parse_from(["wordgen", "--version"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
