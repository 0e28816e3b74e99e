//! Trie Dictionary - Main entrypoint.
//!
//! Builds a dictionary from words read on stdin (one per line) and runs a
//! single query or edit against it. Logs go to stderr so that results on
//! stdout can be piped.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trie_dictionary_lib::config::{
    load_config, DictionaryConfig, LogConfig, SpellingSettings, Validate,
};
use trie_dictionary_lib::data_structures::trie::Trie;
use trie_dictionary_lib::error::{DictionaryError, DictionaryResult};

/// Command line arguments for the trie dictionary.
#[derive(Parser, Debug)]
#[clap(name = "Trie Dictionary", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    #[clap(flatten)]
    Dictionary(DictionaryCommand),

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Subcommands that run against a dictionary read from stdin.
#[derive(Subcommand, Debug)]
enum DictionaryCommand {
    /// Check whether a word is stored
    Search {
        /// Word to look up
        word: String,
    },

    /// List stored words starting with a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,
    },

    /// List stored words close to a possibly misspelled word
    Spell {
        /// Word to correct
        word: String,

        /// Override the configured maximum edit distance
        #[clap(long)]
        max_distance: Option<usize>,
    },

    /// List every stored word
    List,

    /// Print the trie structure
    Print,

    /// Delete words and list the words that remain
    Delete {
        /// Words to delete
        #[clap(required = true)]
        words: Vec<String>,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> DictionaryResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        DictionaryError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Reads one word per line, skipping blank lines.
fn read_words<R: BufRead>(reader: R) -> DictionaryResult<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn write_words(out: &mut impl Write, words: &[String], json: bool) -> DictionaryResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(words)?)?;
    } else {
        for word in words {
            writeln!(out, "{word}")?;
        }
    }
    Ok(())
}

fn load_dictionary(config: &DictionaryConfig) -> DictionaryResult<Trie> {
    let mut trie = Trie::with_config(config.spelling.trie_config());
    let words = read_words(io::stdin().lock())?;
    let total = words.len();
    trie.extend(words);
    info!(read = total, stored = trie.len(), "dictionary loaded");
    Ok(trie)
}

fn generate_config(output: &Path) -> DictionaryResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, DictionaryConfig::default().to_toml()?)?;
    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(command: DictionaryCommand, config: &DictionaryConfig, json: bool) -> DictionaryResult<()> {
    let mut trie = load_dictionary(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        DictionaryCommand::Search { word } => {
            let found = trie.search(&word);
            if json {
                writeln!(out, "{}", serde_json::to_string(&found)?)?;
            } else {
                writeln!(out, "{found}")?;
            }
        }
        DictionaryCommand::Suggest { prefix } => {
            write_words(&mut out, &trie.auto_suggest(&prefix), json)?;
        }
        DictionaryCommand::Spell { word, max_distance } => {
            let settings = SpellingSettings {
                max_distance: max_distance.unwrap_or(config.spelling.max_distance),
            };
            settings.validate()?;
            let suggestions = trie.spelling_suggestions_within(&word, settings.max_distance);
            write_words(&mut out, &suggestions, json)?;
        }
        DictionaryCommand::List => {
            write_words(&mut out, &trie.get_all_words(), json)?;
        }
        DictionaryCommand::Print => trie.print_structure(),
        DictionaryCommand::Delete { words } => {
            for word in &words {
                if !trie.delete(word) {
                    tracing::warn!(word = word.as_str(), "word not in dictionary");
                }
            }
            write_words(&mut out, &trie.get_all_words(), json)?;
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() -> DictionaryResult<()> {
    let args = Args::parse();

    match args.command {
        // Writing a config must work even when the current one is broken.
        Command::GenConfig { output } => generate_config(&output),
        Command::Dictionary(command) => {
            let config = load_config(args.config.as_deref())?;
            init_logging(&config.log)?;
            run(command, &config, args.json)
        }
    }
}
