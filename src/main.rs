use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use khmer_index::cursor::{Cursor, FirstLevelCursor};
use khmer_index::dictionary::WordList;
use khmer_index::flatten::flatten;
use khmer_index::lookup::{readings, Reading};
use khmer_index::series::{tokenize_with_series, EnrichedToken};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tokenize text and attach consonant series
    Tokenize {
        /// Text to tokenize
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,

        /// Input text file, one record per line
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Include transliteration and IPA per token
        #[arg(short, long)]
        readings: bool,
    },

    /// Print the first/second character keys of every word
    Keys {
        /// Word list, one word per line
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Build the two-level index over a word list
    Index {
        /// Word list, one word per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write bucket sizes instead of words
        #[arg(long, conflicts_with = "flatten")]
        lengths: bool,

        /// Write the flattened navigation list
        #[arg(long)]
        flatten: bool,

        /// Word to locate in the flattened list
        #[arg(long, requires = "flatten")]
        search: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(untagged)]
enum TokenRecord {
    Plain(Vec<EnrichedToken>),
    Readings(Vec<Reading>),
}

#[derive(Serialize)]
struct LineRecord<'a> {
    id: usize,
    input: &'a str,
    tokens: TokenRecord,
}

#[derive(Serialize)]
struct IndexReport<T: Serialize> {
    default_cursor: Option<Cursor>,
    default_first_level: Option<FirstLevelCursor>,
    rejected: usize,
    data: T,
}

fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<String>, _>>()?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    Ok(lines)
}

fn output_writer(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => {
            let file = File::create(p).with_context(|| format!("creating {}", p.display()))?;
            Box::new(BufWriter::with_capacity(262144, file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn run_tokenize(text: Option<String>, input: Option<PathBuf>, with_readings: bool) -> anyhow::Result<()> {
    let lines = match (text, input) {
        (Some(t), _) => vec![t],
        (None, Some(path)) => read_lines(&path)?,
        (None, None) => anyhow::bail!("either --text or --input is required"),
    };

    let start = Instant::now();
    let records: Vec<String> = lines
        .par_iter()
        .enumerate()
        .map(|(id, line)| {
            let enriched = tokenize_with_series(line);
            let tokens = if with_readings {
                TokenRecord::Readings(readings(&enriched))
            } else {
                TokenRecord::Plain(enriched)
            };
            serde_json::to_string(&LineRecord { id, input: line, tokens })
        })
        .collect::<Result<_, _>>()?;

    let mut out = output_writer(None)?;
    for record in &records {
        writeln!(out, "{}", record)?;
    }
    out.flush()?;

    info!(lines = lines.len(), elapsed = ?start.elapsed(), "tokenized");
    Ok(())
}

fn run_keys(input: &Path) -> anyhow::Result<()> {
    let list = WordList::load(input).with_context(|| format!("reading {}", input.display()))?;
    let classified = list.classify();

    #[derive(Serialize)]
    struct KeyRecord<'a, K: Serialize> {
        word: &'a str,
        keys: &'a K,
    }

    let mut out = output_writer(None)?;
    for (word, keys) in &classified.accepted {
        serde_json::to_writer(&mut out, &KeyRecord { word, keys })?;
        writeln!(out)?;
    }
    out.flush()?;

    for r in &classified.rejected {
        eprintln!("rejected: {} ({})", r.word, r.reason);
    }
    Ok(())
}

fn run_index(
    input: &Path,
    output: Option<&Path>,
    lengths: bool,
    flat: bool,
    search: Option<&str>,
) -> anyhow::Result<()> {
    let start = Instant::now();
    let list = WordList::load(input).with_context(|| format!("reading {}", input.display()))?;
    info!(words = list.len(), "loaded word list");

    let (index, rejected) = list.build_index();
    for r in &rejected {
        warn!(word = %r.word, reason = %r.reason, "skipped");
    }

    let default_cursor = Cursor::default_for(&index);
    let default_first_level = FirstLevelCursor::default_for(&index);
    match &default_cursor {
        Some(c) => info!(cursor = ?c, "default cursor"),
        None => warn!("index is empty"),
    }

    let mut out = output_writer(output)?;
    let rejected = rejected.len();
    if lengths {
        let report = IndexReport { default_cursor, default_first_level, rejected, data: index.lengths() };
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else if flat {
        let report = IndexReport {
            default_cursor,
            default_first_level,
            rejected,
            data: flatten(&index, search, &[]),
        };
        if let Some(word) = search {
            match report.data.exact_match_index {
                Some(i) => info!(%word, row = i, "exact match"),
                None => info!(%word, "no exact match"),
            }
        }
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        let report = IndexReport { default_cursor, default_first_level, rejected, data: &index };
        serde_json::to_writer_pretty(&mut out, &report)?;
    }
    writeln!(out)?;
    out.flush()?;

    info!(total = index.word_count(), elapsed = ?start.elapsed(), "index built");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Tokenize { text, input, readings } => run_tokenize(text, input, readings),
        Command::Keys { input } => run_keys(&input),
        Command::Index { input, output, lengths, flatten, search } => {
            run_index(&input, output.as_deref(), lengths, flatten, search.as_deref())
        }
    }
}
