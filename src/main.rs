use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use esagram::sequence::{int, word, Element};
use esagram::{IndexStats, SuffixArray};

/// Reads a corpus into an enhanced suffix array, then answers one query
/// per stdin line with its occurrence count.
#[derive(Parser)]
#[command(name = "esagram")]
#[command(about = "Counts corpus n-grams with an enhanced suffix array")]
struct Cli {
    /// Corpus file to index
    #[arg(short, long)]
    file: PathBuf,

    /// How corpus and query tokens are parsed
    #[arg(short, long, value_enum, default_value = "words")]
    mode: Mode,

    /// Load previously saved index tables instead of rebuilding
    #[arg(long, conflicts_with = "save")]
    index: Option<PathBuf>,

    /// Save the freshly built index tables to this path
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print index statistics before the query loop
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Printable-ASCII word tokens
    Words,
    /// Whitespace-separated decimal integers
    Ints,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let file = File::open(&cli.file)
        .with_context(|| format!("cannot open corpus file {}", cli.file.display()))?;
    match cli.mode {
        Mode::Words => {
            let corpus = word::read_words_with_sentinel(file).context("reading corpus")?;
            run(&cli, &corpus, word::tokenize)
        }
        Mode::Ints => {
            let corpus = int::read_ints_with_sentinel(file).context("reading corpus")?;
            run(&cli, &corpus, int::tokenize)
        }
    }
}

/// Build or load the index, then print `find_count` for each stdin line.
fn run<E, F>(cli: &Cli, corpus: &[E], tokenize: F) -> Result<()>
where
    E: Element,
    F: Fn(&str) -> Vec<E>,
{
    let index = match &cli.index {
        Some(path) => SuffixArray::load(path, corpus)
            .with_context(|| format!("loading index from {}", path.display()))?,
        None => SuffixArray::build(corpus).context("building index")?,
    };
    if let Some(path) = &cli.save {
        index
            .save(path)
            .with_context(|| format!("saving index to {}", path.display()))?;
    }
    if cli.stats {
        print_stats(&index.stats());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        writeln!(out, "{}", index.find_count(&tokenize(&line)))?;
    }
    Ok(())
}

fn print_stats(stats: &IndexStats) {
    println!("Index statistics");
    println!("  Sequence length: {}", stats.sequence_len);
    println!("  LCP overflow:    {}", stats.lcp_overflow);
    println!("  Up overflow:     {}", stats.up_overflow);
    println!("  Down overflow:   {}", stats.down_overflow);
    println!("  Nextl overflow:  {}", stats.nextl_overflow);
}
