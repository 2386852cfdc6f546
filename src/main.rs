use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use langscore::reader::{InputReader, InputStats, ReaderConfig};
use langscore::{builtin_table, DetectionResult, Detector, DetectorConfig, TableSnapshot};

#[derive(Parser, Debug)]
#[command(name = "langscore")]
#[command(about = "Identify the language of text files or standard input")]
#[command(version)]
struct Args {
    /// Files to classify; standard input is read when none are given
    inputs: Vec<PathBuf>,

    /// Load the frequency table from a JSON snapshot instead of the embedded corpus
    #[arg(long)]
    table: Option<PathBuf>,

    /// Write the active frequency table as a JSON snapshot and exit
    #[arg(long)]
    export_table: Option<PathBuf>,

    /// Print only the best language name per input
    #[arg(long)]
    best: bool,

    /// Read at most this many bytes of each input
    #[arg(long)]
    max_bytes: Option<usize>,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Letters per scoring chunk
    #[arg(long, default_value_t = DetectorConfig::default().chunk_chars)]
    chunk_chars: usize,

    /// Abort on first unreadable input
    #[arg(long)]
    fail_fast: bool,

    /// Concurrent detections (default: number of CPUs)
    #[arg(long)]
    jobs: Option<usize>,
}

#[derive(Serialize)]
struct CandidateLine {
    code: &'static str,
    name: &'static str,
    percent: u8,
    normalized_score: f64,
}

#[derive(Serialize)]
struct ReportLine<'a> {
    input: &'a str,
    best: &'static str,
    code: u16,
    reliable: bool,
    text_bytes: usize,
    truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    candidates: Vec<CandidateLine>,
}

impl<'a> ReportLine<'a> {
    fn new(stats: &'a InputStats, result: &DetectionResult) -> Self {
        Self {
            input: &stats.source,
            best: result.best_name(),
            code: result.best_code(),
            reliable: result.is_reliable(),
            text_bytes: result.text_bytes(),
            truncated: stats.truncated,
            error: stats.read_error.as_deref(),
            candidates: result
                .candidates()
                .iter()
                .map(|c| CandidateLine {
                    code: c.language.code(),
                    name: c.language.name(),
                    percent: c.percent,
                    normalized_score: c.normalized_score,
                })
                .collect(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production;
    // stderr keeps stdout free for the per-input JSON lines
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let table = match &args.table {
        Some(path) => Arc::new(TableSnapshot::load_async(path).await?),
        None => builtin_table(),
    };
    let detector = Detector::new(
        table,
        DetectorConfig {
            chunk_chars: args.chunk_chars,
        },
    )?;

    if let Some(path) = &args.export_table {
        TableSnapshot::from_table(detector.table())
            .save(path)
            .with_context(|| format!("failed to export table to {}", path.display()))?;
        println!("Exported {} n-grams to {}", detector.table().len(), path.display());
        return Ok(());
    }

    let reader = InputReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        max_bytes: args.max_bytes,
        ..Default::default()
    });
    let inputs = if args.inputs.is_empty() {
        vec![reader.read_stdin().await?]
    } else {
        reader.read_files_batch(&args.inputs, args.use_mmap).await?
    };

    let total = inputs.len();
    let unreadable = inputs.iter().filter(|(_, stats)| stats.read_error.is_some()).count();

    // WHY: the table is shared read-only, so detections run on the blocking
    // pool without locks; buffered() keeps output in input order
    let jobs = args.jobs.unwrap_or_else(num_cpus::get).max(1);
    let mut detections = stream::iter(inputs)
        .map(|(bytes, stats)| {
            let detector = detector.clone();
            tokio::task::spawn_blocking(move || {
                let result = detector.detect_top3(&bytes);
                (stats, result)
            })
        })
        .buffered(jobs);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    while let Some(joined) = detections.next().await {
        let (stats, result) = joined?;
        if args.best {
            writeln!(out, "{}", result.best_name())?;
        } else {
            serde_json::to_writer(&mut out, &ReportLine::new(&stats, &result))?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    info!("Classified {} inputs ({} unreadable) with {} jobs", total, unreadable, jobs);
    Ok(())
}
