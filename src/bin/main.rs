use clap::Parser;
use crossterm::style::Stylize;
use major_core::config::ReportConfig;
use major_core::core::reconcile::AccuracyReport;
use major_core::core::types::{GrammaticalClass, WordIndex};
use major_core::dictionary::{load_dictionary, DictionaryStats};
use major_core::patch::load_patches;
use major_core::persistence::{load_snapshot, save_snapshot, write_json, write_report, write_word_list};
use major_core::report::{group_by_prefix, render_html, Summary};
use major_core::IndexEngine;
use std::error::Error;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Builds a major-system word list from the Folkets dictionary.
#[derive(Parser, Debug)]
#[command(name = "major_index", version)]
struct Args {
    /// Folkets XML dictionary.
    #[arg(short, long, required_unless_present = "from_snapshot")]
    dictionary: Option<PathBuf>,

    /// Patch file with manual corrections.
    #[arg(short, long)]
    patches: Option<PathBuf>,

    /// Where to write the HTML report.
    #[arg(short, long)]
    output: PathBuf,

    /// JSON file with report settings; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word class to report: noun, verb, adjective or other.
    #[arg(short = 'k', long)]
    class: Option<GrammaticalClass>,

    /// Number of leading digits to group by.
    #[arg(short = 'n', long)]
    prefix_len: Option<usize>,

    /// Also group words with more digits than the prefix length.
    #[arg(short = 'l', long)]
    include_longer: bool,

    #[arg(short, long)]
    title: Option<String>,

    /// Dump lexicon, index and accuracy counters as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write a "word", "pronunciation", digits listing.
    #[arg(long)]
    word_list: Option<PathBuf>,

    /// Save the built index for later runs.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Render from a saved index instead of parsing the dictionary.
    #[arg(long, conflicts_with_all = ["dictionary", "patches"])]
    from_snapshot: Option<PathBuf>,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&args)?;
    let fragments = config.load_fragments()?;

    let mut stats = None;
    let mut accuracy = None;
    let index: WordIndex = if let Some(path) = &args.from_snapshot {
        info!(path = %path.display(), "loading index snapshot");
        if args.word_list.is_some() {
            warn!("a snapshot has no pronunciations, skipping the word list");
        }
        let index = load_snapshot(path)?;
        if let Some(json) = &args.json {
            write_json(json, &index)?;
        }
        index
    } else {
        let dictionary = args.dictionary.as_ref().ok_or("--dictionary is required")?;
        let raw = load_dictionary(dictionary)?;
        stats = Some(DictionaryStats::collect(&raw));
        let patches = match &args.patches {
            Some(path) => load_patches(path)?,
            None => Vec::new(),
        };

        let engine = IndexEngine::new(config.transliteration());
        let build = engine.run(&raw, &patches);

        if let Some(json) = &args.json {
            write_json(json, &build)?;
        }
        if let Some(list) = &args.word_list {
            write_word_list(
                list,
                build.index.values().map(|entry| {
                    let pronunciation = build
                        .lexicon
                        .get(&entry.word)
                        .map_or("", |e| e.pronunciation.as_str());
                    (entry.word.as_str(), pronunciation, entry.digits.as_str())
                }),
            )?;
        }
        accuracy = Some(build.accuracy);
        build.index
    };

    if let Some(path) = &args.snapshot {
        save_snapshot(&index, path)?;
    }

    let buckets = group_by_prefix(&index, config.class, config.prefix_len, config.length_policy());
    let summary = Summary {
        stats: stats.as_ref(),
        accuracy: accuracy.as_ref(),
        indexed_words: index.len(),
    };
    let html = render_html(&config.title, &buckets, &fragments, &summary);
    write_report(&args.output, &html)?;

    print_summary(stats.as_ref(), accuracy.as_ref(), index.len(), buckets.len());
    println!("Report written to '{}'", args.output.display());
    Ok(())
}

fn resolve_config(args: &Args) -> Result<ReportConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ReportConfig::from_path(path)?,
        None => ReportConfig::default(),
    };
    if let Some(class) = args.class {
        config.class = class;
    }
    if let Some(prefix_len) = args.prefix_len {
        config.prefix_len = prefix_len;
    }
    if args.include_longer {
        config.include_longer = true;
    }
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    config.validate()?;
    Ok(config)
}

fn print_summary(
    stats: Option<&DictionaryStats>,
    accuracy: Option<&AccuracyReport>,
    indexed: usize,
    buckets: usize,
) {
    println!("{}", "Statistics".bold());
    if let Some(stats) = stats {
        println!("  Total number of words: {}", stats.total_words);
        for (name, counts) in [
            ("nouns", stats.nouns),
            ("verbs", stats.verbs),
            ("adjectives", stats.adjectives),
        ] {
            println!("  Total number of {}: {}", name, counts.total);
            println!("  Number of {} with phonetic: {}", name, counts.with_pronunciation);
        }
    }
    println!("  Indexed words: {}", indexed);
    if let Some(accuracy) = accuracy {
        let rate = format!("{:.2}%", accuracy.disagreement_rate() * 100.0);
        println!(
            "  Spelling check: {} agree, {} resolved, {} disagree ({})",
            accuracy.agreements.to_string().green(),
            accuracy.resolved.to_string().yellow(),
            accuracy.disagreements.to_string().red(),
            rate
        );
        println!(
            "  Spelling fallback: {}, patched digits: {}",
            accuracy.fallbacks, accuracy.forced
        );
    }
    println!("  Buckets: {}", buckets);
}
