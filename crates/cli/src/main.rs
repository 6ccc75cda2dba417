mod output;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use versecheck_core::pipeline::verify_passage_use_case::VerifyPassageUseCase;
use versecheck_core::recitation::domain::detailed_metrics::detailed_metrics;
use versecheck_core::recitation::domain::word_diff::diff_words;
use versecheck_core::recitation::infrastructure::reader_for;
use versecheck_core::text::domain::normalizer::normalize;

use settings::Settings;

/// Exit code for `--strict` runs where at least one verse failed.
const EXIT_NOT_PASSED: i32 = 2;

/// Scores recited verse transcripts against their canonical text.
#[derive(Parser)]
#[command(name = "versecheck")]
struct Cli {
    /// Settings file (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score one transcript against one verse.
    Verify {
        /// Canonical verse text.
        #[arg(long)]
        master: String,

        #[command(flatten)]
        spoken: SpokenArgs,

        /// Minimum score to pass (0-100). Defaults to the single-verse setting.
        #[arg(long)]
        threshold: Option<f64>,

        /// Print a word-level diff of spoken vs expected.
        #[arg(long)]
        diff: bool,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Split one transcript of several consecutive verses and score each.
    Segment {
        /// Verse file: JSON array of {"verse", "text"}, or numbered text lines.
        #[arg(long)]
        verses: PathBuf,

        #[command(flatten)]
        spoken: SpokenArgs,

        /// Minimum score per verse (0-100). Defaults to the multi-verse setting.
        #[arg(long)]
        threshold: Option<f64>,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Print text as it is compared after normalization.
    Normalize {
        text: String,
    },
    /// Show the effective settings.
    Config {
        /// Write the effective settings to the settings file.
        #[arg(long)]
        save: bool,
    },
}

#[derive(Args)]
struct SpokenArgs {
    /// Transcript text.
    #[arg(long)]
    spoken: Option<String>,

    /// File containing the transcript.
    #[arg(long)]
    spoken_file: Option<PathBuf>,
}

#[derive(Args)]
struct ReportArgs {
    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Exit with status 2 unless every verse passed.
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::init();

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_NOT_PASSED),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` only for a `--strict` run that did not fully pass.
fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings_path = cli.config.clone().or_else(Settings::default_path);
    let settings = settings_path
        .as_deref()
        .map(Settings::load_from)
        .unwrap_or_default();

    match cli.command {
        Command::Verify {
            master,
            spoken,
            threshold,
            diff,
            report,
        } => {
            let threshold = threshold.unwrap_or(settings.single_verse_threshold);
            validate_threshold(threshold)?;
            let spoken_text = read_spoken(&spoken)?;
            run_verify(&spoken_text, &master, threshold, diff || settings.show_diff, &report)
        }
        Command::Segment {
            verses,
            spoken,
            threshold,
            report,
        } => {
            let threshold = threshold.unwrap_or(settings.multi_verse_threshold);
            validate_threshold(threshold)?;
            if !verses.exists() {
                return Err(format!("Verse file not found: {}", verses.display()).into());
            }
            let spoken_text = read_spoken(&spoken)?;
            run_segment(&verses, &spoken_text, threshold, &report)
        }
        Command::Normalize { text } => {
            println!("{}", normalize(&text));
            Ok(true)
        }
        Command::Config { save } => {
            run_config(&settings, settings_path.as_deref(), save)?;
            Ok(true)
        }
    }
}

fn run_verify(
    spoken_text: &str,
    master: &str,
    threshold: f64,
    show_diff: bool,
    report: &ReportArgs,
) -> Result<bool, Box<dyn std::error::Error>> {
    let metrics = detailed_metrics(spoken_text, master, threshold);
    let diff = show_diff.then(|| {
        diff_words(
            &metrics.result.normalized_spoken,
            &metrics.result.normalized_master,
        )
    });

    if report.json {
        let mut value = serde_json::to_value(&metrics)?;
        if let Some(tokens) = &diff {
            value["diff"] = serde_json::to_value(tokens)?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", output::format_verification(&metrics, threshold));
        if let Some(tokens) = &diff {
            println!("  diff:   {}", output::format_diff(tokens));
        }
    }

    Ok(!report.strict || metrics.result.passed)
}

fn run_segment(
    verses: &Path,
    spoken_text: &str,
    threshold: f64,
    report: &ReportArgs,
) -> Result<bool, Box<dyn std::error::Error>> {
    let use_case = VerifyPassageUseCase::new(reader_for(verses), threshold);
    let passage = use_case.run(verses, spoken_text)?;

    if report.json {
        println!("{}", serde_json::to_string_pretty(&passage)?);
    } else {
        print!("{}", output::format_passage(&passage, threshold));
    }

    Ok(!report.strict || passage.all_passed())
}

fn run_config(
    settings: &Settings,
    path: Option<&Path>,
    save: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = path.ok_or("could not determine config directory")?;
    if save {
        settings.save_to(path)?;
        log::info!("Settings written to {}", path.display());
    }
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

fn read_spoken(args: &SpokenArgs) -> Result<String, Box<dyn std::error::Error>> {
    match (&args.spoken, &args.spoken_file) {
        (Some(text), None) => Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read transcript {}: {e}", path.display()).into()),
        (Some(_), Some(_)) => Err("--spoken and --spoken-file are mutually exclusive".into()),
        (None, None) => Err("A transcript is required: pass --spoken or --spoken-file".into()),
    }
}

fn validate_threshold(threshold: f64) -> Result<(), Box<dyn std::error::Error>> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(format!("Threshold must be between 0 and 100, got {threshold}").into());
    }
    Ok(())
}
