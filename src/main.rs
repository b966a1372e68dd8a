use std::io::Read;
use std::path::Path;

use clap::Parser;

use prose_humanizer::nlp::annotator::{Annotator, HeuristicAnnotator};
use prose_humanizer::nlp::lexicon::{FileLexicon, SynonymSource};
use prose_humanizer::{HumanizeOutcome, HumanizeRequest, Humanizer, MetricsAnalyzer, Style};

#[derive(Parser)]
#[command(
    name = "prose-humanizer",
    about = "Analyze AI-sounding prose and rewrite it toward a human register",
    version
)]
struct Cli {
    /// File paths to process (reads stdin if none provided)
    files: Vec<String>,

    /// Style preset: default or academic
    #[arg(long, default_value = "default")]
    style: String,

    /// Override the style's substitution rate (0.0 to 1.0)
    #[arg(long)]
    rate: Option<f64>,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// JSON synonym table replacing the built-in dictionary
    #[arg(long)]
    lexicon: Option<String>,

    /// Print only the metrics report, skipping the rewrite
    #[arg(long)]
    analyze_only: bool,
}

fn run(text: &str, cli: &Cli) -> Result<String, prose_humanizer::HumanizerError> {
    if cli.analyze_only {
        let doc = HeuristicAnnotator::new().annotate(text)?;
        let report = MetricsAnalyzer::new(&doc).run_all();
        return Ok(serde_json::to_string_pretty(&report).expect("report serializes"));
    }

    let style = match cli.style.to_lowercase().as_str() {
        "default" => Style::Default,
        "academic" => Style::Academic,
        other => {
            return Err(prose_humanizer::HumanizerError::InvalidInput(format!(
                "unknown style '{other}', expected 'default' or 'academic'"
            )))
        }
    };
    let request = HumanizeRequest {
        style,
        substitution_rate: cli.rate,
    };

    let outcome = match &cli.lexicon {
        Some(path) => {
            let lexicon = FileLexicon::from_path(Path::new(path))?;
            let humanizer = Humanizer::with_backends(HeuristicAnnotator::new(), lexicon);
            humanize_one(&humanizer, text, &request, cli.seed)?
        }
        None => humanize_one(&Humanizer::new(), text, &request, cli.seed)?,
    };
    Ok(serde_json::to_string_pretty(&outcome).expect("outcome serializes"))
}

fn humanize_one<A: Annotator, S: SynonymSource>(
    humanizer: &Humanizer<A, S>,
    text: &str,
    request: &HumanizeRequest,
    seed: Option<u64>,
) -> Result<HumanizeOutcome, prose_humanizer::HumanizerError> {
    match seed {
        Some(seed) => humanizer.humanize_text_seeded(text, request, seed),
        None => humanizer.humanize_text(text, request),
    }
}

fn main() {
    let cli = Cli::parse();

    let inputs: Vec<String> = if cli.files.is_empty() {
        let mut input = String::new();
        if std::io::stdin().read_to_string(&mut input).is_err() {
            eprintln!("Error: stdin is not valid UTF-8 text");
            std::process::exit(1);
        }
        vec![input]
    } else {
        cli.files
            .iter()
            .map(|path| {
                std::fs::read_to_string(path).unwrap_or_else(|e| {
                    eprintln!("Error reading {path}: {e}");
                    std::process::exit(1);
                })
            })
            .collect()
    };

    for text in &inputs {
        match run(text, &cli) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
