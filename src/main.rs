use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dealsight::{
    analyze_transcript, calendar_summary, crm_summary, enhance_analysis, extract_call_metadata,
    generate_sales_intelligence, AnalysisSnapshot, CallContext, CallReport, ExtractorConfig,
};

#[derive(Parser)]
#[command(name = "dealsight")]
#[command(author, version, about = "Sales-call transcript intelligence pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transcript and write the structured snapshot
    Analyze {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the analysis snapshot (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for the human-readable report (text)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Override the extracted call title
        #[arg(long)]
        title: Option<String>,

        /// Override the extracted customer name
        #[arg(long)]
        customer: Option<String>,

        /// Override the extracted call date
        #[arg(long)]
        date: Option<String>,

        /// Override the extracted call duration
        #[arg(long)]
        duration: Option<String>,

        /// Skip the model call and use the canned analysis
        #[arg(long)]
        offline: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the locally extracted call metadata without analyzing
    Inspect {
        /// Input transcript file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render commitment exports from a saved snapshot
    Export {
        /// Analysis snapshot file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Export format
        #[arg(long, value_enum, default_value = "crm")]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Calendar,
    Crm,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            report,
            title,
            customer,
            date,
            duration,
            offline,
            verbose,
        } => {
            setup_logging(verbose);
            run_analyze(
                input, output, report, title, customer, date, duration, offline,
            )
            .await
        }
        Commands::Inspect { input, verbose } => {
            setup_logging(verbose);
            run_inspect(input)
        }
        Commands::Export { input, format } => {
            setup_logging(false);
            run_export(input, format)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

#[allow(clippy::too_many_arguments)]
async fn run_analyze(
    input: PathBuf,
    output: PathBuf,
    report: Option<PathBuf>,
    title: Option<String>,
    customer: Option<String>,
    date: Option<String>,
    duration: Option<String>,
    offline: bool,
) -> Result<()> {
    let text = read_transcript(&input)?;

    info!("Extracting call metadata from {:?}", input);
    let mut guess = extract_call_metadata(&text, &ExtractorConfig::default());

    // CLI overrides stand in for the interactive confirmation step
    if let Some(title) = title {
        guess.metadata.title = title;
    }
    if let Some(customer) = customer {
        guess.metadata.customer_name = customer;
    }
    if let Some(date) = date {
        guess.metadata.date = Some(date);
    }
    if let Some(duration) = duration {
        guess.metadata.duration = Some(duration);
    }

    info!(
        "Call \"{}\", customer \"{}\", {} participant(s)",
        guess.metadata.title,
        guess.metadata.customer_name,
        guess.participants.len()
    );

    let context = CallContext {
        metadata: guess.metadata,
        participants: guess.participants,
    };

    info!("Running analysis...");
    let result = analyze_transcript(&text, Some(context), offline).await;

    let enhanced = enhance_analysis(&result);
    let intelligence = generate_sales_intelligence(&result);

    info!(
        "Deal score {}/100, {} commitment(s), {} competitive alert(s)",
        intelligence.deal_scorecard.overall_score,
        intelligence.commitment_tracker.total_count,
        intelligence.competitive_alerts.len()
    );

    if let Some(report_path) = report {
        let call_report = CallReport::new(&enhanced, &intelligence);
        call_report.write_file(&report_path)?;
        info!("Report written to {:?}", report_path);
    }

    let snapshot = AnalysisSnapshot::from_result(enhanced);
    snapshot.write_json(&output)?;
    info!("Snapshot written to {:?}", output);

    Ok(())
}

fn run_inspect(input: PathBuf) -> Result<()> {
    let text = read_transcript(&input)?;
    let guess = extract_call_metadata(&text, &ExtractorConfig::default());

    println!("Transcript Metadata");
    println!("===================");
    println!("Title: {}", guess.metadata.title);
    println!("Customer: {}", guess.metadata.customer_name);
    println!("Date: {}", guess.metadata.date.as_deref().unwrap_or("-"));
    println!(
        "Duration: {}",
        guess.metadata.duration.as_deref().unwrap_or("-")
    );
    println!();

    println!("Participants");
    println!("------------");
    for participant in &guess.participants {
        let name = if participant.name.is_empty() {
            "(unknown)"
        } else {
            participant.name.as_str()
        };
        println!("{name}: {:?}", participant.role);
    }

    Ok(())
}

fn run_export(input: PathBuf, format: ExportFormat) -> Result<()> {
    let snapshot = AnalysisSnapshot::read_json(&input)?;

    // The derivers are pure functions of the result, so the tracker can
    // be rebuilt from the saved document
    let intelligence = generate_sales_intelligence(&snapshot.full_data.base());

    let text = match format {
        ExportFormat::Calendar => calendar_summary(&intelligence.commitment_tracker),
        ExportFormat::Crm => crm_summary(&intelligence.commitment_tracker),
    };
    println!("{text}");

    Ok(())
}

fn read_transcript(path: &PathBuf) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript: {:?}", path))?;

    let min_len = ExtractorConfig::default().min_transcript_len;
    if text.len() < min_len {
        bail!("Transcript is too short. Please provide at least {min_len} characters.");
    }

    Ok(text)
}
