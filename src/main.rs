//! docsumma CLI - Extractive document summarisation
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments, rendering results and handling top-level errors.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use docsumma::{analyse, extract, logging, text, Analysis, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsumma")]
#[command(author, version, about = "Summarise documents and generate study questions", long_about = None)]
struct Cli {
    /// Path to a docsumma.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show progress logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a PDF or TXT file and generate questions
    #[command(alias = "summarise")]
    Analyse {
        /// Document to analyse (.pdf or .txt)
        file: PathBuf,
        /// Show cleaned extracted text instead of the analysis
        #[arg(long)]
        raw: bool,
        /// Print the analysis as JSON
        #[arg(long, conflicts_with = "raw")]
        json: bool,
        /// Number of summary sentences
        #[arg(short = 'n', long)]
        sentences: Option<usize>,
        /// Maximum number of questions
        #[arg(short = 'q', long)]
        questions: Option<usize>,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Analyse {
            file,
            raw,
            json,
            sentences,
            questions,
        } => {
            let mut config = match &cli.config {
                Some(path) => Config::load_from(path)?,
                None => Config::load()?,
            };
            if let Some(n) = sentences {
                config.analysis.summary_sentences = n;
            }
            if let Some(n) = questions {
                config.analysis.max_questions = n;
            }
            config.validate()?;

            let document = extract::read_document(&file, config.input.max_file_bytes)?;

            if raw {
                let clean = text::normalize(&document.text);
                println!("\n=== {} ===\n", document.filename);
                println!("{}", clean);
                println!("\n--- Extracted {} characters ---", clean.chars().count());
                return Ok(());
            }

            let analysis = analyse(&document, &config.analysis)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                render(&analysis);
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "docsumma", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Print an analysis for the terminal
fn render(analysis: &Analysis) {
    println!(
        "{} {}\n",
        format!("=== {} ===", analysis.filename).bold(),
        format!("({}, {} characters)", analysis.kind, analysis.characters).dimmed()
    );

    println!("{}", "📝 Summary:".bold());
    println!("  {}\n", analysis.summary);

    println!("{}", "❓ Questions:".bold());
    for (i, question) in analysis.questions.iter().enumerate() {
        println!("  {}. {}", i + 1, question);
    }
}
