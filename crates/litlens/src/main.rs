//! litlens - Entry point
//!
//! CLI surface: `analyze` one PDF (with optional follow-up chat), `compare`
//! 2-5 PDFs, `render` a JSON analysis record to markdown.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use litlens::config::Config;
use litlens::error::ToolError;
use litlens::session::SessionContext;
use litlens::tools::{self, NamedDocument, ToolContext};
use litlens::{GeminiClient, extract, formatters};

#[derive(Parser, Debug)]
#[command(name = "litlens")]
#[command(about = "Research paper analysis via the Gemini API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one research paper PDF and generate a literature review
    Analyze {
        /// Path to the PDF file
        pdf: PathBuf,

        /// Markdown file the review is written to
        #[arg(long, default_value = "analysis_report.md")]
        output: PathBuf,

        /// Enter an interactive follow-up chat after the analysis
        #[arg(long)]
        chat: bool,
    },

    /// Compare 2-5 research paper PDFs pairwise
    Compare {
        /// Paths to the PDF files
        pdfs: Vec<PathBuf>,

        /// Markdown file the comparison is written to
        #[arg(long, default_value = "comparison_report.md")]
        output: PathBuf,
    },

    /// Render a JSON paper-analysis record to markdown
    Render {
        /// Path to the JSON record file
        record: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    match cli.command {
        Command::Analyze { pdf, output, chat } => run_analyze(&pdf, &output, chat).await,
        Command::Compare { pdfs, output } => run_compare(&pdfs, &output).await,
        Command::Render { record, output } => run_render(&record, output.as_deref()),
    }
}

/// Build the operation context; a missing API key halts startup.
fn build_context() -> anyhow::Result<ToolContext> {
    let config = Config::from_env()?;
    let client = GeminiClient::new(config)?;
    Ok(ToolContext::new(Arc::new(client)))
}

/// Read a PDF from disk, rejecting anything that is not one.
fn read_pdf(path: &Path) -> Result<Vec<u8>, ToolError> {
    let bytes = std::fs::read(path)?;
    if !extract::is_pdf(&bytes) {
        return Err(litlens::ExtractionError::not_pdf(path.display().to_string()).into());
    }
    Ok(bytes)
}

async fn run_analyze(pdf: &Path, output: &Path, chat: bool) -> anyhow::Result<()> {
    let ctx = build_context()?;
    let mut session = SessionContext::new();

    let bytes = match read_pdf(pdf) {
        Ok(bytes) => bytes,
        Err(e) => anyhow::bail!(e.to_user_message()),
    };

    println!("Extracting text from {}...", pdf.display());
    let text = match extract::extract_text(&bytes) {
        Ok(text) => text,
        Err(e) => anyhow::bail!(ToolError::from(e).to_user_message()),
    };

    println!("Generating literature review...");
    let analysis = match tools::analyze_text(&ctx, &text).await {
        Ok(analysis) => analysis,
        Err(e) => anyhow::bail!(e.to_user_message()),
    };
    session.set_paper_text(text);

    println!("\n{analysis}\n");
    std::fs::write(output, &analysis)?;
    println!("Review written to {}", output.display());

    session.set_analysis(analysis);

    if chat {
        chat_loop(&ctx, &mut session).await?;
    }

    Ok(())
}

async fn run_compare(pdfs: &[PathBuf], output: &Path) -> anyhow::Result<()> {
    let ctx = build_context()?;

    let mut docs = Vec::with_capacity(pdfs.len());
    for path in pdfs {
        match read_pdf(path) {
            Ok(bytes) => docs.push(NamedDocument::new(path.display().to_string(), bytes)),
            Err(e) => anyhow::bail!(e.to_user_message()),
        }
    }

    println!("Comparing {} papers...", docs.len());
    let comparison = match tools::compare_documents(&ctx, &docs).await {
        Ok(comparison) => comparison,
        Err(e) => anyhow::bail!(e.to_user_message()),
    };

    println!("\n{comparison}\n");
    std::fs::write(output, &comparison)?;
    println!("Comparison written to {}", output.display());

    Ok(())
}

fn run_render(record: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let input = std::fs::read_to_string(record)?;
    let analysis = formatters::parse_analysis_json(&input)?;
    let markdown = formatters::format_analysis_markdown(&analysis);

    match output {
        Some(path) => {
            std::fs::write(path, &markdown)?;
            println!("Rendered to {}", path.display());
        }
        None => print!("{markdown}"),
    }

    Ok(())
}

/// Interactive follow-up chat over the generated review.
///
/// `clear` empties the history, `quit` / `exit` ends the session. Model
/// failures are shown inline and the loop continues.
async fn chat_loop(ctx: &ToolContext, session: &mut SessionContext) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    println!("Ask follow-up questions about the paper ('clear' resets, 'quit' exits).");

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            // EOF
            break;
        }

        let question = line.trim();
        match question {
            "" => continue,
            "quit" | "exit" => break,
            "clear" => {
                session.clear_chat();
                println!("Chat history cleared.");
                continue;
            }
            _ => {}
        }

        match tools::answer_question(ctx, session, question).await {
            Ok(answer) => {
                println!("\n{answer}\n");
                session.record_exchange(question.to_string(), answer);
            }
            Err(e) => println!("{}", e.to_user_message()),
        }
    }

    Ok(())
}
