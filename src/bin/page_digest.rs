//! Command-line front end: extract article text from HTML or summarize it.
//!
//! HTML is read from a file, or from stdin when the path is `-` or omitted.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use page_digest::{
    encoding, extractor, message, Digester, Error, GeminiClient, Options, PageContext, PageTab,
    SummaryType, API_KEY_ENV,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "page-digest", version, about = "Extract and summarize web articles")]
struct Cli {
    /// TOML options file.
    #[arg(long, global = true, env = "PAGE_DIGEST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the article text of a page as JSON.
    Extract {
        /// HTML file, `-` for stdin.
        input: Option<PathBuf>,
    },
    /// Print the usable part of a text selection as JSON.
    Selection {
        /// Selected text.
        text: String,
    },
    /// Answer a raw page message such as `{"type":"GET_ARTICLE_TEXT"}`.
    Message {
        /// JSON message.
        json: String,
        /// HTML file, `-` for stdin.
        input: Option<PathBuf>,
        /// Text the user has selected on the page.
        #[arg(long)]
        selection: Option<String>,
    },
    /// Summarize a page with Gemini.
    Summarize {
        /// HTML file, `-` for stdin.
        input: Option<PathBuf>,
        /// URL the page was loaded from.
        #[arg(long)]
        url: Option<String>,
        /// Summary mode: brief, detailed or bullets.
        #[arg(long = "type")]
        summary_type: Option<String>,
        /// Text the user has selected on the page.
        #[arg(long)]
        selection: Option<String>,
    },
}

#[derive(Serialize)]
struct ExtractOutput {
    text: String,
    strategy: Option<&'static str>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_page(input: Option<&PathBuf>) -> page_digest::Result<String> {
    let bytes = match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path)?,
        _ => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(encoding::decode_html(&bytes))
}

fn load_options(path: Option<&PathBuf>) -> page_digest::Result<Options> {
    let options = match path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    Ok(options.with_env_overrides())
}

fn print_json<T: Serialize>(value: &T) -> page_digest::Result<()> {
    let json = serde_json::to_string(value).map_err(|e| Error::InvalidMessage(e.to_string()))?;
    println!("{json}");
    Ok(())
}

async fn run(cli: Cli) -> page_digest::Result<()> {
    match cli.command {
        Command::Extract { input } => {
            let html = read_page(input.as_ref())?;
            let extraction = extractor::extract_article(&page_digest::dom::parse(&html));
            print_json(&ExtractOutput {
                text: extraction.text,
                strategy: extraction.strategy,
            })
        }
        Command::Selection { text } => {
            print_json(&message::Response::new(extractor::extract_selected_text(Some(&text))))
        }
        Command::Message {
            json,
            input,
            selection,
        } => {
            let html = read_page(input.as_ref())?;
            let mut page = PageContext::from_html(&html);
            if let Some(selection) = selection {
                page = page.with_selection(selection);
            }
            match message::handle_message(&page, &json) {
                Some(response) => print_json(&response),
                None => Ok(()),
            }
        }
        Command::Summarize {
            input,
            url,
            summary_type,
            selection,
        } => {
            let options = load_options(cli.config.as_ref())?;
            let summary = summarize(&options, input.as_ref(), url, summary_type, selection).await?;
            println!("{summary}");
            Ok(())
        }
    }
}

/// The summarize action. The credential is checked before the page is read,
/// so a missing key never waits on stdin.
async fn summarize(
    options: &Options,
    input: Option<&PathBuf>,
    url: Option<String>,
    summary_type: Option<String>,
    selection: Option<String>,
) -> page_digest::Result<String> {
    let kind = summary_type
        .as_deref()
        .map_or(options.summary_type, SummaryType::from_label);

    let client = GeminiClient::from_options(options).inspect_err(|err| {
        if matches!(err, Error::MissingApiKey) {
            tracing::debug!(env = API_KEY_ENV, "no API key configured");
        }
    })?;
    let digester = Digester::new(client);

    let html = read_page(input)?;
    let mut page = PageContext::from_html(&html);
    if let Some(selection) = selection {
        page = page.with_selection(selection);
    }
    let tab = PageTab { url };

    digester.digest(Some(&tab), &page, kind).await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
