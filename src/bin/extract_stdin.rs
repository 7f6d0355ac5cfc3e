//! Reads an HTML page from stdin and prints the extracted posting as JSON.
//!
//! ```text
//! extract_stdin --url 'https://www.linkedin.com/jobs/view/123/' < page.html
//! extract_stdin --url "$URL" --payload --source linkedin < page.html
//! ```
//!
//! Set `RUST_LOG=jobpost_extract=debug` to see which heuristics fired.

use std::io::{self, Read};

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobpost_extract::{extract_bytes_with_options, Options, PageContext};

#[derive(Debug, Parser)]
#[command(name = "extract_stdin", about = "Extract a job posting from HTML on stdin")]
struct Args {
    /// Source URL of the page.
    #[arg(long, default_value = "", env = "JOBPOST_URL")]
    url: String,

    /// Structured page title (og:title) reported by the host.
    #[arg(long)]
    og_title: Option<String>,

    /// Document title reported by the host.
    #[arg(long)]
    document_title: Option<String>,

    /// Charset label or Content-Type header of the input.
    #[arg(long)]
    content_type: Option<String>,

    /// Site brand used for title noise filtering.
    #[arg(long)]
    site_name: Option<String>,

    /// Print the ingestion payload instead of the extraction result.
    #[arg(long)]
    payload: bool,

    /// Capture source recorded in the payload.
    #[arg(long, default_value = "linkedin")]
    source: String,
}

fn main() -> jobpost_extract::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut html = Vec::new();
    io::stdin().read_to_end(&mut html)?;
    tracing::debug!(bytes = html.len(), url = %args.url, "input read");

    let mut ctx = PageContext::new(args.url);
    ctx.og_title = args.og_title;
    ctx.document_title = args.document_title;

    let mut options = Options::default();
    if let Some(site_name) = args.site_name {
        options.site_name = site_name;
    }

    let result = extract_bytes_with_options(&html, args.content_type.as_deref(), &ctx, &options);

    let json = if args.payload {
        result.to_payload(&args.source, Utc::now()).to_json()?
    } else {
        result.to_json()?
    };
    println!("{json}");
    Ok(())
}
