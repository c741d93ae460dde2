//! rapid-keywords command line
//!
//! `rapid-keywords extract` prints keywords for text given as an argument or
//! on stdin; `rapid-keywords serve` runs the HTTP service.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rapid_keywords::api::ExtractResponse;
use rapid_keywords::pipeline::spec::ExtractorSpec;
use rapid_keywords::server::{self, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use rapid_keywords::{ExtractError, KeywordExtractor, Language, StopwordSet, TokenizerKind};

#[derive(Parser)]
#[command(name = "rapid-keywords", version, about = "Frequency-based keyword extraction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract keywords from text (argument or stdin)
    Extract(ExtractArgs),
    /// Run the HTTP service
    Serve(ServeArgs),
}

#[derive(Args)]
struct SpecArgs {
    /// JSON extractor spec
    #[arg(long, env = "RAPID_KEYWORDS_SPEC")]
    spec: Option<PathBuf>,

    /// Tokenizer, overriding the spec (delimiter | unicode_words)
    #[arg(long)]
    tokenizer: Option<TokenizerKind>,

    /// Stopword tables, overriding the spec (default | extended)
    #[arg(long)]
    stopwords: Option<StopwordSet>,
}

#[derive(Args)]
struct ExtractArgs {
    /// Text to analyze; read from stdin when omitted
    text: Option<String>,

    /// Language tag (en | si)
    #[arg(short, long)]
    language: Option<Language>,

    /// Maximum keywords to return (1-50)
    #[arg(short = 'n', long)]
    max_keywords: Option<usize>,

    /// Print counts alongside keywords as JSON
    #[arg(long)]
    scored: bool,

    /// Print the JSON response instead of one keyword per line
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    spec: SpecArgs,
}

#[derive(Args)]
struct ServeArgs {
    #[arg(long, env = "RAPID_KEYWORDS_HOST", default_value = DEFAULT_HOST)]
    host: String,

    #[arg(long, env = "RAPID_KEYWORDS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    #[command(flatten)]
    spec: SpecArgs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Extract(args) => run_extract(args),
        Command::Serve(args) => run_serve(args),
    }
}

fn load_spec(args: &SpecArgs) -> Result<ExtractorSpec> {
    let mut spec = match &args.spec {
        Some(path) => read_spec(path)?,
        None => ExtractorSpec::default(),
    };
    if let Some(tokenizer) = args.tokenizer {
        spec.tokenizer = Some(tokenizer);
    }
    if let Some(stopwords) = args.stopwords {
        spec.stopwords = Some(stopwords);
    }
    Ok(spec)
}

fn read_spec(path: &Path) -> Result<ExtractorSpec> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read spec {}", path.display()))?;
    ExtractorSpec::from_json(&json).with_context(|| format!("failed to parse spec {}", path.display()))
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let spec = load_spec(&args.spec)?;
    let extractor = KeywordExtractor::from_spec(&spec)?;
    let language = args
        .language
        .or(extractor.config().default_language)
        .unwrap_or(Language::English);
    let max_keywords = args.max_keywords.unwrap_or(extractor.config().max_keywords);

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let scored = match extractor.extract_scored(&text, language, max_keywords) {
        Ok(scored) => scored,
        Err(ExtractError::EmptyInput) => {
            anyhow::bail!(language.empty_input_message());
        }
        Err(err) => return Err(err.into()),
    };

    if args.scored {
        println!("{}", serde_json::to_string_pretty(&scored)?);
    } else if args.json {
        let response = ExtractResponse {
            keywords: scored.into_iter().map(|k| k.term).collect(),
        };
        println!("{}", serde_json::to_string(&response)?);
    } else if scored.is_empty() {
        eprintln!("{}", language.no_keywords_message());
    } else {
        for keyword in scored {
            println!("{}", keyword.term);
        }
    }
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<()> {
    let spec = load_spec(&args.spec)?;
    let extractor = Arc::new(KeywordExtractor::from_spec(&spec)?);
    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime
        .block_on(server::serve(config.clone(), extractor))
        .with_context(|| format!("server on {} failed", config.addr()))
}
