//! Price mock generator CLI
//!
//! Turns a fixture file into Smocker mocks and either prints them or pushes
//! them to a running mock server.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codec::{aggregate_selector, decode_multicall_args, decode_multicall_response, from_hex, to_hex};
use origins::{load_fixtures, Exchange, MocksBuilder};
use settings::{Settings, DEFAULT_LOG_FILTER};
use smocker::{BodyMatcher, Mock, MockServerClient, SmockerApi};
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Mock server admin URL, overriding settings
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build mocks from a fixture file and register them
    Deploy {
        /// Fixture file (YAML, or JSON with a .json extension)
        fixtures: PathBuf,

        /// Keep the mocks already registered on the server
        #[arg(long)]
        no_reset: bool,

        /// Also write the serialized mocks to this file
        #[arg(long)]
        dump: Option<PathBuf>,
    },
    /// Print the mocks a fixture file produces
    Render {
        fixtures: PathBuf,

        /// Show the calls and return slots inside multicall mocks
        #[arg(long)]
        decode: bool,
    },
    /// Drop every mock registered on the server
    Reset,
    /// List the exchanges fixtures can name
    Exchanges,
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Load settings under a bootstrap subscriber with the built-in filter,
/// since the configured one is only known afterwards
fn load_settings<W>(path: Option<&Path>, make_writer: W) -> Result<Settings>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_LOG_FILTER))
        .with_writer(make_writer)
        .finish();
    tracing::subscriber::with_default(bootstrap, || Settings::load(path))
        .context("Failed to load settings")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref(), std::io::stderr)?;
    if let Some(url) = args.url {
        settings.mock_server.url = url;
    }

    tracing_subscriber::registry()
        .with(env_filter(&settings.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Deploy {
            fixtures,
            no_reset,
            dump,
        } => deploy(&settings, fixtures, no_reset, dump).await,
        Command::Render { fixtures, decode } => render(fixtures, decode),
        Command::Reset => {
            let api = SmockerApi::new(&settings.mock_server.url);
            api.reset()
                .await
                .with_context(|| format!("Failed to reset {}", api.url()))
        }
        Command::Exchanges => {
            for exchange in Exchange::ALL {
                println!("{:<14} {:?}", exchange.name(), exchange.family());
            }
            Ok(())
        }
    }
}

fn builder_for(fixtures: &Path) -> Result<MocksBuilder> {
    let models = load_fixtures(fixtures)
        .with_context(|| format!("Failed to load fixtures from {:?}", fixtures))?;
    Ok(models
        .into_iter()
        .fold(MocksBuilder::new(), |builder, model| builder.add(model)))
}

async fn deploy(
    settings: &Settings,
    fixtures: PathBuf,
    no_reset: bool,
    dump: Option<PathBuf>,
) -> Result<()> {
    let mut builder = builder_for(&fixtures)?;
    if settings.mock_server.reset && !no_reset {
        builder = builder.reset();
    }
    if let Some(path) = dump.or_else(|| settings.output.dump_path.clone()) {
        builder = builder.debug(path);
    }

    let api = SmockerApi::new(&settings.mock_server.url);
    let count = builder
        .deploy(&api)
        .await
        .with_context(|| format!("Failed to deploy mocks to {}", api.url()))?;
    info!(mocks = count, url = %api.url(), "Deploy finished");
    Ok(())
}

fn render(fixtures: PathBuf, decode: bool) -> Result<()> {
    let mocks = builder_for(&fixtures)?.build()?;
    println!("{}", serde_json::to_string_pretty(&mocks)?);

    if decode {
        for (index, mock) in mocks.iter().enumerate() {
            if let Some(summary) = describe_multicall(mock)? {
                println!("# mock {}\n{}", index, summary);
            }
        }
    }
    Ok(())
}

/// Calls and return slots of a multicall mock, `None` for any other mock
fn describe_multicall(mock: &Mock) -> Result<Option<String>> {
    let selector = to_hex(&aggregate_selector());
    let needle = match &mock.request.body {
        Some(BodyMatcher::String(matcher)) if matcher.value.starts_with(&selector) => &matcher.value,
        _ => return Ok(None),
    };
    let calls = decode_multicall_args(&from_hex(needle)?)?;

    let mut lines = Vec::with_capacity(calls.len() * 2 + 1);
    for call in &calls {
        lines.push(format!("call   {:?} {}", call.target, to_hex(&call.call_data)));
    }

    if let Some(response) = mock.response.as_ref().filter(|r| !r.body.is_empty()) {
        let body: serde_json::Value = serde_json::from_str(&response.body)
            .context("Multicall mock body is not JSON")?;
        if let Some(result) = body["result"].as_str() {
            let (block, slots) = decode_multicall_response(&from_hex(result)?)?;
            lines.push(format!("block  {}", block));
            for slot in slots {
                lines.push(format!("return {}", to_hex(&slot)));
            }
        }
    }
    Ok(Some(lines.join("\n")))
}
