use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing::info;

use volc_auc::{
    AucClient, AucResource, ClientConfig, Credentials, srt_from_response,
    utils::{audio_source_from_file, audio_source_from_url},
    write_srt,
};

/// volc-auc - Volcengine BigASR audio file recognition client
#[derive(Parser, Debug)]
#[command(name = "volc-auc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Application id (X-Api-App-Key)
    app_id: String,

    /// Access token (X-Api-Access-Key)
    access_token: String,

    /// Publicly reachable URL of the audio file
    #[arg(required_unless_present = "file")]
    audio_url: Option<String>,

    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Upload a local audio file inline instead of passing a URL
    #[arg(long = "file", value_name = "PATH", conflicts_with = "audio_url")]
    file: Option<PathBuf>,

    /// Resource id, e.g. volc.bigasr.auc or volc.seedasr.auc
    #[arg(long = "resource-id", value_name = "ID")]
    resource_id: Option<String>,

    /// Model name sent in the request payload
    #[arg(long = "model", value_name = "NAME")]
    model: Option<String>,

    /// Delay between query calls in milliseconds
    #[arg(long = "poll-interval-ms", value_name = "MS")]
    poll_interval_ms: Option<u64>,

    /// Stop polling after this many seconds
    #[arg(long = "max-wait-secs", value_name = "SECS")]
    max_wait_secs: Option<u64>,

    /// Also write the result as an SRT subtitle file
    #[arg(long = "srt", value_name = "PATH")]
    srt: Option<PathBuf>,
}

impl Cli {
    /// Load file and environment settings, apply flags, then validate once.
    fn resolve_config(&self) -> anyhow::Result<ClientConfig> {
        if let Some(config_path) = &self.config {
            info!("Loading configuration from {}", config_path.display());
        }
        let mut config =
            ClientConfig::load(self.config.as_deref()).map_err(|e| anyhow!(e.to_string()))?;
        self.apply_overrides(&mut config);
        config.validate().map_err(|e| anyhow!(e))?;
        Ok(config)
    }

    /// Command-line flags take priority over YAML and environment values.
    fn apply_overrides(&self, config: &mut ClientConfig) {
        if let Some(resource_id) = &self.resource_id {
            config.resource = AucResource::from_str_or_custom(resource_id);
        }
        if let Some(model) = &self.model {
            config.recognition.model_name = model.clone();
        }
        if let Some(interval) = self.poll_interval_ms {
            config.poll_interval_ms = interval;
        }
        if let Some(max_wait) = self.max_wait_secs {
            config.max_wait_secs = Some(max_wait);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.resolve_config()?;

    let policy = config.poll_policy();
    let credentials = Credentials::new(cli.app_id.as_str(), cli.access_token.as_str());
    let client = AucClient::new(config, credentials)?;

    let audio = match (&cli.file, &cli.audio_url) {
        (Some(path), _) => audio_source_from_file(path).await?,
        (None, Some(url)) => audio_source_from_url(url)?,
        (None, None) => return Err(anyhow!("Either an audio URL or --file is required")),
    };

    let result = client.transcribe(&audio, &policy).await?;
    println!("{}", result.body);
    println!("SUCCESS!");

    if let Some(srt_path) = &cli.srt {
        let srt = srt_from_response(&result.parse()?)?;
        write_srt(srt_path, &srt).await?;
    }

    Ok(())
}
