use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use kokoro_tts_client::client::TtsClient;
use kokoro_tts_client::config::Config;
use kokoro_tts_client::error::AppError;
use kokoro_tts_client::form::{self, FormState, Step};

#[tokio::main]
async fn main() {
    // Initialize logging; stdout belongs to the form
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    tracing::info!("Kokoro TTS client v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("TTS service: {}", config.api_base_url);

    let client = TtsClient::new(config.api_base_url);
    let mut state = FormState::default();

    println!("{}\n", form::render::HELP);
    println!("{}", form::render::form(&state, client.api_base_url()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match state.handle(&client, form::parser::parse(&line)).await {
            Ok(Step::Continue(message)) if message.is_empty() => {}
            Ok(Step::Continue(message)) => println!("{}", message),
            Ok(Step::Quit) => break,
            Err(e) => {
                tracing::debug!("Command failed: {:?}", e);
                println!("{}", e);
            }
        }
    }

    Ok(())
}
