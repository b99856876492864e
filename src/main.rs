use anyhow::Result;
use clap::{Parser, Subcommand};
use kisanmitra::app::App;
use kisanmitra::assistant::detect_language;
use kisanmitra::image::ImageInput;
use kisanmitra::models::{Config, Language};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "kisanmitra")]
#[command(about = "Farming assistant: Gemini chat, crop diagnosis and mock farm data")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ask the farming assistant a question.
    Chat {
        message: String,
        /// UI language (en, hi, te). Detected from the message when omitted.
        #[arg(long)]
        lang: Option<String>,
    },
    /// Diagnose a cotton plant photo.
    Diagnose {
        image: PathBuf,
        #[arg(long, default_value = "en", value_parser = parse_language_arg)]
        lang: Language,
    },
    /// Print the detected language of a text.
    DetectLanguage { text: String },
    /// Report whether Gemini is configured and reachable.
    Status,
    SendOtp { phone: String },
    VerifyOtp { phone: String, otp: String },
    Weather {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    News,
    /// Run the mock disease detector on an image.
    DetectDisease { image: PathBuf },
}

fn parse_language_arg(input: &str) -> std::result::Result<Language, String> {
    input.parse()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(app: &App, command: Command) -> Result<()> {
    match command {
        Command::Chat { message, lang } => print_json(&app.chat(&message, lang.as_deref()).await),
        Command::Diagnose { image, lang } => print_json(&app.diagnose(&image, lang).await?),
        Command::DetectLanguage { text } => {
            println!("{}", detect_language(&text));
            Ok(())
        }
        Command::Status => print_json(&app.status().await),
        Command::SendOtp { phone } => print_json(&app.backend().send_otp(&phone).await?),
        Command::VerifyOtp { phone, otp } => {
            print_json(&app.backend().verify_otp(&phone, &otp).await?)
        }
        Command::Weather { lat, lon } => print_json(&app.backend().fetch_weather(lat, lon).await?),
        Command::News => print_json(&app.backend().get_news().await?),
        Command::DetectDisease { image } => {
            let image = ImageInput::from_path(&image).await?;
            print_json(&app.backend().detect_disease(&image).await?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kisanmitra=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::from_config(&config);
    match run(&app, args.command).await {
        Ok(()) => {
            info!("Done");
            Ok(())
        }
        Err(e) => {
            error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}
