use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordgpt::options::JsonFileBackend;
use wordgpt::{config, ConfigKey, ConfigStore, Editor, GenerationClient, Note, Notifier, Outcome};

/// wordgpt - fill flashcard backs with generated definitions
#[derive(Parser)]
#[command(name = "wordgpt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate definitions, synonyms and examples for flashcard notes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate back-field content for a word
    Generate {
        /// The word on the card's front
        word: String,

        /// Current back-field content, kept if generation fails
        #[arg(long, default_value = "")]
        back: String,
    },

    /// Inspect or change the content options
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current options
    Show,

    /// Change one option
    Set {
        /// include_synonyms or include_examples
        key: ConfigKey,

        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },

    /// Restore the default options
    Reset,
}

/// Shows notices on stderr
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[tokio::main]
async fn main() -> miette::Result<ExitCode> {
    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordgpt=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!("Starting WordGPT");

    // Load configuration
    let config = config::load_config()?;
    let store = ConfigStore::new(JsonFileBackend::new(&config.config_path));

    match cli.command {
        Commands::Generate { word, back } => {
            let client = GenerationClient::new(&config.service_url)?;
            let notifier = ConsoleNotifier;
            let editor = Editor::new(&store, &client, &notifier);

            let mut note = Note::new(word, back);
            match editor.generate(&mut note).await {
                Outcome::Succeeded(content) => {
                    println!("{}", content);
                    Ok(ExitCode::SUCCESS)
                }
                Outcome::Aborted | Outcome::Failed(_) => Ok(ExitCode::FAILURE),
            }
        }
        Commands::Settings { action } => {
            let saved = match action {
                SettingsAction::Show => true,
                SettingsAction::Set { key, value } => store.update_config(key, value),
                SettingsAction::Reset => store.restore_defaults(),
            };

            let current = store.get_config();
            for key in ConfigKey::ALL {
                println!("{} = {}", key, current.get(key));
            }

            if saved {
                Ok(ExitCode::SUCCESS)
            } else {
                warn!("Options could not be saved to {:?}", config.config_path);
                eprintln!("Could not save options.");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
