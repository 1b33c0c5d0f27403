//! 命令行入口：翻译一段短文本并输出结果

use std::process::ExitCode;

use clap::Parser;
use pollyglot::logging;
use pollyglot::translation::{
    ConfigManager, TranslationError, TranslationRequest, TranslationResolver,
};

#[derive(Parser, Debug)]
#[command(name = "pollyglot")]
#[command(about = "Translate short text with an AI model, falling back to an offline dictionary", version)]
struct Args {
    /// Target language (French, Spanish, Japanese or any label the model understands)
    #[arg(short, long, default_value = "French")]
    to: String,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,

    /// Never call the remote model
    #[arg(long)]
    offline: bool,

    /// Text to translate; multiple words are joined with spaces
    #[arg(required = true)]
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    ConfigManager::load_dotenv();
    logging::init();

    let resolver = if args.offline {
        TranslationResolver::offline()
    } else {
        TranslationResolver::from_config(&ConfigManager::load_or_default())
    };

    let request = TranslationRequest::new(args.text.join(" "), args.to);

    match resolver.resolve(&request).await {
        Ok(result) => {
            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", result.translation);
                if result.mode.is_degraded() {
                    eprintln!("[{}] {}", result.mode.as_str(), result.note.as_deref().unwrap_or_default());
                }
            }
            ExitCode::SUCCESS
        }
        Err(e @ TranslationError::InvalidRequest(_)) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
