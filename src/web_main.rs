//! Web 服务器主程序入口

use clap::Parser;
use pollyglot::env::{generate_env_docs, EnvConfig};
use pollyglot::logging;
use pollyglot::translation::{ConfigManager, TranslationResolver};
use pollyglot::web::{WebConfig, WebServer};

#[derive(Parser, Debug)]
#[command(name = "pollyglot-web")]
#[command(about = "PollyGlot translation web server", version)]
struct Args {
    /// Bind address [env: POLLYGLOT_BIND_ADDRESS, default: 0.0.0.0]
    #[arg(short, long)]
    bind: Option<String>,

    /// Port number [env: PORT, default: 4321]
    #[arg(short, long)]
    port: Option<u16>,

    /// Never call the remote model
    #[arg(long)]
    offline: bool,

    /// Print the environment variable reference and exit
    #[arg(long)]
    env_docs: bool,

    /// Write an example configuration file to PATH and exit
    #[arg(long, value_name = "PATH")]
    generate_config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.env_docs {
        print!("{}", generate_env_docs());
        return Ok(());
    }
    if let Some(path) = args.generate_config {
        ConfigManager::generate_example_config(&path)?;
        println!("已生成示例配置: {}", path);
        return Ok(());
    }

    ConfigManager::load_dotenv();
    logging::init();
    match EnvConfig::from_env() {
        Ok(env_config) => env_config.print_summary(),
        Err(e) => tracing::warn!("环境变量配置有误: {}", e),
    }

    let config = ConfigManager::load_or_default();

    let resolver = if args.offline {
        TranslationResolver::offline()
    } else {
        TranslationResolver::from_config(&config)
    };

    let mut web_config = WebConfig::default();
    if let Some(bind) = args.bind {
        web_config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        web_config.port = port;
    }
    web_config.validate()?;

    let server = WebServer::new(web_config, resolver);
    server.start().await?;

    Ok(())
}
