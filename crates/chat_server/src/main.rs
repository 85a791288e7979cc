use clap::Parser;
use std::io;

use chat_server::logging::init_logging;
use chat_server::{run_server, ServerConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "menu-chat-server")]
#[command(about = "Chat backend for the menu chat widget")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "8000")]
    port: u16,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "LLM_BASE_URL", default_value = "https://api.openai.com/v1")]
    llm_base_url: String,

    /// LLM model name
    #[arg(long, env = "LLM_MODEL", default_value = "gpt-4o-mini")]
    model: String,

    /// LLM API key
    #[arg(long, env = "LLM_API_KEY", default_value = "")]
    api_key: String,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    log::info!("Starting menu chat server on port {}", cli.port);
    if cli.api_key.is_empty() {
        log::warn!("LLM_API_KEY is empty; upstream requests will likely be rejected");
    }

    run_server(ServerConfig {
        host: cli.host,
        port: cli.port,
        llm_base_url: cli.llm_base_url,
        model: cli.model,
        api_key: cli.api_key,
    })
    .await
}
