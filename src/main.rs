use clap::Parser;
use sevalla_mcp::config::Config;
use sevalla_mcp::constants::server::NAME;

#[derive(Parser)]
#[command(
    name = "sevalla-mcp",
    version,
    about = "MCP server exposing the Sevalla cloud hosting API as tools over stdio",
    after_help = "Environment variables:\n  SEVALLA_API_KEY     API key used as the bearer token (required)\n  SEVALLA_COMPANY_ID  Company the tools operate on (required)\n  SEVALLA_API_URL     Override for the API base URL\n  LOG_LEVEL           error | warn | info | debug (default: info)"
)]
struct Cli {}

#[tokio::main]
async fn main() {
    Cli::parse();
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {}", NAME, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = sevalla_mcp::mcp::server::run_stdio(&config).await {
        eprintln!("{}: {}", NAME, err);
        std::process::exit(1);
    }
}
