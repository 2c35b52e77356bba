use anyhow::Result;
use clap::{Parser, Subcommand};

/// foodgram - recipes and shopping lists
#[derive(Parser)]
#[command(name = "foodgram")]
#[command(about = "Recipe sharing backend with shopping list export", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Print an access token for an existing user
    Token {
        /// User identifier
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = foodgram::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    foodgram::observability::init_observability(
        "foodgram",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => foodgram::cli::serve(config, host, port).await,
        Commands::Migrate => foodgram::cli::migrate(config).await,
        Commands::Reset => foodgram::cli::reset(config).await,
        Commands::Token { user_id } => foodgram::cli::token(config, user_id).await,
    }
}
