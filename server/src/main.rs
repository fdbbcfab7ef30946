use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use server::{AppConfig, Environment};

#[derive(Parser)]
#[command(name = "wellness-portal")]
#[command(about = "Wellness portal with YouTube video search", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve {
        /// Address to listen on, overrides BIND_ADDR
        #[arg(long)]
        bind: Option<SocketAddr>,

        /// development, production or testing; overrides APP_ENV
        #[arg(long = "env")]
        environment: Option<String>,
    },
    /// Quick liveness check
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve {
        bind: None,
        environment: None,
    });

    match command {
        Command::Ping => {
            println!("{}", server::ping());
            Ok(())
        }
        Command::Serve { bind, environment } => {
            let environment = environment.as_deref().map(Environment::from_name);
            let mut config = AppConfig::from_env(environment)?;
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }

            server::logging::init(config.environment);
            tracing::debug!(?config, "Loaded configuration");

            server::serve(config).await
        }
    }
}
