use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::{api, config::ServerConfig, store::Store};

#[derive(Parser)]
#[command(name = "todo-api")]
#[command(about = "In-memory todo list served over a JSON HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (the default when no command is given)
    Serve {
        /// Port for HTTP API [env: PORT, default: 3000]
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind [env: TODO_API_HOST, default: 0.0.0.0]
        #[arg(long)]
        host: Option<IpAddr>,

        /// Directory of static front-end assets [env: TODO_API_STATIC_DIR, default: public]
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Don't serve the built-in todo page at `/`
        #[arg(long)]
        no_index: bool,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "todo_api=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = ServerConfig::from_env();
    if let Some(Commands::Serve {
        port,
        host,
        static_dir,
        no_index,
    }) = cli.command
    {
        if let Some(port) = port {
            config = config.with_port(port);
        }
        if let Some(host) = host {
            config = config.with_host(host);
        }
        if let Some(dir) = static_dir {
            config = config.with_static_dir(dir);
        }
        if no_index {
            config = config.with_embedded_index(false);
        }
    }

    serve(config).await
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    tracing::info!("Starting todo server on port {}", config.port);

    let store = Store::new();
    let app = api::create_app(store, &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        "Todo server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
