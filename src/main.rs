use clap::Parser;
use trivia_api::{db::Db, names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL. The file is created if it does not exist.
    #[arg(long, env, default_value = "sqlite://trivia.db")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    address: String,

    /// Insert the default categories when the catalog is empty.
    #[arg(long, env)]
    seed: bool,

    /// Fixed seed for quiz question selection.
    #[arg(long, env)]
    quiz_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tower_http=debug,trivia_api=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    if args.seed {
        db.seed_categories(names::DEFAULT_CATEGORIES).await?;
    }

    let routes = trivia_api::router(AppState::new(db, args.quiz_seed));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, routes).await?;

    Ok(())
}
