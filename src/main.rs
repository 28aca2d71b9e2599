use tokio::net::TcpListener;

use chapterhouse::config::Config;
use chapterhouse::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chapterhouse=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();
    print_banner(&config);

    let state = AppState::new(&config);
    tracing::info!(
        shared = state.policy.shared_pages.len(),
        exec_only = state.policy.exec_pages.len(),
        chairs = state.policy.chair_pages.len(),
        "dashboard access table loaded"
    );

    let app = chapterhouse::routes::router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("failed to bind");

    let actual_port = listener
        .local_addr()
        .expect("failed to get local address")
        .port();
    eprintln!("  \x1b[32m→ listening on 0.0.0.0:{actual_port}\x1b[0m");
    eprintln!();

    axum::serve(listener, app).await.expect("server error");
}

fn print_banner(config: &Config) {
    let version = env!("CARGO_PKG_VERSION");

    eprintln!();
    eprintln!("  \x1b[1;36mchapterhouse\x1b[0m \x1b[2mv{version}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mport\x1b[0m         {}", config.port);
    eprintln!(
        "  \x1b[2mpage limit\x1b[0m   {} (max {})",
        config.pagination.default_limit, config.pagination.max_limit
    );
    eprintln!();
}
