use reqwest::Client;
use server::config::Config;

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Start a fresh server with its own game on an ephemeral port.
/// Returns the base URL, e.g. `http://127.0.0.1:49152`.
pub async fn spawn_app() -> String {
    spawn_app_with(Config::default()).await
}

pub async fn spawn_app_with(config: Config) -> String {
    let game = server::new_game(&config);
    let app = server::router(game, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    format!("http://{addr}")
}

/// Build a URL for an API endpoint.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
