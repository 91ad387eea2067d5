use topspot::{config, error, management::SessionStore, server};

#[tokio::main]
async fn main() {
    config::load_env();

    if let Err(e) = config::require_credentials() {
        error!("Cannot load credentials. Err: {}", e);
    }

    let sessions = SessionStore::new();
    server::start_server(sessions).await;
}
