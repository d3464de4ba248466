use dishes::server::{error::Error, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = startup::run().await {
        match e {
            Error::ConfigError(e) => tracing::error!("Configuration error: {}", e),
            Error::DbErr(e) => tracing::error!("Database error: {}", e),
            e => tracing::error!("Server error: {}", e),
        }
        std::process::exit(1);
    }
}
