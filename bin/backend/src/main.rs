//! Backend Binary
//!
//! Accounts, score history, and live tables in one server.
//! Runs on BIND_ADDR (default 0.0.0.0:8888) against DB_URL.

#[tokio::main]
async fn main() -> std::io::Result<()> {
    flippy_core::log();
    flippy_core::kys();
    flippy_server::run().await
}
