//! Tally server binary.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tally_server::init_tracing();
    tally_server::run().await
}
