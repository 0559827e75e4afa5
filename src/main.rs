#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    proffy_classes::run().await
}
