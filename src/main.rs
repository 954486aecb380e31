#[tokio::main]
async fn main() -> anyhow::Result<()> {
    triage::run::run().await
}
