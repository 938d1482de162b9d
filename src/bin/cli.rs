use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    todolists::cli::run().await?;
    Ok(())
}
