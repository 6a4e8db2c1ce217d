use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    cart_client::run().await
}
