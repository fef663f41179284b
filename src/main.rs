use dotenv::dotenv;

use localstack_gateway::api::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    server::run_server().await
}
