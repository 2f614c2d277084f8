use harmony_wheel::api::run_api_server;
use harmony_wheel::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run_api_server(Config::from_env()).await
}
