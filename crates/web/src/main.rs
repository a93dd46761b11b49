use cards_web::{server, ServerConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = ServerConfig::from_env()?;
    server::run(&config)
}
