use anyhow::{bail, Context};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use bizdir::{BizdirConfig, DirectoryService};

const USAGE: &str = "usage: bizdir <list <user-id> | delete <business-id> | events <business-id>>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn").add_directive("bizdir=info".parse().unwrap())
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, id) = match args.as_slice() {
        [command, id] => (command.as_str(), id.as_str()),
        _ => bail!(USAGE),
    };
    let id: Uuid = id.parse().with_context(|| format!("invalid id: {}", id))?;

    let config = BizdirConfig::from_env()?;
    let service = DirectoryService::from_config(&config)?;

    match command {
        "list" => {
            let businesses = service.list_businesses(id).await?;
            println!("{}", serde_json::to_string_pretty(&businesses)?);
        }
        "delete" => {
            let outcome = service.delete_business(id).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        "events" => {
            let events = service.list_events(id).await?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
