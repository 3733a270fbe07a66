//! Development server command.

use anyhow::Result;
use glimpse_server::{DevServer, DevServerConfig};

use crate::config::ConfigFile;

/// Run the dev server.
pub async fn run(config: ConfigFile, port: Option<u16>, open: bool) -> Result<()> {
    let port = port.unwrap_or(config.server.port);
    tracing::info!("Starting development server on port {}", port);

    let server_config = DevServerConfig {
        project_dir: config.project.dir.clone(),
        port,
        host: config.server.host.clone(),
        open,
        bundle: config.bundle_config(),
    };

    DevServer::new(server_config).start().await?;

    Ok(())
}
