use anyhow::Result;

use super::load_app_config;
use crate::config::ResolveOptions;
use crate::panel::PanelSession;
use crate::translation::MyMemoryClient;

pub async fn run_panel(options: &ResolveOptions) -> Result<()> {
    let config = load_app_config(options)?;
    let client = MyMemoryClient::new(config.endpoint.clone());
    let session = PanelSession::new(config, client);
    session.run().await
}
