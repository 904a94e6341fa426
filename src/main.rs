use std::sync::Arc;

use anyhow::Context;

use agentpath_app::modules::{self, ModuleDeps};
use agentpath_kernel::settings::{Settings, StoreBackend};
use agentpath_kernel::{InitCtx, ModuleRegistry};
use agentpath_mailer::Mailer;
use agentpath_store::{DisabledStore, MemoryStore, SharedStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load AgentPath settings")?;
    agentpath_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        store = ?settings.database.backend,
        "agentpath bootstrap starting"
    );

    let store: SharedStore = match settings.database.backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Disabled => {
            tracing::warn!("content store disabled; blog and application persistence is off");
            Arc::new(DisabledStore::new())
        }
    };

    let mailer = Mailer::from_settings(&settings.email).map(Arc::new);
    if mailer.is_none() {
        tracing::warn!("email API key not configured; notifications disabled");
    }

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &ModuleDeps { store, mailer });

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("agentpath bootstrap complete");

    agentpath_http::start_server(&registry, &settings).await?;

    registry.stop_all().await?;
    Ok(())
}
