pub mod applications;
pub mod blogs;
pub mod contact;

use std::sync::Arc;

use agentpath_kernel::ModuleRegistry;
use agentpath_mailer::Mailer;
use agentpath_store::SharedStore;

/// Shared dependencies handed to modules at registration time.
pub struct ModuleDeps {
    pub store: SharedStore,
    pub mailer: Option<Arc<Mailer>>,
}

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, deps: &ModuleDeps) {
    registry.register(blogs::create_module(deps.store.clone()));
    registry.register(applications::create_module(
        deps.store.clone(),
        deps.mailer.clone(),
    ));
    registry.register(contact::create_module(deps.mailer.clone()));
}
