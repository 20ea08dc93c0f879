use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::ShippingProvider;

/// Carrier name to adapter mapping.
///
/// Filled during startup through `&mut self`, then only read. Registering a second adapter
/// under an existing name replaces the first one.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn ShippingProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the adapter that was replaced, if any.
    pub fn register(
        &mut self,
        provider: Arc<dyn ShippingProvider>,
    ) -> Option<Arc<dyn ShippingProvider>> {
        let name = provider.provider_name().to_string();
        self.providers.insert(name, provider)
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn ShippingProvider>> {
        self.providers.get(name).cloned()
    }

    /// Point-in-time copy of every registered adapter, used to fan out a broadcast.
    pub fn snapshot(&self) -> Vec<(String, Arc<dyn ShippingProvider>)> {
        self.providers
            .iter()
            .map(|(name, provider)| (name.clone(), Arc::clone(provider)))
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}
