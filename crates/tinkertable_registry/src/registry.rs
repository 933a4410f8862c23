//! The field registry: lazy discovery, cached lookup, explicit invalidation.

use tracing::{info, warn};

use crate::binding::{FieldBinding, FieldSpec};

/// A host object that offers console fields.
///
/// Implemented by whatever owns the variables (a game system, a settings
/// struct, a test fixture). Providers are polled once per discovery; the
/// specs they return are turned into cached [`FieldBinding`]s.
pub trait FieldProvider {
    /// The fields this provider currently offers.
    fn fields(&self) -> Vec<FieldSpec>;
}

/// Registry of console fields across all providers.
///
/// Lookup is lazy: the first [`resolve`](Self::resolve) (or
/// [`discover`](Self::discover)) walks every provider, snapshots initial
/// values, and caches the bindings in discovery order. The cache survives
/// until [`invalidate`](Self::invalidate), which the host should call when
/// the set of live objects changes (scene loads, reloads).
#[derive(Default)]
pub struct FieldRegistry {
    providers: Vec<Box<dyn FieldProvider>>,
    cache: Option<Vec<FieldBinding>>,
    rejected: Vec<String>,
}

impl FieldRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider and invalidates the cache so the next lookup sees
    /// its fields.
    pub fn add_provider(&mut self, provider: impl FieldProvider + 'static) {
        self.providers.push(Box::new(provider));
        self.invalidate();
    }

    /// Builds the binding cache if it does not exist, returning the cached
    /// bindings in discovery order.
    ///
    /// Duplicate names are rejected loudly: the first registration wins,
    /// later ones are dropped with a warning and recorded in
    /// [`rejected_names`](Self::rejected_names).
    pub fn discover(&mut self) -> &[FieldBinding] {
        if self.cache.is_none() {
            let mut bindings: Vec<FieldBinding> = Vec::new();
            let mut rejected = Vec::new();

            for provider in &self.providers {
                for spec in provider.fields() {
                    if bindings.iter().any(|b| b.name() == spec.name()) {
                        warn!(name = spec.name(), "duplicate variable name rejected");
                        rejected.push(spec.name().to_string());
                        continue;
                    }
                    bindings.push(FieldBinding::from_spec(spec));
                }
            }

            info!(
                bindings = bindings.len(),
                rejected = rejected.len(),
                "console field discovery complete"
            );
            self.cache = Some(bindings);
            self.rejected = rejected;
        }

        self.cache.as_deref().unwrap_or_default()
    }

    /// Looks up a binding by variable name, triggering discovery if needed.
    pub fn resolve(&mut self, name: &str) -> Option<&FieldBinding> {
        self.discover();
        self.cache
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|b| b.name() == name)
    }

    /// All variable names in discovery order.
    pub fn names(&mut self) -> Vec<String> {
        self.discover()
            .iter()
            .map(|b| b.name().to_string())
            .collect()
    }

    /// Names rejected as duplicates during the last discovery.
    #[must_use]
    pub fn rejected_names(&self) -> &[String] {
        &self.rejected
    }

    /// Clears the cache; the next lookup rescans every provider and takes
    /// fresh initial-value snapshots.
    pub fn invalidate(&mut self) {
        self.cache = None;
        self.rejected.clear();
    }

    /// Number of cached bindings.
    pub fn binding_count(&mut self) -> usize {
        self.discover().len()
    }

    /// True if no provider offers any field.
    pub fn is_empty(&mut self) -> bool {
        self.binding_count() == 0
    }
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRegistry")
            .field("providers", &self.providers.len())
            .field("cached", &self.cache.as_ref().map(Vec::len))
            .field("rejected", &self.rejected)
            .finish()
    }
}
