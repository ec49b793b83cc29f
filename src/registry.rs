use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::Error;
use crate::hasher::{self, Hash64, Hasher};
use crate::native::NativeHasher;

/// A read-only table binding algorithm names to singleton [`Hasher`]s.
///
/// Names are case-sensitive and matched exactly. Each binding is a
/// singleton: every lookup of a name returns a handle to the same hasher
/// instance. A registry is built once, through [`builder`](Self::builder),
/// and never mutated afterward; [`standard`](Self::standard) exposes the
/// process-wide table of standard algorithms.
pub struct HasherRegistry {
    table: HashMap<String, Arc<dyn Hasher>>,
}

/// Accumulates bindings for a [`HasherRegistry`].
pub struct RegistryBuilder {
    table: HashMap<String, Arc<dyn Hasher>>,
}

impl HasherRegistry {
    /// Starts an empty registry table.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            table: HashMap::new(),
        }
    }

    /// The process-wide registry of standard algorithms, populated exactly
    /// once on first access.
    ///
    /// Bound names: `MD5`, `SHA1`, `SHA256` (digest-backed, producing
    /// 128/160/256-bit byte-sequence values) and `MURMUR3`, `XX`, `CITY`,
    /// `FARM_NA`, `FARM_UO` (bundled, producing packed 64-bit values).
    pub fn standard() -> &'static HasherRegistry {
        static STANDARD: Lazy<HasherRegistry> = Lazy::new(|| {
            standard_table().expect("the standard algorithm table is well-formed")
        });
        &STANDARD
    }

    /// Looks up the singleton hasher bound to `name`.
    ///
    /// Returns [`Error::UnknownAlgorithm`] when no binding exists.
    pub fn for_name(&self, name: &str) -> Result<Arc<dyn Hasher>, Error> {
        self.table
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownAlgorithm {
                name: name.to_string(),
            })
    }

    /// The registered algorithm names, in no particular order.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl RegistryBuilder {
    /// Binds `name` to `hasher`.
    ///
    /// Returns [`Error::IllegalState`] if the name is already bound.
    pub fn register(
        mut self,
        name: impl Into<String>,
        hasher: impl Hasher + 'static,
    ) -> Result<RegistryBuilder, Error> {
        let name = name.into();
        if self.table.contains_key(&name) {
            return Err(Error::IllegalState {
                reason: format!("algorithm {name:?} is already registered"),
            });
        }
        self.table.insert(name, Arc::new(hasher));
        Ok(self)
    }

    /// Finalizes the table.
    pub fn build(self) -> HasherRegistry {
        HasherRegistry { table: self.table }
    }
}

fn standard_table() -> Result<HasherRegistry, Error> {
    let registry = HasherRegistry::builder()
        .register("MD5", NativeHasher::new("MD5")?)?
        .register("SHA1", NativeHasher::new("SHA-1")?)?
        .register("SHA256", NativeHasher::new("SHA-256")?)?
        .register("MURMUR3", Hash64::new("MURMUR3", hasher::murmur3_64))?
        .register("XX", Hash64::new("XX", hasher::xx64))?
        .register("CITY", Hash64::new("CITY", hasher::city64))?
        .register("FARM_NA", Hash64::new("FARM_NA", hasher::farm_na64))?
        .register("FARM_UO", Hash64::new("FARM_UO", hasher::farm_uo64))?
        .build();
    debug!(
        algorithms = registry.table.len(),
        "standard hasher registry populated"
    );
    Ok(registry)
}
