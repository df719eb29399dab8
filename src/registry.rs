//! Interning registry for reference values.
//!
//! Parsing the same refid repeatedly should hand back the same shared
//! value rather than rebuilding it. The registry keys interned references
//! by their canonical refid and runs the builder at most once per key.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::refs::{Reference, ReferenceError};

#[derive(Default)]
pub struct ReferenceRegistry {
    cache: Mutex<HashMap<String, Arc<Reference>>>,
}

impl ReferenceRegistry {
    pub fn new() -> ReferenceRegistry {
        ReferenceRegistry::default()
    }

    /// Look up REFID, building and caching the reference on first use. The
    /// builder's error is returned as-is and nothing is cached for it.
    pub fn intern<F>(&self, refid: &str, build: F) -> Result<Arc<Reference>, ReferenceError>
    where
        F: FnOnce() -> Result<Reference, ReferenceError>,
    {
        let mut cache = self.cache.lock();
        if let Some(existing) = cache.get(refid) {
            return Ok(Arc::clone(existing));
        }
        let built = Arc::new(build()?);
        cache.insert(refid.to_string(), Arc::clone(&built));
        Ok(built)
    }

    /// A cached reference for REFID, if one was interned before.
    pub fn get(&self, refid: &str) -> Option<Arc<Reference>> {
        self.cache.lock().get(refid).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}
