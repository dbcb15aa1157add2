// Dweve Cardfile - Indentation-Structured Reflection Format
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Name-keyed cache of lazily loaded shared resources.
//!
//! The map is guarded by a mutex only long enough to find or insert the
//! entry; loading happens outside the map lock, serialized per key by the
//! entry's `OnceCell`. Concurrent requests for the same key run the loader
//! once and share the result.

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

type Slot<V> = Arc<OnceCell<Arc<V>>>;

/// Lazily loaded resources shared behind `Arc` handles.
///
/// # Examples
///
/// ```
/// use cardfile_core::ResourceCache;
///
/// let cache: ResourceCache<Vec<String>> = ResourceCache::new();
/// let words = cache.get_or_load("en_us", |name| vec![name.to_string()]);
/// let again = cache.get_or_load("en_us", |_| unreachable!());
/// assert!(std::sync::Arc::ptr_eq(&words, &again));
/// ```
pub struct ResourceCache<V> {
    entries: Mutex<HashMap<String, Slot<V>>>,
}

impl<V> Default for ResourceCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for ResourceCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceCache")
            .field("entries", &self.entries.lock().len())
            .finish()
    }
}

impl<V> ResourceCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, key: &str) -> Slot<V> {
        let mut entries = self.entries.lock();
        entries
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }

    /// Get the resource for `key`, loading it on first use.
    pub fn get_or_load<F>(&self, key: &str, load: F) -> Arc<V>
    where
        F: FnOnce(&str) -> V,
    {
        self.slot(key)
            .get_or_init(|| Arc::new(load(key)))
            .clone()
    }

    /// Get the resource for `key`, loading it on first use.
    ///
    /// A failed load is not cached; the next request tries again.
    pub fn get_or_try_load<F, E>(&self, key: &str, load: F) -> Result<Arc<V>, E>
    where
        F: FnOnce(&str) -> Result<V, E>,
    {
        let slot = self.slot(key);
        match slot.get_or_try_init(|| load(key).map(Arc::new)) {
            Ok(value) => Ok(value.clone()),
            Err(err) => {
                self.forget_empty(key, &slot);
                Err(err)
            }
        }
    }

    /// Drop `slot` from the map if it is still the entry for `key` and empty.
    fn forget_empty(&self, key: &str, slot: &Slot<V>) {
        let mut entries = self.entries.lock();
        let stale = entries
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && current.get().is_none());
        if stale {
            entries.remove(key);
        }
    }

    /// The resource for `key` if it is already loaded.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let entries = self.entries.lock();
        entries.get(key).and_then(|slot| slot.get().cloned())
    }

    /// True if the resource for `key` is loaded.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of loaded resources.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock();
        entries.values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all resources. Handles already given out stay valid.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
