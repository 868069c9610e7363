use std::collections::BTreeMap;
use std::sync::Arc;

use crate::assets::file::ImageFile;

/// Identifier of one allocated handle; never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct HandleId(pub(crate) u64);

/// Lightweight displayable reference to image bytes held by a [`BlobStore`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ImageHandle {
    /// Registry key.
    pub id: HandleId,
    /// Temporary URL the renderer can load while the handle is live.
    pub url: String,
    /// MIME type reported for the file.
    pub mime: &'static str,
    /// Size of the wrapped bytes.
    pub byte_len: usize,
}

/// Running totals, mostly useful for leak checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlobStats {
    /// Handles ever created.
    pub created: u64,
    /// Handles ever released.
    pub released: u64,
}

/// Registry of live handle allocations, keyed by handle id.
#[derive(Debug, Default)]
pub struct BlobStore {
    next_id: u64,
    live: BTreeMap<HandleId, Arc<[u8]>>,
    stats: BlobStats,
}

impl BlobStore {
    /// Prefix of every handle url.
    pub const URL_SCHEME: &'static str = "blob:raven-portal/";

    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a handle wrapping the file's bytes.
    pub fn create(&mut self, file: &ImageFile) -> ImageHandle {
        let id = HandleId(self.next_id);
        self.next_id += 1;
        self.live.insert(id, file.shared_bytes());
        self.stats.created += 1;

        let handle = ImageHandle {
            id,
            url: format!("{}{:08x}", Self::URL_SCHEME, id.0),
            mime: file.mime_type(),
            byte_len: file.len(),
        };
        tracing::debug!(url = %handle.url, name = file.name(), bytes = handle.byte_len, "handle created");
        handle
    }

    /// Free a handle's allocation. Untracked ids are a no-op returning `false`.
    pub fn release(&mut self, id: HandleId) -> bool {
        if self.live.remove(&id).is_none() {
            tracing::trace!(?id, "release of untracked handle ignored");
            return false;
        }
        self.stats.released += 1;
        tracing::debug!(?id, "handle released");
        true
    }

    /// Release every live handle exactly once; returns how many were freed.
    pub fn release_all(&mut self) -> usize {
        let ids: Vec<HandleId> = self.live.keys().copied().collect();
        ids.into_iter().filter(|id| self.release(*id)).count()
    }

    /// `true` until `id` is released.
    pub fn is_live(&self, id: HandleId) -> bool {
        self.live.contains_key(&id)
    }

    /// Number of unreleased handles.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Bytes behind a live handle.
    pub fn bytes(&self, id: HandleId) -> Option<&[u8]> {
        self.live.get(&id).map(|b| &b[..])
    }

    /// Created/released totals.
    pub fn stats(&self) -> BlobStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/blob.rs"]
mod tests;
