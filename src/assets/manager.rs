use crate::assets::blob::{BlobStore, ImageHandle};
use crate::assets::file::ImageFile;
use crate::foundation::core::Slot;

/// Per-slot user substitutions; `None` means the fallback asset is shown.
#[derive(Debug, Default)]
pub struct SlotMap {
    source: Option<ImageHandle>,
    target: Option<ImageHandle>,
}

impl SlotMap {
    /// Handle substituted into `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<&ImageHandle> {
        match slot {
            Slot::Source => self.source.as_ref(),
            Slot::Target => self.target.as_ref(),
        }
    }

    fn entry(&mut self, slot: Slot) -> &mut Option<ImageHandle> {
        match slot {
            Slot::Source => &mut self.source,
            Slot::Target => &mut self.target,
        }
    }
}

/// Image a slot currently displays.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedImage {
    /// Handle url or fallback asset path.
    pub url: String,
    /// Accessible description of the slot.
    pub alt: &'static str,
    /// `true` when the url points at a user-supplied handle.
    pub custom: bool,
}

/// Keeps at most one live handle per slot.
#[derive(Debug, Default)]
pub struct ImageResourceManager {
    slots: SlotMap,
    blobs: BlobStore,
}

impl ImageResourceManager {
    /// Manager with both slots on their fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute `slot`'s image. A missing file is a no-op returning `false`.
    ///
    /// The slot's previous handle is released before the new one is created.
    #[tracing::instrument(level = "debug", skip(self, file), fields(name = file.as_ref().map(|f| f.name())))]
    pub fn set_image(&mut self, slot: Slot, file: Option<&ImageFile>) -> bool {
        let Some(file) = file else {
            tracing::debug!("no file selected");
            return false;
        };

        if let Some(previous) = self.slots.entry(slot).take() {
            self.blobs.release(previous.id);
        }
        let handle = self.blobs.create(file);
        *self.slots.entry(slot) = Some(handle);
        true
    }

    /// Live handle of `slot`, if substituted.
    pub fn handle(&self, slot: Slot) -> Option<&ImageHandle> {
        self.slots.get(slot)
    }

    /// Handle url if the slot was substituted, otherwise the fallback asset.
    pub fn resolve(&self, slot: Slot) -> ResolvedImage {
        let fallback = slot.fallback();
        match self.slots.get(slot) {
            Some(handle) => ResolvedImage {
                url: handle.url.clone(),
                alt: fallback.alt,
                custom: true,
            },
            None => ResolvedImage {
                url: fallback.src.to_string(),
                alt: fallback.alt,
                custom: false,
            },
        }
    }

    /// Registry of live handle allocations.
    pub fn blobs(&self) -> &BlobStore {
        &self.blobs
    }

    /// Release everything still live and forget all substitutions.
    pub fn teardown(&mut self) -> usize {
        self.slots = SlotMap::default();
        let released = self.blobs.release_all();
        if released > 0 {
            tracing::debug!(released, "image handles released on teardown");
        }
        released
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/manager.rs"]
mod tests;
