use crate::AssetError;
use sceneview_common::TextureHandle;
use std::collections::HashMap;
use std::sync::Arc;

/// What a loader returns for one texture path.
#[derive(Debug)]
pub struct LoadedTexture<T> {
    pub handle: TextureHandle,
    pub object: T,
}

/// A cached texture. Clones share the same underlying object.
#[derive(Debug)]
pub struct CachedTexture<T> {
    pub handle: TextureHandle,
    pub object: Arc<T>,
}

impl<T> Clone for CachedTexture<T> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle,
            object: Arc::clone(&self.object),
        }
    }
}

/// Produces textures for paths the cache has not seen yet.
///
/// Decoding and upload live behind this trait; closures of the form
/// `FnMut(&str) -> Result<LoadedTexture<T>, AssetError>` implement it.
pub trait TextureLoader<T> {
    fn load(&mut self, path: &str) -> Result<LoadedTexture<T>, AssetError>;
}

impl<T, F> TextureLoader<T> for F
where
    F: FnMut(&str) -> Result<LoadedTexture<T>, AssetError>,
{
    fn load(&mut self, path: &str) -> Result<LoadedTexture<T>, AssetError> {
        self(path)
    }
}

/// Path-keyed texture memoization. Entries live as long as the cache.
#[derive(Debug)]
pub struct TextureCache<T> {
    entries: HashMap<String, CachedTexture<T>>,
}

impl<T> Default for TextureCache<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> TextureCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached texture for `path`, loading it first if needed.
    ///
    /// The loader runs at most once per path. A failed load caches nothing, so
    /// the next call for the same path tries again.
    pub fn get_or_load<L>(
        &mut self,
        path: &str,
        loader: &mut L,
    ) -> Result<CachedTexture<T>, AssetError>
    where
        L: TextureLoader<T> + ?Sized,
    {
        if let Some(cached) = self.entries.get(path) {
            return Ok(cached.clone());
        }

        let loaded = loader.load(path)?;
        let cached = CachedTexture {
            handle: loaded.handle,
            object: Arc::new(loaded.object),
        };
        tracing::debug!(path, handle = %cached.handle, "texture loaded");
        self.entries.insert(path.to_owned(), cached.clone());
        Ok(cached)
    }

    pub fn get(&self, path: &str) -> Option<&CachedTexture<T>> {
        self.entries.get(path)
    }

    /// The graphics handle cached for `path`, if any.
    pub fn handle(&self, path: &str) -> Option<TextureHandle> {
        self.entries.get(path).map(|c| c.handle)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
