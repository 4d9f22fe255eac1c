//! Texture requests.
//!
//! Factories never touch image data. They ask a `TextureLoader` for a handle
//! and keep building; the host fetches the image asynchronously and binds it
//! when it arrives. A failed fetch leaves the material untextured.

use crate::api::types::TextureId;

/// Capability handed to the object factories.
pub trait TextureLoader {
    /// Start loading `url` and return the handle materials should reference.
    fn load(&mut self, url: &str) -> TextureId;
}

/// Loader that records every request in order. Its URL list is shipped to
/// the host in the scene manifest; `TextureId(n)` is the n-th entry.
///
/// Requests are not deduplicated: a URL used as both colour and bump map
/// is fetched twice, as separate texture objects.
#[derive(Debug, Clone, Default)]
pub struct TextureQueue {
    urls: Vec<String>,
}

impl TextureQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn url(&self, id: TextureId) -> Option<&str> {
        self.urls.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl TextureLoader for TextureQueue {
    fn load(&mut self, url: &str) -> TextureId {
        let id = TextureId(self.urls.len() as u32);
        log::debug!("texture {} requested: {url}", id.0);
        self.urls.push(url.to_owned());
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_request_order() {
        let mut queue = TextureQueue::new();
        let a = queue.load("a.jpg");
        let b = queue.load("b.jpg");
        assert_eq!(a, TextureId(0));
        assert_eq!(b, TextureId(1));
        assert_eq!(queue.url(b), Some("b.jpg"));
        assert_eq!(queue.url(TextureId(9)), None);
    }

    #[test]
    fn repeated_urls_get_separate_handles() {
        let mut queue = TextureQueue::new();
        let map = queue.load("mars.jpg");
        let bump = queue.load("mars.jpg");
        assert_ne!(map, bump);
        assert_eq!(queue.len(), 2);
    }
}
