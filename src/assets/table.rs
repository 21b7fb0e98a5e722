use hyper::body::Bytes;
use std::collections::HashMap;

/// Suffix that makes a file answer for its directory as well
pub const INDEX_SUFFIX: &str = "/index.html";

/// One servable file: its full contents and the content type resolved at index time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    content: Bytes,
    content_type: &'static str,
}

impl Asset {
    pub fn new(content: impl Into<Bytes>, content_type: &'static str) -> Self {
        Self {
            content: content.into(),
            content_type,
        }
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub const fn content_type(&self) -> &'static str {
        self.content_type
    }
}

/// Immutable map from request path to [`Asset`]
#[derive(Debug, Default)]
pub struct AssetTable {
    entries: HashMap<String, Asset>,
}

impl AssetTable {
    pub fn get(&self, path: &str) -> Option<&Asset> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted, alias entries included
    pub fn routes(&self) -> Vec<&str> {
        let mut routes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        routes.sort_unstable();
        routes
    }
}

/// Collects entries during indexing; the only way to produce an [`AssetTable`]
#[derive(Debug, Default)]
pub struct AssetTableBuilder {
    entries: HashMap<String, Asset>,
}

impl AssetTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `asset` under `path`. A path ending in `/index.html` is also
    /// inserted with that suffix removed, so `/docs/index.html` answers
    /// `/docs` and the root `/index.html` answers the empty key.
    pub fn insert(&mut self, path: String, asset: Asset) -> &mut Self {
        if let Some(dir) = path.strip_suffix(INDEX_SUFFIX) {
            self.entries.insert(dir.to_string(), asset.clone());
        }
        self.entries.insert(path, asset);
        self
    }

    pub fn finish(self) -> AssetTable {
        AssetTable {
            entries: self.entries,
        }
    }
}
