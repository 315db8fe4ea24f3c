//! compression/cache.rs
//! Factory decorator that reuses codecs per (capability, configuration).
//!
//! Entries are never evicted. Each distinct configuration a process asks for
//! stays resident for the life of the factory.

use std::sync::Arc;

use dashmap::DashMap;

use crate::compression::config::CompressionConfig;
use crate::compression::registry::{CodecFactory, StaticCodecFactory};
use crate::compression::types::{CompressionCodec, CompressionError, StreamCodec};

type CacheKey = (CompressionCodec, CompressionConfig);

/// Wraps another factory and hands out shared instances.
///
/// Racing callers on a cold key may each build a codec; the entry API keeps
/// exactly one of them and the others are dropped.
#[derive(Debug, Default)]
pub struct CachingCodecFactory<F: CodecFactory = StaticCodecFactory> {
    inner: F,
    cache: DashMap<CacheKey, Arc<dyn StreamCodec>>,
}

impl CachingCodecFactory<StaticCodecFactory> {
    pub fn new() -> Self {
        Self::wrap(StaticCodecFactory)
    }
}

impl<F: CodecFactory> CachingCodecFactory<F> {
    pub fn wrap(inner: F) -> Self {
        Self { inner, cache: DashMap::new() }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Number of cached instances.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn contains(&self, codec: CompressionCodec, config: &CompressionConfig) -> bool {
        self.cache.contains_key(&(codec, *config))
    }
}

impl<F: CodecFactory> CodecFactory for CachingCodecFactory<F> {
    fn create(&self, codec: CompressionCodec, config: &CompressionConfig)
        -> Result<Arc<dyn StreamCodec>, CompressionError>
    {
        let key = (codec, *config);
        if let Some(hit) = self.cache.get(&key) {
            log::trace!("codec cache hit: {} {:?}", codec, config);
            return Ok(Arc::clone(hit.value()));
        }

        // Build outside the shard lock; failures are not cached.
        let built = self.inner.create(codec, config)?;
        let entry = self.cache.entry(key).or_insert(built);
        log::debug!("codec cache now holds {} {:?}", codec, config);
        Ok(Arc::clone(entry.value()))
    }
}
