//! Intrinsic-size probing for gallery images.
//!
//! ## Usage
//!
//! Before a gallery can lay out, every image in the item list is probed
//! off-screen for its natural dimensions. Probes for a whole item list run
//! concurrently and resolve as a single batch, so all items lay out against
//! final aspect ratios at once instead of reflowing one image at a time. An
//! image that fails to decode resolves to a 1:1 fallback rather than blocking
//! the batch.
use std::sync::Arc;

use image::GenericImageView;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::ProbeError;

/// Natural dimensions of a probed image, cached per URL.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ImageMeta {
    /// Native pixel width.
    pub natural_width: u32,
    /// Native pixel height.
    pub natural_height: u32,
}

impl ImageMeta {
    /// Square fallback used when a probe fails.
    pub const FALLBACK: Self = Self {
        natural_width: 1,
        natural_height: 1,
    };

    /// Creates metadata from probed dimensions, degrading empty axes to the
    /// square fallback so downstream math stays finite.
    pub fn new(natural_width: u32, natural_height: u32) -> Self {
        if natural_width == 0 || natural_height == 0 {
            return Self::FALLBACK;
        }
        Self {
            natural_width,
            natural_height,
        }
    }
}

/// URL → metadata mapping produced by a resolved probe batch.
pub type MetaMap = FxHashMap<String, ImageMeta>;

/// Resolves an image URL to its natural dimensions.
///
/// Implementations run off the UI path on the shared probe runtime and may
/// block. A failed probe is reported per URL; it never aborts the batch.
pub trait ImageLoader: Send + Sync + 'static {
    /// Probes one URL for `(width, height)`.
    fn probe(&self, url: &str) -> Result<(u32, u32), ProbeError>;
}

/// Loader resolving URLs as filesystem paths via the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl ImageLoader for FsLoader {
    fn probe(&self, url: &str) -> Result<(u32, u32), ProbeError> {
        if url.contains("://") || url.starts_with("data:") {
            return Err(ProbeError::UnsupportedSource(url.to_string()));
        }
        let decoded = image::open(url)?;
        Ok(decoded.dimensions())
    }
}

/// One resolved probe batch, tagged with the item-list generation that
/// requested it.
pub(crate) struct ProbeBatch {
    pub(crate) generation: u64,
    pub(crate) meta: MetaMap,
}

/// Hand-off slot between the probe runtime and the gallery controller.
pub(crate) type ProbeInbox = Arc<Mutex<Option<ProbeBatch>>>;

/// Probes every URL concurrently and delivers the complete batch to `inbox`.
///
/// Decoding happens on blocking runtime threads; the batch is delivered only
/// once every URL has either a result or the fallback.
pub(crate) fn spawn_batch(
    loader: Arc<dyn ImageLoader>,
    urls: Vec<String>,
    generation: u64,
    inbox: ProbeInbox,
) {
    crate::runtime::get().spawn(async move {
        let mut handles = Vec::with_capacity(urls.len());
        for url in urls {
            let loader = loader.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                let meta = match loader.probe(&url) {
                    Ok((width, height)) => ImageMeta::new(width, height),
                    Err(error) => {
                        warn!(%url, %error, "image probe failed, using square fallback");
                        ImageMeta::FALLBACK
                    }
                };
                (url, meta)
            }));
        }

        let mut meta = MetaMap::default();
        for handle in handles {
            if let Ok((url, dims)) = handle.await {
                meta.insert(url, dims);
            }
        }

        deliver(&inbox, ProbeBatch { generation, meta });
    });
}

/// Places a finished batch in the inbox unless a newer batch already landed.
pub(crate) fn deliver(inbox: &ProbeInbox, batch: ProbeBatch) {
    let mut slot = inbox.lock();
    match slot.as_ref() {
        Some(existing) if existing.generation > batch.generation => {
            debug!(
                stale = batch.generation,
                current = existing.generation,
                "discarding stale probe batch"
            );
        }
        _ => *slot = Some(batch),
    }
}
