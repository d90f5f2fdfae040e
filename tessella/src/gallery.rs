//! The embeddable masonry gallery.
//!
//! ## Usage
//!
//! A [`GalleryController`] owns the item list and every piece of derived
//! state: probed image metadata, the resolved column count, the committed
//! layout, and the animation driver. The embedding widget forwards events
//! (item-list changes, container resizes, viewport breakpoint changes,
//! pointer enter/leave, clicks) and calls [`tick`](GalleryController::tick)
//! once per frame while [`is_animating`](GalleryController::is_animating),
//! painting each item from its [`VisualState`].
//!
//! Layout never runs against a half-resolved probe batch: the controller
//! waits for the whole batch, coalesces any widths that arrived in the
//! meantime, and discards batches made stale by a newer item list.
use std::{sync::Arc, time::Instant};

use derive_setters::Setters;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::{
    animation::Easing,
    breakpoint::ResponsivePolicy,
    driver::{AnimationDriver, EntranceOrigin, RevealConfig, RevealMode, VisualState},
    probe::{self, ImageLoader, MetaMap, ProbeInbox},
    solver::{self, SolvedLayout},
};

/// Callback invoked when a linked item is clicked.
pub type ClickCallback = Arc<dyn Fn(&GalleryItem) + Send + Sync>;

/// One gallery entry, externally supplied and immutable per render pass.
#[derive(Clone, PartialEq, Debug, Setters)]
pub struct GalleryItem {
    /// Stable unique id, used as the animation key.
    #[setters(skip)]
    pub id: String,
    /// Image source to probe and display.
    #[setters(skip)]
    pub image_url: String,
    /// Optional click target.
    #[setters(strip_option)]
    pub link_url: Option<String>,
    /// Fallback height used only until the probe resolves (or if it fails
    /// before any metadata exists).
    #[setters(strip_option)]
    pub height_hint: Option<f32>,
}

impl GalleryItem {
    /// Creates an item with the mandatory id and image source.
    pub fn new(id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            link_url: None,
            height_hint: None,
        }
    }
}

/// Built-in defaults for [`GalleryArgs`].
pub struct GalleryDefaults;

impl GalleryDefaults {
    /// Reflow tween duration in seconds.
    pub const DURATION: f32 = 0.6;
    /// Per-item entrance delay increment in seconds.
    pub const STAGGER: f32 = 0.05;
    /// Scale factor applied while hovered.
    pub const HOVER_SCALE: f32 = 0.95;
    /// Gap between columns and rows, in pixels.
    pub const GUTTER: f32 = 12.0;
    /// Upper bound on the responsive column count.
    pub const MAX_COLUMNS: usize = 4;
}

/// Arguments for configuring a gallery.
///
/// ```
/// use tessella::gallery::GalleryArgs;
///
/// let args = GalleryArgs::default()
///     .gutter(15.0)
///     .max_columns(3)
///     .stagger(0.06)
///     .hover_scale(0.98);
/// assert_eq!(args.max_columns, 3);
/// ```
#[derive(Clone, Setters)]
pub struct GalleryArgs {
    /// Easing for reflow tweens.
    pub easing: Easing,
    /// Reflow tween duration in seconds.
    pub duration: f32,
    /// Per-item entrance delay increment in seconds.
    pub stagger: f32,
    /// Entrance fly-in origin.
    pub animate_from: EntranceOrigin,
    /// Whether pointer-enter scales items.
    pub scale_on_hover: bool,
    /// Scale factor applied while hovered.
    pub hover_scale: f32,
    /// Whether entrance tweens resolve from a blur.
    pub blur_to_focus: bool,
    /// Whether pointer-enter fades in a color overlay.
    pub color_shift_on_hover: bool,
    /// Gap between columns and rows, in pixels.
    pub gutter: f32,
    /// Upper bound on the responsive column count.
    pub max_columns: usize,
    /// Seed for the `Random` entrance origin.
    pub seed: u64,
    /// Viewport-width → column-count table.
    pub policy: ResponsivePolicy,
    /// Optional callback invoked when a linked item is clicked.
    #[setters(skip)]
    pub on_item_click: Option<ClickCallback>,
}

impl Default for GalleryArgs {
    fn default() -> Self {
        Self {
            easing: Easing::OutCubic,
            duration: GalleryDefaults::DURATION,
            stagger: GalleryDefaults::STAGGER,
            animate_from: EntranceOrigin::Bottom,
            scale_on_hover: true,
            hover_scale: GalleryDefaults::HOVER_SCALE,
            blur_to_focus: true,
            color_shift_on_hover: false,
            gutter: GalleryDefaults::GUTTER,
            max_columns: GalleryDefaults::MAX_COLUMNS,
            seed: 0,
            policy: ResponsivePolicy::default(),
            on_item_click: None,
        }
    }
}

impl GalleryArgs {
    /// Sets the click callback.
    pub fn on_item_click(
        mut self,
        callback: impl Fn(&GalleryItem) + Send + Sync + 'static,
    ) -> Self {
        self.on_item_click = Some(Arc::new(callback));
        self
    }
}

/// Owns a gallery's items, derived state, and animations.
///
/// ```
/// use std::time::Instant;
/// use tessella::{FsLoader, GalleryArgs, GalleryController};
///
/// let mut gallery = GalleryController::new(GalleryArgs::default(), FsLoader);
/// gallery.set_viewport(1280.0, 800.0);
/// gallery.set_container_width(960.0);
/// gallery.tick(Instant::now());
/// assert!(gallery.is_ready());
/// assert_eq!(gallery.container_height(), 0.0);
/// ```
pub struct GalleryController {
    args: GalleryArgs,
    loader: Arc<dyn ImageLoader>,
    items: Vec<GalleryItem>,
    meta: MetaMap,
    images_ready: bool,
    generation: u64,
    inbox: ProbeInbox,
    container_width: f32,
    viewport: (f32, f32),
    columns: usize,
    needs_layout: bool,
    layout: SolvedLayout,
    driver: AnimationDriver,
}

impl GalleryController {
    /// Creates an empty gallery.
    pub fn new(args: GalleryArgs, loader: impl ImageLoader) -> Self {
        let columns = args.policy.columns_for(0.0, args.max_columns);
        Self {
            args,
            loader: Arc::new(loader),
            items: Vec::new(),
            meta: MetaMap::default(),
            images_ready: true,
            generation: 0,
            inbox: ProbeInbox::default(),
            container_width: 0.0,
            viewport: (0.0, 0.0),
            columns,
            needs_layout: false,
            layout: SolvedLayout::default(),
            driver: AnimationDriver::new(),
        }
    }

    /// Replaces the item list and kicks off a fresh probe batch.
    ///
    /// A batch still in flight for the previous list is invalidated; its
    /// results will be discarded on delivery.
    #[tracing::instrument(level = "debug", skip(self, items), fields(count = items.len()))]
    pub fn set_items(&mut self, items: Vec<GalleryItem>) {
        self.items = items;
        self.generation += 1;
        self.meta.clear();

        let mut seen = FxHashSet::default();
        let mut urls = Vec::new();
        for item in &self.items {
            if item.image_url.is_empty() || !seen.insert(item.image_url.as_str()) {
                continue;
            }
            urls.push(item.image_url.clone());
        }

        if urls.is_empty() {
            self.images_ready = true;
            self.needs_layout = true;
            return;
        }

        self.images_ready = false;
        probe::spawn_batch(
            self.loader.clone(),
            urls,
            self.generation,
            self.inbox.clone(),
        );
    }

    /// Reports the container's current content-box width.
    ///
    /// Every width change is a valid relayout trigger; changes arriving
    /// while a probe batch is outstanding coalesce so only the latest width
    /// is laid out once the batch resolves.
    pub fn set_container_width(&mut self, width: f32) {
        if width == self.container_width {
            return;
        }
        self.container_width = width;
        self.needs_layout = true;
    }

    /// Reports the viewport size on a breakpoint change.
    ///
    /// The column count is re-resolved against the policy table; layout only
    /// re-runs when it actually crosses to a different count.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        let columns = self.args.policy.columns_for(width, self.args.max_columns);
        if columns != self.columns {
            self.columns = columns;
            self.needs_layout = true;
        }
    }

    /// Advances the gallery: drains a resolved probe batch, re-runs layout
    /// if anything invalidated it, and samples every active tween.
    pub fn tick(&mut self, now: Instant) {
        self.drain_probe();
        if self.needs_layout && self.images_ready {
            self.relayout(now);
        }
        self.driver.tick(now);
    }

    /// Starts the hover-in micro-interaction for one item.
    pub fn pointer_enter(&mut self, id: &str, now: Instant) {
        let config = self.reveal_config();
        self.driver.pointer_enter(id, &config, now);
    }

    /// Reverses the hover micro-interaction for one item.
    pub fn pointer_leave(&mut self, id: &str, now: Instant) {
        let config = self.reveal_config();
        self.driver.pointer_leave(id, &config, now);
    }

    /// Handles a click on one item.
    ///
    /// Returns the item's link target (and fires the configured callback)
    /// when it has one; unlinked and unknown items are inert.
    pub fn click(&self, id: &str) -> Option<&str> {
        let item = self.items.iter().find(|item| item.id == id)?;
        let link = item.link_url.as_deref()?;
        if let Some(callback) = &self.args.on_item_click {
            callback(item);
        }
        Some(link)
    }

    /// Current items.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// The committed layout of the latest pass.
    pub fn layout(&self) -> &SolvedLayout {
        &self.layout
    }

    /// Height the container must take to fit the tallest column.
    pub fn container_height(&self) -> f32 {
        self.layout.total_height
    }

    /// Currently resolved column count.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Whether the current item list's probe batch has resolved.
    pub fn is_ready(&self) -> bool {
        self.images_ready
    }

    /// Whether any tween is still in flight; embedders keep scheduling
    /// frames while this holds.
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Reveal lifecycle of the container.
    pub fn mode(&self) -> RevealMode {
        self.driver.mode()
    }

    /// Visual state for one item.
    pub fn visual(&self, id: &str) -> Option<&VisualState> {
        self.driver.visual(id)
    }

    /// Visual states for every live item.
    pub fn visuals(&self) -> impl Iterator<Item = (&str, &VisualState)> {
        self.driver.visuals()
    }

    fn drain_probe(&mut self) {
        let Some(batch) = self.inbox.lock().take() else {
            return;
        };
        if batch.generation != self.generation {
            debug!(
                stale = batch.generation,
                current = self.generation,
                "discarding probe batch for a replaced item list"
            );
            return;
        }
        self.meta = batch.meta;
        self.images_ready = true;
        self.needs_layout = true;
    }

    #[tracing::instrument(level = "debug", skip(self, now))]
    fn relayout(&mut self, now: Instant) {
        self.needs_layout = false;
        if self.container_width <= 0.0 {
            // Hidden or unmounted container: nothing to place. The pending
            // entrance survives until a real width arrives.
            self.layout = SolvedLayout::default();
            debug!("container width is zero, deferring layout");
            return;
        }
        self.layout = solver::solve(
            &self.items,
            &self.meta,
            self.container_width,
            self.columns,
            self.args.gutter,
        );
        let config = self.reveal_config();
        self.driver.apply_layout(
            &self.layout.cells,
            &config,
            self.viewport,
            (self.container_width, self.layout.total_height),
            now,
        );
    }

    fn reveal_config(&self) -> RevealConfig {
        RevealConfig {
            origin: self.args.animate_from,
            blur_to_focus: self.args.blur_to_focus,
            stagger: self.args.stagger,
            update_duration: self.args.duration,
            update_easing: self.args.easing,
            scale_on_hover: self.args.scale_on_hover,
            hover_scale: self.args.hover_scale,
            color_shift_on_hover: self.args.color_shift_on_hover,
            seed: self.args.seed,
        }
    }
}
