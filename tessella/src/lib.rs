//! tessella is a responsive masonry gallery engine: a column-packed layout
//! solver paired with a reveal-animation driver, embeddable in any widget
//! layer.
//!
//! # Guide
//!
//! A gallery is driven through a [`GalleryController`]. The embedder owns
//! the event sources (a box-size observer for the container, a
//! breakpoint-aware viewport query, pointer events, and a frame clock) and
//! forwards them:
//!
//! ```
//! use std::time::Instant;
//! use tessella::{FsLoader, GalleryArgs, GalleryController, GalleryItem};
//!
//! let mut gallery = GalleryController::new(
//!     GalleryArgs::default().gutter(15.0).max_columns(3),
//!     FsLoader,
//! );
//! gallery.set_viewport(1280.0, 800.0);
//! gallery.set_container_width(1180.0);
//! gallery.set_items(vec![
//!     GalleryItem::new("01", "assets/01.jpg"),
//!     GalleryItem::new("02", "assets/02.jpg").height_hint(480.0),
//! ]);
//!
//! // Once per frame while animating:
//! gallery.tick(Instant::now());
//! for (id, visual) in gallery.visuals() {
//!     // paint `id` at visual.rect with visual.opacity, blur, scale…
//! }
//! ```
//!
//! Image sizes are probed off-screen as one concurrent batch per item list;
//! layout waits for the whole batch so every item settles against its final
//! aspect ratio in a single pass. The first completed layout plays a
//! staggered fly-in; every later one tweens geometry in place.
//!
//! # Layout
//!
//! Placement itself is a pure function, usable standalone:
//!
//! ```
//! use tessella::{GalleryItem, ImageMeta, MetaMap, solver};
//!
//! let items = vec![GalleryItem::new("a", "a.png")];
//! let mut meta = MetaMap::default();
//! meta.insert("a.png".into(), ImageMeta::new(1600, 900));
//!
//! let layout = solver::solve(&items, &meta, 800.0, 1, 0.0);
//! assert_eq!(layout.cells[0].height, 450.0);
//! ```

pub mod animation;
pub mod breakpoint;
pub mod driver;
pub mod error;
pub mod gallery;
pub mod probe;
mod runtime;
pub mod solver;

pub use animation::Easing;
pub use breakpoint::{Breakpoint, ResponsivePolicy};
pub use driver::{AnimationDriver, EntranceOrigin, Rect, RevealConfig, RevealMode, VisualState};
pub use error::ProbeError;
pub use gallery::{ClickCallback, GalleryArgs, GalleryController, GalleryDefaults, GalleryItem};
pub use probe::{FsLoader, ImageLoader, ImageMeta, MetaMap};
pub use solver::{LayoutCell, SolvedLayout, solve};
