//! Reveal and reflow animation driver.
//!
//! ## Usage
//!
//! The driver turns committed [`LayoutCell`]s into per-item
//! [`VisualState`]s over time. The first completed layout pass of a
//! container plays the entrance treatment (fly-in with fade and optional
//! blur, staggered per item); every later pass tweens items directly from
//! the rect currently on screen to the new geometry. Hover
//! micro-interactions run on independent channels keyed by stable item id,
//! so a column reassignment can never retarget them.
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    time::{Duration, Instant},
};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::{animation::Easing, solver::LayoutCell};

const ENTRANCE_DURATION: Duration = Duration::from_millis(800);
const ENTRANCE_BLUR_RADIUS: f32 = 10.0;
const FLY_IN_OFFSET: f32 = 200.0;
const HOVER_DURATION: Duration = Duration::from_millis(300);
const HOVER_OVERLAY_ALPHA: f32 = 0.3;

/// Lifecycle of a container's reveal animation.
///
/// A driver is in `Entrance` until its first layout batch is scheduled and
/// stays `Settled` for the rest of its lifetime; a resize arriving while
/// entrance tweens are still flying therefore produces reflow tweens, never
/// a second entrance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealMode {
    /// No layout has been applied yet; the next one plays the entrance.
    Entrance,
    /// A layout has been applied; later passes tween geometry directly.
    Settled,
}

/// Where entrance tweens fly in from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EntranceOrigin {
    /// Above the container.
    Top,
    /// Below the viewport.
    #[default]
    Bottom,
    /// Left of the container.
    Left,
    /// Right of the viewport.
    Right,
    /// Collapsed onto the container center.
    Center,
    /// A seeded per-item pick from the four edges.
    Random,
}

/// Axis-aligned rectangle in container-local pixels.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    fn from_cell(cell: &LayoutCell) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            width: cell.width,
            height: cell.height,
        }
    }

    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            x: lerp(from.x, to.x, t),
            y: lerp(from.y, to.y, t),
            width: lerp(from.width, to.width, t),
            height: lerp(from.height, to.height, t),
        }
    }
}

/// Transient visual properties of one item, sampled every frame.
///
/// The driver owns these; the embedder reads them and paints. Layout tweens
/// write `rect`/`opacity`/`blur`, hover tweens write `scale`/`overlay_alpha`;
/// the channels never contend.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VisualState {
    /// Current geometry.
    pub rect: Rect,
    /// 0 (hidden) to 1 (opaque).
    pub opacity: f32,
    /// Blur radius in pixels.
    pub blur: f32,
    /// Uniform scale about the item center.
    pub scale: f32,
    /// Alpha of the hover color overlay.
    pub overlay_alpha: f32,
}

/// Presentation knobs the driver needs per scheduling call.
#[derive(Clone, Debug)]
pub struct RevealConfig {
    /// Entrance fly-in origin.
    pub origin: EntranceOrigin,
    /// Whether entrance tweens also resolve a blur filter.
    pub blur_to_focus: bool,
    /// Per-item entrance delay increment, in seconds.
    pub stagger: f32,
    /// Reflow tween duration, in seconds.
    pub update_duration: f32,
    /// Reflow tween easing.
    pub update_easing: Easing,
    /// Whether pointer-enter scales the item.
    pub scale_on_hover: bool,
    /// Scale factor applied while hovered.
    pub hover_scale: f32,
    /// Whether pointer-enter fades in the color overlay.
    pub color_shift_on_hover: bool,
    /// Seed for the `Random` entrance origin.
    pub seed: u64,
}

struct LayoutTween {
    from: Rect,
    to: Rect,
    fade: Option<(f32, f32)>,
    blur: Option<(f32, f32)>,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

struct HoverTween {
    scale: (f32, f32),
    overlay: (f32, f32),
    start: Instant,
}

enum FlyFrom {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// Id-keyed tween scheduler and visual-state store for one container.
pub struct AnimationDriver {
    mode: RevealMode,
    committed: FxHashMap<String, Rect>,
    visuals: FxHashMap<String, VisualState>,
    layout_tweens: FxHashMap<String, LayoutTween>,
    hover_tweens: FxHashMap<String, HoverTween>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    /// Creates a driver in entrance mode.
    pub fn new() -> Self {
        Self {
            mode: RevealMode::Entrance,
            committed: FxHashMap::default(),
            visuals: FxHashMap::default(),
            layout_tweens: FxHashMap::default(),
            hover_tweens: FxHashMap::default(),
        }
    }

    /// Current lifecycle mode.
    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    /// Whether any tween is still in flight or pending.
    pub fn is_animating(&self) -> bool {
        !self.layout_tweens.is_empty() || !self.hover_tweens.is_empty()
    }

    /// Visual state for one item.
    pub fn visual(&self, id: &str) -> Option<&VisualState> {
        self.visuals.get(id)
    }

    /// Visual states for every live item, in arbitrary order.
    pub fn visuals(&self) -> impl Iterator<Item = (&str, &VisualState)> {
        self.visuals.iter().map(|(id, state)| (id.as_str(), state))
    }

    /// Schedules tweens that carry every item to its newly committed cell.
    ///
    /// In entrance mode every cell flies in from the configured origin,
    /// staggered in cell order. Once settled, cells tween from the rect
    /// currently on screen; only an item with no previous committed rect
    /// (freshly appended) still receives the entrance treatment. Scheduling
    /// a layout tween for an item replaces any tween already flying it.
    pub fn apply_layout(
        &mut self,
        cells: &[LayoutCell],
        config: &RevealConfig,
        viewport: (f32, f32),
        container: (f32, f32),
        now: Instant,
    ) {
        self.prune_departed(cells);

        let entrance_batch = self.mode == RevealMode::Entrance;
        let mut entering_index = 0usize;

        for cell in cells {
            let target = Rect::from_cell(cell);
            let previous = self.committed.get(&cell.id).copied();

            if entrance_batch || previous.is_none() {
                let from = entrance_rect(
                    target,
                    fly_from(config, &cell.id),
                    viewport,
                    container,
                );
                let delay =
                    Duration::from_secs_f32(config.stagger.max(0.0) * entering_index as f32);
                entering_index += 1;

                let blur = config
                    .blur_to_focus
                    .then_some((ENTRANCE_BLUR_RADIUS, 0.0f32));
                self.visuals.insert(
                    cell.id.clone(),
                    VisualState {
                        rect: from,
                        opacity: 0.0,
                        blur: blur.map_or(0.0, |(radius, _)| radius),
                        scale: 1.0,
                        overlay_alpha: 0.0,
                    },
                );
                self.layout_tweens.insert(
                    cell.id.clone(),
                    LayoutTween {
                        from,
                        to: target,
                        fade: Some((0.0, 1.0)),
                        blur,
                        start: now + delay,
                        duration: ENTRANCE_DURATION,
                        easing: Easing::OutCubic,
                    },
                );
            } else {
                let visual = self.visuals.get(&cell.id).copied();
                let from = visual.map(|v| v.rect).or(previous).unwrap_or(target);
                // Overwrite applies per property: geometry retargets to the
                // new cell, while an entrance still flying keeps fading and
                // unblurring toward its original targets.
                let (fade, blur) = match self.layout_tweens.get(&cell.id) {
                    Some(flying) => (
                        flying
                            .fade
                            .map(|(_, to)| (visual.map_or(0.0, |v| v.opacity), to)),
                        flying
                            .blur
                            .map(|(_, to)| (visual.map_or(0.0, |v| v.blur), to)),
                    ),
                    None => (None, None),
                };
                if from == target && fade.is_none() && blur.is_none() {
                    self.layout_tweens.remove(&cell.id);
                } else {
                    self.layout_tweens.insert(
                        cell.id.clone(),
                        LayoutTween {
                            from,
                            to: target,
                            fade,
                            blur,
                            start: now,
                            duration: Duration::from_secs_f32(config.update_duration.max(0.0)),
                            easing: config.update_easing,
                        },
                    );
                }
            }

            self.committed.insert(cell.id.clone(), target);
        }

        // The mode flips when the batch is scheduled, not when it finishes.
        self.mode = RevealMode::Settled;
    }

    /// Samples every active tween at `now` and drops the finished ones.
    pub fn tick(&mut self, now: Instant) {
        let visuals = &mut self.visuals;

        self.layout_tweens.retain(|id, tween| {
            let Some(visual) = visuals.get_mut(id) else {
                debug!(%id, "dropping tween whose target left the item set");
                return false;
            };
            let progress = tween_progress(tween.start, tween.duration, now);
            let eased = tween.easing.apply(progress);
            visual.rect = Rect::lerp(tween.from, tween.to, eased);
            if let Some((from, to)) = tween.fade {
                visual.opacity = lerp(from, to, eased);
            }
            if let Some((from, to)) = tween.blur {
                visual.blur = lerp(from, to, eased);
            }
            progress < 1.0
        });

        self.hover_tweens.retain(|id, tween| {
            let Some(visual) = visuals.get_mut(id) else {
                debug!(%id, "dropping hover tween whose target left the item set");
                return false;
            };
            let progress = tween_progress(tween.start, HOVER_DURATION, now);
            let eased = Easing::OutQuad.apply(progress);
            visual.scale = lerp(tween.scale.0, tween.scale.1, eased);
            visual.overlay_alpha = lerp(tween.overlay.0, tween.overlay.1, eased);
            progress < 1.0
        });
    }

    /// Starts the hover-in micro-interaction for one item.
    pub fn pointer_enter(&mut self, id: &str, config: &RevealConfig, now: Instant) {
        let targets = (
            config.scale_on_hover.then_some(config.hover_scale),
            config.color_shift_on_hover.then_some(HOVER_OVERLAY_ALPHA),
        );
        self.schedule_hover(id, targets, now);
    }

    /// Reverses the hover micro-interaction for one item.
    pub fn pointer_leave(&mut self, id: &str, config: &RevealConfig, now: Instant) {
        let targets = (
            config.scale_on_hover.then_some(1.0),
            config.color_shift_on_hover.then_some(0.0),
        );
        self.schedule_hover(id, targets, now);
    }

    fn schedule_hover(
        &mut self,
        id: &str,
        (scale_to, overlay_to): (Option<f32>, Option<f32>),
        now: Instant,
    ) {
        if scale_to.is_none() && overlay_to.is_none() {
            return;
        }
        let Some(visual) = self.visuals.get(id) else {
            debug!(%id, "ignoring hover on unknown item");
            return;
        };
        self.hover_tweens.insert(
            id.to_string(),
            HoverTween {
                scale: (visual.scale, scale_to.unwrap_or(visual.scale)),
                overlay: (visual.overlay_alpha, overlay_to.unwrap_or(visual.overlay_alpha)),
                start: now,
            },
        );
    }

    fn prune_departed(&mut self, cells: &[LayoutCell]) {
        let live: FxHashSet<&str> = cells.iter().map(|cell| cell.id.as_str()).collect();
        self.visuals.retain(|id, _| {
            let keep = live.contains(id.as_str());
            if !keep {
                debug!(%id, "item left the gallery");
            }
            keep
        });
        self.committed.retain(|id, _| live.contains(id.as_str()));
        self.layout_tweens.retain(|id, _| live.contains(id.as_str()));
        self.hover_tweens.retain(|id, _| live.contains(id.as_str()));
    }
}

fn fly_from(config: &RevealConfig, id: &str) -> FlyFrom {
    match config.origin {
        EntranceOrigin::Top => FlyFrom::Top,
        EntranceOrigin::Bottom => FlyFrom::Bottom,
        EntranceOrigin::Left => FlyFrom::Left,
        EntranceOrigin::Right => FlyFrom::Right,
        EntranceOrigin::Center => FlyFrom::Center,
        EntranceOrigin::Random => {
            // Seeded hash of the stable id; the pick never reaches the
            // layout solver.
            let mut hasher = DefaultHasher::new();
            config.seed.hash(&mut hasher);
            id.hash(&mut hasher);
            match hasher.finish() % 4 {
                0 => FlyFrom::Top,
                1 => FlyFrom::Bottom,
                2 => FlyFrom::Left,
                _ => FlyFrom::Right,
            }
        }
    }
}

fn entrance_rect(
    target: Rect,
    from: FlyFrom,
    viewport: (f32, f32),
    container: (f32, f32),
) -> Rect {
    match from {
        FlyFrom::Top => Rect {
            y: -FLY_IN_OFFSET,
            ..target
        },
        FlyFrom::Bottom => Rect {
            y: viewport.1 + FLY_IN_OFFSET,
            ..target
        },
        FlyFrom::Left => Rect {
            x: -FLY_IN_OFFSET,
            ..target
        },
        FlyFrom::Right => Rect {
            x: viewport.0 + FLY_IN_OFFSET,
            ..target
        },
        FlyFrom::Center => Rect {
            x: container.0 / 2.0 - target.width / 2.0,
            y: container.1 / 2.0 - target.height / 2.0,
            ..target
        },
    }
}

fn tween_progress(start: Instant, duration: Duration, now: Instant) -> f32 {
    let Some(elapsed) = now.checked_duration_since(start) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(id: &str, x: f32, y: f32, width: f32, height: f32) -> LayoutCell {
        LayoutCell {
            id: id.to_string(),
            x,
            y,
            width,
            height,
        }
    }

    fn config() -> RevealConfig {
        RevealConfig {
            origin: EntranceOrigin::Bottom,
            blur_to_focus: true,
            stagger: 0.1,
            update_duration: 0.6,
            update_easing: Easing::OutCubic,
            scale_on_hover: true,
            hover_scale: 0.95,
            color_shift_on_hover: true,
            seed: 7,
        }
    }

    const VIEWPORT: (f32, f32) = (1280.0, 800.0);
    const CONTAINER: (f32, f32) = (1000.0, 600.0);

    fn settled_driver(cells: &[LayoutCell], t0: Instant) -> AnimationDriver {
        let mut driver = AnimationDriver::new();
        driver.apply_layout(cells, &config(), VIEWPORT, CONTAINER, t0);
        driver.tick(t0 + Duration::from_secs(5));
        assert!(!driver.is_animating());
        driver
    }

    #[test]
    fn test_entrance_flies_in_with_fade_and_blur() {
        let t0 = Instant::now();
        let cells = [cell("a", 0.0, 0.0, 200.0, 100.0)];
        let mut driver = AnimationDriver::new();
        assert_eq!(driver.mode(), RevealMode::Entrance);

        driver.apply_layout(&cells, &config(), VIEWPORT, CONTAINER, t0);
        driver.tick(t0);

        let visual = driver.visual("a").unwrap();
        assert_eq!(visual.opacity, 0.0);
        assert_eq!(visual.blur, ENTRANCE_BLUR_RADIUS);
        // Bottom origin: parked below the viewport, same x as the target.
        assert_eq!(visual.rect.y, VIEWPORT.1 + FLY_IN_OFFSET);
        assert_eq!(visual.rect.x, 0.0);

        driver.tick(t0 + Duration::from_secs(3));
        let visual = driver.visual("a").unwrap();
        assert_eq!(visual.opacity, 1.0);
        assert_eq!(visual.blur, 0.0);
        assert_eq!(visual.rect, Rect::from_cell(&cells[0]));
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_mode_flips_when_batch_is_scheduled_not_when_it_finishes() {
        let t0 = Instant::now();
        let cells = [cell("a", 0.0, 0.0, 200.0, 100.0)];
        let mut driver = AnimationDriver::new();
        driver.apply_layout(&cells, &config(), VIEWPORT, CONTAINER, t0);

        assert_eq!(driver.mode(), RevealMode::Settled);
        assert!(driver.is_animating());
    }

    #[test]
    fn test_entrance_is_staggered_in_cell_order() {
        let t0 = Instant::now();
        let cells = [
            cell("a", 0.0, 0.0, 200.0, 100.0),
            cell("b", 210.0, 0.0, 200.0, 100.0),
        ];
        let mut driver = AnimationDriver::new();
        driver.apply_layout(&cells, &config(), VIEWPORT, CONTAINER, t0);

        // Halfway into a's flight, b's delay (0.1s) has not elapsed yet.
        driver.tick(t0 + Duration::from_millis(50));
        assert!(driver.visual("a").unwrap().opacity > 0.0);
        assert_eq!(driver.visual("b").unwrap().opacity, 0.0);
    }

    #[test]
    fn test_resize_reflows_every_item_exactly_once_without_reentrance() {
        let t0 = Instant::now();
        let before = [
            cell("a", 0.0, 0.0, 495.0, 200.0),
            cell("b", 505.0, 0.0, 495.0, 300.0),
        ];
        let mut driver = settled_driver(&before, t0);

        let t1 = t0 + Duration::from_secs(10);
        let after = [
            cell("a", 0.0, 0.0, 345.0, 140.0),
            cell("b", 355.0, 0.0, 345.0, 210.0),
        ];
        driver.apply_layout(&after, &config(), VIEWPORT, CONTAINER, t1);
        assert_eq!(driver.layout_tweens.len(), 2);

        // Mid-flight the items stay fully opaque: a reflow, not a reveal.
        driver.tick(t1 + Duration::from_millis(300));
        for (_, visual) in driver.visuals() {
            assert_eq!(visual.opacity, 1.0);
            assert_eq!(visual.blur, 0.0);
        }

        driver.tick(t1 + Duration::from_secs(5));
        assert_eq!(driver.visual("a").unwrap().rect, Rect::from_cell(&after[0]));
        assert_eq!(driver.visual("b").unwrap().rect, Rect::from_cell(&after[1]));
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_update_tween_starts_from_current_onscreen_rect() {
        let t0 = Instant::now();
        let before = [cell("a", 0.0, 0.0, 400.0, 200.0)];
        let mut driver = settled_driver(&before, t0);

        // Kick off a reflow and interrupt it halfway with another one.
        let t1 = t0 + Duration::from_secs(10);
        driver.apply_layout(
            &[cell("a", 0.0, 100.0, 400.0, 200.0)],
            &config(),
            VIEWPORT,
            CONTAINER,
            t1,
        );
        driver.tick(t1 + Duration::from_millis(300));
        let midway = driver.visual("a").unwrap().rect;
        assert!(midway.y > 0.0 && midway.y < 100.0);

        let t2 = t1 + Duration::from_millis(300);
        driver.apply_layout(
            &[cell("a", 0.0, 50.0, 400.0, 200.0)],
            &config(),
            VIEWPORT,
            CONTAINER,
            t2,
        );
        driver.tick(t2);
        // The replacement tween picks up where the interrupted one left off.
        assert_eq!(driver.visual("a").unwrap().rect, midway);
        assert_eq!(driver.layout_tweens.len(), 1);
    }

    #[test]
    fn test_appended_item_enters_while_existing_items_reflow_only() {
        let t0 = Instant::now();
        let before = [cell("a", 0.0, 0.0, 400.0, 200.0)];
        let mut driver = settled_driver(&before, t0);

        let t1 = t0 + Duration::from_secs(10);
        let after = [
            cell("a", 0.0, 0.0, 400.0, 200.0),
            cell("b", 0.0, 210.0, 400.0, 300.0),
        ];
        driver.apply_layout(&after, &config(), VIEWPORT, CONTAINER, t1);
        driver.tick(t1);

        // The unmoved existing item needs no tween at all; the newcomer
        // plays a full entrance.
        assert_eq!(driver.visual("a").unwrap().opacity, 1.0);
        assert_eq!(driver.layout_tweens.len(), 1);
        let entering = driver.visual("b").unwrap();
        assert_eq!(entering.opacity, 0.0);
        assert_eq!(entering.rect.y, VIEWPORT.1 + FLY_IN_OFFSET);

        driver.tick(t1 + Duration::from_secs(5));
        assert_eq!(driver.visual("b").unwrap().opacity, 1.0);
        assert_eq!(driver.visual("b").unwrap().rect, Rect::from_cell(&after[1]));
    }

    #[test]
    fn test_removed_item_cancels_its_tweens_without_aborting_the_batch() {
        let t0 = Instant::now();
        let cells = [
            cell("a", 0.0, 0.0, 200.0, 100.0),
            cell("b", 210.0, 0.0, 200.0, 100.0),
        ];
        let mut driver = AnimationDriver::new();
        driver.apply_layout(&cells, &config(), VIEWPORT, CONTAINER, t0);

        // b leaves mid-flight.
        let t1 = t0 + Duration::from_millis(100);
        driver.apply_layout(&cells[..1], &config(), VIEWPORT, CONTAINER, t1);
        assert!(driver.visual("b").is_none());

        driver.tick(t1 + Duration::from_secs(5));
        assert_eq!(driver.visual("a").unwrap().opacity, 1.0);
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_hover_scales_and_shifts_color_then_reverses() {
        let t0 = Instant::now();
        let cells = [cell("a", 0.0, 0.0, 200.0, 100.0)];
        let mut driver = settled_driver(&cells, t0);
        let cfg = config();

        let t1 = t0 + Duration::from_secs(10);
        driver.pointer_enter("a", &cfg, t1);
        driver.tick(t1 + Duration::from_secs(1));
        let visual = driver.visual("a").unwrap();
        assert_eq!(visual.scale, cfg.hover_scale);
        assert_eq!(visual.overlay_alpha, HOVER_OVERLAY_ALPHA);

        let t2 = t1 + Duration::from_secs(2);
        driver.pointer_leave("a", &cfg, t2);
        driver.tick(t2 + Duration::from_secs(1));
        let visual = driver.visual("a").unwrap();
        assert_eq!(visual.scale, 1.0);
        assert_eq!(visual.overlay_alpha, 0.0);
    }

    #[test]
    fn test_hover_is_inert_when_disabled() {
        let t0 = Instant::now();
        let cells = [cell("a", 0.0, 0.0, 200.0, 100.0)];
        let mut driver = settled_driver(&cells, t0);
        let cfg = RevealConfig {
            scale_on_hover: false,
            color_shift_on_hover: false,
            ..config()
        };

        driver.pointer_enter("a", &cfg, t0 + Duration::from_secs(10));
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_hover_on_unknown_item_is_ignored() {
        let mut driver = AnimationDriver::new();
        driver.pointer_enter("ghost", &config(), Instant::now());
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_random_origin_is_seed_deterministic_and_edge_bound() {
        let t0 = Instant::now();
        let cfg = RevealConfig {
            origin: EntranceOrigin::Random,
            ..config()
        };
        let cells = [cell("a", 100.0, 50.0, 200.0, 100.0)];

        let mut first = AnimationDriver::new();
        first.apply_layout(&cells, &cfg, VIEWPORT, CONTAINER, t0);
        first.tick(t0);
        let mut second = AnimationDriver::new();
        second.apply_layout(&cells, &cfg, VIEWPORT, CONTAINER, t0);
        second.tick(t0);

        let start = first.visual("a").unwrap().rect;
        assert_eq!(start, second.visual("a").unwrap().rect);

        let target = Rect::from_cell(&cells[0]);
        let edges = [
            Rect {
                y: -FLY_IN_OFFSET,
                ..target
            },
            Rect {
                y: VIEWPORT.1 + FLY_IN_OFFSET,
                ..target
            },
            Rect {
                x: -FLY_IN_OFFSET,
                ..target
            },
            Rect {
                x: VIEWPORT.0 + FLY_IN_OFFSET,
                ..target
            },
        ];
        assert!(edges.contains(&start));
    }

    #[test]
    fn test_center_origin_collapses_on_container_center() {
        let t0 = Instant::now();
        let cfg = RevealConfig {
            origin: EntranceOrigin::Center,
            blur_to_focus: false,
            ..config()
        };
        let cells = [cell("a", 0.0, 0.0, 200.0, 100.0)];
        let mut driver = AnimationDriver::new();
        driver.apply_layout(&cells, &cfg, VIEWPORT, CONTAINER, t0);
        driver.tick(t0);

        let visual = driver.visual("a").unwrap();
        assert_eq!(visual.rect.x, CONTAINER.0 / 2.0 - 100.0);
        assert_eq!(visual.rect.y, CONTAINER.1 / 2.0 - 50.0);
        assert_eq!(visual.blur, 0.0);
    }
}
