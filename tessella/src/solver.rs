//! Column-packed masonry layout solver.
//!
//! ## Usage
//!
//! [`solve`] is a pure function from the current item list, probed image
//! metadata, container width, column count, and gutter to pixel geometry.
//! Re-running it on unchanged input produces bit-identical output; everything
//! presentation-flavored (entrance direction, stagger, hover) lives in the
//! animation driver and cannot influence placement.
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{gallery::GalleryItem, probe::ImageMeta};

/// Provisional height as a fraction of column width, used while an item has
/// neither probed metadata nor a usable height hint.
const FALLBACK_HEIGHT_RATIO: f32 = 0.75;

/// Computed geometry for one gallery item, in container-local pixels.
#[derive(Clone, PartialEq, Debug)]
pub struct LayoutCell {
    /// Stable item id, the animation/DOM key.
    pub id: String,
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Cell width (the column width).
    pub width: f32,
    /// Cell height, preserving the item's intrinsic aspect ratio.
    pub height: f32,
}

/// Result of one layout pass.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SolvedLayout {
    /// One cell per laid-out item, in input order.
    pub cells: Vec<LayoutCell>,
    /// Height the container must take to fit the tallest column.
    pub total_height: f32,
}

/// Packs `items` into `columns` columns of equal width.
///
/// Each item goes to the currently shortest column; ties break to the first
/// (lowest-index) column. Item height derives from the probed aspect ratio
/// scaled to the column width, falling back to half the item's height hint or
/// a fixed fraction of the column width until the probe resolves. A
/// non-positive `container_width` yields an empty layout.
///
/// Items without an image URL are skipped entirely; a skipped item consumes
/// neither a cell nor a gutter slot.
///
/// ```
/// use tessella::{GalleryItem, ImageMeta, MetaMap, solver};
///
/// let items = vec![
///     GalleryItem::new("a", "a.png"),
///     GalleryItem::new("b", "b.png"),
/// ];
/// let mut meta = MetaMap::default();
/// meta.insert("a.png".into(), ImageMeta::new(200, 100));
/// meta.insert("b.png".into(), ImageMeta::new(100, 100));
///
/// let layout = solver::solve(&items, &meta, 1000.0, 2, 10.0);
/// assert_eq!(layout.cells.len(), 2);
/// assert_eq!(layout.cells[0].width, 495.0);
/// assert_eq!(layout.cells[1].x, 505.0);
/// ```
pub fn solve(
    items: &[GalleryItem],
    meta: &FxHashMap<String, ImageMeta>,
    container_width: f32,
    columns: usize,
    gutter: f32,
) -> SolvedLayout {
    if container_width <= 0.0 || items.is_empty() {
        debug!(container_width, "empty layout pass");
        return SolvedLayout::default();
    }

    let columns = columns.max(1);
    let gutter = gutter.max(0.0);
    let column_width = if columns > 1 {
        ((container_width - (columns as f32 - 1.0) * gutter) / columns as f32).max(0.0)
    } else {
        container_width
    };

    // Fresh accumulator every pass; never shared across passes.
    let mut column_heights = vec![0.0f32; columns];
    let mut cells = Vec::with_capacity(items.len());

    for item in items {
        if item.image_url.is_empty() {
            debug!(id = %item.id, "skipping item without an image url");
            continue;
        }

        let column = shortest_column(&column_heights);
        let x = column as f32 * (column_width + gutter);
        let y = column_heights[column];
        let height = cell_height(item, meta.get(&item.image_url), column_width);
        column_heights[column] += height + gutter;

        cells.push(LayoutCell {
            id: item.id.clone(),
            x,
            y,
            width: column_width,
            height,
        });
    }

    SolvedLayout {
        cells,
        total_height: finalize_column_heights(&column_heights, gutter),
    }
}

fn cell_height(item: &GalleryItem, meta: Option<&ImageMeta>, column_width: f32) -> f32 {
    match meta {
        Some(meta) if meta.natural_width > 0 => {
            column_width * meta.natural_height as f32 / meta.natural_width as f32
        }
        _ => match item.height_hint {
            Some(hint) if hint > 0.0 => hint / 2.0,
            _ => column_width * FALLBACK_HEIGHT_RATIO,
        },
    }
}

fn shortest_column(column_heights: &[f32]) -> usize {
    let mut index = 0;
    let mut best = column_heights.first().copied().unwrap_or(0.0);
    for (i, height) in column_heights.iter().enumerate().skip(1) {
        if *height < best {
            best = *height;
            index = i;
        }
    }
    index
}

fn finalize_column_heights(column_heights: &[f32], gutter: f32) -> f32 {
    let max_height = column_heights.iter().copied().fold(0.0f32, f32::max);
    (max_height - gutter).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[&str]) -> Vec<GalleryItem> {
        ids.iter()
            .map(|id| GalleryItem::new(*id, format!("{id}.png")))
            .collect()
    }

    fn meta_for(entries: &[(&str, u32, u32)]) -> FxHashMap<String, ImageMeta> {
        entries
            .iter()
            .map(|(id, w, h)| (format!("{id}.png"), ImageMeta::new(*w, *h)))
            .collect()
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_greedy_trace_two_columns() {
        // Ratios 2:1, 1:1, 1:1, 2:1 in a 1000px container, 2 columns,
        // 10px gutter. Column width is (1000 - 10) / 2 = 495.
        let items = items(&["a", "b", "c", "d"]);
        let meta = meta_for(&[("a", 2, 1), ("b", 1, 1), ("c", 1, 1), ("d", 2, 1)]);

        let layout = solve(&items, &meta, 1000.0, 2, 10.0);
        assert_eq!(layout.cells.len(), 4);

        // a: column 0 at y=0, height 247.5.
        assert_close(layout.cells[0].x, 0.0);
        assert_close(layout.cells[0].y, 0.0);
        assert_close(layout.cells[0].height, 247.5);
        // b: column 1 is now shortest (0 < 257.5), height 495.
        assert_close(layout.cells[1].x, 505.0);
        assert_close(layout.cells[1].y, 0.0);
        assert_close(layout.cells[1].height, 495.0);
        // c: column 0 (257.5 < 505), below a.
        assert_close(layout.cells[2].x, 0.0);
        assert_close(layout.cells[2].y, 257.5);
        assert_close(layout.cells[2].height, 495.0);
        // d: column 1 (505 < 762.5), below b.
        assert_close(layout.cells[3].x, 505.0);
        assert_close(layout.cells[3].y, 505.0);
        assert_close(layout.cells[3].height, 247.5);

        // Both columns end at 762.5; trailing gutter is trimmed.
        assert_close(layout.total_height, 752.5);
    }

    #[test]
    fn test_deterministic_reruns_are_bit_identical() {
        let items = items(&["a", "b", "c", "d", "e"]);
        let meta = meta_for(&[("a", 3, 2), ("b", 1, 1), ("c", 4, 5), ("d", 16, 9)]);
        let first = solve(&items, &meta, 987.0, 3, 12.0);
        let second = solve(&items, &meta, 987.0, 3, 12.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_x_is_a_column_origin() {
        let items = items(&["a", "b", "c", "d", "e", "f", "g"]);
        let meta = meta_for(&[("a", 2, 3), ("b", 1, 2), ("c", 3, 1)]);
        let columns = 3;
        let gutter = 8.0;
        let layout = solve(&items, &meta, 908.0, columns, gutter);
        let column_width = (908.0 - 2.0 * gutter) / 3.0;

        for cell in &layout.cells {
            let slot = cell.x / (column_width + gutter);
            assert!(
                (slot - slot.round()).abs() < 1e-3,
                "x {} is not a column origin",
                cell.x
            );
            assert!((slot.round() as usize) < columns);
        }
    }

    #[test]
    fn test_each_placement_targets_the_shortest_column() {
        let items = items(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let meta = meta_for(&[
            ("a", 1, 3),
            ("b", 1, 1),
            ("c", 2, 1),
            ("d", 1, 2),
            ("e", 3, 1),
            ("f", 1, 1),
            ("g", 2, 3),
            ("h", 1, 1),
        ]);
        let gutter = 10.0;
        let layout = solve(&items, &meta, 1210.0, 4, gutter);
        let column_width = (1210.0 - 3.0 * gutter) / 4.0;

        // Replay the packing: each cell's y must equal the running minimum
        // across columns at its placement time.
        let mut heights = [0.0f32; 4];
        for cell in &layout.cells {
            let column = (cell.x / (column_width + gutter)).round() as usize;
            let min = heights.iter().copied().fold(f32::INFINITY, f32::min);
            assert_close(heights[column], min);
            assert_close(cell.y, heights[column]);
            heights[column] += cell.height + gutter;
        }
    }

    #[test]
    fn test_tie_breaks_to_first_column() {
        assert_eq!(shortest_column(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(shortest_column(&[5.0, 3.0, 3.0]), 1);
        assert_eq!(shortest_column(&[]), 0);
    }

    #[test]
    fn test_aspect_ratio_fidelity() {
        let items = items(&["wide"]);
        let meta = meta_for(&[("wide", 1600, 900)]);
        let layout = solve(&items, &meta, 800.0, 1, 0.0);
        let cell = &layout.cells[0];
        assert_close(cell.height / cell.width, 900.0 / 1600.0);
    }

    #[test]
    fn test_probe_fallback_height_is_finite_and_positive() {
        let items = items(&["failed"]);
        // A failed probe lands in the map as the 1:1 fallback.
        let meta = meta_for(&[("failed", 1, 1)]);
        let layout = solve(&items, &meta, 600.0, 2, 10.0);
        let cell = &layout.cells[0];
        assert!(cell.height.is_finite());
        assert!(cell.height > 0.0);
        assert_close(cell.height, cell.width);
        assert!(layout.total_height.is_finite());
    }

    #[test]
    fn test_height_hint_halved_until_probe_resolves() {
        let mut item = GalleryItem::new("hinted", "hinted.png");
        item.height_hint = Some(480.0);
        let layout = solve(&[item], &FxHashMap::default(), 1000.0, 2, 10.0);
        assert_close(layout.cells[0].height, 240.0);
    }

    #[test]
    fn test_no_meta_and_no_hint_uses_width_fraction() {
        let items = items(&["unknown"]);
        let layout = solve(&items, &FxHashMap::default(), 1000.0, 2, 10.0);
        assert_close(layout.cells[0].height, 495.0 * 0.75);
    }

    #[test]
    fn test_zero_width_container_short_circuits() {
        let items = items(&["a", "b"]);
        let meta = meta_for(&[("a", 1, 1), ("b", 1, 1)]);
        assert_eq!(solve(&items, &meta, 0.0, 3, 10.0), SolvedLayout::default());
        assert_eq!(solve(&items, &meta, -5.0, 3, 10.0), SolvedLayout::default());
    }

    #[test]
    fn test_item_without_url_is_skipped() {
        let mut list = items(&["a", "b"]);
        list.insert(1, GalleryItem::new("broken", ""));
        let meta = meta_for(&[("a", 1, 1), ("b", 1, 1)]);

        let layout = solve(&list, &meta, 1000.0, 2, 10.0);
        assert_eq!(layout.cells.len(), 2);
        assert!(layout.cells.iter().all(|cell| cell.id != "broken"));
        // The survivors pack as if the malformed item never existed.
        assert_close(layout.cells[1].x, 505.0);
        assert_close(layout.cells[1].y, 0.0);
    }

    #[test]
    fn test_single_column_uses_full_width() {
        let items = items(&["a"]);
        let meta = meta_for(&[("a", 2, 1)]);
        let layout = solve(&items, &meta, 640.0, 1, 14.0);
        assert_close(layout.cells[0].width, 640.0);
        assert_close(layout.cells[0].height, 320.0);
    }

    #[test]
    fn test_empty_item_list_yields_zero_height() {
        let layout = solve(&[], &FxHashMap::default(), 800.0, 2, 10.0);
        assert!(layout.cells.is_empty());
        assert_eq!(layout.total_height, 0.0);
    }
}
