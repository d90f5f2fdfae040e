//! Headless gallery walkthrough.
//!
//! Generates a set of gradient tiles, runs a full gallery lifecycle against
//! them (probe, entrance, hover, breakpoint change, reflow), and composites
//! the final layout into `masonry.png`.
use std::{
    fs,
    path::Path,
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage, imageops};
use tessella::{GalleryArgs, GalleryController, GalleryItem};
use tracing::{info, warn};

/// Tile dimensions covering a spread of aspect ratios.
const TILES: [(u32, u32); 10] = [
    (800, 400),
    (600, 600),
    (400, 800),
    (900, 600),
    (640, 480),
    (500, 750),
    (720, 720),
    (960, 540),
    (480, 600),
    (800, 500),
];

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let out_dir = std::env::temp_dir().join("tessella-demo");
    fs::create_dir_all(&out_dir).context("creating demo output directory")?;
    let items = generate_tiles(&out_dir)?;
    info!(count = items.len(), dir = %out_dir.display(), "tiles ready");

    let args = GalleryArgs::default()
        .gutter(15.0)
        .max_columns(3)
        .stagger(0.06)
        .hover_scale(0.98)
        .on_item_click(|item| info!(id = %item.id, "item clicked"));
    let mut gallery = GalleryController::new(args, tessella::FsLoader);

    gallery.set_viewport(1280.0, 800.0);
    gallery.set_container_width(1180.0);
    gallery.set_items(items.clone());

    wait_for_probe(&mut gallery)?;
    run_until_idle(&mut gallery, "entrance");
    info!(
        columns = gallery.columns(),
        height = gallery.container_height(),
        "gallery settled"
    );

    // Hover micro-interaction on the first tile.
    let hovered = items[0].id.clone();
    gallery.pointer_enter(&hovered, Instant::now());
    run_until_idle(&mut gallery, "hover in");
    if let Some(visual) = gallery.visual(&hovered) {
        info!(id = %hovered, scale = visual.scale, "hover applied");
    }
    gallery.pointer_leave(&hovered, Instant::now());
    run_until_idle(&mut gallery, "hover out");

    if let Some(link) = gallery.click(&hovered) {
        info!(%link, "click would navigate");
    }

    // Narrow the window across a breakpoint, then shrink the container:
    // both reflow in place, no re-entrance.
    gallery.set_viewport(700.0, 800.0);
    gallery.set_container_width(640.0);
    run_until_idle(&mut gallery, "reflow");
    info!(
        columns = gallery.columns(),
        height = gallery.container_height(),
        "reflowed"
    );

    let output = out_dir.join("masonry.png");
    composite(&gallery, &items, 640, &output)?;
    info!(path = %output.display(), "final layout written");
    Ok(())
}

/// Writes one gradient PNG per entry in [`TILES`] and builds the item list.
fn generate_tiles(out_dir: &Path) -> Result<Vec<GalleryItem>> {
    let mut items = Vec::with_capacity(TILES.len());
    for (index, &(width, height)) in TILES.iter().enumerate() {
        let path = out_dir.join(format!("tile-{index:02}.png"));
        let tint = (index * 24 % 255) as u8;
        let tile = RgbaImage::from_fn(width, height, |x, y| {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            Rgba([r, g, 255 - tint, 255])
        });
        tile.save(&path)
            .with_context(|| format!("writing {}", path.display()))?;

        let mut item = GalleryItem::new(
            format!("tile-{index:02}"),
            path.to_string_lossy().into_owned(),
        );
        if index == 0 {
            item = item.link_url("https://tessera-ui.github.io".to_string());
        }
        items.push(item);
    }
    Ok(items)
}

/// Spins until the current item list's probe batch has resolved.
fn wait_for_probe(gallery: &mut GalleryController) -> Result<()> {
    let start = Instant::now();
    while !gallery.is_ready() {
        gallery.tick(Instant::now());
        if start.elapsed() > Duration::from_secs(10) {
            anyhow::bail!("probe batch did not resolve in time");
        }
        thread::sleep(FRAME);
    }
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "probe batch resolved");
    Ok(())
}

/// Ticks the gallery at ~60 fps until every tween has finished.
fn run_until_idle(gallery: &mut GalleryController, label: &str) {
    let start = Instant::now();
    loop {
        gallery.tick(Instant::now());
        if !gallery.is_animating() {
            break;
        }
        if start.elapsed() > Duration::from_secs(10) {
            warn!(label, "animation did not settle in time");
            break;
        }
        thread::sleep(FRAME);
    }
    info!(
        label,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "settled"
    );
}

/// Paints every item at its final visual rect onto one canvas.
fn composite(
    gallery: &GalleryController,
    items: &[GalleryItem],
    container_width: u32,
    output: &Path,
) -> Result<()> {
    let height = gallery.container_height().ceil().max(1.0) as u32;
    let mut canvas = RgbaImage::from_pixel(container_width, height, Rgba([18, 18, 22, 255]));

    for item in items {
        let Some(visual) = gallery.visual(&item.id) else {
            continue;
        };
        let source = image::open(&item.image_url)
            .with_context(|| format!("reading {}", item.image_url))?
            .to_rgba8();
        let width = visual.rect.width.round().max(1.0) as u32;
        let cell_height = visual.rect.height.round().max(1.0) as u32;
        let resized = imageops::resize(&source, width, cell_height, imageops::FilterType::Triangle);
        imageops::overlay(
            &mut canvas,
            &resized,
            visual.rect.x.round() as i64,
            visual.rect.y.round() as i64,
        );
    }

    canvas
        .save(output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}
