//! Responsive column policy.
//!
//! ## Usage
//!
//! A [`ResponsivePolicy`] maps a viewport width to a column count through an
//! ordered threshold table. Feed viewport changes to
//! [`GalleryController::set_viewport`](crate::gallery::GalleryController::set_viewport);
//! the gallery only relays out when the resolved column count actually
//! changes, so per-pixel window resizes never thrash the layout.

/// One tier of a [`ResponsivePolicy`] table.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Breakpoint {
    /// Minimum viewport width (px) at which this tier applies.
    pub min_width: f32,
    /// Column count requested by this tier, clamped to the caller's maximum.
    pub columns: usize,
}

impl Breakpoint {
    /// Creates a tier requesting a fixed column count.
    pub const fn new(min_width: f32, columns: usize) -> Self {
        Self { min_width, columns }
    }

    /// Creates a tier requesting as many columns as the caller allows.
    pub const fn fill(min_width: f32) -> Self {
        Self {
            min_width,
            columns: usize::MAX,
        }
    }
}

/// Ordered viewport-width → column-count table.
///
/// Tiers are evaluated top-down and the first tier whose `min_width` the
/// viewport satisfies wins; when none matches, `default_columns` applies. The
/// result is always clamped to `[1, max_columns]`.
///
/// ```
/// use tessella::breakpoint::ResponsivePolicy;
///
/// let policy = ResponsivePolicy::default();
/// assert_eq!(policy.columns_for(1680.0, 4), 4);
/// assert_eq!(policy.columns_for(720.0, 4), 3);
/// assert_eq!(policy.columns_for(320.0, 4), 1);
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct ResponsivePolicy {
    breakpoints: Vec<Breakpoint>,
    default_columns: usize,
}

impl Default for ResponsivePolicy {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint::fill(1500.0),
                Breakpoint::new(1000.0, 4),
                Breakpoint::new(600.0, 3),
                Breakpoint::new(400.0, 2),
            ],
            default_columns: 1,
        }
    }
}

impl ResponsivePolicy {
    /// Creates a policy from an ordered tier table and a fallback count.
    pub fn new(breakpoints: Vec<Breakpoint>, default_columns: usize) -> Self {
        Self {
            breakpoints,
            default_columns,
        }
    }

    /// Resolves the column count for a viewport width.
    pub fn columns_for(&self, viewport_width: f32, max_columns: usize) -> usize {
        let max_columns = max_columns.max(1);
        for breakpoint in &self.breakpoints {
            if viewport_width >= breakpoint.min_width {
                return breakpoint.columns.clamp(1, max_columns);
            }
        }
        self.default_columns.clamp(1, max_columns)
    }
}
