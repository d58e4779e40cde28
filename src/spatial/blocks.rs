//! Half-open pixel rectangles and row-major tiling iterators

/// Axis-aligned half-open pixel rectangle `[x1, x2) × [y1, y2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge (inclusive)
    pub x1: u32,
    /// Top edge (inclusive)
    pub y1: u32,
    /// Right edge (exclusive)
    pub x2: u32,
    /// Bottom edge (exclusive)
    pub y2: u32,
}

impl Region {
    /// Width of the region in pixels
    pub const fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    /// Height of the region in pixels
    pub const fn height(&self) -> u32 {
        self.y2 - self.y1
    }

    /// Total number of pixels covered by the region
    pub const fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Iterate over every `(x, y)` pixel coordinate in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (x1, x2) = (self.x1, self.x2);
        (self.y1..self.y2).flat_map(move |y| (x1..x2).map(move |x| (x, y)))
    }

    /// Tile the region into cells of the given side length
    ///
    /// Yields each cell's 0-based `(cell_x, cell_y)` index relative to the
    /// region's top-left corner together with its pixel rectangle. Trailing
    /// cells are clipped to the region, never extending past its edges.
    pub fn cells(&self, cell_size: u32) -> impl Iterator<Item = ((i64, i64), Region)> + use<> {
        let (base_x, base_y) = (self.x1, self.y1);
        regions(self.width(), self.height(), cell_size).map(move |local| {
            let index = (
                i64::from(local.x1 / cell_size),
                i64::from(local.y1 / cell_size),
            );
            let cell = Region {
                x1: base_x + local.x1,
                y1: base_y + local.y1,
                x2: base_x + local.x2,
                y2: base_y + local.y2,
            };
            (index, cell)
        })
    }
}

/// Tile a `width` × `height` area into regions with the given step
///
/// Regions are yielded in row-major order (top-to-bottom, left-to-right
/// within a row) and tile the area exactly: no gaps, no overlaps. Trailing
/// regions at the right and bottom edges are clipped when the area is not
/// a multiple of the step. The step must be at least 1.
pub fn regions(width: u32, height: u32, step: u32) -> impl Iterator<Item = Region> {
    (0..height).step_by(step as usize).flat_map(move |y1| {
        (0..width).step_by(step as usize).map(move |x1| Region {
            x1,
            y1,
            x2: x1.saturating_add(step).min(width),
            y2: y1.saturating_add(step).min(height),
        })
    })
}
