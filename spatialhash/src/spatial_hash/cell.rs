use common::shapes::Rectangle;

/// Multiplier packing a 2D cell coordinate into a single map key:
/// `key = cell_x * CELL_KEY_MULT + cell_y`.
pub const CELL_KEY_MULT: i64 = 1 << 32;

/// Packs a cell coordinate into the scalar key used by the bucket map. Each
/// axis gets half of the key's 64 bits and the key is never unpacked.
///
/// `i32` coordinates always fit their half, but the `f32` to `i32`
/// conversion in [`CellRange::from_rect`] saturates, so rectangles farther
/// than ±2^31 cells from the origin all collapse into the border cells.
/// That is a structural limit of the encoding and is not checked at runtime.
#[inline(always)]
pub fn cell_key(cell_x: i32, cell_y: i32) -> i64 {
    i64::from(cell_x) * CELL_KEY_MULT + i64::from(cell_y)
}

/// Integer cell coverage of a rectangle, half-open on both axes: the
/// rectangle occupies every cell (x, y) with `min_x <= x < max_x` and
/// `min_y <= y < max_y`. The range can be empty (`min >= max` on an axis),
/// in which case the rectangle occupies no cells at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl CellRange {
    #[inline(always)]
    pub(crate) fn from_rect(rect: Rectangle, inv_cell_width: f32, inv_cell_height: f32) -> Self {
        Self {
            min_x: (rect.x * inv_cell_width).floor() as i32,
            max_x: ((rect.x + rect.width) * inv_cell_width).ceil() as i32,
            min_y: (rect.y * inv_cell_height).floor() as i32,
            max_y: ((rect.y + rect.height) * inv_cell_height).ceil() as i32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }
}
