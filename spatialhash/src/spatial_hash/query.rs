use super::*;
use crate::collision;
use common::shapes::Rectangle;

impl<T> SpatialHash<T> {
    /// Appends the ids of all entities whose rectangle strictly overlaps
    /// `rect`. Candidates come from the cells the rectangle touches, and an
    /// entity spanning several of them is reported once.
    pub fn query_rect(&self, rect: Rectangle, out: &mut Vec<u32>) {
        let range = self.cell_range(rect);
        let start = out.len();
        for cx in range.min_x..range.max_x {
            for cy in range.min_y..range.max_y {
                if let Some(bucket) = self.cells.get(&cell_key(cx, cy)) {
                    for &id in bucket.iter() {
                        let slot = &self.slots[id as usize];
                        if collision::overlaps(
                            rect.x,
                            rect.y,
                            rect.width,
                            rect.height,
                            slot.x,
                            slot.y,
                            slot.width,
                            slot.height,
                        ) && !out[start..].contains(&id)
                        {
                            out.push(id);
                        }
                    }
                }
            }
        }
    }
}
