use super::*;
use crate::collision;
use common::shapes::Rectangle;

impl<T> SpatialHash<T> {
    /// Inserts a rectangle and returns its id. Ids of removed entities are
    /// recycled; the returned id stays valid until the entity is removed.
    pub fn insert(&mut self, rect: Rectangle, data: T) -> u32 {
        let range = self.cell_range(rect);
        let id = self.allocate(rect, range, data);
        self.insert_into_cells(id);
        id
    }

    /// Moves or resizes an entity. A stale or unknown id is ignored.
    ///
    /// When the cell range is unchanged and overlap tracking is off, only
    /// the stored rectangle is rewritten and bucket membership is untouched,
    /// so sub-cell movement costs no map churn. With tracking on the entity
    /// is always re-inserted, since overlap relationships can change even
    /// when cell membership does not.
    pub fn update(&mut self, id: u32, rect: Rectangle) {
        let idx = match self.slot_index(id) {
            Some(idx) => idx,
            None => return,
        };
        let range = self.cell_range(rect);
        if !self.track_overlaps && range == self.slots[idx].range {
            let slot = &mut self.slots[idx];
            slot.x = rect.x;
            slot.y = rect.y;
            slot.width = rect.width;
            slot.height = rect.height;
            return;
        }
        if self.track_overlaps {
            self.clear_overlaps(id);
        }
        self.remove_from_cells(id);
        // The new rectangle must be in place before re-insertion so overlap
        // discovery tests the new extents.
        let slot = &mut self.slots[idx];
        slot.x = rect.x;
        slot.y = rect.y;
        slot.width = rect.width;
        slot.height = rect.height;
        slot.range = range;
        self.insert_into_cells(id);
    }

    /// Removes an entity and returns its data. A stale or unknown id is
    /// ignored and yields `None`.
    pub fn remove(&mut self, id: u32) -> Option<T> {
        self.slot_index(id)?;
        self.remove_from_cells(id);
        if self.track_overlaps {
            self.clear_overlaps(id);
        }
        self.free(id)
    }

    // Adds the entity to every cell of its stored range. With tracking on,
    // each cell's occupants are scanned before the new id is appended, so
    // the entity never meets itself and the id list being walked is never
    // the collection being mutated.
    pub(crate) fn insert_into_cells(&mut self, id: u32) {
        let idx = id as usize;
        let (range, ax, ay, aw, ah) = {
            let slot = &self.slots[idx];
            (slot.range, slot.x, slot.y, slot.width, slot.height)
        };
        let track = self.track_overlaps;
        for cx in range.min_x..range.max_x {
            for cy in range.min_y..range.max_y {
                let key = cell_key(cx, cy);
                if track {
                    let Self { cells, slots, .. } = self;
                    if let Some(bucket) = cells.get(&key) {
                        for &other in bucket.iter() {
                            let o = &slots[other as usize];
                            let (ox, oy, ow, oh) = (o.x, o.y, o.width, o.height);
                            if collision::overlaps(ax, ay, aw, ah, ox, oy, ow, oh) {
                                overlap::sorted_insert(&mut slots[other as usize].overlaps, id);
                                overlap::sorted_insert(&mut slots[idx].overlaps, other);
                            }
                        }
                    }
                }
                self.bucket_add(key, id);
            }
        }
    }

    // Clears the entity out of every cell of its stored range.
    pub(crate) fn remove_from_cells(&mut self, id: u32) {
        let range = self.slots[id as usize].range;
        for cx in range.min_x..range.max_x {
            for cy in range.min_y..range.max_y {
                self.bucket_remove(cell_key(cx, cy), id);
            }
        }
    }
}
