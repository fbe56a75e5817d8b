use super::*;
use crate::error::{SpatialHashError, SpatialHashResult};
use common::shapes::Rectangle;

impl<T> SpatialHash<T> {
    /// Creates a grid with the given cell dimensions and default
    /// configuration (overlap tracking disabled).
    pub fn new(cell_width: f32, cell_height: f32) -> SpatialHashResult<Self> {
        Self::new_with_config(cell_width, cell_height, Config::default())
    }

    pub fn new_with_config(
        cell_width: f32,
        cell_height: f32,
        config: Config,
    ) -> SpatialHashResult<Self> {
        validate_cell_dims(cell_width, cell_height)?;
        let mut slots = Vec::new();
        if config.entity_capacity > 0 {
            slots.reserve(config.entity_capacity);
        }
        Ok(Self {
            cells: FxHashMap::default(),
            slots,
            free_ids: Vec::new(),
            cell_width,
            cell_height,
            inv_cell_width: 1.0 / cell_width,
            inv_cell_height: 1.0 / cell_height,
            alive_count: 0,
            track_overlaps: config.track_overlaps,
        })
    }

    /// Releases all buckets, entities, and freelist storage. Cell dimensions
    /// and the overlap-tracking mode are retained, so the grid behaves as
    /// freshly initialized.
    pub fn clear(&mut self) {
        self.cells = FxHashMap::default();
        self.slots = Vec::new();
        self.free_ids = Vec::new();
        self.alive_count = 0;
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.alive_count
    }

    pub fn is_empty(&self) -> bool {
        self.alive_count == 0
    }

    pub fn cell_size(&self) -> (f32, f32) {
        (self.cell_width, self.cell_height)
    }

    pub fn track_overlaps(&self) -> bool {
        self.track_overlaps
    }

    /// Whether `id` currently denotes a live entity.
    pub fn contains(&self, id: u32) -> bool {
        self.slot_index(id).is_some()
    }

    pub fn data(&self, id: u32) -> Option<&T> {
        let idx = self.slot_index(id)?;
        self.slots[idx].data.as_ref()
    }

    pub fn data_mut(&mut self, id: u32) -> Option<&mut T> {
        let idx = self.slot_index(id)?;
        self.slots[idx].data.as_mut()
    }

    /// The entity's current rectangle.
    pub fn rect(&self, id: u32) -> Option<Rectangle> {
        let idx = self.slot_index(id)?;
        let slot = &self.slots[idx];
        Some(Rectangle::new(slot.x, slot.y, slot.width, slot.height))
    }

    /// The cells a rectangle would occupy under this grid's cell size.
    pub fn cell_range(&self, rect: Rectangle) -> CellRange {
        CellRange::from_rect(rect, self.inv_cell_width, self.inv_cell_height)
    }

    /// (occupied cell count, entity table slot count), dead slots included.
    pub fn storage_counts(&self) -> (usize, usize) {
        (self.cells.len(), self.slots.len())
    }

    // Single authoritative liveness check: the id must be in range and the
    // slot must still carry it. Every mutating operation re-validates
    // through this before touching anything.
    pub(crate) fn slot_index(&self, id: u32) -> Option<usize> {
        let idx = id as usize;
        if idx < self.slots.len() && self.slots[idx].id == id {
            Some(idx)
        } else {
            None
        }
    }

    pub(crate) fn allocate(&mut self, rect: Rectangle, range: CellRange, data: T) -> u32 {
        self.alive_count += 1;
        if let Some(id) = self.free_ids.pop() {
            let slot = &mut self.slots[id as usize];
            debug_assert!(slot.id == DEAD_ID && slot.overlaps.is_empty());
            slot.id = id;
            slot.x = rect.x;
            slot.y = rect.y;
            slot.width = rect.width;
            slot.height = rect.height;
            slot.range = range;
            slot.data = Some(data);
            id
        } else {
            let id = self.slots.len() as u32;
            self.slots.push(Slot {
                id,
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                range,
                overlaps: OverlapSet::new(),
                data: Some(data),
            });
            id
        }
    }

    // Marks the slot dead and returns the caller's data. The caller must
    // already have cleared every bucket entry and overlap back-reference for
    // the id; nothing may reference it once it is recyclable. A trailing
    // slot is truncated instead of going on the freelist.
    pub(crate) fn free(&mut self, id: u32) -> Option<T> {
        let idx = id as usize;
        let slot = &mut self.slots[idx];
        slot.id = DEAD_ID;
        slot.overlaps = OverlapSet::new();
        let data = slot.data.take();
        self.alive_count -= 1;
        if idx + 1 == self.slots.len() {
            self.slots.pop();
        } else {
            self.free_ids.push(id);
        }
        data
    }
}

fn validate_cell_dims(width: f32, height: f32) -> SpatialHashResult<()> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(SpatialHashError::InvalidCellSize { width, height });
    }
    Ok(())
}
