use super::*;

impl<T> SpatialHash<T> {
    // Appends id to the bucket for key, creating the bucket on first insert.
    pub(crate) fn bucket_add(&mut self, key: i64, id: u32) {
        self.cells.entry(key).or_default().push(id);
    }

    // Removes id from the bucket for key. Bucket order is meaningless, so
    // the entry is swapped with the last one. An emptied bucket is deleted
    // from the map entirely; the map size stays proportional to occupied
    // space, not to all-time-visited space.
    pub(crate) fn bucket_remove(&mut self, key: i64, id: u32) {
        if let Some(bucket) = self.cells.get_mut(&key) {
            if let Some(pos) = bucket.iter().position(|&other| other == id) {
                bucket.swap_remove(pos);
            }
            if bucket.is_empty() {
                self.cells.remove(&key);
            }
        }
    }

    /// Appends the ids currently occupying the cell at (cell_x, cell_y).
    pub fn cell_entities(&self, cell_x: i32, cell_y: i32, out: &mut Vec<u32>) {
        if let Some(bucket) = self.cells.get(&cell_key(cell_x, cell_y)) {
            out.extend_from_slice(bucket);
        }
    }
}
