#[derive(Debug, Clone)]
pub struct Config {
    /// Maintain per-entity overlap sets incrementally on every
    /// insert/update/remove.
    pub track_overlaps: bool,
    /// Slots to pre-reserve in the entity table.
    pub entity_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            track_overlaps: false,
            entity_capacity: 0,
        }
    }
}
