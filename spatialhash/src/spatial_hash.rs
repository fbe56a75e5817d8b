mod buckets;
mod cell;
mod config;
mod core;
mod overlap;
mod query;
mod update;

pub use cell::{cell_key, CellRange, CELL_KEY_MULT};
pub use config::Config;

use fxhash::FxHashMap;
use smallvec::SmallVec;

/// Sentinel stored in a slot's id field while the slot is dead.
pub(crate) const DEAD_ID: u32 = u32::MAX;

/// Ids of the entities whose footprint intersects one grid cell. Unordered;
/// removal swaps with the last entry.
pub(crate) type Bucket = SmallVec<[u32; 4]>;

/// Sorted, duplicate-free ids of the entities one entity currently overlaps.
pub(crate) type OverlapSet = SmallVec<[u32; 8]>;

/// One entry of the entity table. The slot index doubles as the public id:
/// a slot is live iff its id field equals its index, and a dead slot sits on
/// the freelist with its id set to [`DEAD_ID`] so stale handles miss.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    pub(crate) id: u32,
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) range: CellRange,
    pub(crate) overlaps: OverlapSet,
    pub(crate) data: Option<T>,
}

/// Uniform spatial hash grid over axis-aligned rectangles.
///
/// Entities are rectangles tagged with caller-owned data. The grid maps each
/// entity to the cells its rectangle covers and keeps a bucket of occupant
/// ids per non-empty cell, which makes rectangle-vs-rectangle broad-phase
/// queries proportional to occupied space rather than entity count. With
/// [`Config::track_overlaps`] enabled it also maintains, per entity, the set
/// of ids it currently overlaps, updated incrementally on every
/// insert/update/remove.
///
/// A live entity's bucket membership always reflects its stored cell range,
/// never its raw rectangle, so membership is recomputed only when the
/// rectangle actually changes.
#[derive(Debug)]
pub struct SpatialHash<T> {
    cells: FxHashMap<i64, Bucket>,
    slots: Vec<Slot<T>>,
    free_ids: Vec<u32>,
    cell_width: f32,
    cell_height: f32,
    inv_cell_width: f32,
    inv_cell_height: f32,
    alive_count: usize,
    track_overlaps: bool,
}
