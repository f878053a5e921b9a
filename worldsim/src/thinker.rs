//! Thinker storage. Every object that acts each tick (map objects, moving
//! sector parts, light effects) lives in one arena and is run in insertion
//! order. Handles are generational so a stale handle to a recycled slot can
//! never reach the wrong object.
//!
//! Removal is lazy: `remove` only marks the slot, the sweep during
//! `run_thinkers` unlinks and recycles it. This keeps the run-order links
//! valid for any iterator currently walking the list.

use std::fmt;

use log::error;

use crate::defs::WorldError;
use crate::env::ceiling::CeilingMove;
use crate::env::doors::VerticalDoor;
use crate::env::floor::FloorMove;
use crate::env::lights::{FireFlicker, Glow, LightFlash, StrobeFlash};
use crate::env::platforms::Platform;
use crate::level::Level;
use crate::thing::MapObject;

const NO_LINK: u32 = u32::MAX;

/// Stable reference to a slot in `ThinkerAlloc`. Survives any number of
/// other slots being recycled; goes stale only when its own slot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThinkerId {
    idx: u32,
    generation: u32,
}

impl ThinkerId {
    pub const fn index(self) -> usize {
        self.idx as usize
    }
}

/// A handle that never resolves. Used before an object is linked in.
impl Default for ThinkerId {
    fn default() -> Self {
        Self {
            idx: u32::MAX,
            generation: u32::MAX,
        }
    }
}

impl fmt::Display for ThinkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thinker {}.{}", self.idx, self.generation)
    }
}

/// All the thinker-capable types.
pub enum ThinkerData {
    MapObject(MapObject),
    VerticalDoor(VerticalDoor),
    Platform(Platform),
    CeilingMove(CeilingMove),
    FloorMove(FloorMove),
    LightFlash(LightFlash),
    StrobeFlash(StrobeFlash),
    Glow(Glow),
    FireFlicker(FireFlicker),
    /// Marked dead, waiting for the sweep to recycle the slot
    Remove,
    /// Slot unused (or its data is temporarily detached for a think call)
    Free,
}

impl ThinkerData {
    pub fn mobj(&self) -> Option<&MapObject> {
        match self {
            ThinkerData::MapObject(m) => Some(m),
            _ => None,
        }
    }

    pub fn mobj_mut(&mut self) -> Option<&mut MapObject> {
        match self {
            ThinkerData::MapObject(m) => Some(m),
            _ => None,
        }
    }

    fn run(&mut self, level: &mut Level) -> bool {
        match self {
            ThinkerData::MapObject(m) => m.think(level),
            ThinkerData::VerticalDoor(d) => d.think(level),
            ThinkerData::Platform(p) => p.think(level),
            ThinkerData::CeilingMove(c) => c.think(level),
            ThinkerData::FloorMove(fl) => fl.think(level),
            ThinkerData::LightFlash(l) => l.think(level),
            ThinkerData::StrobeFlash(s) => s.think(level),
            ThinkerData::Glow(g) => g.think(level),
            ThinkerData::FireFlicker(f) => f.think(level),
            ThinkerData::Remove | ThinkerData::Free => false,
        }
    }
}

impl fmt::Debug for ThinkerData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThinkerData::MapObject(_) => "MapObject",
            ThinkerData::VerticalDoor(_) => "VerticalDoor",
            ThinkerData::Platform(_) => "Platform",
            ThinkerData::CeilingMove(_) => "CeilingMove",
            ThinkerData::FloorMove(_) => "FloorMove",
            ThinkerData::LightFlash(_) => "LightFlash",
            ThinkerData::StrobeFlash(_) => "StrobeFlash",
            ThinkerData::Glow(_) => "Glow",
            ThinkerData::FireFlicker(_) => "FireFlicker",
            ThinkerData::Remove => "Remove",
            ThinkerData::Free => "Free",
        };
        f.write_str(name)
    }
}

/// Implemented by everything storable in `ThinkerData`. The object is
/// detached from the arena for the duration of the call, so it can freely
/// take `&mut Level` without aliasing itself.
pub trait Think {
    /// Run one tick. Return true to have the thinker removed afterwards.
    fn think(&mut self, level: &mut Level) -> bool;
}

struct Slot {
    data: ThinkerData,
    generation: u32,
    prev: u32,
    next: u32,
}

pub struct ThinkerAlloc {
    slots: Vec<Slot>,
    free: Vec<u32>,
    head: u32,
    tail: u32,
    len: usize,
    capacity: usize,
}

impl ThinkerAlloc {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NO_LINK,
            tail: NO_LINK,
            len: 0,
            capacity,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert at the end of the run order. New thinkers pushed during a tick
    /// still run that same tick.
    pub fn push(&mut self, data: ThinkerData) -> Result<ThinkerId, WorldError> {
        let idx = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.data = data;
            slot.prev = self.tail;
            slot.next = NO_LINK;
            idx
        } else {
            if self.slots.len() >= self.capacity {
                error!("thinker storage full at {}", self.capacity);
                return Err(WorldError::ThinkerCapacity(self.capacity));
            }
            self.slots.push(Slot {
                data,
                generation: 0,
                prev: self.tail,
                next: NO_LINK,
            });
            (self.slots.len() - 1) as u32
        };

        if self.tail != NO_LINK {
            self.slots[self.tail as usize].next = idx;
        } else {
            self.head = idx;
        }
        self.tail = idx;
        self.len += 1;

        Ok(ThinkerId {
            idx,
            generation: self.slots[idx as usize].generation,
        })
    }

    fn slot(&self, id: ThinkerId) -> Option<&Slot> {
        self.slots
            .get(id.idx as usize)
            .filter(|s| s.generation == id.generation)
    }

    fn slot_mut(&mut self, id: ThinkerId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.idx as usize)
            .filter(|s| s.generation == id.generation)
    }

    pub fn get(&self, id: ThinkerId) -> Option<&ThinkerData> {
        self.slot(id).and_then(|s| match s.data {
            ThinkerData::Remove | ThinkerData::Free => None,
            ref d => Some(d),
        })
    }

    pub fn get_mut(&mut self, id: ThinkerId) -> Option<&mut ThinkerData> {
        self.slot_mut(id).and_then(|s| match s.data {
            ThinkerData::Remove | ThinkerData::Free => None,
            ref mut d => Some(d),
        })
    }

    /// Shorthand for the common map-object lookup. None if the handle is
    /// stale, marked for removal, or not a map object.
    pub fn mobj(&self, id: ThinkerId) -> Option<&MapObject> {
        self.get(id).and_then(ThinkerData::mobj)
    }

    pub fn mobj_mut(&mut self, id: ThinkerId) -> Option<&mut MapObject> {
        self.get_mut(id).and_then(ThinkerData::mobj_mut)
    }

    /// True if the handle is queued for removal but not yet swept. Detached
    /// thinkers use this to notice they removed themselves mid-think.
    pub(crate) fn pending_removal(&self, id: ThinkerId) -> bool {
        self.slot(id)
            .map(|s| matches!(s.data, ThinkerData::Remove))
            .unwrap_or(false)
    }

    /// Queue for removal. The slot is recycled by the next sweep; until then
    /// lookups on this handle return None.
    pub fn remove(&mut self, id: ThinkerId) {
        if let Some(slot) = self.slot_mut(id) {
            slot.data = ThinkerData::Remove;
        }
    }

    /// Detach the data so it can be handed `&mut Level`. Pair with `restore`.
    pub(crate) fn take(&mut self, id: ThinkerId) -> Option<ThinkerData> {
        let slot = self.slot_mut(id)?;
        match slot.data {
            ThinkerData::Remove | ThinkerData::Free => None,
            _ => Some(std::mem::replace(&mut slot.data, ThinkerData::Free)),
        }
    }

    /// Put detached data back. If the thinker was queued for removal while
    /// detached the removal wins and the data is dropped.
    pub(crate) fn restore(&mut self, id: ThinkerId, data: ThinkerData) {
        if let Some(slot) = self.slot_mut(id) {
            if matches!(slot.data, ThinkerData::Remove) {
                return;
            }
            slot.data = data;
        }
    }

    fn unlink(&mut self, idx: u32) {
        let (prev, next) = {
            let slot = &self.slots[idx as usize];
            (slot.prev, slot.next)
        };
        if prev != NO_LINK {
            self.slots[prev as usize].next = next;
        } else {
            self.head = next;
        }
        if next != NO_LINK {
            self.slots[next as usize].prev = prev;
        } else {
            self.tail = prev;
        }
        let slot = &mut self.slots[idx as usize];
        slot.data = ThinkerData::Free;
        slot.prev = NO_LINK;
        slot.next = NO_LINK;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(idx);
        self.len -= 1;
    }

    fn current_id(&self, idx: u32) -> ThinkerId {
        ThinkerId {
            idx,
            generation: self.slots[idx as usize].generation,
        }
    }

    /// Run every live thinker once, in insertion order, sweeping out the
    /// slots that were queued for removal.
    pub fn run_thinkers(level: &mut Level) {
        let mut cursor = level.thinkers.head;
        while cursor != NO_LINK {
            if matches!(
                level.thinkers.slots[cursor as usize].data,
                ThinkerData::Remove
            ) {
                let next = level.thinkers.slots[cursor as usize].next;
                level.thinkers.unlink(cursor);
                cursor = next;
                continue;
            }

            let id = level.thinkers.current_id(cursor);
            if let Some(mut data) = level.thinkers.take(id) {
                let remove = data.run(level);
                level.thinkers.restore(id, data);
                if remove {
                    level.thinkers.remove(id);
                }
            }
            // Read after the call so thinkers pushed mid-tick get their turn
            cursor = level.thinkers.slots[cursor as usize].next;
        }
    }

    /// Iterate live thinkers without running them
    pub fn iter(&self) -> ThinkerIter<'_> {
        ThinkerIter {
            alloc: self,
            cursor: self.head,
        }
    }
}

pub struct ThinkerIter<'a> {
    alloc: &'a ThinkerAlloc,
    cursor: u32,
}

impl<'a> Iterator for ThinkerIter<'a> {
    type Item = (ThinkerId, &'a ThinkerData);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor != NO_LINK {
            let idx = self.cursor;
            let slot = &self.alloc.slots[idx as usize];
            self.cursor = slot.next;
            match slot.data {
                ThinkerData::Remove | ThinkerData::Free => continue,
                ref d => {
                    return Some((
                        ThinkerId {
                            idx,
                            generation: slot.generation,
                        },
                        d,
                    ));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::lights::LightFlash;

    fn flash() -> ThinkerData {
        ThinkerData::LightFlash(LightFlash {
            sector: 0,
            count: 4,
            max_light: 255,
            min_light: 0,
            max_time: 64,
            min_time: 7,
        })
    }

    #[test]
    fn push_and_get() {
        let mut links = ThinkerAlloc::new(8);
        let id = links.push(flash()).unwrap();
        assert_eq!(links.len(), 1);
        assert!(links.get(id).is_some());
        assert!(links.mobj(id).is_none());
    }

    #[test]
    fn capacity_is_enforced() {
        let mut links = ThinkerAlloc::new(2);
        links.push(flash()).unwrap();
        links.push(flash()).unwrap();
        assert!(links.push(flash()).is_err());
    }

    #[test]
    fn removed_handle_goes_dark_immediately() {
        let mut links = ThinkerAlloc::new(8);
        let id = links.push(flash()).unwrap();
        links.remove(id);
        assert!(links.get(id).is_none());
        // Slot not recycled until a sweep, so len is unchanged
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let mut links = ThinkerAlloc::new(8);
        let a = links.push(flash()).unwrap();
        let b = links.push(flash()).unwrap();
        let c = links.push(flash()).unwrap();
        let order: Vec<ThinkerId> = links.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn recycled_slot_invalidates_old_handle() {
        let mut links = ThinkerAlloc::new(8);
        let a = links.push(flash()).unwrap();
        links.remove(a);
        // Simulate the sweep unlinking the marked slot
        links.unlink(a.idx);
        let b = links.push(flash()).unwrap();
        assert_eq!(a.idx, b.idx);
        assert!(links.get(a).is_none());
        assert!(links.get(b).is_some());
    }

    #[test]
    fn take_restore_round_trip() {
        let mut links = ThinkerAlloc::new(8);
        let id = links.push(flash()).unwrap();
        let data = links.take(id).unwrap();
        // While detached, lookups miss
        assert!(links.get(id).is_none());
        links.restore(id, data);
        assert!(links.get(id).is_some());
    }

    #[test]
    fn removal_during_detach_wins() {
        let mut links = ThinkerAlloc::new(8);
        let id = links.push(flash()).unwrap();
        let data = links.take(id).unwrap();
        links.remove(id);
        links.restore(id, data);
        assert!(links.get(id).is_none());
    }
}
