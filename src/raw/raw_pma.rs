use alloc::vec::Vec;

use smallvec::SmallVec;

use super::thresholds;
use crate::comparator::Comparator;
use crate::error::PmaError;

/// Gather buffer for rebalancing. Windows near the leaves dominate, so most
/// rebalances stay on the stack.
type GatherBuffer<T> = SmallVec<[T; 32]>;

/// The core packed memory array backing `PmaSet`.
///
/// Items live in a flat array of optional slots, kept in comparator order
/// with empty slots interleaved. `LEAF_SIZE` fixes the width of the finest
/// rebalancing window; the capacity is always `LEAF_SIZE * 2^h` for `h >= 1`.
#[derive(Clone)]
pub(crate) struct RawPma<T, C, const LEAF_SIZE: usize> {
    /// The backing array: occupied slots interleaved with gaps.
    slots: Vec<Option<T>>,
    /// Cached count of occupied slots.
    len: usize,
    /// The ordering items are kept in.
    comparator: C,
    /// Windows redistributed by the most recent operation; the tests audit
    /// their densities against the bands.
    #[cfg(test)]
    rebalanced: Vec<(usize, usize, usize)>,
}

impl<T, C, const LEAF_SIZE: usize> RawPma<T, C, LEAF_SIZE> {
    /// Creates an empty array with the minimum capacity of two leaves.
    pub(crate) fn new(comparator: C) -> Self {
        assert!(LEAF_SIZE > 0, "`RawPma::new()` - `LEAF_SIZE` must be positive!");
        let mut slots = Vec::new();
        slots.resize_with(LEAF_SIZE * 2, || None);
        Self {
            slots,
            len: 0,
            comparator,
            #[cfg(test)]
            rebalanced: Vec::new(),
        }
    }

    /// Returns the number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no slot is occupied.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total number of slots, occupied or not.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the backing slots for iteration.
    pub(crate) fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Drops every item and resets the array to its minimum capacity.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.slots.resize_with(LEAF_SIZE * 2, || None);
        self.len = 0;
        #[cfg(test)]
        self.rebalanced.clear();
    }

    /// Depth of the implicit rebalancing tree at the current capacity.
    fn height(&self) -> usize {
        thresholds::height(self.slots.len(), LEAF_SIZE)
    }

    /// Counts the occupied slots of `[begin, end)`.
    fn count_occupied(&self, begin: usize, end: usize) -> usize {
        self.slots[begin..end].iter().filter(|slot| slot.is_some()).count()
    }

    /// Empties every occupied slot of `[begin, end)` into an ordered buffer.
    fn gather(&mut self, begin: usize, end: usize) -> GatherBuffer<T> {
        self.slots[begin..end].iter_mut().filter_map(Option::take).collect()
    }

    /// Spreads `buffer` back over `[begin, end)` at an even spacing.
    ///
    /// Item `j` lands at `begin + round(j * width / count)`, leaving at least
    /// `floor(width / count) - 1` empty slots between successive items. Every
    /// slot of the window must be empty on entry.
    fn redistribute(&mut self, begin: usize, end: usize, buffer: GatherBuffer<T>) {
        let width = end - begin;
        let count = buffer.len();
        if count == 0 {
            return;
        }
        debug_assert!(count <= width);

        for (position, item) in buffer.into_iter().enumerate() {
            // round(position * width / count), computed without floats.
            let offset = (position * width + count / 2) / count;
            debug_assert!(self.slots[begin + offset].is_none());
            self.slots[begin + offset] = Some(item);
        }
    }
}

impl<T, C: Comparator<T>, const LEAF_SIZE: usize> RawPma<T, C, LEAF_SIZE> {
    /// Locates `probe` in the gapped array.
    ///
    /// Returns the index of the occupied slot equivalent to `probe` if one
    /// exists; otherwise an in-bounds index bracketing `probe`'s position
    /// (the leftmost candidate when the neighborhood is empty).
    pub(crate) fn index_of(&self, probe: &T) -> usize {
        let capacity = self.slots.len();
        let mut low = 0;
        let mut high = capacity - 1;

        while low <= high {
            let midpoint = low + (high - low) / 2;

            // Walk right past gaps; if that runs off the window, retry
            // leftward from the original midpoint.
            let mut mid = midpoint;
            while mid <= high && self.slots[mid].is_none() {
                mid += 1;
            }
            if mid > high {
                mid = midpoint;
                loop {
                    if self.slots[mid].is_some() {
                        break;
                    }
                    if mid == low {
                        // The whole window is empty.
                        return low;
                    }
                    mid -= 1;
                }
            }

            let occupant = self.slots[mid].as_ref().expect("`RawPma::index_of()` - `mid` must be occupied");
            if self.comparator.less(occupant, probe) {
                low = mid + 1;
            } else if self.comparator.greater(occupant, probe) {
                if mid == 0 {
                    // The probe orders before every occupant.
                    return low;
                }
                high = mid - 1;
            } else {
                return mid;
            }
        }

        if low == capacity { low - 1 } else { low }
    }

    /// Returns the occupied slot equivalent to `probe`, if any.
    pub(crate) fn get(&self, probe: &T) -> Option<&T> {
        match &self.slots[self.index_of(probe)] {
            Some(occupant) if self.comparator.equivalent(occupant, probe) => Some(occupant),
            _ => None,
        }
    }

    /// Returns the smallest item strictly greater than `probe`, if any.
    pub(crate) fn successor(&self, probe: &T) -> Option<&T> {
        let start = self.index_of(probe);
        self.slots[start..].iter().flatten().find(|&item| self.comparator.greater(item, probe))
    }

    /// Inserts `item` at its ordered position.
    ///
    /// Fails with [`PmaError::DuplicateKey`] if an equivalent item is already
    /// present, and with [`PmaError::CapacityExhausted`] if the backing array
    /// can no longer double.
    pub(crate) fn insert(&mut self, item: T) -> Result<(), PmaError> {
        #[cfg(test)]
        self.rebalanced.clear();

        let mut index = self.index_of(&item);
        if let Some(occupant) = &self.slots[index] {
            if self.comparator.equivalent(occupant, &item) {
                return Err(PmaError::DuplicateKey);
            }
        }

        // Pre-check the enclosing leaf as if the item were already placed;
        // a full leaf forces a rebalance before the local shift.
        let leaf_begin = (index / LEAF_SIZE) * LEAF_SIZE;
        let leaf_end = leaf_begin + LEAF_SIZE;
        let count = self.count_occupied(leaf_begin, leaf_end) + 1;
        let height = self.height();
        let (_, upper) = thresholds::bounds(height, height);
        if count as f64 / LEAF_SIZE as f64 > upper {
            self.scan(leaf_begin, leaf_end, count, height - 1)?;
            index = self.index_of(&item);
        }

        self.place_near(item, index);
        self.len += 1;
        Ok(())
    }

    /// Removes the item equivalent to `probe`. Absent items are a no-op.
    pub(crate) fn erase(&mut self, probe: &T) -> bool {
        #[cfg(test)]
        self.rebalanced.clear();

        let index = self.index_of(probe);
        match &self.slots[index] {
            Some(occupant) if self.comparator.equivalent(occupant, probe) => {}
            _ => return false,
        }

        self.slots[index] = None;
        self.len -= 1;

        let leaf_begin = (index / LEAF_SIZE) * LEAF_SIZE;
        let leaf_end = leaf_begin + LEAF_SIZE;
        let count = self.count_occupied(leaf_begin, leaf_end);
        let height = self.height();
        let (lower, _) = thresholds::bounds(height, height);
        if (count as f64 / LEAF_SIZE as f64) < lower {
            // A removal only lowers densities, so this rebalance may
            // rearrange or shrink but never grow.
            self.scan(leaf_begin, leaf_end, count, height - 1)
                .expect("`RawPma::erase()` - rebalance after a removal cannot grow");
        }
        true
    }

    /// Restores the density bands after `[begin, end)` went out of band.
    ///
    /// `accum_count` is the caller's occupied count for `[begin, end)` and
    /// `depth` is the depth of the window's *parent*. The walk ascends until
    /// a parent window is back inside its band and can be evenly
    /// redistributed; if even the root is out of band, the capacity doubles
    /// or halves (never below two leaves) and everything is spread over the
    /// resized array.
    fn scan(&mut self, begin: usize, end: usize, accum_count: usize, depth: usize) -> Result<(), PmaError> {
        let width = end - begin;
        let (sibling_begin, sibling_end) = thresholds::sibling(begin, end);
        let sibling_count = self.count_occupied(sibling_begin, sibling_end);
        let count = accum_count + sibling_count;
        let density = count as f64 / (width * 2) as f64;
        let (lower, upper) = thresholds::bounds(depth, self.height());
        let (parent_begin, parent_end) = thresholds::parent(begin, end);

        if lower <= density && density <= upper {
            let buffer = self.gather(parent_begin, parent_end);
            self.redistribute(parent_begin, parent_end, buffer);
            #[cfg(test)]
            self.rebalanced.push((parent_begin, parent_end, depth));
            return Ok(());
        }

        if depth == 0 {
            let capacity = self.slots.len();
            if density > upper {
                let doubled = capacity.checked_mul(2).ok_or(PmaError::CapacityExhausted)?;
                let buffer = self.gather(0, capacity);
                self.slots.resize_with(doubled, || None);
                self.redistribute(0, doubled, buffer);
            } else if density < lower && capacity > LEAF_SIZE * 2 {
                let buffer = self.gather(0, capacity);
                self.slots.truncate(capacity / 2);
                self.redistribute(0, capacity / 2, buffer);
            } else {
                // Out of band at the root but already at minimum capacity:
                // spread the items back out over the whole array.
                let buffer = self.gather(0, capacity);
                self.redistribute(0, capacity, buffer);
            }
            return Ok(());
        }

        self.scan(parent_begin, parent_end, count, depth - 1)
    }

    /// Places `item` at or next to `index`, shifting a run of occupied slots
    /// into the nearest gap when the slot is taken.
    fn place_near(&mut self, item: T, index: usize) {
        let Some(occupant) = &self.slots[index] else {
            self.slots[index] = Some(item);
            return;
        };

        // Keep the ordering around the displaced occupant: an item heading
        // past it writes one slot beyond, toward the gap.
        let (gap, on_right) = self.closest_gap(index);
        let target = if on_right && self.comparator.greater(&item, occupant) {
            index + 1
        } else if !on_right && self.comparator.less(&item, occupant) {
            index - 1
        } else {
            index
        };

        if on_right {
            self.slots[target..=gap].rotate_right(1);
        } else {
            self.slots[gap..=target].rotate_left(1);
        }
        debug_assert!(self.slots[target].is_none());
        self.slots[target] = Some(item);
    }

    /// Finds the empty slot nearest to `index` by symmetric outward scan.
    ///
    /// Returns the gap's index and whether it lies to the right; ties prefer
    /// the right side. The caller must guarantee at least one empty slot.
    fn closest_gap(&self, index: usize) -> (usize, bool) {
        let capacity = self.slots.len();
        for distance in 1..capacity {
            let right = index + distance;
            if right < capacity && self.slots[right].is_none() {
                return (right, true);
            }
            match index.checked_sub(distance) {
                Some(left) if self.slots[left].is_none() => return (left, false),
                _ => {}
            }
        }
        panic!("`RawPma::closest_gap()` - no empty slot in the array!");
    }
}
