// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/


mod transition;

pub use ranking_types::{Address, RangeOverflow, U256, U96};
pub use transition::Transition;

use log::{debug, trace, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("the zero address can not be ranked")]
    ZeroIdentity,
    #[error(transparent)]
    RangeOverflow(#[from] RangeOverflow),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: Address,
    pub value: U96,
}

impl Record {
    pub fn new(id: Address, value: U96) -> Self { Record { id, value } }
}

/// The `HeapArray` keeps a `B`-ary max heap over the prefix
/// `[0, boundary)` of its records (the sorted region) and an unordered
/// overflow tail after it, along with a hash map from address to position.
///
/// The sorted region never grows beyond the capacity passed to `update`:
/// once it reaches the capacity, it is shrunk by repeated division by `B`,
/// and the dropped records stay in the overflow tail. Every update thus costs
/// `O(log_B(capacity))` no matter how many records are stored.
///
/// As long as the overflow tail is empty, `head` is the address with the
/// largest value. Records left in the tail are not compared again until an
/// increase promotes them, so after the root decreases or is removed, a tail
/// record may exceed it.
pub struct HeapArray<const B: usize> {
    records: Vec<Record>,
    boundary: usize,
    positions: HashMap<Address, usize>,
}

pub type BinaryHeapArray = HeapArray<2>;
pub type TernaryHeapArray = HeapArray<3>;

impl<const B: usize> Default for HeapArray<B> {
    fn default() -> Self { Self::new() }
}

impl<const B: usize> HeapArray<B> {
    const BRANCHING_CHECK: () =
        assert!(B >= 2, "a heap needs at least two children per node");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::BRANCHING_CHECK;
        Self {
            records: vec![],
            boundary: 0,
            positions: HashMap::new(),
        }
    }

    /// Move the record of `id` from `former_value` to `new_value`.
    ///
    /// A zero value means absent, so this inserts, removes, increases or
    /// decreases the record depending on the two values. `former_value` must
    /// be the value currently stored for `id` (zero if it is not stored).
    ///
    /// Both values are narrowed to 96 bits before anything is touched, so an
    /// `Err` always leaves the structure unchanged.
    pub fn update(
        &mut self, id: &Address, former_value: U256, new_value: U256,
        capacity: usize,
    ) -> Result<()>
    {
        let former_value = U96::try_from(former_value)?;
        let new_value = U96::try_from(new_value)?;
        let transition = Transition::classify(former_value, new_value);
        if transition == Transition::Insert && id.is_zero() {
            return Err(Error::ZeroIdentity);
        }

        self.boundary = Self::compute_size(self.boundary, capacity);
        trace!(
            "heap array update: id={:?} {} -> {} ({:?}), capacity={}",
            id,
            former_value,
            new_value,
            transition,
            capacity
        );

        match transition {
            Transition::NoOp => {}
            Transition::Remove => self.remove(id),
            Transition::Insert => self.insert(id, new_value, capacity),
            Transition::Increase => self.increase(id, new_value, capacity),
            Transition::Decrease => self.decrease(id, new_value),
        }
        Ok(())
    }

    /// Total number of records, sorted region and overflow tail together.
    #[inline]
    pub fn length(&self) -> usize { self.records.len() }

    /// Number of records in the sorted region.
    #[inline]
    pub fn size(&self) -> usize { self.boundary }

    #[inline]
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    #[inline]
    pub fn contains(&self, id: &Address) -> bool {
        self.positions.contains_key(id)
    }

    /// The value stored for `id`, or zero if it is absent.
    pub fn value_of(&self, id: &Address) -> U96 {
        match self.positions.get(id) {
            Some(index) => self.records[*index].value,
            None => U96::zero(),
        }
    }

    /// The address at the root of the sorted region, or the zero address if
    /// empty.
    pub fn head(&self) -> Address {
        self.records
            .first()
            .map_or_else(Address::zero, |record| record.id)
    }

    /// The address at the last position of the array. This is not
    /// necessarily the smallest value.
    pub fn tail(&self) -> Address {
        self.records
            .last()
            .map_or_else(Address::zero, |record| record.id)
    }

    /// The address one position before `id` in the array, or the zero
    /// address. Array order only matches value order along heap paths.
    pub fn prev(&self, id: &Address) -> Address {
        match self.positions.get(id) {
            Some(index) if *index > 0 => self.records[*index - 1].id,
            _ => Address::zero(),
        }
    }

    /// The address one position after `id` in the array, or the zero
    /// address.
    pub fn next(&self, id: &Address) -> Address {
        self.positions
            .get(id)
            .and_then(|index| self.records.get(*index + 1))
            .map_or_else(Address::zero, |record| record.id)
    }

    /// Iterate over all records in array order.
    pub fn iter(&self) -> impl Iterator<Item = (Address, U96)> + '_ {
        self.records.iter().map(|record| (record.id, record.value))
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.records.clear();
        self.boundary = 0;
    }

    /// Shrink `boundary` by repeated division by `B` until it is below
    /// `capacity`.
    fn compute_size(boundary: usize, capacity: usize) -> usize {
        let mut size = boundary;
        // A zero capacity would never be reached.
        while size > 0 && size >= capacity {
            size /= B;
        }
        if size != boundary {
            debug!(
                "heap array sorted region shrinks from {} to {} (capacity {})",
                boundary, size, capacity
            );
        }
        size
    }

    fn insert(&mut self, id: &Address, value: U96, capacity: usize) {
        if self.positions.contains_key(id) {
            warn!("heap array insert: {:?} is already ranked", id);
            return;
        }

        let boundary = self.boundary;
        let record = Record::new(*id, value);
        if boundary < self.records.len() {
            // Make room at the boundary by moving the first tail record to a
            // new slot at the end.
            let displaced = self.records[boundary];
            self.positions.insert(displaced.id, self.records.len());
            self.records.push(displaced);
        } else {
            self.records.push(record);
        }
        self.shift_up(record, boundary);
        self.boundary = Self::compute_size(boundary + 1, capacity);
    }

    fn increase(&mut self, id: &Address, value: U96, capacity: usize) {
        let index = match self.positions.get(id) {
            None => {
                warn!("heap array increase: {:?} is not ranked", id);
                return;
            }
            Some(i) => *i,
        };

        let record = Record::new(*id, value);
        if index < self.boundary {
            self.shift_up(record, index);
            return;
        }

        let boundary = self.boundary;
        debug!(
            "heap array promotes {:?} from position {} to the sorted region",
            id, index
        );
        let displaced = self.records[boundary];
        self.set_slot(index, displaced);
        self.shift_up(record, boundary);
        self.boundary = Self::compute_size(boundary + 1, capacity);
    }

    fn decrease(&mut self, id: &Address, value: U96) {
        let index = match self.positions.get(id) {
            None => {
                warn!("heap array decrease: {:?} is not ranked", id);
                return;
            }
            Some(i) => *i,
        };

        let record = Record::new(*id, value);
        if self.has_sorted_child(index) {
            self.shift_down(record, index);
        } else {
            self.set_slot(index, record);
        }
    }

    fn remove(&mut self, id: &Address) {
        let index = match self.positions.remove(id) {
            None => {
                warn!("heap array remove: {:?} is not ranked", id);
                return;
            }
            Some(i) => i,
        };
        let removed_value = self.records[index].value;

        if self.boundary == self.records.len() {
            self.boundary -= 1;
        }
        let last = match self.records.pop() {
            Some(record) => record,
            None => return,
        };
        if index == self.records.len() {
            return;
        }

        if index < self.boundary {
            if last.value < removed_value {
                self.shift_down(last, index);
            } else {
                self.shift_up(last, index);
            }
        } else {
            self.set_slot(index, last);
        }
    }

    /// Whether the node at `index` has at least one child inside the sorted
    /// region.
    #[inline]
    fn has_sorted_child(&self, index: usize) -> bool {
        B * index + 1 < self.boundary
    }

    #[inline]
    fn set_slot(&mut self, index: usize, record: Record) {
        self.positions.insert(record.id, index);
        self.records[index] = record;
    }

    /// Place `record` at `index` and move it towards the root while it is
    /// larger than its parent. The record previously stored at `index` is
    /// overwritten without being read.
    fn shift_up(&mut self, record: Record, index: usize) {
        let mut pos = index;
        while pos > 0 {
            let parent = (pos - 1) / B;
            if self.records[parent].value >= record.value {
                break;
            }
            let parent_record = self.records[parent];
            self.set_slot(pos, parent_record);
            pos = parent;
        }
        self.set_slot(pos, record);
    }

    /// Place `record` at `index` and move it away from the root while one of
    /// its children in the sorted region is larger. Among equal children the
    /// leftmost one wins.
    fn shift_down(&mut self, record: Record, index: usize) {
        let mut pos = index;
        loop {
            let first_child = B * pos + 1;
            let end = (first_child + B).min(self.boundary);

            let mut winner = pos;
            let mut winner_value = record.value;
            for child in first_child..end {
                if self.records[child].value > winner_value {
                    winner = child;
                    winner_value = self.records[child].value;
                }
            }
            if winner == pos {
                break;
            }

            let child_record = self.records[winner];
            self.set_slot(pos, child_record);
            pos = winner;
        }
        self.set_slot(pos, record);
    }
}
