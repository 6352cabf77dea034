// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use crate::config::Branching;
use heap_array::{BinaryHeapArray, TernaryHeapArray};
use ranking_types::{maybe_address, Address, U256, U96};

/// A heap array whose branching factor is picked at runtime.
pub enum Ranking {
    Binary(BinaryHeapArray),
    Ternary(TernaryHeapArray),
}

macro_rules! dispatch {
    ($self:expr, $heap:ident => $body:expr) => {
        match $self {
            Ranking::Binary($heap) => $body,
            Ranking::Ternary($heap) => $body,
        }
    };
}

impl Ranking {
    pub fn new(branching: Branching) -> Self {
        match branching {
            Branching::Binary => Ranking::Binary(BinaryHeapArray::new()),
            Branching::Ternary => Ranking::Ternary(TernaryHeapArray::new()),
        }
    }

    pub fn branching(&self) -> Branching {
        match self {
            Ranking::Binary(_) => Branching::Binary,
            Ranking::Ternary(_) => Branching::Ternary,
        }
    }

    pub fn update(
        &mut self, id: &Address, former_value: U256, new_value: U256,
        capacity: usize,
    ) -> heap_array::Result<()>
    {
        dispatch!(self, heap => {
            heap.update(id, former_value, new_value, capacity)
        })
    }

    pub fn length(&self) -> usize { dispatch!(self, heap => heap.length()) }

    pub fn size(&self) -> usize { dispatch!(self, heap => heap.size()) }

    pub fn is_empty(&self) -> bool { dispatch!(self, heap => heap.is_empty()) }

    pub fn contains(&self, id: &Address) -> bool {
        dispatch!(self, heap => heap.contains(id))
    }

    pub fn value_of(&self, id: &Address) -> U96 {
        dispatch!(self, heap => heap.value_of(id))
    }

    pub fn head(&self) -> Address { dispatch!(self, heap => heap.head()) }

    pub fn tail(&self) -> Address { dispatch!(self, heap => heap.tail()) }

    pub fn prev(&self, id: &Address) -> Address {
        dispatch!(self, heap => heap.prev(id))
    }

    pub fn next(&self, id: &Address) -> Address {
        dispatch!(self, heap => heap.next(id))
    }

    /// The head along with its value, if any.
    pub fn top(&self) -> Option<(Address, U96)> {
        let head = maybe_address(&self.head())?;
        Some((head, self.value_of(&head)))
    }

    /// All records in array order.
    pub fn snapshot(&self) -> Vec<(Address, U96)> {
        dispatch!(self, heap => heap.iter().collect())
    }

    pub fn clear(&mut self) { dispatch!(self, heap => heap.clear()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(n: u64) -> Address { Address::from_low_u64_be(n) }

    #[test]
    fn test_branching_is_kept() {
        assert_eq!(
            Ranking::new(Branching::Binary).branching(),
            Branching::Binary
        );
        assert_eq!(
            Ranking::new(Branching::Ternary).branching(),
            Branching::Ternary
        );
    }

    #[test]
    fn test_shrink_depends_on_branching() {
        let mut binary = Ranking::new(Branching::Binary);
        let mut ternary = Ranking::new(Branching::Ternary);
        for ranking in [&mut binary, &mut ternary] {
            for n in 1..=6u64 {
                ranking
                    .update(&address(n), U256::zero(), U256::from(n), 50)
                    .unwrap();
            }
            assert_eq!(ranking.size(), 6);
            ranking
                .update(&address(7), U256::zero(), U256::from(7), 3)
                .unwrap();
        }
        // 6 / 3 = 2, then 3 / 3 = 1 after the insert.
        assert_eq!(ternary.size(), 1);
        // 6 / 2 = 3, 3 / 2 = 1, then 2 is already below the capacity.
        assert_eq!(binary.size(), 2);
        assert_eq!(binary.length(), 7);
        assert_eq!(ternary.length(), 7);
    }

    #[test]
    fn test_top_and_snapshot() {
        let mut ranking = Ranking::new(Branching::Ternary);
        assert_eq!(ranking.top(), None);
        assert!(ranking.snapshot().is_empty());

        ranking
            .update(&address(1), U256::zero(), U256::from(4), 50)
            .unwrap();
        ranking
            .update(&address(2), U256::zero(), U256::from(9), 50)
            .unwrap();
        assert_eq!(ranking.top(), Some((address(2), U96::from(9u64))));
        assert_eq!(
            ranking.snapshot(),
            vec![(address(2), U96::from(9u64)), (address(1), U96::from(4u64))]
        );
        assert_eq!(ranking.next(&address(2)), address(1));
        assert_eq!(ranking.prev(&address(1)), address(2));
        assert_eq!(ranking.tail(), address(1));

        ranking.clear();
        assert!(ranking.is_empty());
        assert!(!ranking.contains(&address(1)));
    }
}
