// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use crate::{
    config::{Branching, RankingConfig},
    error::{RankingError, Result},
    ranking::Ranking,
};
use log::{debug, info};
use parking_lot::RwLock;
use ranking_types::{Address, U256, U96};

struct Inner {
    ranking: Ranking,
    capacity: usize,
}

/// A [`Ranking`] shared between callers.
///
/// Every call takes the one lock around the whole ranking, and updates are
/// given the configured capacity.
pub struct SharedRanking {
    inner: RwLock<Inner>,
}

impl SharedRanking {
    pub fn new(config: &RankingConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "build vote ranking: branching={:?} capacity={}",
            config.branching, config.capacity
        );
        Ok(Self {
            inner: RwLock::new(Inner {
                ranking: Ranking::new(config.branching),
                capacity: config.capacity,
            }),
        })
    }

    /// Move `id` from `former_value` to `new_value`, see
    /// [`heap_array::HeapArray::update`]. A rejected update leaves the
    /// ranking as it was.
    pub fn update(
        &self, id: &Address, former_value: U256, new_value: U256,
    ) -> Result<()> {
        let mut inner = self.inner.write();
        let capacity = inner.capacity;
        inner
            .ranking
            .update(id, former_value, new_value, capacity)
            .map_err(|e| {
                debug!("vote ranking rejects update of {:?}: {}", id, e);
                RankingError::from(e)
            })
    }

    pub fn capacity(&self) -> usize { self.inner.read().capacity }

    /// Change the capacity given to later updates. The sorted region shrinks
    /// lazily on the next update.
    pub fn set_capacity(&self, capacity: usize) -> Result<()> {
        if capacity == 0 {
            return Err(RankingError::InvalidConfig(
                "capacity must be positive".into(),
            ));
        }
        let mut inner = self.inner.write();
        info!(
            "vote ranking capacity changes from {} to {}",
            inner.capacity, capacity
        );
        inner.capacity = capacity;
        Ok(())
    }

    pub fn branching(&self) -> Branching {
        self.inner.read().ranking.branching()
    }

    pub fn length(&self) -> usize { self.inner.read().ranking.length() }

    pub fn size(&self) -> usize { self.inner.read().ranking.size() }

    pub fn is_empty(&self) -> bool { self.inner.read().ranking.is_empty() }

    pub fn contains(&self, id: &Address) -> bool {
        self.inner.read().ranking.contains(id)
    }

    pub fn value_of(&self, id: &Address) -> U96 {
        self.inner.read().ranking.value_of(id)
    }

    pub fn head(&self) -> Address { self.inner.read().ranking.head() }

    pub fn tail(&self) -> Address { self.inner.read().ranking.tail() }

    pub fn prev(&self, id: &Address) -> Address {
        self.inner.read().ranking.prev(id)
    }

    pub fn next(&self, id: &Address) -> Address {
        self.inner.read().ranking.next(id)
    }

    pub fn top(&self) -> Option<(Address, U96)> {
        self.inner.read().ranking.top()
    }

    pub fn snapshot(&self) -> Vec<(Address, U96)> {
        self.inner.read().ranking.snapshot()
    }

    pub fn clear(&self) { self.inner.write().ranking.clear() }
}
