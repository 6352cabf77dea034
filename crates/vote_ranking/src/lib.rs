// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Vote ranking on top of [`heap_array::HeapArray`].
//!
//! The capacity of the sorted region and the branching factor come from a
//! [`RankingConfig`]. [`SharedRanking`] keeps the ranking behind a single
//! lock and passes the configured capacity on every update.

mod config;
mod error;
mod ranking;
mod shared;

pub use config::{Branching, RankingConfig, DEFAULT_CAPACITY};
pub use error::{RankingError, Result};
pub use ranking::Ranking;
pub use shared::SharedRanking;

pub use ranking_types::{Address, U256, U96};
