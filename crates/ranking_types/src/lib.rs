// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

extern crate ethereum_types;

pub use ethereum_types::{Address, U256};

mod uint;
pub use uint::{RangeOverflow, U96};

mod utils;
pub use utils::*;
