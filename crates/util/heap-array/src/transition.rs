// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use ranking_types::U96;
use std::cmp::Ordering;

/// The structural change implied by moving a record from one value to
/// another. A zero value means the record is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    NoOp,
    Remove,
    Insert,
    Increase,
    Decrease,
}

impl Transition {
    pub fn classify(former_value: U96, new_value: U96) -> Self {
        match former_value.cmp(&new_value) {
            Ordering::Equal => Transition::NoOp,
            _ if new_value.is_zero() => Transition::Remove,
            _ if former_value.is_zero() => Transition::Insert,
            Ordering::Less => Transition::Increase,
            Ordering::Greater => Transition::Decrease,
        }
    }
}
