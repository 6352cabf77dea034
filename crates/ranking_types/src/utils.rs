// Copyright 2019 Conflux Foundation. All rights reserved.
// Conflux is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use ethereum_types::Address;

/// Turns the zero-address sentinel used by the ranking accessors into an
/// `Option`.
pub fn maybe_address(address: &Address) -> Option<Address> {
    if address.is_zero() {
        None
    } else {
        Some(*address)
    }
}

#[cfg(test)]
mod tests {
    use super::maybe_address;
    use ethereum_types::Address;

    #[test]
    fn test_maybe_address() {
        assert_eq!(maybe_address(&Address::zero()), None);
        let address = Address::from_low_u64_be(7);
        assert_eq!(maybe_address(&address), Some(address));
    }
}
