//! Syntactic and EIP-55 checksum validation of address strings.

use alloy_primitives::{Address, hex};

/// Length of a `0x`-prefixed address string.
pub const ADDRESS_STR_LEN: usize = 42;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressFormatError {
    #[error("address must start with `0x`")]
    MissingPrefix,
    #[error("address must be 42 bytes long, got {len}")]
    Length { len: usize },
    /// `index` counts characters from the start of the string, prefix included.
    #[error("non-hex character `{ch}` at character {index}")]
    NonHex { index: usize, ch: char },
    #[error("mixed-case address is not a valid EIP-55 checksum")]
    Checksum,
}

/// Parses an address spelled the way the address book spells them.
///
/// The string must be `0x` followed by exactly 40 hex digits. Mixed-case input
/// must carry a valid EIP-55 checksum; all-lowercase and all-uppercase input is
/// accepted without one.
pub fn parse_address(s: &str) -> Result<Address, AddressFormatError> {
    let Some(digits) = s.strip_prefix("0x") else {
        return Err(AddressFormatError::MissingPrefix);
    };
    if s.len() != ADDRESS_STR_LEN {
        return Err(AddressFormatError::Length { len: s.len() });
    }
    let bytes = hex::decode_to_array::<_, 20>(digits).map_err(|_| non_hex(s))?;
    let address = Address::from(bytes);

    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower && address.to_checksum(None) != s {
        return Err(AddressFormatError::Checksum);
    }
    Ok(address)
}

/// Locates the first character after the prefix that the decoder refused.
fn non_hex(s: &str) -> AddressFormatError {
    match s.chars().enumerate().skip(2).find(|(_, ch)| !ch.is_ascii_hexdigit()) {
        Some((index, ch)) => AddressFormatError::NonHex { index, ch },
        None => AddressFormatError::Length { len: s.len() },
    }
}

/// Returns `true` if [`parse_address`] accepts `s`.
pub fn is_valid_address(s: &str) -> bool {
    parse_address(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn accepts_checksummed() {
        assert_eq!(
            parse_address("0x8b1E899ec5d51387a41Ee68261149F7d3Dfd7160").unwrap(),
            address!("0x8b1e899ec5d51387a41ee68261149f7d3dfd7160"),
        );
    }

    #[test]
    fn accepts_single_case() {
        let lower = "0x8b1e899ec5d51387a41ee68261149f7d3dfd7160";
        let upper = "0x8B1E899EC5D51387A41EE68261149F7D3DFD7160";
        assert_eq!(parse_address(lower).unwrap(), parse_address(upper).unwrap());
    }

    #[test]
    fn accepts_zero() {
        assert_eq!(
            parse_address("0x0000000000000000000000000000000000000000").unwrap(),
            Address::ZERO
        );
    }

    #[test]
    fn rejects_bad_checksum() {
        // last letter flipped from `d` to `D`
        assert_eq!(
            parse_address("0x012fcFb933b9a4335B1BCC836e6a9a475146beBD"),
            Err(AddressFormatError::Checksum)
        );
    }

    #[test]
    fn rejects_missing_prefix() {
        assert_eq!(
            parse_address("4200000000000000000000000000000000000010"),
            Err(AddressFormatError::MissingPrefix)
        );
        assert_eq!(
            parse_address("0X4200000000000000000000000000000000000010"),
            Err(AddressFormatError::MissingPrefix)
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            parse_address("0x42000000000000000000000000000000000000100"),
            Err(AddressFormatError::Length { len: 43 })
        );
        assert_eq!(parse_address("0x"), Err(AddressFormatError::Length { len: 2 }));
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(
            parse_address("0x42000000000000000000000000000000000000g0"),
            Err(AddressFormatError::NonHex { index: 40, ch: 'g' })
        );
        assert!(!is_valid_address("0x4200000000000000000000000000000000000 10"));
    }

    #[test]
    fn non_hex_position_counts_characters() {
        // `é` is two bytes, so the string is 42 bytes but only 41 characters
        let s = "0x42é0000000000000000000000000000000000g0";
        assert_eq!(s.len(), ADDRESS_STR_LEN);
        assert_eq!(parse_address(s), Err(AddressFormatError::NonHex { index: 4, ch: 'é' }));

        let s = "0x4é000000000000000000000000000000000000g";
        assert_eq!(parse_address(s), Err(AddressFormatError::NonHex { index: 3, ch: 'é' }));
    }
}
