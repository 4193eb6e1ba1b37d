use crate::domain::{account::NativeAddress, eth};

/// Converts a native ledger address into the execution engine's address.
///
/// The raw bytes are reused as is. Inputs shorter than 20 bytes are left
/// padded with zeros and inputs longer than 20 bytes keep their trailing 20
/// bytes, so the mapping is lossless only for 20-byte addresses.
pub fn to_evm(native: &NativeAddress) -> eth::Address {
    let bytes = native.as_bytes();
    let bytes = &bytes[bytes.len().saturating_sub(eth::ADDRESS_LEN)..];
    let mut word = [0_u8; eth::ADDRESS_LEN];
    word[eth::ADDRESS_LEN - bytes.len()..].copy_from_slice(bytes);
    eth::Address::from(word)
}
