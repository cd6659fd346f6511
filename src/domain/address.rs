//! TRON account address validation and normalization.
//!
//! A TRON address is 21 bytes: the `0x41` network prefix followed by the
//! 20-byte account hash. It appears in two textual forms:
//!
//! - base58check (`T...`, 34 chars): payload plus the first four bytes of
//!   `sha256(sha256(payload))`;
//! - hex (`41...`, 42 chars).
//!
//! The TRON HTTP API is queried with `visible = true`, so hex addresses
//! are converted to base58check before any remote call.

use sha2::{Digest, Sha256};

/// Network prefix byte of every TRON mainnet/testnet address.
pub const ADDRESS_PREFIX: u8 = 0x41;

/// Length of a decoded address payload (prefix + 20-byte hash).
pub const ADDRESS_LEN: usize = 21;

const CHECKSUM_LEN: usize = 4;

/// Returns `true` if `value` is a syntactically valid TRON address in
/// either base58check or hex form.
#[must_use]
pub fn is_valid_address(value: &str) -> bool {
    is_base58check_address(value) || is_hex_address(value)
}

/// Returns `true` if `value` is a base58check address with a valid checksum.
#[must_use]
pub fn is_base58check_address(value: &str) -> bool {
    if !value.starts_with('T') {
        return false;
    }
    let Ok(raw) = bs58::decode(value).into_vec() else {
        return false;
    };
    if raw.len() != ADDRESS_LEN + CHECKSUM_LEN {
        return false;
    }
    let (payload, checksum) = raw.split_at(ADDRESS_LEN);
    payload.first() == Some(&ADDRESS_PREFIX) && checksum_of(payload).as_slice() == checksum
}

/// Returns `true` if `value` is a 42-char hex address starting with `41`.
#[must_use]
pub fn is_hex_address(value: &str) -> bool {
    value.len() == ADDRESS_LEN * 2
        && value.starts_with("41")
        && hex::decode(value).is_ok_and(|bytes| bytes.len() == ADDRESS_LEN)
}

/// Converts a valid address to its base58check form.
///
/// Base58check input is returned unchanged. Returns `None` if `value` is
/// not a valid address.
#[must_use]
pub fn to_base58check(value: &str) -> Option<String> {
    if is_base58check_address(value) {
        return Some(value.to_string());
    }
    if !is_hex_address(value) {
        return None;
    }
    let payload = hex::decode(value).ok()?;
    Some(encode_base58check(&payload))
}

/// Encodes a raw address payload as base58check.
#[must_use]
pub fn encode_base58check(payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    raw.extend_from_slice(payload);
    raw.extend_from_slice(&checksum_of(payload));
    bs58::encode(raw).into_string()
}

fn checksum_of(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut checksum = [0u8; CHECKSUM_LEN];
    for (dst, src) in checksum.iter_mut().zip(digest.iter()) {
        *dst = *src;
    }
    checksum
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn payload(seed: u8) -> Vec<u8> {
        let mut bytes = vec![ADDRESS_PREFIX];
        bytes.extend(std::iter::repeat_n(seed, ADDRESS_LEN - 1));
        bytes
    }

    #[test]
    fn accepts_base58check_address() {
        let address = encode_base58check(&payload(7));
        assert!(address.starts_with('T'));
        assert_eq!(address.len(), 34);
        assert!(is_valid_address(&address));
    }

    #[test]
    fn accepts_hex_address() {
        let address = hex::encode(payload(9));
        assert!(is_hex_address(&address));
        assert!(is_valid_address(&address));
    }

    #[test]
    fn rejects_corrupted_checksum() {
        let address = encode_base58check(&payload(3));
        let mut chars: Vec<char> = address.chars().collect();
        let Some(last) = chars.last_mut() else {
            panic!("empty address");
        };
        *last = if *last == 'a' { 'b' } else { 'a' };
        let corrupted: String = chars.into_iter().collect();
        assert!(!is_valid_address(&corrupted));
    }

    #[test]
    fn rejects_wrong_prefix() {
        let mut bytes = payload(5);
        if let Some(first) = bytes.first_mut() {
            *first = 0x00;
        }
        assert!(!is_valid_address(&encode_base58check(&bytes)));
        assert!(!is_valid_address(&hex::encode(&bytes)));
    }

    #[test]
    fn rejects_garbage() {
        for value in ["", "TEST ADDR", "T", "41", "0x41abcdef", "T0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl0"] {
            assert!(!is_valid_address(value), "{value:?} must be rejected");
        }
    }

    #[test]
    fn hex_converts_to_base58check() {
        let bytes = payload(11);
        let Some(converted) = to_base58check(&hex::encode(&bytes)) else {
            panic!("hex address must convert");
        };
        assert_eq!(converted, encode_base58check(&bytes));
    }

    #[test]
    fn base58check_is_returned_unchanged() {
        let address = encode_base58check(&payload(12));
        assert_eq!(to_base58check(&address).as_deref(), Some(address.as_str()));
        assert_eq!(to_base58check("TEST ADDR"), None);
    }
}
