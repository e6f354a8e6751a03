//! StrKey codec for ed25519 account public keys
//!
//! Account identifiers are rendered as RFC 4648 base32 (no padding) over
//! `version byte || 32-byte key || CRC16-XModem checksum (little-endian)`.
//! The ed25519 public key version byte is `6 << 3`, which makes every valid
//! account id a 56-character string starting with `G`.
//!
//! # Usage
//!
//! ```rust
//! use signer_inspector::crypto::strkey;
//!
//! let id = strkey::encode_account_id(&[7u8; 32]);
//! assert!(id.starts_with('G'));
//! assert!(strkey::is_valid_account_id(&id));
//! assert_eq!(strkey::decode_account_id(&id), Some([7u8; 32]));
//! ```

const ACCOUNT_ID_VERSION: u8 = 6 << 3;
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const PAYLOAD_LEN: usize = 1 + 32 + 2;
const ENCODED_LEN: usize = 56;

/// Encode a raw ed25519 public key as an account id
pub fn encode_account_id(key: &[u8; 32]) -> String {
    let mut payload = Vec::with_capacity(PAYLOAD_LEN);
    payload.push(ACCOUNT_ID_VERSION);
    payload.extend_from_slice(key);
    let checksum = crc16_xmodem(&payload);
    payload.extend_from_slice(&checksum.to_le_bytes());
    base32_encode(&payload)
}

/// Decode an account id back into its raw public key
///
/// Returns `None` on wrong length, bad alphabet, wrong version byte or
/// checksum mismatch.
pub fn decode_account_id(id: &str) -> Option<[u8; 32]> {
    if id.len() != ENCODED_LEN {
        return None;
    }
    let payload = base32_decode(id)?;
    if payload.len() != PAYLOAD_LEN || payload[0] != ACCOUNT_ID_VERSION {
        return None;
    }

    let (body, checksum) = payload.split_at(PAYLOAD_LEN - 2);
    let expected = crc16_xmodem(body).to_le_bytes();
    if checksum != expected {
        return None;
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&body[1..]);
    Some(key)
}

/// Check whether a string is a well-formed account id
pub fn is_valid_account_id(id: &str) -> bool {
    decode_account_id(id).is_some()
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for &byte in data {
        buffer = (buffer << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

fn base32_decode(encoded: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;

    for c in encoded.bytes() {
        let value = ALPHABET.iter().position(|&a| a == c)? as u32;
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }
    // Leftover bits must be zero padding
    if bits > 0 && buffer & ((1 << bits) - 1) != 0 {
        return None;
    }
    Some(out)
}
