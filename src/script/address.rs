//! Decred base58 address encoding
//!
//! Layout: `addr_id (2) || body || checksum (4)` where the checksum is the
//! first four bytes of BLAKE-256(BLAKE-256(addr_id || body)). Hash addresses
//! carry a 20-byte hash160 as body. Secp256k1 pubkey addresses carry a
//! signature-type byte (high bit set for an odd Y coordinate) followed by the
//! 32-byte X coordinate.

use bitcoin::secp256k1::PublicKey;
use blake_hash::{Blake256, Digest};

const CHECKSUM_LEN: usize = 4;

/// Signature type of ECDSA over secp256k1
const STECDSA_SECP256K1: u8 = 0;

/// Y parity flag in the signature type byte
const ODD_Y_BIT: u8 = 1 << 7;

/// Double BLAKE-256 checksum over an address payload
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Blake256::digest(payload);
    let second = Blake256::digest(first.as_slice());
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}

/// Encode a 20-byte hash under a two-byte address id
pub fn encode_address(addr_id: [u8; 2], hash160: &[u8]) -> String {
    check_encode(addr_id, &[hash160])
}

/// Encode a serialized secp256k1 public key as a pubkey address
///
/// Compressed and uncompressed keys of the same point yield the same address.
/// Returns `None` when the bytes are not a point on the curve.
pub fn encode_pubkey_address(addr_id: [u8; 2], pubkey: &[u8]) -> Option<String> {
    let compressed = PublicKey::from_slice(pubkey).ok()?.serialize();
    let mut sig_type = STECDSA_SECP256K1;
    if compressed[0] == 0x03 {
        sig_type |= ODD_Y_BIT;
    }
    Some(check_encode(addr_id, &[&[sig_type], &compressed[1..]]))
}

fn check_encode(addr_id: [u8; 2], body: &[&[u8]]) -> String {
    let body_len: usize = body.iter().map(|part| part.len()).sum();
    let mut payload = Vec::with_capacity(2 + body_len + CHECKSUM_LEN);
    payload.extend_from_slice(&addr_id);
    for part in body {
        payload.extend_from_slice(part);
    }
    let check = checksum(&payload);
    payload.extend_from_slice(&check);
    bitcoin::base58::encode(&payload)
}
