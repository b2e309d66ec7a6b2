//! Raw block builder for decoder tests
//!
//! Blocks use the bitcoin wire layout the decoder expects: 80-byte header,
//! optional auxpow record, varint transaction count, transactions.

/// Header version bit announcing an auxpow record
pub const AUXPOW_FLAG: i32 = 1 << 8;

/// Header timestamp used by every built block
pub const BLOCK_TIME: u32 = 1535632670;

/// Coinbase paying 1 coin to TseTh41Qo5kYL37aLGMSQg4ngcoq9jzDX6Y, scriptSig 03cb3d00
pub const COINBASE_TX: &str = concat!(
    "01000000",
    "01",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "ffffffff",
    "04",
    "03cb3d00",
    "ffffffff",
    "01",
    "00e1f50500000000",
    "19",
    "76a914936f3a56a2dd0fb3bfde6bc820d4643e1701542a88ac",
    "00000000",
);

/// Spend of 72d9..7223:2 paying 1 coin to TsgNUZKEnUhFASLESj7fVRTkgue3QR9TAeZ
pub const SPEND_TX: &str = concat!(
    "01000000",
    "01",
    "2372568fe80d2f9b2ab17226158dd5732d9926dc705371eaf40ab748c9e3d972",
    "02000000",
    "00",
    "ffffffff",
    "01",
    "00e1f50500000000",
    "19",
    "76a914a862f83733cc368f386a651e03d844a5bd6116d588ac",
    "00000000",
);

pub const COINBASE_TXID: &str = "eea6987eaa6fa28bc337efe838ac6525957a517699ac02e81c7f8893f853da8b";

pub const SPEND_TXID: &str = "5fe64aa8efe4472d16d7f8d16066cf98b15b1f211525a00df25b1074e1381fb3";

pub fn header(version: i32) -> Vec<u8> {
    let mut out = Vec::with_capacity(80);
    out.extend_from_slice(&version.to_le_bytes());
    out.extend_from_slice(&[0x11; 32]); // prev block
    out.extend_from_slice(&[0x22; 32]); // merkle root
    out.extend_from_slice(&BLOCK_TIME.to_le_bytes());
    out.extend_from_slice(&0x1d00ffffu32.to_le_bytes());
    out.extend_from_slice(&42u32.to_le_bytes());
    out
}

/// Auxpow record with `coinbase_branch` and `chain_branch` hashes
pub fn auxpow(coinbase_branch: u8, chain_branch: u8) -> Vec<u8> {
    let mut out = hex::decode(COINBASE_TX).unwrap();
    out.extend_from_slice(&[0x33; 32]); // parent block hash
    for len in [coinbase_branch, chain_branch] {
        out.push(len);
        out.extend(std::iter::repeat(0x44).take(32 * len as usize));
        out.extend_from_slice(&0u32.to_le_bytes()); // side mask
    }
    out.extend(header(1)); // parent header
    out
}

pub fn transactions() -> Vec<u8> {
    let mut out = vec![2u8];
    out.extend(hex::decode(COINBASE_TX).unwrap());
    out.extend(hex::decode(SPEND_TX).unwrap());
    out
}

/// Two-transaction block, with an auxpow record when `with_auxpow` is set
pub fn block(with_auxpow: bool) -> Vec<u8> {
    let mut out = if with_auxpow {
        let mut raw = header(1 | AUXPOW_FLAG);
        raw.extend(auxpow(2, 1));
        raw
    } else {
        header(1)
    };
    out.extend(transactions());
    out
}
