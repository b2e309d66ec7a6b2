//! Raw block framing with merged-mining (auxpow) support
//!
//! Layout: 80-byte header, then, only when the header version carries
//! [`VERSION_AUXPOW`], the auxpow record, then a varint transaction count and
//! the transactions themselves.

use crate::errors::{ParseError, ParseResult};
use bitcoin::block::Header;
use bitcoin::consensus::encode::{self, Decodable, VarInt};
use bitcoin::Transaction;
use tracing::debug;

/// Header version bit announcing an embedded auxpow record
pub const VERSION_AUXPOW: i32 = 1 << 8;

/// Serialized size of a block header (primary and auxpow parent alike)
pub const HEADER_SIZE: usize = 80;

const HASH_SIZE: usize = 32;
const SIDE_MASK_SIZE: usize = 4;

/// Block split into its wire parts
#[derive(Debug, Clone)]
pub struct RawBlock {
    pub header: Header,
    /// Offset of the transaction count within the raw bytes
    pub tx_offset: usize,
    pub txs: Vec<Transaction>,
}

impl RawBlock {
    pub fn has_auxpow(&self) -> bool {
        self.header.version.to_consensus() & VERSION_AUXPOW != 0
    }
}

/// Read cursor over the raw block bytes
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn decode<T: Decodable>(&mut self) -> Result<T, encode::Error> {
        let (value, consumed) = encode::deserialize_partial::<T>(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    fn skip_aux(&mut self, len: usize, stage: &'static str) -> ParseResult<()> {
        if len > self.remaining() {
            return Err(ParseError::MalformedAuxProof {
                stage,
                reason: format!("needs {} bytes, {} remaining", len, self.remaining()),
            });
        }
        self.pos += len;
        Ok(())
    }
}

/// Split raw block bytes into header and transactions
pub fn decode_raw_block(raw: &[u8]) -> ParseResult<RawBlock> {
    if raw.len() < HEADER_SIZE {
        return Err(ParseError::MalformedHeader(format!(
            "need {} bytes, got {}",
            HEADER_SIZE,
            raw.len()
        )));
    }

    let mut cursor = Cursor::new(raw);
    let header: Header = cursor
        .decode()
        .map_err(|e| ParseError::MalformedHeader(e.to_string()))?;

    if header.version.to_consensus() & VERSION_AUXPOW != 0 {
        skip_auxpow(&mut cursor)?;
    }

    let tx_offset = cursor.pos;
    let txs = decode_transactions(&mut cursor)?;

    if cursor.remaining() > 0 {
        debug!(
            "Ignoring {} trailing bytes after {} transactions",
            cursor.remaining(),
            txs.len()
        );
    }

    Ok(RawBlock {
        header,
        tx_offset,
        txs,
    })
}

/// Advance past the auxpow record following the header
fn skip_auxpow(cursor: &mut Cursor<'_>) -> ParseResult<()> {
    cursor
        .decode::<Transaction>()
        .map_err(|e| ParseError::MalformedAuxProof {
            stage: "parent coinbase",
            reason: e.to_string(),
        })?;
    cursor.skip_aux(HASH_SIZE, "parent block hash")?;
    skip_merkle_branch(cursor, "coinbase merkle branch")?;
    skip_merkle_branch(cursor, "chain merkle branch")?;
    cursor.skip_aux(HEADER_SIZE, "parent block header")
}

fn skip_merkle_branch(cursor: &mut Cursor<'_>, stage: &'static str) -> ParseResult<()> {
    let VarInt(count) = cursor
        .decode::<VarInt>()
        .map_err(|e| ParseError::MalformedAuxProof {
            stage,
            reason: format!("branch length: {}", e),
        })?;

    let len = usize::try_from(count)
        .ok()
        .and_then(|n| n.checked_mul(HASH_SIZE))
        .and_then(|n| n.checked_add(SIDE_MASK_SIZE))
        .ok_or_else(|| ParseError::MalformedAuxProof {
            stage,
            reason: format!("branch length {} overflows", count),
        })?;
    cursor.skip_aux(len, stage)
}

fn decode_transactions(cursor: &mut Cursor<'_>) -> ParseResult<Vec<Transaction>> {
    let VarInt(count) =
        cursor
            .decode::<VarInt>()
            .map_err(|e| ParseError::MalformedTransaction {
                index: 0,
                reason: format!("transaction count: {}", e),
            })?;

    // Every transaction takes at least one byte, so a larger count cannot be honest
    if count > cursor.remaining() as u64 {
        return Err(ParseError::MalformedTransaction {
            index: 0,
            reason: format!(
                "transaction count {} exceeds {} remaining bytes",
                count,
                cursor.remaining()
            ),
        });
    }

    let mut txs = Vec::with_capacity(count as usize);
    for index in 0..count as usize {
        let tx = cursor
            .decode::<Transaction>()
            .map_err(|e| ParseError::MalformedTransaction {
                index,
                reason: e.to_string(),
            })?;
        txs.push(tx);
    }
    Ok(txs)
}
