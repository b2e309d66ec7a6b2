use dcr_chain_adapter::errors::ParseError;
use dcr_chain_adapter::params::TESTNET_PARAMS;
use dcr_chain_adapter::parser::{decode_raw_block, BlockChainParser, DecredParser};

use crate::common::blocks::{
    auxpow, block, header, transactions, AUXPOW_FLAG, BLOCK_TIME, COINBASE_TXID, SPEND_TXID,
};

fn parser() -> DecredParser {
    DecredParser::new(&TESTNET_PARAMS)
}

#[test]
fn test_plain_block() {
    let raw = block(false);
    let decoded = parser().decode_block(&raw).unwrap();

    assert_eq!(decoded.header.size, raw.len());
    assert_eq!(decoded.header.time, BLOCK_TIME as i64);
    assert_eq!(decoded.header.version, 1);
    assert_eq!(decoded.header.prev, "11".repeat(32));
    assert_eq!(decoded.header.merkle_root, "22".repeat(32));
    assert!(decoded.header.hash.is_empty());
    assert_eq!(decoded.txs.len(), 2);

    let coinbase = &decoded.txs[0];
    assert_eq!(coinbase.txid, COINBASE_TXID);
    assert_eq!(coinbase.vin[0].coinbase, "03cb3d00");
    assert!(coinbase.vin[0].addresses.is_empty());
    assert_eq!(coinbase.vout[0].value_sat, 100_000_000);

    let spend = &decoded.txs[1];
    assert_eq!(spend.txid, SPEND_TXID);
    assert_eq!(spend.vin[0].vout, 2);
    assert!(spend.vin[0].coinbase.is_empty());
}

#[test]
fn test_auxpow_block_yields_same_transactions() {
    let plain = parser().decode_block(&block(false)).unwrap();
    let raw = block(true);
    let merged = parser().decode_block(&raw).unwrap();

    assert_eq!(merged.txs, plain.txs);
    assert_eq!(merged.header.time, plain.header.time);
    assert_eq!(merged.header.version, 1 | AUXPOW_FLAG);
    assert_eq!(merged.header.size, raw.len());
}

#[test]
fn test_transactions_start_after_header_without_flag() {
    let raw = decode_raw_block(&block(false)).unwrap();
    assert_eq!(raw.tx_offset, 80);
    assert!(!raw.has_auxpow());

    let raw = decode_raw_block(&block(true)).unwrap();
    assert!(raw.has_auxpow());
    assert_eq!(raw.tx_offset, 80 + auxpow(2, 1).len());
}

#[test]
fn test_flag_alone_decides_auxpow_parsing() {
    // Transactions directly after a flagged header are read as an auxpow record
    let mut raw = header(1 | AUXPOW_FLAG);
    raw.extend(transactions());
    assert!(matches!(
        parser().decode_block(&raw),
        Err(ParseError::MalformedAuxProof { .. })
    ));
}

#[test]
fn test_truncated_auxpow_names_the_stage() {
    let mut raw = header(1 | AUXPOW_FLAG);
    let record = auxpow(2, 1);
    // Drop the last 40 bytes of the parent header
    raw.extend_from_slice(&record[..record.len() - 40]);

    match parser().decode_block(&raw) {
        Err(ParseError::MalformedAuxProof { stage, .. }) => {
            assert_eq!(stage, "parent block header")
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_oversized_merkle_branch() {
    let mut raw = header(1 | AUXPOW_FLAG);
    let mut record = auxpow(0, 0);
    let branch_at = hex::decode(crate::common::blocks::COINBASE_TX).unwrap().len() + 32;
    // Claim 200 coinbase branch hashes where none follow
    record[branch_at] = 200;
    raw.extend(record);

    match parser().decode_block(&raw) {
        Err(ParseError::MalformedAuxProof { stage, .. }) => {
            assert_eq!(stage, "coinbase merkle branch")
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_truncated_transaction_names_the_index() {
    let mut raw = block(false);
    raw.truncate(raw.len() - 10);

    match parser().decode_block(&raw) {
        Err(ParseError::MalformedTransaction { index, .. }) => assert_eq!(index, 1),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_short_header() {
    assert!(matches!(
        parser().decode_block(&header(1)[..60]),
        Err(ParseError::MalformedHeader(_))
    ));
}
