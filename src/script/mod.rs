//! Decred output script tokenizing, classification and address extraction
//!
//! Only script version 0 is understood. Standard forms are matched on their
//! exact byte layout; everything else is reported as `nonstandard`.

pub mod address;

use crate::errors::{ParseError, ParseResult};
use crate::params::ChainParams;

pub use address::{encode_address, encode_pubkey_address};

/// Script version every standard output uses
pub const DEFAULT_SCRIPT_VERSION: u16 = 0;

/// Largest payload a standard null-data output may carry
pub const MAX_DATA_CARRIER_SIZE: usize = 256;

pub mod opcodes {
    pub const OP_0: u8 = 0x00;
    pub const OP_DATA_20: u8 = 0x14;
    pub const OP_DATA_33: u8 = 0x21;
    pub const OP_DATA_65: u8 = 0x41;
    pub const OP_PUSHDATA1: u8 = 0x4c;
    pub const OP_PUSHDATA2: u8 = 0x4d;
    pub const OP_PUSHDATA4: u8 = 0x4e;
    pub const OP_1: u8 = 0x51;
    pub const OP_16: u8 = 0x60;
    pub const OP_RETURN: u8 = 0x6a;
    pub const OP_DUP: u8 = 0x76;
    pub const OP_EQUAL: u8 = 0x87;
    pub const OP_EQUALVERIFY: u8 = 0x88;
    pub const OP_HASH160: u8 = 0xa9;
    pub const OP_CHECKSIG: u8 = 0xac;
    pub const OP_CHECKMULTISIG: u8 = 0xae;
    pub const OP_SSTX: u8 = 0xba;
    pub const OP_SSGEN: u8 = 0xbb;
    pub const OP_SSRTX: u8 = 0xbc;
    pub const OP_SSTXCHANGE: u8 = 0xbd;
}

use opcodes::*;

/// Script classes as named by dcrd
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    NonStandard,
    PubKey,
    PubKeyHash,
    ScriptHash,
    MultiSig,
    NullData,
    StakeSubmission,
    StakeGen,
    StakeRevocation,
    StakeSubChange,
}

impl ScriptClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptClass::NonStandard => "nonstandard",
            ScriptClass::PubKey => "pubkey",
            ScriptClass::PubKeyHash => "pubkeyhash",
            ScriptClass::ScriptHash => "scripthash",
            ScriptClass::MultiSig => "multisig",
            ScriptClass::NullData => "nulldata",
            ScriptClass::StakeSubmission => "stakesubmission",
            ScriptClass::StakeGen => "stakegen",
            ScriptClass::StakeRevocation => "stakerevoke",
            ScriptClass::StakeSubChange => "sstxchange",
        }
    }

    fn from_stake_tag(tag: u8) -> Option<Self> {
        match tag {
            OP_SSTX => Some(ScriptClass::StakeSubmission),
            OP_SSGEN => Some(ScriptClass::StakeGen),
            OP_SSRTX => Some(ScriptClass::StakeRevocation),
            OP_SSTXCHANGE => Some(ScriptClass::StakeSubChange),
            _ => None,
        }
    }
}

/// One tokenized opcode with its push payload, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOpcode<'a> {
    pub opcode: u8,
    pub data: Option<&'a [u8]>,
}

impl ParsedOpcode<'_> {
    fn is_push(&self) -> bool {
        self.opcode <= OP_PUSHDATA4
    }
}

/// Split a script into opcodes, failing when a push runs past the end
pub fn parse_script(script: &[u8]) -> ParseResult<Vec<ParsedOpcode<'_>>> {
    let mut ops = Vec::new();
    let mut pos = 0;

    while pos < script.len() {
        let opcode = script[pos];
        pos += 1;

        let (len_bytes, data_len) = match opcode {
            0x01..=0x4b => (0, opcode as usize),
            OP_PUSHDATA1 => (1, read_push_len(script, pos, 1)?),
            OP_PUSHDATA2 => (2, read_push_len(script, pos, 2)?),
            OP_PUSHDATA4 => (4, read_push_len(script, pos, 4)?),
            _ => {
                ops.push(ParsedOpcode { opcode, data: None });
                continue;
            }
        };

        let start = pos + len_bytes;
        let end = start.checked_add(data_len).filter(|&end| end <= script.len());
        let end = end.ok_or_else(|| {
            ParseError::InvalidScript(format!(
                "push of {} bytes at offset {} exceeds script length {}",
                data_len,
                pos - 1,
                script.len()
            ))
        })?;

        ops.push(ParsedOpcode {
            opcode,
            data: Some(&script[start..end]),
        });
        pos = end;
    }

    Ok(ops)
}

fn read_push_len(script: &[u8], pos: usize, width: usize) -> ParseResult<usize> {
    let bytes = script.get(pos..pos + width).ok_or_else(|| {
        ParseError::InvalidScript(format!(
            "truncated {}-byte push length at offset {}",
            width,
            pos - 1
        ))
    })?;
    Ok(bytes
        .iter()
        .rev()
        .fold(0usize, |acc, &b| (acc << 8) | b as usize))
}

fn is_pubkey_hash(script: &[u8]) -> bool {
    script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] == OP_DATA_20
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG
}

fn is_script_hash(script: &[u8]) -> bool {
    script.len() == 23
        && script[0] == OP_HASH160
        && script[1] == OP_DATA_20
        && script[22] == OP_EQUAL
}

fn is_pubkey(data: &[u8]) -> bool {
    match data.len() {
        33 => data[0] == 0x02 || data[0] == 0x03,
        65 => data[0] == 0x04,
        _ => false,
    }
}

fn small_int(opcode: u8) -> Option<usize> {
    match opcode {
        OP_0 => Some(0),
        OP_1..=OP_16 => Some((opcode - OP_1 + 1) as usize),
        _ => None,
    }
}

fn is_multisig(ops: &[ParsedOpcode<'_>]) -> bool {
    if ops.len() < 4 || ops[ops.len() - 1].opcode != OP_CHECKMULTISIG {
        return false;
    }
    let (Some(required), Some(total)) = (small_int(ops[0].opcode), small_int(ops[ops.len() - 2].opcode)) else {
        return false;
    };
    let keys = &ops[1..ops.len() - 2];
    required >= 1
        && required <= total
        && keys.len() == total
        && keys
            .iter()
            .all(|op| op.data.map(is_pubkey).unwrap_or(false))
}

fn is_null_data(ops: &[ParsedOpcode<'_>]) -> bool {
    match ops {
        [ret] => ret.opcode == OP_RETURN,
        [ret, push] => {
            ret.opcode == OP_RETURN
                && (push.is_push() || small_int(push.opcode).is_some())
                && push.data.map(|d| d.len()).unwrap_or(0) <= MAX_DATA_CARRIER_SIZE
        }
        _ => false,
    }
}

/// Classify a script and resolve the addresses it pays to
///
/// Pubkey and multisig scripts resolve one pubkey address per key in script
/// order; keys that are not valid curve points are skipped.
pub fn extract_pk_script_addrs(
    version: u16,
    script: &[u8],
    params: &ChainParams,
) -> ParseResult<(ScriptClass, Vec<String>)> {
    if version != DEFAULT_SCRIPT_VERSION {
        return Ok((ScriptClass::NonStandard, Vec::new()));
    }

    let ops = parse_script(script)?;

    if is_pubkey_hash(script) {
        let addr = encode_address(params.pubkey_hash_addr_id, &script[3..23]);
        return Ok((ScriptClass::PubKeyHash, vec![addr]));
    }
    if is_script_hash(script) {
        let addr = encode_address(params.script_hash_addr_id, &script[2..22]);
        return Ok((ScriptClass::ScriptHash, vec![addr]));
    }
    if let Some((&tag, inner)) = script.split_first() {
        if let Some(class) = ScriptClass::from_stake_tag(tag) {
            if is_pubkey_hash(inner) {
                let addr = encode_address(params.pubkey_hash_addr_id, &inner[3..23]);
                return Ok((class, vec![addr]));
            }
            if is_script_hash(inner) {
                let addr = encode_address(params.script_hash_addr_id, &inner[2..22]);
                return Ok((class, vec![addr]));
            }
        }
    }
    if ops.len() == 2 && ops[1].opcode == OP_CHECKSIG && ops[0].data.map(is_pubkey).unwrap_or(false)
    {
        return Ok((ScriptClass::PubKey, pubkey_addresses(&ops[..1], params)));
    }
    if is_multisig(&ops) {
        let keys = &ops[1..ops.len() - 2];
        return Ok((ScriptClass::MultiSig, pubkey_addresses(keys, params)));
    }
    if is_null_data(&ops) {
        return Ok((ScriptClass::NullData, Vec::new()));
    }

    Ok((ScriptClass::NonStandard, Vec::new()))
}

fn pubkey_addresses(keys: &[ParsedOpcode<'_>], params: &ChainParams) -> Vec<String> {
    keys.iter()
        .filter_map(|op| op.data)
        .filter_map(|key| encode_pubkey_address(params.pubkey_addr_id, key))
        .collect()
}

/// Render the payload of a conventional OP_RETURN output
///
/// Accepts `OP_RETURN <len> <data>`, `OP_RETURN OP_PUSHDATA1 <len> <data>` and
/// `OP_RETURN OP_PUSHDATA2 <len lo> <len hi> <data>`; the declared length must
/// match the remaining bytes exactly. Printable payloads render as
/// `OP_RETURN (<text>)`, others as `OP_RETURN <hex>`. Returns an empty string
/// when the script is not such an output.
pub fn try_parse_op_return(script: &[u8]) -> String {
    if script.len() < 2 || script[0] != OP_RETURN {
        return String::new();
    }

    let direct = || (script[1] as usize, &script[2..]);
    let (declared, data) = if script[1] == OP_PUSHDATA1 && script.len() > 2 {
        let (l, d) = (script[2] as usize, &script[3..]);
        if l == d.len() {
            (l, d)
        } else {
            direct()
        }
    } else if script[1] == OP_PUSHDATA2 && script.len() > 3 {
        let (l, d) = (
            script[2] as usize | (script[3] as usize) << 8,
            &script[4..],
        );
        if l == d.len() {
            (l, d)
        } else {
            direct()
        }
    } else {
        direct()
    };

    if declared != data.len() {
        return String::new();
    }

    if data.iter().all(|&c| (32..=127).contains(&c)) {
        format!("OP_RETURN ({})", String::from_utf8_lossy(data))
    } else {
        format!("OP_RETURN {}", hex::encode(data))
    }
}
