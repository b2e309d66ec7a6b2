use dcr_chain_adapter::params::{resolve_parameters, TESTNET_PARAMS};
use dcr_chain_adapter::parser::{BlockChainParser, DecredParser};
use dcr_chain_adapter::types::{ScriptPubKey, Vout};

fn output(script_hex: &str) -> Vout {
    Vout {
        script_pub_key: ScriptPubKey {
            hex: script_hex.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_descriptor_from_address() {
    let parser = DecredParser::new(resolve_parameters("testnet3"));

    for (address, expected) in [
        (
            "TcrypGAcGCRVXrES7hWqVZb5oLJKCZEtoL1",
            "5463727970474163474352565872455337685771565a62356f4c4a4b435a45746f4c31",
        ),
        (
            "TsfDLrRkk9ciUuwfp2b8PawwnukYD7yAjGd",
            "547366444c72526b6b3963695575776670326238506177776e756b59443779416a4764",
        ),
        (
            "TsTevp3WYTiV3X1qjvZqa7nutuTqt5VNeoU",
            "547354657670335759546956335831716a765a7161376e75747554717435564e656f55",
        ),
    ] {
        assert_eq!(parser.descriptor_from_address(address).to_string(), expected);
    }
}

#[test]
fn test_descriptor_from_output() {
    let parser = DecredParser::new(&TESTNET_PARAMS);

    for (script, expected) in [
        (
            "76a914936f3a56a2dd0fb3bfde6bc820d4643e1701542a88ac",
            "54736554683431516f356b594c3337614c474d535167346e67636f71396a7a44583659",
        ),
        (
            "76a9144b31f712b03837b1303cddcb1ae9abd98da44f1088ac",
            "547358736a3161747744736455746e354455576b666f6d5a586e4a6151467862395139",
        ),
        (
            "76a9140d85a1d3f77383eb3dacfd83c46e2c7915aba91d88ac",
            "54735346644c79657942776e68486978737367784b34546f4664763876525931793871",
        ),
    ] {
        let desc = parser.descriptor_from_output(&output(script)).unwrap();
        assert_eq!(desc.to_string(), expected, "script {}", script);
    }
}

#[test]
fn test_addresses_from_descriptor() {
    let parser = DecredParser::new(&TESTNET_PARAMS);

    let desc = parser
        .descriptor_from_output(&output(
            "76a914936f3a56a2dd0fb3bfde6bc820d4643e1701542a88ac",
        ))
        .unwrap();
    let (addresses, searchable) = parser.addresses_from_descriptor(&desc).unwrap();
    assert_eq!(addresses, vec!["TseTh41Qo5kYL37aLGMSQg4ngcoq9jzDX6Y"]);
    assert!(searchable);
}

#[test]
fn test_reference_outputs_resolve_to_recorded_addresses() {
    let parser = DecredParser::new(&TESTNET_PARAMS);

    for tx in [crate::common::test_tx_1(), crate::common::test_tx_2()] {
        for vout in &tx.vout {
            let desc = parser.descriptor_from_output(vout).unwrap();
            let (addresses, _) = parser.addresses_from_descriptor(&desc).unwrap();
            assert_eq!(addresses, vout.script_pub_key.addresses);
        }
    }
}
