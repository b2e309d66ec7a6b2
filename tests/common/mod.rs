//! Common Test Utilities
//!
//! Shared fixtures and helpers used across the unit and integration tests:
//! reference Decred transactions with their packed storage form, a raw block
//! builder and a stub dcrd JSON-RPC server.

#![allow(dead_code)]

pub mod blocks;

use dcr_chain_adapter::types::{ScriptPubKey, Tx, Vin, Vout};

/// Reference testnet transaction mined at height 15819
pub const TX1_HEX: &str = concat!(
    "01000000012372568fe80d2f9b2ab17226158dd5732d9926dc705371eaf40ab748c9e3d9720200000001ffff",
    "ffff02644b252d0000000000001976a914a862f83733cc368f386a651e03d844a5bd6116d588acacdf630900",
    "00000000001976a91491dc5d18370939b3414603a0729bcb3a38e4ef7688ac000000000000000001e48d8936",
    "00000000bb3d0000020000006a4730440220378e1442cc17fa7e49184518713eedd30e13e42147e077859557",
    "da6ffbbd40c702205f85563c28b6287f9c9110e6864dd18acfd92d85509ea846913c28b6e8a7f940012102bb",
    "bd7aadef33f2d2bdd9b0c5ba278815f5d66a6a01d2c019fb73f697662038b5",
);

/// Packed storage form of [`test_tx_1`] at height 15819
pub const TX1_PACKED: &str = concat!(
    "00003dcb8bb8bf943c00000000007b22686578223a2230313030303030303031323337323536386665383064",
    "3266396232616231373232363135386464353733326439393236646337303533373165616634306162373438",
    "6339653364393732303230303030303030316666666666666666303236343462323532643030303030303030",
    "3030303031393736613931346138363266383337333363633336386633383661363531653033643834346135",
    "6264363131366435383861636163646636333039303030303030303030303030313937366139313439316463",
    "3564313833373039333962333431343630336130373239626362336133386534656637363838616330303030",
    "3030303030303030303030303031653438643839333630303030303030306262336430303030303230303030",
    "3030366134373330343430323230333738653134343263633137666137653439313834353138373133656564",
    "6433306531336534323134376530373738353935353764613666666262643430633730323230356638353536",
    "3363323862363238376639633931313065363836346464313861636664393264383535303965613834363931",
    "3363323862366538613766393430303132313032626262643761616465663333663264326264643962306335",
    "62613237383831356635643636613661303164326330313966623733663639373636323033386235222c2274",
    "786964223a223133326163623562343734623435623833306637393631633931633837653533636365336133",
    "3761366336663062303933336363646630333935633831613661222c2276657273696f6e223a312c226c6f63",
    "6b74696d65223a302c2276696e223a5b7b22636f696e62617365223a22222c2274786964223a223732643965",
    "3363393438623730616634656137313533373064633236393932643733643538643135323637326231326139",
    "623266306465383866353637323233222c22766f7574223a322c22736372697074536967223a7b2268657822",
    "3a22227d2c2273657175656e6365223a343239343936373239352c22616464726573736573223a5b5d7d5d2c",
    "22766f7574223a5b7b2256616c7565536174223a3735373431383835322c2276616c7565223a302c226e223a",
    "302c227363726970745075624b6579223a7b22686578223a2237366139313461383632663833373333636333",
    "36386633383661363531653033643834346135626436313136643538386163222c2261646472657373657322",
    "3a5b225473674e555a4b456e55684641534c45536a37665652546b677565335152395441655a225d7d7d2c7b",
    "2256616c7565536174223a3135373534303236382c2276616c7565223a302c226e223a312c22736372697074",
    "5075624b6579223a7b22686578223a2237366139313439316463356431383337303933396233343134363033",
    "61303732396263623361333865346566373638386163222c22616464726573736573223a5b225473654b4e53",
    "575962417a61476f67706e4e6e32357465547a353350546b3373675075225d7d7d5d2c22626c6f636b74696d",
    "65223a313533353633323637307d",
);

/// Reference testnet transaction mined at height 15859
pub const TX2_HEX: &str = concat!(
    "0100000001c56d80756eaa7fc6e3542b29f596c60a9bcc959cf04d5f6e6b12749e241ece290200000001ffff",
    "ffff02cf20b42d0000000000001976a9140799daa3cd36b44def220886802eb99e10c4a7c488ac0c25c70700",
    "00000000001976a9140b102deb3314213164cb6322211225365658407e88ac000000000000000001afa87b35",
    "00000000e33d0000000000006a47304402201ff342e5aa55b6030171f85729221ca0b81938826cc09449b777",
    "52e6e3b615be0220281e160b618e57326b95a0e0c3ac7a513bd041aba63cbace2f71919e111cfdba01210290",
    "a8de6665c8caac2bb8ca1aabd3dc09a334f997f97bd894772b1e51cab003d9",
);

/// Packed storage form of [`test_tx_2`] at height 15859
pub const TX2_PACKED: &str = concat!(
    "00003df38bb8bfec6c00000000007b22686578223a2230313030303030303031633536643830373536656161",
    "3766633665333534326232396635393663363061396263633935396366303464356636653662313237343965",
    "3234316563653239303230303030303030316666666666666666303263663230623432643030303030303030",
    "3030303031393736613931343037393964616133636433366234346465663232303838363830326562393965",
    "3130633461376334383861633063323563373037303030303030303030303030313937366139313430623130",
    "3264656233333134323133313634636236333232323131323235333635363538343037653838616330303030",
    "3030303030303030303030303031616661383762333530303030303030306533336430303030303030303030",
    "3030366134373330343430323230316666333432653561613535623630333031373166383537323932323163",
    "6130623831393338383236636330393434396237373735326536653362363135626530323230323831653136",
    "3062363138653537333236623935613065306333616337613531336264303431616261363363626163653266",
    "3731393139653131316366646261303132313032393061386465363636356338636161633262623863613161",
    "61626433646330396133333466393937663937626438393437373262316535316361623030336439222c2274",
    "786964223a226361663334633933346434633336623431306330323635323232623036396635326532646634",
    "3539656262303964363739376136333563656565306564643630222c2276657273696f6e223a312c226c6f63",
    "6b74696d65223a302c2276696e223a5b7b22636f696e62617365223a22222c2274786964223a223239636531",
    "6532343965373431323662366535663464663039633935636339623061633639366635323932623534653363",
    "363766616136653735383036646335222c22766f7574223a322c22736372697074536967223a7b2268657822",
    "3a22227d2c2273657175656e6365223a343239343936373239352c22616464726573736573223a5b5d7d5d2c",
    "22766f7574223a5b7b2256616c7565536174223a3736363737393539392c2276616c7565223a302c226e223a",
    "302c227363726970745075624b6579223a7b22686578223a2237366139313430373939646161336364333662",
    "34346465663232303838363830326562393965313063346137633438386163222c2261646472657373657322",
    "3a5b22547352694b577353397563617159447739716867364e756b54746853354c7754526e76225d7d7d2c7b",
    "2256616c7565536174223a31333034393136362c2276616c7565223a302c226e223a312c2273637269707450",
    "75624b6579223a7b22686578223a223736613931343062313032646562333331343231333136346362363332",
    "323231313232353336353635383430376538386163222c22616464726573736573223a5b2254735332644871",
    "455359317666666a6464706f31564d5462774c6e44737066456a3557225d7d7d5d2c22626c6f636b74696d65",
    "223a313533353633383332367d",
);

pub const TX1_HEIGHT: u32 = 15819;
pub const TX1_BLOCK_TIME: i64 = 1535632670;
pub const TX2_HEIGHT: u32 = 15859;
pub const TX2_BLOCK_TIME: i64 = 1535638326;

fn spend(txid: &str, vout: u32) -> Vin {
    Vin {
        txid: txid.to_string(),
        vout,
        sequence: 4294967295,
        ..Default::default()
    }
}

fn pay(value_sat: u64, n: u32, script: &str, address: &str) -> Vout {
    Vout {
        value_sat,
        n,
        script_pub_key: ScriptPubKey {
            hex: script.to_string(),
            addresses: vec![address.to_string()],
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn test_tx_1() -> Tx {
    Tx {
        hex: TX1_HEX.to_string(),
        txid: "132acb5b474b45b830f7961c91c87e53cce3a37a6c6f0b0933ccdf0395c81a6a".to_string(),
        version: 1,
        locktime: 0,
        vin: vec![spend(
            "72d9e3c948b70af4ea715370dc26992d73d58d152672b12a9b2f0de88f567223",
            2,
        )],
        vout: vec![
            pay(
                757418852,
                0,
                "76a914a862f83733cc368f386a651e03d844a5bd6116d588ac",
                "TsgNUZKEnUhFASLESj7fVRTkgue3QR9TAeZ",
            ),
            pay(
                157540268,
                1,
                "76a91491dc5d18370939b3414603a0729bcb3a38e4ef7688ac",
                "TseKNSWYbAzaGogpnNn25teTz53PTk3sgPu",
            ),
        ],
        blocktime: TX1_BLOCK_TIME,
        ..Default::default()
    }
}

pub fn test_tx_2() -> Tx {
    Tx {
        hex: TX2_HEX.to_string(),
        txid: "caf34c934d4c36b410c0265222b069f52e2df459ebb09d6797a635ceee0edd60".to_string(),
        version: 1,
        locktime: 0,
        vin: vec![spend(
            "29ce1e249e74126b6e5f4df09c95cc9b0ac696f5292b54e3c67faa6e75806dc5",
            2,
        )],
        vout: vec![
            pay(
                766779599,
                0,
                "76a9140799daa3cd36b44def220886802eb99e10c4a7c488ac",
                "TsRiKWsS9ucaqYDw9qhg6NukTthS5LwTRnv",
            ),
            pay(
                13049166,
                1,
                "76a9140b102deb3314213164cb6322211225365658407e88ac",
                "TsS2dHqESY1vffjddpo1VMTbwLnDspfEj5W",
            ),
        ],
        blocktime: TX2_BLOCK_TIME,
        ..Default::default()
    }
}
