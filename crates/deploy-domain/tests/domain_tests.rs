use deploy_domain::{is_development, network_name, parse_ether, Address, Wei, LOCAL_CHAIN_ID};

#[test]
fn local_constant_matches_registry() {
    assert_eq!(LOCAL_CHAIN_ID, 31337);
    assert!(is_development(LOCAL_CHAIN_ID));
    assert_eq!(network_name(LOCAL_CHAIN_ID), "localhost");
}

#[test]
fn mock_coordinator_base_fee_in_wei() {
    // El premium del mock coordinator es 0.25 ether.
    let fee = parse_ether("0.25").expect("parse 0.25");
    assert_eq!(fee, Wei(250_000_000_000_000_000));
    assert_eq!(fee.to_string(), "250000000000000000");
}

#[test]
fn wei_serializes_as_plain_integer() {
    let json = serde_json::to_value(Wei(1_000_000_000)).expect("serialize wei");
    assert_eq!(json, serde_json::json!(1_000_000_000u64));
}

#[test]
fn address_roundtrip_through_json() {
    let a = Address::new("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").expect("valid address");
    let json = serde_json::to_string(&a).expect("serialize");
    let back: Address = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(a, back);
}
