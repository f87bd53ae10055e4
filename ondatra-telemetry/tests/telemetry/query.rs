//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ondatra_gnmi::TypedValue;
use ondatra_telemetry::Error;
use ondatra_telemetry::schema::{
    ChassisIdType, ComponentOperStatus, TransceiverPresent,
};

use super::{path, setup};

#[tokio::test]
async fn test_lookup_leaf() {
    let (target, dut) = setup();
    target.update(path("/lldp/state/system-name"), "dut1");

    let qv = dut
        .telemetry()
        .lldp()
        .system_name()
        .lookup()
        .await
        .unwrap()
        .unwrap();
    assert!(qv.is_present());
    assert_eq!(qv.val().unwrap(), "dut1");
    assert_eq!(qv.path(), &path("/lldp/state/system-name"));
}

#[tokio::test]
async fn test_lookup_missing_leaf() {
    let (_target, dut) = setup();
    let query = dut.telemetry().lldp().system_name();

    assert!(query.lookup().await.unwrap().is_none());
    let error = query.get().await.unwrap_err();
    assert!(matches!(error, Error::NotPresent(_)));
    assert_eq!(
        error.to_string(),
        "no value present at /openconfig-lldp/lldp/state/system-name"
    );
}

#[tokio::test]
async fn test_leaf_default() {
    let (target, dut) = setup();
    let query = dut.telemetry().lldp().enabled();

    // Not reported by the device.
    assert!(query.get().await.unwrap());
    let qv = query.lookup().await.unwrap().unwrap();
    assert_eq!(qv.metadata().timestamp.timestamp(), 0);

    target.update(path("/lldp/state/enabled"), false);
    assert!(!query.get().await.unwrap());
}

#[tokio::test]
async fn test_lookup_container() {
    let (target, dut) = setup();
    target.update_many(vec![
        (
            path("/lldp/interfaces/interface[name=eth0]/state/enabled"),
            false.into(),
        ),
        (
            path(
                "/lldp/interfaces/interface[name=eth0]/state/counters/frame-in",
            ),
            10u64.into(),
        ),
        (
            path("/lldp/interfaces/interface[name=eth1]/state/enabled"),
            true.into(),
        ),
    ]);

    let intf = dut.telemetry().lldp().interface("eth0").get().await.unwrap();
    assert_eq!(intf.enabled, Some(false));
    assert_eq!(intf.counters.unwrap().frame_in, Some(10));
    assert!(intf.neighbors.is_empty());

    let lldp = dut.telemetry().lldp().get().await.unwrap();
    assert_eq!(lldp.interfaces.len(), 2);
    // List entries get their key leaf from the path.
    assert_eq!(lldp.interfaces["eth1"].name.as_deref(), Some("eth1"));
}

#[tokio::test]
async fn test_lookup_any() {
    let (target, dut) = setup();
    target.update(
        path("/lldp/interfaces/interface[name=eth1]/state/counters/frame-in"),
        20u64,
    );
    target.update(
        path("/lldp/interfaces/interface[name=eth0]/state/counters/frame-in"),
        10u64,
    );
    target.update(
        path("/lldp/interfaces/interface[name=eth0]/state/counters/frame-out"),
        5u64,
    );

    let query = dut.telemetry().lldp().interface_any().counters().frame_in();
    let values = query.lookup().await.unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(
        values[0].path(),
        &path("/lldp/interfaces/interface[name=eth0]/state/counters/frame-in")
    );
    assert_eq!(values[0].value(), Some(&10));
    assert_eq!(values[1].value(), Some(&20));
    assert_eq!(query.get().await.unwrap(), vec![10, 20]);

    let intfs = dut.telemetry().lldp().interface_any().get().await.unwrap();
    assert_eq!(intfs.len(), 2);
    assert_eq!(intfs[0].counters.as_ref().unwrap().frame_out, Some(5));
    assert_eq!(intfs[1].counters.as_ref().unwrap().frame_out, None);
}

#[tokio::test]
async fn test_neighbor() {
    let (target, dut) = setup();
    let prefix = "/lldp/interfaces/interface[name=eth0]/neighbors/neighbor[id=n1]";
    target.update_many(vec![
        (
            path(&format!("{prefix}/state/chassis-id")),
            "00:11:22:33:44:55".into(),
        ),
        (
            path(&format!("{prefix}/state/chassis-id-type")),
            "MAC_ADDRESS".into(),
        ),
        (path(&format!("{prefix}/state/ttl")), 120u64.into()),
    ]);

    let neighbor = dut.telemetry().lldp().interface("eth0").neighbor("n1");
    assert_eq!(
        neighbor.chassis_id_type().get().await.unwrap(),
        ChassisIdType::MacAddress
    );
    assert_eq!(neighbor.ttl().get().await.unwrap(), 120);

    let neighbor = neighbor.get().await.unwrap();
    assert_eq!(neighbor.chassis_id.as_deref(), Some("00:11:22:33:44:55"));

    // Keys of nested list entries are filled in from the path.
    let intf = dut.telemetry().lldp().interface("eth0").get().await.unwrap();
    assert_eq!(intf.neighbors["n1"].id.as_deref(), Some("n1"));
}

#[tokio::test]
async fn test_platform() {
    let (target, dut) = setup();
    let prefix = "/components/component[name=port1]";
    target.update_many(vec![
        (
            path(&format!("{prefix}/state/oper-status")),
            "openconfig-platform-types:ACTIVE".into(),
        ),
        (
            path(&format!("{prefix}/state/temperature/instant")),
            TypedValue::Decimal {
                digits: 455,
                precision: 1,
            },
        ),
        (
            path(&format!("{prefix}/transceiver/state/present")),
            "PRESENT".into(),
        ),
        (
            path(&format!(
                "{prefix}/transceiver/physical-channels/channel[index=1]/state/input-power/instant"
            )),
            TypedValue::Double(-2.5),
        ),
    ]);

    let component = dut.telemetry().component("port1");
    assert_eq!(
        component.oper_status().get().await.unwrap(),
        ComponentOperStatus::Active
    );
    assert_eq!(component.temperature().instant().get().await.unwrap(), 45.5);
    assert_eq!(
        component.transceiver().present().get().await.unwrap(),
        TransceiverPresent::Present
    );
    let channel = component.transceiver().channel(1);
    assert_eq!(channel.input_power().instant().get().await.unwrap(), -2.5);
    assert_eq!(
        channel.index().schema_path(),
        "/openconfig-platform/components/component/transceiver/\
         physical-channels/channel/state/index"
    );
    assert!(channel.index().lookup().await.unwrap().is_none());

    let transceiver = component.transceiver().get().await.unwrap();
    assert_eq!(transceiver.channels[&1].index, Some(1));
}

#[tokio::test]
async fn test_invalid_datapoints_skipped() {
    let (target, dut) = setup();
    target.update_many(vec![
        (path("/lldp/state/bogus"), "x".into()),
        (path("/lldp/state/hello-timer"), "abc".into()),
        (path("/lldp/state/system-name"), "dut1".into()),
        (
            path("/lldp/interfaces/interface[name=eth0]/neighbors/neighbor[id=n1]/state/ttl"),
            TypedValue::Int(-1),
        ),
    ]);

    let lldp = dut.telemetry().lldp().get().await.unwrap();
    assert_eq!(lldp.system_name.as_deref(), Some("dut1"));
    assert_eq!(lldp.hello_timer, None);
    assert!(lldp.interfaces.is_empty());

    let query = dut.telemetry().lldp().hello_timer();
    assert!(query.lookup().await.unwrap().is_none());
}

#[tokio::test]
async fn test_config_ignored() {
    let (target, dut) = setup();
    target.update(path("/lldp/config/enabled"), false);
    target.update(path("/lldp/state/hello-timer"), 30u64);

    let lldp = dut.telemetry().lldp().get().await.unwrap();
    assert_eq!(lldp.enabled, None);
    assert_eq!(lldp.hello_timer, Some(30));
}

#[tokio::test]
async fn test_schema_path() {
    let (_target, dut) = setup();
    assert_eq!(
        dut.telemetry().lldp().interface("eth0").enabled().schema_path(),
        "/openconfig-lldp/lldp/interfaces/interface/state/enabled"
    );
    assert_eq!(
        dut.telemetry()
            .lldp()
            .interface_any()
            .enabled()
            .path()
            .to_string(),
        "/lldp/interfaces/interface[name=*]/state/enabled"
    );
    assert_eq!(dut.telemetry().schema_path(), "/");
}
