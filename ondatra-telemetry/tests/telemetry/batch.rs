//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::Arc;
use std::time::Duration;

use ondatra_gnmi::memory::MemoryTarget;
use ondatra_telemetry::schema::ComponentOperStatus;
use ondatra_telemetry::{Dut, Error};

use super::{path, setup};

#[tokio::test]
async fn test_batch_lookup() {
    let (target, dut) = setup();
    target.update(path("/lldp/state/system-name"), "dut1");
    target.update(path("/lldp/state/hello-timer"), 30u64);
    target.update(
        path("/components/component[name=fan0]/state/description"),
        "Fan tray",
    );
    target.update(
        path("/components/component[name=fan1]/state/description"),
        "Fan tray",
    );

    let mut batch = dut.new_batch();
    dut.telemetry()
        .lldp()
        .system_name()
        .batch(&mut batch)
        .unwrap();
    dut.telemetry()
        .component("fan0")
        .description()
        .batch(&mut batch)
        .unwrap();
    // Duplicates are ignored.
    dut.telemetry()
        .lldp()
        .system_name()
        .batch(&mut batch)
        .unwrap();
    assert_eq!(batch.paths().len(), 2);

    let device = batch.lookup().await.unwrap().into_value().unwrap();
    let lldp = device.lldp.unwrap();
    assert_eq!(lldp.system_name.as_deref(), Some("dut1"));
    assert_eq!(lldp.hello_timer, None);
    assert_eq!(device.components.len(), 1);
    assert_eq!(
        device.components["fan0"].description.as_deref(),
        Some("Fan tray")
    );
}

#[tokio::test]
async fn test_batch_any() {
    let (target, dut) = setup();
    for name in ["fan0", "fan1"] {
        target.update(
            path(&format!("/components/component[name={name}]/state/parent")),
            "chassis",
        );
    }

    let mut batch = dut.new_batch();
    dut.telemetry()
        .component_any()
        .parent()
        .batch(&mut batch)
        .unwrap();
    let device = batch.lookup().await.unwrap().into_value().unwrap();
    assert!(device.lldp.is_none());
    assert_eq!(device.components.len(), 2);
}

#[tokio::test]
async fn test_batch_empty() {
    let (_target, dut) = setup();
    let batch = dut.new_batch();
    assert!(matches!(batch.lookup().await, Err(Error::EmptyBatch)));
    assert!(matches!(
        batch.watch(Duration::from_millis(10), |_| true).await,
        Err(Error::EmptyBatch)
    ));
}

#[tokio::test]
async fn test_batch_nothing_present() {
    let (_target, dut) = setup();
    let mut batch = dut.new_batch();
    dut.telemetry().lldp().batch(&mut batch).unwrap();
    let qv = batch.lookup().await.unwrap();
    assert!(!qv.is_present());
}

#[tokio::test]
async fn test_batch_foreign_device() {
    let (_target, dut) = setup();
    let other = Dut::new(Arc::new(MemoryTarget::new("dut2")));

    let mut batch = dut.new_batch();
    let error = other
        .telemetry()
        .lldp()
        .batch(&mut batch)
        .unwrap_err();
    assert!(matches!(error, Error::ForeignDevice(..)));
    assert!(batch.paths().is_empty());
}

#[tokio::test]
async fn test_batch_watch() {
    let (target, dut) = setup();
    target.update(path("/lldp/state/system-name"), "dut1");

    let mut batch = dut.new_batch();
    dut.telemetry().lldp().batch(&mut batch).unwrap();
    dut.telemetry()
        .component("port1")
        .oper_status()
        .batch(&mut batch)
        .unwrap();

    let watcher = batch
        .watch(Duration::from_secs(5), |qv| {
            qv.value().is_some_and(|device| {
                device.components.get("port1").is_some_and(|component| {
                    component.oper_status == Some(ComponentOperStatus::Active)
                })
            })
        })
        .await
        .unwrap();
    target.update(
        path("/components/component[name=port1]/state/oper-status"),
        "ACTIVE",
    );

    let (last, ok) = watcher.wait().await.unwrap();
    assert!(ok);
    let device = last.unwrap().into_value().unwrap();
    // Updates received earlier are kept.
    assert_eq!(
        device.lldp.unwrap().system_name.as_deref(),
        Some("dut1")
    );
}
