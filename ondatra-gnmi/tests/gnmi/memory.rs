//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ondatra_gnmi::memory::MemoryTarget;
use ondatra_gnmi::{Error, Path, Target, TypedValue};

fn path(path: &str) -> Path {
    path.parse().unwrap()
}

#[tokio::test]
async fn test_memory_get() {
    let target = MemoryTarget::new("dut");
    target.update(path("/lldp/state/enabled"), true);
    target.update(path("/lldp/state/hello-timer"), 30u64);
    target.update(path("/components/component[name=fan0]/state/name"), "fan0");

    let dps = target.get(&[path("/lldp")]).await.unwrap();
    assert_eq!(dps.len(), 2);
    assert!(dps.iter().all(|dp| dp.path.elem[0].name == "lldp"));

    let dps = target.get(&[path("/lldp/state/mode")]).await.unwrap();
    assert!(dps.is_empty());

    assert!(matches!(
        target.get(&[]).await,
        Err(Error::InvalidRequest(..))
    ));
}

#[tokio::test]
async fn test_memory_subscribe() {
    let target = MemoryTarget::new("dut");
    target.update(path("/lldp/state/hello-timer"), 30u64);

    let mut sub = target.subscribe(&[path("/lldp/state")]).await.unwrap();

    // Initial state.
    let initial = sub.next().await.unwrap().unwrap();
    assert_eq!(initial.len(), 1);
    assert_eq!(initial[0].value, Some(TypedValue::Uint(30)));

    // Sync marker.
    let sync = sub.next().await.unwrap().unwrap();
    assert!(sync[0].sync);

    // Non-matching updates aren't relayed.
    target.update(path("/components/component[name=fan0]/state/name"), "fan0");
    target.update(path("/lldp/state/hello-timer"), 10u64);
    let update = sub.next().await.unwrap().unwrap();
    assert_eq!(update.len(), 1);
    assert_eq!(update[0].value, Some(TypedValue::Uint(10)));

    // Deletes.
    target.delete(&path("/lldp"));
    let delete = sub.next().await.unwrap().unwrap();
    assert!(delete[0].is_delete());
    assert!(target.get(&[path("/lldp")]).await.unwrap().is_empty());

    // Closed subscriptions.
    target.close_subscriptions();
    assert!(matches!(sub.next().await, Some(Err(Error::SubscriptionClosed))));
    assert!(sub.next().await.is_none());
}

#[tokio::test]
async fn test_memory_subscriber_pruning() {
    let target = MemoryTarget::new("dut");
    let sub = target.subscribe(&[path("/lldp")]).await.unwrap();
    assert_eq!(target.subscriber_count(), 1);
    drop(sub);
    assert_eq!(target.subscriber_count(), 0);
}
