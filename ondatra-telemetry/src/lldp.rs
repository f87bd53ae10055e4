//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Accessors of the `openconfig-lldp` telemetry.

use crate::query::{Query, QueryAny};
use crate::schema::{
    ChassisIdType, Device, Lldp, LldpCounters, LldpInterface,
    LldpInterfaceCounters, LldpInterfaceNeighbor, PortIdType,
};

// ===== /lldp =====

impl Query<Device, Device> {
    pub fn lldp(&self) -> Query<Lldp, Lldp> {
        self.container("lldp").in_module("openconfig-lldp")
    }
}

impl Query<Lldp, Lldp> {
    pub fn counters(&self) -> Query<LldpCounters, LldpCounters> {
        self.container("state/counters")
    }

    pub fn interface(
        &self,
        name: impl Into<String>,
    ) -> Query<LldpInterface, LldpInterface> {
        self.entry("interfaces", "interface", name.into())
    }

    pub fn interface_any(&self) -> QueryAny<LldpInterface, LldpInterface> {
        self.entry_any("interfaces", "interface")
    }
}

leaf_accessors! {
    Lldp {
        // Whether LLDP is globally enabled. Defaults to `true` when the
        // device doesn't report it.
        enabled: bool = "state/enabled", default true;
        hello_timer: u64 = "state/hello-timer";
        chassis_id: String = "state/chassis-id";
        chassis_id_type: ChassisIdType = "state/chassis-id-type";
        system_name: String = "state/system-name";
        system_description: String = "state/system-description";
    }
}

// ===== /lldp/state/counters =====

leaf_accessors! {
    LldpCounters {
        frame_in: u64 = "frame-in";
        frame_out: u64 = "frame-out";
        frame_error_in: u64 = "frame-error-in";
        frame_discard: u64 = "frame-discard";
        tlv_discard: u64 = "tlv-discard";
        tlv_unknown: u64 = "tlv-unknown";
        tlv_accepted: u64 = "tlv-accepted";
        entries_aged_out: u64 = "entries-aged-out";
        last_clear: u64 = "last-clear";
    }
}

// ===== /lldp/interfaces/interface =====

impl Query<LldpInterface, LldpInterface> {
    pub fn counters(
        &self,
    ) -> Query<LldpInterfaceCounters, LldpInterfaceCounters> {
        self.container("state/counters")
    }

    pub fn neighbor(
        &self,
        id: impl Into<String>,
    ) -> Query<LldpInterfaceNeighbor, LldpInterfaceNeighbor> {
        self.entry("neighbors", "neighbor", id.into())
    }

    pub fn neighbor_any(
        &self,
    ) -> QueryAny<LldpInterfaceNeighbor, LldpInterfaceNeighbor> {
        self.entry_any("neighbors", "neighbor")
    }
}

impl QueryAny<LldpInterface, LldpInterface> {
    pub fn counters(
        &self,
    ) -> QueryAny<LldpInterfaceCounters, LldpInterfaceCounters> {
        self.container("state/counters")
    }

    pub fn neighbor(
        &self,
        id: impl Into<String>,
    ) -> QueryAny<LldpInterfaceNeighbor, LldpInterfaceNeighbor> {
        self.entry("neighbors", "neighbor", id.into())
    }

    pub fn neighbor_any(
        &self,
    ) -> QueryAny<LldpInterfaceNeighbor, LldpInterfaceNeighbor> {
        self.entry_any("neighbors", "neighbor")
    }
}

leaf_accessors! {
    LldpInterface {
        name: String = "state/name";
        // Whether LLDP is enabled on the interface. Defaults to `true`.
        enabled: bool = "state/enabled", default true;
    }
}

leaf_accessors! {
    LldpInterfaceCounters {
        frame_in: u64 = "frame-in";
        frame_out: u64 = "frame-out";
        frame_error_in: u64 = "frame-error-in";
        frame_error_out: u64 = "frame-error-out";
        frame_discard: u64 = "frame-discard";
        tlv_discard: u64 = "tlv-discard";
        tlv_unknown: u64 = "tlv-unknown";
        last_clear: u64 = "last-clear";
    }
}

// ===== /lldp/interfaces/interface/neighbors/neighbor =====

leaf_accessors! {
    LldpInterfaceNeighbor {
        id: String = "state/id";
        system_name: String = "state/system-name";
        system_description: String = "state/system-description";
        chassis_id: String = "state/chassis-id";
        chassis_id_type: ChassisIdType = "state/chassis-id-type";
        port_id: String = "state/port-id";
        port_id_type: PortIdType = "state/port-id-type";
        port_description: String = "state/port-description";
        management_address: String = "state/management-address";
        ttl: u16 = "state/ttl";
        age: u64 = "state/age";
        last_update: i64 = "state/last-update";
    }
}
