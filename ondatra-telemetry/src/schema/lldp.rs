//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use ondatra_gnmi::{PathElem, TypedValue};
use serde::{Deserialize, Serialize};

use crate::error::UnmarshalError;
use crate::schema::{
    ListEntry, SchemaNode, is_config, unknown_element, unmarshal_container,
    unmarshal_leaf, unmarshal_list, yang_enum,
};

// LLDP global state (/lldp).
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Lldp {
    pub enabled: Option<bool>,
    pub hello_timer: Option<u64>,
    pub chassis_id: Option<String>,
    pub chassis_id_type: Option<ChassisIdType>,
    pub system_name: Option<String>,
    pub system_description: Option<String>,
    pub counters: Option<LldpCounters>,
    pub interfaces: BTreeMap<String, LldpInterface>,
}

// Global LLDP counters (/lldp/state/counters).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct LldpCounters {
    pub frame_in: Option<u64>,
    pub frame_out: Option<u64>,
    pub frame_error_in: Option<u64>,
    pub frame_discard: Option<u64>,
    pub tlv_discard: Option<u64>,
    pub tlv_unknown: Option<u64>,
    pub tlv_accepted: Option<u64>,
    pub entries_aged_out: Option<u64>,
    pub last_clear: Option<u64>,
}

// LLDP-enabled interface (/lldp/interfaces/interface[name]).
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct LldpInterface {
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub counters: Option<LldpInterfaceCounters>,
    pub neighbors: BTreeMap<String, LldpInterfaceNeighbor>,
}

// Per-interface LLDP counters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct LldpInterfaceCounters {
    pub frame_in: Option<u64>,
    pub frame_out: Option<u64>,
    pub frame_error_in: Option<u64>,
    pub frame_error_out: Option<u64>,
    pub frame_discard: Option<u64>,
    pub tlv_discard: Option<u64>,
    pub tlv_unknown: Option<u64>,
    pub last_clear: Option<u64>,
}

// LLDP neighbor learned on an interface
// (/lldp/interfaces/interface[name]/neighbors/neighbor[id]).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct LldpInterfaceNeighbor {
    pub id: Option<String>,
    pub system_name: Option<String>,
    pub system_description: Option<String>,
    pub chassis_id: Option<String>,
    pub chassis_id_type: Option<ChassisIdType>,
    pub port_id: Option<String>,
    pub port_id_type: Option<PortIdType>,
    pub port_description: Option<String>,
    pub management_address: Option<String>,
    pub ttl: Option<u16>,
    pub age: Option<u64>,
    pub last_update: Option<i64>,
}

yang_enum! {
    // Type of an LLDP chassis identifier.
    pub enum ChassisIdType {
        ChassisComponent => "CHASSIS_COMPONENT",
        InterfaceAlias => "INTERFACE_ALIAS",
        PortComponent => "PORT_COMPONENT",
        MacAddress => "MAC_ADDRESS",
        NetworkAddress => "NETWORK_ADDRESS",
        InterfaceName => "INTERFACE_NAME",
        Local => "LOCAL",
    }
}

yang_enum! {
    // Type of an LLDP port identifier.
    pub enum PortIdType {
        InterfaceAlias => "INTERFACE_ALIAS",
        PortComponent => "PORT_COMPONENT",
        MacAddress => "MAC_ADDRESS",
        NetworkAddress => "NETWORK_ADDRESS",
        InterfaceName => "INTERFACE_NAME",
        AgentCircuitId => "AGENT_CIRCUIT_ID",
        Local => "LOCAL",
    }
}

// ===== impl Lldp =====

impl SchemaNode for Lldp {
    const NAME: &'static str = "Lldp";

    fn unmarshal(
        &mut self,
        path: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError> {
        if is_config(path) {
            return Ok(());
        }
        match path {
            [] if value.is_none() => {
                *self = Default::default();
                Ok(())
            }
            [state, leaf, rest @ ..] if state.name == "state" => {
                match leaf.name.as_str() {
                    "enabled" => unmarshal_leaf(
                        &mut self.enabled,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    "hello-timer" => unmarshal_leaf(
                        &mut self.hello_timer,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    "chassis-id" => unmarshal_leaf(
                        &mut self.chassis_id,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    "chassis-id-type" => unmarshal_leaf(
                        &mut self.chassis_id_type,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    "system-name" => unmarshal_leaf(
                        &mut self.system_name,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    "system-description" => unmarshal_leaf(
                        &mut self.system_description,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    "counters" => {
                        unmarshal_container(&mut self.counters, rest, value)
                    }
                    _ => Err(unknown_element(&path[1..], value, Self::NAME)),
                }
            }
            [interfaces]
                if interfaces.name == "interfaces" && value.is_none() =>
            {
                self.interfaces.clear();
                Ok(())
            }
            [interfaces, interface, rest @ ..]
                if interfaces.name == "interfaces"
                    && interface.name == "interface" =>
            {
                unmarshal_list(&mut self.interfaces, interface, rest, value)
            }
            _ => Err(unknown_element(path, value, Self::NAME)),
        }
    }
}

// ===== impl LldpCounters =====

impl SchemaNode for LldpCounters {
    const NAME: &'static str = "Lldp_Counters";

    fn unmarshal(
        &mut self,
        path: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError> {
        let Some((leaf, rest)) = path.split_first() else {
            if value.is_none() {
                *self = Default::default();
                return Ok(());
            }
            return Err(unknown_element(path, value, Self::NAME));
        };
        let field = match leaf.name.as_str() {
            "frame-in" => &mut self.frame_in,
            "frame-out" => &mut self.frame_out,
            "frame-error-in" => &mut self.frame_error_in,
            "frame-discard" => &mut self.frame_discard,
            "tlv-discard" => &mut self.tlv_discard,
            "tlv-unknown" => &mut self.tlv_unknown,
            "tlv-accepted" => &mut self.tlv_accepted,
            "entries-aged-out" => &mut self.entries_aged_out,
            "last-clear" => &mut self.last_clear,
            _ => return Err(unknown_element(path, value, Self::NAME)),
        };
        unmarshal_leaf(field, rest, value, Self::NAME)
    }
}

// ===== impl LldpInterface =====

impl SchemaNode for LldpInterface {
    const NAME: &'static str = "Lldp_Interface";

    fn unmarshal(
        &mut self,
        path: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError> {
        if is_config(path) {
            return Ok(());
        }
        match path {
            [] if value.is_none() => {
                *self = LldpInterface {
                    name: self.name.take(),
                    ..Default::default()
                };
                Ok(())
            }
            [state, leaf, rest @ ..] if state.name == "state" => {
                match leaf.name.as_str() {
                    "name" => {
                        unmarshal_leaf(&mut self.name, rest, value, Self::NAME)
                    }
                    "enabled" => unmarshal_leaf(
                        &mut self.enabled,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    "counters" => {
                        unmarshal_container(&mut self.counters, rest, value)
                    }
                    _ => Err(unknown_element(&path[1..], value, Self::NAME)),
                }
            }
            [neighbors]
                if neighbors.name == "neighbors" && value.is_none() =>
            {
                self.neighbors.clear();
                Ok(())
            }
            [neighbors, neighbor, rest @ ..]
                if neighbors.name == "neighbors"
                    && neighbor.name == "neighbor" =>
            {
                unmarshal_list(&mut self.neighbors, neighbor, rest, value)
            }
            _ => Err(unknown_element(path, value, Self::NAME)),
        }
    }
}

impl ListEntry for LldpInterface {
    const KEY: &'static str = "name";

    type Key = String;

    fn parse_key(value: &str) -> Result<String, UnmarshalError> {
        Ok(value.to_owned())
    }

    fn set_key(&mut self, key: &String) {
        self.name = Some(key.clone());
    }
}

// ===== impl LldpInterfaceCounters =====

impl SchemaNode for LldpInterfaceCounters {
    const NAME: &'static str = "Lldp_Interface_Counters";

    fn unmarshal(
        &mut self,
        path: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError> {
        let Some((leaf, rest)) = path.split_first() else {
            if value.is_none() {
                *self = Default::default();
                return Ok(());
            }
            return Err(unknown_element(path, value, Self::NAME));
        };
        let field = match leaf.name.as_str() {
            "frame-in" => &mut self.frame_in,
            "frame-out" => &mut self.frame_out,
            "frame-error-in" => &mut self.frame_error_in,
            "frame-error-out" => &mut self.frame_error_out,
            "frame-discard" => &mut self.frame_discard,
            "tlv-discard" => &mut self.tlv_discard,
            "tlv-unknown" => &mut self.tlv_unknown,
            "last-clear" => &mut self.last_clear,
            _ => return Err(unknown_element(path, value, Self::NAME)),
        };
        unmarshal_leaf(field, rest, value, Self::NAME)
    }
}

// ===== impl LldpInterfaceNeighbor =====

impl SchemaNode for LldpInterfaceNeighbor {
    const NAME: &'static str = "Lldp_Interface_Neighbor";

    fn unmarshal(
        &mut self,
        path: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError> {
        if is_config(path) {
            return Ok(());
        }
        let (leaf, rest) = match path {
            [] if value.is_none() => {
                *self = LldpInterfaceNeighbor {
                    id: self.id.take(),
                    ..Default::default()
                };
                return Ok(());
            }
            [state, leaf, rest @ ..] if state.name == "state" => (leaf, rest),
            _ => return Err(unknown_element(path, value, Self::NAME)),
        };
        match leaf.name.as_str() {
            "chassis-id-type" => unmarshal_leaf(
                &mut self.chassis_id_type,
                rest,
                value,
                Self::NAME,
            ),
            "port-id-type" => {
                unmarshal_leaf(&mut self.port_id_type, rest, value, Self::NAME)
            }
            "ttl" => unmarshal_leaf(&mut self.ttl, rest, value, Self::NAME),
            "age" => unmarshal_leaf(&mut self.age, rest, value, Self::NAME),
            "last-update" => {
                unmarshal_leaf(&mut self.last_update, rest, value, Self::NAME)
            }
            name => {
                let field = match name {
                    "id" => &mut self.id,
                    "system-name" => &mut self.system_name,
                    "system-description" => &mut self.system_description,
                    "chassis-id" => &mut self.chassis_id,
                    "port-id" => &mut self.port_id,
                    "port-description" => &mut self.port_description,
                    "management-address" => &mut self.management_address,
                    _ => {
                        return Err(unknown_element(
                            &path[1..],
                            value,
                            Self::NAME,
                        ));
                    }
                };
                unmarshal_leaf(field, rest, value, Self::NAME)
            }
        }
    }
}

impl ListEntry for LldpInterfaceNeighbor {
    const KEY: &'static str = "id";

    type Key = String;

    fn parse_key(value: &str) -> Result<String, UnmarshalError> {
        Ok(value.to_owned())
    }

    fn set_key(&mut self, key: &String) {
        self.id = Some(key.clone());
    }
}
