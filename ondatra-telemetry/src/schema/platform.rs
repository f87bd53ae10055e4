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
    ListEntry, SchemaNode, is_config, parse_uint_key, unknown_element,
    unmarshal_container, unmarshal_leaf, unmarshal_list, yang_enum,
};

// Hardware or software component of the device
// (/components/component[name]).
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Component {
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub id: Option<String>,
    pub description: Option<String>,
    pub mfg_name: Option<String>,
    pub serial_no: Option<String>,
    pub part_no: Option<String>,
    pub parent: Option<String>,
    pub empty: Option<bool>,
    pub removable: Option<bool>,
    pub oper_status: Option<ComponentOperStatus>,
    pub temperature: Option<ComponentTemperature>,
    pub subcomponents: BTreeMap<String, ComponentSubcomponent>,
    pub transceiver: Option<ComponentTransceiver>,
}

// Temperature sensor statistics of a component.
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct ComponentTemperature {
    pub instant: Option<f64>,
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub interval: Option<u64>,
    pub min_time: Option<u64>,
    pub max_time: Option<u64>,
    pub alarm_status: Option<bool>,
    pub alarm_threshold: Option<u32>,
    pub alarm_severity: Option<AlarmSeverity>,
}

// Reference to a child component.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct ComponentSubcomponent {
    pub name: Option<String>,
}

// Optical transceiver plugged into a port component.
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct ComponentTransceiver {
    pub present: Option<TransceiverPresent>,
    pub form_factor: Option<String>,
    pub connector_type: Option<String>,
    pub vendor: Option<String>,
    pub vendor_part: Option<String>,
    pub serial_no: Option<String>,
    pub enabled: Option<bool>,
    pub channels: BTreeMap<u16, ComponentTransceiverChannel>,
}

// Physical channel of a transceiver.
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct ComponentTransceiverChannel {
    pub index: Option<u16>,
    pub description: Option<String>,
    pub associated_optical_channel: Option<String>,
    pub input_power: Option<ComponentTransceiverChannelPower>,
    pub output_power: Option<ComponentTransceiverChannelPower>,
}

// Optical power statistics in dBm.
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct ComponentTransceiverChannelPower {
    pub instant: Option<f64>,
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub interval: Option<u64>,
    pub min_time: Option<u64>,
    pub max_time: Option<u64>,
}

yang_enum! {
    // Operational status of a component.
    pub enum ComponentOperStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Disabled => "DISABLED",
    }
}

yang_enum! {
    // Whether a transceiver is plugged in.
    pub enum TransceiverPresent {
        Present => "PRESENT",
        NotPresent => "NOT_PRESENT",
    }
}

yang_enum! {
    pub enum AlarmSeverity {
        Unknown => "UNKNOWN",
        Minor => "MINOR",
        Warning => "WARNING",
        Major => "MAJOR",
        Critical => "CRITICAL",
    }
}

// ===== impl Component =====

impl SchemaNode for Component {
    const NAME: &'static str = "Component";

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
                *self = Component {
                    name: self.name.take(),
                    ..Default::default()
                };
                Ok(())
            }
            [state, leaf, rest @ ..] if state.name == "state" => {
                self.unmarshal_state(leaf, rest, value)
            }
            [subcomponents] if subcomponents.name == "subcomponents" => {
                if value.is_some() {
                    return Err(unknown_element(&[], value, Self::NAME));
                }
                self.subcomponents.clear();
                Ok(())
            }
            [subcomponents, subcomponent, rest @ ..]
                if subcomponents.name == "subcomponents"
                    && subcomponent.name == "subcomponent" =>
            {
                unmarshal_list(
                    &mut self.subcomponents,
                    subcomponent,
                    rest,
                    value,
                )
            }
            [transceiver, rest @ ..] if transceiver.name == "transceiver" => {
                unmarshal_container(&mut self.transceiver, rest, value)
            }
            _ => Err(unknown_element(path, value, Self::NAME)),
        }
    }
}

impl Component {
    fn unmarshal_state(
        &mut self,
        leaf: &PathElem,
        rest: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError> {
        match leaf.name.as_str() {
            "empty" => {
                unmarshal_leaf(&mut self.empty, rest, value, Self::NAME)
            }
            "removable" => {
                unmarshal_leaf(&mut self.removable, rest, value, Self::NAME)
            }
            "oper-status" => {
                unmarshal_leaf(&mut self.oper_status, rest, value, Self::NAME)
            }
            "temperature" => {
                unmarshal_container(&mut self.temperature, rest, value)
            }
            // Identity-valued leaves keep their module prefix.
            "type" => {
                unmarshal_leaf(&mut self.r#type, rest, value, Self::NAME)
            }
            name => {
                let field = match name {
                    "name" => &mut self.name,
                    "id" => &mut self.id,
                    "description" => &mut self.description,
                    "mfg-name" => &mut self.mfg_name,
                    "serial-no" => &mut self.serial_no,
                    "part-no" => &mut self.part_no,
                    "parent" => &mut self.parent,
                    _ => {
                        return Err(UnmarshalError::UnknownElement(
                            name.to_owned(),
                            Self::NAME,
                        ));
                    }
                };
                unmarshal_leaf(field, rest, value, Self::NAME)
            }
        }
    }
}

impl ListEntry for Component {
    const KEY: &'static str = "name";

    type Key = String;

    fn parse_key(value: &str) -> Result<String, UnmarshalError> {
        Ok(value.to_owned())
    }

    fn set_key(&mut self, key: &String) {
        self.name = Some(key.clone());
    }
}

// ===== impl ComponentTemperature =====

impl SchemaNode for ComponentTemperature {
    const NAME: &'static str = "Component_Temperature";

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
        match leaf.name.as_str() {
            "instant" => {
                unmarshal_leaf(&mut self.instant, rest, value, Self::NAME)
            }
            "avg" => unmarshal_leaf(&mut self.avg, rest, value, Self::NAME),
            "min" => unmarshal_leaf(&mut self.min, rest, value, Self::NAME),
            "max" => unmarshal_leaf(&mut self.max, rest, value, Self::NAME),
            "interval" => {
                unmarshal_leaf(&mut self.interval, rest, value, Self::NAME)
            }
            "min-time" => {
                unmarshal_leaf(&mut self.min_time, rest, value, Self::NAME)
            }
            "max-time" => {
                unmarshal_leaf(&mut self.max_time, rest, value, Self::NAME)
            }
            "alarm-status" => {
                unmarshal_leaf(&mut self.alarm_status, rest, value, Self::NAME)
            }
            "alarm-threshold" => unmarshal_leaf(
                &mut self.alarm_threshold,
                rest,
                value,
                Self::NAME,
            ),
            "alarm-severity" => unmarshal_leaf(
                &mut self.alarm_severity,
                rest,
                value,
                Self::NAME,
            ),
            _ => Err(unknown_element(path, value, Self::NAME)),
        }
    }
}

// ===== impl ComponentSubcomponent =====

impl SchemaNode for ComponentSubcomponent {
    const NAME: &'static str = "Component_Subcomponent";

    fn unmarshal(
        &mut self,
        path: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError> {
        if is_config(path) {
            return Ok(());
        }
        match path {
            [] if value.is_none() => Ok(()),
            [state, leaf, rest @ ..]
                if state.name == "state" && leaf.name == "name" =>
            {
                unmarshal_leaf(&mut self.name, rest, value, Self::NAME)
            }
            _ => Err(unknown_element(path, value, Self::NAME)),
        }
    }
}

impl ListEntry for ComponentSubcomponent {
    const KEY: &'static str = "name";

    type Key = String;

    fn parse_key(value: &str) -> Result<String, UnmarshalError> {
        Ok(value.to_owned())
    }

    fn set_key(&mut self, key: &String) {
        self.name = Some(key.clone());
    }
}

// ===== impl ComponentTransceiver =====

impl SchemaNode for ComponentTransceiver {
    const NAME: &'static str = "Component_Transceiver";

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
                    "present" => unmarshal_leaf(
                        &mut self.present,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    "enabled" => unmarshal_leaf(
                        &mut self.enabled,
                        rest,
                        value,
                        Self::NAME,
                    ),
                    name => {
                        let field = match name {
                            "form-factor" => &mut self.form_factor,
                            "connector-type" => &mut self.connector_type,
                            "vendor" => &mut self.vendor,
                            "vendor-part" => &mut self.vendor_part,
                            "serial-no" => &mut self.serial_no,
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
            [channels] if channels.name == "physical-channels" => {
                if value.is_some() {
                    return Err(unknown_element(&[], value, Self::NAME));
                }
                self.channels.clear();
                Ok(())
            }
            [channels, channel, rest @ ..]
                if channels.name == "physical-channels"
                    && channel.name == "channel" =>
            {
                unmarshal_list(&mut self.channels, channel, rest, value)
            }
            _ => Err(unknown_element(path, value, Self::NAME)),
        }
    }
}

// ===== impl ComponentTransceiverChannel =====

impl SchemaNode for ComponentTransceiverChannel {
    const NAME: &'static str = "Component_Transceiver_Channel";

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
                *self = ComponentTransceiverChannel {
                    index: self.index,
                    ..Default::default()
                };
                return Ok(());
            }
            [state, leaf, rest @ ..] if state.name == "state" => (leaf, rest),
            _ => return Err(unknown_element(path, value, Self::NAME)),
        };
        match leaf.name.as_str() {
            "index" => {
                unmarshal_leaf(&mut self.index, rest, value, Self::NAME)
            }
            "description" => {
                unmarshal_leaf(&mut self.description, rest, value, Self::NAME)
            }
            "associated-optical-channel" => unmarshal_leaf(
                &mut self.associated_optical_channel,
                rest,
                value,
                Self::NAME,
            ),
            "input-power" => {
                unmarshal_container(&mut self.input_power, rest, value)
            }
            "output-power" => {
                unmarshal_container(&mut self.output_power, rest, value)
            }
            _ => Err(unknown_element(&path[1..], value, Self::NAME)),
        }
    }
}

impl ListEntry for ComponentTransceiverChannel {
    const KEY: &'static str = "index";

    type Key = u16;

    fn parse_key(value: &str) -> Result<u16, UnmarshalError> {
        parse_uint_key(Self::KEY, value)
    }

    fn set_key(&mut self, key: &u16) {
        self.index = Some(*key);
    }
}

// ===== impl ComponentTransceiverChannelPower =====

impl SchemaNode for ComponentTransceiverChannelPower {
    const NAME: &'static str = "Component_Transceiver_Channel_Power";

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
        match leaf.name.as_str() {
            "instant" => {
                unmarshal_leaf(&mut self.instant, rest, value, Self::NAME)
            }
            "avg" => unmarshal_leaf(&mut self.avg, rest, value, Self::NAME),
            "min" => unmarshal_leaf(&mut self.min, rest, value, Self::NAME),
            "max" => unmarshal_leaf(&mut self.max, rest, value, Self::NAME),
            "interval" => {
                unmarshal_leaf(&mut self.interval, rest, value, Self::NAME)
            }
            "min-time" => {
                unmarshal_leaf(&mut self.min_time, rest, value, Self::NAME)
            }
            "max-time" => {
                unmarshal_leaf(&mut self.max_time, rest, value, Self::NAME)
            }
            _ => Err(unknown_element(path, value, Self::NAME)),
        }
    }
}
