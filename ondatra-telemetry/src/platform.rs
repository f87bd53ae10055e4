//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Accessors of the `openconfig-platform` telemetry.

use crate::query::{Query, QueryAny};
use crate::schema::{
    AlarmSeverity, Component, ComponentOperStatus, ComponentSubcomponent,
    ComponentTemperature, ComponentTransceiver, ComponentTransceiverChannel,
    ComponentTransceiverChannelPower, Device, TransceiverPresent,
};

type ChannelQuery =
    Query<ComponentTransceiverChannel, ComponentTransceiverChannel>;
type ChannelQueryAny =
    QueryAny<ComponentTransceiverChannel, ComponentTransceiverChannel>;
type PowerQuery =
    Query<ComponentTransceiverChannelPower, ComponentTransceiverChannelPower>;
type PowerQueryAny = QueryAny<
    ComponentTransceiverChannelPower,
    ComponentTransceiverChannelPower,
>;

// ===== /components/component =====

impl Query<Device, Device> {
    pub fn component(
        &self,
        name: impl Into<String>,
    ) -> Query<Component, Component> {
        self.entry("components", "component", name.into())
            .in_module("openconfig-platform")
    }

    pub fn component_any(&self) -> QueryAny<Component, Component> {
        self.entry_any("components", "component")
            .in_module("openconfig-platform")
    }
}

impl Query<Component, Component> {
    pub fn temperature(
        &self,
    ) -> Query<ComponentTemperature, ComponentTemperature> {
        self.container("state/temperature")
    }

    pub fn subcomponent(
        &self,
        name: impl Into<String>,
    ) -> Query<ComponentSubcomponent, ComponentSubcomponent> {
        self.entry("subcomponents", "subcomponent", name.into())
    }

    pub fn subcomponent_any(
        &self,
    ) -> QueryAny<ComponentSubcomponent, ComponentSubcomponent> {
        self.entry_any("subcomponents", "subcomponent")
    }

    pub fn transceiver(
        &self,
    ) -> Query<ComponentTransceiver, ComponentTransceiver> {
        self.container("transceiver")
    }
}

impl QueryAny<Component, Component> {
    pub fn temperature(
        &self,
    ) -> QueryAny<ComponentTemperature, ComponentTemperature> {
        self.container("state/temperature")
    }

    pub fn subcomponent(
        &self,
        name: impl Into<String>,
    ) -> QueryAny<ComponentSubcomponent, ComponentSubcomponent> {
        self.entry("subcomponents", "subcomponent", name.into())
    }

    pub fn subcomponent_any(
        &self,
    ) -> QueryAny<ComponentSubcomponent, ComponentSubcomponent> {
        self.entry_any("subcomponents", "subcomponent")
    }

    pub fn transceiver(
        &self,
    ) -> QueryAny<ComponentTransceiver, ComponentTransceiver> {
        self.container("transceiver")
    }
}

leaf_accessors! {
    Component {
        name: String = "state/name";
        // Identity of the component type, with its module prefix.
        r#type: String = "state/type";
        id: String = "state/id";
        description: String = "state/description";
        mfg_name: String = "state/mfg-name";
        serial_no: String = "state/serial-no";
        part_no: String = "state/part-no";
        parent: String = "state/parent";
        empty: bool = "state/empty";
        removable: bool = "state/removable";
        oper_status: ComponentOperStatus = "state/oper-status";
    }
}

// ===== /components/component/state/temperature =====

leaf_accessors! {
    ComponentTemperature {
        instant: f64 = "instant";
        avg: f64 = "avg";
        min: f64 = "min";
        max: f64 = "max";
        interval: u64 = "interval";
        min_time: u64 = "min-time";
        max_time: u64 = "max-time";
        alarm_status: bool = "alarm-status";
        alarm_threshold: u32 = "alarm-threshold";
        alarm_severity: AlarmSeverity = "alarm-severity";
    }
}

// ===== /components/component/subcomponents/subcomponent =====

leaf_accessors! {
    ComponentSubcomponent {
        name: String = "state/name";
    }
}

// ===== /components/component/transceiver =====

impl Query<ComponentTransceiver, ComponentTransceiver> {
    pub fn channel(&self, index: u16) -> ChannelQuery {
        self.entry("physical-channels", "channel", index.to_string())
    }

    pub fn channel_any(&self) -> ChannelQueryAny {
        self.entry_any("physical-channels", "channel")
    }
}

impl QueryAny<ComponentTransceiver, ComponentTransceiver> {
    pub fn channel(&self, index: u16) -> ChannelQueryAny {
        self.entry("physical-channels", "channel", index.to_string())
    }

    pub fn channel_any(&self) -> ChannelQueryAny {
        self.entry_any("physical-channels", "channel")
    }
}

leaf_accessors! {
    ComponentTransceiver {
        present: TransceiverPresent = "state/present";
        form_factor: String = "state/form-factor";
        connector_type: String = "state/connector-type";
        vendor: String = "state/vendor";
        vendor_part: String = "state/vendor-part";
        serial_no: String = "state/serial-no";
        enabled: bool = "state/enabled";
    }
}

// ===== /components/component/transceiver/physical-channels/channel =====

impl ChannelQuery {
    pub fn input_power(&self) -> PowerQuery {
        self.container("state/input-power")
    }

    pub fn output_power(&self) -> PowerQuery {
        self.container("state/output-power")
    }
}

impl ChannelQueryAny {
    pub fn input_power(&self) -> PowerQueryAny {
        self.container("state/input-power")
    }

    pub fn output_power(&self) -> PowerQueryAny {
        self.container("state/output-power")
    }
}

leaf_accessors! {
    ComponentTransceiverChannel {
        index: u16 = "state/index";
        description: String = "state/description";
        associated_optical_channel: String =
            "state/associated-optical-channel";
    }
}

leaf_accessors! {
    ComponentTransceiverChannelPower {
        instant: f64 = "instant";
        avg: f64 = "avg";
        min: f64 = "min";
        max: f64 = "max";
        interval: u64 = "interval";
        min_time: u64 = "min-time";
        max_time: u64 = "max-time";
    }
}
