//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use ondatra_gnmi::{PathElem, TypedValue};
use serde::{Deserialize, Serialize};

use crate::error::UnmarshalError;
use crate::schema::lldp::Lldp;
use crate::schema::platform::Component;
use crate::schema::{
    SchemaNode, unknown_element, unmarshal_container, unmarshal_list,
};

// Root of the device schema tree.
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct Device {
    pub lldp: Option<Lldp>,
    pub components: BTreeMap<String, Component>,
}

// ===== impl Device =====

impl SchemaNode for Device {
    const NAME: &'static str = "Device";

    fn unmarshal(
        &mut self,
        path: &[PathElem],
        value: Option<&TypedValue>,
    ) -> Result<(), UnmarshalError> {
        match path {
            [] if value.is_none() => {
                *self = Default::default();
                Ok(())
            }
            [lldp, rest @ ..] if lldp.name == "lldp" => {
                unmarshal_container(&mut self.lldp, rest, value)
            }
            [components] if components.name == "components" => {
                if value.is_some() {
                    return Err(unknown_element(&[], value, Self::NAME));
                }
                self.components.clear();
                Ok(())
            }
            [components, component, rest @ ..]
                if components.name == "components"
                    && component.name == "component" =>
            {
                unmarshal_list(&mut self.components, component, rest, value)
            }
            _ => Err(unknown_element(path, value, Self::NAME)),
        }
    }
}
