//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Generates the leaf accessors of a schema node, for both its exact and
// wildcard queries. Each leaf maps to the node field of the same name.
macro_rules! leaf_accessors {
    (@default $ty:ty) => {
        None
    };
    (@default $ty:ty, $default:expr) => {
        Some((|| $default) as fn() -> $ty)
    };
    (
        $node:ty {
            $(
                $(#[$meta:meta])*
                $name:ident: $ty:ty = $path:literal $(, default $default:expr)?;
            )+
        }
    ) => {
        impl $crate::query::Query<$node, $node> {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> $crate::query::Query<$node, $ty> {
                    self.leaf(
                        $path,
                        |node| node.$name.clone(),
                        leaf_accessors!(@default $ty $(, $default)?),
                    )
                }
            )+
        }

        impl $crate::query::QueryAny<$node, $node> {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> $crate::query::QueryAny<$node, $ty> {
                    self.leaf(
                        $path,
                        |node| node.$name.clone(),
                        leaf_accessors!(@default $ty $(, $default)?),
                    )
                }
            )+
        }
    };
}
