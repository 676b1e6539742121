// iControl REST resource models
//
// Each resource has a domain struct (native booleans, `Option` for fields
// the device may omit) and a `*Wire` struct mirroring the JSON the device
// speaks. Wire structs are transport-only: they exist so `WireCodec` has a
// concrete shape to encode to and decode from.

pub mod common;
pub mod data_group;
pub mod folder;
pub mod monitor;
pub mod policy;
pub mod virtual_address;

pub use data_group::{DataGroup, DataGroupRecord, DataGroupType};
pub use folder::Folder;
pub use monitor::{Monitor, MonitorKind};
pub use policy::{Policy, PolicyRule, PolicyRuleAction, PolicyRuleCondition};
pub use virtual_address::VirtualAddress;
