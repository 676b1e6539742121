// Internal data groups (`ltm/data-group/internal`)

use serde::{Deserialize, Serialize};

use crate::codec::{CodecError, WireCodec, impl_wire_serde};

/// Key type of a data group's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataGroupType {
    String,
    Ip,
    Integer,
}

/// One record of a data group. `data` is optional; address and integer
/// groups are frequently key-only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataGroupRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl DataGroupRecord {
    pub fn new(name: impl Into<String>, data: Option<String>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// An internal data group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataGroup {
    pub name: String,
    pub partition: Option<String>,
    pub full_path: Option<String>,
    pub generation: Option<u64>,
    pub kind: Option<DataGroupType>,
    pub records: Vec<DataGroupRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataGroupWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DataGroupType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<DataGroupRecord>,
}

impl WireCodec for DataGroup {
    type Wire = DataGroupWire;

    fn to_wire(&self) -> DataGroupWire {
        DataGroupWire {
            name: self.name.clone(),
            partition: self.partition.clone(),
            full_path: self.full_path.clone(),
            generation: self.generation,
            kind: self.kind,
            records: self.records.clone(),
        }
    }

    fn from_wire(wire: DataGroupWire) -> Result<Self, CodecError> {
        Ok(Self {
            name: wire.name,
            partition: wire.partition,
            full_path: wire.full_path,
            generation: wire.generation,
            kind: wire.kind,
            records: wire.records,
        })
    }
}

impl_wire_serde!(DataGroup);
