// Folders (`sys/folder`)
//
// Every folder flag uses true/false on the wire.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BoolEncoding, CodecError, FlagLiteral, WireCodec, decode_optional_flag, impl_wire_serde,
};

/// An administrative folder (partitions are top-level folders).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Folder {
    pub name: String,
    pub partition: Option<String>,
    pub sub_path: Option<String>,
    pub full_path: Option<String>,
    pub app_service: Option<String>,
    pub description: Option<String>,
    pub device_group: Option<String>,
    pub hidden: bool,
    pub inherited_device_group: bool,
    pub inherited_traffic_group: bool,
    pub no_ref_check: bool,
    pub traffic_group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_device_group: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_traffic_group: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_ref_check: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_group: Option<String>,
}

impl WireCodec for Folder {
    type Wire = FolderWire;

    fn to_wire(&self) -> FolderWire {
        FolderWire {
            name: self.name.clone(),
            partition: self.partition.clone(),
            sub_path: self.sub_path.clone(),
            full_path: self.full_path.clone(),
            app_service: self.app_service.clone(),
            description: self.description.clone(),
            device_group: self.device_group.clone(),
            hidden: Some(FlagLiteral::encode(self.hidden, BoolEncoding::TrueFalse)),
            inherited_device_group: Some(FlagLiteral::encode(
                self.inherited_device_group,
                BoolEncoding::TrueFalse,
            )),
            inherited_traffic_group: Some(FlagLiteral::encode(
                self.inherited_traffic_group,
                BoolEncoding::TrueFalse,
            )),
            no_ref_check: Some(FlagLiteral::encode(self.no_ref_check, BoolEncoding::TrueFalse)),
            traffic_group: self.traffic_group.clone(),
        }
    }

    fn from_wire(wire: FolderWire) -> Result<Self, CodecError> {
        Ok(Self {
            hidden: decode_optional_flag("hidden", wire.hidden.as_ref())?,
            inherited_device_group: decode_optional_flag(
                "inheritedDeviceGroup",
                wire.inherited_device_group.as_ref(),
            )?,
            inherited_traffic_group: decode_optional_flag(
                "inheritedTrafficGroup",
                wire.inherited_traffic_group.as_ref(),
            )?,
            no_ref_check: decode_optional_flag("noRefCheck", wire.no_ref_check.as_ref())?,
            name: wire.name,
            partition: wire.partition,
            sub_path: wire.sub_path,
            full_path: wire.full_path,
            app_service: wire.app_service,
            description: wire.description,
            device_group: wire.device_group,
            traffic_group: wire.traffic_group,
        })
    }
}

impl_wire_serde!(Folder);
