// Virtual addresses (`ltm/virtual-address`)
//
// The flags on this resource mix three spellings: `arp`, `floating` and
// `icmpEcho` use enabled/disabled, `enabled` and `inheritedTrafficGroup`
// use yes/no, and `autoDelete` uses true/false.

use serde::{Deserialize, Serialize};

use crate::codec::{
    BoolEncoding, CodecError, FlagLiteral, WireCodec, decode_optional_flag, impl_wire_serde,
};

/// The listener address shared by one or more virtual servers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualAddress {
    pub name: String,
    pub partition: Option<String>,
    pub full_path: Option<String>,
    pub generation: Option<u64>,
    pub address: Option<String>,
    pub arp: bool,
    pub auto_delete: bool,
    pub connection_limit: Option<u64>,
    pub enabled: bool,
    pub floating: bool,
    pub icmp_echo: bool,
    pub inherited_traffic_group: bool,
    pub mask: Option<String>,
    pub route_advertisement: Option<String>,
    pub server_scope: Option<String>,
    pub traffic_group: Option<String>,
    pub unit: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAddressWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arp: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_delete: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icmp_echo: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_traffic_group: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_advertisement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<u32>,
}

impl WireCodec for VirtualAddress {
    type Wire = VirtualAddressWire;

    fn to_wire(&self) -> VirtualAddressWire {
        VirtualAddressWire {
            name: self.name.clone(),
            partition: self.partition.clone(),
            full_path: self.full_path.clone(),
            generation: self.generation,
            address: self.address.clone(),
            arp: Some(FlagLiteral::encode(self.arp, BoolEncoding::EnabledDisabled)),
            auto_delete: Some(FlagLiteral::encode(self.auto_delete, BoolEncoding::TrueFalse)),
            connection_limit: self.connection_limit,
            enabled: Some(FlagLiteral::encode(self.enabled, BoolEncoding::YesNo)),
            floating: Some(FlagLiteral::encode(self.floating, BoolEncoding::EnabledDisabled)),
            icmp_echo: Some(FlagLiteral::encode(self.icmp_echo, BoolEncoding::EnabledDisabled)),
            inherited_traffic_group: Some(FlagLiteral::encode(
                self.inherited_traffic_group,
                BoolEncoding::YesNo,
            )),
            mask: self.mask.clone(),
            route_advertisement: self.route_advertisement.clone(),
            server_scope: self.server_scope.clone(),
            traffic_group: self.traffic_group.clone(),
            unit: self.unit,
        }
    }

    fn from_wire(wire: VirtualAddressWire) -> Result<Self, CodecError> {
        Ok(Self {
            arp: decode_optional_flag("arp", wire.arp.as_ref())?,
            auto_delete: decode_optional_flag("autoDelete", wire.auto_delete.as_ref())?,
            enabled: decode_optional_flag("enabled", wire.enabled.as_ref())?,
            floating: decode_optional_flag("floating", wire.floating.as_ref())?,
            icmp_echo: decode_optional_flag("icmpEcho", wire.icmp_echo.as_ref())?,
            inherited_traffic_group: decode_optional_flag(
                "inheritedTrafficGroup",
                wire.inherited_traffic_group.as_ref(),
            )?,
            name: wire.name,
            partition: wire.partition,
            full_path: wire.full_path,
            generation: wire.generation,
            address: wire.address,
            connection_limit: wire.connection_limit,
            mask: wire.mask,
            route_advertisement: wire.route_advertisement,
            server_scope: wire.server_scope,
            traffic_group: wire.traffic_group,
            unit: wire.unit,
        })
    }
}

impl_wire_serde!(VirtualAddress);
