// Health monitors (`ltm/monitor/{kind}`)
//
// Monitors live in one collection per monitor kind. `manualResume`,
// `reverse` and `transparent` all use enabled/disabled on the wire.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::codec::{
    BoolEncoding, CodecError, FlagLiteral, WireCodec, decode_optional_flag, impl_wire_serde,
};

/// Monitor kinds with their own `ltm/monitor/{kind}` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum MonitorKind {
    Http,
    Https,
    Tcp,
    TcpHalfOpen,
    Udp,
    Icmp,
    GatewayIcmp,
    Inband,
    Postgresql,
    Mysql,
}

/// A health monitor. `parent_monitor` is the monitor it inherits
/// defaults from (`defaultsFrom` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Monitor {
    pub name: String,
    pub partition: Option<String>,
    pub full_path: Option<String>,
    pub generation: Option<u64>,
    pub parent_monitor: Option<String>,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub interval: Option<u32>,
    pub ip_dscp: Option<u32>,
    pub manual_resume: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub send: Option<String>,
    pub receive: Option<String>,
    pub receive_disable: Option<String>,
    pub reverse: bool,
    pub time_until_up: Option<u32>,
    pub timeout: Option<u32>,
    pub transparent: bool,
    pub up_interval: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
    #[serde(rename = "defaultsFrom", default, skip_serializing_if = "Option::is_none")]
    pub parent_monitor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_dscp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_resume: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send: Option<String>,
    #[serde(rename = "recv", default, skip_serializing_if = "Option::is_none")]
    pub receive: Option<String>,
    #[serde(rename = "recvDisable", default, skip_serializing_if = "Option::is_none")]
    pub receive_disable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_until_up: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<FlagLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_interval: Option<u32>,
}

impl WireCodec for Monitor {
    type Wire = MonitorWire;

    fn to_wire(&self) -> MonitorWire {
        MonitorWire {
            name: self.name.clone(),
            partition: self.partition.clone(),
            full_path: self.full_path.clone(),
            generation: self.generation,
            parent_monitor: self.parent_monitor.clone(),
            description: self.description.clone(),
            destination: self.destination.clone(),
            interval: self.interval,
            ip_dscp: self.ip_dscp,
            manual_resume: Some(FlagLiteral::encode(
                self.manual_resume,
                BoolEncoding::EnabledDisabled,
            )),
            username: self.username.clone(),
            password: self.password.clone(),
            send: self.send.clone(),
            receive: self.receive.clone(),
            receive_disable: self.receive_disable.clone(),
            reverse: Some(FlagLiteral::encode(self.reverse, BoolEncoding::EnabledDisabled)),
            time_until_up: self.time_until_up,
            timeout: self.timeout,
            transparent: Some(FlagLiteral::encode(
                self.transparent,
                BoolEncoding::EnabledDisabled,
            )),
            up_interval: self.up_interval,
        }
    }

    fn from_wire(wire: MonitorWire) -> Result<Self, CodecError> {
        Ok(Self {
            manual_resume: decode_optional_flag("manualResume", wire.manual_resume.as_ref())?,
            reverse: decode_optional_flag("reverse", wire.reverse.as_ref())?,
            transparent: decode_optional_flag("transparent", wire.transparent.as_ref())?,
            name: wire.name,
            partition: wire.partition,
            full_path: wire.full_path,
            generation: wire.generation,
            parent_monitor: wire.parent_monitor,
            description: wire.description,
            destination: wire.destination,
            interval: wire.interval,
            ip_dscp: wire.ip_dscp,
            username: wire.username,
            password: wire.password,
            send: wire.send,
            receive: wire.receive,
            receive_disable: wire.receive_disable,
            time_until_up: wire.time_until_up,
            timeout: wire.timeout,
            up_interval: wire.up_interval,
        })
    }
}

impl_wire_serde!(Monitor);
