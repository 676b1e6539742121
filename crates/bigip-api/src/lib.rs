// bigip-api: Async Rust client for the F5 BIG-IP iControl REST API

pub mod auth;
pub mod codec;
pub mod error;
pub mod models;
pub mod tm;
pub mod transport;

pub use auth::{AuthStrategy, Credentials, DEFAULT_LOGIN_PROVIDER};
pub use codec::{
    BoolEncoding, CodecError, FlagLiteral, WireCodec, from_wire_bytes, from_wire_value,
    to_wire_bytes,
};
pub use error::Error;
pub use models::{
    DataGroup, DataGroupRecord, DataGroupType, Folder, Monitor, MonitorKind, Policy, PolicyRule,
    PolicyRuleAction, PolicyRuleCondition, VirtualAddress,
};
pub use tm::{BigIpClient, ClientConfig};
pub use transport::{TlsMode, TransportConfig};
