// Local traffic policies (`ltm/policy`)
//
// A policy nests its rules under `rulesReference.items`, and each rule
// nests its actions and conditions under `actionsReference.items` and
// `conditionsReference.items`. Action and condition operands are native
// JSON booleans, so they need no literal translation; the codec here only
// flattens and restores the nesting.

use serde::{Deserialize, Serialize};

use crate::codec::{CodecError, WireCodec, impl_wire_serde};
use crate::models::common::{Subcollection, is_false};

/// One action of a policy rule, e.g. forward to a pool or redirect.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRuleAction {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub request: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub response: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub forward: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub select: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub redirect: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub replace: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub reset: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub enable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub log: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub http_header: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub http_host: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub http_reply: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub http_uri: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "virtual", default, skip_serializing_if = "Option::is_none")]
    pub virtual_server: Option<String>,
}

/// One condition of a policy rule, e.g. the request URI path starts with
/// one of `values`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRuleCondition {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub request: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub response: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub http_header: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub http_host: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub http_method: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub http_uri: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub tcp: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub address: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub host: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub path: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub query_string: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub equals: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub starts_with: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub ends_with: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub contains: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub not: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub case_insensitive: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub case_sensitive: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub external: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub remote: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// A rule: ordered by `ordinal`, fires `actions` when every condition holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolicyRule {
    pub name: String,
    pub full_path: Option<String>,
    pub ordinal: u32,
    pub description: Option<String>,
    pub actions: Vec<PolicyRuleAction>,
    pub conditions: Vec<PolicyRuleCondition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRuleWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default)]
    pub ordinal: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions_reference: Option<Subcollection<PolicyRuleAction>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions_reference: Option<Subcollection<PolicyRuleCondition>>,
}

impl WireCodec for PolicyRule {
    type Wire = PolicyRuleWire;

    fn to_wire(&self) -> PolicyRuleWire {
        PolicyRuleWire {
            name: self.name.clone(),
            full_path: self.full_path.clone(),
            ordinal: self.ordinal,
            description: self.description.clone(),
            actions_reference: Subcollection::from_items(self.actions.clone()),
            conditions_reference: Subcollection::from_items(self.conditions.clone()),
        }
    }

    fn from_wire(wire: PolicyRuleWire) -> Result<Self, CodecError> {
        Ok(Self {
            name: wire.name,
            full_path: wire.full_path,
            ordinal: wire.ordinal,
            description: wire.description,
            actions: Subcollection::into_items(wire.actions_reference),
            conditions: Subcollection::into_items(wire.conditions_reference),
        })
    }
}

impl_wire_serde!(PolicyRule);

/// A local traffic policy.
///
/// `controls` and `requires` name the feature and profile dependencies
/// (e.g. `forwarding`, `http`); `strategy` is the match strategy
/// (`/Common/first-match` and friends).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Policy {
    pub name: String,
    pub partition: Option<String>,
    pub full_path: Option<String>,
    pub description: Option<String>,
    pub controls: Vec<String>,
    pub requires: Vec<String>,
    pub strategy: Option<String>,
    pub rules: Vec<PolicyRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyWire {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_reference: Option<Subcollection<PolicyRuleWire>>,
}

impl WireCodec for Policy {
    type Wire = PolicyWire;

    fn to_wire(&self) -> PolicyWire {
        PolicyWire {
            name: self.name.clone(),
            partition: self.partition.clone(),
            full_path: self.full_path.clone(),
            description: self.description.clone(),
            controls: self.controls.clone(),
            requires: self.requires.clone(),
            strategy: self.strategy.clone(),
            rules_reference: Subcollection::from_items(
                self.rules.iter().map(PolicyRule::to_wire).collect(),
            ),
        }
    }

    fn from_wire(wire: PolicyWire) -> Result<Self, CodecError> {
        let rules = Subcollection::into_items(wire.rules_reference)
            .into_iter()
            .map(PolicyRule::from_wire)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: wire.name,
            partition: wire.partition,
            full_path: wire.full_path,
            description: wire.description,
            controls: wire.controls,
            requires: wire.requires,
            strategy: wire.strategy,
            rules,
        })
    }
}

impl_wire_serde!(Policy);
