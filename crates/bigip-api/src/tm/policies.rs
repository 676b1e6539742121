// Local traffic policy endpoints
//
// Policies are authored as drafts (`/{partition}/Drafts/{name}`) and then
// published; a published policy cannot be created directly. Reads expand
// the rule, action and condition subcollections inline.

use reqwest::Method;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::Policy;
use crate::tm::client::{BigIpClient, resource_id};

const POLICY_PATH: &str = "ltm/policy";
const DEFAULT_PARTITION: &str = "Common";

#[derive(Serialize)]
struct PublishCommand<'a> {
    command: &'static str,
    name: &'a str,
}

/// `/{partition}/Drafts/{name}` for a policy.
pub fn draft_path(policy: &Policy) -> String {
    let partition = policy.partition.as_deref().unwrap_or(DEFAULT_PARTITION);
    format!("/{partition}/Drafts/{}", policy.name)
}

/// `/{partition}/{name}` for a published policy.
pub fn published_path(policy: &Policy) -> String {
    let partition = policy.partition.as_deref().unwrap_or(DEFAULT_PARTITION);
    format!("/{partition}/{}", policy.name)
}

fn expanded(mut url: Url) -> Url {
    url.query_pairs_mut()
        .append_pair("expandSubcollections", "true");
    url
}

impl BigIpClient {
    /// `GET /mgmt/tm/ltm/policy?expandSubcollections=true`
    pub async fn list_policies(&self) -> Result<Vec<Policy>, Error> {
        let url = expanded(self.tm_url(POLICY_PATH)?);
        debug!("listing policies");
        self.list_resources(url).await
    }

    /// `GET /mgmt/tm/ltm/policy/{name}?expandSubcollections=true`
    pub async fn get_policy(&self, name: &str) -> Result<Policy, Error> {
        let url = expanded(self.tm_url(&format!("{POLICY_PATH}/{}", resource_id(name)))?);
        self.get_resource(url).await
    }

    /// Create `policy` as a draft, publish it, and return the published copy.
    ///
    /// The policy's `partition` (default `Common`) selects the Drafts folder.
    pub async fn create_policy(&self, policy: &Policy) -> Result<Policy, Error> {
        let draft_name = draft_path(policy);
        let draft = Policy {
            name: draft_name.clone(),
            partition: None,
            full_path: None,
            ..policy.clone()
        };

        let url = self.tm_url(POLICY_PATH)?;
        debug!(draft = %draft_name, rules = policy.rules.len(), "creating draft policy");
        let _: Policy = self.send_resource(Method::POST, url, &draft).await?;

        self.publish_policy(&draft_name).await?;
        self.get_policy(&published_path(policy)).await
    }

    /// Publish a draft policy.
    ///
    /// `POST /mgmt/tm/ltm/policy` with `{"command": "publish", "name": draft}`
    pub async fn publish_policy(&self, draft: &str) -> Result<(), Error> {
        let url = self.tm_url(POLICY_PATH)?;
        debug!(draft, "publishing policy");
        let _: serde_json::Value = self
            .post_json(
                url,
                &PublishCommand {
                    command: "publish",
                    name: draft,
                },
            )
            .await?;
        Ok(())
    }

    /// `DELETE /mgmt/tm/ltm/policy/{name}`
    pub async fn delete_policy(&self, name: &str) -> Result<(), Error> {
        let url = self.tm_url(&format!("{POLICY_PATH}/{}", resource_id(name)))?;
        debug!(name, "deleting policy");
        self.delete_resource(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_and_published_paths_default_to_common() {
        let policy = Policy {
            name: "redirects".into(),
            ..Policy::default()
        };
        assert_eq!(draft_path(&policy), "/Common/Drafts/redirects");
        assert_eq!(published_path(&policy), "/Common/redirects");
    }

    #[test]
    fn draft_path_uses_policy_partition() {
        let policy = Policy {
            name: "redirects".into(),
            partition: Some("Tenant_A".into()),
            ..Policy::default()
        };
        assert_eq!(draft_path(&policy), "/Tenant_A/Drafts/redirects");
    }
}
