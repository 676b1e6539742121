// Internal data group endpoints
//
// `ltm/data-group/internal` holds the record sets that iRules and
// policies match against. External (file-backed) data groups are not
// covered.

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::models::DataGroup;
use crate::tm::client::{BigIpClient, resource_id};

const DATA_GROUP_PATH: &str = "ltm/data-group/internal";

impl BigIpClient {
    /// `GET /mgmt/tm/ltm/data-group/internal`
    pub async fn list_data_groups(&self) -> Result<Vec<DataGroup>, Error> {
        let url = self.tm_url(DATA_GROUP_PATH)?;
        debug!("listing internal data groups");
        self.list_resources(url).await
    }

    /// `GET /mgmt/tm/ltm/data-group/internal/{name}`
    pub async fn get_data_group(&self, name: &str) -> Result<DataGroup, Error> {
        let url = self.tm_url(&format!("{DATA_GROUP_PATH}/{}", resource_id(name)))?;
        self.get_resource(url).await
    }

    /// `POST /mgmt/tm/ltm/data-group/internal`
    pub async fn create_data_group(&self, group: &DataGroup) -> Result<DataGroup, Error> {
        let url = self.tm_url(DATA_GROUP_PATH)?;
        debug!(name = %group.name, records = group.records.len(), "creating data group");
        self.send_resource(Method::POST, url, group).await
    }

    /// Replace a data group, records included.
    ///
    /// `PUT /mgmt/tm/ltm/data-group/internal/{name}`
    pub async fn modify_data_group(
        &self,
        name: &str,
        group: &DataGroup,
    ) -> Result<DataGroup, Error> {
        let url = self.tm_url(&format!("{DATA_GROUP_PATH}/{}", resource_id(name)))?;
        debug!(name, records = group.records.len(), "modifying data group");
        self.send_resource(Method::PUT, url, group).await
    }

    /// `DELETE /mgmt/tm/ltm/data-group/internal/{name}`
    pub async fn delete_data_group(&self, name: &str) -> Result<(), Error> {
        let url = self.tm_url(&format!("{DATA_GROUP_PATH}/{}", resource_id(name)))?;
        debug!(name, "deleting data group");
        self.delete_resource(url).await
    }
}
