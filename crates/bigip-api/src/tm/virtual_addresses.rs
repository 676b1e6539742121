// Virtual address endpoints
//
// Virtual addresses are created implicitly with virtual servers; creating
// one directly is mostly useful for pre-staging flags such as ARP or
// ICMP echo before the listeners exist.

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::models::VirtualAddress;
use crate::tm::client::{BigIpClient, resource_id};

const VIRTUAL_ADDRESS_PATH: &str = "ltm/virtual-address";

impl BigIpClient {
    /// `GET /mgmt/tm/ltm/virtual-address`
    pub async fn list_virtual_addresses(&self) -> Result<Vec<VirtualAddress>, Error> {
        let url = self.tm_url(VIRTUAL_ADDRESS_PATH)?;
        debug!("listing virtual addresses");
        self.list_resources(url).await
    }

    /// `GET /mgmt/tm/ltm/virtual-address/{name}`
    pub async fn get_virtual_address(&self, name: &str) -> Result<VirtualAddress, Error> {
        let url = self.tm_url(&format!("{VIRTUAL_ADDRESS_PATH}/{}", resource_id(name)))?;
        self.get_resource(url).await
    }

    /// `POST /mgmt/tm/ltm/virtual-address`
    pub async fn create_virtual_address(
        &self,
        address: &VirtualAddress,
    ) -> Result<VirtualAddress, Error> {
        let url = self.tm_url(VIRTUAL_ADDRESS_PATH)?;
        debug!(name = %address.name, "creating virtual address");
        self.send_resource(Method::POST, url, address).await
    }

    /// `PUT /mgmt/tm/ltm/virtual-address/{name}`
    pub async fn modify_virtual_address(
        &self,
        name: &str,
        address: &VirtualAddress,
    ) -> Result<VirtualAddress, Error> {
        let url = self.tm_url(&format!("{VIRTUAL_ADDRESS_PATH}/{}", resource_id(name)))?;
        debug!(name, "modifying virtual address");
        self.send_resource(Method::PUT, url, address).await
    }

    /// `DELETE /mgmt/tm/ltm/virtual-address/{name}`
    pub async fn delete_virtual_address(&self, name: &str) -> Result<(), Error> {
        let url = self.tm_url(&format!("{VIRTUAL_ADDRESS_PATH}/{}", resource_id(name)))?;
        debug!(name, "deleting virtual address");
        self.delete_resource(url).await
    }
}
