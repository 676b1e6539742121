// Folder endpoints (`sys/folder`)

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::models::Folder;
use crate::tm::client::{BigIpClient, resource_id};

const FOLDER_PATH: &str = "sys/folder";

impl BigIpClient {
    /// `GET /mgmt/tm/sys/folder`
    pub async fn list_folders(&self) -> Result<Vec<Folder>, Error> {
        let url = self.tm_url(FOLDER_PATH)?;
        debug!("listing folders");
        self.list_resources(url).await
    }

    /// `GET /mgmt/tm/sys/folder/{path}` -- `path` is a full path like `/Common/app`.
    pub async fn get_folder(&self, path: &str) -> Result<Folder, Error> {
        let url = self.tm_url(&format!("{FOLDER_PATH}/{}", resource_id(path)))?;
        self.get_resource(url).await
    }

    /// `POST /mgmt/tm/sys/folder`
    pub async fn create_folder(&self, folder: &Folder) -> Result<Folder, Error> {
        let url = self.tm_url(FOLDER_PATH)?;
        debug!(name = %folder.name, "creating folder");
        self.send_resource(Method::POST, url, folder).await
    }

    /// `PUT /mgmt/tm/sys/folder/{path}`
    pub async fn modify_folder(&self, path: &str, folder: &Folder) -> Result<Folder, Error> {
        let url = self.tm_url(&format!("{FOLDER_PATH}/{}", resource_id(path)))?;
        debug!(path, "modifying folder");
        self.send_resource(Method::PUT, url, folder).await
    }

    /// `DELETE /mgmt/tm/sys/folder/{path}`
    pub async fn delete_folder(&self, path: &str) -> Result<(), Error> {
        let url = self.tm_url(&format!("{FOLDER_PATH}/{}", resource_id(path)))?;
        debug!(path, "deleting folder");
        self.delete_resource(url).await
    }
}
