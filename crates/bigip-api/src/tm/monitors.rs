// Health monitor endpoints
//
// Monitors are kind-scoped: `ltm/monitor/http`, `ltm/monitor/tcp`, ...

use reqwest::Method;
use tracing::debug;

use crate::error::Error;
use crate::models::{Monitor, MonitorKind};
use crate::tm::client::{BigIpClient, resource_id};

fn monitor_path(kind: MonitorKind) -> String {
    format!("ltm/monitor/{kind}")
}

impl BigIpClient {
    /// `GET /mgmt/tm/ltm/monitor/{kind}`
    pub async fn list_monitors(&self, kind: MonitorKind) -> Result<Vec<Monitor>, Error> {
        let url = self.tm_url(&monitor_path(kind))?;
        debug!(%kind, "listing monitors");
        self.list_resources(url).await
    }

    /// `GET /mgmt/tm/ltm/monitor/{kind}/{name}`
    pub async fn get_monitor(&self, kind: MonitorKind, name: &str) -> Result<Monitor, Error> {
        let url = self.tm_url(&format!("{}/{}", monitor_path(kind), resource_id(name)))?;
        self.get_resource(url).await
    }

    /// `POST /mgmt/tm/ltm/monitor/{kind}`
    pub async fn create_monitor(
        &self,
        kind: MonitorKind,
        monitor: &Monitor,
    ) -> Result<Monitor, Error> {
        let url = self.tm_url(&monitor_path(kind))?;
        debug!(%kind, name = %monitor.name, "creating monitor");
        self.send_resource(Method::POST, url, monitor).await
    }

    /// `PUT /mgmt/tm/ltm/monitor/{kind}/{name}`
    pub async fn modify_monitor(
        &self,
        kind: MonitorKind,
        name: &str,
        monitor: &Monitor,
    ) -> Result<Monitor, Error> {
        let url = self.tm_url(&format!("{}/{}", monitor_path(kind), resource_id(name)))?;
        debug!(%kind, name, "modifying monitor");
        self.send_resource(Method::PUT, url, monitor).await
    }

    /// `DELETE /mgmt/tm/ltm/monitor/{kind}/{name}`
    pub async fn delete_monitor(&self, kind: MonitorKind, name: &str) -> Result<(), Error> {
        let url = self.tm_url(&format!("{}/{}", monitor_path(kind), resource_id(name)))?;
        debug!(%kind, name, "deleting monitor");
        self.delete_resource(url).await
    }
}
