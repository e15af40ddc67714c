// Endpoint create/delete over an in-memory collection

use crate::models::{Endpoint, EndpointStatus};
use crate::source::RecordSource;
use chrono::NaiveDate;
use eyre::{Result, eyre};
use tracing::info;
use uuid::Uuid;

/// The user's endpoints, newest first
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    endpoints: Vec<Endpoint>,
}

impl EndpointRegistry {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn get(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Register a new active endpoint at the front of the list
    pub fn create(&mut self, name: &str, url: &str, today: NaiveDate) -> Result<&Endpoint> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(eyre!("Endpoint name and URL are both required"));
        }

        let endpoint = Endpoint {
            id: format!("ep_{}", Uuid::now_v7().simple()),
            name: name.to_string(),
            url: url.to_string(),
            status: EndpointStatus::Active,
            created_at: today,
            events_today: 0,
        };
        info!(id = %endpoint.id, name = %endpoint.name, "Endpoint created");

        self.endpoints.insert(0, endpoint);
        Ok(&self.endpoints[0])
    }

    /// Remove an endpoint, returning it if it existed
    pub fn delete(&mut self, id: &str) -> Option<Endpoint> {
        let pos = self.endpoints.iter().position(|e| e.id == id)?;
        let removed = self.endpoints.remove(pos);
        info!(id, name = %removed.name, "Endpoint deleted");
        Some(removed)
    }
}

impl RecordSource<Endpoint> for EndpointRegistry {
    fn list_records(&self) -> Result<Vec<Endpoint>> {
        Ok(self.endpoints.clone())
    }
}
