use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Student, StudentId},
    protocol::StudentPayload,
};
use tracing::{debug, info};
use url::Url;

pub mod controller;
pub mod error;
pub mod form;
pub mod validation;

pub use controller::{
    events::{ActionError, FormEvent},
    FormTableController, FormView,
};
pub use error::ClientError;
pub use form::{
    CourseControl, CourseOption, CourseSelector, FormCapabilities, FormMode, FormState,
    StudentRow, TrackedField,
};
pub use validation::{validate, ValidationError};

/// Backend collaborator for the student collection.
#[async_trait]
pub trait StudentApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Student>, ClientError>;
    async fn create(&self, payload: &StudentPayload) -> Result<(), ClientError>;
    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> Result<(), ClientError>;
    async fn delete(&self, id: &StudentId) -> Result<(), ClientError>;
}

/// `StudentApi` over HTTP/JSON.
pub struct StudentsClient {
    http: Client,
    base_url: Url,
}

impl StudentsClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        Self::with_http(Client::new(), server_url)
    }

    pub fn with_http(http: Client, server_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(server_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::UnsupportedUrl(server_url.to_string()));
        }
        // Url::join replaces the last segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self) -> Result<Url, ClientError> {
        Ok(self.base_url.join("students")?)
    }

    fn record_url(&self, id: &StudentId) -> Result<Url, ClientError> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| ClientError::UnsupportedUrl(self.base_url.to_string()))?
            .push(id.as_str());
        Ok(url)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(ClientError::Status { status, body })
}

#[async_trait]
impl StudentApi for StudentsClient {
    async fn list(&self) -> Result<Vec<Student>, ClientError> {
        let url = self.collection_url()?;
        debug!(%url, "fetching students");
        let response = ensure_success(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, payload: &StudentPayload) -> Result<(), ClientError> {
        let url = self.collection_url()?;
        info!(%url, "creating student");
        ensure_success(self.http.post(url).json(payload).send().await?).await?;
        Ok(())
    }

    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> Result<(), ClientError> {
        let url = self.record_url(id)?;
        info!(%url, student_id = %id, "updating student");
        ensure_success(self.http.put(url).json(payload).send().await?).await?;
        Ok(())
    }

    async fn delete(&self, id: &StudentId) -> Result<(), ClientError> {
        let url = self.record_url(id)?;
        info!(%url, student_id = %id, "deleting student");
        ensure_success(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
