use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One job application to be scored. `resume_document` is an opaque locator
/// for the attached resume; `None` means the applicant attached nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub resume_document: Option<String>,
}
