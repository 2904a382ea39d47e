//! Documents and audit notes attached to a claim

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DocumentId, NoteId};

/// A document attached to a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDocument {
    pub id: DocumentId,
    pub name: String,
    /// Kind of document, e.g. `PHOTO`, `REPORT`, `INVOICE`
    #[serde(rename = "type")]
    pub document_type: String,
    /// Where the content lives, e.g. a storage path or URL
    pub content_ref: String,
    pub uploaded_by: String,
    pub upload_date: DateTime<Utc>,
}

/// An entry in a claim's audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimNote {
    pub id: NoteId,
    pub content: String,
    pub created_by: String,
    pub timestamp: DateTime<Utc>,
}
