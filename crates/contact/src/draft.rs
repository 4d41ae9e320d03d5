use folio_shared::{FORM_DRAFT_KEY, KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{ContactFormInput, iso_timestamp};

/// Unsent contact form contents saved for the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "savedAt", default)]
    pub saved_at: String,
}

impl Draft {
    pub fn new(input: &ContactFormInput, at: OffsetDateTime) -> Self {
        Self {
            name: input.name.to_owned(),
            email: input.email.to_owned(),
            subject: input.subject.to_owned(),
            message: input.message.to_owned(),
            saved_at: iso_timestamp(at),
        }
    }

    pub fn input(&self) -> ContactFormInput {
        ContactFormInput {
            name: self.name.to_owned(),
            email: self.email.to_owned(),
            subject: self.subject.to_owned(),
            message: self.message.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("corrupt draft: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Overwrites the stored draft. Storage failures are logged and dropped.
pub async fn save_draft(store: &dyn KeyValueStore, input: &ContactFormInput) {
    let draft = Draft::new(input, OffsetDateTime::now_utc());

    let value = match serde_json::to_string(&draft) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "failed to encode draft");
            return;
        }
    };

    if let Err(err) = store.set(FORM_DRAFT_KEY, &value).await {
        tracing::warn!(error = %err, "failed to save draft");
    }
}

/// Reads the stored draft, telling an absent record apart from a corrupt one.
pub async fn try_load_draft(store: &dyn KeyValueStore) -> Result<Option<Draft>, DraftError> {
    let Some(value) = store.get(FORM_DRAFT_KEY).await? else {
        return Ok(None);
    };

    if value.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(&value)?))
}

/// Reads the stored draft; unreadable and corrupt records count as absent.
pub async fn load_draft(store: &dyn KeyValueStore) -> Option<Draft> {
    match try_load_draft(store).await {
        Ok(draft) => draft,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring stored draft");
            None
        }
    }
}

pub async fn clear_draft(store: &dyn KeyValueStore) {
    if let Err(err) = store.remove(FORM_DRAFT_KEY).await {
        tracing::warn!(error = %err, "failed to clear draft");
    }
}
