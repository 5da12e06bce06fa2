use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
