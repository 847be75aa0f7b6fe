//! Room model - a bookable physical resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bookable meeting room
///
/// Rooms are seeded by an operator; the id is assigned by the store.
/// Catalog management (renaming, retiring) is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    pub created_at: DateTime<Utc>,
}
