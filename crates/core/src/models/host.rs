//! Host model - the user who owns meetings

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of generated host identifiers
const HOST_ID_LEN: usize = 6;

/// Alphabet for host identifiers (no ambiguous characters)
const HOST_ID_ALPHABET: &[u8] = b"abcdefghijkmnpqrstuvwxyz23456789";

/// A host account that can own meetings
///
/// Only the owning host may update or delete a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    pub name: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
}

impl Host {
    pub fn new(name: String, department: String) -> Self {
        Self {
            id: generate_host_id(),
            name,
            department,
            created_at: Utc::now(),
        }
    }
}

/// Generate a short random host identifier
fn generate_host_id() -> String {
    let mut rng = rand::thread_rng();
    (0..HOST_ID_LEN)
        .map(|_| HOST_ID_ALPHABET[rng.gen_range(0..HOST_ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_id_shape() {
        let host = Host::new("Mina".to_string(), "Platform".to_string());

        assert_eq!(host.id.len(), HOST_ID_LEN);
        assert!(host
            .id
            .bytes()
            .all(|b| HOST_ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_host_ids_distinct() {
        let a = Host::new("A".to_string(), "X".to_string());
        let b = Host::new("B".to_string(), "X".to_string());

        // 32^6 ids; a collision here means the generator is broken
        assert_ne!(a.id, b.id);
    }
}
