use serde::{Deserialize, Serialize};

/// A place of interest the user has swiped right on. Immutable once saved;
/// owned by the trip session until an explicit clear.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Attraction {
    pub name: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub added_at: String,
}
