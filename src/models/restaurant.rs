use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub price: String,
    pub rating: f32,
    pub location: String,
}
