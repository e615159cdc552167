use serde::{Deserialize, Serialize};

/// A registered user as stored in the `users` table.
///
/// The `id` is assigned by the store on insert and never changes. `email` is
/// unique across all records; `name` and `amount` carry no constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub amount: f64,
}

/// Payload for creating a user. All three fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub amount: f64,
}
