use serde::{Deserialize, Serialize};

/// Contact message appended to the `messages` collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender_name: String,
    pub email: String,
    pub message: String,
}
