use dioxus_logger::tracing;

use crate::{
    model::NewMessage,
    store::{insert_one, DataStore},
};

pub static MESSAGES: &str = "messages";

pub static SENT_NOTICE: &str = "Message sent! I will get back to you soon.";
pub static FAILED_NOTICE: &str = "Failed to send message.";

/// Current contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_message(&self) -> NewMessage {
        NewMessage {
            sender_name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    /// Text of the notification shown for this outcome.
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => SENT_NOTICE,
            SubmitOutcome::Failed => FAILED_NOTICE,
        }
    }
}

/// Append the form's message to the store.
///
/// Issues exactly one insert. The form is cleared only when the insert succeeds; on failure
/// it keeps the visitor's input so they can try again.
pub async fn submit_message<S: DataStore>(store: &S, form: &mut ContactForm) -> SubmitOutcome {
    match insert_one(store, MESSAGES, &form.to_message()).await {
        Ok(()) => {
            form.clear();
            SubmitOutcome::Sent
        }
        Err(err) => {
            tracing::error!("Failed to send contact message: {}", err);
            SubmitOutcome::Failed
        }
    }
}
