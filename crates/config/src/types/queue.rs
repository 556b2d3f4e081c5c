//! Task queue (broker and result backend) settings.

use serde::Serialize;

use crate::constants::{
    DEFAULT_ACCEPT_CONTENT, DEFAULT_BROKER_URL, DEFAULT_RESULT_BACKEND, DEFAULT_SERIALIZER,
};

/// Settings for the asynchronous task queue client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskQueueSettings {
    pub broker_url: String,
    pub result_backend: String,
    /// MIME types workers accept for task payloads.
    pub accept_content: Vec<String>,
    pub task_serializer: String,
    pub result_serializer: String,
}

impl Default for TaskQueueSettings {
    fn default() -> Self {
        Self {
            broker_url: DEFAULT_BROKER_URL.to_string(),
            result_backend: DEFAULT_RESULT_BACKEND.to_string(),
            accept_content: DEFAULT_ACCEPT_CONTENT.iter().map(|s| s.to_string()).collect(),
            task_serializer: DEFAULT_SERIALIZER.to_string(),
            result_serializer: DEFAULT_SERIALIZER.to_string(),
        }
    }
}

impl TaskQueueSettings {
    /// Returns true if workers accept payloads of the given MIME type.
    pub fn accepts(&self, content_type: &str) -> bool {
        self.accept_content
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(content_type))
    }
}
