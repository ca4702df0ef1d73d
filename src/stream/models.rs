//! Event stream payloads

use crate::mcp::models::SERVER_NAME;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One frame of the `/sse` stream
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StreamEvent {
    /// Always the first frame of a connection
    Connected {
        service: &'static str,
        timestamp: DateTime<Utc>,
    },
    /// Periodic frame; `count` starts at 0 and grows by one per frame
    Heartbeat {
        count: u64,
        timestamp: DateTime<Utc>,
    },
}

impl StreamEvent {
    pub fn connected() -> Self {
        StreamEvent::Connected {
            service: SERVER_NAME,
            timestamp: Utc::now(),
        }
    }

    pub fn heartbeat(count: u64) -> Self {
        StreamEvent::Heartbeat {
            count,
            timestamp: Utc::now(),
        }
    }
}
