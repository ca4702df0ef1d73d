//! Server-Sent Events endpoint
//!
//! Each connection gets one `connected` frame followed by numbered
//! heartbeats. The stream ends by itself after `max_heartbeats` frames so no
//! task outlives its handler; a failed write to the client drops it earlier.

use super::models::StreamEvent;
use crate::agent::SharedState;
use crate::config::StreamSettings;
use axum::{
    extract::State,
    response::sse::{Event, Sse},
    routing::get,
    Router,
};
use futures_util::stream::{self, Stream, StreamExt};
use tracing::info;
use uuid::Uuid;

/// Creates routes for the event stream
pub fn routes() -> Router<SharedState> {
    Router::new().route("/sse", get(handle_sse))
}

/// Endpoint: GET /sse
async fn handle_sse(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let connection = Connection::open();

    let frames = event_stream(state.config.stream).map(move |event| {
        // The closure owns the guard, so the close is logged when the stream drops
        let _connection = &connection;
        Event::default().json_data(event)
    });

    Sse::new(frames)
}

/// Ordered events of a single connection: `connected`, then heartbeats
/// numbered from 0, one per `interval`, until the bound is reached.
pub fn event_stream(settings: StreamSettings) -> impl Stream<Item = StreamEvent> {
    let connected = stream::once(async { StreamEvent::connected() });

    let heartbeats = stream::unfold(0u64, move |count| async move {
        if count >= settings.max_heartbeats {
            return None;
        }
        tokio::time::sleep(settings.interval).await;
        Some((StreamEvent::heartbeat(count), count + 1))
    });

    connected.chain(heartbeats)
}

/// Logs the lifetime of one stream connection
struct Connection(Uuid);

impl Connection {
    fn open() -> Self {
        let id = Uuid::new_v4();
        info!(connection_id = %id, "Event stream opened");
        Self(id)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        info!(connection_id = %self.0, "Event stream closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settings(max_heartbeats: u64) -> StreamSettings {
        StreamSettings {
            interval: Duration::from_millis(1),
            max_heartbeats,
        }
    }

    #[tokio::test]
    async fn connected_then_numbered_heartbeats() {
        let events: Vec<_> = event_stream(settings(3)).collect().await;
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], StreamEvent::Connected { .. }));

        let counts: Vec<u64> = events[1..]
            .iter()
            .map(|event| match event {
                StreamEvent::Heartbeat { count, .. } => *count,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(counts, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn zero_bound_only_connects() {
        let events: Vec<_> = event_stream(settings(0)).collect().await;
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], StreamEvent::Connected { .. }));
    }
}
