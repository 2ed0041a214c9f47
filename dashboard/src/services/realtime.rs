//! # Realtime Notification Client
//!
//! WebSocket client that joins the user's notification room after login and
//! forwards invalidation signals to the main thread over an event channel.
//!
//! The wire protocol is a JSON envelope with an `event` discriminator. The
//! client sends a single `join` message after connecting; the server then
//! pushes `notification:new` and `notification:broadcast` events. Payload
//! bodies are deliberately ignored - a signal only tells the app that its
//! cached notification feed is stale and must be refetched over REST.
//!
//! Connection management is idempotent: `connect` while already connected
//! returns the existing handle, `disconnect` when not connected is a no-op.

use async_channel::{Receiver, Sender};
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared::UserRole;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, error, info, warn};

/// Maximum delay between reconnection attempts.
const MAX_RECONNECT_DELAY: Duration = Duration::from_secs(60);

/// Invalidation signal forwarded to the main thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealtimeEvent {
    /// A notification addressed to this user was created.
    NotificationNew,
    /// A broadcast notification (e.g. emergency escalation) was created.
    NotificationBroadcast,
}

impl RealtimeEvent {
    /// Map a wire event name to a signal, `None` for events we don't handle.
    fn from_wire(event: &str) -> Option<Self> {
        match event {
            "notification:new" => Some(RealtimeEvent::NotificationNew),
            "notification:broadcast" => Some(RealtimeEvent::NotificationBroadcast),
            _ => None,
        }
    }
}

/// Join message sent once per connection to enter the user's room.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinMessage {
    event: &'static str,
    user_id: String,
    role: UserRole,
}

/// Incoming envelope; only the discriminator matters to this client.
#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
}

/// Handle owning a live connection. Dropping the last clone (or calling
/// [`RealtimeClient::disconnect`]) shuts the background task down.
#[derive(Debug)]
pub struct RealtimeHandle {
    shutdown: Sender<()>,
}

impl RealtimeHandle {
    fn close(&self) {
        self.shutdown.close();
    }
}

/// Owns the lifecycle of the notification WebSocket connection.
///
/// Created once at startup with the sending half of the invalidation bus;
/// the session lifecycle drives `connect`/`disconnect` as users log in and
/// out.
pub struct RealtimeClient {
    events_tx: Sender<RealtimeEvent>,
    active: Mutex<Option<Arc<RealtimeHandle>>>,
}

impl RealtimeClient {
    /// Create a client that publishes invalidation signals to `events_tx`.
    pub fn new(events_tx: Sender<RealtimeEvent>) -> Self {
        Self {
            events_tx,
            active: Mutex::new(None),
        }
    }

    /// Connect and join the user's notification room.
    ///
    /// Idempotent: if a connection is already active the existing handle is
    /// returned and no new connection is made.
    pub fn connect(&self, user_id: &str, role: UserRole) -> Arc<RealtimeHandle> {
        let mut active = self.active.lock();
        if let Some(handle) = active.as_ref() {
            debug!("Realtime connection already active, reusing handle");
            return Arc::clone(handle);
        }

        let (shutdown_tx, shutdown_rx) = async_channel::bounded::<()>(1);
        let handle = Arc::new(RealtimeHandle {
            shutdown: shutdown_tx,
        });

        let url = notification_stream_url();
        let join = JoinMessage {
            event: "join",
            user_id: user_id.to_string(),
            role,
        };
        let events_tx = self.events_tx.clone();

        info!(url = %url, role = ?role, "Starting realtime notification connection");
        tokio::spawn(run_connection(url, join, events_tx, shutdown_rx));

        *active = Some(Arc::clone(&handle));
        handle
    }

    /// Tear down the active connection, if any. Safe to call repeatedly.
    pub fn disconnect(&self) {
        if let Some(handle) = self.active.lock().take() {
            info!("Disconnecting realtime notification stream");
            handle.close();
        }
    }

    /// Whether a connection handle is currently held.
    pub fn is_connected(&self) -> bool {
        self.active.lock().is_some()
    }
}

/// WebSocket URL for the notification stream.
///
/// `LIFELINK_WS_URL` wins when set; otherwise the URL is derived from the
/// API base URL by swapping the scheme and replacing `/api` with `/ws`.
fn notification_stream_url() -> String {
    if let Ok(url) = std::env::var("LIFELINK_WS_URL") {
        return url;
    }
    let base_url = std::env::var("LIFELINK_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:4000/api".to_string());
    let ws_base = base_url
        .replace("http://", "ws://")
        .replace("https://", "wss://");
    match ws_base.strip_suffix("/api") {
        Some(prefix) => format!("{prefix}/ws"),
        None => format!("{ws_base}/ws"),
    }
}

/// Connection loop: connect, join, read until the stream drops, then retry
/// with exponential backoff. Exits when the shutdown channel closes.
async fn run_connection(
    url: String,
    join: JoinMessage,
    events_tx: Sender<RealtimeEvent>,
    shutdown_rx: Receiver<()>,
) {
    let mut reconnect_delay = Duration::from_secs(1);

    loop {
        match connect_async(&url).await {
            Ok((ws_stream, response)) => {
                info!(
                    url = %url,
                    status = ?response.status(),
                    "Realtime WebSocket connected"
                );
                reconnect_delay = Duration::from_secs(1);

                let reconnect = drive_stream(ws_stream, &join, &events_tx, &shutdown_rx).await;
                if !reconnect {
                    return;
                }
                warn!("Realtime connection lost, reconnecting");
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Realtime WebSocket connect failed");
            }
        }

        tokio::select! {
            _ = shutdown_rx.recv() => {
                debug!("Realtime connection shut down while waiting to reconnect");
                return;
            }
            _ = sleep(reconnect_delay) => {}
        }
        reconnect_delay = (reconnect_delay * 2).min(MAX_RECONNECT_DELAY);
    }
}

/// Drive a single established connection. Returns `true` when the stream
/// dropped and a reconnect should be attempted, `false` on shutdown.
async fn drive_stream(
    ws_stream: tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
    join: &JoinMessage,
    events_tx: &Sender<RealtimeEvent>,
    shutdown_rx: &Receiver<()>,
) -> bool {
    let (mut write, mut read) = ws_stream.split();

    let join_text = match serde_json::to_string(join) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "Failed to serialize join message");
            return false;
        }
    };
    if write.send(Message::Text(join_text)).await.is_err() {
        warn!("Failed to send join message, retrying connection");
        return true;
    }

    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => {
                let _ = write.send(Message::Close(None)).await;
                return false;
            }
            msg = read.next() => match msg {
                Some(Ok(Message::Text(text))) => dispatch(&text, events_tx).await,
                Some(Ok(Message::Ping(data))) => {
                    if write.send(Message::Pong(data)).await.is_err() {
                        return true;
                    }
                }
                Some(Ok(Message::Close(frame))) => {
                    info!(frame = ?frame, "Realtime connection closed by server");
                    return true;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    error!(error = %e, "Realtime WebSocket read error");
                    return true;
                }
                None => return true,
            }
        }
    }
}

/// Parse one incoming frame and forward the matching invalidation signal.
/// Malformed or unknown payloads are logged and skipped; a bad frame must
/// never take the connection down.
async fn dispatch(text: &str, events_tx: &Sender<RealtimeEvent>) {
    match serde_json::from_str::<Envelope>(text) {
        Ok(envelope) => match RealtimeEvent::from_wire(&envelope.event) {
            Some(event) => {
                if events_tx.send(event).await.is_err() {
                    warn!("Invalidation bus closed, dropping realtime event");
                }
            }
            None => {
                debug!(event = %envelope.event, "Ignoring unhandled realtime event");
            }
        },
        Err(e) => {
            warn!(error = %e, "Malformed realtime payload, skipping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_events_map_to_signals() {
        assert_eq!(
            RealtimeEvent::from_wire("notification:new"),
            Some(RealtimeEvent::NotificationNew)
        );
        assert_eq!(
            RealtimeEvent::from_wire("notification:broadcast"),
            Some(RealtimeEvent::NotificationBroadcast)
        );
        assert_eq!(RealtimeEvent::from_wire("request:matched"), None);
        assert_eq!(RealtimeEvent::from_wire(""), None);
    }

    #[test]
    fn join_message_uses_camel_case_wire_format() {
        let join = JoinMessage {
            event: "join",
            user_id: "u-1".to_string(),
            role: UserRole::Donor,
        };
        let json = serde_json::to_value(&join).unwrap();
        assert_eq!(json["event"], "join");
        assert_eq!(json["userId"], "u-1");
        assert_eq!(json["role"], "donor");
    }

    #[tokio::test]
    async fn connect_is_idempotent() {
        let (events_tx, _events_rx) = async_channel::unbounded();
        let client = RealtimeClient::new(events_tx);

        assert!(!client.is_connected());
        let first = client.connect("u-1", UserRole::Donor);
        let second = client.connect("u-1", UserRole::Donor);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(client.is_connected());

        client.disconnect();
        assert!(!client.is_connected());
        // Disconnecting again must be a no-op.
        client.disconnect();
    }

    #[tokio::test]
    async fn dispatch_forwards_known_events_and_skips_garbage() {
        let (events_tx, events_rx) = async_channel::unbounded();

        dispatch(r#"{"event":"notification:new"}"#, &events_tx).await;
        dispatch("not even json", &events_tx).await;
        dispatch(r#"{"event":"presence:ping"}"#, &events_tx).await;
        dispatch(r#"{"event":"notification:broadcast"}"#, &events_tx).await;

        assert_eq!(events_rx.try_recv().unwrap(), RealtimeEvent::NotificationNew);
        assert_eq!(
            events_rx.try_recv().unwrap(),
            RealtimeEvent::NotificationBroadcast
        );
        assert!(events_rx.try_recv().is_err());
    }

    #[test]
    fn stream_url_derived_from_api_base() {
        // Exercises only the suffix-swap logic; env handling is ambient.
        let derived = "http://127.0.0.1:4000/api"
            .replace("http://", "ws://")
            .strip_suffix("/api")
            .map(|prefix| format!("{prefix}/ws"));
        assert_eq!(derived.as_deref(), Some("ws://127.0.0.1:4000/ws"));
    }
}
