use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use godot_mcp_protocol::{is_notification, Command, HostReply};

use crate::config::HostConfig;
use crate::mcp::error::McpError;

use super::health::ConnectionState;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// One WebSocket link to the Godot addon
///
/// Carries at most one outstanding command. Callers share it behind a mutex
/// (see [`super::GodotClient`]) so exchanges never interleave.
pub struct GodotConnection {
    config: HostConfig,
    socket: Option<Socket>,
    state: ConnectionState,
    /// Identifies this bridge instance in logs
    client_id: Uuid,
    /// Connection attempts made over the lifetime of this value
    attempts: u64,
}

impl GodotConnection {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            socket: None,
            state: ConnectionState::Disconnected,
            client_id: Uuid::new_v4(),
            attempts: 0,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected() && self.socket.is_some()
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Open the WebSocket, retrying up to `max_retries` times
    pub async fn connect(&mut self) -> Result<(), McpError> {
        if self.socket.is_some() {
            self.disconnect().await;
        }

        let uri = self.config.uri();
        let max_attempts = self.config.max_attempts();
        let mut last_error = String::new();
        self.state = ConnectionState::Connecting;

        for attempt in 1..=max_attempts {
            self.attempts += 1;
            debug!(uri = %uri, attempt, "Connecting to Godot");

            let pending = connect_async(uri.as_str());
            match tokio::time::timeout(self.config.connect_timeout, pending).await {
                Ok(Ok((socket, _response))) => {
                    self.socket = Some(socket);
                    self.state = ConnectionState::Connected;
                    info!(uri = %uri, client_id = %self.client_id, attempt, "Connected to Godot");
                    return Ok(());
                }
                Ok(Err(e)) => last_error = e.to_string(),
                Err(_) => {
                    last_error = format!(
                        "timed out after {}s",
                        self.config.connect_timeout.as_secs_f64()
                    )
                }
            }

            warn!(
                uri = %uri,
                attempt,
                error = %last_error,
                "Connection attempt {}/{} failed",
                attempt,
                max_attempts
            );

            if attempt < max_attempts {
                tokio::time::sleep(self.config.retry_delay).await;
            }
        }

        self.state = ConnectionState::Disconnected;
        error!(uri = %uri, attempts = max_attempts, "Giving up on Godot connection");
        Err(McpError::ConnectFailed {
            uri,
            attempts: max_attempts,
            last_error,
        })
    }

    /// Close the socket if open; safe to call repeatedly
    pub async fn disconnect(&mut self) {
        if let Some(mut socket) = self.socket.take() {
            if let Err(e) = socket.close(None).await {
                debug!(error = %e, "Ignoring error while closing Godot socket");
            }
            info!(client_id = %self.client_id, "Disconnected from Godot");
        }
        self.state = ConnectionState::Disconnected;
    }

    /// Connect unless already connected
    pub async fn ensure_connected(&mut self) -> Result<(), McpError> {
        if self.is_connected() {
            return Ok(());
        }
        self.connect().await
    }

    /// Drop the socket after a failure without a close handshake
    fn mark_disconnected(&mut self, reason: &str) {
        if self.socket.take().is_some() {
            warn!(client_id = %self.client_id, reason, "Lost connection to Godot");
        }
        self.state = ConnectionState::Disconnected;
    }

    /// Discard frames that arrived without a request, such as the welcome
    ///
    /// Returns how many data frames were thrown away. Stops as soon as the
    /// socket stays quiet for `drain_timeout`. A closed or broken socket
    /// found here leaves the connection disconnected.
    pub async fn drain_pending(&mut self) -> usize {
        let mut drained = 0;

        loop {
            let Some(socket) = self.socket.as_mut() else {
                break;
            };
            let next = match tokio::time::timeout(self.config.drain_timeout, socket.next()).await {
                Ok(next) => next,
                Err(_) => break,
            };

            match next {
                Some(Ok(Message::Text(text))) => {
                    discard_pending(text.as_str());
                    drained += 1;
                }
                Some(Ok(Message::Binary(bytes))) => {
                    discard_pending(&String::from_utf8_lossy(&bytes));
                    drained += 1;
                }
                Some(Ok(Message::Close(_))) | None => {
                    self.mark_disconnected("closed while draining");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    self.mark_disconnected(&e.to_string());
                    break;
                }
            }
        }

        drained
    }

    /// Send one command and wait for its reply
    ///
    /// Transport failures, closes and response timeouts drop the socket
    /// before the error is returned.
    pub async fn send_command(&mut self, command: &Command) -> Result<HostReply, McpError> {
        if !self.is_connected() {
            return Err(McpError::NotConnected);
        }

        let drained = self.drain_pending().await;
        if drained > 0 {
            debug!(drained, "Drained pending messages before command");
        }
        if !self.is_connected() {
            return Err(McpError::ConnectionClosed);
        }

        let result = self.exchange(command).await;
        if let Err(e) = &result {
            if e.is_transport_failure() {
                self.mark_disconnected(&e.to_string());
            }
        }
        result
    }

    async fn exchange(&mut self, command: &Command) -> Result<HostReply, McpError> {
        let text = serde_json::to_string(command)?;
        let response_timeout = self.config.response_timeout;
        let socket = self.socket.as_mut().ok_or(McpError::NotConnected)?;

        debug!(command = %command.command_type, "Sending command to Godot");
        socket
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| McpError::Transport(e.to_string()))?;

        let reply = match response_timeout {
            Some(limit) => tokio::time::timeout(limit, recv_reply(socket))
                .await
                .map_err(|_| McpError::ResponseTimeout {
                    seconds: limit.as_secs_f64(),
                })??,
            None => recv_reply(socket).await?,
        };

        HostReply::from_value(reply).map_err(|e| McpError::InvalidReply(e.to_string()))
    }
}

/// Read frames until one reply arrives
///
/// Control frames and notifications are skipped.
async fn recv_reply(socket: &mut Socket) -> Result<Value, McpError> {
    loop {
        let text = match socket.next().await {
            Some(Ok(Message::Text(text))) => text.as_str().to_owned(),
            Some(Ok(Message::Binary(bytes))) => String::from_utf8(bytes.to_vec())
                .map_err(|e| McpError::ProtocolParse(e.to_string()))?,
            Some(Ok(Message::Close(_))) | None => return Err(McpError::ConnectionClosed),
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(McpError::Transport(e.to_string())),
        };

        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                error!(raw = %text, error = %e, "Godot sent a reply that is not JSON");
                return Err(McpError::ProtocolParse(e.to_string()));
            }
        };

        if is_notification(&value) {
            debug!(message = %value, "Skipping notification while awaiting reply");
            continue;
        }
        return Ok(value);
    }
}

fn discard_pending(text: &str) {
    match serde_json::from_str::<Value>(text) {
        Ok(value) if is_notification(&value) => {
            info!(message = %value, "Consumed notification from Godot");
        }
        Ok(value) => warn!(message = %value, "Discarding unexpected pending message"),
        Err(e) => warn!(raw = %text, error = %e, "Discarding unparseable pending message"),
    }
}
