use reactivities_application::{error::AppError, prelude as flows};
use rocket::tokio::{sync::mpsc::UnboundedReceiver, task};

use super::hub::{ConnectionId, Hub};
use crate::{
    adapters::json::{to_json, ClientMessage, ServerMessage},
    core::usecases,
    web::sqlite,
};

/// The server side of a single realtime connection.
///
/// Dropping the session removes the connection from the hub.
pub struct Session {
    relay: Relay,
}

#[derive(Clone)]
struct Relay {
    id: ConnectionId,
    username: String,
    hub: Hub,
    db: sqlite::Connections,
}

impl Session {
    pub fn new(
        hub: Hub,
        db: sqlite::Connections,
        username: &str,
    ) -> (Self, UnboundedReceiver<String>) {
        let (id, outbox) = hub.connect();
        debug!("User '{username}' connected as {id}");
        let relay = Relay {
            id,
            username: username.to_owned(),
            hub,
            db,
        };
        (Self { relay }, outbox)
    }

    /// Handles a text frame on the blocking thread pool
    /// and returns a reply for the sender, if any.
    pub async fn on_text(&self, text: String) -> Option<String> {
        let relay = self.relay.clone();
        task::spawn_blocking(move || relay.on_text(&text))
            .await
            .unwrap_or_else(|err| {
                error!("Failed to handle message of connection {}: {err}", self.relay.id);
                None
            })
    }

    #[cfg(test)]
    pub fn on_text_blocking(&self, text: &str) -> Option<String> {
        self.relay.on_text(text)
    }
}

impl Relay {
    fn on_text(&self, text: &str) -> Option<String> {
        let message = match serde_json::from_str::<ClientMessage>(text) {
            Ok(msg) => match self.handle(msg) {
                Ok(()) => return None,
                Err(err) => err.to_string(),
            },
            Err(err) => {
                debug!("Invalid frame from connection {}: {err}", self.id);
                format!("Invalid message: {err}")
            }
        };
        encode(&ServerMessage::Error { message })
    }

    fn handle(&self, msg: ClientMessage) -> Result<(), AppError> {
        match msg {
            ClientMessage::AddToGroup { activity_id } => {
                self.hub.add_to_group(self.id, &activity_id);
            }
            ClientMessage::RemoveFromGroup { activity_id } => {
                self.hub.remove_from_group(self.id, &activity_id);
            }
            ClientMessage::SendComment { activity_id, body } => {
                let new_comment = usecases::NewComment {
                    activity_id: activity_id.clone(),
                    body,
                };
                let details = flows::create_comment(&self.db, &self.username, new_comment)?;
                let comment = to_json::comment(details);
                if let Some(text) = encode(&ServerMessage::ReceiveComment { comment }) {
                    let count = self.hub.broadcast(&activity_id, &text);
                    debug!("Sent comment on activity {activity_id} to {count} connection(s)");
                }
            }
        }
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let Relay { id, username, .. } = &self.relay;
        debug!("User '{username}' disconnected from {id}");
        self.relay.hub.disconnect(*id);
    }
}

fn encode(msg: &ServerMessage) -> Option<String> {
    serde_json::to_string(msg)
        .map_err(|err| error!("Failed to serialize chat message: {err}"))
        .ok()
}
