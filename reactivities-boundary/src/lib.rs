use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

///////////////////////////////////////////////////////////////////////
// Activities
///////////////////////////////////////////////////////////////////////

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Activity {
    pub id          : String,
    pub title       : String,
    pub description : String,
    pub category    : String,
    #[serde(with = "time::serde::rfc3339")]
    pub date        : OffsetDateTime,
    pub city        : String,
    pub venue       : String,
    pub attendees   : Vec<Attendee>,
    #[serde(default)]
    pub comments    : Vec<Comment>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Attendee {
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_host: bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewActivity {
    /// Optional, a new id is generated if missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id          : Option<String>,
    pub title       : String,
    pub description : String,
    pub category    : String,
    #[serde(with = "time::serde::rfc3339")]
    pub date        : OffsetDateTime,
    pub city        : String,
    pub venue       : String,
}

/// Only the given fields are changed.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category    : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub date        : Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue       : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Comment {
    pub id: String,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

///////////////////////////////////////////////////////////////////////
// Users and profiles
///////////////////////////////////////////////////////////////////////

/// The authenticated user together with a fresh access token.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct User {
    pub display_name: String,
    pub token: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub display_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Profile {
    pub username: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub photos: Vec<Photo>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateProfile {
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub is_main: bool,
}

///////////////////////////////////////////////////////////////////////
// Chat
///////////////////////////////////////////////////////////////////////

/// Frames sent by a chat client.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    AddToGroup { activity_id: String },
    RemoveFromGroup { activity_id: String },
    SendComment { activity_id: String, body: String },
}

/// Frames sent by the chat hub.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    ReceiveComment { comment: Comment },
    Error { message: String },
}

///////////////////////////////////////////////////////////////////////
// Errors
///////////////////////////////////////////////////////////////////////

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
