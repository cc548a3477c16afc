use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable message identity. Never derived from list position, so deletion
/// cannot misattribute a later render to the wrong message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    #[must_use]
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plain lat/lon pair. Range checking is the map shell's concern; the core
/// treats the coordinate as opaque payload.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageBody {
    Text { body: String },
    Image { uri: String },
    Location { coordinate: Coordinate },
}

impl MessageBody {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Location { .. } => "location",
        }
    }
}

/// A chat entry. Exactly one body kind; the id is assigned at construction
/// and never reused within a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub body: MessageBody,
}

impl Message {
    /// Empty bodies are valid; the toolbar filters empty submissions itself.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            id: MessageId::fresh(),
            body: MessageBody::Text { body: body.into() },
        }
    }

    /// The uri is opaque here; whether it loads is the image shell's problem.
    #[must_use]
    pub fn image(uri: impl Into<String>) -> Self {
        Self {
            id: MessageId::fresh(),
            body: MessageBody::Image { uri: uri.into() },
        }
    }

    #[must_use]
    pub fn location(coordinate: Coordinate) -> Self {
        Self {
            id: MessageId::fresh(),
            body: MessageBody::Location { coordinate },
        }
    }
}

/// Fullscreen image viewer state. A single optional value, not a stack:
/// opening a second image while one is shown replaces the uri directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Overlay {
    #[default]
    Closed,
    FullscreenImage {
        uri: String,
    },
}

impl Overlay {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::FullscreenImage { .. })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Model {
    /// Newest-first; submission prepends.
    pub messages: Vec<Message>,
    pub overlay: Overlay,

    // Toolbar
    pub draft: String,
    pub input_focused: bool,
    pub active_notice: Option<String>,

    pub network_online: bool,
    pub screen_mounted: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            overlay: Overlay::Closed,
            draft: String::new(),
            input_focused: false,
            active_notice: None,
            // Assume online until the shell reports otherwise, so the
            // offline banner does not flash during startup.
            network_online: true,
            screen_mounted: false,
        }
    }
}

impl Model {
    pub fn prepend(&mut self, message: Message) {
        self.messages.insert(0, message);
    }

    /// Removes the message with `id`. Tolerant of duplicate delete requests
    /// (e.g. a slow double-press): an absent id is a no-op.
    pub fn delete_message(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    #[must_use]
    pub fn find_message(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }
}
