#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod capabilities;
pub mod event;
pub mod model;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use event::Event;
pub use model::{Coordinate, Message, MessageBody, MessageId, Model, Overlay};

pub const DELETE_PROMPT_TITLE: &str = "Delete Message";
pub const DELETE_PROMPT_MESSAGE: &str = "Are you sure you want to delete this message?";
pub const DELETE_CONFIRM_LABEL: &str = "Delete";

pub const OFFLINE_BANNER_TEXT: &str = "No network connection";

pub const CAMERA_NOTICE: &str = "Camera button pressed";
pub const LOCATION_PERMISSION_NOTICE: &str = "Requesting location permission...";
pub const LOCATION_DENIED_NOTICE: &str =
    "Location permission denied. Please enable GPS/location in settings.";

pub const PERMISSION_DENIED_TITLE: &str = "Permission Denied";
pub const PERMISSION_DENIED_MESSAGE: &str =
    "Location permission is required to use this feature.";
pub const LOCATION_ERROR_TITLE: &str = "Error";
pub const LOCATION_ERROR_MESSAGE: &str = "Unable to retrieve location.";

pub const SEED_IMAGE_URI: &str = "https://unsplash.it/300/300";
pub const SEED_TEXT_BODY: &str = "Testing";

/// One rendered bubble. Carries exactly what the shell needs for that kind;
/// ids are the stable string form of the message id, for list-key stability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageListItem {
    Text {
        id: String,
        body: String,
    },
    Image {
        id: String,
        uri: String,
    },
    Location {
        id: String,
        latitude: f64,
        longitude: f64,
    },
}

impl From<&Message> for MessageListItem {
    fn from(message: &Message) -> Self {
        let id = message.id.to_string();
        match &message.body {
            MessageBody::Text { body } => Self::Text {
                id,
                body: body.clone(),
            },
            MessageBody::Image { uri } => Self::Image {
                id,
                uri: uri.clone(),
            },
            MessageBody::Location { coordinate } => Self::Location {
                id,
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    /// Newest-first, whatever the model's internal order.
    pub messages: Vec<MessageListItem>,
    pub fullscreen_image_uri: Option<String>,

    pub is_connected: bool,
    /// Persistent banner text while offline, `None` while connected.
    pub connection_banner: Option<String>,

    pub draft: String,
    pub input_focused: bool,
    pub notice: Option<String>,

    /// Shell hint: the hardware back listener should be armed, because the
    /// next back signal will be consumed by the core.
    pub intercepts_back: bool,
}

pub mod app {
    use super::{
        Coordinate, Event, Message, MessageBody, MessageListItem, Model, Overlay, ViewModel,
        CAMERA_NOTICE, DELETE_CONFIRM_LABEL, DELETE_PROMPT_MESSAGE, DELETE_PROMPT_TITLE,
        LOCATION_DENIED_NOTICE, LOCATION_ERROR_MESSAGE, LOCATION_ERROR_TITLE,
        LOCATION_PERMISSION_NOTICE, OFFLINE_BANNER_TEXT, PERMISSION_DENIED_MESSAGE,
        PERMISSION_DENIED_TITLE, SEED_IMAGE_URI, SEED_TEXT_BODY,
    };
    use crate::capabilities::{
        Capabilities, ConfirmPrompt, DialogResponse, LocationError, LocationOutput,
    };
    use tracing::{debug, warn};

    #[derive(Default)]
    pub struct App;

    impl App {
        /// The demo conversation the original app boots with.
        fn seed_conversation(model: &mut Model) {
            model.messages.clear();
            model.prepend(Message::text(SEED_TEXT_BODY));
            model.prepend(Message::image(SEED_IMAGE_URI));
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            debug!(
                event = event.name(),
                user_initiated = event.is_user_initiated(),
                "handling event"
            );

            match event {
                Event::Noop => {}

                Event::AppStarted => {
                    Self::seed_conversation(model);
                    caps.net_info.fetch(|state| Event::NetworkStatusChanged {
                        online: state.is_connected,
                    });
                    caps.net_info.watch(|state| Event::NetworkStatusChanged {
                        online: state.is_connected,
                    });
                    caps.render.render();
                }

                Event::ScreenMounted => {
                    model.screen_mounted = true;
                    caps.render.render();
                }

                Event::ScreenUnmounted => {
                    // The controller does not outlive the screen: interception
                    // is disarmed and the overlay resets with it.
                    model.screen_mounted = false;
                    model.overlay = Overlay::Closed;
                }

                Event::NetworkStatusChanged { online } => {
                    if model.network_online != online {
                        debug!(online, "network status changed");
                    }
                    model.network_online = online;
                    caps.render.render();
                }

                Event::MessagePressed { id } => {
                    let Some(pressed) = model.find_message(id).map(|m| m.body.clone()) else {
                        // Stale press, e.g. the message was deleted between
                        // render and tap.
                        debug!(%id, "press on unknown message id ignored");
                        return;
                    };

                    match pressed {
                        MessageBody::Text { .. } => {
                            // Deletion is never applied here; it comes back as
                            // DeleteConfirmed only if the user chooses Delete.
                            caps.dialog.confirm(
                                ConfirmPrompt::new(DELETE_PROMPT_TITLE, DELETE_PROMPT_MESSAGE)
                                    .with_confirm_label(DELETE_CONFIRM_LABEL)
                                    .destructive(),
                                move |response| match response {
                                    DialogResponse::Confirmed => Event::DeleteConfirmed { id },
                                    DialogResponse::Dismissed => Event::Noop,
                                },
                            );
                        }
                        MessageBody::Image { uri } => {
                            // Replace semantics: a second image swaps the uri.
                            model.overlay = Overlay::FullscreenImage { uri };
                            caps.render.render();
                        }
                        MessageBody::Location { .. } => {
                            // Render-only kind.
                        }
                    }
                }

                Event::DeleteConfirmed { id } => {
                    let removed = model.delete_message(id);
                    debug!(%id, removed, "delete request resolved");
                    caps.render.render();
                }

                Event::CloseFullscreen => {
                    model.overlay = Overlay::Closed;
                    caps.render.render();
                }

                Event::BackPressed => {
                    if model.screen_mounted && model.overlay.is_open() {
                        model.overlay = Overlay::Closed;
                        caps.render.render();
                    } else {
                        // Not consumed: hand the signal to the default handler.
                        caps.navigate.back();
                    }
                }

                Event::DraftChanged { text } => {
                    model.draft = text;
                    caps.render.render();
                }

                Event::FocusChanged { focused } => {
                    model.input_focused = focused;
                    caps.render.render();
                }

                Event::SendPressed => {
                    if model.draft.is_empty() {
                        return;
                    }
                    let body = std::mem::take(&mut model.draft);
                    model.prepend(Message::text(body));
                    caps.render.render();
                }

                Event::CameraPressed => {
                    model.active_notice = Some(CAMERA_NOTICE.into());
                    caps.render.render();
                }

                Event::LocationPressed => {
                    model.active_notice = Some(LOCATION_PERMISSION_NOTICE.into());
                    caps.location.request_permission(|result| match result {
                        Ok(LocationOutput::PermissionStatus { granted }) => {
                            Event::LocationPermissionResult { granted }
                        }
                        Ok(LocationOutput::Position { .. }) => Event::LocationFailed {
                            error: "unexpected position reply to permission request".into(),
                        },
                        Err(LocationError::PermissionDenied) => {
                            Event::LocationPermissionResult { granted: false }
                        }
                        Err(e) => Event::LocationFailed {
                            error: e.to_string(),
                        },
                    });
                    caps.render.render();
                }

                Event::LocationPermissionResult { granted } => {
                    if granted {
                        caps.location.get_position(|result| match result {
                            Ok(LocationOutput::Position { lat, lng, accuracy }) => {
                                Event::LocationReceived { lat, lng, accuracy }
                            }
                            Ok(LocationOutput::PermissionStatus { .. }) => Event::LocationFailed {
                                error: "unexpected permission reply to position request".into(),
                            },
                            Err(e) => Event::LocationFailed {
                                error: e.to_string(),
                            },
                        });
                    } else {
                        warn!("location permission denied");
                        caps.dialog
                            .inform(PERMISSION_DENIED_TITLE, PERMISSION_DENIED_MESSAGE);
                        model.active_notice = Some(LOCATION_DENIED_NOTICE.into());
                        caps.render.render();
                    }
                }

                Event::LocationReceived { lat, lng, accuracy } => {
                    debug!(lat, lng, ?accuracy, "location fix received");
                    model.prepend(Message::location(Coordinate::new(lat, lng)));
                    model.active_notice = Some(format!(
                        "Location retrieved: latitude {lat}, longitude {lng}"
                    ));
                    caps.render.render();
                }

                Event::LocationFailed { error } => {
                    warn!(error = %error, "location retrieval failed");
                    // One-shot alert; message list and notice stay as they were.
                    caps.dialog
                        .inform(LOCATION_ERROR_TITLE, LOCATION_ERROR_MESSAGE);
                }

                Event::NoticeDismissed => {
                    model.active_notice = None;
                    caps.render.render();
                }
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            let fullscreen_image_uri = match &model.overlay {
                Overlay::Closed => None,
                Overlay::FullscreenImage { uri } => Some(uri.clone()),
            };

            ViewModel {
                messages: model.messages.iter().map(MessageListItem::from).collect(),
                fullscreen_image_uri,
                is_connected: model.network_online,
                connection_banner: (!model.network_online).then(|| OFFLINE_BANNER_TEXT.to_string()),
                draft: model.draft.clone(),
                input_focused: model.input_focused,
                notice: model.active_notice.clone(),
                intercepts_back: model.screen_mounted && model.overlay.is_open(),
            }
        }
    }
}
