//! Shell collaborator contracts.
//!
//! We use Crux's built-in Render capability directly because it provides
//! all necessary functionality for triggering view updates; the rest are
//! thin typed channels to platform facilities the core cannot own.

mod dialog;
mod location;
mod navigate;
mod net_info;

pub use self::dialog::{ConfirmPrompt, Dialog, DialogOperation, DialogResponse};
pub use self::location::{
    Location, LocationError, LocationOperation, LocationOutput, LocationResult,
};
pub use self::navigate::{Navigate, NavigateOperation};
pub use self::net_info::{ConnectionState, NetInfo, NetInfoOperation};

pub use crux_core::render::Render;

use crate::event::Event;

pub type AppRender = Render<Event>;
pub type AppDialog = Dialog<Event>;
pub type AppLocation = Location<Event>;
pub type AppNavigate = Navigate<Event>;
pub type AppNetInfo = NetInfo<Event>;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub dialog: Dialog<Event>,
    pub location: Location<Event>,
    pub navigate: Navigate<Event>,
    pub net_info: NetInfo<Event>,
}
