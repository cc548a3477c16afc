use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Foreground location access. Permission and position retrieval are split
/// so the app can react to a denial before asking the platform for a fix.
/// Retrieval is fire-and-forget: no timeout, no cancellation, no retries.
#[derive(Clone)]
pub struct Location<E> {
    context: CapabilityContext<LocationOperation, E>,
}

impl<Ev> Capability<Ev> for Location<Ev> {
    type Operation = LocationOperation;
    type MappedSelf<MappedEv> = Location<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Location::new(self.context.map_event(f))
    }
}

impl<E> Location<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<LocationOperation, E>) -> Self {
        Self { context }
    }

    pub fn request_permission<F>(&self, callback: F)
    where
        F: FnOnce(LocationResult) -> E + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let result = context
                .request_from_shell(LocationOperation::RequestPermission)
                .await;
            context.update_app(callback(result));
        });
    }

    pub fn get_position<F>(&self, callback: F)
    where
        F: FnOnce(LocationResult) -> E + Send + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let result = context
                .request_from_shell(LocationOperation::GetPosition)
                .await;
            context.update_app(callback(result));
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationOperation {
    RequestPermission,
    GetPosition,
}

impl Operation for LocationOperation {
    type Output = LocationResult;
}

pub type LocationResult = Result<LocationOutput, LocationError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationOutput {
    PermissionStatus {
        granted: bool,
    },
    Position {
        lat: f64,
        lng: f64,
        /// Horizontal accuracy in meters, when the platform reports one.
        accuracy: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable: {reason}")]
    PositionUnavailable { reason: String },

    #[error("location services disabled")]
    ServicesDisabled,
}
