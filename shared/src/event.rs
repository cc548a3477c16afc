use serde::{Deserialize, Serialize};

use crate::model::MessageId;

/// Everything the shell can tell the core. All state transitions run on the
/// single update loop in response to one of these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Noop,

    AppStarted,
    /// The messaging screen came on screen; back-signal interception is
    /// armed only between mount and unmount.
    ScreenMounted,
    ScreenUnmounted,

    NetworkStatusChanged {
        online: bool,
    },

    // Message list
    MessagePressed {
        id: MessageId,
    },
    DeleteConfirmed {
        id: MessageId,
    },
    CloseFullscreen,
    /// Hardware back signal, forwarded by the shell while the screen is
    /// mounted.
    BackPressed,

    // Toolbar
    DraftChanged {
        text: String,
    },
    FocusChanged {
        focused: bool,
    },
    SendPressed,
    CameraPressed,
    LocationPressed,
    LocationPermissionResult {
        granted: bool,
    },
    LocationReceived {
        lat: f64,
        lng: f64,
        accuracy: Option<f64>,
    },
    LocationFailed {
        error: String,
    },
    NoticeDismissed,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AppStarted => "app_started",
            Self::ScreenMounted => "screen_mounted",
            Self::ScreenUnmounted => "screen_unmounted",
            Self::NetworkStatusChanged { .. } => "network_status_changed",
            Self::MessagePressed { .. } => "message_pressed",
            Self::DeleteConfirmed { .. } => "delete_confirmed",
            Self::CloseFullscreen => "close_fullscreen",
            Self::BackPressed => "back_pressed",
            Self::DraftChanged { .. } => "draft_changed",
            Self::FocusChanged { .. } => "focus_changed",
            Self::SendPressed => "send_pressed",
            Self::CameraPressed => "camera_pressed",
            Self::LocationPressed => "location_pressed",
            Self::LocationPermissionResult { .. } => "location_permission_result",
            Self::LocationReceived { .. } => "location_received",
            Self::LocationFailed { .. } => "location_failed",
            Self::NoticeDismissed => "notice_dismissed",
        }
    }

    /// Direct user gestures, as opposed to lifecycle and capability replies.
    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::MessagePressed { .. }
                | Self::DeleteConfirmed { .. }
                | Self::CloseFullscreen
                | Self::BackPressed
                | Self::DraftChanged { .. }
                | Self::FocusChanged { .. }
                | Self::SendPressed
                | Self::CameraPressed
                | Self::LocationPressed
                | Self::NoticeDismissed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_is_user_initiated() {
        assert!(!Event::Noop.is_user_initiated());
        assert!(!Event::AppStarted.is_user_initiated());
        assert!(!Event::NetworkStatusChanged { online: true }.is_user_initiated());
        assert!(!Event::LocationPermissionResult { granted: true }.is_user_initiated());
        assert!(Event::SendPressed.is_user_initiated());
        assert!(Event::CameraPressed.is_user_initiated());
        assert!(Event::BackPressed.is_user_initiated());
    }

    #[test]
    fn event_size_is_reasonable() {
        // Ensure large payloads stay behind pointers.
        let size = std::mem::size_of::<Event>();
        assert!(
            size <= 64,
            "Event enum is {size} bytes — too large, box more variants"
        );
    }

    #[test]
    fn events_round_trip_over_the_wire() {
        // Shells drive the core with serialized events.
        let event = Event::NetworkStatusChanged { online: false };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), event);
    }
}
