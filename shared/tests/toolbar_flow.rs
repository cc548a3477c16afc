use crux_core::testing::AppTester;
use crux_core::App as _;
use shared::capabilities::{
    ConnectionState, DialogOperation, LocationError, LocationOperation, LocationOutput,
    NetInfoOperation,
};
use shared::{
    App, Effect, Event, MessageBody, Model, CAMERA_NOTICE, LOCATION_DENIED_NOTICE,
    LOCATION_ERROR_TITLE, LOCATION_PERMISSION_NOTICE, OFFLINE_BANNER_TEXT,
    PERMISSION_DENIED_TITLE, SEED_IMAGE_URI,
};

fn submit(app: &AppTester<App, Effect>, model: &mut Model, text: &str) {
    app.update(
        Event::DraftChanged {
            text: text.to_string(),
        },
        model,
    );
    app.update(Event::SendPressed, model);
}

#[test]
fn submissions_prepend_newest_first() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();

    submit(&app, &mut model, "Testing");
    assert_eq!(model.messages.len(), 1);
    assert!(matches!(
        &model.messages[0].body,
        MessageBody::Text { body } if body == "Testing"
    ));

    submit(&app, &mut model, "Hello");
    let bodies: Vec<&str> = model
        .messages
        .iter()
        .map(|m| match &m.body {
            MessageBody::Text { body } => body.as_str(),
            other => panic!("unexpected kind {}", other.kind()),
        })
        .collect();
    assert_eq!(bodies, vec!["Hello", "Testing"]);

    // The draft clears on submit.
    assert!(model.draft.is_empty());
}

#[test]
fn empty_submission_is_ignored() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();

    let update = app.update(Event::SendPressed, &mut model);

    assert!(model.messages.is_empty());
    assert!(update.effects.is_empty());
}

#[test]
fn focus_state_mirrors_the_input() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();

    app.update(Event::FocusChanged { focused: true }, &mut model);
    assert!(model.input_focused);
    assert!(app.view(&model).input_focused);

    app.update(Event::FocusChanged { focused: false }, &mut model);
    assert!(!model.input_focused);
}

#[test]
fn app_start_seeds_the_demo_conversation_and_watches_connectivity() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);

    // Newest-first seed: the image bubble sits on top of the text bubble.
    assert_eq!(model.messages.len(), 2);
    assert!(matches!(
        &model.messages[0].body,
        MessageBody::Image { uri } if uri == SEED_IMAGE_URI
    ));
    assert!(matches!(&model.messages[1].body, MessageBody::Text { .. }));

    let net_ops: Vec<NetInfoOperation> = update
        .effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::NetInfo(request) => Some(request.operation.clone()),
            _ => None,
        })
        .collect();
    assert!(
        net_ops.contains(&NetInfoOperation::Fetch),
        "initial connectivity fetch expected"
    );
    assert!(
        net_ops.contains(&NetInfoOperation::Watch),
        "connectivity subscription expected"
    );
    assert!(update
        .effects
        .iter()
        .any(|e| matches!(e, Effect::Render(_))));
}

#[test]
fn connectivity_updates_drive_the_offline_banner() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();

    let update = app.update(Event::AppStarted, &mut model);
    let mut fetch = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::NetInfo(request)
                if request.operation == NetInfoOperation::Fetch =>
            {
                Some(request)
            }
            _ => None,
        })
        .expect("initial fetch request");

    let update = app
        .resolve(&mut fetch, ConnectionState { is_connected: false })
        .expect("fetch resolves");
    assert_eq!(
        update.events,
        vec![Event::NetworkStatusChanged { online: false }]
    );

    for event in update.events {
        app.update(event, &mut model);
    }
    assert!(!model.network_online);
    assert_eq!(
        app.view(&model).connection_banner.as_deref(),
        Some(OFFLINE_BANNER_TEXT)
    );

    app.update(Event::NetworkStatusChanged { online: true }, &mut model);
    assert_eq!(app.view(&model).connection_banner, None);
}

#[test]
fn camera_button_shows_a_notice_until_dismissed() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();

    app.update(Event::CameraPressed, &mut model);
    assert_eq!(app.view(&model).notice.as_deref(), Some(CAMERA_NOTICE));

    app.update(Event::NoticeDismissed, &mut model);
    assert_eq!(app.view(&model).notice, None);
}

#[test]
fn location_button_requests_permission_first() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();

    let update = app.update(Event::LocationPressed, &mut model);

    assert_eq!(
        model.active_notice.as_deref(),
        Some(LOCATION_PERMISSION_NOTICE)
    );

    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Location(request) => Some(request),
            _ => None,
        })
        .expect("permission request");
    assert_eq!(request.operation, LocationOperation::RequestPermission);

    let update = app
        .resolve(
            &mut request,
            Ok(LocationOutput::PermissionStatus { granted: true }),
        )
        .expect("permission resolves");
    assert_eq!(
        update.events,
        vec![Event::LocationPermissionResult { granted: true }]
    );
}

#[test]
fn denied_permission_alerts_and_leaves_messages_untouched() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();
    app.update(Event::LocationPressed, &mut model);

    let update = app.update(
        Event::LocationPermissionResult { granted: false },
        &mut model,
    );

    let alert = update
        .effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Dialog(request) => Some(&request.operation),
            _ => None,
        })
        .expect("one-shot alert");
    assert!(matches!(
        alert,
        DialogOperation::Inform { title, .. } if title == PERMISSION_DENIED_TITLE
    ));

    assert_eq!(model.active_notice.as_deref(), Some(LOCATION_DENIED_NOTICE));
    assert!(model.messages.is_empty());
}

#[test]
fn granted_permission_fetches_a_fix_and_posts_a_location_message() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();

    let update = app.update(
        Event::LocationPermissionResult { granted: true },
        &mut model,
    );
    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Location(request) => Some(request),
            _ => None,
        })
        .expect("position request");
    assert_eq!(request.operation, LocationOperation::GetPosition);

    let update = app
        .resolve(
            &mut request,
            Ok(LocationOutput::Position {
                lat: 37.78825,
                lng: -122.4324,
                accuracy: Some(5.0),
            }),
        )
        .expect("position resolves");

    for event in update.events {
        app.update(event, &mut model);
    }

    assert_eq!(model.messages.len(), 1);
    assert!(matches!(
        &model.messages[0].body,
        MessageBody::Location { coordinate }
            if (coordinate.latitude - 37.78825).abs() < f64::EPSILON
                && (coordinate.longitude + 122.4324).abs() < f64::EPSILON
    ));
    let notice = model.active_notice.as_deref().expect("retrieval notice");
    assert!(notice.contains("37.78825"));
    assert!(notice.contains("-122.4324"));
}

#[test]
fn failed_retrieval_alerts_once_and_changes_nothing_else() {
    let app = AppTester::<App, _>::default();
    let mut model = Model::default();
    app.update(Event::LocationPressed, &mut model);

    let update = app.update(
        Event::LocationPermissionResult { granted: true },
        &mut model,
    );
    let mut request = update
        .effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Location(request) => Some(request),
            _ => None,
        })
        .expect("position request");

    let update = app
        .resolve(
            &mut request,
            Err(LocationError::PositionUnavailable {
                reason: "no GPS fix".into(),
            }),
        )
        .expect("failure resolves");

    let mut alerted = false;
    for event in update.events {
        let update = app.update(event, &mut model);
        alerted |= update.effects.iter().any(|effect| {
            matches!(
                effect,
                Effect::Dialog(request)
                    if matches!(
                        &request.operation,
                        DialogOperation::Inform { title, .. } if title == LOCATION_ERROR_TITLE
                    )
            )
        });
    }
    assert!(alerted, "retrieval failure surfaces as a one-shot alert");

    // Prior state is unchanged: no message added, notice still the
    // permission one.
    assert!(model.messages.is_empty());
    assert_eq!(
        model.active_notice.as_deref(),
        Some(LOCATION_PERMISSION_NOTICE)
    );
}
