//! End-to-end navigation flow over the mock platform

use campus_nav::navigator::{NavigationOutcome, TEST_VOICE_TEXT};
use campus_nav::platform::mock::{MockGeolocation, MockPlatform, MockSpeech, MockTime};
use campus_nav::{NavigationOrchestrator, NavigatorConfig};
use campus_nav_core::catalog::Place;
use campus_nav_core::geolocation::GeoFailure;
use campus_nav_core::navigation::{NavigationState, TravelMode, TravelPreference};
use campus_nav_core::parameters::NavigatorParams;
use campus_nav_core::status::StatusLevel;

const USER_LAT: f64 = 12.2116825;
const USER_LNG: f64 = 75.1343226;

fn navigator(platform: &MockPlatform) -> NavigationOrchestrator<MockPlatform> {
    let config = NavigatorConfig::default_campus().unwrap();
    NavigationOrchestrator::from_config(platform.clone(), config)
}

fn place(nav: &NavigationOrchestrator<MockPlatform>, name: &str, category: &str) -> Place {
    nav.catalog().find(name, category).unwrap().clone()
}

#[tokio::test]
async fn test_library_end_to_end() {
    // 2024-01-01T04:00:00Z, 09:30 IST
    let clock = MockTime::with_initial(1_704_081_600_000);
    clock.set_utc_offset(330);
    let platform = MockPlatform::new().with_clock(clock);
    platform.geolocation.push_fix(USER_LAT, USER_LNG, 12.0);
    let mut nav = navigator(&platform);

    let library = place(&nav, "Central Library", "Academic Facilities");
    let outcome = nav.navigate(&library).await.unwrap();

    let result = match outcome {
        NavigationOutcome::Succeeded(result) => result,
        other => panic!("expected success, got {:?}", other),
    };
    let distance = result.estimate.distance_km.unwrap();
    assert!((distance - 0.115).abs() < 0.01, "distance {}", distance);
    assert_eq!(result.estimate.travel_mode, TravelMode::Walking);
    assert_eq!(result.estimate.eta_text.as_deref(), Some("1 min walk"));
    assert_eq!(
        result.directions_url,
        "https://www.google.com/maps/dir/?api=1&origin=12.2116825,75.1343226\
         &destination=Central+Library&travelmode=walking"
    );

    assert_eq!(platform.host.opened_urls(), vec![result.directions_url.clone()]);
    let status = platform.host.last_status().unwrap();
    assert_eq!(status.level, StatusLevel::Success);
    assert!(status.distance_text.as_deref().unwrap().ends_with("meters"));
    assert!(status.message.contains("Central Library"));

    let spoken = nav.last_spoken().unwrap();
    assert!(spoken.contains("Central Library"));
    assert!(spoken.contains("walking route"));
    platform.speech.finish();
    assert_eq!(platform.speech.completed_texts(), vec![spoken.to_string()]);

    let history = platform.host.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].destination, "Central Library");
    assert_eq!(history[0].time_label, "09:30");
    assert_eq!(nav.state(), NavigationState::Idle);
}

#[tokio::test]
async fn test_permission_denied_opens_plain_link() {
    let platform = MockPlatform::new();
    platform.geolocation.push_error(1, "User denied Geolocation");
    let mut nav = navigator(&platform);

    let canteen = place(&nav, "College Canteen", "Student Amenities");
    let outcome = nav.navigate(&canteen).await.unwrap();

    match &outcome {
        NavigationOutcome::Failed {
            destination,
            failure,
        } => {
            assert_eq!(destination.name, "College Canteen");
            assert_eq!(*failure, GeoFailure::PermissionDenied);
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(platform.host.opened_urls(), vec![canteen.map_url.clone()]);
    assert_eq!(
        platform.host.last_status().unwrap().message,
        "Location permission was denied. Opening the Google Maps place link without your current position."
    );
    assert_eq!(
        nav.last_spoken(),
        Some(GeoFailure::PermissionDenied.message())
    );
    assert!(nav.history().is_empty());
    assert!(platform.host.history().is_empty());
}

#[tokio::test]
async fn test_unsupported_host_skips_query() {
    let platform = MockPlatform::new().with_geolocation(MockGeolocation::unsupported());
    let mut nav = navigator(&platform);

    let atm = place(&nav, "College ATM (SBI ATM)", "Student Amenities");
    let outcome = nav.navigate(&atm).await.unwrap();

    assert_eq!(outcome.state(), NavigationState::Failed);
    assert_eq!(platform.geolocation.request_count(), 0);
    assert_eq!(platform.host.opened_urls(), vec![atm.map_url.clone()]);
    assert_eq!(nav.last_spoken(), Some(GeoFailure::Unsupported.message()));
}

#[tokio::test]
async fn test_place_without_coordinate_has_no_readouts() {
    let platform = MockPlatform::new();
    platform.geolocation.push_fix(USER_LAT, USER_LNG, 20.0);
    let mut nav = navigator(&platform);

    let canteen = place(&nav, "College Canteen", "Student Amenities");
    nav.navigate(&canteen).await.unwrap();

    let result = nav.last_result().unwrap();
    assert!(result.estimate.distance_km.is_none());
    assert!(result.estimate.eta_text.is_none());
    assert_eq!(result.estimate.travel_mode, TravelMode::Driving);
    assert!(result.directions_url.ends_with("travelmode=driving"));
    let status = nav.status();
    assert!(status.distance_text.is_none());
    assert!(status.eta_text.is_none());
}

#[tokio::test]
async fn test_tap_while_locating_is_ignored() {
    let platform = MockPlatform::new();
    platform.geolocation.push_fix(USER_LAT, USER_LNG, 10.0);
    let mut nav = navigator(&platform);
    let library = place(&nav, "Central Library", "Academic Facilities");
    let canteen = place(&nav, "College Canteen", "Student Amenities");

    let request = nav.begin(&library).unwrap();
    assert!(nav.begin(&canteen).is_none());
    assert!(nav.navigate(&canteen).await.is_none());
    assert_eq!(platform.geolocation.request_count(), 0);

    let response = nav.locator().acquire().await;
    let outcome = nav.complete(&request, response).unwrap();
    assert_eq!(outcome.destination().name, "Central Library");
    assert_eq!(platform.host.opened_urls().len(), 1);
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let platform = MockPlatform::new();
    platform.geolocation.push_fix(USER_LAT, USER_LNG, 10.0);
    let mut nav = navigator(&platform);
    let library = place(&nav, "Central Library", "Academic Facilities");

    let request = nav.begin(&library).unwrap();
    let response = nav.locator().acquire().await;
    nav.complete(&request, Err(GeoFailure::Timeout)).unwrap();

    // The late fix for the same request changes nothing
    assert!(nav.complete(&request, response).is_none());
    assert!(nav.last_result().is_none());
    assert_eq!(platform.host.opened_urls(), vec![library.map_url.clone()]);
}

#[tokio::test]
async fn test_new_tap_cancels_previous_announcement() {
    let platform = MockPlatform::new();
    platform.geolocation.push_fix(USER_LAT, USER_LNG, 10.0);
    platform.geolocation.push_error(3, "Timeout expired");
    let mut nav = navigator(&platform);
    let library = place(&nav, "Central Library", "Academic Facilities");

    nav.navigate(&library).await.unwrap();
    let first = nav.last_spoken().unwrap().to_string();
    nav.navigate(&library).await.unwrap();
    platform.speech.finish();

    assert_eq!(platform.speech.cancelled_texts(), vec![first]);
    assert_eq!(
        platform.speech.completed_texts(),
        vec![GeoFailure::Timeout.message().to_string()]
    );
}

#[tokio::test]
async fn test_voice_disabled_still_shows_text() {
    let platform = MockPlatform::new();
    platform.geolocation.push_fix(USER_LAT, USER_LNG, 10.0);
    let mut nav = navigator(&platform);
    nav.update_settings(NavigatorParams {
        voice_enabled: false,
        ..*nav.settings()
    });

    let library = place(&nav, "Central Library", "Academic Facilities");
    nav.navigate(&library).await.unwrap();

    assert!(platform.speech.started().is_empty());
    assert!(nav.last_spoken().is_some());
    assert_eq!(platform.host.spoken_lines().len(), 1);
    assert!(nav.note().is_none());
}

#[tokio::test]
async fn test_blocked_popup_becomes_note() {
    let platform = MockPlatform::new();
    platform.geolocation.push_fix(USER_LAT, USER_LNG, 10.0);
    platform.host.block_popups(true);
    let mut nav = navigator(&platform);

    let library = place(&nav, "Central Library", "Academic Facilities");
    let outcome = nav.navigate(&library).await.unwrap();

    assert!(outcome.is_success());
    assert!(platform.host.opened_urls().is_empty());
    let note = nav.note().unwrap();
    assert!(note.contains("allow pop-ups"));
    assert_eq!(platform.host.notes(), vec![note.to_string()]);
    assert_eq!(nav.history().len(), 1);
}

#[tokio::test]
async fn test_speech_failure_becomes_note() {
    let speech = MockSpeech::new();
    speech.fail_with("audio-busy");
    let platform = MockPlatform::new().with_speech(speech);
    platform.geolocation.push_error(2, "Position unavailable");
    let mut nav = navigator(&platform);

    let library = place(&nav, "Central Library", "Academic Facilities");
    nav.navigate(&library).await.unwrap();

    assert!(nav.note().unwrap().contains("audio-busy"));
    assert_eq!(nav.state(), NavigationState::Idle);
}

#[tokio::test]
async fn test_driving_preference_overrides_auto() {
    let platform = MockPlatform::new();
    platform.geolocation.push_fix(USER_LAT, USER_LNG, 10.0);
    let mut nav = navigator(&platform);
    nav.update_settings(NavigatorParams {
        travel_preference: TravelPreference::Driving,
        ..NavigatorParams::default()
    });

    let library = place(&nav, "Central Library", "Academic Facilities");
    nav.navigate(&library).await.unwrap();

    let result = nav.last_result().unwrap();
    assert_eq!(result.estimate.travel_mode, TravelMode::Driving);
    assert_eq!(result.estimate.eta_text.as_deref(), Some("1 min drive"));
}

#[tokio::test]
async fn test_history_and_clear() {
    let platform = MockPlatform::new();
    let mut nav = navigator(&platform);
    let library = place(&nav, "Central Library", "Academic Facilities");

    for _ in 0..7 {
        platform.geolocation.push_fix(USER_LAT, USER_LNG, 10.0);
        nav.navigate(&library).await.unwrap();
    }
    assert_eq!(nav.history().len(), 7);
    assert_eq!(nav.history().recent().count(), 5);

    nav.clear_history();
    assert!(nav.history().is_empty());
    assert!(platform.host.history().is_empty());
    assert_eq!(platform.host.history_clears(), 1);
}

#[test]
fn test_voice_test_sentence() {
    let platform = MockPlatform::new();
    let mut nav = navigator(&platform);

    nav.test_voice();
    platform.speech.finish();
    assert_eq!(
        platform.speech.completed_texts(),
        vec![TEST_VOICE_TEXT.to_string()]
    );
    assert_eq!(nav.last_spoken(), Some(TEST_VOICE_TEXT));
}

#[test]
fn test_search_default_catalog() {
    let platform = MockPlatform::new();
    let nav = navigator(&platform);

    let outcome = nav.search("hostel");
    let names: Vec<&str> = outcome
        .sections()
        .iter()
        .flat_map(|section| section.items.iter().map(|place| place.name.as_str()))
        .collect();
    assert_eq!(
        names,
        ["Men's Hostel (Verified Block)", "Shahanas Hostel (Ladies Hostel)"]
    );
    assert!(outcome.empty_message().is_none());

    let none = nav.search("observatory");
    assert!(none.sections().is_empty());
    assert!(none.empty_message().is_some());

    assert_eq!(nav.search("   ").sections().len(), 4);
}
