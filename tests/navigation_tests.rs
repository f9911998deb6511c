//! Integration tests for database/collection selection and the
//! stale-response guard.

mod common;

use std::time::Duration;

use common::{browsing_controller, connected_controller, controller};
use mangoboard::{Error, LatencyProfile, SessionController, SessionEvent, SimulatedBackend};

/// Selecting a known database loads its fixed collection list.
#[tokio::test]
async fn test_select_database_loads_collections() {
    let controller = connected_controller().await;

    controller.select_database("sample_mflix").await.expect("select_database failed");

    let state = controller.state();
    assert_eq!(state.current_database.as_deref(), Some("sample_mflix"));
    assert_eq!(state.collections, vec!["movies", "users", "comments", "theaters"]);
    assert!(state.current_collection.is_none());
    assert!(state.documents.is_empty());
}

/// Unknown database names resolve to an empty collection list, not an error.
#[tokio::test]
async fn test_select_unknown_database_yields_empty_list() {
    let controller = connected_controller().await;

    controller.select_database("no_such_db").await.expect("unknown database should not fail");

    let state = controller.state();
    assert_eq!(state.current_database.as_deref(), Some("no_such_db"));
    assert!(state.collections.is_empty());
    assert!(state.last_error.is_none());
}

/// Selecting a database while disconnected fails and records the error.
#[tokio::test]
async fn test_select_database_requires_connection() {
    let controller = controller();

    let result = controller.select_database("sample_mflix").await;

    assert!(matches!(result, Err(Error::NotConnected)));
    let state = controller.state();
    assert!(state.current_database.is_none());
    assert!(state.last_error.is_some());
    assert!(!state.is_loading());
}

/// Switching databases clears the previous collection selection and documents.
#[tokio::test]
async fn test_database_switch_clears_selection() {
    let controller = browsing_controller().await;
    assert!(!controller.state().documents.is_empty());

    controller.select_database("sample_training").await.expect("select_database failed");

    let state = controller.state();
    assert_eq!(state.current_database.as_deref(), Some("sample_training"));
    assert_eq!(state.collections, vec!["companies", "inspections", "trips", "posts"]);
    assert!(state.current_collection.is_none());
    assert!(state.documents.is_empty());
}

/// Selecting a collection sets it and fetches its documents as one step.
#[tokio::test]
async fn test_select_collection_fetches_documents() {
    let controller = connected_controller().await;
    controller.select_database("sample_mflix").await.expect("select_database failed");

    controller.select_collection("movies").await.expect("select_collection failed");

    let state = controller.state();
    assert_eq!(state.current_collection.as_deref(), Some("movies"));
    assert_eq!(state.documents.len(), 10);
}

/// Selecting a collection without a database selected fails.
#[tokio::test]
async fn test_select_collection_requires_database() {
    let controller = connected_controller().await;

    let result = controller.select_collection("movies").await;

    assert!(matches!(result, Err(Error::NoDatabaseSelected)));
    assert!(controller.state().current_collection.is_none());
}

/// Collection selection events arrive in order: collections, then documents.
#[tokio::test]
async fn test_navigation_event_order() {
    let controller = connected_controller().await;
    let mut events = controller.subscribe();

    controller.select_database("sample_weatherdata").await.expect("select_database failed");
    controller.select_collection("stations").await.expect("select_collection failed");

    assert!(matches!(
        events.recv().await,
        Ok(SessionEvent::CollectionsLoaded { ref database, .. }) if database == "sample_weatherdata"
    ));
    assert!(matches!(
        events.recv().await,
        Ok(SessionEvent::DocumentsLoaded { ref collection, count: 10 }) if collection == "stations"
    ));
}

/// A slow document fetch resolving after a newer database selection is
/// discarded: the newer selection wins, never the stale result.
#[tokio::test]
async fn test_stale_fetch_is_discarded() {
    common::init_logging();
    // Fetches are slow, collection listings fast, so the late fetch lands
    // after the superseding selection completed.
    let latency = LatencyProfile {
        connect: Duration::ZERO,
        list_collections: Duration::from_millis(10),
        fetch: Duration::from_millis(100),
        write: Duration::ZERO,
    };
    let controller =
        SessionController::with_backend(SimulatedBackend::new().with_latency(latency));
    controller.set_connection_target(common::VALID_TARGET);
    controller.connect().await.expect("connect failed");
    controller.select_database("sample_mflix").await.expect("select_database failed");

    let select_collection = controller.select_collection("movies");
    let supersede = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        controller.select_database("sample_training").await.expect("select_database failed");
    };
    let (stale, ()) = tokio::join!(select_collection, supersede);

    // The superseded operation completes without error; its effect is dropped.
    assert!(stale.is_ok());
    let state = controller.state();
    assert_eq!(state.current_database.as_deref(), Some("sample_training"));
    assert!(state.current_collection.is_none());
    assert!(state.documents.is_empty(), "stale fetch must not repopulate documents");
    assert_eq!(state.collections, vec!["companies", "inspections", "trips", "posts"]);
}

/// Documents never survive from a previously selected collection: after a
/// new selection the set is exactly the latest fetch result.
#[tokio::test]
async fn test_documents_never_stale_across_collections() {
    let controller = browsing_controller().await;
    controller.add_document(bson::doc! { "name": "marker" }).await.expect("add failed");
    let marker_id = controller.state().documents[0].id.clone();

    controller.select_collection("users").await.expect("select_collection failed");

    let state = controller.state();
    assert_eq!(state.current_collection.as_deref(), Some("users"));
    assert_eq!(state.documents.len(), 10);
    assert!(state.documents.iter().all(|d| d.id != marker_id));
}
