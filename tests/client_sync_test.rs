// ABOUTME: End-to-end tests for the client data layer against a live server
// ABOUTME: Draft sync reconciliation and offline macro queue replay over real HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Remy Kitchen Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use remy_meal_server::board::MealEntry;
use remy_meal_server::client::BoardApiClient;
use remy_meal_server::drafts::{DraftKey, DraftStore, MemoryDraftStorage};
use remy_meal_server::models::{MacroLogEntry, MacroTotals, MealSlot};
use remy_meal_server::nutrition::OfflineMacroQueue;
use remy_meal_server::routes;
use std::time::Duration;
use uuid::Uuid;

/// Bind the API to an ephemeral port and serve it in the background
async fn spawn_test_server() -> anyhow::Result<BoardApiClient> {
    let resources = common::create_test_resources().await?;
    let app = routes::api_router(resources);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    BoardApiClient::new(&format!("http://{addr}")).map_err(Into::into)
}

#[tokio::test]
async fn test_fetch_creates_and_round_trips_board() {
    let api = spawn_test_server().await.unwrap();
    let user = Uuid::new_v4();

    let board = api.fetch_week_board(user, common::monday()).await.unwrap();
    assert_eq!(board.user_id, user);
    assert_eq!(board.version, 0);

    let again = api.fetch_week_board(user, common::monday()).await.unwrap();
    assert_eq!(again.id, board.id);
}

#[tokio::test]
async fn test_sync_pushes_differing_draft() {
    let api = spawn_test_server().await.unwrap();
    let store = DraftStore::new(MemoryDraftStorage::new(16), Duration::from_millis(50));
    let user = Uuid::new_v4();

    // Device fetched the board, edited it offline, and drafted the edit
    let mut board = api.fetch_week_board(user, common::monday()).await.unwrap();
    board
        .apply_entry(
            common::monday(),
            MealSlot::Dinner,
            MealEntry::titled("Miso salmon"),
        )
        .unwrap();
    let key = store.save_draft("meal-builder", board.clone()).unwrap();
    store.flush().await.unwrap();

    let synced = api.sync_week_board(&store, &key).await.unwrap();
    assert_eq!(synced.day_lists(common::monday()).dinner[0].title, "Miso salmon");

    // The draft was consumed and the server now agrees
    assert!(store.restore(&key).await.unwrap().is_none());
    let server_copy = api.fetch_week_board(user, common::monday()).await.unwrap();
    assert_eq!(server_copy.version, synced.version);
}

#[tokio::test]
async fn test_sync_without_changes_keeps_server_copy() {
    let api = spawn_test_server().await.unwrap();
    let store = DraftStore::new(MemoryDraftStorage::new(16), Duration::from_millis(50));
    let user = Uuid::new_v4();

    // Draft identical content to what the server already has
    let board = api.fetch_week_board(user, common::monday()).await.unwrap();
    let key = store.save_draft("meal-builder", board.clone()).unwrap();
    store.flush().await.unwrap();

    let synced = api.sync_week_board(&store, &key).await.unwrap();
    assert_eq!(synced.version, board.version);
    // The matching draft was discarded rather than pushed
    assert!(store.restore(&key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_sync_with_no_draft_is_a_fetch() {
    let api = spawn_test_server().await.unwrap();
    let store: DraftStore<MemoryDraftStorage> =
        DraftStore::new(MemoryDraftStorage::new(16), Duration::from_millis(50));
    let user = Uuid::new_v4();

    let key = DraftKey::new(user, "meal-builder", common::monday());
    let synced = api.sync_week_board(&store, &key).await.unwrap();
    assert_eq!(synced.user_id, user);
}

#[tokio::test]
async fn test_offline_queue_drains_through_api() {
    let api = spawn_test_server().await.unwrap();
    let user = Uuid::new_v4();

    let mut queue = OfflineMacroQueue::new();
    queue.push(MacroLogEntry::new(
        user,
        common::monday(),
        MealSlot::Breakfast,
        MacroTotals {
            calories: 380.0,
            protein_g: 20.0,
            carbs_g: 45.0,
            fat_g: 12.0,
        },
    ));
    queue.push(MacroLogEntry::new(
        user,
        common::monday(),
        MealSlot::Lunch,
        MacroTotals {
            calories: 620.0,
            protein_g: 35.0,
            carbs_g: 55.0,
            fat_g: 22.0,
        },
    ));

    let posted = queue.drain(&api).await;
    assert_eq!(posted, 2);
    assert!(queue.is_empty());
}

#[tokio::test]
async fn test_offline_queue_retains_entries_when_api_unreachable() {
    // Nobody is listening on this port
    let api = BoardApiClient::new("http://127.0.0.1:1").unwrap();
    let user = Uuid::new_v4();

    let mut queue = OfflineMacroQueue::new();
    queue.push(MacroLogEntry::new(
        user,
        common::monday(),
        MealSlot::Dinner,
        MacroTotals::default(),
    ));

    let posted = queue.drain(&api).await;
    assert_eq!(posted, 0);
    assert_eq!(queue.len(), 1);
}

#[tokio::test]
async fn test_shopping_round_trip_through_client() {
    let api = spawn_test_server().await.unwrap();
    let user = Uuid::new_v4();

    let list = api
        .add_shopping_items(
            user,
            vec![
                remy_meal_server::shopping::NewShoppingItem::named("lemons", 3.0, ""),
                remy_meal_server::shopping::NewShoppingItem::named("lemon", 2.0, ""),
            ],
        )
        .await
        .unwrap();
    assert_eq!(list.len(), 1);

    let fetched = api.fetch_shopping_list(user).await.unwrap();
    assert!((fetched.items()[0].quantity - 5.0).abs() < f64::EPSILON);
}
