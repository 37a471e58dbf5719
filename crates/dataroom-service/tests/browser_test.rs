//! Integration tests for the browsing flows.

mod helpers;

use std::sync::Arc;

use dataroom_core::error::ErrorKind;
use dataroom_entity::drag::{DraggedItem, DropTarget};
use dataroom_service::BrowserService;

use helpers::{FlakyListing, TestRoom};

#[tokio::test]
async fn refresh_builds_the_forest_from_the_listing() {
    let room = TestRoom::new();

    let forest = room.browser.refresh(&room.ctx).await.unwrap();

    let roots: Vec<&str> = forest.roots.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(roots, ["docs", "images", "readme.txt"]);
    assert_eq!(forest.find("docs/archive/old.pdf").unwrap().name, "old.pdf");
    assert_eq!(room.store.forest(), forest);
}

#[tokio::test]
async fn listing_failure_keeps_the_stale_tree() {
    let room = TestRoom::new();
    let flaky = Arc::new(FlakyListing::new(room.objects.clone()));
    let browser = BrowserService::new(
        flaky.clone(),
        room.objects.clone(),
        room.store.clone(),
    );

    let before = browser.refresh(&room.ctx).await.unwrap();

    flaky.set_failing(true);
    let err = browser.refresh(&room.ctx).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ExternalService);

    // The previously stored forest is untouched.
    assert_eq!(room.store.forest(), before);
}

#[tokio::test]
async fn drag_and_drop_moves_a_file_into_a_folder() {
    let room = TestRoom::new();
    room.browser.refresh(&room.ctx).await.unwrap();

    room.store
        .start_drag(DraggedItem::new("docs/report.pdf", "report.pdf", false));
    room.store.set_drop_target(DropTarget {
        id: "images".to_string(),
        is_folder: true,
    });

    let moved = room.browser.drop_dragged(&room.ctx).await.unwrap();
    assert_eq!(moved.as_deref(), Some("images/report.pdf"));

    let forest = room.store.forest();
    assert!(forest.find("images/report.pdf").is_some());
    assert!(forest.find("docs/report.pdf").is_none());

    // The whole drag state is consumed by the drop.
    let drag = room.store.drag();
    assert!(drag.dragged.is_none());
    assert!(drag.drop_target.is_none());
}

#[tokio::test]
async fn drop_onto_the_root_moves_to_top_level() {
    let room = TestRoom::new();
    room.browser.refresh(&room.ctx).await.unwrap();

    room.store
        .start_drag(DraggedItem::new("docs/report.pdf", "report.pdf", false));
    room.store.set_drop_target(DropTarget {
        id: room.store.root_id(),
        is_folder: true,
    });

    let moved = room.browser.drop_dragged(&room.ctx).await.unwrap();
    assert_eq!(moved.as_deref(), Some("report.pdf"));
    assert!(room.store.forest().find("report.pdf").is_some());
}

#[tokio::test]
async fn unusable_drops_are_ignored() {
    let room = TestRoom::new();
    let before = room.browser.refresh(&room.ctx).await.unwrap();

    // No drag in flight at all.
    assert_eq!(room.browser.drop_dragged(&room.ctx).await.unwrap(), None);

    // Dropping a folder into its own subtree.
    room.store.start_drag(DraggedItem::new("docs", "docs", true));
    room.store.set_drop_target(DropTarget {
        id: "docs/archive".to_string(),
        is_folder: true,
    });
    assert_eq!(room.browser.drop_dragged(&room.ctx).await.unwrap(), None);

    // Dropping onto a file.
    room.store
        .start_drag(DraggedItem::new("docs/report.pdf", "report.pdf", false));
    room.store.set_drop_target(DropTarget {
        id: "readme.txt".to_string(),
        is_folder: false,
    });
    assert_eq!(room.browser.drop_dragged(&room.ctx).await.unwrap(), None);

    // Dropping back onto the current parent.
    room.store
        .start_drag(DraggedItem::new("docs/report.pdf", "report.pdf", false));
    room.store.set_drop_target(DropTarget {
        id: "docs".to_string(),
        is_folder: true,
    });
    assert_eq!(room.browser.drop_dragged(&room.ctx).await.unwrap(), None);

    assert_eq!(room.store.forest(), before);
}

#[tokio::test]
async fn rename_updates_the_node_id() {
    let room = TestRoom::new();
    room.browser.refresh(&room.ctx).await.unwrap();

    let new_id = room
        .browser
        .rename_node(&room.ctx, "docs/report.pdf", "final.pdf")
        .await
        .unwrap();
    assert_eq!(new_id, "docs/final.pdf");

    let forest = room.store.forest();
    assert!(forest.find("docs/final.pdf").is_some());
    assert!(forest.find("docs/report.pdf").is_none());
}

#[tokio::test]
async fn deleting_a_folder_removes_its_subtree() {
    let room = TestRoom::new();
    room.browser.refresh(&room.ctx).await.unwrap();

    room.browser.delete_node(&room.ctx, "docs").await.unwrap();

    let forest = room.store.forest();
    assert!(forest.find("docs").is_none());
    assert!(forest.find("docs/archive/old.pdf").is_none());
    assert!(forest.find("readme.txt").is_some());
}

#[tokio::test]
async fn mutation_failure_leaves_the_tree_untouched() {
    let room = TestRoom::new();
    let before = room.browser.refresh(&room.ctx).await.unwrap();

    let err = room
        .browser
        .delete_node(&room.ctx, "ghost.txt")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(room.store.forest(), before);
}

#[tokio::test]
async fn moving_a_folder_into_itself_is_rejected() {
    let room = TestRoom::new();
    room.browser.refresh(&room.ctx).await.unwrap();

    let err = room
        .browser
        .move_node(&room.ctx, "docs", Some("docs/archive"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn open_file_issues_a_signed_url_for_files_only() {
    let room = TestRoom::new();
    room.browser.refresh(&room.ctx).await.unwrap();

    let signed = room
        .browser
        .open_file(&room.ctx, "docs/report.pdf")
        .await
        .unwrap();
    assert!(signed.url.contains("docs/report.pdf"));

    let err = room.browser.open_file(&room.ctx, "docs").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn breadcrumbs_and_search_read_the_current_forest() {
    let room = TestRoom::new();
    room.browser.refresh(&room.ctx).await.unwrap();

    let trail: Vec<String> = room
        .browser
        .breadcrumbs("docs/archive/old.pdf")
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(trail, ["docs", "docs/archive", "docs/archive/old.pdf"]);

    let hits = room.browser.search("PDF");
    assert_eq!(hits.len(), 2);
}
