//! End-to-end lifecycle of the post store over the on-disk backend.

use std::fs;
use std::sync::Arc;

use time::macros::date;

use cifra::application::storage::KeyValueStorage;
use cifra::application::store::{NewPost, PostStore, STORAGE_KEY, StoreError};
use cifra::domain::posts;
use cifra::infra::storage::LocalDiskStorage;

fn open_backend(root: &std::path::Path) -> Arc<dyn KeyValueStorage> {
    Arc::new(LocalDiskStorage::new(root).expect("storage root"))
}

fn sample_draft() -> NewPost {
    NewPost {
        title: "Hardening a Home Lab".to_string(),
        slug: "hardening-a-home-lab".to_string(),
        excerpt: "Segment first, patch second.".to_string(),
        content: "Put the lab on its own VLAN. Patch on a schedule. Log everything.".to_string(),
        author: "Haden Pereira".to_string(),
        date: date!(2026 - 08 - 06),
        tags: vec!["homelab".to_string(), "hardening".to_string()],
        read_time: 1,
    }
}

#[test]
fn seeds_once_then_round_trips_across_store_instances() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PostStore::new(open_backend(dir.path()));

    let seeded = store.list_posts().expect("seed read");
    assert_eq!(seeded, posts::default_posts());

    let created = store.create_post(sample_draft()).expect("create");

    // A brand-new store over the same directory sees the persisted
    // state, in order, with no re-seeding.
    let reopened = PostStore::new(open_backend(dir.path()));
    let listed = reopened.list_posts().expect("list");
    assert_eq!(listed.len(), seeded.len() + 1);
    assert_eq!(listed[0], created);
    assert_eq!(&listed[1..], &seeded[..]);
}

#[test]
fn created_post_is_reachable_by_its_slug() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PostStore::new(open_backend(dir.path()));

    let created = store.create_post(sample_draft()).expect("create");
    let fetched = store
        .get_post(&created.slug)
        .expect("get")
        .expect("present");

    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.content, created.content);
    assert_eq!(fetched.tags, created.tags);
}

#[test]
fn deletion_survives_reopening_the_backend() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PostStore::new(open_backend(dir.path()));

    let baseline = store.list_posts().expect("list");
    store.delete_post(&baseline[0].id).expect("delete");

    let reopened = PostStore::new(open_backend(dir.path()));
    let listed = reopened.list_posts().expect("list");
    assert_eq!(listed.len(), baseline.len() - 1);
    assert!(listed.iter().all(|post| post.id != baseline[0].id));
}

#[test]
fn corrupt_document_on_disk_surfaces_malformed() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let store = PostStore::new(open_backend(dir.path()));
        store.list_posts().expect("seed");
    }

    fs::write(
        dir.path().join(format!("{STORAGE_KEY}.json")),
        "{ definitely not a post document",
    )
    .expect("corrupt document");

    let store = PostStore::new(open_backend(dir.path()));
    assert!(matches!(
        store.list_posts(),
        Err(StoreError::Malformed { .. })
    ));
}

#[test]
fn custom_keys_isolate_collections_in_one_root() {
    let dir = tempfile::tempdir().expect("tempdir");

    let drafts = PostStore::with_key(open_backend(dir.path()), "drafts");
    let published = PostStore::with_key(open_backend(dir.path()), "published");

    drafts.create_post(sample_draft()).expect("create draft");
    let draft_count = drafts.list_posts().expect("list drafts").len();
    let published_count = published.list_posts().expect("list published").len();

    assert_eq!(draft_count, posts::default_posts().len() + 1);
    assert_eq!(published_count, posts::default_posts().len());
}
