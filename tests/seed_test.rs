//! Integration tests for the seed populator.

mod common;

use common::TestHarness;
use groupseed::seed::{self, SeedTargets};
use groupseed_common::{Error, GroupId};
use groupseed_db::associations;
use groupseed_db::models::{EntityCounts, Group};
use groupseed_db::queries::{groups, posts, users};

fn defaults() -> SeedTargets {
    SeedTargets::default()
}

// ---------------------------------------------------------------------------
// Empty store
// ---------------------------------------------------------------------------

#[test]
fn seed_empty_store_creates_baseline() {
    let h = TestHarness::new();
    let conn = h.conn();

    let report = seed::run(&conn, None, &defaults()).unwrap();

    assert!(report.group_created);
    assert_eq!(report.users_created.len(), 2);
    assert_eq!(report.posts_created.len(), 10);
    assert_eq!(report.records_created(), 13);
    assert_eq!(
        h.counts(),
        EntityCounts {
            groups: 1,
            users: 2,
            posts: 10,
        }
    );

    for user in &report.users_created {
        assert_eq!(user.group_id, Some(report.group.id));
        assert_eq!(h.post_count(user), 5);
    }
    for post in &report.posts_created {
        assert!(post.user_id.is_some());
    }
}

#[test]
fn seed_is_idempotent() {
    let h = TestHarness::new();
    let conn = h.conn();

    seed::run(&conn, None, &defaults()).unwrap();
    let second = seed::run(&conn, None, &defaults()).unwrap();
    assert!(second.is_noop());
    assert_eq!(
        h.counts(),
        EntityCounts {
            groups: 1,
            users: 2,
            posts: 10,
        }
    );

    let third = seed::run(&conn, None, &defaults()).unwrap();
    assert!(third.is_noop());
    assert!(!third.group_created);
    assert_eq!(h.counts().total(), 13);
}

#[test]
fn seeded_posts_resolve_to_their_users_group() {
    let h = TestHarness::new();
    let conn = h.conn();

    let report = seed::run(&conn, None, &defaults()).unwrap();

    for post in &report.posts_created {
        let user = associations::post_user(&conn, post).unwrap().unwrap();
        let via_user = associations::user_group(&conn, &user).unwrap();
        assert_eq!(associations::post_group(&conn, post).unwrap(), via_user);
        assert_eq!(via_user, Some(report.group));
    }

    let group_posts = associations::group_posts(&conn, report.group.id).unwrap();
    assert_eq!(group_posts.len(), 10);
}

// ---------------------------------------------------------------------------
// Existing data
// ---------------------------------------------------------------------------

#[test]
fn seed_uses_first_existing_group() {
    let h = TestHarness::new();
    let conn = h.conn();
    let first = groups::create_group(&conn).unwrap();
    let second = groups::create_group(&conn).unwrap();

    let report = seed::run(&conn, None, &defaults()).unwrap();

    assert_eq!(report.group, first);
    assert!(!report.group_created);
    assert_eq!(users::count_users_in_group(&conn, first.id).unwrap(), 2);
    assert_eq!(users::count_users_in_group(&conn, second.id).unwrap(), 0);
    assert_eq!(h.counts().groups, 2);
}

#[test]
fn seed_tops_up_partial_population() {
    let h = TestHarness::new();
    let (group, members) = h.group_with_users(1);
    h.add_posts(&members[0], 3);

    let report = seed::run(&h.conn(), None, &defaults()).unwrap();

    assert_eq!(report.group, group);
    assert_eq!(report.users_created.len(), 1);
    // 2 for the existing user, 5 for the new one
    assert_eq!(report.posts_created.len(), 7);
    assert_eq!(h.post_count(&members[0]), 5);
}

#[test]
fn seed_never_shrinks_users() {
    let h = TestHarness::new();
    let (group, _) = h.group_with_users(3);
    let conn = h.conn();

    let report = seed::run(&conn, None, &defaults()).unwrap();

    assert!(report.users_created.is_empty());
    assert_eq!(users::count_users_in_group(&conn, group.id).unwrap(), 3);
}

#[test]
fn seed_never_shrinks_posts() {
    let h = TestHarness::new();
    let (_, members) = h.group_with_users(2);
    h.add_posts(&members[0], 8);

    let report = seed::run(&h.conn(), None, &defaults()).unwrap();

    assert_eq!(h.post_count(&members[0]), 8);
    assert_eq!(h.post_count(&members[1]), 5);
    assert_eq!(report.posts_created.len(), 5);
}

#[test]
fn seed_tops_up_at_most_two_users() {
    let h = TestHarness::new();
    let (_, members) = h.group_with_users(5);

    let report = seed::run(&h.conn(), None, &defaults()).unwrap();

    assert!(report.users_created.is_empty());
    assert_eq!(report.posts_created.len(), 10);
    assert_eq!(h.post_count(&members[0]), 5);
    assert_eq!(h.post_count(&members[1]), 5);
    for user in &members[2..] {
        assert_eq!(h.post_count(user), 0);
    }
}

#[test]
fn seed_ignores_users_outside_group() {
    let h = TestHarness::new();
    let conn = h.conn();
    let loner = users::create_user(&conn, None).unwrap();

    seed::run(&conn, None, &defaults()).unwrap();

    assert_eq!(h.post_count(&loner), 0);
    assert_eq!(associations::user_group(&conn, &loner).unwrap(), None);
    assert_eq!(h.counts().users, 3);
}

#[test]
fn populate_reports_only_users_and_posts() {
    let h = TestHarness::new();
    let conn = h.conn();
    let group = groups::create_group(&conn).unwrap();

    let report = seed::populate(&conn, &group, &defaults()).unwrap();

    assert_eq!(report.group, group);
    assert!(!report.group_created);
    assert_eq!(report.records_created(), 12);
    assert_eq!(h.counts().groups, 1);
}

// ---------------------------------------------------------------------------
// Injected group and targets
// ---------------------------------------------------------------------------

#[test]
fn seed_requested_group() {
    let h = TestHarness::new();
    let conn = h.conn();
    let first = groups::create_group(&conn).unwrap();
    let target = groups::create_group(&conn).unwrap();

    let report = seed::run(&conn, Some(target.id), &defaults()).unwrap();

    assert_eq!(report.group, target);
    assert_eq!(users::count_users_in_group(&conn, target.id).unwrap(), 2);
    assert_eq!(users::count_users_in_group(&conn, first.id).unwrap(), 0);
}

#[test]
fn seed_missing_requested_group_is_not_found() {
    let h = TestHarness::new();

    let err = seed::run(&h.conn(), Some(GroupId::from(42)), &defaults()).unwrap_err();

    assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
    assert_eq!(h.counts(), EntityCounts::default());
}

#[test]
fn seed_custom_targets() {
    let h = TestHarness::new();
    let targets = SeedTargets {
        users_per_group: 3,
        posts_per_user: 1,
    };

    let report = seed::run(&h.conn(), None, &targets).unwrap();

    assert_eq!(report.users_created.len(), 3);
    assert_eq!(report.posts_created.len(), 3);
}

#[test]
fn seed_zero_targets_only_resolves_group() {
    let h = TestHarness::new();
    let targets = SeedTargets {
        users_per_group: 0,
        posts_per_user: 0,
    };

    let report = seed::run(&h.conn(), None, &targets).unwrap();

    assert!(report.group_created);
    assert_eq!(
        h.counts(),
        EntityCounts {
            groups: 1,
            users: 0,
            posts: 0,
        }
    );
}

// ---------------------------------------------------------------------------
// Failure
// ---------------------------------------------------------------------------

#[test]
fn populate_rejected_write_halts() {
    let h = TestHarness::new();
    let conn = h.conn();
    let phantom = Group {
        id: GroupId::from(999),
    };

    let err = seed::populate(&conn, &phantom, &defaults()).unwrap_err();

    assert!(matches!(err, Error::Constraint(_)), "got {err:?}");
    assert_eq!(h.counts(), EntityCounts::default());
}

#[test]
fn run_keeps_records_created_before_failure() {
    let h = TestHarness::new();
    let conn = h.conn();
    let (group, members) = h.group_with_users(1);

    // Posts made after the first insert are rejected.
    conn.execute_batch(
        "CREATE TRIGGER reject_second_post BEFORE INSERT ON posts
         WHEN (SELECT COUNT(*) FROM posts) >= 1
         BEGIN SELECT RAISE(ABORT, 'CHECK constraint failed: one post'); END;",
    )
    .unwrap();

    let err = seed::run(&conn, Some(group.id), &defaults()).unwrap_err();

    assert!(matches!(err, Error::Constraint(_)), "got {err:?}");
    // The missing user was created, then the first post, then the run stopped.
    assert_eq!(users::count_users_in_group(&conn, group.id).unwrap(), 2);
    assert_eq!(posts::count_posts(&conn).unwrap(), 1);
    assert_eq!(h.post_count(&members[0]), 1);
}
