mod common;
use common::memory_store;

use staysync::core::system::SystemMode;
use staysync::models::role::Role;
use staysync::models::user::UserRecord;
use staysync::store::{SETUP_COMPLETE, USERS};

#[test]
fn demo_is_the_default() {
    let store = memory_store();
    let mode = SystemMode::new(&store);
    assert!(mode.is_demo_mode().unwrap());
    assert!(mode.is_setup_complete().unwrap());
    assert!(!mode.needs_setup().unwrap());
}

#[test]
fn demo_mode_is_always_setup_complete() {
    let store = memory_store();
    let mode = SystemMode::new(&store);

    for stored in [true, false] {
        mode.set_demo_mode(true).unwrap();
        store.set(SETUP_COMPLETE, &stored).unwrap();
        assert!(mode.is_setup_complete().unwrap());
    }
}

#[test]
fn switching_to_demo_forces_setup_complete() {
    let store = memory_store();
    let mode = SystemMode::new(&store);

    mode.set_demo_mode(false).unwrap();
    assert!(!mode.is_setup_complete().unwrap());

    mode.set_demo_mode(true).unwrap();
    assert!(mode.is_setup_complete().unwrap());
    assert_eq!(store.get(SETUP_COMPLETE).unwrap(), Some(true));
}

#[test]
fn live_without_users_needs_setup() {
    let store = memory_store();
    let mode = SystemMode::new(&store);

    mode.set_demo_mode(false).unwrap();

    assert!(!mode.is_demo_mode().unwrap());
    assert!(!mode.is_setup_complete().unwrap());
    assert!(mode.needs_setup().unwrap());
}

#[test]
fn live_with_users_keeps_setup_flag() {
    let store = memory_store();
    let mode = SystemMode::new(&store);

    store
        .set(
            USERS,
            &vec![UserRecord::new(Role::Owner, "Olivia", "o@h.test", "pw")],
        )
        .unwrap();
    mode.complete_setup().unwrap();

    mode.set_demo_mode(false).unwrap();
    assert!(mode.is_setup_complete().unwrap());
    assert!(!mode.needs_setup().unwrap());
}

#[test]
fn complete_setup_is_idempotent() {
    let store = memory_store();
    let mode = SystemMode::new(&store);
    mode.set_demo_mode(false).unwrap();

    mode.complete_setup().unwrap();
    mode.complete_setup().unwrap();

    assert_eq!(store.get(SETUP_COMPLETE).unwrap(), Some(true));
    assert!(mode.is_setup_complete().unwrap());
}

#[test]
fn reset_removes_users_and_rearms_setup() {
    let store = memory_store();
    let mode = SystemMode::new(&store);
    store
        .set(
            USERS,
            &vec![UserRecord::new(Role::Owner, "Olivia", "o@h.test", "pw")],
        )
        .unwrap();
    mode.set_demo_mode(false).unwrap();
    mode.complete_setup().unwrap();

    mode.reset_real_users().unwrap();

    assert!(mode.real_users().unwrap().is_empty());
    assert!(mode.needs_setup().unwrap());
}
