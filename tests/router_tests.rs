mod common;
use common::memory_store;

use std::time::Duration;

use staysync::core::router::{AppState, View, route};
use staysync::core::session::{SessionManager, demo_session};
use staysync::core::system::SystemMode;
use staysync::models::role::Role;
use staysync::models::user::UserRecord;

#[test]
fn route_priorities() {
    let s = demo_session();

    assert_eq!(route(true, true, Some(&s), true), View::Loading);
    assert_eq!(route(false, true, Some(&s), false), View::Setup);
    assert_eq!(route(false, false, None, true), View::Login);

    match route(false, false, Some(&s), true) {
        View::Authorized(ctx) => {
            assert!(ctx.is_demo);
            assert_eq!(ctx.session, s);
        }
        other => panic!("unexpected view {:?}", other),
    }
}

#[test]
fn fresh_store_boots_to_demo_login() {
    let store = memory_store();
    let state = AppState::boot(&store, Duration::ZERO).unwrap();

    assert!(state.is_demo());
    assert_eq!(state.view(), View::Login);
}

#[test]
fn sign_in_reaches_the_shell() {
    let store = memory_store();
    let mut state = AppState::boot(&store, Duration::ZERO).unwrap();

    state.sign_in("", "").unwrap();

    match state.view() {
        View::Authorized(ctx) => assert!(ctx.can_manage_rooms()),
        other => panic!("unexpected view {:?}", other),
    }

    state.sign_out().unwrap();
    assert_eq!(state.view(), View::Login);
}

#[test]
fn switching_to_empty_live_mode_requires_setup() {
    let store = memory_store();
    let mut state = AppState::boot(&store, Duration::ZERO).unwrap();
    state.sign_in("", "").unwrap();

    state.switch_mode(false).unwrap();

    assert!(!state.is_demo());
    assert_eq!(state.view(), View::Setup);
    assert_eq!(state.auth().session, None);
}

#[test]
fn switching_back_to_demo_ends_session() {
    let store = memory_store();
    SystemMode::new(&store).set_demo_mode(false).unwrap();
    SessionManager::new(&store)
        .register_user(UserRecord::new(Role::Manager, "Max", "m@h.test", "pw"))
        .unwrap();
    SystemMode::new(&store).complete_setup().unwrap();

    let mut state = AppState::boot(&store, Duration::ZERO).unwrap();
    state.sign_in("m@h.test", "pw").unwrap();

    state.switch_mode(true).unwrap();

    assert!(state.is_demo());
    assert_eq!(state.view(), View::Login);
}

#[test]
fn boot_restores_a_persisted_session() {
    let store = memory_store();
    SessionManager::new(&store).login("", "").unwrap();

    let state = AppState::boot(&store, Duration::ZERO).unwrap();

    assert!(matches!(state.view(), View::Authorized(_)));
}
