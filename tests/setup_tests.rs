mod common;
use common::memory_store;

use staysync::core::session::SessionManager;
use staysync::core::setup::{
    AccountForm, MANUAL_LOGIN_NOTICE, MAX_BASE_PRICE, RoomPlan, SetupStep, SetupWizard,
    floor_price, generate_rooms, room_number,
};
use staysync::core::system::SystemMode;
use staysync::errors::AppError;
use staysync::models::role::Role;
use staysync::models::room::RoomStatus;
use staysync::store::{SESSION, Store};

fn plan(floors: u32, rooms_per_floor: u32, base_price: u32) -> RoomPlan {
    RoomPlan {
        floors,
        rooms_per_floor,
        base_price,
        room_type: "Standard Queen".into(),
    }
}

fn live(store: &Store) {
    SystemMode::new(store).set_demo_mode(false).unwrap();
}

#[test]
fn room_numbers_pad_the_slot() {
    assert_eq!(room_number(1, 1), "101");
    assert_eq!(room_number(3, 12), "312");
    assert_eq!(room_number(12, 5), "1205");
}

#[test]
fn two_by_three_plan_generates_expected_rooms() {
    let rooms = generate_rooms(&plan(2, 3, 100), "Wi-Fi").unwrap();

    let numbers: Vec<&str> = rooms.iter().map(|r| r.number.as_str()).collect();
    assert_eq!(numbers, ["101", "102", "103", "201", "202", "203"]);

    assert!(rooms[..3].iter().all(|r| r.price == 100 && r.floor == 1));
    assert!(rooms[3..].iter().all(|r| r.price == 120 && r.floor == 2));
    assert!(rooms.iter().all(|r| r.status == RoomStatus::Available
        && r.capacity == 2
        && r.features == ["Wi-Fi"]
        && r.id == format!("r{}", r.number)));
}

#[test]
fn plan_bounds_are_enforced() {
    for bad in [plan(0, 3, 100), plan(51, 3, 100), plan(2, 0, 100), plan(2, 101, 100), plan(2, 3, 0)] {
        assert!(matches!(
            generate_rooms(&bad, "Wi-Fi"),
            Err(AppError::Validation(_))
        ));
    }
    assert_eq!(generate_rooms(&plan(50, 100, 1), "Wi-Fi").unwrap().len(), 5000);
}

#[test]
fn oversized_base_price_is_rejected() {
    for base_price in [MAX_BASE_PRICE + 1, u32::MAX] {
        assert!(matches!(
            generate_rooms(&plan(2, 1, base_price), "Wi-Fi"),
            Err(AppError::Validation(_))
        ));
    }

    let top = generate_rooms(&plan(50, 1, MAX_BASE_PRICE), "Wi-Fi").unwrap();
    assert_eq!(top.last().map(|r| r.price), Some(MAX_BASE_PRICE + 49 * 20));
}

#[test]
fn floor_price_reports_overflow() {
    assert_eq!(floor_price(100, 1).unwrap(), 100);
    assert_eq!(floor_price(100, 3).unwrap(), 140);
    assert!(floor_price(u32::MAX, 2).is_err());
    assert!(floor_price(100, 0).is_err());
}

#[test]
fn oversized_price_step_can_be_retried() {
    let store = memory_store();
    live(&store);
    let mut wizard = SetupWizard::start(&store, SessionManager::new(&store), "Wi-Fi").unwrap();
    wizard.submit_account(AccountForm::new("Olivia", "o@h.test", "o")).unwrap();
    wizard.submit_account(AccountForm::new("Max", "m@h.test", "m")).unwrap();
    wizard.submit_account(AccountForm::new("Sam", "s@h.test", "s")).unwrap();

    assert!(wizard.submit_rooms(&plan(2, 1, u32::MAX)).is_err());
    assert_eq!(wizard.step(), SetupStep::ConfigureRooms);
    assert!(SystemMode::new(&store).real_rooms().unwrap().is_empty());

    let outcome = wizard.submit_rooms(&plan(2, 1, 90)).unwrap();
    assert_eq!(outcome.rooms_created, 2);
}

#[test]
fn wizard_refuses_to_start_in_demo_mode() {
    let store = memory_store();
    let err = SetupWizard::start(&store, SessionManager::new(&store), "Wi-Fi").err();
    assert!(matches!(err, Some(AppError::Validation(_))));
}

#[test]
fn full_run_saves_accounts_rooms_and_signs_in_superuser() {
    let store = memory_store();
    live(&store);
    let mut wizard = SetupWizard::start(&store, SessionManager::new(&store), "Wi-Fi").unwrap();

    assert_eq!(wizard.step(), SetupStep::CollectOwner);
    wizard.submit_account(AccountForm::new("Olivia", "o@h.test", "o")).unwrap();
    wizard.submit_account(AccountForm::new("Max", "m@h.test", "m")).unwrap();
    let next = wizard
        .submit_account(AccountForm::new("Sam", "s@h.test", "s"))
        .unwrap();
    assert_eq!(next, SetupStep::ConfigureRooms);

    let outcome = wizard.submit_rooms(&plan(2, 3, 100)).unwrap();

    assert_eq!(wizard.step(), SetupStep::Done);
    assert_eq!(outcome.rooms_created, 6);
    assert_eq!(outcome.notice, None);
    let session = outcome.session.unwrap();
    assert_eq!(session.role, Some(Role::Superuser));
    assert_eq!(store.get(SESSION).unwrap(), Some(session));

    let mode = SystemMode::new(&store);
    assert!(!mode.needs_setup().unwrap());
    assert_eq!(mode.real_users().unwrap().len(), 3);
    assert_eq!(mode.real_rooms().unwrap().len(), 6);
}

#[test]
fn empty_field_keeps_the_step() {
    let store = memory_store();
    live(&store);
    let mut wizard = SetupWizard::start(&store, SessionManager::new(&store), "Wi-Fi").unwrap();

    let err = wizard
        .submit_account(AccountForm::new("Olivia", "  ", "pw"))
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(wizard.step(), SetupStep::CollectOwner);
    assert!(SystemMode::new(&store).real_users().unwrap().is_empty());
}

#[test]
fn rooms_cannot_be_submitted_before_accounts() {
    let store = memory_store();
    live(&store);
    let mut wizard = SetupWizard::start(&store, SessionManager::new(&store), "Wi-Fi").unwrap();

    assert!(wizard.submit_rooms(&plan(1, 1, 100)).is_err());
    assert!(SystemMode::new(&store).real_rooms().unwrap().is_empty());
}

#[test]
fn failed_auto_login_leaves_setup_complete_with_notice() {
    let store = memory_store();
    live(&store);
    let mut wizard = SetupWizard::start(&store, SessionManager::new(&store), "Wi-Fi").unwrap();
    wizard.submit_account(AccountForm::new("Olivia", "o@h.test", "o")).unwrap();
    wizard.submit_account(AccountForm::new("Max", "m@h.test", "m")).unwrap();
    wizard.submit_account(AccountForm::new("Sam", "s@h.test", "s")).unwrap();

    // the superuser vanishes before the final step
    store.remove(staysync::store::USERS).unwrap();

    let outcome = wizard.submit_rooms(&plan(1, 2, 80)).unwrap();

    assert_eq!(outcome.session, None);
    assert_eq!(outcome.notice.as_deref(), Some(MANUAL_LOGIN_NOTICE));
    assert!(SystemMode::new(&store).is_setup_complete().unwrap());
}
