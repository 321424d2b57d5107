//! First-run wizard for live mode.
//!
//! `CollectOwner → CollectManager → CollectSuperuser → ConfigureRooms → Done`.
//! Every step writes straight to the store; there is no rollback, and an
//! abandoned run restarts from the first step.

use std::fmt;

use crate::core::session::SessionManager;
use crate::core::system::SystemMode;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::room::{Room, RoomStatus};
use crate::models::user::{Session, UserRecord};
use crate::store::Store;

pub const MAX_FLOORS: u32 = 50;
pub const MAX_ROOMS_PER_FLOOR: u32 = 100;
pub const MAX_BASE_PRICE: u32 = 100_000;
pub const FLOOR_SURCHARGE: u32 = 20;
pub const DEFAULT_CAPACITY: u32 = 2;

pub const MANUAL_LOGIN_NOTICE: &str = "Setup complete, please login.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    CollectOwner,
    CollectManager,
    CollectSuperuser,
    ConfigureRooms,
    Done,
}

impl SetupStep {
    /// Role collected by an account step.
    pub fn role(&self) -> Option<Role> {
        match self {
            SetupStep::CollectOwner => Some(Role::Owner),
            SetupStep::CollectManager => Some(Role::Manager),
            SetupStep::CollectSuperuser => Some(Role::Superuser),
            SetupStep::ConfigureRooms | SetupStep::Done => None,
        }
    }

    fn next(&self) -> Self {
        match self {
            SetupStep::CollectOwner => SetupStep::CollectManager,
            SetupStep::CollectManager => SetupStep::CollectSuperuser,
            SetupStep::CollectSuperuser => SetupStep::ConfigureRooms,
            SetupStep::ConfigureRooms | SetupStep::Done => SetupStep::Done,
        }
    }

    /// 1-based position for progress display.
    pub fn position(&self) -> usize {
        match self {
            SetupStep::CollectOwner => 1,
            SetupStep::CollectManager => 2,
            SetupStep::CollectSuperuser => 3,
            SetupStep::ConfigureRooms => 4,
            SetupStep::Done => 5,
        }
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = match self {
            SetupStep::CollectOwner => "Owner Account",
            SetupStep::CollectManager => "Manager Account",
            SetupStep::CollectSuperuser => "Superuser Account",
            SetupStep::ConfigureRooms => "Room Inventory",
            SetupStep::Done => "Done",
        };
        f.write_str(title)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub display_name: String,
    pub email: String,
    pub secret: String,
}

impl AccountForm {
    pub fn new(display_name: &str, email: &str, secret: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            email: email.to_string(),
            secret: secret.to_string(),
        }
    }

    fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("full name", &self.display_name),
            ("email", &self.email),
            ("password", &self.secret),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RoomPlan {
    pub floors: u32,
    pub rooms_per_floor: u32,
    pub base_price: u32,
    pub room_type: String,
}

impl RoomPlan {
    fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_FLOORS).contains(&self.floors) {
            return Err(AppError::Validation(format!(
                "floors must be between 1 and {}",
                MAX_FLOORS
            )));
        }
        if !(1..=MAX_ROOMS_PER_FLOOR).contains(&self.rooms_per_floor) {
            return Err(AppError::Validation(format!(
                "rooms per floor must be between 1 and {}",
                MAX_ROOMS_PER_FLOOR
            )));
        }
        if !(1..=MAX_BASE_PRICE).contains(&self.base_price) {
            return Err(AppError::Validation(format!(
                "base price must be between 1 and {}",
                MAX_BASE_PRICE
            )));
        }
        if self.room_type.trim().is_empty() {
            return Err(AppError::Validation("room type must not be empty".into()));
        }
        Ok(())
    }
}

/// Room number: floor followed by the 1-based slot padded to two digits.
pub fn room_number(floor: u32, slot: u32) -> String {
    format!("{}{:02}", floor, slot)
}

/// Nightly price on `floor`: the base price plus the per-floor surcharge.
pub fn floor_price(base_price: u32, floor: u32) -> AppResult<u32> {
    floor
        .checked_sub(1)
        .and_then(|above| above.checked_mul(FLOOR_SURCHARGE))
        .and_then(|surcharge| base_price.checked_add(surcharge))
        .ok_or_else(|| {
            AppError::Validation(format!("price for floor {} is out of range", floor))
        })
}

/// Deterministically expand a plan into `floors × rooms_per_floor` rooms.
pub fn generate_rooms(plan: &RoomPlan, feature: &str) -> AppResult<Vec<Room>> {
    plan.validate()?;

    let mut rooms = Vec::with_capacity((plan.floors * plan.rooms_per_floor) as usize);
    for floor in 1..=plan.floors {
        let price = floor_price(plan.base_price, floor)?;
        for slot in 1..=plan.rooms_per_floor {
            let number = room_number(floor, slot);
            rooms.push(Room {
                id: format!("r{}", number),
                number,
                room_type: plan.room_type.trim().to_string(),
                floor,
                capacity: DEFAULT_CAPACITY,
                price,
                status: RoomStatus::Available,
                features: vec![feature.to_string()],
            });
        }
    }
    Ok(rooms)
}

/// Result of the final step.
#[derive(Debug, Clone)]
pub struct SetupOutcome {
    pub rooms_created: usize,
    /// Present when the automatic superuser login worked.
    pub session: Option<Session>,
    /// Shown to the user when automatic login failed.
    pub notice: Option<String>,
}

pub struct SetupWizard<'a> {
    store: &'a Store,
    sessions: SessionManager<'a>,
    step: SetupStep,
    superuser: Option<AccountForm>,
    room_feature: String,
}

impl<'a> SetupWizard<'a> {
    /// Start the wizard. Refused unless the store is in live mode with setup pending.
    pub fn start(
        store: &'a Store,
        sessions: SessionManager<'a>,
        room_feature: &str,
    ) -> AppResult<Self> {
        if !SystemMode::new(store).needs_setup()? {
            return Err(AppError::Validation(
                "setup is only available in live mode before it has been completed".into(),
            ));
        }

        Ok(Self {
            store,
            sessions,
            step: SetupStep::CollectOwner,
            superuser: None,
            room_feature: room_feature.to_string(),
        })
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    /// Save the account for the current step and advance.
    pub fn submit_account(&mut self, form: AccountForm) -> AppResult<SetupStep> {
        let role = self.step.role().ok_or_else(|| {
            AppError::Validation(format!("step '{}' does not collect an account", self.step))
        })?;

        form.validate()?;

        let record = UserRecord::new(
            role,
            form.display_name.trim(),
            form.email.trim(),
            &form.secret,
        );
        self.sessions.register_user(record)?;

        if role == Role::Superuser {
            self.superuser = Some(form);
        }

        self.step = self.step.next();
        Ok(self.step)
    }

    /// Generate and save the room inventory, then finish setup.
    pub fn submit_rooms(&mut self, plan: &RoomPlan) -> AppResult<SetupOutcome> {
        if self.step != SetupStep::ConfigureRooms {
            return Err(AppError::Validation(format!(
                "room inventory is configured after the accounts (current step: {})",
                self.step
            )));
        }

        let rooms = generate_rooms(plan, &self.room_feature)?;
        let mode = SystemMode::new(self.store);
        mode.save_real_rooms(&rooms)?;
        self.store.audit(
            "setup",
            "rooms",
            &format!("Generated {} rooms", rooms.len()),
        );

        self.step = SetupStep::Done;
        mode.complete_setup()?;
        self.store.audit("setup", "complete", "Initial configuration finished");

        let login = match &self.superuser {
            Some(su) => self.sessions.login(su.email.trim(), &su.secret),
            None => Err(AppError::InvalidCredentials),
        };

        Ok(match login {
            Ok(session) => SetupOutcome {
                rooms_created: rooms.len(),
                session: Some(session),
                notice: None,
            },
            Err(_) => SetupOutcome {
                rooms_created: rooms.len(),
                session: None,
                notice: Some(MANUAL_LOGIN_NOTICE.to_string()),
            },
        })
    }
}
