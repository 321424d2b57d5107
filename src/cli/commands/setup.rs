use std::io::{self, BufRead};

use crate::cli::commands::{boot, open_store, prompt_line};
use crate::cli::commands::status::print_view;
use crate::config::Config;
use crate::core::setup::{
    AccountForm, MAX_BASE_PRICE, MAX_FLOORS, MAX_ROOMS_PER_FLOOR, RoomPlan, SetupStep,
};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, info, success, warning};

fn aborted() -> AppError {
    AppError::Validation(
        "setup aborted: accounts entered so far were kept, run `staysync setup` again".into(),
    )
}

fn read_required(input: &mut impl BufRead, label: &str) -> AppResult<String> {
    prompt_line(input, label)?.ok_or_else(aborted)
}

fn read_number(input: &mut impl BufRead, label: &str) -> AppResult<u32> {
    loop {
        let raw = read_required(input, label)?;
        match raw.trim().parse::<u32>() {
            Ok(n) => return Ok(n),
            Err(_) => error(format!("'{}' is not a positive whole number", raw.trim())),
        }
    }
}

fn read_account(input: &mut impl BufRead) -> AppResult<AccountForm> {
    Ok(AccountForm {
        display_name: read_required(input, "Full name")?,
        email: read_required(input, "Email address")?,
        secret: read_required(input, "Set password")?,
    })
}

fn read_plan(input: &mut impl BufRead) -> AppResult<RoomPlan> {
    Ok(RoomPlan {
        floors: read_number(input, &format!("Floors (1-{})", MAX_FLOORS))?,
        rooms_per_floor: read_number(
            input,
            &format!("Rooms per floor (1-{})", MAX_ROOMS_PER_FLOOR),
        )?,
        base_price: read_number(
            input,
            &format!("Base price per night (1-{})", MAX_BASE_PRICE),
        )?,
        room_type: read_required(input, "Room type")?,
    })
}

/// Interactive first-run wizard. A step that fails validation is asked again.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let mut state = boot(&store, cfg)?;
    let mut wizard = state.setup_wizard(&cfg.default_room_feature)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    header("Welcome to StaySync: initial system configuration");

    loop {
        let step = wizard.step();
        match step {
            SetupStep::CollectOwner | SetupStep::CollectManager | SetupStep::CollectSuperuser => {
                info(format!("Step {}/4: {}", step.position(), step));
                let form = read_account(&mut input)?;
                match wizard.submit_account(form) {
                    Ok(_) => success(format!("{} saved.", step)),
                    Err(AppError::Validation(msg)) => error(msg),
                    Err(e) => return Err(e),
                }
            }
            SetupStep::ConfigureRooms => {
                info(format!("Step {}/4: {}", step.position(), step));
                let plan = read_plan(&mut input)?;
                match wizard.submit_rooms(&plan) {
                    Ok(outcome) => {
                        success(format!(
                            "Created {} rooms. Setup complete.",
                            outcome.rooms_created
                        ));
                        if let Some(notice) = outcome.notice {
                            warning(notice);
                        }
                    }
                    Err(AppError::Validation(msg)) => error(msg),
                    Err(e) => return Err(e),
                }
            }
            SetupStep::Done => break,
        }
    }

    state.finish_setup()?;
    print_view(&state);
    Ok(())
}
