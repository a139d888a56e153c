use std::time::{Duration, Instant};

use colored::Colorize;
use crossbeam_channel::{bounded, select, tick, unbounded, Receiver};
use padbind_control::Performer;
use padbind_handler::{Flow, GamepadHandler, GamepadOptions, GamepadSource};
use padbind_profile::{load_profile, resolve_profile, Profile};
use thiserror::Error;

use crate::action::{Action, ChannelTarget};
use crate::mapping::build_mappings;
use crate::runner::ActionRunner;
use crate::{print_debug, print_error, print_info, print_warning};

/// Frame period of the poll loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("profile error: {0}")]
    Profile(#[from] padbind_profile::ProfileError),
    #[error("mapping error: {0}")]
    Handler(#[from] padbind_handler::Error),
    #[error("gamepad backend error: {0}")]
    Backend(#[from] padbind_gamepad::Error),
    #[error("keyboard error: {0}")]
    Keyboard(#[from] enigo::NewConError),
    #[error("failed to set Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "sdl2-backend")]
fn open_source() -> Result<padbind_gamepad::Sdl2Source> {
    Ok(padbind_gamepad::Sdl2Source::new()?)
}

#[cfg(not(feature = "sdl2-backend"))]
#[allow(clippy::unnecessary_wraps)]
fn open_source() -> Result<padbind_gamepad::UnsupportedSource> {
    Ok(padbind_gamepad::UnsupportedSource)
}

fn load(profile: Option<&str>) -> Result<Profile> {
    let path = resolve_profile(profile)?;
    let profile = load_profile(&path)?;
    print_info!("loaded profile {}", path.display());
    Ok(profile)
}

fn start<S: GamepadSource>(handler: &mut GamepadHandler<S>) -> Result<()> {
    if let Err(e) = handler.start() {
        print_error!("gamepads are not available on this host; rebuild with the sdl2-backend feature");
        return Err(e.into());
    }
    Ok(())
}

fn stop_signal() -> Result<Receiver<()>> {
    let (stop_tx, stop_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.try_send(());
    })?;
    Ok(stop_rx)
}

/// Run the daemon until Ctrl+C.
pub(crate) fn run(profile: Option<&str>) -> Result<()> {
    let profile = load(profile)?;
    let (action_tx, action_rx) = unbounded::<Action>();

    let mappings = build_mappings(&profile.gamepads, &action_tx);
    let mut handler = GamepadHandler::new(mappings, profile.options.clone(), open_source()?)?
        .with_key_target(ChannelTarget::new(action_tx.clone()));
    start(&mut handler)?;

    let mut runner = ActionRunner::new(Performer::new()?);
    if let Some(shell) = profile.shell.clone() {
        runner.set_shell(shell);
    }

    let stop_rx = stop_signal()?;
    let ticker = tick(FRAME_INTERVAL);
    print_info!(
        "padbindd started with {} gamepad mapping(s). Listening for gamepads.",
        profile.gamepads.len()
    );

    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(ticker) -> msg => {
                let Ok(now) = msg else {
                    break;
                };
                let flow = handler.tick(now);
                for action in action_rx.try_iter() {
                    runner.run(action);
                }
                if flow == Flow::Stop {
                    print_warning!("handler stopped, exiting");
                    break;
                }
            }
        }
    }

    // Let held keys go before exiting.
    handler.stop();
    for action in action_rx.try_iter() {
        runner.run(action);
    }
    print_info!("padbindd stopped");
    Ok(())
}

/// Load a profile and validate its mappings.
pub(crate) fn check(profile: Option<&str>) -> Result<()> {
    let profile = load(profile)?;
    let (action_tx, _action_rx) = unbounded::<Action>();
    let mappings = build_mappings(&profile.gamepads, &action_tx);
    let handler = GamepadHandler::new(
        mappings,
        profile.options.clone(),
        padbind_gamepad::UnsupportedSource,
    )?;
    for mapping in handler.mappings() {
        print_debug!("{mapping:?}");
    }
    print_info!(
        "profile is valid: {} gamepad mapping(s)",
        handler.mappings().len()
    );
    Ok(())
}

/// Watch for gamepads for a while and report every id seen.
pub(crate) fn devices(seconds: u64) -> Result<()> {
    let options = GamepadOptions {
        list_available_gamepads: true,
        discovery_interval_ms: 0,
        ..GamepadOptions::default()
    };
    let mut handler = GamepadHandler::new(Vec::new(), options, open_source()?)?;
    start(&mut handler)?;

    let stop_rx = stop_signal()?;
    let deadline = Instant::now() + Duration::from_secs(seconds);
    let ticker = tick(FRAME_INTERVAL);
    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(ticker) -> msg => {
                let Ok(now) = msg else {
                    break;
                };
                if now >= deadline || handler.tick(now) == Flow::Stop {
                    break;
                }
            }
        }
    }

    let mut ids: Vec<&str> = handler.available_gamepad_ids().collect();
    ids.sort_unstable();
    if ids.is_empty() {
        print_warning!("no gamepads found");
    }
    for id in ids {
        print_info!("{id}");
    }
    Ok(())
}
