//! Interactive full-screen widget.

mod input;
mod view;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::controller::{Controller, SystemClipboard};
use crate::terminal::ScreenGuard;
use input::Command;

/// Upper bound on how long the loop sleeps waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the widget until the user quits.
pub fn run() -> Result<()> {
    let mut controller = Controller::new(SystemClipboard::new(), SmallRng::from_entropy());
    let mut guard = ScreenGuard::new().context("failed to prepare terminal")?;
    let mut stdout = io::stdout();
    tracing::info!("widget started");

    let mut dirty = true;
    loop {
        if dirty {
            view::render(&controller)
                .present(&mut stdout)
                .context("failed to draw widget")?;
            dirty = false;
        }

        let timeout = poll_timeout(controller.next_deadline(), Instant::now());
        if event::poll(timeout).context("failed to poll terminal events")? {
            let event = event::read().context("failed to read terminal event")?;
            match input::map_event(&event) {
                Some(Command::Quit) => break,
                Some(Command::Act(action)) => {
                    controller.dispatch(action, Instant::now());
                    dirty = true;
                }
                Some(Command::Redraw) => dirty = true,
                None => {}
            }
        }

        if controller.tick(Instant::now()) {
            dirty = true;
        }
    }

    guard.restore();
    tracing::info!(generated = controller.generation(), "widget closed");
    Ok(())
}

/// Sleep until the next deadline, or idle if nothing is pending.
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
        None => IDLE_POLL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_waits_for_nearest_deadline() {
        let now = Instant::now();
        assert_eq!(poll_timeout(None, now), IDLE_POLL);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_millis(40)), now),
            Duration::from_millis(40)
        );
        assert_eq!(poll_timeout(Some(now + Duration::from_secs(5)), now), IDLE_POLL);
        assert_eq!(poll_timeout(Some(now), now + Duration::from_millis(1)), Duration::ZERO);
    }
}
