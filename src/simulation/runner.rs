//! Timer-driven advance loop

use super::Session;
use std::thread;
use std::time::Duration;

/// Drives a running session one generation at a time.
///
/// Single-threaded and cooperative: each tick sleeps the session's
/// configured delay, performs one advance, and hands the session to the
/// caller's callback for rendering. Flipping the running flag (from the
/// callback, or anywhere else with access to the session) cancels the loop
/// before the next tick fires.
pub struct Runner {
    max_generations: Option<u64>,
    paced: bool,
}

impl Runner {
    pub fn new(max_generations: Option<u64>) -> Self {
        Self {
            max_generations,
            paced: true,
        }
    }

    /// Disable the inter-tick delay (batch runs, tests)
    pub fn paced(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }

    /// Run until the session stops or the generation budget is exhausted.
    /// Returns the number of generations advanced.
    pub fn run<F>(&self, session: &mut Session, mut on_tick: F) -> u64
    where
        F: FnMut(&mut Session),
    {
        let start = session.generation();

        while session.is_running() {
            if let Some(max) = self.max_generations {
                if session.generation() - start >= max {
                    session.stop();
                    break;
                }
            }

            if self.paced {
                thread::sleep(Duration::from_millis(session.speed_ms()));
            }

            session.advance();
            on_tick(session);
        }

        session.generation() - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InitialState, Settings};

    fn blinker_session() -> Session {
        let mut settings = Settings::default();
        settings.grid.width = 10;
        settings.grid.height = 10;
        settings.grid.initial_state = InitialState::Empty;
        settings.grid.seed = Some(1);
        let mut session = Session::new(&settings).unwrap();
        session.stamp_pattern("blinker", 4, 4).unwrap();
        session
    }

    #[test]
    fn test_runner_honors_generation_budget() {
        let mut session = blinker_session();
        session.start();

        let mut ticks = 0;
        let advanced = Runner::new(Some(6)).paced(false).run(&mut session, |_| {
            ticks += 1;
        });

        assert_eq!(advanced, 6);
        assert_eq!(ticks, 6);
        assert_eq!(session.generation(), 6);
        assert!(!session.is_running());
    }

    #[test]
    fn test_runner_does_nothing_on_stopped_session() {
        let mut session = blinker_session();

        let advanced = Runner::new(Some(10)).paced(false).run(&mut session, |_| {
            panic!("tick on a stopped session");
        });
        assert_eq!(advanced, 0);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_callback_can_stop_the_loop() {
        let mut session = blinker_session();
        session.start();

        let advanced = Runner::new(None).paced(false).run(&mut session, |s| {
            if s.generation() >= 3 {
                s.stop();
            }
        });

        assert_eq!(advanced, 3);
        assert!(!session.is_running());
    }
}
