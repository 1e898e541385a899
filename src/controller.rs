//! Window controller: view state, clock and action dispatch.
//!
//! The controller owns everything the window shows and is independent of the
//! rendering layer. All methods run on the UI thread; the only asynchronous
//! input is the timer, whose ticks are queued and consumed by
//! [`ShellController::pump_timer`].

use std::cell::Cell;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Duration;

use crate::actions::ShellAction;
use crate::dialogs::{DialogPresenter, NativeDialogs};
use crate::error::ActionError;
use crate::features::{FeatureContext, FeatureKind, FeatureRegistry, FeatureSummary};
use crate::identity::UserIdentity;
use crate::logging::Logger;
use crate::state::{Clock, ClockDisplay, StatusMessage, SystemClock, Transition, WindowViewState};
use crate::timer::{noop_waker, RecurringTimer, TimerEvent, Waker};

/// Title of the dialog shown when an action fails.
pub const ERROR_DIALOG_TITLE: &str = "Error";

thread_local! {
    static IN_HANDLER_BOUNDARY: Cell<bool> = const { Cell::new(false) };
}

/// True while a feature handler runs inside the action boundary on this thread.
///
/// A panic raised there is caught and reported by the boundary itself.
pub fn inside_handler_boundary() -> bool {
    IN_HANDLER_BOUNDARY.with(Cell::get)
}

/// What happened to a dispatched action.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The action ran and its success status is shown
    Completed,
    /// The action failed; the error was logged, shown and put in the status line
    Failed(ActionError),
    /// The window is closed and no longer accepts actions
    Ignored,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }
}

/// Assembles a [`ShellController`].
///
/// Only the logger is mandatory; everything else defaults to the production
/// choice (environment user, demo features, native dialogs, system clock,
/// one-second timer).
pub struct ControllerBuilder {
    logger: Arc<Logger>,
    user: Option<UserIdentity>,
    features: Option<FeatureRegistry>,
    dialogs: Option<Box<dyn DialogPresenter>>,
    clock: Option<Box<dyn Clock>>,
    clock_interval: Duration,
    waker: Waker,
}

impl ControllerBuilder {
    pub fn user(mut self, user: UserIdentity) -> Self {
        self.user = Some(user);
        self
    }

    pub fn features(mut self, features: FeatureRegistry) -> Self {
        self.features = Some(features);
        self
    }

    pub fn dialogs(mut self, dialogs: impl DialogPresenter + 'static) -> Self {
        self.dialogs = Some(Box::new(dialogs));
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn clock_interval(mut self, interval: Duration) -> Self {
        self.clock_interval = interval;
        self
    }

    /// Called by the timer thread after each tick is queued.
    pub fn waker(mut self, waker: Waker) -> Self {
        self.waker = waker;
        self
    }

    /// Builds the controller and starts its timer.
    pub fn build(self) -> ShellController {
        let user = self.user.unwrap_or_else(UserIdentity::from_env);
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let clock_display = ClockDisplay::from_time(&clock.now());

        let (sender, ticks) = channel();
        let timer = timer_or_idle(
            &self.logger,
            self.clock_interval,
            RecurringTimer::start(self.clock_interval, sender, self.waker),
        );

        let controller = ShellController {
            view: WindowViewState::default(),
            status: StatusMessage::new(),
            clock_display,
            user,
            features: self.features.unwrap_or_else(FeatureRegistry::demo),
            dialogs: self.dialogs.unwrap_or_else(|| Box::new(NativeDialogs)),
            clock,
            logger: self.logger,
            timer,
            ticks,
            closed: false,
        };

        controller.logger.scope(|| {
            tracing::info!(
                user = %controller.user.display_name(),
                interval_ms = controller.timer.interval().as_millis() as u64,
                timer_running = controller.timer.is_running(),
                "main window initialized"
            )
        });

        controller
    }
}

/// Falls back to an idle timer when the timer thread could not be spawned.
///
/// The window still works; only the clock stops updating.
fn timer_or_idle(
    logger: &Logger,
    interval: Duration,
    started: io::Result<RecurringTimer>,
) -> RecurringTimer {
    started.unwrap_or_else(|err| {
        logger.scope(|| {
            tracing::warn!(error = %err, "clock timer could not be started, the clock will not update")
        });
        RecurringTimer::idle(interval)
    })
}

/// State and behaviour of the single shell window.
pub struct ShellController {
    view: WindowViewState,
    status: StatusMessage,
    clock_display: ClockDisplay,
    user: UserIdentity,
    features: FeatureRegistry,
    dialogs: Box<dyn DialogPresenter>,
    clock: Box<dyn Clock>,
    logger: Arc<Logger>,
    timer: RecurringTimer,
    ticks: Receiver<TimerEvent>,
    closed: bool,
}

impl ShellController {
    pub fn builder(logger: Arc<Logger>) -> ControllerBuilder {
        ControllerBuilder {
            logger,
            user: None,
            features: None,
            dialogs: None,
            clock: None,
            clock_interval: Duration::from_secs(1),
            waker: noop_waker(),
        }
    }

    // ===== Queries =====

    pub fn view(&self) -> WindowViewState {
        self.view
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn clock_text(&self) -> &str {
        self.clock_display.text()
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn clock_interval(&self) -> Duration {
        self.timer.interval()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // ===== Timer =====

    /// Consumes queued timer ticks and refreshes the clock once if any arrived.
    ///
    /// Returns the number of ticks consumed.
    pub fn pump_timer(&mut self) -> usize {
        if self.closed {
            return 0;
        }
        let ticks = self.ticks.try_iter().count();
        if ticks > 0 {
            self.refresh_clock();
        }
        ticks
    }

    /// Recomputes the clock text from the clock source. Returns true if it changed.
    pub fn refresh_clock(&mut self) -> bool {
        let now = self.clock.now();
        self.clock_display.refresh(&now)
    }

    // ===== Actions =====

    /// Runs one user action inside the handler boundary.
    ///
    /// Failures never escape: they are logged with the action name, written
    /// to the status line and shown in an error dialog.
    pub fn dispatch(&mut self, action: ShellAction) -> ActionOutcome {
        if self.closed {
            self.logger
                .scope(|| tracing::warn!(action = %action, "action ignored after window close"));
            return ActionOutcome::Ignored;
        }

        self.logger.scope(|| tracing::info!(action = %action, "handling action"));

        match self.run_action(action) {
            Ok((summary, transition)) => {
                let status = match (transition, action.unchanged_status()) {
                    (Some(Transition::Unchanged(_)), Some(unchanged)) => unchanged,
                    _ => action.success_status(),
                };
                self.status.set_success(status);
                if let Some(summary) = summary {
                    self.dialogs.show_info(&summary.title, &summary.body);
                }
                ActionOutcome::Completed
            }
            Err(err) => {
                self.logger.scope(|| {
                    tracing::error!(action = %action, error = %err, "action failed")
                });
                self.status.set_error(action.error_status(&err));
                self.dialogs
                    .show_error(ERROR_DIALOG_TITLE, &format!("Error: {err}"));
                ActionOutcome::Failed(err)
            }
        }
    }

    fn run_action(
        &mut self,
        action: ShellAction,
    ) -> Result<(Option<FeatureSummary>, Option<Transition>), ActionError> {
        let summary = match action.feature() {
            Some(kind) => Some(self.summarize(kind)?),
            None => None,
        };

        let transition = match action {
            ShellAction::LaunchToolPanel => Some(self.view.activate_tool_panel()),
            ShellAction::CloseToolPanel => Some(self.view.close_tool_panel()),
            _ => None,
        };

        if let Some(Transition::Changed { from, to }) = transition {
            self.logger
                .scope(|| tracing::info!(from = %from, to = %to, "view state changed"));
        }

        Ok((summary, transition))
    }

    /// Asks the feature registry for a summary, converting a handler panic into an error.
    fn summarize(&self, kind: FeatureKind) -> Result<FeatureSummary, ActionError> {
        let ctx = FeatureContext {
            user_name: self.user.display_name(),
            now: self.clock.now(),
        };

        let previous = IN_HANDLER_BOUNDARY.with(|flag| flag.replace(true));
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.features.summarize(kind, &ctx)));
        IN_HANDLER_BOUNDARY.with(|flag| flag.set(previous));

        result.unwrap_or_else(|payload| Err(ActionError::failed(panic_message(payload.as_ref()))))
    }

    // ===== Teardown =====

    /// Stops the timer and marks the window closed. Only the first call has any effect.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        self.timer.stop();
        // Discard ticks queued before the timer thread exited.
        let _ = self.ticks.try_iter().count();
        self.logger.scope(|| tracing::info!("main window closed"));
        true
    }
}

impl Drop for ShellController {
    fn drop(&mut self) {
        self.close();
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("handler panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("handler panicked: {message}")
    } else {
        "handler panicked".to_string()
    }
}
