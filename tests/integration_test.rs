use aienv_container::{
    ActionError, ActionOutcome, ApplicationHost, DialogPresenter, FeatureContext, FeatureHandler,
    FeatureKind, FeatureRegistry, FeatureSummary, LogConfig, ManualClock, ShellAction,
    ShellConfig, UserIdentity, WindowServices, WindowViewState, ShellController,
};
use aienv_container::timer::noop_waker;
use anyhow::Result;
use chrono::{Local, TimeDelta, TimeZone};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Default)]
struct RecordingDialogs {
    info: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl DialogPresenter for RecordingDialogs {
    fn show_info(&self, title: &str, _body: &str) {
        self.info.borrow_mut().push(title.to_string());
    }

    fn show_error(&self, _title: &str, body: &str) {
        self.errors.borrow_mut().push(body.to_string());
    }
}

struct OfflineAuditStore;

struct CrashingChat;

impl FeatureHandler for CrashingChat {
    fn summary(&self, _ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError> {
        panic!("chat model crashed");
    }
}

impl FeatureHandler for OfflineAuditStore {
    fn summary(&self, _ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError> {
        Err(ActionError::failed("audit store offline"))
    }
}

fn config_in(dir: &Path, interval: Duration) -> ShellConfig {
    ShellConfig {
        log: LogConfig {
            directory: dir.join("logs"),
            file_prefix: "aienv-container".to_string(),
            level: tracing::Level::INFO,
        },
        clock_interval: interval,
        ..ShellConfig::default()
    }
}

/// Starts a host whose windows record dialogs and read the given clock.
fn start_host(
    dir: &Path,
    interval: Duration,
    dialogs: RecordingDialogs,
    clock: ManualClock,
    features: fn() -> FeatureRegistry,
) -> Result<ApplicationHost> {
    let host = ApplicationHost::builder(config_in(dir, interval))
        .with_window_factory(Box::new(move |services: WindowServices<'_>| {
            ShellController::builder(services.logger)
                .user(UserIdentity::new("integration"))
                .features(features())
                .dialogs(dialogs.clone())
                .clock(clock.clone())
                .clock_interval(services.config.clock_interval)
                .waker(services.waker)
                .build()
        }))
        .start()?;
    Ok(host)
}

fn read_logs(dir: &Path) -> Result<String> {
    let mut text = String::new();
    for entry in std::fs::read_dir(dir.join("logs"))? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        assert!(name.starts_with("aienv-container."), "unexpected log file {name}");
        text.push_str(&std::fs::read_to_string(entry.path())?);
    }
    Ok(text)
}

fn noon() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap()
}

#[test]
fn test_launch_scenario() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let dialogs = RecordingDialogs::default();
    let host = start_host(
        dir.path(),
        Duration::from_secs(3600),
        dialogs.clone(),
        ManualClock::new(noon()),
        FeatureRegistry::demo,
    )?;

    let mut window = host.resolve_window(noop_waker())?;
    assert_eq!(window.status().text(), "Ready");

    assert!(window.dispatch(ShellAction::LaunchToolPanel).is_completed());
    assert_eq!(window.view(), WindowViewState::ToolPanelActive);
    assert!(window.view().tool_panel_visible());
    assert!(!window.view().welcome_visible());
    assert!(window.status().text().contains("success"));

    // Launching again changes nothing about the view.
    assert!(window.dispatch(ShellAction::LaunchToolPanel).is_completed());
    assert_eq!(window.view(), WindowViewState::ToolPanelActive);
    assert_eq!(dialogs.info.borrow().len(), 2);

    Ok(())
}

#[test]
fn test_simulated_clock_advances() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let clock = ManualClock::new(noon());
    let host = start_host(
        dir.path(),
        Duration::from_secs(3600),
        RecordingDialogs::default(),
        clock.clone(),
        FeatureRegistry::demo,
    )?;
    let mut window = host.resolve_window(noop_waker())?;

    let mut seen = vec![window.clock_text().to_string()];
    for _ in 0..3 {
        clock.advance(TimeDelta::seconds(1));
        window.refresh_clock();
        if seen.last().map(String::as_str) != Some(window.clock_text()) {
            seen.push(window.clock_text().to_string());
        }
    }

    assert!(seen.len() >= 3, "clock changed fewer than twice: {seen:?}");
    let expected = (noon() + TimeDelta::seconds(3)).format("%H:%M:%S").to_string();
    assert_eq!(window.clock_text(), expected);

    Ok(())
}

#[test]
fn test_close_silences_timer_and_host_flushes_logs() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut host = start_host(
        dir.path(),
        Duration::from_millis(10),
        RecordingDialogs::default(),
        ManualClock::new(noon()),
        FeatureRegistry::demo,
    )?;
    let mut window = host.resolve_window(noop_waker())?;

    let mut ticks = 0;
    for _ in 0..200 {
        ticks += window.pump_timer();
        if ticks > 0 {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(ticks > 0, "timer never ticked");

    window.dispatch(ShellAction::ShowSecurity);
    assert!(window.close());
    assert!(!window.timer_running());

    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(window.pump_timer(), 0);

    drop(window);
    assert!(host.stop());

    let logs = read_logs(dir.path())?;
    assert!(logs.contains("application host started"));
    assert!(logs.contains("main window initialized"));
    assert!(logs.contains("show_security"));
    assert!(logs.contains("main window closed"));
    assert!(logs.contains("application host stopped"));

    Ok(())
}

#[test]
fn test_injected_failure_keeps_window_operable() -> Result<()> {
    fn features() -> FeatureRegistry {
        let mut registry = FeatureRegistry::demo();
        registry.register(FeatureKind::AuditLogs, OfflineAuditStore);
        registry
    }

    let dir = tempfile::tempdir()?;
    let dialogs = RecordingDialogs::default();
    let mut host = start_host(
        dir.path(),
        Duration::from_secs(3600),
        dialogs.clone(),
        ManualClock::new(noon()),
        features,
    )?;
    let mut window = host.resolve_window(noop_waker())?;

    let outcome = window.dispatch(ShellAction::ShowAuditLogs);
    assert!(matches!(outcome, ActionOutcome::Failed(_)));
    assert!(window.status().is_error());
    assert!(window.status().text().contains("Audit Logs"));
    assert_eq!(*dialogs.errors.borrow(), vec!["Error: audit store offline".to_string()]);
    assert!(!window.is_closed());

    for action in [
        ShellAction::ShowChat,
        ShellAction::ShowSettings,
        ShellAction::ShowSecurity,
        ShellAction::LaunchToolPanel,
        ShellAction::CloseToolPanel,
    ] {
        assert!(window.dispatch(action).is_completed(), "{action} failed");
        assert_eq!(window.status().text(), action.success_status());
    }

    drop(window);
    host.stop();

    let logs = read_logs(dir.path())?;
    let error_line = logs
        .lines()
        .find(|line| line.contains("ERROR"))
        .expect("an error entry was logged");
    assert!(error_line.contains("show_audit_logs"));
    assert!(error_line.contains("audit store offline"));

    Ok(())
}

#[test]
fn test_panic_hook_and_unwinding_release_the_host() -> Result<()> {
    fn features() -> FeatureRegistry {
        let mut registry = FeatureRegistry::demo();
        registry.register(FeatureKind::Chat, CrashingChat);
        registry
    }

    let dir = tempfile::tempdir()?;
    let host = start_host(
        dir.path(),
        Duration::from_secs(3600),
        RecordingDialogs::default(),
        ManualClock::new(noon()),
        features,
    )?;
    host.install_panic_hook();
    let mut window = host.resolve_window(noop_waker())?;

    // A handler panic is contained by the action boundary and not reported by the hook.
    let outcome = window.dispatch(ShellAction::ShowChat);
    assert!(matches!(outcome, ActionOutcome::Failed(_)));
    assert!(window.status().is_error());

    let crashed = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
        let _host = host;
        let _window = window;
        panic!("ui crashed");
    }));
    assert!(crashed.is_err());

    let logs = read_logs(dir.path())?;
    assert!(logs.contains("action failed"));
    assert!(logs.contains("chat model crashed"));
    assert_eq!(logs.matches("unhandled panic").count(), 1);

    let position = |needle: &str| logs.find(needle).unwrap_or_else(|| panic!("missing {needle:?}"));
    let panicked = position("unhandled panic");
    let closed = position("main window closed");
    let stopped = position("application host stopped");
    assert!(logs[panicked..].contains("ui crashed"));
    assert!(panicked < closed && closed < stopped);

    Ok(())
}
