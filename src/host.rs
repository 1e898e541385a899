//! Application host: process-wide setup, dependency wiring and teardown.
//!
//! The host owns a [`ServiceRegistry`] holding the singleton [`Logger`] and a
//! transient window factory. It is started once by `main`, hands out window
//! controllers, and releases everything on [`ApplicationHost::stop`] or drop.

use std::sync::Arc;

use crate::config::ShellConfig;
use crate::controller::{inside_handler_boundary, ShellController};
use crate::error::ShellError;
use crate::logging::Logger;
use crate::timer::Waker;

/// Dependencies available to the window factory.
pub struct WindowServices<'a> {
    pub logger: Arc<Logger>,
    pub config: &'a ShellConfig,
    pub waker: Waker,
}

/// Builds a fresh window controller on every call.
pub type WindowFactory = Box<dyn Fn(WindowServices<'_>) -> ShellController>;

/// Production window: environment user, demo features, native dialogs, system clock.
pub fn default_window_factory() -> WindowFactory {
    Box::new(|services: WindowServices<'_>| {
        ShellController::builder(services.logger)
            .clock_interval(services.config.clock_interval)
            .waker(services.waker)
            .build()
    })
}

/// Registered services: a singleton logger and a transient window factory.
pub struct ServiceRegistry {
    logger: Arc<Logger>,
    window_factory: WindowFactory,
}

impl ServiceRegistry {
    pub fn new(logger: Arc<Logger>, window_factory: WindowFactory) -> Self {
        Self {
            logger,
            window_factory,
        }
    }

    /// The shared logger. Every call returns the same instance.
    pub fn logger(&self) -> Arc<Logger> {
        Arc::clone(&self.logger)
    }

    /// Constructs a new window controller.
    pub fn resolve_window(&self, config: &ShellConfig, waker: Waker) -> ShellController {
        (self.window_factory)(WindowServices {
            logger: self.logger(),
            config,
            waker,
        })
    }
}

/// Configures the host before it starts.
pub struct HostBuilder {
    config: ShellConfig,
    window_factory: WindowFactory,
}

impl HostBuilder {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            window_factory: default_window_factory(),
        }
    }

    /// Replaces the window factory, e.g. to inject test dialogs or clocks.
    pub fn with_window_factory(mut self, factory: WindowFactory) -> Self {
        self.window_factory = factory;
        self
    }

    /// Configures the file logger, builds the registry and starts the host.
    pub fn start(self) -> Result<ApplicationHost, ShellError> {
        let logger = Arc::new(Logger::to_daily_file(&self.config.log)?);
        let registry = ServiceRegistry::new(Arc::clone(&logger), self.window_factory);

        logger.scope(|| {
            tracing::info!(
                log_dir = %self.config.log.directory.display(),
                level = %self.config.log.level,
                "application host started"
            )
        });

        Ok(ApplicationHost {
            config: self.config,
            registry: Some(registry),
            logger,
        })
    }
}

/// Owns the service registry and its lifecycle.
pub struct ApplicationHost {
    config: ShellConfig,
    /// `None` once the host has been stopped
    registry: Option<ServiceRegistry>,
    logger: Arc<Logger>,
}

impl ApplicationHost {
    /// Starts a host with the default window factory.
    pub fn start(config: ShellConfig) -> Result<Self, ShellError> {
        HostBuilder::new(config).start()
    }

    pub fn builder(config: ShellConfig) -> HostBuilder {
        HostBuilder::new(config)
    }

    pub fn is_running(&self) -> bool {
        self.registry.is_some()
    }

    /// Builds a new main window controller.
    pub fn resolve_window(&self, waker: Waker) -> Result<ShellController, ShellError> {
        let registry = self.registry.as_ref().ok_or(ShellError::HostStopped)?;
        Ok(registry.resolve_window(&self.config, waker))
    }

    /// Logs panics through the host logger before the previous hook runs.
    ///
    /// The hook holds a weak reference, so it stops logging once the host is gone.
    /// Panics raised by a feature handler are left to the action boundary, which
    /// catches and reports them.
    pub fn install_panic_hook(&self) {
        let logger = Arc::downgrade(&self.logger);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if inside_handler_boundary() {
                return;
            }
            if let Some(logger) = logger.upgrade() {
                logger.scope(|| tracing::error!(panic = %info, "unhandled panic"));
            }
            previous(info);
        }));
    }

    /// Disposes the registry, then flushes and closes the logger.
    ///
    /// Returns false if the host was already stopped.
    pub fn stop(&mut self) -> bool {
        let Some(registry) = self.registry.take() else {
            return false;
        };
        drop(registry);
        self.logger.scope(|| tracing::info!("application host stopped"));
        self.logger.shutdown();
        true
    }
}

impl Drop for ApplicationHost {
    fn drop(&mut self) {
        self.stop();
    }
}
