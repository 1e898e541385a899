pub mod actions;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod error;
pub mod features;
pub mod host;
pub mod identity;
pub mod logging;
pub mod state;
pub mod timer;

// Export lifecycle
pub use host::{ApplicationHost, HostBuilder, ServiceRegistry, WindowFactory, WindowServices, default_window_factory};
pub use config::{LogConfig, ShellConfig, WindowConfig};
pub use logging::{Logger, MemorySink};
pub use error::{ActionError, ShellError};

// Export window controller
pub use controller::{ActionOutcome, ControllerBuilder, ShellController};
pub use actions::ShellAction;
pub use state::{Clock, ClockDisplay, ManualClock, StatusMessage, SystemClock, WindowViewState};
pub use identity::UserIdentity;
pub use timer::{RecurringTimer, TimerEvent, Waker};

// Export feature capabilities
pub use features::{Capability, FeatureContext, FeatureHandler, FeatureKind, FeatureRegistry, FeatureSummary};
pub use dialogs::{DialogPresenter, NativeDialogs};
