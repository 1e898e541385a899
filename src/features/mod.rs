//! Feature capabilities reachable from the shell.
//!
//! Each user-facing feature is a [`Capability`]: either bound to a
//! [`FeatureHandler`] or explicitly not implemented. The controller only talks
//! to the registry, so new handlers can be plugged in without touching it.

mod demo;

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Local};

use crate::error::ActionError;

pub use demo::{AuditLogDemo, ChatDemo, SecurityDemo, SettingsDemo, ToolPanelDemo};

/// Features the shell knows how to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    ToolPanel,
    Chat,
    Settings,
    Security,
    AuditLogs,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 5] = [
        FeatureKind::ToolPanel,
        FeatureKind::Chat,
        FeatureKind::Settings,
        FeatureKind::Security,
        FeatureKind::AuditLogs,
    ];

    /// Human-readable feature name.
    pub fn label(self) -> &'static str {
        match self {
            FeatureKind::ToolPanel => "Tool panel",
            FeatureKind::Chat => "AI chat",
            FeatureKind::Settings => "Settings",
            FeatureKind::Security => "Security status",
            FeatureKind::AuditLogs => "Audit logs",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs available to a handler while it builds its summary.
#[derive(Debug, Clone)]
pub struct FeatureContext<'a> {
    /// Display name of the current user
    pub user_name: &'a str,
    /// Wall-clock time at invocation
    pub now: DateTime<Local>,
}

/// Text presented to the user after a feature runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSummary {
    pub title: String,
    pub body: String,
}

impl FeatureSummary {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Backing logic for a feature.
pub trait FeatureHandler {
    /// Produces the summary shown once the feature has been invoked.
    fn summary(&self, ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError>;
}

/// Whether a feature has a handler in this build.
pub enum Capability {
    NotImplemented,
    Implemented(Box<dyn FeatureHandler>),
}

impl Capability {
    pub fn is_implemented(&self) -> bool {
        matches!(self, Capability::Implemented(_))
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::NotImplemented => f.write_str("NotImplemented"),
            Capability::Implemented(_) => f.write_str("Implemented(..)"),
        }
    }
}

const NOT_IMPLEMENTED: &Capability = &Capability::NotImplemented;

/// Maps every [`FeatureKind`] to its capability.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    capabilities: HashMap<FeatureKind, Capability>,
}

impl FeatureRegistry {
    /// A registry where nothing is implemented.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry bound to the illustrative demo summaries.
    pub fn demo() -> Self {
        let mut registry = Self::empty();
        registry.register(FeatureKind::ToolPanel, ToolPanelDemo);
        registry.register(FeatureKind::Chat, ChatDemo);
        registry.register(FeatureKind::Settings, SettingsDemo);
        registry.register(FeatureKind::Security, SecurityDemo);
        registry.register(FeatureKind::AuditLogs, AuditLogDemo);
        registry
    }

    /// Binds `handler` to `kind`, replacing any previous binding.
    pub fn register(&mut self, kind: FeatureKind, handler: impl FeatureHandler + 'static) -> &mut Self {
        self.capabilities
            .insert(kind, Capability::Implemented(Box::new(handler)));
        self
    }

    /// Marks `kind` as not implemented.
    pub fn unregister(&mut self, kind: FeatureKind) -> &mut Self {
        self.capabilities.remove(&kind);
        self
    }

    /// Returns the capability bound to `kind`.
    pub fn capability(&self, kind: FeatureKind) -> &Capability {
        self.capabilities
            .get(&kind)
            .unwrap_or(NOT_IMPLEMENTED)
    }

    /// Runs the handler for `kind`, or reports that it is missing.
    pub fn summarize(&self, kind: FeatureKind, ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError> {
        match self.capability(kind) {
            Capability::Implemented(handler) => handler.summary(ctx),
            Capability::NotImplemented => Err(ActionError::NotImplemented(kind)),
        }
    }
}
