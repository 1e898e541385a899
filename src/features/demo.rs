//! Illustrative demo summaries.
//!
//! None of these features exist; the text describes what an integrated build
//! would offer.

use std::fmt::Write;

use chrono::TimeDelta;

use super::{FeatureContext, FeatureHandler, FeatureSummary};
use crate::error::ActionError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_error(what: &'static str) -> impl FnOnce(std::fmt::Error) -> ActionError {
    move |source| ActionError::Format { what, source }
}

/// Banner shown when the tool panel is launched.
pub struct ToolPanelDemo;

impl FeatureHandler for ToolPanelDemo {
    fn summary(&self, _ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError> {
        Ok(FeatureSummary::new(
            "AIEnv Integrated Container",
            "AIEnv Interface Demo\n\n\
             This demonstrates the AIEnv Integrated Container.\n\n\
             Features:\n\
             ✅ Air-gapped security architecture\n\
             ✅ Local operating system authentication\n\
             ✅ BERT AI integration (local processing)\n\
             ✅ Full AIEnv functionality preservation\n\
             ✅ Native container interface\n\n\
             The existing AIEnv tool interface would be\n\
             embedded in the tool panel region.",
        ))
    }
}

/// Local BERT chat overview.
pub struct ChatDemo;

impl FeatureHandler for ChatDemo {
    fn summary(&self, _ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError> {
        Ok(FeatureSummary::new(
            "BERT AI Chat",
            "AI Chat Interface Demo\n\n\
             This demonstrates the local BERT AI chat functionality.\n\n\
             Features:\n\
             🤖 Local BERT model processing\n\
             🔒 Fully offline operation (air-gapped)\n\
             💬 Development-focused assistance\n\
             ⚡ Sub-2-second response times\n\
             🛡️ No cloud dependencies\n\n\
             Model Path: models/bert-base-uncased-mrpc\n\n\
             The AI provides contextual help for:\n\
             • Python scripting\n\
             • Batch file creation\n\
             • PowerShell automation\n\
             • AIEnv environment management\n\
             • Security best practices",
        ))
    }
}

/// Configuration overview.
pub struct SettingsDemo;

impl FeatureHandler for SettingsDemo {
    fn summary(&self, _ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError> {
        Ok(FeatureSummary::new(
            "Settings",
            "Settings Interface Demo\n\n\
             Configuration options include:\n\n\
             Security Settings:\n\
             • Air-gapped mode enforcement\n\
             • Authentication timeout (8 hours)\n\
             • Audit logging level\n\
             • Network isolation monitoring\n\n\
             BERT AI Settings:\n\
             • Model path configuration\n\
             • Response temperature (0.7)\n\
             • Maximum tokens (512)\n\
             • Performance optimization\n\n\
             UI Settings:\n\
             • Theme selection\n\
             • Window layout preferences\n\
             • Status indicator options",
        ))
    }
}

/// Security dashboard.
pub struct SecurityDemo;

impl FeatureHandler for SecurityDemo {
    fn summary(&self, _ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError> {
        Ok(FeatureSummary::new(
            "Security Status",
            "Security Status Dashboard\n\n\
             Current Security Status: ✅ SECURE\n\n\
             Air-Gapped Mode: ✅ ACTIVE\n\
             • No outbound network connections\n\
             • Network activity monitoring enabled\n\
             • Firewall rules enforced\n\n\
             Authentication: ✅ ACTIVE\n\
             • Local operating system authentication\n\
             • No cloud dependencies\n\
             • Session timeout: 8 hours\n\n\
             Data Protection: ✅ ACTIVE\n\
             • AES-256-CBC encryption\n\
             • PBKDF2 key derivation (100k iterations)\n\
             • Secure key management\n\n\
             Audit Logging: ✅ ACTIVE\n\
             • HIPAA-compliant logging\n\
             • Security event tracking\n\
             • 30-day retention policy",
        ))
    }
}

/// Recent security events, stamped relative to the invocation time.
pub struct AuditLogDemo;

impl AuditLogDemo {
    /// (minutes ago, event, description, attributed to the current user)
    const EVENTS: [(i64, &'static str, &'static str, bool); 3] = [
        (0, "APPLICATION_START", "AIEnv Integrated Container started", true),
        (5, "AUTHENTICATION_SUCCESS", "User authentication successful", true),
        (10, "AIRGAP_VALIDATION", "Air-gapped mode validation successful", false),
    ];
}

impl FeatureHandler for AuditLogDemo {
    fn summary(&self, ctx: &FeatureContext<'_>) -> Result<FeatureSummary, ActionError> {
        let mut body = String::from("Audit Logs Viewer Demo\n\nRecent Security Events:\n\n");

        for (minutes_ago, event, description, by_user) in Self::EVENTS {
            let at = ctx.now - TimeDelta::minutes(minutes_ago);
            let user = if by_user { ctx.user_name } else { "System" };
            write!(
                body,
                "[{}] {}\nDescription: {}\nUser: {}\nLevel: Info\n\n",
                at.format(TIMESTAMP_FORMAT),
                event,
                description,
                user
            )
            .map_err(format_error("audit log entry"))?;
        }

        body.push_str("Log Location: logs/audit/\nRetention: 30 days\nFormat: HIPAA-compliant JSON");

        Ok(FeatureSummary::new("Audit Logs", body))
    }
}
