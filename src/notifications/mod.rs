//! Desktop notification permission flow.
//!
//! The OS permission request is the one asynchronous operation in the
//! crate: a single-shot future resolving to one of three outcomes, with
//! no cancellation, no timeout, and no automatic retries. The only way
//! the user gets asked again after dismissing the dialog is the
//! [`PermissionPrompt::AskAgain`] UI path.

use futures::future::BoxFuture;

/// Result of an OS notification permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    /// The user granted permission; notifications will be delivered.
    Granted,
    /// The user explicitly denied permission.
    Denied,
    /// The dialog was dismissed without a choice. Maybe by mistake?
    Dismissed,
}

impl PermissionOutcome {
    /// The UI prompt to surface for this outcome, if any.
    pub fn prompt(self) -> Option<PermissionPrompt> {
        match self {
            PermissionOutcome::Granted => None,
            PermissionOutcome::Denied => Some(PermissionPrompt::Blocked),
            PermissionOutcome::Dismissed => Some(PermissionPrompt::AskAgain),
        }
    }
}

/// Non-blocking UI surfaces for a resolved permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionPrompt {
    /// Dialog dismissed without a choice; give the user another chance.
    AskAgain,
    /// Permission denied. Can't do anything except inform the user.
    Blocked,
}

/// Platform seam for desktop notifications.
///
/// `is_supported` is the capability probe: when it returns false the
/// preferences manager forces the notifications control unchecked and
/// disabled on load and never issues a permission request.
pub trait NotificationBackend {
    /// Whether the runtime supports desktop notifications at all.
    fn is_supported(&self) -> bool;

    /// Ask the OS for notification permission.
    ///
    /// Only called after the user explicitly saved settings with the
    /// notifications control checked, never on a silent load.
    fn request_permission(&self) -> BoxFuture<'static, PermissionOutcome>;
}

/// Backend for runtimes without desktop notification support.
///
/// `request_permission` resolves to [`PermissionOutcome::Denied`] as a
/// safety net, but the manager never calls it: an unsupported backend
/// keeps the control unchecked and disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedBackend;

impl NotificationBackend for UnsupportedBackend {
    fn is_supported(&self) -> bool {
        false
    }

    fn request_permission(&self) -> BoxFuture<'static, PermissionOutcome> {
        Box::pin(futures::future::ready(PermissionOutcome::Denied))
    }
}
