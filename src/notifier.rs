//! Desktop notifications behind a permission gate.

use notify_rust::{Notification, Urgency};
use std::{path::Path, process::{Command, Stdio}};

use crate::error::NotifyError;

const APP_NAME: &str = "pranahuti";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

pub trait Notifier {
    /// Asked once; implementations cache the answer.
    fn request_permission(&mut self) -> Permission;

    fn notify(&mut self, title: &str, body: &str) -> Result<(), NotifyError>;

    /// Completion sound. Independent of notification permission.
    fn bell(&mut self);
}

pub struct DesktopNotifier {
    allowed: bool,
    permission: Option<Permission>,
}

impl DesktopNotifier {
    pub fn new(allowed: bool) -> Self {
        Self { allowed, permission: None }
    }
}

impl Notifier for DesktopNotifier {
    fn request_permission(&mut self) -> Permission {
        *self.permission.get_or_insert_with(|| {
            let permission = if self.allowed { Permission::Granted } else { Permission::Denied };
            tracing::info!(?permission, "notification permission resolved");
            permission
        })
    }

    fn notify(&mut self, title: &str, body: &str) -> Result<(), NotifyError> {
        if self.request_permission() == Permission::Denied {
            return Err(NotifyError::PermissionDenied);
        }

        Notification::new()
            .summary(title)
            .body(body)
            .appname(APP_NAME)
            .icon("alarm-clock")
            .urgency(Urgency::Normal)
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::Delivery(e.to_string()))
    }

    fn bell(&mut self) {
        play_bell();
    }
}

/// Best effort; the first sound file found on the system wins.
fn play_bell() {
    std::thread::spawn(|| {
        for (cmd, file) in [
            ("paplay", "/usr/share/sounds/freedesktop/stereo/bell.oga"),
            ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
            ("aplay", "/usr/share/sounds/generic.wav"),
        ] {
            if Path::new(file).exists() {
                if let Err(e) = Command::new(cmd).arg(file).stdout(Stdio::null()).stderr(Stdio::null()).spawn() {
                    tracing::debug!(cmd, error = %e, "bell player unavailable");
                }
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_notifier_denies_without_touching_the_desktop() {
        let mut notifier = DesktopNotifier::new(false);
        assert_eq!(notifier.request_permission(), Permission::Denied);
        assert_eq!(notifier.notify("t", "b"), Err(NotifyError::PermissionDenied));
    }

    #[test]
    fn permission_is_cached_after_first_request() {
        let mut notifier = DesktopNotifier::new(true);
        assert_eq!(notifier.request_permission(), Permission::Granted);
        notifier.allowed = false;
        assert_eq!(notifier.request_permission(), Permission::Granted);
    }
}
