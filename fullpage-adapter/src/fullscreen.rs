use alloc::string::String;

use thiserror::Error;

/// Why a fullscreen request was refused by the host environment.
#[derive(Debug, Error)]
pub enum FullscreenError {
    /// The environment rejected the request (e.g. missing permission or user gesture).
    #[error("fullscreen request rejected: {reason}")]
    Rejected { reason: String },
    /// The environment has no fullscreen capability at all.
    #[error("fullscreen is not supported by this host")]
    Unsupported,
}

/// Host-supplied wrapper over the platform fullscreen API.
///
/// Implementations should return `Err` when the platform refuses; they must not assume the
/// state changed on failure.
pub trait FullscreenDriver {
    fn enter(&mut self) -> Result<(), FullscreenError>;
    fn exit(&mut self) -> Result<(), FullscreenError>;
}

/// Tracks fullscreen on/off across a host driver.
///
/// Rejections are non-fatal: the error is logged, the tracked flag stays where it was, and
/// the caller gets the error back in case it wants to surface it.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullscreenToggle {
    active: bool,
}

impl FullscreenToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.active
    }

    /// Flips fullscreen through `driver`. Returns the new state, or the driver's error
    /// with the tracked state unchanged.
    pub fn toggle(&mut self, driver: &mut dyn FullscreenDriver) -> Result<bool, FullscreenError> {
        let result = if self.active {
            driver.exit()
        } else {
            driver.enter()
        };
        match result {
            Ok(()) => {
                self.active = !self.active;
                fptrace!(active = self.active, "fullscreen toggled");
                Ok(self.active)
            }
            Err(err) => {
                fpwarn!(error = %err, "unable to toggle fullscreen mode");
                Err(err)
            }
        }
    }
}
