use super::*;
use crate::conn_warn;

/// Releases immediately, without draining anything first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuickCloser;

impl QuickCloser {
    pub const MARKER: &'static str = "quick close";
}

impl Closer for QuickCloser {
    fn close(&self) -> Result<(), CloseError> {
        emit(Self::MARKER).map_err(|e| {
            conn_warn!("QuickCloser: marker write failed: {e}");
            CloseError::Io(e)
        })
    }
}

/// Graceful release strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SafeCloser;

impl SafeCloser {
    pub const MARKER: &'static str = "safe close";
}

impl Closer for SafeCloser {
    fn close(&self) -> Result<(), CloseError> {
        emit(Self::MARKER).map_err(|e| {
            conn_warn!("SafeCloser: marker write failed: {e}");
            CloseError::Io(e)
        })
    }
}
