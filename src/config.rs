use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::capability::{
    Closer, ConfigError, QuickCloser, SafeCloser, Sender, TcpSender, UdpSender,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderKind {
    #[default]
    Tcp,
    Udp,
}

impl SenderKind {
    pub fn build(self) -> Arc<dyn Sender> {
        match self {
            SenderKind::Tcp => Arc::new(TcpSender),
            SenderKind::Udp => Arc::new(UdpSender),
        }
    }
}

impl FromStr for SenderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tcp" => Ok(SenderKind::Tcp),
            "udp" => Ok(SenderKind::Udp),
            _ => Err(ConfigError::UnknownSender(s.to_string())),
        }
    }
}

impl fmt::Display for SenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderKind::Tcp => write!(f, "tcp"),
            SenderKind::Udp => write!(f, "udp"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloserKind {
    #[default]
    Quick,
    Safe,
}

impl CloserKind {
    pub fn build(self) -> Arc<dyn Closer> {
        match self {
            CloserKind::Quick => Arc::new(QuickCloser),
            CloserKind::Safe => Arc::new(SafeCloser),
        }
    }
}

impl FromStr for CloserKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(CloserKind::Quick),
            "safe" => Ok(CloserKind::Safe),
            _ => Err(ConfigError::UnknownCloser(s.to_string())),
        }
    }
}

impl fmt::Display for CloserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloserKind::Quick => write!(f, "quick"),
            CloserKind::Safe => write!(f, "safe"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConnectionConfig {
    pub sender: SenderKind,
    pub closer: CloserKind,
}

impl ConnectionConfig {
    pub fn new(sender: SenderKind, closer: CloserKind) -> Self {
        Self { sender, closer }
    }

    pub fn with_sender(mut self, sender: SenderKind) -> Self {
        self.sender = sender;
        self
    }

    pub fn with_closer(mut self, closer: CloserKind) -> Self {
        self.closer = closer;
        self
    }

    pub fn sender(&self) -> SenderKind {
        self.sender
    }

    pub fn closer(&self) -> CloserKind {
        self.closer
    }
}
