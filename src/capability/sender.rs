use super::*;
use crate::{conn_debug, conn_warn};

/// Stand-in for a stream transport. Does not touch the network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TcpSender;

impl TcpSender {
    pub const MARKER: &'static str = "tcp send";
}

impl Sender for TcpSender {
    fn send(&self, buf: &[u8]) -> Result<(), SendError> {
        conn_debug!("TcpSender: {} B", buf.len());
        emit(Self::MARKER).map_err(|e| {
            conn_warn!("TcpSender: marker write failed: {e}");
            SendError::Io(e)
        })
    }
}

/// Stand-in for a datagram transport. Does not touch the network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UdpSender;

impl UdpSender {
    pub const MARKER: &'static str = "udp send";
}

impl Sender for UdpSender {
    fn send(&self, buf: &[u8]) -> Result<(), SendError> {
        conn_debug!("UdpSender: {} B", buf.len());
        emit(Self::MARKER).map_err(|e| {
            conn_warn!("UdpSender: marker write failed: {e}");
            SendError::Io(e)
        })
    }
}
