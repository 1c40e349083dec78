use std::fmt;
use std::sync::Arc;

use crate::capability::{CloseError, Closer, SendError, Sender, TcpSender};
use crate::config::ConnectionConfig;
use crate::conn_debug;

/// A connection assembled from one sender and one closer.
///
/// Both parts are shared handles: the connection delegates to exactly the
/// instances it was built with and never clones them.
#[derive(Clone)]
pub struct AbstractConnection {
    sender: Arc<dyn Sender>,
    closer: Arc<dyn Closer>,
}

impl AbstractConnection {
    pub fn new(sender: Arc<dyn Sender>, closer: Arc<dyn Closer>) -> Self {
        Self { sender, closer }
    }

    pub fn from_config(cfg: &ConnectionConfig) -> Self {
        conn_debug!("Building connection: sender={}, closer={}", cfg.sender(), cfg.closer());
        Self::new(cfg.sender().build(), cfg.closer().build())
    }

    #[inline] pub fn sender(&self) -> &Arc<dyn Sender> { &self.sender }
    #[inline] pub fn closer(&self) -> &Arc<dyn Closer> { &self.closer }
}

impl Sender for AbstractConnection {
    fn send(&self, buf: &[u8]) -> Result<(), SendError> {
        conn_debug!("AbstractConnection: forwarding send of {} B", buf.len());
        self.sender.send(buf)
    }
}

impl Closer for AbstractConnection {
    fn close(&self) -> Result<(), CloseError> {
        conn_debug!("AbstractConnection: forwarding close");
        self.closer.close()
    }
}

impl fmt::Debug for AbstractConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractConnection").finish_non_exhaustive()
    }
}

/// Connection that carries the concrete [`TcpSender`] rather than a trait
/// object, next to an arbitrary closer.
#[derive(Clone)]
pub struct GrpcConnection {
    tcp: Arc<TcpSender>,
    closer: Arc<dyn Closer>,
}

impl GrpcConnection {
    pub fn new(tcp: Arc<TcpSender>, closer: Arc<dyn Closer>) -> Self {
        Self { tcp, closer }
    }

    #[inline] pub fn tcp(&self) -> &TcpSender { &self.tcp }
}

impl Sender for GrpcConnection {
    fn send(&self, buf: &[u8]) -> Result<(), SendError> {
        conn_debug!("GrpcConnection: forwarding send of {} B to tcp", buf.len());
        self.tcp.send(buf)
    }
}

impl Closer for GrpcConnection {
    fn close(&self) -> Result<(), CloseError> {
        conn_debug!("GrpcConnection: forwarding close");
        self.closer.close()
    }
}

impl fmt::Debug for GrpcConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrpcConnection")
            .field("tcp", &self.tcp)
            .finish_non_exhaustive()
    }
}
