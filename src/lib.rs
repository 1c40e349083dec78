pub mod capability;
pub mod config;
pub mod conn_log;
pub mod connection;
pub mod playground;

/* Re-exports */
pub use capability::{
    CloseError, Closer, ConfigError, Connection, QuickCloser, SafeCloser, SendError, Sender,
    TcpSender, UdpSender,
};
pub use config::{CloserKind, ConnectionConfig, SenderKind};
pub use connection::{AbstractConnection, GrpcConnection};
pub use playground::close_conn;
