pub mod closer;
pub mod error;
pub mod sender;

use std::io::{self, Write};

pub use closer::{QuickCloser, SafeCloser};
pub use error::{CloseError, ConfigError, SendError};
pub use sender::{TcpSender, UdpSender};

/// Something that can push a byte buffer somewhere.
pub trait Sender {
    fn send(&self, buf: &[u8]) -> Result<(), SendError>;
}

/// Something that can be released.
pub trait Closer {
    fn close(&self) -> Result<(), CloseError>;
}

/// Full connection surface: anything that can both send and close.
///
/// There is no need to implement this by hand, every `Sender + Closer`
/// picks it up through the blanket impl below.
pub trait Connection: Sender + Closer {}

impl<T: Sender + Closer + ?Sized> Connection for T {}

/// Writes one marker line to stdout.
pub(crate) fn emit(marker: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{marker}")?;
    out.flush()
}
