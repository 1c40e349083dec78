use std::sync::Arc;

use crate::capability::{CloseError, Closer, QuickCloser, SafeCloser, Sender, TcpSender, UdpSender};
use crate::connection::{AbstractConnection, GrpcConnection};
use crate::{conn_debug, conn_info};

/// Closes anything closable. Knows nothing else about `conn`.
pub fn close_conn<C: Closer + ?Sized>(conn: &C) -> Result<(), CloseError> {
    conn_debug!("close_conn: closing through the Closer capability only");
    conn.close()
}

/// Builds the three sample connections and drives them once.
///
/// Results are dropped on purpose, nothing here reacts to a failure.
pub fn run() {
    let packet: [u8; 3] = [1, 2, 3];
    conn_info!("Playground start, packet of {} B", packet.len());

    let conn_tcp = AbstractConnection::new(Arc::new(TcpSender), Arc::new(QuickCloser));
    let _ = conn_tcp.send(&packet);
    let _ = conn_tcp.close();

    let conn_udp = AbstractConnection::new(Arc::new(UdpSender), Arc::new(SafeCloser));
    let _ = conn_udp.send(&packet);
    let _ = conn_udp.close();

    let grpc_conn = GrpcConnection::new(Arc::new(TcpSender), Arc::new(QuickCloser));

    let _ = close_conn(&conn_tcp);
    let _ = close_conn(&conn_udp);
    let _ = close_conn(&grpc_conn);

    conn_info!("Playground done");
}
