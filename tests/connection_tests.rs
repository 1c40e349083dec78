use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use conn_compose::{
    close_conn, AbstractConnection, CloseError, Closer, Connection, GrpcConnection, QuickCloser,
    SafeCloser, SendError, Sender, TcpSender, UdpSender,
};

type CallLog = Rc<RefCell<Vec<String>>>;

// Records every call instead of printing a marker
struct RecordingSender {
    name: &'static str,
    log: CallLog,
}

impl Sender for RecordingSender {
    fn send(&self, buf: &[u8]) -> Result<(), SendError> {
        self.log.borrow_mut().push(format!("{} send {:?}", self.name, buf));
        Ok(())
    }
}

struct RecordingCloser {
    name: &'static str,
    log: CallLog,
}

impl Closer for RecordingCloser {
    fn close(&self) -> Result<(), CloseError> {
        self.log.borrow_mut().push(format!("{} close", self.name));
        Ok(())
    }
}

struct FailingCloser;

impl Closer for FailingCloser {
    fn close(&self) -> Result<(), CloseError> {
        Err(CloseError::Release { strategy: "failing", reason: "refused".into() })
    }
}

struct FailingSender;

impl Sender for FailingSender {
    fn send(&self, _buf: &[u8]) -> Result<(), SendError> {
        Err(SendError::Transport { transport: "failing", reason: "no route".into() })
    }
}

fn recording_conn(sender: &'static str, closer: &'static str) -> (AbstractConnection, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let conn = AbstractConnection::new(
        Arc::new(RecordingSender { name: sender, log: log.clone() }),
        Arc::new(RecordingCloser { name: closer, log: log.clone() }),
    );
    (conn, log)
}

fn assert_connection<C: Connection + ?Sized>(_conn: &C) {}

#[test]
fn test_send_and_close_delegate_to_injected_parts() {
    let (conn, log) = recording_conn("a", "quick");

    conn.send(&[1, 2, 3]).unwrap();
    conn.close().unwrap();

    assert_eq!(*log.borrow(), vec!["a send [1, 2, 3]", "quick close"]);
}

#[test]
fn test_parts_are_shared_not_copied() {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let closer: Arc<dyn Closer> = Arc::new(RecordingCloser { name: "shared", log: log.clone() });

    let first = AbstractConnection::new(Arc::new(TcpSender), closer.clone());
    let second = AbstractConnection::new(Arc::new(UdpSender), closer.clone());

    assert!(Arc::ptr_eq(first.closer(), &closer));
    assert!(Arc::ptr_eq(second.closer(), &closer));

    first.close().unwrap();
    second.close().unwrap();
    assert_eq!(*log.borrow(), vec!["shared close", "shared close"]);
}

#[test]
fn test_close_conn_only_closes() {
    let (conn, log) = recording_conn("a", "quick");

    close_conn(&conn).unwrap();

    assert_eq!(*log.borrow(), vec!["quick close"]);
}

#[test]
fn test_close_conn_accepts_every_entity() {
    let (tcp_quick, log) = recording_conn("a", "quick");
    let udp_safe = AbstractConnection::new(Arc::new(UdpSender), Arc::new(SafeCloser));
    let grpc = GrpcConnection::new(
        Arc::new(TcpSender),
        Arc::new(RecordingCloser { name: "grpc", log: log.clone() }),
    );

    assert!(close_conn(&tcp_quick).is_ok());
    assert!(close_conn(&udp_safe).is_ok());
    assert!(close_conn(&grpc).is_ok());

    // Bare capabilities qualify as well
    assert!(close_conn(&QuickCloser).is_ok());

    assert_eq!(*log.borrow(), vec!["quick close", "grpc close"]);
}

#[test]
fn test_close_conn_through_trait_objects() {
    let entities: Vec<Box<dyn Closer>> = vec![
        Box::new(AbstractConnection::new(Arc::new(TcpSender), Arc::new(QuickCloser))),
        Box::new(AbstractConnection::new(Arc::new(UdpSender), Arc::new(SafeCloser))),
        Box::new(GrpcConnection::new(Arc::new(TcpSender), Arc::new(QuickCloser))),
    ];

    for e in &entities {
        assert!(close_conn(&**e).is_ok());
    }
}

#[test]
fn test_entities_are_full_connections() {
    let (conn, _log) = recording_conn("a", "quick");
    let grpc = GrpcConnection::new(Arc::new(TcpSender), Arc::new(QuickCloser));

    assert_connection(&conn);
    assert_connection(&grpc);

    let as_dyn: &dyn Connection = &grpc;
    assert!(as_dyn.send(&[1, 2, 3]).is_ok());
    assert!(as_dyn.close().is_ok());
}

#[test]
fn test_grpc_forwards_send_to_concrete_tcp() {
    let grpc = GrpcConnection::new(Arc::new(TcpSender), Arc::new(QuickCloser));

    assert_eq!(*grpc.tcp(), TcpSender);
    assert!(grpc.send(&[1, 2, 3]).is_ok());
}

#[test]
fn test_close_error_reaches_caller() {
    let conn = AbstractConnection::new(Arc::new(TcpSender), Arc::new(FailingCloser));

    match close_conn(&conn) {
        Err(CloseError::Release { strategy, reason }) => {
            assert_eq!(strategy, "failing");
            assert_eq!(reason, "refused");
        }
        other => panic!("Expected Release error, got {:?}", other),
    }

    let grpc = GrpcConnection::new(Arc::new(TcpSender), Arc::new(FailingCloser));
    assert!(grpc.close().is_err());
}

#[test]
fn test_send_error_reaches_caller() {
    let conn = AbstractConnection::new(Arc::new(FailingSender), Arc::new(QuickCloser));

    let err = conn.send(&[1, 2, 3]).unwrap_err();
    assert_eq!(err.to_string(), "failing send failed: no route");
}
