use listgen::{ListgenError, Source};

use super::support::{local_fetcher, serve_once};

#[test]
fn test_fetch_remote_text() {
    let url = serve_once("200 OK", "123456\npassword\n");
    let source = Source::parse(&url).unwrap();

    let text = local_fetcher().fetch_text(&source).unwrap();
    assert_eq!(text, "123456\npassword\n");
}

#[test]
fn test_non_ok_status_is_fatal() {
    let url = serve_once("404 Not Found", "missing");
    let source = Source::parse(&url).unwrap();

    let err = local_fetcher().fetch_text(&source).unwrap_err();
    match err {
        ListgenError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[test]
fn test_connection_refused_is_fatal() {
    // Bind then drop to get a port nothing listens on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let source = Source::parse(&format!("http://127.0.0.1:{}/list.txt", port)).unwrap();

    let err = local_fetcher().fetch_text(&source).unwrap_err();
    assert!(matches!(err, ListgenError::Http(_)));
}
