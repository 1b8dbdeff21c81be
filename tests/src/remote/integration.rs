use roster_common::employee::Employee;
use roster_common::error::{FETCH_FAILED, FetchError};
use roster_core::remote::RemoteDataSource;

use crate::support::{self, OneShotServer, THREE_EMPLOYEES};

/// A 200 with the documented body yields the list in payload order, and the
/// request is a bare GET on the configured path.
#[tokio::test]
async fn fetches_list_in_payload_order() {
    let server = OneShotServer::start(200, THREE_EMPLOYEES).await;
    let source = RemoteDataSource::new(&server.config()).unwrap();

    let employees = source.fetch_employees().await.unwrap();

    assert_eq!(
        employees,
        vec![
            Employee::new("Ada Lovelace", "Analyst"),
            Employee::new("Alan Turing", "Cryptanalyst"),
            Employee::new("Grace Hopper", "Compiler Engineer"),
        ]
    );

    let head = server.received().await;
    let request_line = head.lines().next().unwrap_or_default();
    assert_eq!(request_line, "GET /v1/employees HTTP/1.1");
    assert!(!head.to_ascii_lowercase().contains("authorization:"));
}

#[tokio::test]
async fn empty_array_is_an_empty_list() {
    let server = OneShotServer::start(200, r#"{"employees":[]}"#).await;
    let source = RemoteDataSource::new(&server.config()).unwrap();

    assert_eq!(source.fetch_employees().await, Ok(vec![]));
}

#[tokio::test]
async fn server_error_has_fixed_message() {
    let server = OneShotServer::start(500, r#"{"error":"down"}"#).await;
    let source = RemoteDataSource::new(&server.config()).unwrap();

    let err = source.fetch_employees().await.unwrap_err();
    assert_eq!(err, FetchError::Response);
    assert_eq!(err.message(), FETCH_FAILED);
}

#[tokio::test]
async fn not_found_is_a_response_failure() {
    let server = OneShotServer::start(404, "").await;
    let source = RemoteDataSource::new(&server.config()).unwrap();

    assert_eq!(source.fetch_employees().await, Err(FetchError::Response));
}

#[tokio::test]
async fn malformed_body_is_a_response_failure() {
    let server = OneShotServer::start(200, r#"{"employees": [{"name": "Ada""#).await;
    let source = RemoteDataSource::new(&server.config()).unwrap();

    assert_eq!(source.fetch_employees().await, Err(FetchError::Response));
}

#[tokio::test]
async fn wrong_shape_is_a_response_failure() {
    let server = OneShotServer::start(200, r#"[{"name":"Ada","profile":"Analyst"}]"#).await;
    let source = RemoteDataSource::new(&server.config()).unwrap();

    assert_eq!(source.fetch_employees().await, Err(FetchError::Response));
}

#[tokio::test]
async fn refused_connection_is_a_transport_failure() {
    let source = RemoteDataSource::new(&support::closed_port_config().await).unwrap();

    match source.fetch_employees().await {
        Err(FetchError::Transport(message)) => {
            assert_ne!(message, FETCH_FAILED);
            assert!(
                message.to_lowercase().contains("refused"),
                "message should name the cause: {message:?}"
            );
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}

/// A failed fetch is reported to the user once, by the view. The data source
/// itself stays below `warn`, the CLI's default level.
#[tokio::test]
async fn failures_log_nothing_at_warn() {
    let captured = support::CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(captured.subscriber(tracing::Level::WARN));

    let server = OneShotServer::start(500, "").await;
    let source = RemoteDataSource::new(&server.config()).unwrap();
    assert_eq!(source.fetch_employees().await, Err(FetchError::Response));

    let server = OneShotServer::start(200, "not json").await;
    let source = RemoteDataSource::new(&server.config()).unwrap();
    assert_eq!(source.fetch_employees().await, Err(FetchError::Response));

    assert_eq!(captured.text(), "");
}
