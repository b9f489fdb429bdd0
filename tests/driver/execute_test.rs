//! Statement execution tests over a scripted transport.
//!
//! These exercise the whole public path: submission, pagination, result
//! assembly, type signatures and row formatting.

use db_ferry::client::Connection;
use db_ferry::config::ConnectionConfig;
use db_ferry::error::FerryError;
use db_ferry::format::format_rows;
use db_ferry::transport::MockTransport;
use db_ferry::types::Value;
use serde_json::json;

/// Helper to build a connection over a scripted transport.
fn connect(transport: MockTransport) -> Connection {
    super::init_tracing();
    Connection::with_transport(ConnectionConfig::default(), Box::new(transport))
        .expect("default config must build")
}

#[tokio::test]
async fn test_select_one() {
    let transport = MockTransport::new().with_json(json!({
        "schema": [{"name": "1", "data_type": {"type": "UInt8"}}],
        "data": [["1"]],
        "next_uri": null,
        "session": {"database": "default"}
    }));
    let mut conn = connect(transport);

    let result = conn.execute_statement("SELECT 1").await.unwrap();

    assert_eq!(result.row_count(), 1);
    assert_eq!(result.rows[0], vec![Value::Text("1".to_string())]);
    assert_eq!(result.signature.to_string(), "I");
    assert_eq!(format_rows(&result.rows), "1\n");
}

#[tokio::test]
async fn test_three_page_chain_assembles_in_order() {
    let transport = MockTransport::new()
        .with_json(json!({
            "schema": [{"name": "n", "data_type": {"type": "Int32"}}],
            "data": [["1"], ["2"]],
            "next_uri": "/v1/query/xyz/page/1"
        }))
        .with_json(json!({
            "schema": [{"name": "n", "data_type": {"type": "Int32"}}],
            "data": [],
            "next_uri": "/v1/query/xyz/page/2"
        }))
        .with_json(json!({
            "schema": [{"name": "n", "data_type": {"type": "Int32"}}],
            "data": [["3"]],
            "next_uri": null
        }));
    let mut conn = connect(transport);

    let result = conn.execute_statement("SELECT n FROM t ORDER BY n").await.unwrap();

    assert_eq!(result.row_count(), 3);
    assert_eq!(result.signature.to_string(), "I");
    assert_eq!(format_rows(&result.rows), "1\n2\n3\n");
}

#[tokio::test]
async fn test_mixed_schema_signature_and_rendering() {
    let transport = MockTransport::new().with_json(json!({
        "schema": [
            {"name": "id", "data_type": {"type": "Int64"}},
            {"name": "price", "data_type": {"type": "Nullable", "inner": {"type": "Float64"}}},
            {"name": "active", "data_type": {"type": "Boolean"}},
            {"name": "label", "data_type": {"type": "String"}},
            {"name": "created", "data_type": {"type": "Timestamp"}}
        ],
        "data": [["7", "19.99", "true", "widget", "2024-01-01 00:00:00"]]
    }));
    let mut conn = connect(transport);

    let result = conn.execute_statement("SELECT * FROM products").await.unwrap();

    // The nullable wrapper around Float64 must not hide the float.
    assert_eq!(result.signature.to_string(), "IFBTT");
    assert_eq!(
        format_rows(&result.rows),
        "7 19.99 true widget 2024-01-01 00:00:00\n"
    );
    assert_eq!(
        conn.type_signature().map(ToString::to_string),
        Some("IFBTT".to_string())
    );
}

#[tokio::test]
async fn test_null_cells_render_as_null() {
    let transport = MockTransport::new().with_json(json!({
        "schema": [
            {"name": "a", "data_type": {"type": "String"}},
            {"name": "b", "data_type": {"type": "Nullable", "inner": {"type": "String"}}}
        ],
        "data": [["x", null]]
    }));
    let mut conn = connect(transport);

    let result = conn.execute_statement("SELECT a, b FROM t").await.unwrap();

    assert_eq!(result.rows[0][1], Value::Null);
    assert_eq!(format_rows(&result.rows), "x NULL\n");
}

#[tokio::test]
async fn test_empty_result_set() {
    let transport = MockTransport::new().with_json(json!({
        "schema": [{"name": "n", "data_type": {"type": "Int32"}}],
        "data": []
    }));
    let mut conn = connect(transport);

    let result = conn.execute_statement("SELECT n FROM t WHERE 1 = 0").await.unwrap();

    assert!(result.is_empty());
    assert_eq!(result.row_count(), 0);
    // A schema still arrived, so the signature is still meaningful.
    assert_eq!(result.signature.to_string(), "I");
    assert_eq!(format_rows(&result.rows), "");
}

#[tokio::test]
async fn test_server_error_carries_code_and_message() {
    let transport = MockTransport::new().with_json(json!({
        "schema": [],
        "data": [],
        "error": {"code": 1025, "message": "Unknown table 'nope'"}
    }));
    let mut conn = connect(transport);

    let err = conn.execute_statement("SELECT * FROM nope").await.unwrap_err();

    assert_eq!(err.server_code(), Some(1025));
    assert!(err.to_string().contains("Unknown table 'nope'"));
    // Nothing succeeded, so no signature was recorded.
    assert!(conn.type_signature().is_none());
}

#[tokio::test]
async fn test_error_on_follow_up_discards_earlier_rows() {
    let transport = MockTransport::new()
        .with_json(json!({
            "schema": [{"name": "n", "data_type": {"type": "Int32"}}],
            "data": [["1"], ["2"]],
            "next_uri": "/v1/query/xyz/page/1"
        }))
        .with_json(json!({
            "schema": [],
            "data": [],
            "error": {"code": 1046, "message": "storage node lost"}
        }));
    let mut conn = connect(transport);

    let err = conn.execute_statement("SELECT n FROM t").await.unwrap_err();

    assert!(matches!(err, FerryError::Server { code: 1046, .. }));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let transport = MockTransport::new().with_response("<html>502 Bad Gateway</html>");
    let mut conn = connect(transport);

    let err = conn.execute_statement("SELECT 1").await.unwrap_err();

    assert!(matches!(err, FerryError::Malformed(_)));
}

#[tokio::test]
async fn test_statements_run_back_to_back_on_one_connection() {
    let transport = MockTransport::new()
        .with_json(json!({
            "schema": [{"name": "a", "data_type": {"type": "Int32"}}],
            "data": [["1"]]
        }))
        .with_json(json!({
            "schema": [{"name": "b", "data_type": {"type": "String"}}],
            "data": [["x"]]
        }));
    let mut conn = connect(transport);

    let first = conn.execute_statement("SELECT 1").await.unwrap();
    let second = conn.execute_statement("SELECT 'x'").await.unwrap();

    assert_eq!(first.signature.to_string(), "I");
    assert_eq!(second.signature.to_string(), "T");
    // The signature accessor tracks the most recent statement.
    assert_eq!(
        conn.type_signature().map(ToString::to_string),
        Some("T".to_string())
    );
}
