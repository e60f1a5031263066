use httpmock::Method::POST;
use serde_json::json;

use crate::common::{API_KEY, setup_server, test_client};

#[tokio::test]
async fn sql_search_moves_query_into_sql_key() {
    let server = setup_server();

    let sql = "SELECT * FROM person WHERE job_title_role='health';";
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/person/search")
            .header("x-api-key", API_KEY)
            .query_param_missing("api_key")
            .json_body(json!({
                "titlecase": false,
                "dataset": "all",
                "scroll_token": null,
                "size": 5,
                "sql": sql,
                "pretty": false
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": 200, "total": 1, "data": [{}] }));
    });

    let client = test_client(&server);
    let res = client
        .person()
        .search()
        .sql(pdl_rs::Params::new().set("searchQuery", sql).set("size", 5))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(res["total"], 1);
}

#[tokio::test]
async fn elastic_search_posts_to_owning_category_path() {
    let server = setup_server();

    let query = json!({
        "query": { "bool": { "must": [ { "term": { "website": "peopledatalabs.com" } } ] } }
    });
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/company/search")
            .header("x-api-key", API_KEY)
            .json_body(json!({
                "titlecase": false,
                "dataset": "all",
                "scroll_token": null,
                "size": 10,
                "elastic": query,
                "pretty": false
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": 200, "total": 1, "data": [{}] }));
    });

    let client = test_client(&server);
    let res = client
        .company()
        .search()
        .elastic(pdl_rs::Params::new().set("searchQuery", query))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(res["status"], 200);
}

// A call without `searchQuery` is not rejected locally; the variant key is
// sent as an explicit null and the provider's answer is surfaced as-is.
#[tokio::test]
async fn missing_search_query_sends_explicit_null() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/person/search")
            .header("x-api-key", API_KEY)
            .json_body(json!({
                "titlecase": false,
                "dataset": "all",
                "scroll_token": null,
                "size": 10,
                "sql": null,
                "pretty": false
            }));
        then.status(400)
            .header("content-type", "application/json")
            .body(r#"{"status":400,"error":{"message":"query is required"}}"#);
    });

    let client = test_client(&server);
    let err = client
        .person()
        .search()
        .sql(pdl_rs::Params::new())
        .await
        .unwrap_err();

    mock.assert();
    match err {
        pdl_rs::PdlError::Status { status, .. } => assert_eq!(status, 400),
        other => panic!("expected status error, got {other:?}"),
    }
}
