use httpmock::Method::GET;
use serde_json::json;

use crate::common::{API_KEY, setup_server, test_client};

#[tokio::test]
async fn empty_params_fall_back_to_defaults() {
    let server = setup_server();

    // `field` defaults to null and is dropped from the query string; the
    // remaining defaults are sent as-is.
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/autocomplete")
            .query_param("text", "")
            .query_param("size", "10")
            .query_param("pretty", "false")
            .query_param("api_key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": 200, "data": [] }));
    });

    let client = test_client(&server);
    let res = client
        .autocomplete()
        .fetch(pdl_rs::Params::new())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(res["status"], 200);
}

#[tokio::test]
async fn caller_params_override_defaults() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/autocomplete")
            .query_param("field", "skill")
            .query_param("text", "c++")
            .query_param("size", "10")
            .query_param("pretty", "false")
            .query_param("api_key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "status": 200,
                "data": [ { "name": "c++", "count": 1 } ]
            }));
    });

    let client = test_client(&server);
    let res = client
        .autocomplete()
        .fetch(pdl_rs::Params::new().set("field", "skill").set("text", "c++"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(res["data"][0]["name"], "c++");
}
