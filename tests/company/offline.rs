use httpmock::Method::GET;
use serde_json::json;

use crate::common::{API_KEY, setup_server, test_client};

#[tokio::test]
async fn enrich_passes_params_through() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/company/enrich")
            .query_param("website", "peopledatalabs.com")
            .query_param("api_key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": 200, "name": "people data labs" }));
    });

    let client = test_client(&server);
    let res = client
        .company()
        .enrich(pdl_rs::Params::new().set("website", "peopledatalabs.com"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(res["name"], "people data labs");
}

#[tokio::test]
async fn clean_hits_clean_path() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/company/clean")
            .query_param("name", "peopledatalabs")
            .query_param("api_key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": 200, "website": "peopledatalabs.com" }));
    });

    let client = test_client(&server);
    let res = client
        .company()
        .clean(pdl_rs::Params::new().set("name", "peopledatalabs"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(res["website"], "peopledatalabs.com");
}
