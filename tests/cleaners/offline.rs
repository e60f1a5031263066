use httpmock::Method::GET;
use serde_json::json;

use crate::common::{API_KEY, setup_server, test_client};

#[tokio::test]
async fn school_clean_passes_name() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/school/clean")
            .query_param("name", "university of oregon")
            .query_param("api_key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": 200, "name": "university of oregon" }));
    });

    let client = test_client(&server);
    let res = client
        .school()
        .clean(pdl_rs::Params::new().set("name", "university of oregon"))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(res["status"], 200);
}

#[tokio::test]
async fn location_clean_passes_raw_location() {
    let server = setup_server();

    let raw = "455 Market Street, San Francisco, California 94105, US";
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/location/clean")
            .query_param("location", raw)
            .query_param("api_key", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "status": 200, "locality": "san francisco" }));
    });

    let client = test_client(&server);
    let res = client
        .location()
        .clean(pdl_rs::Params::new().set("location", raw))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(res["locality"], "san francisco");
}
