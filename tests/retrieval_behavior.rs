//! Behavior tests for the client/retriever pipeline over a recorded transport.

use std::io::Write;
use std::sync::Arc;

use isone_core::{
    flatten, Client, Credentials, Error, FuelMixRetriever, RawDocument, ResponseFormat, Retriever,
};
use isone_tests::{fuel_mix_body, RecordingTransport};

fn client_over(transport: Arc<RecordingTransport>) -> Client {
    let credentials = Credentials::new("grid-reader", "hunter2").expect("valid pair");
    Client::with_transport(credentials, transport).with_base_url("https://example.test/api/v1.1")
}

#[test]
fn valid_day_issues_exactly_one_get_with_json_suffix_and_accept_header() {
    let transport = Arc::new(RecordingTransport::replying(200, &fuel_mix_body()));
    let client = client_over(Arc::clone(&transport));
    let retriever = FuelMixRetriever::new(&client);

    retriever.retrieve("20231201").expect("retrieval succeeds");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1, "exactly one GET per retrieval");
    assert_eq!(
        requests[0].url,
        "https://example.test/api/v1.1/genfuelmix/day/20231201.json"
    );
    assert_eq!(requests[0].accept, "application/json");
    assert!(requests[0].query.is_empty());
}

#[test]
fn credential_pair_is_forwarded_as_basic_auth() {
    let transport = Arc::new(RecordingTransport::replying(200, &fuel_mix_body()));
    let client = client_over(Arc::clone(&transport));

    FuelMixRetriever::new(&client)
        .retrieve("20231201")
        .expect("retrieval succeeds");

    let requests = transport.requests();
    assert_eq!(
        requests[0].basic_auth,
        ("grid-reader".to_owned(), "hunter2".to_owned())
    );
}

#[test]
fn invalid_day_fails_before_any_network_traffic() {
    let transport = Arc::new(RecordingTransport::replying(200, &fuel_mix_body()));
    let client = client_over(Arc::clone(&transport));
    let retriever = FuelMixRetriever::new(&client);

    let error = retriever.retrieve("2023-12-01").unwrap_err();
    assert!(matches!(error, Error::InvalidDateFormat { .. }));
    assert!(transport.requests().is_empty(), "no wasted I/O on bad input");
}

#[test]
fn non_success_status_propagates_as_request_failed() {
    let transport = Arc::new(RecordingTransport::replying(404, "no data for day"));
    let client = client_over(Arc::clone(&transport));

    let error = FuelMixRetriever::new(&client)
        .retrieve("20231201")
        .unwrap_err();

    let Error::RequestFailed { status, body } = error else {
        panic!("expected RequestFailed");
    };
    assert_eq!(status, 404);
    assert_eq!(body, "no data for day");
}

#[test]
fn network_failure_propagates_as_transport_error() {
    let transport = Arc::new(RecordingTransport::failing("connection refused"));
    let client = client_over(Arc::clone(&transport));

    let error = FuelMixRetriever::new(&client)
        .retrieve("20231201")
        .unwrap_err();
    assert!(matches!(error, Error::Transport { .. }));
}

#[test]
fn malformed_json_body_propagates_as_decode_error() {
    let transport = Arc::new(RecordingTransport::replying(200, "<html>not json</html>"));
    let client = client_over(Arc::clone(&transport));

    let error = FuelMixRetriever::new(&client)
        .retrieve("20231201")
        .unwrap_err();
    assert!(matches!(error, Error::Decode(_)));
}

#[test]
fn xml_format_uses_xml_suffix_and_returns_raw_text() {
    let transport = Arc::new(RecordingTransport::replying(200, "<GenFuelMixes/>"));
    let client = client_over(Arc::clone(&transport));

    let document = client
        .fetch("genfuelmix/day/20231201", &[], ResponseFormat::Xml)
        .expect("fetch succeeds");

    assert_eq!(document, RawDocument::Text("<GenFuelMixes/>".to_owned()));
    let requests = transport.requests();
    assert_eq!(
        requests[0].url,
        "https://example.test/api/v1.1/genfuelmix/day/20231201.xml"
    );
    assert_eq!(requests[0].accept, "application/xml");
}

#[test]
fn query_parameters_are_passed_through_to_the_transport() {
    let transport = Arc::new(RecordingTransport::replying(200, "{}"));
    let client = client_over(Arc::clone(&transport));

    client
        .fetch_json("genfuelmix/day/20231201", &[("category", "wind")])
        .expect("fetch succeeds");

    let requests = transport.requests();
    assert_eq!(
        requests[0].query,
        vec![("category".to_owned(), "wind".to_owned())]
    );
}

#[test]
fn retrieved_document_flattens_through_the_retriever_record_path() {
    let transport = Arc::new(RecordingTransport::replying(200, &fuel_mix_body()));
    let client = client_over(Arc::clone(&transport));
    let retriever = FuelMixRetriever::new(&client);

    let document = retriever.retrieve("20231201").expect("retrieval succeeds");
    let table = flatten(&document, retriever.record_path()).expect("flatten succeeds");

    assert_eq!(table.len(), 3);
    assert_eq!(
        table.columns(),
        &[
            "BeginDate",
            "FuelCategory",
            "FuelCategoryRollup",
            "GenMw",
            "MarginalFlag"
        ]
    );
    assert_eq!(
        table.cell(1, "FuelCategory"),
        Some(&serde_json::json!("Natural Gas"))
    );
    assert_eq!(table.cell(2, "GenMw"), Some(&serde_json::json!(402)));
}

#[test]
fn dotenv_file_credentials_reach_the_wire() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "API_USERNAME=file-user").unwrap();
    writeln!(file, "API_PASSWORD=file-pass").unwrap();

    let credentials = Credentials::from_env_file(file.path()).expect("pair resolves");
    let transport = Arc::new(RecordingTransport::replying(200, &fuel_mix_body()));
    let client = Client::with_transport(credentials, transport.clone())
        .with_base_url("https://example.test/api/v1.1");

    FuelMixRetriever::new(&client)
        .retrieve("20231201")
        .expect("retrieval succeeds");

    assert_eq!(
        transport.requests()[0].basic_auth,
        ("file-user".to_owned(), "file-pass".to_owned())
    );
}
