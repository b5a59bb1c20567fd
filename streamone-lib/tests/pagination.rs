//! Integration tests for v3 list pagination against a local HTTP server.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper::Response;
use hyper_util::rt::TokioIo;
use serde_json::json;
use tokio::net::TcpListener;

use streamone_lib::api::v3::ListCustomersRequest;
use streamone_lib::api::v3::ListOrdersRequest;
use streamone_lib::auth::StaticTokenProvider;
use streamone_lib::StreamOneClient;

/// Serves a fixed sequence of responses, one per request, and records the
/// URI of every request received.
struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    async fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responses = Arc::new(responses);
        let counter = Arc::new(Mutex::new(0usize));

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let io = TokioIo::new(stream);
                let responses = responses.clone();
                let counter = counter.clone();
                let recorded = recorded.clone();

                let service = service_fn(move |req: Request<Incoming>| {
                    let responses = responses.clone();
                    let counter = counter.clone();
                    let recorded = recorded.clone();
                    async move {
                        recorded.lock().unwrap().push(req.uri().to_string());
                        let index = {
                            let mut n = counter.lock().unwrap();
                            let index = (*n).min(responses.len() - 1);
                            *n += 1;
                            index
                        };
                        let (status, body) = responses[index].clone();
                        let response = Response::builder()
                            .status(status)
                            .header("content-type", "application/json")
                            .body(Full::new(Bytes::from(body)))
                            .unwrap();
                        Ok::<_, Infallible>(response)
                    }
                });

                tokio::spawn(async move {
                    let _ = http1::Builder::new().serve_connection(io, service).await;
                });
            }
        });

        Self { addr, requests }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn client_for(addr: SocketAddr) -> StreamOneClient {
    StreamOneClient::builder()
        .account_id("acct-1")
        .base_url(format!("http://{addr}"))
        .token_provider(StaticTokenProvider::new("test-token"))
        .build()
        .unwrap()
}

fn customers_page(names: &[&str], next_token: Option<&str>) -> String {
    let customers: Vec<_> = names
        .iter()
        .map(|n| json!({"name": format!("accounts/acct-1/customers/{n}"), "customerName": n}))
        .collect();
    let mut body = json!({"customers": customers});
    if let Some(token) = next_token {
        body["nextPageToken"] = json!(token);
    }
    body.to_string()
}

#[tokio::test]
async fn test_all_pages_yielded_in_service_order() {
    let server = TestServer::start(vec![
        (200, customers_page(&["alpha", "bravo"], Some("tok1"))),
        (200, customers_page(&["charlie"], Some("tok2"))),
        (200, customers_page(&["delta"], None)),
    ])
    .await;
    let client = client_for(server.addr);

    let customers = client
        .list_customers(ListCustomersRequest::new())
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    let names: Vec<_> = customers
        .iter()
        .map(|c| c.get_str("customerName").unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["alpha", "bravo", "charlie", "delta"]);

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert!(!requests[0].contains("pageToken"));
    assert!(requests[1].contains("pageToken=tok1"));
    assert!(requests[2].contains("pageToken=tok2"));
}

#[tokio::test]
async fn test_end_of_sequence_is_none_not_error() {
    let server = TestServer::start(vec![(200, customers_page(&["alpha"], None))]).await;
    let client = client_for(server.addr);

    let mut customers = client.list_customers(ListCustomersRequest::new()).unwrap();
    assert!(customers.next().await.unwrap().is_ok());
    assert!(customers.next().await.is_none());
    // Exhaustion is stable.
    assert!(customers.next().await.is_none());
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_buffered_records_yielded_before_fetch_error() {
    let server = TestServer::start(vec![
        (200, customers_page(&["alpha", "bravo"], Some("tok1"))),
        (500, json!({"error": "boom"}).to_string()),
    ])
    .await;
    let client = client_for(server.addr);

    let mut customers = client.list_customers(ListCustomersRequest::new()).unwrap();
    assert!(customers.next().await.unwrap().is_ok());
    assert!(customers.next().await.unwrap().is_ok());

    let failure = customers.next().await.unwrap();
    assert_eq!(failure.unwrap_err().status_code(), Some(500));

    // The iterator is terminal after a failure.
    assert!(customers.next().await.is_none());
}

#[tokio::test]
async fn test_missing_items_key_is_empty_page() {
    let server = TestServer::start(vec![(200, json!({}).to_string())]).await;
    let client = client_for(server.addr);

    let orders = client
        .list_account_orders(ListOrdersRequest::new())
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_filters_and_page_size_on_the_wire() {
    let server = TestServer::start(vec![(200, customers_page(&[], None))]).await;
    let client = client_for(server.addr);

    client
        .list_customers(ListCustomersRequest::new().page_size(25).customer_name("Contoso"))
        .unwrap()
        .try_collect()
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("/api/v3/accounts/acct-1/customers?"));
    assert!(requests[0].contains("pageSize=25"));
    assert!(requests[0].contains("filter.customerName=Contoso"));
}

#[tokio::test]
async fn test_invalid_page_size_fails_before_any_request() {
    let server = TestServer::start(vec![(200, customers_page(&[], None))]).await;
    let client = client_for(server.addr);

    let result = client.list_customers(ListCustomersRequest::new().page_size(5000));
    assert!(result.err().unwrap().is_validation());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_derived_id_from_resource_name() {
    let server = TestServer::start(vec![(200, customers_page(&["alpha"], None))]).await;
    let client = client_for(server.addr);

    let customers = client
        .list_customers(ListCustomersRequest::new())
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(customers[0].get_str("id"), Some("alpha"));
}
