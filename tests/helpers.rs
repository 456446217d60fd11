// Shared test helpers for serving and following redirect chains.
//
// Requests are issued with redirects disabled and followed by hand, so each
// test knows exactly which URLs the transport visited.

#![allow(dead_code)] // Not every test file uses every helper

use reqwest::header::LOCATION;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Maximum hops `follow_redirects` will take before giving up.
pub const TEST_MAX_HOPS: usize = 10;

/// Creates a client that never follows redirects on its own.
pub fn create_manual_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create client")
}

/// Mounts a redirect from `from` to the given `Location` value.
pub async fn mount_redirect(server: &MockServer, status: u16, from: &str, location: &str) {
    Mock::given(method("GET"))
        .and(path(from))
        .respond_with(ResponseTemplate::new(status).insert_header("Location", location))
        .mount(server)
        .await;
}

/// Mounts a final response with a body.
pub async fn mount_final(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Follows redirects from `start`, returning the final response and the URLs
/// requested before it, oldest first.
pub async fn follow_redirects(
    client: &reqwest::Client,
    start: &str,
) -> (reqwest::Response, Vec<Url>) {
    let mut previous = Vec::new();
    let mut current = Url::parse(start).expect("Invalid start URL in test");

    for _ in 0..TEST_MAX_HOPS {
        let resp = client
            .get(current.clone())
            .send()
            .await
            .expect("Request to mock server failed");

        if !resp.status().is_redirection() {
            return (resp, previous);
        }
        let Some(loc) = resp.headers().get(LOCATION) else {
            return (resp, previous);
        };
        let loc = loc.to_str().expect("Non-ASCII Location in test").to_string();
        let next = current.join(&loc).expect("Unresolvable Location in test");
        previous.push(current);
        current = next;
    }
    panic!("Redirect chain from {} exceeded {} hops", start, TEST_MAX_HOPS);
}

/// Sends a single request without following anything.
pub async fn fetch_once(client: &reqwest::Client, url: &str) -> reqwest::Response {
    client
        .get(url)
        .send()
        .await
        .expect("Request to mock server failed")
}
