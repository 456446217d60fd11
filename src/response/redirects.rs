//! Redirect chain reconstruction and response assembly.
//!
//! The transport links each exchange back to the redirect response that caused
//! it, so the history reads newest to oldest. The chain is collected in that
//! order and reversed once at the end.

use std::sync::Arc;

use log::{trace, warn};

use crate::config::Config;
use crate::exchange::Exchange;
use crate::request::Request;
use crate::response::Response;

/// Builds a [`Response`] from a completed exchange using the default [`Config`].
pub fn build(exchange: &dyn Exchange, request: Option<Arc<Request>>) -> Response {
    build_with_config(exchange, request, &Config::default())
}

/// Builds a [`Response`] from a completed exchange.
///
/// The collaborator-owned fields (`cancelled`, `raw_transcript`,
/// `stored_artifact_reference` and the body metrics) start empty.
pub fn build_with_config(
    exchange: &dyn Exchange,
    request: Option<Arc<Request>>,
    config: &Config,
) -> Response {
    Response {
        status_code: exchange.status_code(),
        headers: exchange.headers().clone(),
        body: exchange.body().to_vec(),
        request,
        redirect_chain: redirect_chain(exchange, config.max_redirect_hops),
        ..Default::default()
    }
}

/// Collects the intermediate redirect targets that led to `exchange`, oldest first.
///
/// The walk yields the URL requested at every earlier hop. The oldest of those
/// is the original request URL and is dropped. The final URL is never part of
/// the walk. If `max_hops` cuts the walk short, the oldest hops were not seen,
/// so nothing is dropped and the chain is partial. Hops with an empty URL are
/// skipped.
pub(crate) fn redirect_chain(exchange: &dyn Exchange, max_hops: usize) -> Vec<String> {
    if max_hops == 0 {
        return Vec::new();
    }

    let mut chain: Vec<String> = Vec::new();
    let mut truncated = false;
    let mut current = exchange.caused_by();
    while let Some(hop) = current {
        if chain.len() >= max_hops {
            truncated = true;
            break;
        }
        trace!(
            "Redirect hop {} back from {}: {}",
            chain.len() + 1,
            exchange.url(),
            hop.url()
        );
        chain.push(hop.url().to_string());
        current = hop.caused_by();
    }

    if truncated {
        warn!(
            "Redirect history for {} exceeds {} hops, keeping the most recent",
            exchange.url(),
            max_hops
        );
    } else {
        // Original request URL
        chain.pop();
    }

    chain.reverse();
    chain.retain(|url| !url.is_empty());
    chain
}
