// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower-based logging layer for the plugin's RPC client.
//!
//! Each JSON-RPC packet sent to the node is recorded with its method name and
//! round-trip time, so a slow `eth_getLogs` or a failing multicall can be told
//! apart in the trace output.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use alloy_json_rpc::{RequestPacket, ResponsePacket};
use alloy_transport::TransportError;
use tower::Layer;
use tracing::{debug, trace, warn, Instrument};

/// A Tower layer that records every RPC packet through `tracing`.
///
/// # Example
///
/// ```rust,ignore
/// use blockjuic3::transport::LoggingLayer;
/// use alloy_rpc_client::ClientBuilder;
///
/// let client = ClientBuilder::default()
///     .layer(LoggingLayer::new())
///     .http(rpc_url);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggingLayer {
    /// Log full request and response packets at TRACE level
    log_payloads: bool,
}

impl LoggingLayer {
    /// Creates a layer that logs method names, timing and errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log request and response payloads.
    ///
    /// Log responses carry every matching event of the block, so this is noisy.
    pub fn with_payloads(mut self) -> Self {
        self.log_payloads = true;
        self
    }

    /// Whether payloads are logged
    pub const fn logs_payloads(&self) -> bool {
        self.log_payloads
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, service: S) -> Self::Service {
        LoggingService {
            service,
            log_payloads: self.log_payloads,
        }
    }
}

/// A Tower service that logs RPC requests and responses.
#[derive(Clone, Debug)]
pub struct LoggingService<S> {
    service: S,
    log_payloads: bool,
}

impl<S> tower::Service<RequestPacket> for LoggingService<S>
where
    S: tower::Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let log_payloads = self.log_payloads;
        let method = packet_method(&request);
        let span = tracing::debug_span!("blockjuic3.rpc", method = %method);

        if log_payloads {
            trace!(parent: &span, request = ?request, "RPC request");
        }

        let mut service = self.service.clone();

        Box::pin(
            async move {
                let start = Instant::now();
                let result = service.call(request).await;
                let elapsed_ms = start.elapsed().as_millis() as u64;

                match &result {
                    Ok(response) if log_payloads => {
                        trace!(response = ?response, elapsed_ms, "RPC response");
                    }
                    Ok(_) => debug!(elapsed_ms, "RPC response"),
                    Err(e) => warn!(error = %e, elapsed_ms, "RPC call failed"),
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Method name of a request packet, summarised for batches.
fn packet_method(request: &RequestPacket) -> String {
    match request {
        RequestPacket::Single(req) => req.method().to_string(),
        RequestPacket::Batch(reqs) => match reqs.as_slice() {
            [] => "batch(empty)".to_string(),
            [only] => only.method().to_string(),
            many => format!("batch({} calls)", many.len()),
        },
    }
}
