//
// Copyright 2025 The Project Oak Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use core::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use prost::Message;
use sgx_age_proto_rust::sgx_age::{
    crypto::v1::SignatureScheme,
    remote::v1::{
        GenerateSgxRemoteAssertionRequest, GenerateSgxRemoteAssertionResponse,
        GENERATE_SGX_REMOTE_ASSERTION_PATH,
    },
};
use tonic::{
    client::Grpc,
    codec::ProstCodec,
    codegen::http::uri::PathAndQuery,
    transport::{Channel, Endpoint},
};

use crate::{AgeAssertion, ClientConfig, RemoteAssertionClient, RemoteAssertionError};

/// [`RemoteAssertionClient`] that talks to the AGE over gRPC.
///
/// A new channel is created for every call, so the client can be shared
/// between generators configured with different AGE addresses.
#[derive(Clone, Debug, Default)]
pub struct GrpcRemoteAssertionClient {
    config: ClientConfig,
}

impl GrpcRemoteAssertionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Connects to `server_address`. Readiness and the RPC itself are bounded
    /// by the caller.
    async fn connect(&self, server_address: &str) -> Result<Grpc<Channel>, RemoteAssertionError> {
        let deadline = self.config.connection_deadline;
        let unavailable_because = |reason: String| unavailable(server_address, deadline, reason);

        let uri = endpoint_uri(server_address, self.config.tls.is_some());
        let mut endpoint = Endpoint::from_shared(uri)
            .map_err(|err| unavailable_because(format!("invalid address: {err}")))?
            .connect_timeout(deadline);
        if let Some(tls) = &self.config.tls {
            endpoint = endpoint
                .tls_config(tls.clone())
                .map_err(|err| unavailable_because(format!("invalid TLS configuration: {err}")))?;
        }

        debug!("connecting to the AGE at {server_address}");
        let channel = endpoint
            .connect()
            .await
            .map_err(|err| unavailable_because(format!("couldn't connect: {err}")))?;
        let mut grpc = Grpc::new(channel);
        grpc.ready()
            .await
            .map_err(|err| unavailable_because(format!("channel not ready: {err}")))?;
        Ok(grpc)
    }

    async fn generate_remote_assertion(
        &self,
        server_address: &str,
        user_data: &[u8],
    ) -> Result<GenerateSgxRemoteAssertionResponse, RemoteAssertionError> {
        let mut grpc = self.connect(server_address).await?;
        let request = tonic::Request::new(GenerateSgxRemoteAssertionRequest {
            user_data: user_data.to_vec(),
        });
        let response: tonic::Response<GenerateSgxRemoteAssertionResponse> = grpc
            .unary(
                request,
                PathAndQuery::from_static(GENERATE_SGX_REMOTE_ASSERTION_PATH),
                ProstCodec::default(),
            )
            .await?;
        Ok(response.into_inner())
    }
}

#[async_trait]
impl RemoteAssertionClient for GrpcRemoteAssertionClient {
    /// The whole exchange, from dialing to the AGE's reply, shares the
    /// connection deadline. A peer that accepts the connection but never
    /// answers is reported as [`RemoteAssertionError::Unavailable`].
    async fn get_age_identity_and_assertion(
        &self,
        server_address: &str,
        user_data: &[u8],
    ) -> Result<AgeAssertion, RemoteAssertionError> {
        let deadline = self.config.connection_deadline;
        let exchange = self.generate_remote_assertion(server_address, user_data);
        let response = match tokio::time::timeout(deadline, exchange).await {
            Ok(result) => result,
            Err(_) => Err(unavailable(
                server_address,
                deadline,
                "no response before the deadline".to_string(),
            )),
        }
        .inspect_err(|err| warn!("GenerateSgxRemoteAssertion failed: {err}"))?;

        validate_response(response)
    }
}

fn unavailable(server_address: &str, deadline: Duration, reason: String) -> RemoteAssertionError {
    RemoteAssertionError::Unavailable { address: server_address.to_string(), deadline, reason }
}

/// Returns the URI to dial for a gRPC target such as `"age:1234"`. Targets
/// that already carry a scheme are used as they are.
pub(crate) fn endpoint_uri(server_address: &str, tls: bool) -> String {
    if server_address.contains("://") {
        server_address.to_string()
    } else if tls {
        format!("https://{server_address}")
    } else {
        format!("http://{server_address}")
    }
}

/// Checks that the AGE replied with a complete, signed assertion and converts
/// it into an [`AgeAssertion`].
pub fn validate_response(
    response: GenerateSgxRemoteAssertionResponse,
) -> Result<AgeAssertion, RemoteAssertionError> {
    let assertion = response
        .assertion
        .ok_or_else(|| RemoteAssertionError::InvalidResponse("missing assertion".to_string()))?;
    let age_identity = response
        .age_identity
        .ok_or_else(|| RemoteAssertionError::InvalidResponse("missing AGE identity".to_string()))?;

    if assertion.payload.is_empty() {
        return Err(RemoteAssertionError::InvalidResponse("empty assertion payload".to_string()));
    }
    if assertion.signature.is_empty() {
        return Err(RemoteAssertionError::InvalidResponse("empty assertion signature".to_string()));
    }
    match SignatureScheme::try_from(assertion.signature_scheme) {
        Ok(SignatureScheme::UnknownSignatureScheme) | Err(_) => {
            return Err(RemoteAssertionError::InvalidResponse(format!(
                "unsupported signature scheme {}",
                assertion.signature_scheme
            )));
        }
        Ok(_) => {}
    }

    Ok(AgeAssertion { age_identity, signed_material: assertion.encode_to_vec() })
}
