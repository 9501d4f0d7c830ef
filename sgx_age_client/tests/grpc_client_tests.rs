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

//! Exercises [`GrpcRemoteAssertionClient`] against an in-process AGE.

use std::{
    convert::Infallible,
    task::{Context, Poll},
};

use googletest::prelude::*;
use prost::Message;
use sgx_age_client::{
    ClientConfig, GrpcRemoteAssertionClient, RemoteAssertionClient, RemoteAssertionError,
};
use sgx_age_proto_rust::sgx_age::{
    crypto::v1::SignatureScheme,
    identity::v1::{EnclaveIdentity, EnclaveIdentityDescription, EnclaveIdentityType},
    remote::v1::{
        GenerateSgxRemoteAssertionRequest, GenerateSgxRemoteAssertionResponse, RemoteAssertion,
        GENERATE_SGX_REMOTE_ASSERTION_PATH, REMOTE_ASSERTION_GENERATOR_SERVICE,
    },
};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{
    body::{empty_body, BoxBody},
    codec::ProstCodec,
    codegen::{http, Body, BoxFuture, Service, StdError},
    server::{Grpc, NamedService, UnaryService},
};

fn age_identity() -> EnclaveIdentity {
    EnclaveIdentity {
        description: Some(EnclaveIdentityDescription {
            identity_type: EnclaveIdentityType::CodeIdentity as i32,
            authority_type: "SGX".to_string(),
        }),
        identity: b"age-measurement".to_vec(),
        version: "1".to_string(),
    }
}

/// AGE that "signs" by echoing the user data as the assertion payload, or
/// fails every call with an internal error.
#[derive(Clone, Default)]
struct TestAge {
    fail: bool,
}

impl NamedService for TestAge {
    const NAME: &'static str = REMOTE_ASSERTION_GENERATOR_SERVICE;
}

struct GenerateSgxRemoteAssertion(TestAge);

impl UnaryService<GenerateSgxRemoteAssertionRequest> for GenerateSgxRemoteAssertion {
    type Response = GenerateSgxRemoteAssertionResponse;
    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

    fn call(
        &mut self,
        request: tonic::Request<GenerateSgxRemoteAssertionRequest>,
    ) -> Self::Future {
        let fail = self.0.fail;
        Box::pin(async move {
            if fail {
                return Err(tonic::Status::internal("boom"));
            }
            let assertion = RemoteAssertion {
                payload: request.into_inner().user_data,
                signature: b"signature".to_vec(),
                signature_scheme: SignatureScheme::EcdsaP256Sha256 as i32,
                certificate_chains: vec![],
            };
            Ok(tonic::Response::new(GenerateSgxRemoteAssertionResponse {
                assertion: Some(assertion),
                age_identity: Some(age_identity()),
            }))
        })
    }
}

impl<B> Service<http::Request<B>> for TestAge
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: http::Request<B>) -> Self::Future {
        let age = self.clone();
        Box::pin(async move {
            if request.uri().path() != GENERATE_SGX_REMOTE_ASSERTION_PATH {
                let response = http::Response::builder()
                    .header("grpc-status", tonic::Code::Unimplemented as i32)
                    .header("content-type", "application/grpc")
                    .body(empty_body())
                    .unwrap();
                return Ok(response);
            }
            let mut grpc = Grpc::new(ProstCodec::default());
            Ok(grpc.unary(GenerateSgxRemoteAssertion(age), request).await)
        })
    }
}

/// Serves `age` on a free local port and returns its address.
async fn start_age(age: TestAge) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(age)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
    });
    address.to_string()
}

#[tokio::test]
async fn user_data_reaches_the_age() {
    let address = start_age(TestAge::default()).await;
    let client = GrpcRemoteAssertionClient::new(ClientConfig::default());

    let age_assertion = client
        .get_age_identity_and_assertion(&address, b"challenge-1")
        .await
        .expect("the AGE should produce an assertion");

    assert_eq!(age_assertion.age_identity, age_identity());
    let remote_assertion =
        RemoteAssertion::decode(age_assertion.signed_material.as_slice()).unwrap();
    assert_eq!(remote_assertion.payload, b"challenge-1".to_vec());
    assert_eq!(remote_assertion.signature, b"signature".to_vec());
}

#[tokio::test]
async fn error_status_is_reported_as_rpc_failure() {
    let address = start_age(TestAge { fail: true }).await;
    let client = GrpcRemoteAssertionClient::new(ClientConfig::default());

    let result = client.get_age_identity_and_assertion(&address, b"challenge-1").await;

    match result {
        Err(RemoteAssertionError::Rpc(ref status)) => {
            assert_eq!(status.code(), tonic::Code::Internal);
            assert_eq!(status.message(), "boom");
        }
        ref other => panic!("expected Rpc, got {other:?}"),
    }
    assert_that!(result.unwrap_err().is_retryable(), eq(true));
}
