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

use googletest::prelude::*;
use prost::Message;
use sgx_age_proto_rust::sgx_age::{
    crypto::v1::SignatureScheme,
    identity::v1::{EnclaveIdentity, EnclaveIdentityDescription, EnclaveIdentityType},
    remote::v1::{GenerateSgxRemoteAssertionResponse, RemoteAssertion},
};

use crate::{
    grpc::{endpoint_uri, validate_response},
    ClientConfig, GrpcRemoteAssertionClient, RemoteAssertionClient, RemoteAssertionError,
    DEFAULT_CONNECTION_DEADLINE,
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

fn remote_assertion() -> RemoteAssertion {
    RemoteAssertion {
        payload: b"payload".to_vec(),
        signature: b"signature".to_vec(),
        signature_scheme: SignatureScheme::EcdsaP256Sha256 as i32,
        certificate_chains: vec![],
    }
}

fn response() -> GenerateSgxRemoteAssertionResponse {
    GenerateSgxRemoteAssertionResponse {
        assertion: Some(remote_assertion()),
        age_identity: Some(age_identity()),
    }
}

fn assert_invalid_response(response: GenerateSgxRemoteAssertionResponse) {
    let result = validate_response(response);
    assert!(
        matches!(result, Err(RemoteAssertionError::InvalidResponse(_))),
        "expected InvalidResponse, got {result:?}"
    );
}

#[test]
fn valid_response_is_accepted() {
    let age_assertion = validate_response(response()).expect("response should be valid");

    assert_eq!(age_assertion.age_identity, age_identity());
    assert_eq!(age_assertion.signed_material, remote_assertion().encode_to_vec());
    let decoded = RemoteAssertion::decode(age_assertion.signed_material.as_slice()).unwrap();
    assert_eq!(decoded, remote_assertion());
}

#[test]
fn response_without_assertion_is_invalid() {
    assert_invalid_response(GenerateSgxRemoteAssertionResponse { assertion: None, ..response() });
}

#[test]
fn response_without_age_identity_is_invalid() {
    assert_invalid_response(GenerateSgxRemoteAssertionResponse {
        age_identity: None,
        ..response()
    });
}

#[test]
fn response_with_empty_payload_is_invalid() {
    assert_invalid_response(GenerateSgxRemoteAssertionResponse {
        assertion: Some(RemoteAssertion { payload: vec![], ..remote_assertion() }),
        ..response()
    });
}

#[test]
fn response_with_empty_signature_is_invalid() {
    assert_invalid_response(GenerateSgxRemoteAssertionResponse {
        assertion: Some(RemoteAssertion { signature: vec![], ..remote_assertion() }),
        ..response()
    });
}

#[test]
fn response_with_unknown_signature_scheme_is_invalid() {
    assert_invalid_response(GenerateSgxRemoteAssertionResponse {
        assertion: Some(RemoteAssertion {
            signature_scheme: SignatureScheme::UnknownSignatureScheme as i32,
            ..remote_assertion()
        }),
        ..response()
    });
    assert_invalid_response(GenerateSgxRemoteAssertionResponse {
        assertion: Some(RemoteAssertion { signature_scheme: 99, ..remote_assertion() }),
        ..response()
    });
}

#[test]
fn endpoint_uri_adds_missing_scheme() {
    assert_eq!(endpoint_uri("age:1234", false), "http://age:1234");
    assert_eq!(endpoint_uri("age:1234", true), "https://age:1234");
    assert_eq!(endpoint_uri("http://localhost:8080", true), "http://localhost:8080");
}

#[test]
fn default_config_uses_default_deadline() {
    let config = ClientConfig::default();

    assert_eq!(config.connection_deadline, DEFAULT_CONNECTION_DEADLINE);
    assert_eq!(DEFAULT_CONNECTION_DEADLINE, Duration::from_secs(10));
    assert_that!(config.tls.is_none(), eq(true));
}

#[test]
fn only_invalid_responses_are_not_retryable() {
    let unavailable = RemoteAssertionError::Unavailable {
        address: "age:1234".to_string(),
        deadline: DEFAULT_CONNECTION_DEADLINE,
        reason: "refused".to_string(),
    };
    let rpc = RemoteAssertionError::Rpc(tonic::Status::internal("boom"));
    let invalid = RemoteAssertionError::InvalidResponse("garbage".to_string());

    assert_that!(unavailable.is_retryable(), eq(true));
    assert_that!(rpc.is_retryable(), eq(true));
    assert_that!(invalid.is_retryable(), eq(false));
}

#[tokio::test]
async fn unparseable_address_is_unavailable() {
    let client = GrpcRemoteAssertionClient::default();

    let result = client.get_age_identity_and_assertion("not a valid address", b"nonce").await;

    assert!(
        matches!(
            result,
            Err(RemoteAssertionError::Unavailable { ref address, .. })
                if address == "not a valid address"
        ),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn closed_port_is_unavailable() {
    // Reserve a free port and release it, so that nothing is listening on it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let deadline = Duration::from_secs(2);
    let client =
        GrpcRemoteAssertionClient::new(ClientConfig::default().with_connection_deadline(deadline));

    let result =
        client.get_age_identity_and_assertion(&format!("127.0.0.1:{port}"), b"nonce").await;

    match result {
        Err(RemoteAssertionError::Unavailable { deadline: reported_deadline, .. }) => {
            assert_eq!(reported_deadline, deadline)
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn silent_server_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap().to_string();
    // Accepts connections and holds them open without ever speaking HTTP/2.
    let server = tokio::spawn(async move {
        let mut connections = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            connections.push(socket);
        }
    });
    let deadline = Duration::from_millis(500);
    let client =
        GrpcRemoteAssertionClient::new(ClientConfig::default().with_connection_deadline(deadline));

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        client.get_age_identity_and_assertion(&address, b"nonce"),
    )
    .await
    .expect("client didn't honor its deadline");
    server.abort();

    match result {
        Err(RemoteAssertionError::Unavailable { address: reported_address, deadline: d, .. }) => {
            assert_eq!(reported_address, address);
            assert_eq!(d, deadline);
        }
        other => panic!("expected Unavailable, got {other:?}"),
    }
}
