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

//! Client for the Assertion Generator Enclave (AGE).
//!
//! The AGE is a separate, privileged enclave that performs the actual
//! hardware-backed signing. Assertion generators running in other enclaves
//! delegate to it through the [`RemoteAssertionClient`] trait; the production
//! implementation is [`GrpcRemoteAssertionClient`].

pub mod config;
pub mod error;
pub mod grpc;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use sgx_age_proto_rust::sgx_age::identity::v1::EnclaveIdentity;

pub use crate::{
    config::{ClientConfig, DEFAULT_CONNECTION_DEADLINE},
    error::RemoteAssertionError,
    grpc::GrpcRemoteAssertionClient,
};

/// Signed material returned by the AGE, together with the AGE's identity.
#[derive(Clone, Debug, PartialEq)]
pub struct AgeAssertion {
    pub age_identity: EnclaveIdentity,
    /// Serialized `RemoteAssertion` proto, opaque to callers.
    pub signed_material: Vec<u8>,
}

/// Capability to obtain signed assertion material from an AGE.
#[async_trait]
pub trait RemoteAssertionClient: Send + Sync {
    /// Connects to the AGE at `server_address` and asks it to sign an
    /// assertion binding `user_data`.
    ///
    /// `user_data` is chosen by the caller (typically a nonce or a challenge
    /// from the verifier) and is opaque to the client.
    async fn get_age_identity_and_assertion(
        &self,
        server_address: &str,
        user_data: &[u8],
    ) -> Result<AgeAssertion, RemoteAssertionError>;
}
