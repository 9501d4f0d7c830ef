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

use sgx_age_certificate::MalformedCertificateError;
use sgx_age_client::RemoteAssertionError;
use sgx_age_proto_rust::sgx_age::identity::v1::EnclaveIdentityType;

#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
    /// The configuration couldn't be decoded or is incomplete.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Malformed root CA certificate: {0}")]
    MalformedCertificate(#[from] MalformedCertificateError),
    #[error("Generator is already initialized")]
    AlreadyInitialized,
    #[error("Generator is not initialized")]
    NotInitialized,
    /// The request asks for a different identity or authority type than the
    /// one the generator serves.
    #[error("Unsupported assertion request: {0}")]
    UnsupportedRequest(String),
    #[error("Remote assertion generation failed: {0}")]
    RemoteGenerationFailed(#[from] RemoteAssertionError),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Generator for {identity_type:?} with authority {authority_type:?} already registered")]
    AlreadyRegistered { identity_type: EnclaveIdentityType, authority_type: String },
}
