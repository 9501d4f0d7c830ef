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

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use log::{debug, info, warn};
use prost::Message;
use sgx_age_certificate::{CertificateStore, ParsedCertificate};
use sgx_age_client::{ClientConfig, GrpcRemoteAssertionClient, RemoteAssertionClient};
use sgx_age_proto_rust::sgx_age::{
    crypto::v1::Certificate,
    identity::v1::{Assertion, AssertionOffer, AssertionRequest, EnclaveIdentityType},
    remote::v1::SgxAgeRemoteAssertionGeneratorConfig,
};

use crate::{
    generator::{describe_request, request_matches},
    AssertionGenerator, GeneratorError,
};

pub const SGX_AGE_REMOTE_IDENTITY_TYPE: EnclaveIdentityType = EnclaveIdentityType::CodeIdentity;

pub const SGX_AGE_REMOTE_AUTHORITY: &str = "SGX Age Remote Assertion Generator";

/// Validated configuration, immutable once installed.
#[derive(Debug)]
struct GeneratorConfig {
    root_ca_certificates: CertificateStore,
    server_address: String,
}

impl GeneratorConfig {
    fn decode(config: &[u8]) -> Result<Self, GeneratorError> {
        let config = SgxAgeRemoteAssertionGeneratorConfig::decode(config)
            .map_err(|err| GeneratorError::InvalidConfig(format!("couldn't decode: {err}")))?;
        if config.root_ca_certificates.is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "at least one root CA certificate is required".to_string(),
            ));
        }
        if config.server_address.is_empty() {
            return Err(GeneratorError::InvalidConfig("server address is empty".to_string()));
        }
        Ok(Self {
            root_ca_certificates: CertificateStore::load(config.root_ca_certificates)?,
            server_address: config.server_address,
        })
    }
}

/// State shared by all callers. `None` until the generator is initialized.
#[derive(Default)]
struct Members {
    config: Option<Arc<GeneratorConfig>>,
}

/// Generates code identity assertions by delegating the signing to the AGE.
///
/// The produced assertion carries the AGE's signed material as its payload and
/// the configured root CA certificates as its certificate chain.
pub struct SgxAgeRemoteAssertionGenerator {
    client: Arc<dyn RemoteAssertionClient>,
    members: Mutex<Members>,
}

impl SgxAgeRemoteAssertionGenerator {
    pub fn new(client: Arc<dyn RemoteAssertionClient>) -> Self {
        Self { client, members: Mutex::new(Members::default()) }
    }

    pub fn server_address(&self) -> Result<String, GeneratorError> {
        Ok(self.config()?.server_address.clone())
    }

    pub fn root_ca_certificates(&self) -> Result<Vec<Certificate>, GeneratorError> {
        Ok(self.config()?.root_ca_certificates.encoded().to_vec())
    }

    pub fn parsed_root_ca_certificates(&self) -> Result<Vec<ParsedCertificate>, GeneratorError> {
        Ok(self.config()?.root_ca_certificates.parsed().to_vec())
    }

    // No code path panics while holding the lock, so a poisoned mutex still
    // holds a consistent state.
    fn members(&self) -> MutexGuard<'_, Members> {
        self.members.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn config(&self) -> Result<Arc<GeneratorConfig>, GeneratorError> {
        self.members().config.clone().ok_or(GeneratorError::NotInitialized)
    }
}

/// Uses a [`GrpcRemoteAssertionClient`] with the default [`ClientConfig`],
/// which talks to the AGE over plaintext. Production wiring must authenticate
/// the AGE channel instead, by passing [`SgxAgeRemoteAssertionGenerator::new`] a
/// client built with [`ClientConfig::with_tls_config`].
impl Default for SgxAgeRemoteAssertionGenerator {
    fn default() -> Self {
        Self::new(Arc::new(GrpcRemoteAssertionClient::new(ClientConfig::default())))
    }
}

#[async_trait]
impl AssertionGenerator for SgxAgeRemoteAssertionGenerator {
    fn initialize(&self, config: &[u8]) -> Result<(), GeneratorError> {
        if self.is_initialized() {
            return Err(GeneratorError::AlreadyInitialized);
        }
        // Parsing happens outside of the lock, the check below decides which
        // concurrent caller gets to install its configuration.
        let config = GeneratorConfig::decode(config)?;

        let mut members = self.members();
        if members.config.is_some() {
            return Err(GeneratorError::AlreadyInitialized);
        }
        info!(
            "initialized with {} root CA certificate(s), AGE at {}",
            config.root_ca_certificates.len(),
            config.server_address
        );
        members.config = Some(Arc::new(config));
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.members().config.is_some()
    }

    fn identity_type(&self) -> EnclaveIdentityType {
        SGX_AGE_REMOTE_IDENTITY_TYPE
    }

    fn authority_type(&self) -> &str {
        SGX_AGE_REMOTE_AUTHORITY
    }

    fn create_assertion_offer(&self) -> Result<AssertionOffer, GeneratorError> {
        if !self.is_initialized() {
            return Err(GeneratorError::NotInitialized);
        }
        Ok(AssertionOffer { description: Some(self.description()) })
    }

    fn can_generate(&self, request: &AssertionRequest) -> Result<bool, GeneratorError> {
        if !self.is_initialized() {
            return Err(GeneratorError::NotInitialized);
        }
        Ok(request_matches(&self.description(), request))
    }

    async fn generate(
        &self,
        user_data: &[u8],
        request: &AssertionRequest,
    ) -> Result<Assertion, GeneratorError> {
        // The snapshot keeps the lock out of the remote call below.
        let config = self.config()?;
        if !request_matches(&self.description(), request) {
            return Err(GeneratorError::UnsupportedRequest(describe_request(request)));
        }

        debug!("requesting assertion from the AGE at {}", config.server_address);
        let age_assertion = self
            .client
            .get_age_identity_and_assertion(&config.server_address, user_data)
            .await
            .inspect_err(|err| warn!("AGE at {} failed: {err}", config.server_address))?;

        Ok(Assertion {
            description: Some(self.description()),
            assertion_payload: age_assertion.signed_material,
            certificate_chain: config.root_ca_certificates.encoded().to_vec(),
        })
    }
}
