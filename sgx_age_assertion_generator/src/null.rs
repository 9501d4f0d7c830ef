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

use core::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::info;
use sgx_age_proto_rust::sgx_age::identity::v1::{
    Assertion, AssertionOffer, AssertionRequest, EnclaveIdentityType,
};

use crate::{
    generator::{describe_request, request_matches},
    AssertionGenerator, GeneratorError,
};

pub const NULL_AUTHORITY: &str = "Any";

/// Generator for the null identity. Assertions carry the user data as their
/// payload and no certificates, so they prove nothing about the enclave.
///
/// Only meant for tests and for peers that don't require attestation.
#[derive(Debug, Default)]
pub struct NullAssertionGenerator {
    initialized: AtomicBool,
}

impl NullAssertionGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_initialized(&self) -> Result<(), GeneratorError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GeneratorError::NotInitialized)
        }
    }
}

#[async_trait]
impl AssertionGenerator for NullAssertionGenerator {
    /// Any configuration is accepted.
    fn initialize(&self, _config: &[u8]) -> Result<(), GeneratorError> {
        self.initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GeneratorError::AlreadyInitialized)?;
        info!("null assertion generator initialized");
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    fn identity_type(&self) -> EnclaveIdentityType {
        EnclaveIdentityType::NullIdentity
    }

    fn authority_type(&self) -> &str {
        NULL_AUTHORITY
    }

    fn create_assertion_offer(&self) -> Result<AssertionOffer, GeneratorError> {
        self.ensure_initialized()?;
        Ok(AssertionOffer { description: Some(self.description()) })
    }

    fn can_generate(&self, request: &AssertionRequest) -> Result<bool, GeneratorError> {
        self.ensure_initialized()?;
        Ok(request_matches(&self.description(), request))
    }

    async fn generate(
        &self,
        user_data: &[u8],
        request: &AssertionRequest,
    ) -> Result<Assertion, GeneratorError> {
        if !self.can_generate(request)? {
            return Err(GeneratorError::UnsupportedRequest(describe_request(request)));
        }
        Ok(Assertion {
            description: Some(self.description()),
            assertion_payload: user_data.to_vec(),
            certificate_chain: vec![],
        })
    }
}
