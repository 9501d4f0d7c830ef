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

use async_trait::async_trait;
use sgx_age_proto_rust::sgx_age::identity::v1::{
    Assertion, AssertionDescription, AssertionOffer, AssertionRequest, EnclaveIdentityType,
};

use crate::GeneratorError;

/// Produces assertions of a single identity type on behalf of a single
/// authority.
///
/// A generator starts uninitialized and becomes usable after exactly one
/// successful call to [`AssertionGenerator::initialize`]. Every other
/// operation except the identity and authority accessors fails with
/// [`GeneratorError::NotInitialized`] until then.
#[async_trait]
pub trait AssertionGenerator: Send + Sync {
    /// Configures the generator from its serialized configuration.
    ///
    /// Fails with [`GeneratorError::AlreadyInitialized`] if the generator has
    /// already been configured, in which case the existing configuration is
    /// kept.
    fn initialize(&self, config: &[u8]) -> Result<(), GeneratorError>;

    fn is_initialized(&self) -> bool;

    fn identity_type(&self) -> EnclaveIdentityType;

    fn authority_type(&self) -> &str;

    /// Identity and authority type of the assertions this generator produces.
    fn description(&self) -> AssertionDescription {
        AssertionDescription::new(self.identity_type(), self.authority_type())
    }

    /// Returns an advertisement of the generator's capability. Offers never
    /// carry certificates or signed material.
    fn create_assertion_offer(&self) -> Result<AssertionOffer, GeneratorError>;

    /// Whether `request` asks for the kind of assertion this generator
    /// produces.
    fn can_generate(&self, request: &AssertionRequest) -> Result<bool, GeneratorError>;

    /// Generates an assertion binding `user_data`, typically a nonce or a
    /// challenge chosen by the verifier.
    async fn generate(
        &self,
        user_data: &[u8],
        request: &AssertionRequest,
    ) -> Result<Assertion, GeneratorError>;
}

/// Returns true if `request` carries exactly `description`. Requests without
/// a description never match.
pub(crate) fn request_matches(
    description: &AssertionDescription,
    request: &AssertionRequest,
) -> bool {
    request.description.as_ref() == Some(description)
}

/// Human readable form of a request, for error messages.
pub(crate) fn describe_request(request: &AssertionRequest) -> String {
    match &request.description {
        Some(description) => {
            let identity_type = EnclaveIdentityType::try_from(description.identity_type)
                .map(|identity_type| identity_type.as_str_name().to_string())
                .unwrap_or_else(|_| description.identity_type.to_string());
            format!("{identity_type} from authority {:?}", description.authority_type)
        }
        None => "request without description".to_string(),
    }
}
