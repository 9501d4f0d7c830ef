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

use std::{
    collections::{btree_map::Entry, BTreeMap},
    sync::Arc,
};

use sgx_age_proto_rust::sgx_age::identity::v1::{
    AssertionOffer, AssertionRequest, EnclaveIdentityType,
};

use crate::{AssertionGenerator, RegistryError};

type GeneratorKey = (EnclaveIdentityType, String);

/// Generators indexed by the identity and authority type they serve.
///
/// Generators can be registered before they are initialized, but only
/// initialized generators take part in offers and request selection.
#[derive(Default)]
pub struct AssertionGeneratorRegistry {
    generators: BTreeMap<GeneratorKey, Arc<dyn AssertionGenerator>>,
}

impl AssertionGeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        generator: Arc<dyn AssertionGenerator>,
    ) -> Result<(), RegistryError> {
        let identity_type = generator.identity_type();
        let authority_type = generator.authority_type().to_string();
        match self.generators.entry((identity_type, authority_type.clone())) {
            Entry::Occupied(_) => {
                Err(RegistryError::AlreadyRegistered { identity_type, authority_type })
            }
            Entry::Vacant(entry) => {
                entry.insert(generator);
                Ok(())
            }
        }
    }

    pub fn get(
        &self,
        identity_type: EnclaveIdentityType,
        authority_type: &str,
    ) -> Option<Arc<dyn AssertionGenerator>> {
        self.generators.get(&(identity_type, authority_type.to_string())).cloned()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Offers of all initialized generators, ordered by identity type and then
    /// by authority type.
    pub fn create_offers(&self) -> Vec<AssertionOffer> {
        self.generators
            .values()
            .filter_map(|generator| generator.create_assertion_offer().ok())
            .collect()
    }

    /// Returns the initialized generator able to serve `request`, if any.
    pub fn select(&self, request: &AssertionRequest) -> Option<Arc<dyn AssertionGenerator>> {
        let description = request.description.as_ref()?;
        let identity_type = EnclaveIdentityType::try_from(description.identity_type).ok()?;
        self.get(identity_type, &description.authority_type)
            .filter(|generator| matches!(generator.can_generate(request), Ok(true)))
    }
}
