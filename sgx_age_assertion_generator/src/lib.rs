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

//! Assertion generators for enclave identities.
//!
//! An [`AssertionGenerator`] advertises the kind of assertion it can produce
//! through offers, matches incoming requests against that kind and produces
//! assertions on demand. The [`SgxAgeRemoteAssertionGenerator`] delegates the
//! signing to the Assertion Generator Enclave (AGE) and attaches the configured
//! trust anchors, so that a remote verifier can check the assertion's
//! provenance. Generators are looked up by identity and authority type through
//! an [`AssertionGeneratorRegistry`].

pub mod error;
pub mod generator;
pub mod null;
pub mod registry;
pub mod sgx_age_remote;


pub use crate::{
    error::{GeneratorError, RegistryError},
    generator::AssertionGenerator,
    null::NullAssertionGenerator,
    registry::AssertionGeneratorRegistry,
    sgx_age_remote::SgxAgeRemoteAssertionGenerator,
};
