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

use crate::sgx_age::{
    crypto::v1::{certificate::CertificateFormat, Certificate},
    identity::v1::{AssertionDescription, AssertionRequest, EnclaveIdentityType},
};

impl Certificate {
    pub fn x509_der(data: impl Into<Vec<u8>>) -> Self {
        Self { format: CertificateFormat::X509Der as i32, data: data.into() }
    }

    pub fn x509_pem(data: impl Into<Vec<u8>>) -> Self {
        Self { format: CertificateFormat::X509Pem as i32, data: data.into() }
    }
}

impl AssertionDescription {
    pub fn new(identity_type: EnclaveIdentityType, authority_type: impl Into<String>) -> Self {
        Self { identity_type: identity_type as i32, authority_type: authority_type.into() }
    }
}

impl From<AssertionDescription> for AssertionRequest {
    fn from(description: AssertionDescription) -> Self {
        Self { description: Some(description) }
    }
}
