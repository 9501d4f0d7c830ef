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

use sgx_age_proto_rust::sgx_age::crypto::v1::Certificate;

use crate::parsed::{CertificateParseError, ParsedCertificate};

#[derive(thiserror::Error, Debug)]
#[error("Malformed certificate at index {index}: {source}")]
pub struct MalformedCertificateError {
    /// Position of the offending entry in the input sequence.
    pub index: usize,
    #[source]
    pub source: CertificateParseError,
}

/// An immutable set of trust anchors.
///
/// Holds the encoded certificates in the order they were provided, together
/// with their parsed form. Both sequences always have the same length and
/// correspond pairwise.
#[derive(Clone, Debug, Default)]
pub struct CertificateStore {
    encoded: Vec<Certificate>,
    parsed: Vec<ParsedCertificate>,
}

impl CertificateStore {
    /// Parses every encoded certificate. Fails on the first entry that can't
    /// be parsed, in which case no store is created.
    pub fn load(encoded_certificates: Vec<Certificate>) -> Result<Self, MalformedCertificateError> {
        let parsed = encoded_certificates
            .iter()
            .enumerate()
            .map(|(index, encoded)| {
                ParsedCertificate::parse(encoded)
                    .map_err(|source| MalformedCertificateError { index, source })
            })
            .collect::<Result<Vec<ParsedCertificate>, MalformedCertificateError>>()?;
        Ok(Self { encoded: encoded_certificates, parsed })
    }

    pub fn encoded(&self) -> &[Certificate] {
        &self.encoded
    }

    pub fn parsed(&self) -> &[ParsedCertificate] {
        &self.parsed
    }

    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    /// Iterates over `(encoded, parsed)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Certificate, &ParsedCertificate)> {
        self.encoded.iter().zip(self.parsed.iter())
    }
}
