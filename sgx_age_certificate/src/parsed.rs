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

use const_oid::{AssociatedOid, ObjectIdentifier};
use sgx_age_proto_rust::sgx_age::crypto::v1::{certificate::CertificateFormat, Certificate};
use x509_cert::{
    der::{Decode, DecodePem},
    ext::{pkix::BasicConstraints, Extension},
};

#[derive(thiserror::Error, Debug)]
pub enum CertificateParseError {
    #[error("Unsupported certificate format: {0}")]
    UnsupportedFormat(String),
    #[error("Failed to decode der: {0}")]
    X509DerDecodeError(x509_cert::der::Error),
    #[error("Failed to decode pem: {0}")]
    X509PemDecodeError(x509_cert::der::Error),
    #[error("Failed to decode basic constraints extension: {0}")]
    BasicConstraintsDecodeError(x509_cert::der::Error),
}

/// Structured view of an encoded X.509 [`Certificate`].
///
/// Instances are only created by [`ParsedCertificate::parse`] and are never
/// modified afterwards, so they can be shared between threads freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCertificate {
    certificate: x509_cert::Certificate,
    // Value of the BasicConstraints `cA` flag, if the extension is present.
    is_ca: Option<bool>,
}

impl ParsedCertificate {
    /// Parses an encoded certificate. Only the X.509 DER and PEM formats are
    /// supported.
    pub fn parse(encoded: &Certificate) -> Result<Self, CertificateParseError> {
        let format = CertificateFormat::try_from(encoded.format).map_err(|_| {
            CertificateParseError::UnsupportedFormat(format!("unknown value {}", encoded.format))
        })?;
        let certificate = match format {
            CertificateFormat::X509Der => x509_cert::Certificate::from_der(&encoded.data)
                .map_err(CertificateParseError::X509DerDecodeError)?,
            CertificateFormat::X509Pem => x509_cert::Certificate::from_pem(&encoded.data)
                .map_err(CertificateParseError::X509PemDecodeError)?,
            CertificateFormat::Unknown => {
                return Err(CertificateParseError::UnsupportedFormat(
                    format.as_str_name().to_string(),
                ))
            }
        };
        let is_ca = find_extension(&certificate, &BasicConstraints::OID)
            .map(|extension| {
                BasicConstraints::from_der(extension.extn_value.as_bytes())
                    .map(|constraints| constraints.ca)
                    .map_err(CertificateParseError::BasicConstraintsDecodeError)
            })
            .transpose()?;
        Ok(Self { certificate, is_ca })
    }

    /// Issuer distinguished name in RFC 4514 string form.
    pub fn issuer(&self) -> String {
        self.certificate.tbs_certificate.issuer.to_string()
    }

    /// Subject distinguished name in RFC 4514 string form.
    pub fn subject(&self) -> String {
        self.certificate.tbs_certificate.subject.to_string()
    }

    /// Whether the issuer and subject names are identical, as for a root CA.
    pub fn is_self_issued(&self) -> bool {
        self.certificate.tbs_certificate.issuer == self.certificate.tbs_certificate.subject
    }

    /// Hex encoded serial number.
    pub fn serial_number(&self) -> String {
        hex::encode(self.certificate.tbs_certificate.serial_number.as_bytes())
    }

    /// Start of the validity period, as a duration since the UNIX epoch.
    pub fn not_before(&self) -> Duration {
        self.certificate.tbs_certificate.validity.not_before.to_unix_duration()
    }

    /// End of the validity period, as a duration since the UNIX epoch.
    pub fn not_after(&self) -> Duration {
        self.certificate.tbs_certificate.validity.not_after.to_unix_duration()
    }

    /// Checks whether `time` (since the UNIX epoch) falls within the validity
    /// period, both ends inclusive.
    pub fn is_valid_at(&self, time: Duration) -> bool {
        self.not_before() <= time && time <= self.not_after()
    }

    pub fn extension(&self, oid: &ObjectIdentifier) -> Option<&Extension> {
        find_extension(&self.certificate, oid)
    }

    /// Returns `None` if the certificate has no BasicConstraints extension.
    pub fn is_ca(&self) -> Option<bool> {
        self.is_ca
    }
}

fn find_extension<'a>(
    certificate: &'a x509_cert::Certificate,
    oid: &ObjectIdentifier,
) -> Option<&'a Extension> {
    certificate
        .tbs_certificate
        .extensions
        .as_ref()?
        .iter()
        .find(|extension| &extension.extn_id == oid)
}
