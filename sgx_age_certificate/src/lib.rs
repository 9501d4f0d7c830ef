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

//! Trust anchor handling for assertion generators.
//!
//! Root certificates arrive as encoded [`Certificate`] protos. A
//! [`CertificateStore`] keeps the encoded records exactly as received (so they
//! can be sent on the wire byte-for-byte) next to their parsed
//! [`ParsedCertificate`] form.
//!
//! [`Certificate`]: sgx_age_proto_rust::sgx_age::crypto::v1::Certificate

pub mod parsed;
pub mod store;


pub use parsed::{CertificateParseError, ParsedCertificate};
pub use store::{CertificateStore, MalformedCertificateError};
