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

// This module provides the Rust types for the protos under `proto/`.
//
// The prost output is checked in under `generated/` so that building the
// workspace doesn't require `protoc`. Regenerate it with prost-build whenever
// the proto definitions change.

mod impls;

macro_rules! include_proto {
    ($package: tt) => {
        include!(concat!("../generated/", $package, ".rs"));
    };
}

pub mod sgx_age {
    // Do not lint generated code.
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    pub mod crypto {
        pub mod v1 {
            include_proto!("sgx_age.crypto.v1");
        }
    }

    pub mod identity {
        pub mod v1 {
            include_proto!("sgx_age.identity.v1");
        }
    }

    pub mod remote {
        pub mod v1 {
            include_proto!("sgx_age.remote.v1");

            /// Fully qualified name of the gRPC service exposed by the
            /// Assertion Generator Enclave.
            pub const REMOTE_ASSERTION_GENERATOR_SERVICE: &str =
                "sgx_age.remote.v1.RemoteAssertionGenerator";

            /// HTTP/2 path of the `GenerateSgxRemoteAssertion` RPC.
            pub const GENERATE_SGX_REMOTE_ASSERTION_PATH: &str =
                "/sgx_age.remote.v1.RemoteAssertionGenerator/GenerateSgxRemoteAssertion";
        }
    }
}
