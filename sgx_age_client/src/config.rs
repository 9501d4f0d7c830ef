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

use tonic::transport::ClientTlsConfig;

/// How long the client waits for the channel to the AGE to become ready.
pub const DEFAULT_CONNECTION_DEADLINE: Duration = Duration::from_secs(10);

/// Configuration of the [`crate::GrpcRemoteAssertionClient`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub connection_deadline: Duration,
    /// Credentials for the channel to the AGE. With `None` the channel is
    /// plaintext, which is only suitable when the transport is already secured
    /// (e.g. a local enclave channel) or in tests.
    pub tls: Option<ClientTlsConfig>,
}

/// Plaintext channel with [`DEFAULT_CONNECTION_DEADLINE`]. The AGE channel is
/// expected to be mutually authenticated, so production configurations must
/// add credentials with [`ClientConfig::with_tls_config`].
impl Default for ClientConfig {
    fn default() -> Self {
        Self { connection_deadline: DEFAULT_CONNECTION_DEADLINE, tls: None }
    }
}

impl ClientConfig {
    pub fn with_connection_deadline(mut self, connection_deadline: Duration) -> Self {
        self.connection_deadline = connection_deadline;
        self
    }

    /// Uses TLS for the channel. Mutual authentication is enabled by setting
    /// a client identity on `tls`.
    pub fn with_tls_config(mut self, tls: ClientTlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }
}
