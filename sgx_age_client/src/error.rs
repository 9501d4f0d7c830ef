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

#[derive(thiserror::Error, Debug)]
pub enum RemoteAssertionError {
    /// The channel to the AGE couldn't be established within the deadline.
    /// Worth retrying with backoff.
    #[error("AGE at {address} unavailable after {deadline:?}: {reason}")]
    Unavailable { address: String, deadline: Duration, reason: String },
    /// The RPC itself failed. Worth retrying with backoff.
    #[error("RPC to the AGE failed: {0}")]
    Rpc(#[from] tonic::Status),
    /// The AGE replied with something that isn't a valid assertion. Usually a
    /// protocol or version mismatch, retrying won't help.
    #[error("Invalid response from the AGE: {0}")]
    InvalidResponse(String),
}

impl RemoteAssertionError {
    pub fn is_retryable(&self) -> bool {
        !matches!(self, RemoteAssertionError::InvalidResponse(_))
    }
}
