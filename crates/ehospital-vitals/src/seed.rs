//! Seed derivation and request keys.
//!
//! Everything here is a pure function of its inputs so that seeds and cache
//! keys are identical across calls and process restarts.
//!
//! Hash input layouts (bytes, in order):
//!
//! - identity seed: UTF-8 name bytes (explicit `Identity::Seed` skips hashing)
//! - metric seed:   identity seed as 8-byte little-endian, then metric name
//! - request key:   canonical JSON of the `SeriesRequest`

use sha2::{Digest, Sha256};

use ehospital_contracts::{
    error::{DashboardError, DashboardResult},
    series::{Identity, SeriesRequest},
};

/// Fold the first 8 bytes of a SHA-256 digest into a `u64` (little-endian).
fn digest_to_u64(digest: &[u8]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Map an identity to the seed of its random stream.
pub fn identity_seed(identity: &Identity) -> u64 {
    match identity {
        Identity::Seed(seed) => *seed,
        Identity::Name(name) => digest_to_u64(&Sha256::digest(name.as_bytes())),
    }
}

/// Seed for one metric's stream within an identity.
///
/// Keyed by metric name so a column's values do not change when other
/// metrics are added to or removed from the request.
pub fn metric_seed(identity_seed: u64, metric_name: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(identity_seed.to_le_bytes());
    hasher.update(metric_name.as_bytes());
    digest_to_u64(&hasher.finalize())
}

/// Lowercase hex SHA-256 of the request's canonical JSON.
///
/// Two requests share a key exactly when they would generate the same table.
pub fn request_key(request: &SeriesRequest) -> DashboardResult<String> {
    let json = serde_json::to_vec(request).map_err(|e| {
        DashboardError::invalid(format!("request could not be serialized: {}", e))
    })?;
    Ok(hex::encode(Sha256::digest(&json)))
}
