//! Secret resolution with default fallback.
//!
//! `resolve_env` looks up `<app>/<stage>`, falls back to `<app>/default`, and
//! checks the required keys against whichever secret was found first.
//! Each lookup produces an [`Attempt`]; only `Attempt::Found` stops the
//! search. Everything else is logged and the next identifier is tried.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::core::store::SecretStore;
use crate::core::types::{Origin, ResolvedEnv, SecretId, SecretPayload};
use crate::error::{ResolveError, Result, StoreError};

/// Outcome of fetching and decoding one secret identifier.
#[derive(Debug)]
pub enum Attempt {
    /// The secret exists and decoded to a string map.
    Found(SecretPayload),
    /// The store has no string value under this identifier.
    Absent,
    /// The secret exists but its value is not a JSON object of strings.
    Malformed(String),
    /// The store lookup itself failed.
    Failed(StoreError),
}

/// Decode a secret string into a payload.
pub fn parse_payload(raw: &str) -> std::result::Result<SecretPayload, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Fetch one identifier and decode it. Never fails: every failure mode is an
/// `Attempt` variant.
pub fn attempt<S: SecretStore + ?Sized>(store: &S, id: &SecretId) -> Attempt {
    match store.fetch(id) {
        Ok(Some(raw)) => match parse_payload(&raw) {
            Ok(payload) => Attempt::Found(payload),
            Err(e) => Attempt::Malformed(e.to_string()),
        },
        Ok(None) => Attempt::Absent,
        Err(e) => Attempt::Failed(e),
    }
}

/// Fetch `id`, logging anything short of success.
fn lookup<S: SecretStore + ?Sized>(store: &S, id: &SecretId) -> Option<SecretPayload> {
    match attempt(store, id) {
        Attempt::Found(payload) => {
            debug!(id = %id, keys = payload.len(), "secret found");
            Some(payload)
        }
        Attempt::Absent => {
            debug!(id = %id, "secret not found");
            None
        }
        Attempt::Malformed(reason) => {
            warn!(id = %id, %reason, "secret is not a JSON object of strings, ignoring");
            None
        }
        Attempt::Failed(e) => {
            warn!(id = %id, error = %e, "secret lookup failed, treating as not found");
            None
        }
    }
}

/// Resolve the runtime environment of `app` for `stage`.
///
/// With an empty `required` list the found payload is returned verbatim.
/// Otherwise the result holds exactly the required keys, each guaranteed
/// non-empty.
///
/// # Errors
///
/// - `ResolveError::MissingSecret` if neither `<app>/<stage>` nor
///   `<app>/default` yields a payload
/// - `ResolveError::MissingKey` naming the first required key (in list
///   order) that is absent or empty
pub fn resolve_env<S: SecretStore + ?Sized>(
    store: &S,
    app: &str,
    stage: &str,
    required: &[String],
) -> Result<ResolvedEnv> {
    let stage_id = SecretId::for_stage(app, stage);
    let default_id = SecretId::fallback(app);

    debug!(store = store.name(), %stage_id, "resolving environment");

    let found = match lookup(store, &stage_id) {
        Some(payload) => Some((payload, stage_id.clone(), Origin::Stage)),
        // A stage named "default" already was the fallback.
        None if stage_id == default_id => None,
        None => lookup(store, &default_id).map(|p| (p, default_id.clone(), Origin::Default)),
    };

    let Some((payload, source, origin)) = found else {
        return Err(ResolveError::MissingSecret {
            stage_id,
            default_id,
        }
        .into());
    };

    let vars = select_required(payload, required, &source)?;
    debug!(source = %source, %origin, keys = vars.len(), "environment resolved");

    Ok(ResolvedEnv::new(vars, source, origin))
}

/// Keep only the required keys, failing on the first missing or empty one.
fn select_required(
    mut payload: SecretPayload,
    required: &[String],
    source: &SecretId,
) -> Result<BTreeMap<String, String>> {
    if required.is_empty() {
        return Ok(payload);
    }

    let mut vars = BTreeMap::new();
    for key in required {
        match payload.remove(key) {
            Some(value) if !value.is_empty() => {
                vars.insert(key.clone(), value);
            }
            _ => {
                return Err(ResolveError::MissingKey {
                    key: key.clone(),
                    source_id: source.clone(),
                }
                .into())
            }
        }
    }
    Ok(vars)
}
