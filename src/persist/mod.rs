//! Persistence decorator for stores.
//!
//! This module provides snapshot serialization for store state, so a
//! store's value survives process restarts. [`PersistedStore`] wraps the
//! base container: on construction it hydrates from the backend when a
//! snapshot exists, and after every dispatch it writes a fresh snapshot.
//! Persistence is a pass-through to a key-value byte store; it adds no
//! integrity guarantees.

use crate::core::{Action, Reducer, State};
use crate::store::{Observer, StateStore, Store, Subscription};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

pub mod backend;
pub mod error;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::PersistError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a store's state.
/// Does NOT include the reducer or observers (not serializable).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: State> {
    /// Snapshot format version
    pub version: u32,

    /// Name of the store this snapshot belongs to (the storage key)
    pub name: String,

    /// When the snapshot was written
    pub timestamp: DateTime<Utc>,

    /// The state value at that moment
    pub state: S,
}

impl<S: State> Snapshot<S> {
    /// Capture the current snapshot of a state value.
    pub fn capture(name: &str, state: S) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            name: name.to_string(),
            timestamp: Utc::now(),
            state,
        }
    }

    /// Encode to bytes in the given format.
    pub fn encode(&self, format: SnapshotFormat) -> Result<Vec<u8>, PersistError> {
        match format {
            SnapshotFormat::Json => serde_json::to_vec(self)
                .map_err(|err| PersistError::SerializationFailed(err.to_string())),
            SnapshotFormat::Binary => bincode::serialize(self)
                .map_err(|err| PersistError::SerializationFailed(err.to_string())),
        }
    }

    /// Decode from bytes in the given format, validating the version.
    ///
    /// The version field is read first, before the state is touched, so a
    /// snapshot from a newer format reports `UnsupportedVersion` even when
    /// its state shape no longer matches `S`.
    pub fn decode(bytes: &[u8], format: SnapshotFormat) -> Result<Self, PersistError> {
        let envelope: VersionEnvelope = match format {
            SnapshotFormat::Json => serde_json::from_slice(bytes)
                .map_err(|err| PersistError::DeserializationFailed(err.to_string()))?,
            SnapshotFormat::Binary => bincode::deserialize(bytes)
                .map_err(|err| PersistError::DeserializationFailed(err.to_string()))?,
        };

        if envelope.version != SNAPSHOT_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: envelope.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        match format {
            SnapshotFormat::Json => serde_json::from_slice(bytes)
                .map_err(|err| PersistError::DeserializationFailed(err.to_string())),
            SnapshotFormat::Binary => bincode::deserialize(bytes)
                .map_err(|err| PersistError::DeserializationFailed(err.to_string())),
        }
    }
}

/// The leading fields of a snapshot, enough to validate the version.
///
/// `version` is the first serialized field of [`Snapshot`], so both
/// formats can read it without decoding the state.
#[derive(Deserialize)]
struct VersionEnvelope {
    version: u32,
}

/// Wire format for snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Human-readable JSON via `serde_json`
    Json,
    /// Compact binary via `bincode`
    Binary,
}

/// Configuration for a persisted store: the storage key and the format.
#[derive(Clone, Debug)]
pub struct PersistConfig {
    /// Storage key the snapshot is saved under
    pub name: String,
    /// Snapshot wire format
    pub format: SnapshotFormat,
}

impl PersistConfig {
    /// JSON snapshots under `name`.
    pub fn json(name: &str) -> Self {
        Self {
            name: name.to_string(),
            format: SnapshotFormat::Json,
        }
    }

    /// Binary snapshots under `name`.
    pub fn binary(name: &str) -> Self {
        Self {
            name: name.to_string(),
            format: SnapshotFormat::Binary,
        }
    }
}

/// A store decorated with snapshot persistence.
///
/// Construction builds the inner [`Store`]: when the backend holds a
/// snapshot under the configured name, the store hydrates from it and the
/// provided initial state is ignored; otherwise the initial state is
/// used. Every dispatch delegates to the inner store (reducer, state
/// replacement, observer fan-out) and then writes a fresh snapshot.
///
/// Dispatch itself stays infallible per the container contract, so a
/// failed save never aborts a dispatch. The most recent failure is
/// retained and can be taken with [`take_save_error`]; callers that need
/// a guaranteed write call [`persist`] explicitly.
///
/// [`take_save_error`]: PersistedStore::take_save_error
/// [`persist`]: PersistedStore::persist
///
/// # Example
///
/// ```rust
/// use reflow::core::{Action, Reducer};
/// use reflow::persist::{MemoryBackend, PersistConfig, PersistedStore};
///
/// #[derive(Clone, Debug)]
/// enum Tick {
///     Tick,
/// }
///
/// impl Action for Tick {
///     fn kind(&self) -> &str {
///         "Tick"
///     }
/// }
///
/// let reducer = || Reducer::new(|n: &u32, _: &Tick| n + 1);
///
/// let backend = MemoryBackend::new();
/// let config = PersistConfig::json("tick-storage");
///
/// let store = PersistedStore::new(reducer(), 0, backend, config.clone()).unwrap();
/// store.dispatch(Tick::Tick);
/// store.dispatch(Tick::Tick);
///
/// // A new store over the same backend hydrates from the snapshot.
/// let backend = store.into_backend();
/// let revived = PersistedStore::new(reducer(), 0, backend, config).unwrap();
/// assert_eq!(revived.get_state(), 2);
/// ```
pub struct PersistedStore<S: State, A: Action, B: StorageBackend> {
    inner: Store<S, A>,
    backend: B,
    config: PersistConfig,
    last_save_error: RwLock<Option<PersistError>>,
}

impl<S: State, A: Action, B: StorageBackend> PersistedStore<S, A, B> {
    /// Create a persisted store, hydrating from the backend when a
    /// snapshot exists under the configured name.
    pub fn new(
        reducer: Reducer<S, A>,
        initial: S,
        backend: B,
        config: PersistConfig,
    ) -> Result<Self, PersistError> {
        let state = match backend.load(&config.name)? {
            Some(bytes) => Snapshot::<S>::decode(&bytes, config.format)?.state,
            None => initial,
        };

        Ok(Self {
            inner: Store::new(reducer, state),
            backend,
            config,
            last_save_error: RwLock::new(None),
        })
    }

    /// Get a clone of the current state. No side effects.
    pub fn get_state(&self) -> S {
        self.inner.get_state()
    }

    /// Dispatch through the inner store, then save a snapshot.
    ///
    /// A failed save is retained for [`take_save_error`] rather than
    /// propagated; the state transition and notification have already
    /// happened by then.
    ///
    /// [`take_save_error`]: PersistedStore::take_save_error
    pub fn dispatch(&self, action: A) {
        self.inner.dispatch(action);
        if let Err(err) = self.persist() {
            *self.last_save_error.write().unwrap() = Some(err);
        }
    }

    /// Register an observer on the inner store.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.subscribe(observer)
    }

    /// Write a snapshot of the current state now.
    pub fn persist(&self) -> Result<(), PersistError> {
        let snapshot = Snapshot::capture(&self.config.name, self.inner.get_state());
        let bytes = snapshot.encode(self.config.format)?;
        self.backend.save(&self.config.name, &bytes)
    }

    /// Take the most recent save failure, if any, clearing it.
    pub fn take_save_error(&self) -> Option<PersistError> {
        self.last_save_error.write().unwrap().take()
    }

    /// The inner store handle.
    pub fn inner(&self) -> &Store<S, A> {
        &self.inner
    }

    /// Consume the decorator and return the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<S: State, A: Action, B: StorageBackend> StateStore<S, A> for PersistedStore<S, A, B> {
    fn get_state(&self) -> S {
        PersistedStore::get_state(self)
    }

    fn dispatch(&self, action: A) {
        PersistedStore::dispatch(self, action)
    }

    fn subscribe(&self, observer: Observer) -> Subscription {
        PersistedStore::subscribe(self, observer)
    }
}
