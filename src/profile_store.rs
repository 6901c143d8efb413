// ABOUTME: Storage abstraction for each user's most recent body profile
// ABOUTME: ProfileStore trait and a concurrent in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use pfc_core::errors::AppResult;
use pfc_core::models::BodyProfile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// A user's saved profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Owner of the profile
    pub user_id: Uuid,
    /// Body metrics as last submitted
    pub profile: BodyProfile,
    /// When the profile was last written
    pub updated_at: DateTime<Utc>,
}

/// Persistence for the last submitted profile, one per user
///
/// `save` is an upsert: it replaces any previous profile for the user.
pub trait ProfileStore: Send + Sync {
    /// Fetch the user's profile, if one was saved
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn load(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>>;

    /// Insert or replace the user's profile
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn save(&self, user_id: Uuid, profile: &BodyProfile) -> AppResult<StoredProfile>;
}

impl<S: ProfileStore + ?Sized> ProfileStore for Arc<S> {
    fn load(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>> {
        (**self).load(user_id)
    }

    fn save(&self, user_id: Uuid, profile: &BodyProfile) -> AppResult<StoredProfile> {
        (**self).save(user_id, profile)
    }
}

/// Process-local store backed by a sharded concurrent map
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<Uuid, StoredProfile>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a saved profile
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile has been saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self, user_id: Uuid) -> AppResult<Option<StoredProfile>> {
        Ok(self.profiles.get(&user_id).map(|entry| *entry.value()))
    }

    fn save(&self, user_id: Uuid, profile: &BodyProfile) -> AppResult<StoredProfile> {
        let stored = StoredProfile {
            user_id,
            profile: *profile,
            updated_at: Utc::now(),
        };
        let replaced = self.profiles.insert(user_id, stored).is_some();
        debug!(user.id = %user_id, replaced, "Saved body profile");
        Ok(stored)
    }
}
