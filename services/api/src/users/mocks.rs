//! In-memory repositories for handler and provisioner tests.

use std::sync::Mutex;

use async_trait::async_trait;
use supausers_common::error::{SupausersError, SupausersResult};
use supausers_supabase::identity::models::{CreatedIdentity, NewIdentity};
use supausers_supabase::identity::repositories::IdentityRepository;
use supausers_supabase::profiles::models::{NewProfile, ProfileRow};
use supausers_supabase::profiles::repositories::ProfileRepository;

pub enum IdentityBehavior {
    Create(&'static str),
    NoUser,
    Fail(&'static str),
}

pub struct MockIdentityRepo {
    behavior: IdentityBehavior,
    fail_deletes: bool,
    created: Mutex<Vec<NewIdentity>>,
    deleted: Mutex<Vec<String>>,
}

impl MockIdentityRepo {
    pub fn new(behavior: IdentityBehavior) -> Self {
        Self {
            behavior,
            fail_deletes: false,
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn created(&self) -> Vec<NewIdentity> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityRepository for MockIdentityRepo {
    async fn create_user(&self, identity: NewIdentity) -> SupausersResult<CreatedIdentity> {
        let email = identity.email.clone();
        self.created.lock().unwrap().push(identity);
        match self.behavior {
            IdentityBehavior::Create(id) => Ok(CreatedIdentity {
                id: id.to_string(),
                email: Some(email),
            }),
            IdentityBehavior::NoUser => Err(SupausersError::IdentityNotCreated),
            IdentityBehavior::Fail(msg) => Err(SupausersError::Upstream(msg.to_string())),
        }
    }

    async fn delete_user(&self, user_id: &str) -> SupausersResult<()> {
        self.deleted.lock().unwrap().push(user_id.to_string());
        if self.fail_deletes {
            return Err(SupausersError::Upstream("delete failed".to_string()));
        }
        Ok(())
    }
}

pub enum ProfileBehavior {
    Insert,
    NoData,
    Fail(&'static str),
}

pub struct MockProfileRepo {
    behavior: ProfileBehavior,
    inserted: Mutex<Vec<NewProfile>>,
}

impl MockProfileRepo {
    pub fn new(behavior: ProfileBehavior) -> Self {
        Self {
            behavior,
            inserted: Mutex::new(Vec::new()),
        }
    }

    pub fn inserted(&self) -> Vec<NewProfile> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepo {
    async fn insert(&self, profile: NewProfile) -> SupausersResult<ProfileRow> {
        let row = ProfileRow {
            id: Some(profile.id.clone()),
            username: Some(profile.username.clone()),
            email: Some(profile.email.clone()),
        };
        self.inserted.lock().unwrap().push(profile);
        match self.behavior {
            ProfileBehavior::Insert => Ok(row),
            ProfileBehavior::NoData => Err(SupausersError::ProfileNotCreated),
            ProfileBehavior::Fail(msg) => Err(SupausersError::Upstream(msg.to_string())),
        }
    }
}
