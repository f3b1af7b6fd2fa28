//! In-memory doubles shared by the use case tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use coursehub_core::{
    AssetStore, AssetStoreError, Course, CourseFilter, CourseId, CourseStore, CourseStoreError,
    Email, Identity, NewUser, ObjectStore, ObjectStoreError, ObjectUpload, Password,
    PasswordHash, PasswordHashError, PasswordHasher, ResourceType, Role, StoredObject,
    UploadedAsset, User, UserId, UserStore, UserStoreError,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockUserStore {
    pub users: Arc<RwLock<HashMap<Email, User>>>,
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let user = User::create(user, Utc::now());
        users.insert(user.email().clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

/// Deterministic stand-in for a real hash; still never equal to the plaintext.
#[derive(Clone, Default)]
pub struct PrefixHasher;

const HASH_PREFIX: &str = "hashed:";

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError> {
        Ok(PasswordHash::new(Secret::from(format!(
            "{HASH_PREFIX}{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        candidate: &Password,
        expected: &PasswordHash,
    ) -> Result<(), PasswordHashError> {
        let candidate = format!("{HASH_PREFIX}{}", candidate.as_ref().expose_secret());
        if &candidate == expected.as_ref().expose_secret() {
            Ok(())
        } else {
            Err(PasswordHashError::Mismatch)
        }
    }
}

#[derive(Clone, Default)]
pub struct MockCourseStore {
    pub courses: Arc<RwLock<HashMap<CourseId, Course>>>,
}

impl MockCourseStore {
    pub async fn insert(&self, course: Course) {
        self.courses.write().await.insert(course.id, course);
    }

    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }
}

#[async_trait]
impl CourseStore for MockCourseStore {
    async fn add_course(&self, course: Course) -> Result<Course, CourseStoreError> {
        self.courses.write().await.insert(course.id, course.clone());
        Ok(course)
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, CourseStoreError> {
        self.courses
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CourseStoreError::CourseNotFound)
    }

    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>, CourseStoreError> {
        let mut courses: Vec<Course> = self
            .courses
            .read()
            .await
            .values()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect();
        courses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(courses)
    }

    async fn update_course(&self, course: Course) -> Result<Course, CourseStoreError> {
        let mut courses = self.courses.write().await;
        let stored = courses
            .get_mut(&course.id)
            .ok_or(CourseStoreError::CourseNotFound)?;
        *stored = course.clone();
        Ok(course)
    }

    async fn delete_course(&self, id: CourseId) -> Result<(), CourseStoreError> {
        self.courses
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(CourseStoreError::CourseNotFound)
    }
}

#[derive(Clone, Default)]
pub struct MockObjectStore {
    pub fail_uploads: bool,
    pub uploads: Arc<Mutex<Vec<ObjectUpload>>>,
    pub removed: Arc<Mutex<Vec<(String, ResourceType)>>>,
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put(&self, object: ObjectUpload) -> Result<StoredObject, ObjectStoreError> {
        if self.fail_uploads {
            return Err(ObjectStoreError::Transport("connection reset".to_string()));
        }
        let public_id = format!("coursehub/{}", object.file_name);
        let url = format!(
            "https://res.cloudinary.com/demo/{}/upload/v1/{}",
            object.resource_type.as_str(),
            public_id
        );
        self.uploads.lock().unwrap().push(object);
        Ok(StoredObject { url, public_id })
    }

    async fn remove(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> Result<(), ObjectStoreError> {
        self.removed
            .lock()
            .unwrap()
            .push((public_id.to_string(), resource_type));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockAssetStore {
    pub fail_writes: bool,
    pub assets: Arc<Mutex<Vec<UploadedAsset>>>,
}

#[async_trait]
impl AssetStore for MockAssetStore {
    async fn add_asset(&self, asset: UploadedAsset) -> Result<UploadedAsset, AssetStoreError> {
        if self.fail_writes {
            return Err(AssetStoreError::UnexpectedError("disk full".to_string()));
        }
        self.assets.lock().unwrap().push(asset.clone());
        Ok(asset)
    }
}

pub fn identity(role: Role) -> Identity {
    Identity {
        id: UserId::new(),
        email: "caller@example.com".to_string(),
        name: "Caller".to_string(),
        role,
    }
}
