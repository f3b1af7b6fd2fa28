use coursehub_adapters::{DiskStaging, JwtAuthConfig};
use coursehub_core::{AssetStore, ObjectStore, PasswordHasher, UserStore};

/// State shared by the signup and login routes.
#[derive(Clone)]
pub struct AuthState<U, H>
where
    U: UserStore + Clone,
    H: PasswordHasher + Clone,
{
    pub user_store: U,
    pub password_hasher: H,
    pub jwt_config: JwtAuthConfig,
}

impl<U, H> AuthState<U, H>
where
    U: UserStore + Clone,
    H: PasswordHasher + Clone,
{
    pub fn new(user_store: U, password_hasher: H, jwt_config: JwtAuthConfig) -> Self {
        Self {
            user_store,
            password_hasher,
            jwt_config,
        }
    }
}

/// State shared by the upload routes.
#[derive(Clone)]
pub struct UploadState<O, A>
where
    O: ObjectStore + Clone,
    A: AssetStore + Clone,
{
    pub object_store: O,
    pub asset_store: A,
    pub staging: DiskStaging,
    pub max_upload_bytes: u64,
}

impl<O, A> UploadState<O, A>
where
    O: ObjectStore + Clone,
    A: AssetStore + Clone,
{
    pub fn new(object_store: O, asset_store: A, staging: DiskStaging, max_upload_bytes: u64) -> Self {
        Self {
            object_store,
            asset_store,
            staging,
            max_upload_bytes,
        }
    }
}
