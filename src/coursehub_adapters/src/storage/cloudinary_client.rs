use chrono::Utc;
use coursehub_core::{ObjectStore, ObjectStoreError, ObjectUpload, ResourceType, StoredObject};
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Digest used for request signatures. Must match the algorithm configured on
/// the Cloudinary account; accounts verify SHA-1 unless switched over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

/// Client for the Cloudinary Upload API using signed requests.
#[derive(Clone)]
pub struct CloudinaryClient {
    http_client: Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: Secret<String>,
    folder: String,
    signature_algorithm: SignatureAlgorithm,
}

impl CloudinaryClient {
    pub fn new(
        base_url: String,
        cloud_name: String,
        api_key: String,
        api_secret: Secret<String>,
        folder: String,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            cloud_name,
            api_key,
            api_secret,
            folder,
            signature_algorithm: SignatureAlgorithm::default(),
        }
    }

    pub fn with_signature_algorithm(mut self, signature_algorithm: SignatureAlgorithm) -> Self {
        self.signature_algorithm = signature_algorithm;
        self
    }

    fn endpoint(&self, resource_type: ResourceType, action: &str) -> String {
        format!(
            "{}/v1_1/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.cloud_name,
            resource_type.as_str(),
            action
        )
    }

    fn sign(&self, params: &[(&str, &str)]) -> String {
        sign_params(
            params,
            self.api_secret.expose_secret(),
            self.signature_algorithm,
        )
    }
}

/// Cloudinary request signature: parameters sorted by name, joined as a query
/// string, suffixed with the API secret and hashed.
pub fn sign_params(
    params: &[(&str, &str)],
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    match algorithm {
        SignatureAlgorithm::Sha1 => hex_digest::<Sha1>(&to_sign, api_secret),
        SignatureAlgorithm::Sha256 => hex_digest::<Sha256>(&to_sign, api_secret),
    }
}

fn hex_digest<D: Digest>(to_sign: &str, api_secret: &str) -> String {
    let mut hasher = D::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait::async_trait]
impl ObjectStore for CloudinaryClient {
    #[tracing::instrument(
        name = "Uploading file to Cloudinary",
        skip_all,
        fields(resource_type = object.resource_type.as_str(), size = object.bytes.len())
    )]
    async fn put(&self, object: ObjectUpload) -> Result<StoredObject, ObjectStoreError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[
            ("folder", self.folder.as_str()),
            ("timestamp", timestamp.as_str()),
        ]);

        let file = Part::bytes(object.bytes)
            .file_name(object.file_name)
            .mime_str(&object.content_type)
            .map_err(|e| ObjectStoreError::Transport(e.to_string()))?;

        let form = Form::new()
            .part("file", file)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.folder.clone())
            .text("signature", signature);

        let response = self
            .http_client
            .post(self.endpoint(object.resource_type, "upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ObjectStoreError::Transport(e.to_string()))?;

        let uploaded: UploadResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ObjectStoreError::InvalidResponse(e.to_string()))?;

        Ok(StoredObject {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }

    #[tracing::instrument(name = "Destroying file on Cloudinary", skip(self))]
    async fn remove(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> Result<(), ObjectStoreError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = self.sign(&[("public_id", public_id), ("timestamp", timestamp.as_str())]);

        let response = self
            .http_client
            .post(self.endpoint(resource_type, "destroy"))
            .form(&[
                ("public_id", public_id),
                ("timestamp", timestamp.as_str()),
                ("api_key", self.api_key.as_str()),
                ("signature", signature.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ObjectStoreError::Transport(e.to_string()))?;

        let destroyed: DestroyResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ObjectStoreError::InvalidResponse(e.to_string()))?;

        match destroyed.result.as_str() {
            DESTROY_OK | DESTROY_NOT_FOUND => Ok(()),
            other => Err(ObjectStoreError::InvalidResponse(format!(
                "unexpected destroy result: {other}"
            ))),
        }
    }
}

async fn check_status(response: Response) -> Result<Response, ObjectStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);

    Err(ObjectStoreError::Rejected {
        status: status.as_u16(),
        message,
    })
}

const DESTROY_OK: &str = "ok";
const DESTROY_NOT_FOUND: &str = "not found";

#[derive(Deserialize, Debug)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Deserialize, Debug)]
struct DestroyResponse {
    result: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: ErrorMessage,
}

#[derive(Deserialize, Debug)]
struct ErrorMessage {
    message: String,
}
