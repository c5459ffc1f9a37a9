//! S3-compatible object store over the `rust-s3` crate.

use async_trait::async_trait;
use s3::Bucket;
use s3::creds::Credentials;
use s3::region::Region;

use crate::config::SluiceConfig;
use crate::error::{Result, SluiceError};

use super::ObjectStore;

/// Object store backed by an S3-compatible bucket.
pub struct S3Store {
    name: String,
    bucket: Bucket,
}

impl S3Store {
    /// Open a handle to the bucket `name`.
    ///
    /// Credentials come from the ambient environment chain (env vars,
    /// profile, instance role). A missing or partial chain fails here with
    /// [`SluiceError::Credentials`], before any object operation runs.
    pub fn open(name: &str, config: &SluiceConfig) -> Result<Self> {
        let credentials =
            Credentials::default().map_err(|e| SluiceError::Credentials(e.to_string()))?;

        let region = match &config.endpoint {
            Some(endpoint) => Region::Custom {
                region: config.region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config.region.parse().map_err(|e| {
                SluiceError::Config(format!("invalid region '{}': {}", config.region, e))
            })?,
        };

        let mut bucket = Bucket::new(name, region, credentials)
            .map_err(|e| SluiceError::Config(format!("cannot open bucket '{}': {}", name, e)))?;
        if config.path_style {
            bucket = bucket.with_path_style();
        }

        Ok(Self {
            name: name.to_string(),
            bucket,
        })
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self) -> Result<Vec<String>> {
        let pages = self
            .bucket
            .list(String::new(), None)
            .await
            .map_err(|e| SluiceError::List {
                bucket: self.name.clone(),
                message: e.to_string(),
            })?;

        let mut keys = Vec::new();
        for page in pages {
            for object in page.contents {
                // Folder marker objects have no content worth copying.
                if object.key.ends_with('/') {
                    continue;
                }
                keys.push(object.key);
            }
        }
        Ok(keys)
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let response = self
            .bucket
            .get_object(key)
            .await
            .map_err(|e| SluiceError::Fetch {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        if response.status_code() != 200 {
            return Err(SluiceError::Fetch {
                key: key.to_string(),
                message: format!("unexpected status {}", response.status_code()),
            });
        }
        Ok(response.bytes().to_vec())
    }

    async fn put(&self, key: &str, content: &[u8]) -> Result<()> {
        let response = self
            .bucket
            .put_object(key, content)
            .await
            .map_err(|e| SluiceError::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        if !(200..300).contains(&response.status_code()) {
            return Err(SluiceError::Upload {
                key: key.to_string(),
                message: format!("unexpected status {}", response.status_code()),
            });
        }
        Ok(())
    }
}
