//! Course-data provider HTTP client.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use yardage_core::{Course, HoleRecord, Resources, SurfacePolygon};

/// Client for the course-data provider.
pub struct CourseClient {
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
    pub(crate) client: reqwest::Client,
}

impl CourseClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Hole records (flag and tee positions) for a course.
    pub async fn holes(&self, course_id: u32) -> Result<Resources<HoleRecord>> {
        self.get(&format!("/v1/courses/{}/holes", course_id)).await
    }

    /// Surface polygons for one hole, keyed by the provider's hole id.
    pub async fn polygons(&self, hole_id: u32) -> Result<Resources<SurfacePolygon>> {
        self.get(&format!("/v1/holes/{}/polygons", hole_id)).await
    }

    /// Fetch every hole of a course together with its polygons.
    pub async fn course(&self, course_id: u32) -> Result<Course> {
        let holes = self.holes(course_id).await?.resources;
        let mut polygons = Vec::new();
        for hole in &holes {
            let mut batch = self
                .polygons(hole.id)
                .await
                .with_context(|| format!("fetching polygons for hole {}", hole.number))?;
            polygons.append(&mut batch.resources);
        }
        tracing::info!(
            course_id,
            holes = holes.len(),
            polygons = polygons.len(),
            "fetched course"
        );
        Ok(Course::new(holes, polygons))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let mut builder = self.client.get(&url);
        if let Some(key) = self.api_key.as_deref() {
            builder = builder.header("x-api-key", key);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("requesting {}", url))?;
        if !response.status().is_success() {
            anyhow::bail!("course provider returned {} for {}", response.status(), url);
        }
        response
            .json()
            .await
            .with_context(|| format!("decoding response from {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let client = CourseClient::new("https://courses.example.com/", None);
        assert_eq!(client.base_url, "https://courses.example.com");
    }

    #[tokio::test]
    async fn unreachable_provider_is_an_error() {
        let client = CourseClient::new("http://127.0.0.1:9", Some("key".to_string()));
        assert!(client.holes(1593).await.is_err());
    }
}
