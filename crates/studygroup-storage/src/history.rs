use aws_sdk_s3::Client;
use tracing::{info, warn};

use studygroup_core::collaborators::{BoxFuture, PerformanceHistory};
use studygroup_core::error::StoreError;
use studygroup_core::keys;
use studygroup_core::models::performance::PerformanceRecord;
use studygroup_core::models::student::StudentProfile;

use crate::error::StorageError;
use crate::objects;
use crate::state;

/// Performance records under `performance/{student_id}/` and profiles at
/// `students/{student_id}.json`.
pub struct S3PerformanceHistory {
    client: Client,
    bucket: String,
}

impl S3PerformanceHistory {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// All of a student's records, most recently completed first.
    pub async fn records(&self, student_id: &str) -> Result<Vec<PerformanceRecord>, StorageError> {
        let prefix = keys::performance_prefix(student_id);
        let keys = objects::list_keys(&self.client, &self.bucket, &prefix).await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            match state::load_state::<PerformanceRecord>(&self.client, &self.bucket, key).await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(StorageError::Serialization(e)) => {
                    warn!(key = %key, error = %e, "skipping unreadable performance record");
                }
                Err(e) => return Err(e),
            }
        }

        records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(records)
    }
}

impl PerformanceHistory for S3PerformanceHistory {
    fn recent_scores<'a>(
        &'a self,
        student_id: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<f64>, StoreError>> {
        Box::pin(async move {
            let records = self.records(student_id).await?;
            Ok(records.iter().take(limit).map(|r| r.quiz_score).collect())
        })
    }

    fn record<'a>(
        &'a self,
        record: &'a PerformanceRecord,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let key = keys::performance_record(&record.student_id, record.completed_at);
            state::save_state(&self.client, &self.bucket, &key, record).await?;
            info!(
                student_id = %record.student_id,
                day = record.day,
                score = record.quiz_score,
                "performance recorded"
            );
            Ok(())
        })
    }

    fn student_profile<'a>(
        &'a self,
        student_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<StudentProfile>, StoreError>> {
        Box::pin(async move {
            let key = keys::student(student_id);
            Ok(state::load_state(&self.client, &self.bucket, &key).await?)
        })
    }

    fn save_student_profile<'a>(
        &'a self,
        profile: &'a StudentProfile,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let key = keys::student(&profile.student_id);
            state::save_state(&self.client, &self.bucket, &key, profile).await?;
            Ok(())
        })
    }
}
