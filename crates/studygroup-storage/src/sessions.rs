use aws_sdk_s3::Client;
use tracing::{debug, warn};

use studygroup_core::collaborators::{BoxFuture, SessionStore};
use studygroup_core::error::StoreError;
use studygroup_core::keys;
use studygroup_core::models::session::Session;

use crate::error::StorageError;
use crate::objects;
use crate::state;

/// Sessions stored as `sessions/{session_id}.json`.
pub struct S3SessionStore {
    client: Client,
    bucket: String,
}

impl S3SessionStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl SessionStore for S3SessionStore {
    fn find<'a>(
        &'a self,
        session_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<Session>, StoreError>> {
        Box::pin(async move {
            let key = keys::session(session_id);
            Ok(state::load_state(&self.client, &self.bucket, &key).await?)
        })
    }

    fn create(&self, session: Session) -> BoxFuture<'_, Result<Session, StoreError>> {
        Box::pin(async move {
            let key = keys::session(&session.session_id);
            match state::create_state(&self.client, &self.bucket, &key, &session).await {
                Ok(()) => {
                    debug!(session_id = %session.session_id, "session created");
                    Ok(session)
                }
                Err(StorageError::PreconditionFailed { .. }) => Err(StoreError::AlreadyExists {
                    session_id: session.session_id,
                }),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn save<'a>(&'a self, session: &'a Session) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let key = keys::session(&session.session_id);
            state::save_state(&self.client, &self.bucket, &key, session).await?;
            Ok(())
        })
    }

    // TODO: keep a per-student session index so listing does not read every
    // session document in the bucket.
    fn list_for_student<'a>(
        &'a self,
        student_id: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Session>, StoreError>> {
        Box::pin(async move {
            let keys =
                objects::list_keys(&self.client, &self.bucket, keys::SESSIONS_PREFIX).await?;

            let mut owned = Vec::new();
            for key in &keys {
                match state::load_state::<Session>(&self.client, &self.bucket, key).await {
                    Ok(Some(session)) if session.student_id == student_id => owned.push(session),
                    Ok(_) => {}
                    Err(StorageError::Serialization(e)) => {
                        warn!(key = %key, error = %e, "skipping unreadable session document");
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            owned.truncate(limit);
            Ok(owned)
        })
    }
}
