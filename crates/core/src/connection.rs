//! MongoDB connection management.
//!
//! A [`MongoConnector`] owns the connection string and lazily opens a single
//! database handle on first use. Every store operation goes through
//! [`MongoConnector::ensure_connected`], so the first request pays for the
//! connect and later requests reuse the cached handle.

use crate::constants::DEFAULT_DATABASE_NAME;
use crate::{NoteError, NoteResult};
use bson::doc;
use mongodb::{Client, Database};
use tokio::sync::OnceCell;

/// Lazily-initialised, process-lifetime MongoDB handle.
///
/// Concurrent first callers share one connect attempt. A failed attempt leaves
/// the cell empty, so the next call tries again. The handle is never torn down.
#[derive(Debug)]
pub struct MongoConnector {
    uri: String,
    database: OnceCell<Database>,
}

impl MongoConnector {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: OnceCell::new(),
        }
    }

    /// Returns the cached database handle, connecting first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Connection`] if the URI cannot be parsed or the
    /// server does not answer a `ping`.
    pub async fn ensure_connected(&self) -> NoteResult<&Database> {
        self.database
            .get_or_try_init(|| async {
                match connect(&self.uri).await {
                    Ok(db) => {
                        tracing::info!("MongoDB connected successfully (database: {})", db.name());
                        Ok(db)
                    }
                    Err(e) => {
                        tracing::error!("MongoDB connection error: {:?}", e);
                        Err(NoteError::Connection(e))
                    }
                }
            })
            .await
    }

    /// Whether a connection has been established in this process.
    pub fn is_connected(&self) -> bool {
        self.database.initialized()
    }
}

async fn connect(uri: &str) -> mongodb::error::Result<Database> {
    let client = Client::with_uri_str(uri).await?;
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME));
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_connector_is_not_connected() {
        let connector = MongoConnector::new("mongodb://localhost:27017/notes-app");
        assert!(!connector.is_connected());
    }

    #[tokio::test]
    async fn unparseable_uri_is_a_connection_error_and_is_retried() {
        let connector = MongoConnector::new("not-a-mongodb-uri");

        let first = connector.ensure_connected().await.unwrap_err();
        assert!(matches!(first, NoteError::Connection(_)));
        assert!(!connector.is_connected());

        let second = connector.ensure_connected().await.unwrap_err();
        assert!(matches!(second, NoteError::Connection(_)));
    }
}
