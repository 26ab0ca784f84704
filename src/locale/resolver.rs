//! Locale resolution and persistence

use super::types::{Locale, LocaleContext, LocaleSource};
use crate::auth::Subject;
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of a language change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeResult {
    /// Stored in the session and on the user
    Applied(Locale),
    /// Unsupported code or no subject; nothing changed
    Ignored,
}

/// Picks the display language of a request and records language changes
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    storage: Arc<StorageLayer>,
}

impl LocaleResolver {
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// Session value first, then the subject's stored value, then the default
    ///
    /// Unsupported values are skipped as if absent.
    pub fn resolve_for_request(
        session_locale: Option<&str>,
        stored_locale: Option<&str>,
    ) -> LocaleContext {
        if let Some(locale) = session_locale.and_then(Locale::parse) {
            return LocaleContext::new(locale, LocaleSource::Session);
        }
        if let Some(locale) = stored_locale.and_then(Locale::parse) {
            return LocaleContext::new(locale, LocaleSource::Subject);
        }
        LocaleContext::default()
    }

    /// Switch the display language for a subject
    ///
    /// The user row and the session slot are written in one transaction; the
    /// request context is only updated once that commits.
    pub async fn change_locale(
        &self,
        requested: &str,
        subject: Option<&Subject>,
        session_id: Option<&str>,
        context: &mut LocaleContext,
    ) -> Result<ChangeResult> {
        let Some(locale) = Locale::parse(requested) else {
            warn!("Ignoring unsupported locale {:?}", requested);
            return Ok(ChangeResult::Ignored);
        };

        let Some(subject) = subject else {
            warn!("Ignoring locale change without an authenticated subject");
            return Ok(ChangeResult::Ignored);
        };

        debug!("Changing locale of user {} to {}", subject.id(), locale);
        self.storage
            .db()
            .persist_locale(subject.id(), session_id, locale.code())
            .await?;

        context.set(locale);
        info!("User {} switched locale to {}", subject.id(), locale);
        Ok(ChangeResult::Applied(locale))
    }
}
