use super::{HesiodResolver, MAX_REALM_REDIRECTS, RHS_EXTENSION};
use hesiod_domain::{HesiodError, Question, RealmFailure, RealmRef};
use std::borrow::Cow;
use tracing::debug;

impl HesiodResolver {
    /// Compose the DNS name queried for `question` of type `query_type`.
    ///
    /// `zephyr` / `sloc` becomes `zephyr.sloc.ns.athena.mit.edu` with the
    /// Athena layout. A question of the form `name@realm` replaces the
    /// configured realm: a dotted realm is used verbatim, anything else is
    /// first looked up under `rhs-extension` and the first answer is used.
    ///
    /// No escaping or length checks happen here; bad names fail at lookup.
    pub async fn prepare_dns_name(
        &self,
        question: &str,
        query_type: &str,
    ) -> Result<String, HesiodError> {
        self.build_name(question, query_type, 0).await
    }

    pub(super) async fn build_name(
        &self,
        question: &str,
        query_type: &str,
        depth: usize,
    ) -> Result<String, HesiodError> {
        let question = Question::parse(question);

        let realm: Cow<'_, str> = match question.realm {
            RealmRef::Default => Cow::Borrowed(self.realm.as_str()),
            RealmRef::Qualified(realm) => Cow::Owned(format!(".{}", realm)),
            RealmRef::Symbolic(realm) => {
                let resolved = self.redirect_realm(realm, depth).await?;
                Cow::Owned(format!(".{}", resolved))
            }
        };

        Ok(format!(
            "{}.{}{}{}",
            question.local_part, query_type, self.nameserver, realm
        ))
    }

    async fn redirect_realm(&self, realm: &str, depth: usize) -> Result<String, HesiodError> {
        if depth >= MAX_REALM_REDIRECTS {
            return Err(HesiodError::Resolution {
                realm: realm.to_string(),
                cause: RealmFailure::TooDeep(MAX_REALM_REDIRECTS),
            });
        }

        let candidates = self
            .resolve_at_depth(realm, RHS_EXTENSION, depth + 1)
            .await
            .map_err(|e| HesiodError::Resolution {
                realm: realm.to_string(),
                cause: RealmFailure::Lookup(Box::new(e)),
            })?;

        // First candidate wins; it is not validated.
        let resolved = candidates
            .into_iter()
            .next()
            .ok_or_else(|| HesiodError::Resolution {
                realm: realm.to_string(),
                cause: RealmFailure::NoCandidates,
            })?;

        debug!(realm, resolved = %resolved, depth, "Realm redirected via rhs-extension");
        Ok(resolved)
    }
}
