/// Where a question's realm comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealmRef<'a> {
    /// No `@`: use the configured realm suffix.
    Default,
    /// `name@some.domain`: the text after `@` is already a domain.
    Qualified(&'a str),
    /// `name@REALM`: the realm must be looked up under `rhs-extension`.
    Symbolic(&'a str),
}

/// A Hesiod question split into its local part and realm reference.
///
/// Only the first `@` separates the two; anything after it, including
/// further `@` characters, belongs to the realm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question<'a> {
    pub local_part: &'a str,
    pub realm: RealmRef<'a>,
}

impl<'a> Question<'a> {
    pub fn parse(question: &'a str) -> Self {
        match question.split_once('@') {
            None => Self {
                local_part: question,
                realm: RealmRef::Default,
            },
            Some((local_part, realm)) if realm.contains('.') => Self {
                local_part,
                realm: RealmRef::Qualified(realm),
            },
            Some((local_part, realm)) => Self {
                local_part,
                realm: RealmRef::Symbolic(realm),
            },
        }
    }

    pub fn is_redirected(&self) -> bool {
        !matches!(self.realm, RealmRef::Default)
    }
}
