//! Comma-separated size lists.
//!
//! Products carry their available sizes as a single comma-separated TEXT
//! column ("S,M,L,XL" or "28,30,32,34"). This wrapper keeps that wire and
//! storage format while giving callers a proper list.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An ordered list of product sizes.
///
/// Serialized (JSON and database) as the comma-separated form. Whitespace
/// around entries is trimmed and empty entries dropped, so `"S, M,,L"`
/// parses to `["S", "M", "L"]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sizes(String);

impl Sizes {
    /// Parse a comma-separated size list.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let entries: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect();
        Self(entries.join(","))
    }

    /// The comma-separated form stored in the database.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the individual sizes.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').filter(|e| !e.is_empty())
    }

    /// Whether the size is one of the listed options.
    #[must_use]
    pub fn contains(&self, size: &str) -> bool {
        self.iter().any(|s| s == size)
    }

    /// Number of listed sizes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the product lists no sizes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Sizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sizes {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Sizes {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Sizes {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse(&s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Sizes {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_empties() {
        let sizes = Sizes::parse("S, M,,L ");
        assert_eq!(sizes.as_str(), "S,M,L");
        assert_eq!(sizes.len(), 3);
    }

    #[test]
    fn test_contains() {
        let sizes = Sizes::parse("28,30,32,34");
        assert!(sizes.contains("30"));
        assert!(!sizes.contains("36"));
    }

    #[test]
    fn test_empty() {
        let sizes = Sizes::parse("");
        assert!(sizes.is_empty());
        assert_eq!(sizes.len(), 0);
    }

    #[test]
    fn test_display_is_storage_form() {
        let sizes = Sizes::parse("S,M,L,XL");
        assert_eq!(sizes.to_string(), "S,M,L,XL");
    }
}
