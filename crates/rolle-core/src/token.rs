//! Navigation token parsing
//!
//! A token is one comma-separated unit of the location's `state` parameter.
//! It is either a bare integer (a tab selector) or a `<tag><id>` drill-down
//! selector such as `place12` or `character3`.

/// A drill-down token split into its alphabetic tag and numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeId {
    /// Alphabetic prefix before the first ASCII digit (`place`, `character`).
    pub tag: String,
    /// Trailing integer suffix. 0 when the token carries no digits.
    pub id: i64,
}

impl TypeId {
    /// Split a token at its first ASCII digit.
    ///
    /// A token without digits yields the whole token as tag with id 0; the
    /// generator registry rejects such tags later. A bare integer token
    /// yields an empty tag.
    pub fn parse(token: &str) -> TypeId {
        match token.find(|c: char| c.is_ascii_digit()) {
            Some(pos) => TypeId {
                tag: token[..pos].to_string(),
                id: token[pos..].parse().unwrap_or(0),
            },
            None => TypeId {
                tag: token.to_string(),
                id: 0,
            },
        }
    }

    /// Format a tag/id pair back into its token form.
    pub fn token(tag: &str, id: i64) -> String {
        format!("{}{}", tag, id)
    }
}
