//! Blog list entries.
//!
//! A blog needs both a title and a url; author is optional and likes default
//! to zero. Drafts and patches validate their input before a repository sees
//! it, so stored entries always satisfy these invariants.

use std::fmt;

use uuid::Uuid;

use super::UserId;

/// Store-assigned blog identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Parse an identifier from its string form.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Required blog fields, named in validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogField {
    /// The `title` field.
    Title,
    /// The `url` field.
    Url,
}

impl BlogField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Url => "url",
        }
    }
}

/// Validation failures for blog drafts and patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogValidationError {
    /// One or more required fields were absent or blank.
    MissingFields(Vec<BlogField>),
    /// A like count below zero was supplied.
    NegativeLikes(i64),
}

impl fmt::Display for BlogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
                if names.len() == 1 {
                    write!(f, "missing required field: {}", names.join(", "))
                } else {
                    write!(f, "missing required fields: {}", names.join(", "))
                }
            }
            Self::NegativeLikes(value) => write!(f, "likes must not be negative, got {value}"),
        }
    }
}

impl std::error::Error for BlogValidationError {}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

fn check_likes(likes: i64) -> Result<i64, BlogValidationError> {
    if likes < 0 {
        return Err(BlogValidationError::NegativeLikes(likes));
    }
    Ok(likes)
}

/// A stored blog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    /// Store-assigned identifier.
    pub id: BlogId,
    /// Blog title; never blank.
    pub title: String,
    /// Author name; may be empty.
    pub author: String,
    /// Blog address; never blank.
    pub url: String,
    /// Like count; never negative.
    pub likes: i64,
    /// User who created the entry, if known.
    pub owner: Option<UserId>,
}

impl Blog {
    /// Whether `user` may delete this entry.
    ///
    /// Entries without an owner may be removed by any authenticated user.
    pub fn is_deletable_by(&self, user: &UserId) -> bool {
        self.owner.as_ref().is_none_or(|owner| owner == user)
    }

    /// Apply a validated patch, replacing the fields it carries.
    pub fn apply(&mut self, patch: BlogPatch) {
        let BlogPatch {
            title,
            author,
            url,
            likes,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(likes) = likes {
            self.likes = likes;
        }
    }
}

/// Validated blog contents awaiting an owner and an identifier.
///
/// # Examples
/// ```
/// use bloglist::domain::{BlogDraft, BlogField, BlogValidationError};
///
/// let draft = BlogDraft::try_new(
///     Some("Go To Statement Considered Harmful".into()),
///     None,
///     Some("https://example.com/goto".into()),
///     None,
/// )
/// .expect("valid draft");
/// assert_eq!(draft.likes(), 0);
///
/// let err = BlogDraft::try_new(None, Some("anon".into()), None, None).unwrap_err();
/// assert_eq!(
///     err,
///     BlogValidationError::MissingFields(vec![BlogField::Title, BlogField::Url])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    author: String,
    url: String,
    likes: i64,
}

impl BlogDraft {
    /// Validate raw blog fields, defaulting likes to zero.
    pub fn try_new(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<i64>,
    ) -> Result<Self, BlogValidationError> {
        let title = present(title);
        let url = present(url);

        let missing: Vec<BlogField> = [
            (BlogField::Title, title.is_none()),
            (BlogField::Url, url.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        let (Some(title), Some(url)) = (title, url) else {
            return Err(BlogValidationError::MissingFields(missing));
        };

        Ok(Self {
            title,
            author: author.map(|raw| raw.trim().to_owned()).unwrap_or_default(),
            url,
            likes: check_likes(likes.unwrap_or(0))?,
        })
    }

    /// Validated title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Like count after defaulting.
    pub fn likes(&self) -> i64 {
        self.likes
    }

    /// Attach the owning user to produce a repository insert payload.
    pub fn owned_by(self, owner: Option<UserId>) -> NewBlog {
        let Self {
            title,
            author,
            url,
            likes,
        } = self;
        NewBlog {
            title,
            author,
            url,
            likes,
            owner,
        }
    }
}

/// Insert payload for blog repositories; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    /// Blog title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Blog address.
    pub url: String,
    /// Initial like count.
    pub likes: i64,
    /// Creating user.
    pub owner: Option<UserId>,
}

impl NewBlog {
    /// Materialise the stored entry under `id`.
    pub fn into_blog(self, id: BlogId) -> Blog {
        let Self {
            title,
            author,
            url,
            likes,
            owner,
        } = self;
        Blog {
            id,
            title,
            author,
            url,
            likes,
            owner,
        }
    }
}

/// Partial update of a blog's mutable fields.
///
/// Absent fields keep their stored values; present title and url must not be
/// blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPatch {
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
    likes: Option<i64>,
}

impl BlogPatch {
    /// Validate raw patch fields.
    pub fn try_new(
        title: Option<String>,
        author: Option<String>,
        url: Option<String>,
        likes: Option<i64>,
    ) -> Result<Self, BlogValidationError> {
        let blank = |value: &Option<String>| value.as_ref().is_some_and(|raw| raw.trim().is_empty());
        let missing: Vec<BlogField> = [
            (BlogField::Title, blank(&title)),
            (BlogField::Url, blank(&url)),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();
        if !missing.is_empty() {
            return Err(BlogValidationError::MissingFields(missing));
        }

        Ok(Self {
            title: title.map(|raw| raw.trim().to_owned()),
            author: author.map(|raw| raw.trim().to_owned()),
            url: url.map(|raw| raw.trim().to_owned()),
            likes: likes.map(check_likes).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn some(value: &str) -> Option<String> {
        Some(value.to_owned())
    }

    #[rstest]
    #[case(None, some("u"), vec![BlogField::Title])]
    #[case(some("t"), None, vec![BlogField::Url])]
    #[case(some("  "), some(""), vec![BlogField::Title, BlogField::Url])]
    fn draft_names_missing_fields(
        #[case] title: Option<String>,
        #[case] url: Option<String>,
        #[case] expected: Vec<BlogField>,
    ) {
        let err = BlogDraft::try_new(title, None, url, None).expect_err("draft must fail");
        assert_eq!(err, BlogValidationError::MissingFields(expected));
    }

    #[rstest]
    fn draft_defaults_author_and_likes() {
        let draft = BlogDraft::try_new(some(" title "), None, some("url"), None).expect("valid");
        let blog = draft.owned_by(None).into_blog(BlogId::random());
        assert_eq!(blog.title, "title");
        assert_eq!(blog.author, "");
        assert_eq!(blog.likes, 0);
    }

    #[rstest]
    fn draft_rejects_negative_likes() {
        let err = BlogDraft::try_new(some("t"), None, some("u"), Some(-1)).expect_err("negative");
        assert_eq!(err, BlogValidationError::NegativeLikes(-1));
    }

    #[rstest]
    fn message_names_fields() {
        let one = BlogValidationError::MissingFields(vec![BlogField::Url]);
        let both = BlogValidationError::MissingFields(vec![BlogField::Title, BlogField::Url]);
        assert_eq!(one.to_string(), "missing required field: url");
        assert_eq!(both.to_string(), "missing required fields: title, url");
    }

    #[rstest]
    fn patch_replaces_only_present_fields() {
        let mut blog = BlogDraft::try_new(some("t"), some("a"), some("u"), Some(4))
            .expect("valid")
            .owned_by(None)
            .into_blog(BlogId::random());
        blog.apply(BlogPatch::try_new(None, None, None, Some(5)).expect("valid patch"));
        assert_eq!(blog.likes, 5);
        assert_eq!(blog.title, "t");
        assert_eq!(blog.author, "a");
    }

    #[rstest]
    fn patch_rejects_blank_title() {
        let err = BlogPatch::try_new(some(" "), None, None, None).expect_err("blank title");
        assert_eq!(err, BlogValidationError::MissingFields(vec![BlogField::Title]));
    }

    #[rstest]
    fn ownerless_blogs_are_deletable_by_anyone() {
        let owner = UserId::random();
        let mut blog = BlogDraft::try_new(some("t"), None, some("u"), None)
            .expect("valid")
            .owned_by(None)
            .into_blog(BlogId::random());
        assert!(blog.is_deletable_by(&owner));

        blog.owner = Some(owner);
        assert!(blog.is_deletable_by(&owner));
        assert!(!blog.is_deletable_by(&UserId::random()));
    }
}
