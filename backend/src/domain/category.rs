//! Category data model.

use std::fmt;

use uuid::Uuid;

/// Validation errors returned when constructing category values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyTitle,
    TitleOutOfBounds { min: usize, max: usize },
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::TitleOutOfBounds { min, max } => {
                write!(f, "title must be between {min} and {max} characters")
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

/// Stable category identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil (all-zero) identifier, used as a degenerate-query sentinel.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Whether this is the nil identifier.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for CategoryId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimum allowed title length in characters.
pub const TITLE_MIN: usize = 3;
/// Maximum allowed title length in characters.
pub const TITLE_MAX: usize = 50;

/// Validated category title, 3 to 50 characters inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTitle(String);

impl CategoryTitle {
    /// Validate and construct a title from owned input.
    ///
    /// # Examples
    /// ```
    /// use catalog_api::domain::category::CategoryTitle;
    ///
    /// let title = CategoryTitle::new("Books").expect("valid title");
    /// assert_eq!(title.as_str(), "Books");
    /// assert!(CategoryTitle::new("ab").is_err());
    /// ```
    pub fn new(title: impl Into<String>) -> Result<Self, CategoryValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CategoryValidationError::EmptyTitle);
        }

        let length = title.chars().count();
        if !(TITLE_MIN..=TITLE_MAX).contains(&length) {
            return Err(CategoryValidationError::TitleOutOfBounds {
                min: TITLE_MIN,
                max: TITLE_MAX,
            });
        }

        Ok(Self(title))
    }

    /// Borrow the title as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for CategoryTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted category record.
///
/// ## Invariants
/// - `title` satisfies the [`CategoryTitle`] bounds; violating input is
///   rejected before a record can exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    title: CategoryTitle,
}

impl Category {
    /// Assemble a record from validated parts.
    pub const fn new(id: CategoryId, title: CategoryTitle) -> Self {
        Self { id, title }
    }

    /// Primary key.
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Validated title.
    pub const fn title(&self) -> &CategoryTitle {
        &self.title
    }
}

/// Input for creating a category; the service validates the title and
/// assigns the identifier.
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub title: String,
}

/// Input for the full-replace category update.
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub id: CategoryId,
    pub title: String,
}
