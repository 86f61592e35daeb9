use crate::error::{AppError, Result};

/// A validated pair of account and repository names, built fresh from each
/// form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub account: String,
    pub repository: String,
}

impl Query {
    /// Trims both fields and rejects the submission if either is empty.
    pub fn from_form(account: &str, repository: &str) -> Result<Self> {
        let account = account.trim();
        let repository = repository.trim();

        if account.is_empty() || repository.is_empty() {
            return Err(AppError::Validation);
        }

        Ok(Self {
            account: account.to_string(),
            repository: repository.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let q = Query::from_form("  octocat ", "\tHello-World\n").unwrap();
        assert_eq!(q.account, "octocat");
        assert_eq!(q.repository, "Hello-World");
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(matches!(
            Query::from_form("", "repo"),
            Err(AppError::Validation)
        ));
        assert!(matches!(
            Query::from_form("user", "   "),
            Err(AppError::Validation)
        ));
        assert!(matches!(
            Query::from_form(" ", ""),
            Err(AppError::Validation)
        ));
    }
}
