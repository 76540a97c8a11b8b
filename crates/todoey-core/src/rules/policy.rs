use serde::Deserialize;

/// What happens to a Category's Items when the Category is deleted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    /// Refuse to delete a Category that still owns Items (`CategoryNotEmpty`)
    #[default]
    Reject,
    /// Delete the Category and all of its Items in one transaction
    Cascade,
}
