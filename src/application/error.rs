use thiserror::Error;

use crate::domain::EntityKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{kind} id already exists: {id}")]
    DuplicateId { kind: EntityKind, id: i64 },

    #[error("Dish name already exists: {0}")]
    DuplicateName(String),

    #[error("{kind} id does not exist: {id}")]
    NotFound { kind: EntityKind, id: i64 },

    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LedgerError::DuplicateId {
            kind: EntityKind::RawMaterial,
            id: 7,
        };
        assert_eq!(err.to_string(), "raw material id already exists: 7");

        let err = LedgerError::DuplicateName("Pizza".into());
        assert_eq!(err.to_string(), "Dish name already exists: Pizza");

        let err = LedgerError::NotFound {
            kind: EntityKind::Dish,
            id: 3,
        };
        assert_eq!(err.to_string(), "dish id does not exist: 3");

        let err = LedgerError::AmountOverflow("gross profit");
        assert_eq!(err.to_string(), "Amount overflow while computing gross profit");
    }
}
