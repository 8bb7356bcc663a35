use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::error::BoardError;

/// Result of a successful [`BoardColumns::move_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Source and target were the same column.
    Unchanged,
}

/// Ordered columns of item identifiers. Every identifier lives in exactly
/// one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardColumns(Vec<Vec<String>>);

impl BoardColumns {
    pub fn new(columns: Vec<Vec<String>>) -> Self {
        Self(columns)
    }

    pub fn columns(&self) -> &[Vec<String>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Every identifier must be non-blank and unique across the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = HashSet::new();
        for (column, items) in self.0.iter().enumerate() {
            for item in items {
                if item.trim().is_empty() {
                    return Err(BoardError::EmptyItem { column });
                }
                if !seen.insert(item.as_str()) {
                    return Err(BoardError::DuplicateItem(item.clone()));
                }
            }
        }
        Ok(())
    }

    /// Removes `item` from column `from` and appends it to the end of column
    /// `to`. The board is left untouched on any error.
    pub fn move_item(
        &mut self,
        item: &str,
        from: usize,
        to: usize,
    ) -> Result<MoveOutcome, BoardError> {
        if from == to {
            return Ok(MoveOutcome::Unchanged);
        }

        let len = self.0.len();
        for index in [from, to] {
            if index >= len {
                return Err(BoardError::ColumnOutOfRange { index, len });
            }
        }

        let position = self.0[from]
            .iter()
            .position(|i| i == item)
            .ok_or_else(|| BoardError::ItemNotInColumn { item: item.to_string(), column: from })?;

        let moved = self.0[from].remove(position);
        self.0[to].push(moved);
        Ok(MoveOutcome::Moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(columns: &[&[&str]]) -> BoardColumns {
        BoardColumns::new(
            columns
                .iter()
                .map(|c| c.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn moving_to_another_column_appends_to_the_end() {
        let mut columns = board(&[&["item1"], &["item2"]]);
        let outcome = columns.move_item("item1", 0, 1).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(columns, board(&[&[], &["item2", "item1"]]));
    }

    #[test]
    fn dropping_on_the_source_column_is_a_no_op() {
        let mut columns = board(&[&["item1"], &["item2"]]);
        let outcome = columns.move_item("item1", 0, 0).unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(columns, board(&[&["item1"], &["item2"]]));
    }

    #[test]
    fn move_keeps_item_count_and_uniqueness() {
        let mut columns = board(&[&["a", "b", "c"], &["d"], &[]]);
        let moves = [("b", 0, 2), ("d", 1, 0), ("a", 0, 1), ("b", 2, 1), ("c", 0, 0)];
        for (item, from, to) in moves {
            columns.move_item(item, from, to).unwrap();
            assert_eq!(columns.item_count(), 4);
            assert!(columns.validate().is_ok());
            for id in ["a", "b", "c", "d"] {
                let homes = columns.columns().iter().filter(|c| c.iter().any(|i| i == id)).count();
                assert_eq!(homes, 1, "{id} is in {homes} columns");
            }
        }
        assert_eq!(columns, board(&[&["c", "d"], &["a", "b"], &[]]));
    }

    #[test]
    fn only_the_dragged_item_leaves_the_source() {
        let mut columns = board(&[&["a", "b", "c"], &["d"]]);
        columns.move_item("b", 0, 1).unwrap();
        assert_eq!(columns, board(&[&["a", "c"], &["d", "b"]]));
    }

    #[test]
    fn out_of_range_columns_are_rejected() {
        let mut columns = board(&[&["item1"], &["item2"]]);
        let before = columns.clone();
        assert_eq!(
            columns.move_item("item1", 0, 5),
            Err(BoardError::ColumnOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(
            columns.move_item("item1", 7, 1),
            Err(BoardError::ColumnOutOfRange { index: 7, len: 2 })
        );
        assert_eq!(columns, before);
    }

    #[test]
    fn item_missing_from_source_is_rejected() {
        let mut columns = board(&[&["item1"], &["item2"]]);
        let before = columns.clone();
        assert_eq!(
            columns.move_item("item2", 0, 1),
            Err(BoardError::ItemNotInColumn { item: "item2".to_string(), column: 0 })
        );
        assert_eq!(
            columns.move_item("ghost", 1, 0),
            Err(BoardError::ItemNotInColumn { item: "ghost".to_string(), column: 1 })
        );
        assert_eq!(columns, before);
    }

    #[test]
    fn validate_reports_duplicates_across_columns() {
        let columns = board(&[&["a", "b"], &["c", "a"]]);
        assert_eq!(columns.validate(), Err(BoardError::DuplicateItem("a".to_string())));
        assert!(board(&[&["a"], &[], &["b"]]).validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_identifiers() {
        let blank_last = board(&[&["a"], &["b", ""]]);
        assert_eq!(blank_last.validate(), Err(BoardError::EmptyItem { column: 1 }));
        let whitespace = board(&[&["  "], &["b"]]);
        assert_eq!(whitespace.validate(), Err(BoardError::EmptyItem { column: 0 }));
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let columns = board(&[&["item1"], &[]]);
        let json = serde_json::to_string(&columns).unwrap();
        assert_eq!(json, r#"[["item1"],[]]"#);
    }
}
