use std::ops::Sub;

use crate::core::error::BoardError;

/// `DataTransfer` field holding the dragged item identifier.
pub const ITEM_FIELD: &str = "item";
/// `DataTransfer` field holding the source column index as decimal text.
pub const FROM_COLUMN_FIELD: &str = "fromColumn";

/// Computed-style properties copied from the source card onto the preview.
pub const CAPTURED_STYLE_PROPERTIES: [&str; 9] = [
    "background-color",
    "border",
    "width",
    "height",
    "border-radius",
    "display",
    "align-items",
    "justify-content",
    "font-weight",
];

/// What travels with a drag gesture between dragstart and drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub item: String,
    pub from_column: usize,
}

impl DragPayload {
    pub fn new(item: impl Into<String>, from_column: usize) -> Self {
        Self { item: item.into(), from_column }
    }

    /// Parses the raw strings read back from the `DataTransfer`.
    pub fn from_fields(item: &str, from_column: &str) -> Result<Self, BoardError> {
        if item.is_empty() {
            return Err(BoardError::MissingField(ITEM_FIELD));
        }
        let from_column = from_column.trim();
        if from_column.is_empty() {
            return Err(BoardError::MissingField(FROM_COLUMN_FIELD));
        }
        let from_column = from_column
            .parse::<usize>()
            .map_err(|_| BoardError::InvalidColumnIndex(from_column.to_string()))?;
        Ok(Self::new(item, from_column))
    }

    pub fn from_column_field(&self) -> String {
        self.from_column.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Captured CSS declarations, in capture order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewStyle {
    properties: Vec<(String, String)>,
}

impl PreviewStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration; empty values are dropped.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.properties.push((property.into(), value));
    }

    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|(property, value)| format!("{}: {}; ", property, value))
            .collect()
    }
}

/// The card being dragged in custom-preview mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSnapshot {
    pub item: String,
    pub style: PreviewStyle,
    /// Pointer position inside the source card at drag start.
    pub offset: Coordinate,
}

impl DragSnapshot {
    pub fn new(item: impl Into<String>, style: PreviewStyle, offset: Coordinate) -> Self {
        Self { item: item.into(), style, offset }
    }

    /// Top-left corner of the preview so the card stays under the pointer at
    /// the same spot it was grabbed.
    pub fn preview_position(&self, cursor: Coordinate) -> Coordinate {
        cursor - self.offset
    }

    pub fn preview_css(&self, cursor: Coordinate) -> String {
        let position = self.preview_position(cursor);
        format!(
            "{}position: absolute; pointer-events: none; top: {}px; left: {}px;",
            self.style.to_css(),
            position.y,
            position.x
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_carried_fields() {
        let payload = DragPayload::from_fields("item1", "0").unwrap();
        assert_eq!(payload, DragPayload::new("item1", 0));
        assert_eq!(DragPayload::from_fields("card", " 12 ").unwrap().from_column, 12);
        assert_eq!(payload.from_column_field(), "0");
    }

    #[test]
    fn payload_rejects_missing_fields() {
        assert_eq!(DragPayload::from_fields("", "0"), Err(BoardError::MissingField(ITEM_FIELD)));
        assert_eq!(
            DragPayload::from_fields("item1", ""),
            Err(BoardError::MissingField(FROM_COLUMN_FIELD))
        );
    }

    #[test]
    fn payload_rejects_non_index_columns() {
        for raw in ["abc", "-1", "1.5", "NaN"] {
            assert_eq!(
                DragPayload::from_fields("item1", raw),
                Err(BoardError::InvalidColumnIndex(raw.to_string())),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn preview_style_skips_empty_values() {
        let mut style = PreviewStyle::new();
        style.push("background-color", "rgb(186, 230, 253)");
        style.push("border", "");
        style.push("font-weight", "700");
        assert_eq!(style.to_css(), "background-color: rgb(186, 230, 253); font-weight: 700; ");
    }

    #[test]
    fn preview_follows_cursor_minus_grab_offset() {
        let snapshot = DragSnapshot::new("item1", PreviewStyle::new(), Coordinate::new(10.0, 25.0));
        let position = snapshot.preview_position(Coordinate::new(300.0, 200.0));
        assert_eq!(position, Coordinate::new(290.0, 175.0));
    }

    #[test]
    fn preview_css_is_absolute_and_inert() {
        let mut style = PreviewStyle::new();
        style.push("width", "400px");
        let snapshot = DragSnapshot::new("item1", style, Coordinate::new(5.0, 5.0));
        assert_eq!(
            snapshot.preview_css(Coordinate::new(50.0, 20.0)),
            "width: 400px; position: absolute; pointer-events: none; top: 15px; left: 45px;"
        );
    }
}
