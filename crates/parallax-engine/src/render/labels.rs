//! Text labels as a JSON side channel.
//!
//! Strings cannot ride the flat float buffer, so labels accumulate here
//! per frame and the host fetches them serialized as JSON, drawing them
//! on its own text layer above the triangle output.

use serde::{Deserialize, Serialize};

/// Horizontal anchoring for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One text label positioned in world coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    /// CSS color string, passed through to the host text layer.
    pub color: String,
    pub align: TextAlign,
    pub text: String,
}

/// Per-frame label accumulator.
#[derive(Debug, Default)]
pub struct LabelState {
    labels: Vec<Label>,
}

impl LabelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all labels. Called at the start of each step.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn push(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Convenience for the common case.
    pub fn text(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        color: &str,
        align: TextAlign,
        text: impl Into<String>,
    ) {
        self.labels.push(Label {
            x,
            y,
            size,
            bold,
            color: color.to_string(),
            align,
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    /// Serialize the current labels as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_to_json_array() {
        let mut state = LabelState::new();
        state.text(100.0, 50.0, 14.0, true, "#FFD700", TextAlign::Center, "Sun");
        state.text(200.0, 80.0, 12.0, false, "#FFFFFF", TextAlign::Left, "Earth");

        let json = state.to_json().unwrap();
        let parsed: Vec<Label> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "Sun");
        assert_eq!(parsed[0].align, TextAlign::Center);
        assert!(parsed[0].bold);
        assert_eq!(parsed[1].color, "#FFFFFF");
    }

    #[test]
    fn clear_empties_labels() {
        let mut state = LabelState::new();
        state.text(0.0, 0.0, 12.0, false, "#FFF", TextAlign::Left, "x");
        assert_eq!(state.len(), 1);
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.to_json().unwrap(), "[]");
    }
}
