/// Entries of the root navigation list, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Tap,
    TouchAndHold,
    Drag,
    Rotate,
    LineDrawing,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Tap,
        Destination::TouchAndHold,
        Destination::Drag,
        Destination::Rotate,
        Destination::LineDrawing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Tap => "Tap",
            Self::TouchAndHold => "Touch and Hold",
            Self::Drag => "Drag",
            Self::Rotate => "Rotate",
            Self::LineDrawing => "Line Drawing",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Tap => "Tap a shape to interact with it.",
            Self::TouchAndHold => "Touch and hold a shape to interact with it.",
            Self::Drag => "Drag a shape using one finger.",
            Self::Rotate => "Rotate a shape with two fingers.",
            Self::LineDrawing => "Use your finger to draw a simple line shape.",
        }
    }

    /// Glyph shown beside the label
    pub fn icon(self) -> &'static str {
        match self {
            Self::Tap => "👆",
            Self::TouchAndHold => "✋",
            Self::Drag => "↔",
            Self::Rotate => "🔄",
            Self::LineDrawing => "✏",
        }
    }
}
