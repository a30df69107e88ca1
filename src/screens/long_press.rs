use std::sync::LazyLock;

use egui::{Color32, Id, Painter, Pos2, Rect, Ui, Vec2};
use rand::Rng;

use super::{Screen, centered};
use crate::geometry::hit_testing::capsule_contains;
use crate::input::{GestureEvent, GestureMask};
use crate::navigator::Destination;

pub const SIZE_COUNT: usize = 24;

/// Bounds of the randomized entries, inclusive
pub const RANDOM_SIZE_RANGE: std::ops::RangeInclusive<u16> = 20..=400;

const CAPSULE_COLOR: Color32 = Color32::from_rgb(255, 204, 0);

// `None` entries are drawn at random when the table is built
const SIZE_TEMPLATE: [Option<[u16; 2]>; SIZE_COUNT] = [
    Some([150, 80]),
    None,
    Some([200, 40]),
    None,
    Some([50, 250]),
    None,
    Some([220, 100]),
    None,
    Some([90, 90]),
    Some([376, 192]),
    Some([107, 332]),
    Some([345, 267]),
    Some([80, 397]),
    Some([280, 65]),
    Some([138, 300]),
    Some([48, 125]),
    Some([391, 351]),
    Some([166, 154]),
    Some([320, 215]),
    Some([67, 284]),
    Some([293, 390]),
    Some([188, 58]),
    Some([400, 183]),
    Some([112, 319]),
];

static SIZES: LazyLock<SizeTable> = LazyLock::new(|| SizeTable::generate(&mut rand::rng()));

/// The capsule sizes cycled through by long presses
#[derive(Debug, Clone, PartialEq)]
pub struct SizeTable {
    sizes: [Vec2; SIZE_COUNT],
}

impl SizeTable {
    /// The table shared by the whole process, randomized on first use
    pub fn global() -> &'static SizeTable {
        &SIZES
    }

    /// Fill the template, drawing each randomized dimension from `rng`
    pub fn generate(rng: &mut impl Rng) -> Self {
        let sizes = SIZE_TEMPLATE.map(|entry| {
            let [width, height] = entry.unwrap_or_else(|| {
                [
                    rng.random_range(RANDOM_SIZE_RANGE),
                    rng.random_range(RANDOM_SIZE_RANGE),
                ]
            });
            Vec2::new(f32::from(width), f32::from(height))
        });
        Self { sizes }
    }

    /// Size at `index`, which wraps around the table
    pub fn get(&self, index: usize) -> Vec2 {
        self.sizes[index % SIZE_COUNT]
    }

    pub fn len(&self) -> usize {
        SIZE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the entry at `index` was drawn at random
    pub fn is_randomized(index: usize) -> bool {
        SIZE_TEMPLATE[index % SIZE_COUNT].is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.sizes.iter().copied()
    }
}

/// Holding the capsule steps it through a table of sizes
#[derive(Debug, Clone, Default)]
pub struct LongPressScreen {
    size_index: usize,
}

impl LongPressScreen {
    pub fn size_index(&self) -> usize {
        self.size_index
    }

    pub fn size(&self) -> Vec2 {
        SizeTable::global().get(self.size_index)
    }

    /// Move to the next size, wrapping after the last one
    pub fn advance(&mut self) {
        self.size_index = (self.size_index + 1) % SIZE_COUNT;
    }
}

impl Screen for LongPressScreen {
    fn destination(&self) -> Destination {
        Destination::TouchAndHold
    }

    fn instructions(&self) -> &'static str {
        "Touch and hold the capsule to change its size"
    }

    fn gestures(&self) -> GestureMask {
        GestureMask::LONG_PRESS
    }

    fn reset(&mut self) {
        self.size_index = 0;
    }

    fn frame(&self, canvas: Rect) -> Rect {
        centered(canvas, self.size())
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        capsule_contains(Rect::from_min_size(Pos2::ZERO, self.size()), pos)
    }

    fn on_ended(&mut self, event: &GestureEvent) {
        if let GestureEvent::LongPress { .. } = event {
            self.advance();
            log::debug!("Capsule size {} is {:?}", self.size_index, self.size());
        }
    }

    fn paint(&self, ui: &Ui, painter: &Painter, canvas: Rect, animation_secs: f32) {
        let target = self.size();
        let ctx = ui.ctx();
        let id = Id::new("long_press_capsule_size");
        let size = Vec2::new(
            ctx.animate_value_with_time(id.with("width"), target.x, animation_secs),
            ctx.animate_value_with_time(id.with("height"), target.y, animation_secs),
        );

        let rect = centered(canvas, size);
        painter.rect_filled(rect, size.min_elem() / 2.0, CAPSULE_COLOR);
    }
}
