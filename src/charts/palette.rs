//! Statistics colour palette

use crate::dimension::Dimension;

pub const STATISTICS_COLOR_PALETTE: [&str; 9] = [
    "#5470C6", // blue
    "#91CC75", // green
    "#EE6666", // red
    "#FAC858", // yellow
    "#73C0DE", // cyan
    "#3BA272", // teal
    "#FC8452", // orange
    "#9A60B4", // purple
    "#EA7CCC", // pink
];

fn color_offset(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Category => 0,
        Dimension::Difficulty => 3,
        Dimension::Type => 6,
    }
}

pub fn dimension_color(dimension: Dimension, index: usize) -> &'static str {
    STATISTICS_COLOR_PALETTE[(color_offset(dimension) + index) % STATISTICS_COLOR_PALETTE.len()]
}

pub fn dimension_palette(dimension: Dimension, count: usize) -> Vec<&'static str> {
    (0..count).map(|i| dimension_color(dimension, i)).collect()
}
