#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{interpolate_hsl, Rgb};

/// Named color roles shared by every scene.
///
/// One palette is passed per scene instead of each scene restating its own
/// color table. The defaults are the colors of the published renders.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub wave_1: Rgb,
    pub wave_2: Rgb,
    pub wave_3: Rgb,
    pub interference: Rgb,
    pub constructive: Rgb,
    pub destructive: Rgb,
    pub axes: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wave_1: Rgb::from_hex(0x83C167),      // green
            wave_2: Rgb::from_hex(0x017A79),      // bluegreen
            wave_3: Rgb::from_hex(0xEE82EE),      // violet
            interference: Rgb::from_hex(0x58C4DD), // blue
            constructive: Rgb::from_hex(0x83C167), // green
            destructive: Rgb::from_hex(0xFC6255),  // red
            axes: Rgb::from_hex(0xFFFFFF),
        }
    }
}

impl Palette {
    /// Map an interference score to a color between the anchors.
    ///
    /// 0 is fully destructive, 1 fully constructive; values outside `[0, 1]`
    /// clamp to the anchors.
    pub fn color_for(&self, score: f32) -> Rgb {
        interpolate_hsl(self.destructive, self.constructive, score)
    }

    /// Color of the `n`-th source in a bank, for curve/legend assignment.
    pub fn wave_color(&self, index: usize) -> Rgb {
        match index {
            0 => self.wave_1,
            1 => self.wave_2,
            _ => self.wave_3,
        }
    }

    /// Gradient strip colors for the constructive-to-destructive legend,
    /// left (constructive) to right (destructive).
    pub fn legend_gradient(&self, strips: usize) -> Vec<Rgb> {
        debug_assert!(strips >= 2);
        (0..strips)
            .map(|i| {
                let alpha = i as f32 / (strips - 1) as f32;
                interpolate_hsl(self.constructive, self.destructive, alpha)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_scores_hit_anchor_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(0.0), palette.destructive);
        assert_eq!(palette.color_for(1.0), palette.constructive);
    }

    #[test]
    fn test_legend_gradient_spans_the_anchors() {
        let palette = Palette::default();
        let strips = palette.legend_gradient(50);
        assert_eq!(strips.len(), 50);
        assert_eq!(strips[0], palette.constructive);
        assert_eq!(strips[49], palette.destructive);
    }

    #[test]
    fn test_wave_color_assignment_is_positional() {
        let palette = Palette::default();
        assert_eq!(palette.wave_color(0), palette.wave_1);
        assert_eq!(palette.wave_color(1), palette.wave_2);
        assert_eq!(palette.wave_color(2), palette.wave_3);
    }
}
