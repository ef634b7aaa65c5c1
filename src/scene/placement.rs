#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Frame edges an axes block can be pushed against.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Where a set of axes sits in the frame.
///
/// A tagged enum instead of a position argument inspected at runtime: the
/// collaborator resolves placement by matching on the variant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Pushed against a frame edge, separated by a buffer.
    Edge(Direction),
    /// Centered in the frame.
    Center,
}

impl Placement {
    /// Center coordinates of a `width` x `height` box placed in a frame of
    /// `frame_width` x `frame_height`, with `buff` of space to the edge.
    ///
    /// Frame coordinates are centered at the origin, y up.
    pub fn anchor(
        self,
        frame_width: f32,
        frame_height: f32,
        width: f32,
        height: f32,
        buff: f32,
    ) -> (f32, f32) {
        match self {
            Placement::Center => (0.0, 0.0),
            Placement::Edge(Direction::Up) => (0.0, frame_height / 2.0 - height / 2.0 - buff),
            Placement::Edge(Direction::Down) => (0.0, -frame_height / 2.0 + height / 2.0 + buff),
            Placement::Edge(Direction::Left) => (-frame_width / 2.0 + width / 2.0 + buff, 0.0),
            Placement::Edge(Direction::Right) => (frame_width / 2.0 - width / 2.0 - buff, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_origin() {
        assert_eq!(Placement::Center.anchor(14.0, 8.0, 11.0, 3.0, 0.3), (0.0, 0.0));
    }

    #[test]
    fn test_edges_respect_the_buffer() {
        // 8-high frame, 3-high axes, 0.3 buffer: top edge at y = 4 - 1.5 - 0.3
        let (x, y) = Placement::Edge(Direction::Up).anchor(14.0, 8.0, 11.0, 3.0, 0.3);
        assert_eq!(x, 0.0);
        assert!((y - 2.2).abs() < 1e-6);

        let (_, y_down) = Placement::Edge(Direction::Down).anchor(14.0, 8.0, 11.0, 3.0, 0.3);
        assert!((y_down + 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_up_and_down_are_mirrored() {
        let up = Placement::Edge(Direction::Up).anchor(14.0, 8.0, 11.0, 2.0, 0.3);
        let down = Placement::Edge(Direction::Down).anchor(14.0, 8.0, 11.0, 2.0, 0.3);
        assert_eq!(up.1, -down.1);
    }
}
