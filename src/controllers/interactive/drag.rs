use crate::core::data::point::PixelPoint;

/// Pan gesture state, driven by the primary pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: PixelPoint,
    },
}

impl DragState {
    pub fn begin(&mut self, position: PixelPoint) {
        *self = Self::Dragging { anchor: position };
    }

    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Re-anchors an active drag at `position`.
    ///
    /// Returns the segment moved since the previous anchor, or `None` when idle.
    pub fn advance(&mut self, position: PixelPoint) -> Option<(PixelPoint, PixelPoint)> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => {
                let from = *anchor;
                *anchor = position;

                Some((from, position))
            }
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(DragState::default(), DragState::Idle);
        assert!(!DragState::default().is_active());
    }

    #[test]
    fn test_advance_while_idle_does_nothing() {
        let mut drag = DragState::Idle;

        assert_eq!(drag.advance(PixelPoint::new(5, 5)), None);
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_advance_reanchors() {
        let mut drag = DragState::Idle;
        drag.begin(PixelPoint::new(1, 2));

        assert_eq!(
            drag.advance(PixelPoint::new(4, 6)),
            Some((PixelPoint::new(1, 2), PixelPoint::new(4, 6)))
        );
        assert_eq!(
            drag.advance(PixelPoint::new(0, 0)),
            Some((PixelPoint::new(4, 6), PixelPoint::new(0, 0)))
        );
        assert_eq!(
            drag,
            DragState::Dragging {
                anchor: PixelPoint::new(0, 0)
            }
        );
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut drag = DragState::Idle;
        drag.begin(PixelPoint::new(1, 2));
        drag.end();

        assert!(!drag.is_active());
        assert_eq!(drag.advance(PixelPoint::new(3, 3)), None);
    }
}
