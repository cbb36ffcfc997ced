//! Per-frame wheel layout for renderers.
use crate::{
    palette::{Rgb, slice_color},
    participants::ParticipantList,
    rotation::{slice_angle, slice_at_pointer},
};

/// One drawable slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice<'a> {
    pub index: usize,
    pub label: &'a str,
    /// Start angle in radians, including the wheel rotation.
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Rgb,
}

impl Slice<'_> {
    /// Angle through the middle of the slice, where the label goes.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Layout of every slice at a given rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelGeometry<'a> {
    pub rotation: f64,
    pub slices: Vec<Slice<'a>>,
}

impl<'a> WheelGeometry<'a> {
    pub fn new(participants: &'a ParticipantList, rotation: f64) -> Self {
        let width = slice_angle(participants.len());
        let slices = participants
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let start_angle = rotation + index as f64 * width;
                Slice {
                    index,
                    label,
                    start_angle,
                    end_angle: start_angle + width,
                    color: slice_color(index),
                }
            })
            .collect();

        Self { rotation, slices }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Slice currently under the pointer.
    pub fn pointer_slice(&self) -> Option<&Slice<'a>> {
        if self.slices.is_empty() {
            return None;
        }
        self.slices
            .get(slice_at_pointer(self.rotation, self.slices.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::palette::PALETTE;

    #[test]
    fn slices_tile_the_full_turn() {
        let list = ParticipantList::new(["a", "b", "c"]);
        let geometry = WheelGeometry::new(&list, 0.3);
        assert_eq!(geometry.slices.len(), 3);
        assert!((geometry.slices[0].start_angle - 0.3).abs() < 1e-12);
        assert!((geometry.slices[2].end_angle - (0.3 + TAU)).abs() < 1e-9);
    }

    #[test]
    fn colours_cycle_through_palette() {
        let list: ParticipantList = (0..10).map(|i| format!("n{i}")).collect();
        let geometry = WheelGeometry::new(&list, 0.0);
        assert_eq!(geometry.slices[0].color, PALETTE[0]);
        assert_eq!(geometry.slices[8].color, PALETTE[0]);
        assert_eq!(geometry.slices[9].color, PALETTE[1]);
    }

    #[test]
    fn pointer_slice_tracks_rotation() {
        let list = ParticipantList::new(["a", "b", "c", "d"]);
        let quarter = TAU / 4.0;
        let geometry = WheelGeometry::new(&list, -2.5 * quarter);
        assert_eq!(geometry.pointer_slice().map(|s| s.label), Some("c"));
        assert!(WheelGeometry::new(&ParticipantList::default(), 0.0)
            .pointer_slice()
            .is_none());
    }
}
