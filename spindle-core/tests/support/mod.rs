#![allow(dead_code)]

use spindle_core::model::{IndexChange, ItemTransform};
use spindle_core::{CarouselHost, PageIndicator, RenderHost};

/// Item handle used by the tests: the host never looks inside.
pub type Card = &'static str;

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Transform { item: Card, transform: ItemTransform },
    ScrollOffset { x: f32, animated: bool },
    CancelAnimation,
    PageCount(usize),
    CurrentPage(usize),
    IndexChanged(IndexChange),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn transforms(&self) -> Vec<ItemTransform> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Transform { transform, .. } => Some(*transform),
                _ => None,
            })
            .collect()
    }

    pub fn scroll_offsets(&self) -> Vec<(f32, bool)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::ScrollOffset { x, animated } => Some((*x, *animated)),
                _ => None,
            })
            .collect()
    }

    pub fn index_changes(&self) -> Vec<IndexChange> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::IndexChanged(change) => Some(*change),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &HostCall) -> usize {
        self.calls.iter().filter(|call| *call == wanted).count()
    }

    pub fn last_page_count(&self) -> Option<usize> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::PageCount(count) => Some(*count),
            _ => None,
        })
    }

    pub fn last_current_page(&self) -> Option<usize> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::CurrentPage(page) => Some(*page),
            _ => None,
        })
    }
}

impl RenderHost<Card> for RecordingHost {
    fn apply_transform(&mut self, item: &Card, transform: ItemTransform) {
        self.calls.push(HostCall::Transform {
            item: *item,
            transform,
        });
    }

    fn set_scroll_offset(&mut self, x: f32, animated: bool) {
        self.calls.push(HostCall::ScrollOffset { x, animated });
    }

    fn cancel_scroll_animation(&mut self) {
        self.calls.push(HostCall::CancelAnimation);
    }
}

impl PageIndicator for RecordingHost {
    fn set_page_count(&mut self, count: usize) {
        self.calls.push(HostCall::PageCount(count));
    }

    fn set_current_page(&mut self, index: usize) {
        self.calls.push(HostCall::CurrentPage(index));
    }
}

impl CarouselHost<Card> for RecordingHost {
    fn index_changed(&mut self, change: IndexChange) {
        self.calls.push(HostCall::IndexChanged(change));
    }
}

pub fn cards(count: usize) -> Vec<Card> {
    const NAMES: [Card; 12] = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf",
        "hotel", "india", "juliet", "kilo", "lima",
    ];
    NAMES.iter().copied().cycle().take(count).collect()
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
