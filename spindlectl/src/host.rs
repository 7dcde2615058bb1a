use serde::Serialize;
use spindle_core::model::{IndexChange, ItemTransform};
use spindle_core::{CarouselHost, PageIndicator, RenderHost};

/// One host command, as printed by `spindlectl simulate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostCommand {
    ApplyTransform {
        index: usize,
        scale: f32,
        z_order: f32,
    },
    SetScrollOffset {
        x: f32,
        animated: bool,
    },
    CancelScrollAnimation,
    SetPageCount {
        count: usize,
    },
    SetCurrentPage {
        index: usize,
    },
    IndexChanged {
        previous: Option<usize>,
        current: usize,
    },
}

/// Host that records every command instead of rendering.
#[derive(Debug, Default)]
pub struct CommandLog {
    commands: Vec<HostCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }
}

impl RenderHost<usize> for CommandLog {
    fn apply_transform(&mut self, _item: &usize, transform: ItemTransform) {
        let ItemTransform {
            index,
            scale,
            z_order,
        } = transform;
        self.commands.push(HostCommand::ApplyTransform {
            index,
            scale,
            z_order,
        });
    }

    fn set_scroll_offset(&mut self, x: f32, animated: bool) {
        self.commands
            .push(HostCommand::SetScrollOffset { x, animated });
    }

    fn cancel_scroll_animation(&mut self) {
        self.commands.push(HostCommand::CancelScrollAnimation);
    }
}

impl PageIndicator for CommandLog {
    fn set_page_count(&mut self, count: usize) {
        self.commands.push(HostCommand::SetPageCount { count });
    }

    fn set_current_page(&mut self, index: usize) {
        self.commands.push(HostCommand::SetCurrentPage { index });
    }
}

impl CarouselHost<usize> for CommandLog {
    fn index_changed(&mut self, change: IndexChange) {
        self.commands.push(HostCommand::IndexChanged {
            previous: change.previous,
            current: change.current,
        });
    }
}
