//! Button driven configuration menu.
//!
//! The cursor walks a fixed [`MenuGraph`]. Pressing OK fires the current
//! node's action (USE) and then descends; every cursor move, self-loops
//! included, updates the display (CHANGE). Up/down moves on an editor node
//! also step the edited field.

mod graph;
pub mod screens;

use core::fmt::Write as _;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::String;

pub use graph::{
    Edge, EditorField, MenuAction, MenuGraph, MenuNode, Move, NodeId, NodeKind, NodeSpec,
    StatusLine,
};
use screens::{EDGES, MENU_NODES, NODES, ROOT};

use crate::button::Button;
use crate::config::{Configuration, MAX_LIGHT_LEVEL_PERCENT};
use crate::display::Display;

/// Light level change per editor step, in percent
pub const LIGHT_LEVEL_STEP: u8 = 10;

/// Color component change per editor step
pub const COLOR_STEP: u8 = 5;

const VALUE_TEXT_LEN: usize = 16;

/// State the menu edits and acts upon
pub trait MenuContext {
    fn config_mut(&mut self) -> &mut Configuration;

    /// Carry out a USE action
    fn perform(&mut self, action: MenuAction);
}

/// Menu cursor over the front panel topology
#[derive(Debug, Clone)]
pub struct Menu {
    graph: MenuGraph<MENU_NODES>,
    current: NodeId,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            graph: MenuGraph::from_layout(&NODES, EDGES),
            current: ROOT,
        }
    }

    pub const fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_node(&self) -> Option<&MenuNode> {
        self.graph.node(self.current)
    }

    pub const fn graph(&self) -> &MenuGraph<MENU_NODES> {
        &self.graph
    }

    /// React to a debounced button press.
    ///
    /// Returns the action fired by OK, after it has been performed.
    pub fn handle<C: MenuContext, D: Display>(
        &mut self,
        button: Button,
        context: &mut C,
        display: &mut D,
    ) -> Option<MenuAction> {
        let by = match button {
            Button::Up => Move::Up,
            Button::Down => Move::Down,
            Button::Back => Move::Left,
            Button::Ok => Move::Right,
        };

        let action = if by == Move::Right {
            self.use_current()
        } else {
            None
        };
        if let Some(action) = action {
            context.perform(action);
        }

        self.navigate(by, context.config_mut(), display);
        action
    }

    /// Draw the current node
    pub fn show<D: Display>(&self, config: &Configuration, display: &mut D) {
        let Some(node) = self.current_node() else {
            return;
        };

        display.clear();
        display.print_at(0, 0, node.label);

        let mut text: String<VALUE_TEXT_LEN> = String::new();
        let written = match node.kind {
            NodeKind::Editor(EditorField::LightLevel) => {
                write!(text, "{}%", config.light_level_percent())
            }
            NodeKind::Editor(EditorField::Red) => write!(text, "{}", config.color.r),
            NodeKind::Editor(EditorField::Green) => write!(text, "{}", config.color.g),
            NodeKind::Editor(EditorField::Blue) => write!(text, "{}", config.color.b),
            NodeKind::Status(StatusLine::Mode) => write!(text, "{}", config.mode.as_str()),
            NodeKind::Screen | NodeKind::Action(_) => return,
        };
        if written.is_ok() {
            display.print_at(0, 1, &text);
        }
    }

    fn use_current(&self) -> Option<MenuAction> {
        let NodeKind::Action(action) = self.current_node()?.kind else {
            return None;
        };

        #[cfg(feature = "esp32-log")]
        println!("[Menu.use_current] {:?}", action);

        Some(action)
    }

    fn navigate<D: Display>(&mut self, by: Move, config: &mut Configuration, display: &mut D) {
        let Some(next) = self.graph.follow(self.current, by) else {
            return;
        };
        self.current = next;
        self.change(by, config, display);
    }

    /// Arrival at the current node
    fn change<D: Display>(&self, by: Move, config: &mut Configuration, display: &mut D) {
        if let Some(NodeKind::Editor(field)) = self.current_node().map(|node| node.kind) {
            match by {
                Move::Up => adjust(field, config, true),
                Move::Down => adjust(field, config, false),
                Move::Left | Move::Right => {}
            }
        }
        self.show(config, display);
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

/// Step an editor field up or down, clamped to its range
pub fn adjust(field: EditorField, config: &mut Configuration, up: bool) {
    let step_color = |value: u8| {
        if up {
            value.saturating_add(COLOR_STEP)
        } else {
            value.saturating_sub(COLOR_STEP)
        }
    };

    match field {
        EditorField::LightLevel => {
            let percent = config.light_level_percent();
            let percent = if up {
                percent.saturating_add(LIGHT_LEVEL_STEP).min(MAX_LIGHT_LEVEL_PERCENT)
            } else {
                percent.saturating_sub(LIGHT_LEVEL_STEP)
            };
            config.set_light_level_percent(percent);
        }
        EditorField::Red => config.color.r = step_color(config.color.r),
        EditorField::Green => config.color.g = step_color(config.color.g),
        EditorField::Blue => config.color.b = step_color(config.color.b),
    }
}
