//! Menu topology of the front panel.
//!
//! Top level: mode, light level, color, save. Mode entries and save fire an
//! action and then show a confirmation screen. Editor leaves loop onto
//! themselves on up/down so the value changes instead of the screen.

use super::graph::{Edge, EditorField, MenuAction, Move, NodeId, NodeKind, NodeSpec, StatusLine};
use crate::config::Mode;

pub const MODE: NodeId = NodeId(0);
pub const LIGHT: NodeId = NodeId(1);
pub const COLOR: NodeId = NodeId(2);
pub const SAVE: NodeId = NodeId(3);
pub const MODE_STREAMING: NodeId = NodeId(4);
pub const MODE_CONSTANT: NodeId = NodeId(5);
pub const MODE_OFF: NodeId = NodeId(6);
pub const MODE_DEMO: NodeId = NodeId(7);
pub const MODE_CHANGED: NodeId = NodeId(8);
pub const LIGHT_EDIT: NodeId = NodeId(9);
pub const COLOR_RED: NodeId = NodeId(10);
pub const COLOR_GREEN: NodeId = NodeId(11);
pub const COLOR_BLUE: NodeId = NodeId(12);
pub const RED_EDIT: NodeId = NodeId(13);
pub const GREEN_EDIT: NodeId = NodeId(14);
pub const BLUE_EDIT: NodeId = NodeId(15);
pub const SAVED: NodeId = NodeId(16);

pub const MENU_NODES: usize = 17;

/// Node shown at boot
pub const ROOT: NodeId = MODE;

const fn spec(label: &'static str, kind: NodeKind) -> NodeSpec {
    NodeSpec { label, kind }
}

pub const NODES: [NodeSpec; MENU_NODES] = [
    spec("Mode", NodeKind::Status(StatusLine::Mode)),
    spec("Light level", NodeKind::Screen),
    spec("Color", NodeKind::Screen),
    spec("Save settings", NodeKind::Action(MenuAction::Save)),
    spec("Streaming", NodeKind::Action(MenuAction::SetMode(Mode::Streaming))),
    spec("Constant color", NodeKind::Action(MenuAction::SetMode(Mode::Constant))),
    spec("Off", NodeKind::Action(MenuAction::SetMode(Mode::Off))),
    spec("Demo", NodeKind::Action(MenuAction::SetMode(Mode::Demo))),
    spec("Mode changed", NodeKind::Status(StatusLine::Mode)),
    spec("Light level", NodeKind::Editor(EditorField::LightLevel)),
    spec("Red", NodeKind::Screen),
    spec("Green", NodeKind::Screen),
    spec("Blue", NodeKind::Screen),
    spec("Red", NodeKind::Editor(EditorField::Red)),
    spec("Green", NodeKind::Editor(EditorField::Green)),
    spec("Blue", NodeKind::Editor(EditorField::Blue)),
    spec("Settings saved", NodeKind::Screen),
];

const fn edge(from: NodeId, by: Move, to: NodeId) -> Edge {
    Edge { from, by, to }
}

pub const EDGES: &[Edge] = &[
    // Top level ring
    edge(MODE, Move::Down, LIGHT),
    edge(LIGHT, Move::Down, COLOR),
    edge(COLOR, Move::Down, SAVE),
    edge(SAVE, Move::Down, MODE),
    edge(MODE, Move::Up, SAVE),
    edge(LIGHT, Move::Up, MODE),
    edge(COLOR, Move::Up, LIGHT),
    edge(SAVE, Move::Up, COLOR),
    // Mode selection
    edge(MODE, Move::Right, MODE_STREAMING),
    edge(MODE_STREAMING, Move::Down, MODE_CONSTANT),
    edge(MODE_CONSTANT, Move::Down, MODE_OFF),
    edge(MODE_OFF, Move::Down, MODE_DEMO),
    edge(MODE_DEMO, Move::Down, MODE_STREAMING),
    edge(MODE_STREAMING, Move::Up, MODE_DEMO),
    edge(MODE_CONSTANT, Move::Up, MODE_STREAMING),
    edge(MODE_OFF, Move::Up, MODE_CONSTANT),
    edge(MODE_DEMO, Move::Up, MODE_OFF),
    edge(MODE_STREAMING, Move::Left, MODE),
    edge(MODE_CONSTANT, Move::Left, MODE),
    edge(MODE_OFF, Move::Left, MODE),
    edge(MODE_DEMO, Move::Left, MODE),
    edge(MODE_STREAMING, Move::Right, MODE_CHANGED),
    edge(MODE_CONSTANT, Move::Right, MODE_CHANGED),
    edge(MODE_OFF, Move::Right, MODE_CHANGED),
    edge(MODE_DEMO, Move::Right, MODE_CHANGED),
    edge(MODE_CHANGED, Move::Left, MODE),
    // Light level
    edge(LIGHT, Move::Right, LIGHT_EDIT),
    edge(LIGHT_EDIT, Move::Up, LIGHT_EDIT),
    edge(LIGHT_EDIT, Move::Down, LIGHT_EDIT),
    edge(LIGHT_EDIT, Move::Left, LIGHT),
    // Color channels
    edge(COLOR, Move::Right, COLOR_RED),
    edge(COLOR_RED, Move::Down, COLOR_GREEN),
    edge(COLOR_GREEN, Move::Down, COLOR_BLUE),
    edge(COLOR_BLUE, Move::Down, COLOR_RED),
    edge(COLOR_RED, Move::Up, COLOR_BLUE),
    edge(COLOR_GREEN, Move::Up, COLOR_RED),
    edge(COLOR_BLUE, Move::Up, COLOR_GREEN),
    edge(COLOR_RED, Move::Left, COLOR),
    edge(COLOR_GREEN, Move::Left, COLOR),
    edge(COLOR_BLUE, Move::Left, COLOR),
    edge(COLOR_RED, Move::Right, RED_EDIT),
    edge(COLOR_GREEN, Move::Right, GREEN_EDIT),
    edge(COLOR_BLUE, Move::Right, BLUE_EDIT),
    edge(RED_EDIT, Move::Up, RED_EDIT),
    edge(RED_EDIT, Move::Down, RED_EDIT),
    edge(RED_EDIT, Move::Left, COLOR_RED),
    edge(GREEN_EDIT, Move::Up, GREEN_EDIT),
    edge(GREEN_EDIT, Move::Down, GREEN_EDIT),
    edge(GREEN_EDIT, Move::Left, COLOR_GREEN),
    edge(BLUE_EDIT, Move::Up, BLUE_EDIT),
    edge(BLUE_EDIT, Move::Down, BLUE_EDIT),
    edge(BLUE_EDIT, Move::Left, COLOR_BLUE),
    // Save
    edge(SAVE, Move::Right, SAVED),
    edge(SAVED, Move::Left, SAVE),
];
