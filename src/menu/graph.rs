use crate::config::Mode;

/// Stable index of a node in a [`MenuGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub u8);

impl NodeId {
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Cursor move along one of the four links of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    /// Back to the parent screen
    Left,
    /// Into the child screen
    Right,
}

impl Move {
    const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

/// Action fired when OK is pressed on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SetMode(Mode),
    Save,
}

/// Configuration field adjusted by an editor node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    LightLevel,
    Red,
    Green,
    Blue,
}

/// Extra line shown under a plain screen's label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Mode,
}

/// Behaviour of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Screen,
    Status(StatusLine),
    Action(MenuAction),
    Editor(EditorField),
}

/// Declarative description of a node
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    pub label: &'static str,
    pub kind: NodeKind,
}

/// Directed link between two nodes
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub from: NodeId,
    pub by: Move,
    pub to: NodeId,
}

/// A menu screen with its outgoing links
#[derive(Debug, Clone, Copy)]
pub struct MenuNode {
    pub label: &'static str,
    pub kind: NodeKind,
    links: [Option<NodeId>; 4],
}

impl MenuNode {
    /// Target of a move, if the node has that link
    pub const fn link(&self, by: Move) -> Option<NodeId> {
        self.links[by.index()]
    }
}

/// Fixed menu topology stored as an arena of nodes
#[derive(Debug, Clone)]
pub struct MenuGraph<const N: usize> {
    nodes: [MenuNode; N],
}

impl<const N: usize> MenuGraph<N> {
    /// Build the graph from node descriptions and edges.
    ///
    /// Edges that reference nodes outside the arena are ignored.
    pub fn from_layout(specs: &[NodeSpec; N], edges: &[Edge]) -> Self {
        let mut nodes = specs.map(|spec| MenuNode {
            label: spec.label,
            kind: spec.kind,
            links: [None; 4],
        });

        for edge in edges {
            if edge.to.index() >= N {
                continue;
            }
            if let Some(node) = nodes.get_mut(edge.from.index()) {
                node.links[edge.by.index()] = Some(edge.to);
            }
        }

        Self { nodes }
    }

    pub fn node(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id.index())
    }

    /// Follow a link from a node
    pub fn follow(&self, from: NodeId, by: Move) -> Option<NodeId> {
        self.node(from)?.link(by)
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}
