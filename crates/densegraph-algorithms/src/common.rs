//! Shared types for matrix storage and algorithm execution

/// Dense node index (0..n)
pub type NodeIndex = u32;

/// Edge weight stored in a matrix cell
pub type Weight = u16;

/// Weight value meaning "no edge present"
pub const NO_EDGE: Weight = 0;

/// A single `{u, v, weight}` edge triple as supplied by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Source node
    pub u: NodeIndex,
    /// Target node
    pub v: NodeIndex,
    /// Edge weight, 1..=65535
    pub weight: Weight,
}

impl Edge {
    pub fn new(u: NodeIndex, v: NodeIndex, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// Unit-weight edge, as used by unweighted graphs
    pub fn unit(u: NodeIndex, v: NodeIndex) -> Self {
        Self::new(u, v, 1)
    }
}

impl From<(NodeIndex, NodeIndex, Weight)> for Edge {
    fn from((u, v, weight): (NodeIndex, NodeIndex, Weight)) -> Self {
        Self::new(u, v, weight)
    }
}
