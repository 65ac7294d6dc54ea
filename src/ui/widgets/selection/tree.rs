//! Choice tree storage and flattening.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. The implicit
//! root is the ordered list of top-level ids; it is never a selectable row.

/// Stable identity of a node inside a [`ChoiceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index of this node (insertion order across the whole tree)
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single choice and its links.
#[derive(Debug, Clone)]
pub struct ChoiceNode<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    expanded: bool,
}

impl<T> ChoiceNode<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Expansion flag; only meaningful for nodes with children
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// A visible row after applying expansion state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenedRow {
    pub id: NodeId,
    /// Depth level (0 = top-level choice)
    pub depth: usize,
    /// Whether this node is the last child of its parent
    pub is_last_sibling: bool,
}

/// Hierarchical container of choices with insertion order preserved
#[derive(Debug, Clone)]
pub struct ChoiceTree<T> {
    nodes: Vec<ChoiceNode<T>>,
    roots: Vec<NodeId>,
}

impl<T> Default for ChoiceTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChoiceTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// Append a top-level choice and return a handle for attaching children
    pub fn add_choice(&mut self, value: T) -> ChoiceHandle<'_, T> {
        let id = self.push(value, None);
        self.roots.push(id);
        ChoiceHandle { tree: self, id }
    }

    /// Append a child under `parent`. Returns `None` if `parent` is not in this tree.
    pub fn add_child(&mut self, parent: NodeId, value: T) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() {
            return None;
        }
        let id = self.push(value, Some(parent));
        self.nodes[parent.0].children.push(id);
        Some(id)
    }

    fn push(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ChoiceNode {
            value,
            parent,
            children: Vec::new(),
            expanded: true,
        });
        id
    }

    /// Total number of nodes, visible or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&ChoiceNode<T>> {
        self.nodes.get(id.0)
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(ChoiceNode::value)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(ChoiceNode::parent)
    }

    /// Children of `id` in insertion order; empty for leaves and unknown ids
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(ChoiceNode::children).unwrap_or(&[])
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(ChoiceNode::has_children)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(ChoiceNode::is_expanded)
    }

    /// Set the expansion flag. Leaves are left untouched; returns whether
    /// the flag changed.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        match self.nodes.get_mut(id.0) {
            Some(node) if node.has_children() && node.expanded != expanded => {
                node.expanded = expanded;
                true
            }
            _ => false,
        }
    }

    /// Flip the expansion flag of a group. Returns `false` for leaves.
    pub fn toggle_expanded(&mut self, id: NodeId) -> bool {
        let expanded = self.is_expanded(id);
        self.set_expanded(id, !expanded)
    }

    /// Depth-first pre-order projection of every node whose ancestors are
    /// all expanded.
    pub fn flatten(&self) -> Vec<FlattenedRow> {
        let mut rows = Vec::with_capacity(self.nodes.len());
        self.flatten_into(&self.roots, 0, &mut rows);
        rows
    }

    fn flatten_into(&self, ids: &[NodeId], depth: usize, rows: &mut Vec<FlattenedRow>) {
        for (i, &id) in ids.iter().enumerate() {
            rows.push(FlattenedRow {
                id,
                depth,
                is_last_sibling: i + 1 == ids.len(),
            });

            let node = &self.nodes[id.0];
            if node.expanded && node.has_children() {
                self.flatten_into(&node.children, depth + 1, rows);
            }
        }
    }

    /// Consume the tree and move the value of `id` out
    pub fn into_value(self, id: NodeId) -> Option<T> {
        self.nodes.into_iter().nth(id.0).map(|node| node.value)
    }
}

/// Borrowed handle to a freshly added node, used to attach children
pub struct ChoiceHandle<'a, T> {
    tree: &'a mut ChoiceTree<T>,
    id: NodeId,
}

impl<T> ChoiceHandle<'_, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Append a child and return its handle, turning this node into a group
    pub fn add_child(&mut self, value: T) -> ChoiceHandle<'_, T> {
        let id = self.tree.push(value, Some(self.id));
        self.tree.nodes[self.id.0].children.push(id);
        ChoiceHandle {
            tree: &mut *self.tree,
            id,
        }
    }

    /// Append several leaf children in order
    pub fn add_children(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self {
        for value in values {
            self.add_child(value);
        }
        self
    }
}
