use crate::models::FileRecord;

/// Index of a node inside its [`FileTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// One file or folder in the derived hierarchy.
///
/// Nodes are owned by the tree's arena; `parent` and `children` are plain
/// indices, so a child never owns its parent and no reference cycles exist.
#[derive(Debug)]
pub struct TreeNode {
    pub name: String,
    pub is_folder: bool,
    /// File size in bytes; folders report 0
    pub size: u64,
    pub is_padding: bool,
    pub md5sum: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Hierarchical view over a flat file manifest.
///
/// The root is a synthetic folder named after the torrent's display name.
/// Shared directory prefixes resolve to a single folder node, children keep
/// insertion order, and duplicate leaf paths keep the first occurrence.
#[derive(Debug)]
pub struct FileTree {
    nodes: Vec<TreeNode>,
}

impl FileTree {
    /// Build the tree from the manifest, walking each record's path
    /// fragments left to right and reusing existing folders.
    pub fn build(files: &[FileRecord], display_name: &str) -> FileTree {
        let mut tree = FileTree {
            nodes: vec![TreeNode {
                name: display_name.to_string(),
                is_folder: true,
                size: 0,
                is_padding: false,
                md5sum: None,
                parent: None,
                children: Vec::new(),
            }],
        };

        for record in files {
            tree.insert(record);
        }

        tree
    }

    fn insert(&mut self, record: &FileRecord) {
        let mut current = self.root();

        for (i, segment) in record.path.iter().enumerate() {
            let is_last = i == record.path.len() - 1;

            if let Some(existing) = self.child_by_name(current, segment) {
                // A leaf already occupying this position means a duplicate
                // path (or a file where a folder is needed): keep the first
                // occurrence and drop the rest of this record.
                if is_last || !self.node(existing).is_folder {
                    return;
                }
                current = existing;
                continue;
            }

            let node = if is_last {
                TreeNode {
                    name: segment.clone(),
                    is_folder: false,
                    size: record.length,
                    is_padding: record.is_padding,
                    md5sum: record.md5sum.clone(),
                    parent: Some(current),
                    children: Vec::new(),
                }
            } else {
                TreeNode {
                    name: segment.clone(),
                    is_folder: true,
                    size: 0,
                    is_padding: false,
                    md5sum: None,
                    parent: Some(current),
                    children: Vec::new(),
                }
            };

            let id = NodeId(self.nodes.len());
            self.nodes.push(node);
            self.nodes[current.0].children.push(id);
            current = id;
        }
    }

    /// The synthetic root folder.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// All children of `id` in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id.0].children.iter().copied()
    }

    /// Children of `id` with padding leaves filtered out, along with any
    /// folder that has no visible descendant (a `.pad` directory holding
    /// only padding files disappears instead of rendering empty). This is
    /// the default view a tree renderer should bind to.
    pub fn visible_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).filter(|&c| self.is_visible(c))
    }

    fn is_visible(&self, id: NodeId) -> bool {
        let node = self.node(id);
        if !node.is_folder {
            return !node.is_padding;
        }
        self.children(id).any(|c| self.is_visible(c))
    }

    fn child_by_name(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id).find(|&c| self.node(c).name == name)
    }

    /// Path fragments from the root (exclusive) down to `id`, rebuilt from
    /// parent back-references.
    pub fn path(&self, id: NodeId) -> Vec<&str> {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == self.root() {
                break;
            }
            parts.push(self.node(node_id).name.as_str());
            current = self.parent(node_id);
        }
        parts.reverse();
        parts
    }

    /// Total size of all leaves under `id`, padding included.
    pub fn subtree_size(&self, id: NodeId) -> u64 {
        let node = self.node(id);
        if !node.is_folder {
            return node.size;
        }
        self.children(id).map(|c| self.subtree_size(c)).sum()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
