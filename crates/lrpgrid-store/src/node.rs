//! Owned node trees returned by store lookups.
//!
//! A recursive listing is fetched in one round trip and handed back as a
//! plain owned tree; callers walk it locally without further store calls.

use std::collections::HashMap;

/// One node of the hierarchical namespace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreNode {
    /// Full normalized path of this node (e.g. `actual/p1/0/i-a`).
    pub key: String,
    /// Opaque payload. Empty for directory nodes.
    pub value: Vec<u8>,
    /// True when the node groups deeper keys instead of holding a value.
    pub dir: bool,
    /// Direct children, in ascending key order.
    pub child_nodes: Vec<StoreNode>,
}

impl StoreNode {
    pub fn leaf(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            dir: false,
            child_nodes: Vec::new(),
        }
    }

    pub fn dir(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Vec::new(),
            dir: true,
            child_nodes: Vec::new(),
        }
    }
}

/// Strip leading, trailing, and repeated slashes from a key.
///
/// The empty string addresses the namespace root.
pub fn normalize_key(key: &str) -> String {
    key.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a normalized parent key and one child segment.
pub(crate) fn join_key(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}/{child}")
    }
}

/// Whether `key` is `root` itself or lives somewhere below it.
pub(crate) fn in_subtree(root: &str, key: &str) -> bool {
    root.is_empty()
        || key == root
        || (key.starts_with(root) && key.as_bytes().get(root.len()) == Some(&b'/'))
}

/// Whether any stored key lives strictly below `root`.
pub(crate) fn is_strict_descendant(root: &str, key: &str) -> bool {
    key != root && in_subtree(root, key)
}

/// Assemble the subtree rooted at `root` from flat `(key, value)` entries.
///
/// Entries outside the subtree are ignored. Returns `None` when nothing
/// lives at or below `root`. Children keep the order the entries arrive
/// in, so sorted input yields sorted children.
pub(crate) fn build_tree<I>(root: &str, entries: I) -> Option<StoreNode>
where
    I: IntoIterator<Item = (String, Vec<u8>)>,
{
    let mut tree = StoreNode::dir(root);
    let mut found = false;
    let mut root_has_value = false;
    // Full path of every node built so far → its index among its siblings.
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (key, value) in entries {
        if !in_subtree(root, &key) {
            continue;
        }
        found = true;

        if key == root {
            tree.value = value;
            root_has_value = true;
            continue;
        }

        let relative = if root.is_empty() {
            key.as_str()
        } else {
            &key[root.len() + 1..]
        };

        let mut current = &mut tree;
        let mut path = root.to_string();
        for segment in relative.split('/') {
            path = join_key(&path, segment);
            current.dir = true;
            let idx = match positions.get(&path) {
                Some(&idx) => idx,
                None => {
                    current.child_nodes.push(StoreNode::dir(path.clone()));
                    let idx = current.child_nodes.len() - 1;
                    positions.insert(path.clone(), idx);
                    idx
                }
            };
            current = &mut current.child_nodes[idx];
        }
        current.value = value;
        if current.child_nodes.is_empty() {
            current.dir = false;
        }
    }

    if !found {
        return None;
    }
    if root_has_value && tree.child_nodes.is_empty() {
        tree.dir = false;
    }
    Some(tree)
}
