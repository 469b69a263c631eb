use std::cmp::Ordering;

struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

/// Collected clues, kept as an unbalanced binary search tree ordered by
/// byte-wise string comparison.
#[derive(Default)]
pub struct ClueTree {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the clue was already present.
    pub fn insert(&mut self, text: &str) -> bool {
        let inserted = insert_into(&mut self.root, text);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match text.cmp(n.text.as_str()) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every clue in alphabetical order.
    pub fn in_order(&self) -> Vec<&str> {
        let mut found = Vec::with_capacity(self.len);
        collect_in_order(self.root.as_deref(), &mut found);
        found
    }

    /// Longest root-to-leaf path; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        depth_of(self.root.as_deref())
    }
}

fn insert_into(slot: &mut Option<Box<ClueNode>>, text: &str) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(ClueNode {
                text: text.to_string(),
                left: None,
                right: None,
            }));
            true
        }
        Some(node) => match text.cmp(node.text.as_str()) {
            Ordering::Less => insert_into(&mut node.left, text),
            Ordering::Greater => insert_into(&mut node.right, text),
            Ordering::Equal => false,
        },
    }
}

fn collect_in_order<'a>(node: Option<&'a ClueNode>, found: &mut Vec<&'a str>) {
    if let Some(n) = node {
        collect_in_order(n.left.as_deref(), found);
        found.push(n.text.as_str());
        collect_in_order(n.right.as_deref(), found);
    }
}

fn depth_of(node: Option<&ClueNode>) -> usize {
    match node {
        Some(n) => 1 + depth_of(n.left.as_deref()).max(depth_of(n.right.as_deref())),
        None => 0,
    }
}
