use std::collections::{HashMap, VecDeque};

use square_free::SpfSieve;
use thiserror::Error;

const UNVISITED: usize = usize::MAX;
const ROOT_PARENT: usize = usize::MAX - 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("node count must be positive")]
    NoNodes,
    #[error("expected {expected} node values, got {got}")]
    ValueCountMismatch { expected: usize, got: usize },
    #[error("value at node {node} must be positive")]
    NonPositiveValue { node: usize },
    #[error("expected {expected} edges for {nodes} nodes, got {got}")]
    EdgeCountMismatch {
        nodes: usize,
        expected: usize,
        got: usize,
    },
    #[error("edge ({u}, {v}) references a node outside 0..{nodes}")]
    EdgeOutOfRange { u: usize, v: usize, nodes: usize },
    #[error("edges do not form a tree spanning all nodes from the root")]
    NotATree,
}

/// Counts ordered pairs `(u, v)` with `u` a strict ancestor of `v` whose
/// value product is a perfect square, using an explicit enter/leave stack.
///
/// Node `0` is the root; `edges` are undirected and must form a tree on
/// `n` nodes.
pub fn count_pairs(n: usize, values: &[u32], edges: &[(usize, usize)]) -> Result<u64, TreeError> {
    validate(n, values, edges)?;
    let tree = RootedTree::new(n, edges)?;
    let sig = signatures(values);

    let mut total = 0_u64;
    let mut open: HashMap<u32, u64> = HashMap::new();
    let mut stack = Vec::with_capacity(n);
    stack.push(Event::Enter(0));

    while let Some(event) = stack.pop() {
        match event {
            Event::Enter(u) => {
                // The multiset holds exactly the signatures of u's strict
                // ancestors at this point; the root has none to match.
                if u != 0 {
                    if let Some(&ancestors) = open.get(&sig[u]) {
                        total += ancestors;
                    }
                }
                *open.entry(sig[u]).or_insert(0) += 1;
                stack.push(Event::Leave(u));
                for &child in tree.children[u].iter().rev() {
                    stack.push(Event::Enter(child));
                }
            }
            Event::Leave(u) => {
                if let Some(count) = open.get_mut(&sig[u]) {
                    *count -= 1;
                }
            }
        }
    }
    Ok(total)
}

/// Same count as [`count_pairs`], via native recursion.
pub fn count_pairs_recursive(
    n: usize,
    values: &[u32],
    edges: &[(usize, usize)],
) -> Result<u64, TreeError> {
    validate(n, values, edges)?;
    let tree = RootedTree::new(n, edges)?;
    let sig = signatures(values);

    let mut total = 0_u64;
    let mut open: HashMap<u32, u64> = HashMap::new();
    descend(0, &tree, &sig, &mut open, &mut total);
    Ok(total)
}

enum Event {
    Enter(usize),
    Leave(usize),
}

fn descend(
    u: usize,
    tree: &RootedTree,
    sig: &[u32],
    open: &mut HashMap<u32, u64>,
    total: &mut u64,
) {
    if u != 0 {
        if let Some(&ancestors) = open.get(&sig[u]) {
            *total += ancestors;
        }
    }
    *open.entry(sig[u]).or_insert(0) += 1;
    for &child in &tree.children[u] {
        descend(child, tree, sig, open, total);
    }
    if let Some(count) = open.get_mut(&sig[u]) {
        *count -= 1;
    }
}

fn validate(n: usize, values: &[u32], edges: &[(usize, usize)]) -> Result<(), TreeError> {
    if n == 0 {
        return Err(TreeError::NoNodes);
    }
    if values.len() != n {
        return Err(TreeError::ValueCountMismatch {
            expected: n,
            got: values.len(),
        });
    }
    for (node, &value) in values.iter().enumerate() {
        if value == 0 {
            return Err(TreeError::NonPositiveValue { node });
        }
    }
    if edges.len() != n - 1 {
        return Err(TreeError::EdgeCountMismatch {
            nodes: n,
            expected: n - 1,
            got: edges.len(),
        });
    }
    for &(u, v) in edges {
        if u >= n || v >= n {
            return Err(TreeError::EdgeOutOfRange { u, v, nodes: n });
        }
    }
    Ok(())
}

fn signatures(values: &[u32]) -> Vec<u32> {
    let max_val = values.iter().copied().max().unwrap_or(1);
    let sieve = SpfSieve::new(max_val);
    values
        .iter()
        .map(|&value| sieve.square_free_part(value))
        .collect()
}

struct RootedTree {
    children: Vec<Vec<usize>>,
}

impl RootedTree {
    /// Roots the tree at node 0 by breadth-first traversal; children keep
    /// edge-list discovery order.
    fn new(n: usize, edges: &[(usize, usize)]) -> Result<Self, TreeError> {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in edges {
            adj[u].push(v);
            adj[v].push(u);
        }

        let mut parent = vec![UNVISITED; n];
        let mut children = vec![Vec::new(); n];
        let mut queue = VecDeque::with_capacity(n);
        parent[0] = ROOT_PARENT;
        queue.push_back(0);
        let mut reached = 1_usize;

        while let Some(u) = queue.pop_front() {
            for &v in &adj[u] {
                if parent[v] == UNVISITED {
                    parent[v] = u;
                    children[u].push(v);
                    queue.push_back(v);
                    reached += 1;
                }
            }
        }

        // With exactly n - 1 edges, reaching every node means acyclic too.
        if reached != n {
            return Err(TreeError::NotATree);
        }
        Ok(Self { children })
    }
}
