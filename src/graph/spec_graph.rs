use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::spec::Specification;

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

/// The import dependency graph of a specification.
///
/// Vertex indices coincide with document indices in the originating
/// [`Specification`]. Edges to paths that are not part of the
/// specification (missing files) are dropped at build time; the import
/// analyzer reports those separately.
#[derive(Clone, Debug, Default)]
pub struct SpecGraph {
    /// Resolved path → successor vertex indices, in insertion order.
    adjacency: IndexMap<PathBuf, Vec<usize>>,
}

impl SpecGraph {
    /// Build the graph from a fully-assembled specification, one vertex
    /// per document in specification order, one edge per import.
    pub fn build(spec: &Specification) -> Self {
        let mut adjacency: IndexMap<PathBuf, Vec<usize>> = spec
            .documents()
            .iter()
            .map(|doc| (doc.path.clone(), Vec::new()))
            .collect();

        for (idx, doc) in spec.documents().iter().enumerate() {
            for import in &doc.imports {
                match adjacency.get_index_of(&import.resolved_path) {
                    Some(target) => adjacency[idx].push(target),
                    None => trace!(
                        "import of {} from {} targets no known document",
                        import.resolved_path.display(),
                        doc.path.display()
                    ),
                }
            }
        }

        debug!(
            "dependency graph built: {} vertices, {} edges",
            adjacency.len(),
            adjacency.values().map(Vec::len).sum::<usize>()
        );
        Self { adjacency }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.adjacency.contains_key(path)
    }

    pub fn index_of(&self, path: &Path) -> Option<usize> {
        self.adjacency.get_index_of(path)
    }

    pub fn path_at(&self, idx: usize) -> &Path {
        self.adjacency
            .get_index(idx)
            .expect("vertex index out of bounds")
            .0
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Path> {
        self.adjacency.keys().map(PathBuf::as_path)
    }

    fn successors(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    /// The documents a document imports, as resolved paths.
    pub fn imports_of(&self, path: &Path) -> Vec<&Path> {
        match self.adjacency.get_index_of(path) {
            Some(idx) => self
                .successors(idx)
                .iter()
                .map(|&t| self.path_at(t))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Enumerate elementary cycles: depth-first search with an explicit
    /// frame stack and an on-stack (gray) set, one cycle per back edge.
    /// The returned path starts at the vertex the back edge closes on.
    /// Self-edges are skipped; the import analyzer reports those.
    pub fn cycles(&self) -> Vec<Vec<PathBuf>> {
        let n = self.vertex_count();
        let mut color = vec![Color::White; n];
        let mut found: Vec<Vec<PathBuf>> = Vec::new();

        for root in 0..n {
            if color[root] != Color::White {
                continue;
            }
            color[root] = Color::Gray;
            // (vertex, next successor cursor)
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];

            while let Some(&(v, cursor)) = stack.last() {
                let succ = self.successors(v);
                if cursor < succ.len() {
                    stack.last_mut().expect("stack is non-empty").1 += 1;
                    let w = succ[cursor];
                    if w == v {
                        continue;
                    }
                    match color[w] {
                        Color::White => {
                            color[w] = Color::Gray;
                            stack.push((w, 0));
                        }
                        Color::Gray => {
                            let pos = stack
                                .iter()
                                .position(|&(u, _)| u == w)
                                .expect("gray vertex must be on the stack");
                            let cycle: Vec<PathBuf> = stack[pos..]
                                .iter()
                                .map(|&(u, _)| self.path_at(u).to_path_buf())
                                .collect();
                            debug!("elementary cycle of length {} found", cycle.len());
                            found.push(cycle);
                        }
                        Color::Black => {}
                    }
                } else {
                    color[v] = Color::Black;
                    stack.pop();
                }
            }
        }
        found
    }

    /// Dependency-first total order: for every edge A→B (A imports B),
    /// B precedes A.
    ///
    /// Cyclic fallback: strongly-connected components are collapsed
    /// (Tarjan) and ordered as pseudo-vertices, so the result is always a
    /// total order and always terminates. The relative order of vertices
    /// inside one component is deterministic but not meaningful.
    pub fn topological_order(&self) -> Vec<PathBuf> {
        self.scc_order()
            .into_iter()
            .map(|idx| self.path_at(idx).to_path_buf())
            .collect()
    }

    /// Vertex indices in dependency-first order (see
    /// [`topological_order`](Self::topological_order)).
    pub fn scc_order(&self) -> Vec<usize> {
        const UNVISITED: usize = usize::MAX;
        let n = self.vertex_count();
        let mut index = vec![UNVISITED; n];
        let mut lowlink = vec![0usize; n];
        let mut on_stack = vec![false; n];
        let mut scc_stack: Vec<usize> = Vec::new();
        let mut next_index = 0usize;
        // Tarjan completes a component only after everything it depends on,
        // so emitting components in completion order is dependency-first.
        let mut order: Vec<usize> = Vec::with_capacity(n);

        for root in 0..n {
            if index[root] != UNVISITED {
                continue;
            }
            index[root] = next_index;
            lowlink[root] = next_index;
            next_index += 1;
            on_stack[root] = true;
            scc_stack.push(root);
            let mut frames: Vec<(usize, usize)> = vec![(root, 0)];

            while let Some(&(v, cursor)) = frames.last() {
                let succ = self.successors(v);
                if cursor < succ.len() {
                    frames.last_mut().expect("stack is non-empty").1 += 1;
                    let w = succ[cursor];
                    if index[w] == UNVISITED {
                        index[w] = next_index;
                        lowlink[w] = next_index;
                        next_index += 1;
                        on_stack[w] = true;
                        scc_stack.push(w);
                        frames.push((w, 0));
                    } else if on_stack[w] {
                        lowlink[v] = lowlink[v].min(index[w]);
                    }
                } else {
                    frames.pop();
                    if let Some(&(parent, _)) = frames.last() {
                        lowlink[parent] = lowlink[parent].min(lowlink[v]);
                    }
                    if lowlink[v] == index[v] {
                        loop {
                            let w = scc_stack.pop().expect("component stack is non-empty");
                            on_stack[w] = false;
                            order.push(w);
                            if w == v {
                                break;
                            }
                        }
                    }
                }
            }
        }
        order
    }

    /// Transitive import closure of a vertex (excluding the vertex itself
    /// unless it is reachable through a cycle).
    pub fn reachable_from(&self, start: usize) -> FxHashSet<usize> {
        let mut reached = FxHashSet::default();
        let mut pending: Vec<usize> = self.successors(start).to_vec();
        while let Some(v) = pending.pop() {
            if reached.insert(v) {
                pending.extend_from_slice(self.successors(v));
            }
        }
        reached
    }
}
