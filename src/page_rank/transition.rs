use crate::{common::*, Error, Result};
use algograph::graph::*;
use std::collections::BTreeSet;

/// Distribution of the page a random surfer visits after `page`.
///
/// With probability `damping` the surfer follows one of the links of `page`,
/// otherwise it jumps to any page of the corpus. A sink page sends the
/// surfer to any page with equal probability.
pub fn transition_model<G: QueryableGraph>(
    graph: &G,
    page: &VertexId,
    damping: f64,
) -> Result<Distribution> {
    check_non_empty(graph)?;
    check_damping(damping)?;
    if !graph.contains_vertex(page) {
        return Err(Error::UnknownPage(*page));
    }

    let links = out_set(graph, page);
    if links.is_empty() {
        return Ok(uniform(graph));
    }
    let n = graph.vertex_size() as f64;
    let mut res: Distribution = graph
        .iter_vertices()
        .map(|v| (v, (1.0 - damping) / n))
        .collect();
    let unit = damping / (links.len() as f64);
    for v in links.iter() {
        if let Some(w) = res.get_mut(v) {
            *w += unit;
        }
    }
    Ok(res)
}

/// Distinct pages `u` links to, not counting `u` itself.
pub(crate) fn out_set<G: QueryableGraph>(graph: &G, u: &VertexId) -> BTreeSet<VertexId> {
    graph
        .out_edges(u)
        .map(|e| e.sink)
        .filter(|v| v != u)
        .collect()
}
