use crate::{Error, Result};
use algograph::graph::*;
use std::collections::HashMap;

pub type Distribution = HashMap<VertexId, f64, ahash::RandomState>;

pub fn norm_1(v: &Distribution) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

/// `1/N` on every vertex of `graph`.
pub fn uniform<G: QueryableGraph>(graph: &G) -> Distribution {
    let n = graph.vertex_size() as f64;
    graph.iter_vertices().map(|v| (v, 1.0 / n)).collect()
}

pub fn max_abs_diff(a: &Distribution, b: &Distribution) -> f64 {
    a.iter()
        .map(|(v, x)| (x - b.get(v).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}

pub(crate) fn check_non_empty<G: QueryableGraph>(graph: &G) -> Result<()> {
    if graph.vertex_size() == 0 {
        return Err(Error::InvalidCorpus("corpus has no pages".to_string()));
    }
    Ok(())
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(Error::InvalidDamping(damping));
    }
    Ok(())
}

/// Checks that `start` puts non-negative mass only on vertices of `graph`
/// and sums to 1.
pub(crate) fn check_start<G: QueryableGraph>(graph: &G, start: &Distribution) -> Result<()> {
    for (v, w) in start.iter() {
        if !graph.contains_vertex(v) {
            return Err(Error::InvalidStart(format!("{v:?} is not in the corpus")));
        }
        if !(*w >= 0.0) {
            return Err(Error::InvalidStart(format!("{v:?} has weight {w}")));
        }
    }
    let sum = norm_1(start);
    if (sum - 1.0).abs() > 1e-6 {
        return Err(Error::InvalidStart(format!("sum={sum}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sums_to_one() {
        let mut g = directed::TreeBackedGraph::new();
        for _ in 0..7 {
            g.add_vertex();
        }
        let u = uniform(&g);
        assert_eq!(u.len(), 7);
        assert!((norm_1(&u) - 1.0).abs() < 1e-12, "{u:?}");
    }

    #[test]
    fn max_abs_diff_picks_largest() {
        let mut g = directed::TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let v1 = g.add_vertex();
        let a: Distribution = [(v0, 0.5), (v1, 0.5)].into_iter().collect();
        let b: Distribution = [(v0, 0.4), (v1, 0.8)].into_iter().collect();
        assert!((max_abs_diff(&a, &b) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn start_must_cover_known_vertices() {
        let mut g = directed::TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let mut other = directed::TreeBackedGraph::new();
        let _ = other.add_vertex();
        let stray = other.add_vertex();
        let start: Distribution = [(v0, 0.5), (stray, 0.5)].into_iter().collect();
        assert!(matches!(
            check_start(&g, &start),
            Err(Error::InvalidStart(_))
        ));
    }

    #[test]
    fn start_must_sum_to_one() {
        let mut g = directed::TreeBackedGraph::new();
        let v0 = g.add_vertex();
        let start: Distribution = [(v0, 0.5)].into_iter().collect();
        assert!(matches!(
            check_start(&g, &start),
            Err(Error::InvalidStart(_))
        ));
    }
}
