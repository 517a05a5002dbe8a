use super::{transition::out_set, *};
use crate::{common::*, Error};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::BTreeMap;
use tracing::{debug, trace};

pub const DEFAULT_THRESHOLD: f64 = 0.005;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// PageRank by synchronous relaxation of the PageRank recurrence.
///
/// Each step computes the whole next distribution from the previous one.
/// Sinks hand their rank to every page evenly, themselves included.
pub struct IteratedPageRank<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    threshold: f64,
    max_iterations: Option<usize>,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    sinks: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Iteration stops once no page moves by more than this.
    pub threshold: f64,
    /// `None` iterates until convergence, however long that takes.
    pub max_iterations: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Distribution,
    /// Per-page change made by the last step.
    pub delta: Distribution,
    pub iterations: usize,
}

impl<'a, G: QueryableGraph> IteratedPageRank<'a, G> {
    pub fn new(g: &'a G, config: &Config) -> crate::Result<Self> {
        check_non_empty(g)?;
        let damping = config.damping;
        check_damping(damping)?;
        let threshold = config.threshold;
        if !(threshold > 0.0) {
            return Err(Error::InvalidThreshold(threshold));
        }

        let mut transitions = BTreeMap::new();
        let mut sinks = vec![];
        for u in g.iter_vertices() {
            let links = out_set(g, &u);
            if links.is_empty() {
                sinks.push(u);
                continue;
            }
            let unit = 1.0 / (links.len() as f64);
            for v in links {
                transitions.insert((u, v), unit);
            }
        }
        Ok(Self {
            graph: g,
            damping,
            threshold,
            max_iterations: config.max_iterations,
            transitions,
            sinks,
        })
    }

    /// One relaxation step from `p` into `r`.
    fn step(&self, p: &Distribution, r: &mut Distribution) {
        let n = self.graph.vertex_size() as f64;
        let sink_share = self
            .sinks
            .iter()
            .map(|s| p.get(s).copied().unwrap_or(0.0))
            .sum::<f64>()
            / n;
        r.clear();
        for v in self.graph.iter_vertices() {
            r.insert(v, sink_share);
        }
        for ((v0, v1), w) in self.transitions.iter() {
            let from = p.get(v0).copied().unwrap_or(0.0);
            if let Some(to) = r.get_mut(v1) {
                *to += from * w;
            }
        }
        let teleport = (1.0 - self.damping) / n;
        for w in r.values_mut() {
            *w = teleport + self.damping * *w;
        }
    }
}

impl<G: QueryableGraph> PageRank for IteratedPageRank<'_, G> {
    type Result = self::Result;

    fn calc(&self, start: &Distribution) -> crate::Result<Self::Result> {
        check_start(self.graph, start)?;
        let mut p: Distribution = self
            .graph
            .iter_vertices()
            .map(|v| (v, start.get(&v).copied().unwrap_or(0.0)))
            .collect();
        let mut r = Distribution::with_hasher(ahash::RandomState::new());
        let mut delta = Distribution::with_hasher(ahash::RandomState::new());
        let mut iterations = 0;
        loop {
            iterations += 1;
            self.step(&p, &mut r);

            delta.clear();
            for v in self.graph.iter_vertices() {
                let a = p.get(&v).copied().unwrap_or(0.0);
                let b = r.get(&v).copied().unwrap_or(0.0);
                delta.insert(v, b - a);
            }
            let max_delta = delta.values().map(|x| x.abs()).fold(0.0, f64::max);
            trace!(iterations, max_delta, "relaxed");

            if max_delta <= self.threshold {
                debug!(iterations, pages = r.len(), "iteration converged");
                return Ok(Self::Result {
                    page_rank: r,
                    delta,
                    iterations,
                });
            }
            if self.max_iterations.is_some_and(|cap| iterations >= cap) {
                return Err(Error::Convergence {
                    iterations,
                    delta: max_delta,
                });
            }

            std::mem::swap(&mut p, &mut r);
        }
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Distribution {
        &self.page_rank
    }
}

/// Iterates from the uniform distribution with the default threshold and
/// iteration cap.
pub fn iterate_pagerank<G: QueryableGraph>(
    graph: &G,
    damping: f64,
) -> crate::Result<Distribution> {
    let config = Config {
        damping,
        ..Config::default()
    };
    let pr = IteratedPageRank::new(graph, &config)?;
    let res = pr.calc(&uniform(graph))?;
    Ok(res.page_rank)
}
