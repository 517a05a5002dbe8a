use super::*;
use crate::{common::*, Error};
use algograph::graph::{QueryableGraph, VertexId};
use rand::{
    distr::{weighted::WeightedIndex, Distribution as _},
    Rng,
};
use std::cell::RefCell;
use tracing::debug;

pub const DEFAULT_SAMPLES: usize = 10_000;

/// Where the sampler gets its randomness from.
pub trait RandomSource {
    /// An index into `weights`, drawn with probability proportional to its
    /// weight.
    fn choose_weighted(&mut self, weights: &[f64]) -> crate::Result<usize>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn choose_weighted(&mut self, weights: &[f64]) -> crate::Result<usize> {
        let dist = WeightedIndex::new(weights).map_err(|e| Error::Sampling(e.to_string()))?;
        Ok(dist.sample(self))
    }
}

/// PageRank estimated from a single walk of a random surfer.
///
/// The walk keeps a running average of the transition distributions it has
/// seen, and the next page is drawn from that running average rather than
/// from the latest transition distribution.
pub struct SampledPageRank<'a, G, R>
where
    G: QueryableGraph,
    R: RandomSource,
{
    graph: &'a G,
    samples: usize,
    pages: Vec<VertexId>,
    // `transitions[i][j]`: probability of moving from `pages[i]` to `pages[j]`
    transitions: Vec<Vec<f64>>,
    rng: RefCell<R>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Distribution,
    pub samples: usize,
}

impl<'a, G, R> SampledPageRank<'a, G, R>
where
    G: QueryableGraph,
    R: RandomSource,
{
    pub fn new(g: &'a G, config: &Config, rng: R) -> crate::Result<Self> {
        check_non_empty(g)?;
        check_damping(config.damping)?;
        if config.samples == 0 {
            return Err(Error::InvalidSampleCount(config.samples));
        }

        let pages = {
            let mut pages: Vec<_> = g.iter_vertices().collect();
            pages.sort();
            pages
        };
        let transitions = pages
            .iter()
            .map(|u| {
                let t = transition_model(g, u, config.damping)?;
                Ok(pages
                    .iter()
                    .map(|v| t.get(v).copied().unwrap_or(0.0))
                    .collect())
            })
            .collect::<crate::Result<Vec<Vec<f64>>>>()?;
        Ok(Self {
            graph: g,
            samples: config.samples,
            pages,
            transitions,
            rng: RefCell::new(rng),
        })
    }

    /// Pages in the order the random source sees their weights.
    pub fn pages(&self) -> &[VertexId] {
        &self.pages
    }

    pub fn into_rng(self) -> R {
        self.rng.into_inner()
    }
}

impl<G, R> PageRank for SampledPageRank<'_, G, R>
where
    G: QueryableGraph,
    R: RandomSource,
{
    type Result = self::Result;

    /// Walks `samples` pages, the first one drawn from `start`.
    fn calc(&self, start: &Distribution) -> crate::Result<Self::Result> {
        check_start(self.graph, start)?;
        let weights: Vec<f64> = self
            .pages
            .iter()
            .map(|v| start.get(v).copied().unwrap_or(0.0))
            .collect();
        let mut guard = self.rng.borrow_mut();
        let rng = &mut *guard;
        let mut cur = rng.choose_weighted(&weights)?;
        let mut acc = vec![0.0; self.pages.len()];
        for t in 1..self.samples {
            let row = self
                .transitions
                .get(cur)
                .ok_or_else(|| Error::Sampling(format!("index {cur} is out of range")))?;
            let t = t as f64;
            for (a, p) in acc.iter_mut().zip(row.iter()) {
                *a = ((t - 1.0) * *a + p) / t;
            }
            cur = rng.choose_weighted(&acc)?;
        }

        // a single sample never leaves its first page, so nothing was recorded
        let total: f64 = acc.iter().sum();
        let page_rank = if total > 0.0 {
            self.pages
                .iter()
                .zip(acc.iter())
                .map(|(v, a)| (*v, a / total))
                .collect()
        } else {
            uniform(self.graph)
        };
        debug!(samples = self.samples, pages = self.pages.len(), "sampling finished");
        Ok(Self::Result {
            page_rank,
            samples: self.samples,
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Distribution {
        &self.page_rank
    }
}

/// Walks `n` pages from a uniformly drawn first page.
pub fn sample_pagerank<G, R>(
    graph: &G,
    damping: f64,
    n: usize,
    rng: R,
) -> crate::Result<Distribution>
where
    G: QueryableGraph,
    R: RandomSource,
{
    let config = Config {
        damping,
        samples: n,
    };
    let pr = SampledPageRank::new(graph, &config, rng)?;
    let res = pr.calc(&uniform(graph))?;
    Ok(res.page_rank)
}
