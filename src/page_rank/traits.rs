use crate::{Corpus, Distribution, Result};

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self, start: &Distribution) -> Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Distribution;

    /// Total mass of the ranks; `1.0` up to rounding for a healthy run.
    fn sum(&self) -> f64 {
        self.page_rank().values().sum()
    }

    fn report<'a>(&'a self, corpus: &'a Corpus) -> Report<'a> {
        Report {
            corpus,
            page_rank: self.page_rank(),
        }
    }
}

/// `  name: rank` lines sorted by page name.
pub struct Report<'a> {
    corpus: &'a Corpus,
    page_rank: &'a Distribution,
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for name in self.corpus.pages() {
            let Some(v) = self.corpus.page(name) else {
                continue;
            };
            let p = self.page_rank.get(&v).copied().unwrap_or(0.0);
            writeln!(f, "  {name}: {p:.4}")?;
        }
        Ok(())
    }
}
