//! The hyperlink corpus: pages named by file name, linked by anchors.

use crate::{Error, Result};
use algograph::graph::*;
use lazy_static::lazy_static;
use regex::bytes::Regex;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fs,
    path::Path,
};
use tracing::{debug, warn};
use walkdir::WalkDir;

lazy_static! {
    static ref ANCHOR: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// A closed set of pages and the links between them.
///
/// Every link points at another page of the corpus: self-links, duplicates
/// and links leaving the corpus are dropped when the corpus is built.
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    ids: BTreeMap<String, VertexId>,
    names: HashMap<VertexId, String, ahash::RandomState>,
}

impl Corpus {
    /// Builds a corpus from `(page, link targets)` pairs.
    ///
    /// A page listed twice gets the union of its targets.
    pub fn from_links<I, S, L, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (name, links) in pages {
            let targets = raw.entry(name.into()).or_default();
            targets.extend(links.into_iter().map(|t| t.as_ref().to_string()));
        }

        let mut graph = directed::TreeBackedGraph::new();
        let ids: BTreeMap<_, _> = raw
            .keys()
            .map(|name| (name.clone(), graph.add_vertex()))
            .collect();
        for (name, targets) in raw.iter() {
            let u = ids[name];
            for t in targets.iter() {
                if t == name {
                    continue;
                }
                if let Some(v) = ids.get(t) {
                    graph.add_edge(u, *v);
                }
            }
        }
        let names = ids.iter().map(|(name, v)| (*v, name.clone())).collect();
        Self { graph, ids, names }
    }

    /// Reads every `*.html` file directly inside `dir` and extracts its
    /// `<a href="...">` targets.
    pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::InvalidCorpus(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        let mut pages = vec![];
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
                continue;
            };
            if !name.ends_with(".html") {
                continue;
            }
            // pages in other encodings still yield their ASCII anchors
            let contents = fs::read(entry.path())?;
            let links: Vec<String> = ANCHOR
                .captures_iter(&contents)
                .map(|cap| String::from_utf8_lossy(&cap[1]).into_owned())
                .collect();
            pages.push((name.to_string(), links));
        }
        let corpus = Self::from_links(pages);
        debug!(
            dir = %dir.display(),
            pages = corpus.len(),
            links = corpus.graph.edge_size(),
            "crawled corpus"
        );
        Ok(corpus)
    }

    pub fn graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn page(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, page: &VertexId) -> Option<&str> {
        self.names.get(page).map(String::as_str)
    }

    /// Page names in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.keys().map(String::as_str)
    }

    /// The out-set of `name`, or `None` for an unknown page.
    pub fn links(&self, name: &str) -> Option<BTreeSet<&str>> {
        let u = self.page(name)?;
        let res = self
            .graph
            .out_edges(&u)
            .filter_map(|e| self.name(&e.sink))
            .collect();
        Some(res)
    }
}
