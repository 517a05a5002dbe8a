use crate::Corpus;
use quickcheck::{Arbitrary, Gen};

/// `{A: {B, C}, B: {}, C: {A}}`
pub fn three_pages_with_sink() -> Corpus {
    Corpus::from_links([("A", vec!["B", "C"]), ("B", vec![]), ("C", vec!["A"])])
}

/// `{A: {B}, B: {A}}`
pub fn two_pages_cycle() -> Corpus {
    Corpus::from_links([("A", vec!["B"]), ("B", vec!["A"])])
}

pub fn single_page() -> Corpus {
    Corpus::from_links([("A", Vec::<&str>::new())])
}

#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub pages: Vec<(String, Vec<String>)>,
}

impl RandomCorpus {
    pub fn build(&self) -> Corpus {
        Corpus::from_links(self.pages.clone())
    }
}

impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 10;

        let n = usize::arbitrary(g) % N + 1;
        let names: Vec<String> = (0..n).map(|i| format!("{i}.html")).collect();
        let mut links = vec![vec![]; n];
        for _ in 0..(n * 2) {
            let u = usize::arbitrary(g) % n;
            let v = usize::arbitrary(g) % n;
            links[u].push(names[v].clone());
        }
        let pages = names.into_iter().zip(links).collect();
        Self { pages }
    }
}

/// A damping factor in `[0.01, 0.99]`.
#[derive(Debug, Clone, Copy)]
pub struct Damping(pub f64);

impl Arbitrary for Damping {
    fn arbitrary(g: &mut Gen) -> Self {
        let x = u8::arbitrary(g) % 99 + 1;
        Self(f64::from(x) / 100.0)
    }
}
