#![allow(dead_code)]
use genespan::prelude::*;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random spans inside `[0, max_pos]`, unsorted and possibly overlapping.
pub fn random_spans<R: Rng>(
    rng: &mut R,
    count: usize,
    max_pos: i64,
    max_len: i64,
) -> Vec<Span> {
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..=max_pos);
            let len = rng.gen_range(0..=max_len);
            Span::new(start, (start + len).min(max_pos))
        })
        .collect()
}

/// Random gene table sorted by start, mimicking a compact bacterial
/// chromosome: mostly short gaps, some overlaps, strand runs.
pub struct DemoGeneTableBuilder {
    n_genes:     usize,
    seed:        u64,
    max_gap:     i64,
    max_overlap: i64,
}

impl Default for DemoGeneTableBuilder {
    fn default() -> Self {
        Self {
            n_genes:     50,
            seed:        42,
            max_gap:     60,
            max_overlap: 20,
        }
    }
}

impl DemoGeneTableBuilder {
    pub fn with_n_genes(
        mut self,
        n_genes: usize,
    ) -> Self {
        self.n_genes = n_genes;
        self
    }

    pub fn with_seed(
        mut self,
        seed: u64,
    ) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> GeneTable {
        let mut rng = seeded_rng(self.seed);
        let mut records = Vec::with_capacity(self.n_genes);
        let mut strand = Strand::Forward;
        let mut pos: i64 = rng.gen_range(1..100);
        let mut last_end: i64 = 0;

        for i in 0..self.n_genes {
            let len = rng.gen_range(90..1500);
            if rng.gen_bool(0.3) {
                strand = match strand {
                    Strand::Forward => Strand::Reverse,
                    Strand::Reverse => Strand::Forward,
                };
            }
            let name = if rng.gen_bool(0.2) {
                "-".to_string()
            }
            else {
                format!("gene{}", i)
            };
            let synonym = format!("SYN_{:04}", i);
            last_end = last_end.max(pos + len - 1);
            records.push(
                GeneRecord::new(pos, pos + len - 1, strand, name, synonym)
                    .expect("generated records are well formed"),
            );

            let step = rng.gen_range(-self.max_overlap..=self.max_gap);
            pos = (pos + len + step).max(pos + 1);
        }

        let chr_len = last_end + rng.gen_range(0..500);
        GeneTable::try_new(records, chr_len).expect("synonyms are unique")
    }
}
