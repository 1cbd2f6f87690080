//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Deterministic pseudo-random genome sequence of `len` bases
pub fn genome_sequence(len: usize, seed: u64) -> String {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ['A', 'C', 'G', 'T'][(state >> 62) as usize]
        })
        .collect()
}

/// Write a FASTA file with one line per sequence
pub fn write_fasta<S: AsRef<str>>(dir: &Path, name: &str, records: &[(&str, S)]) -> PathBuf {
    let content: String = records
        .iter()
        .map(|(header, seq)| format!(">{header}\n{}\n", seq.as_ref()))
        .collect();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// One hit as the fields that matter to the parser
pub struct Row<'a> {
    pub id: &'a str,
    pub locus: &'a str,
    pub from: u64,
    pub to: u64,
    pub e_value: &'a str,
    pub score: &'a str,
}

/// Write an nhmmer-style `--tblout` table searched against `target`
pub fn write_table(dir: &Path, name: &str, target: &str, rows: &[Row<'_>]) -> PathBuf {
    let mut content = String::from(
        "# target name        accession  query name           accession  hmmfrom hmm to alifrom  ali to envfrom  env to  sq len strand   E-value  score  bias  description of target\n\
         #------------------- ---------- -------------------- ---------- ------- ------- ------- ------- ------- ------- ------- ------ --------- ------ ----- ---------------------\n",
    );
    for row in rows {
        let strand = if row.to < row.from { "-" } else { "+" };
        content.push_str(&format!(
            "{:<20} -          {:<20} -                1     151 {:>7} {:>7}       1    1000    1000    {strand} {:>9} {:>6}   0.1  -\n",
            row.id, row.locus, row.from, row.to, row.e_value, row.score
        ));
    }
    content.push_str(&format!(
        "#\n# Program:         nhmmer\n# Query file:      {name}.hmm\n# Target file:     /data/genomes/{target}\n# [ok]\n"
    ));

    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Expected reverse complement for plain ACGT text
pub fn revcomp(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            other => other,
        })
        .collect()
}
