//! Shared fixtures for integration tests
#![allow(dead_code)]

use diverse_domains::bio::sequence::Sequence;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small ASTRAL-style domain record
#[derive(Debug, Clone)]
pub struct TestDomain {
    pub id: String,
    pub sccs: String,
    pub residues: String,
}

impl TestDomain {
    pub fn new(id: impl Into<String>, sccs: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sccs: sccs.into(),
            residues: residues.into(),
        }
    }

    pub fn to_fasta(&self) -> String {
        format!(
            ">{} {} (A:) Test domain {{Test organism}}\n{}\n",
            self.id,
            self.sccs,
            self.residues.to_lowercase()
        )
    }
}

pub fn render_fasta(domains: &[TestDomain]) -> String {
    let mut out = String::new();
    for domain in domains {
        write!(&mut out, "{}", domain.to_fasta()).unwrap();
    }
    out
}

/// Temp directory holding an input FASTA file
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_fasta(&self, name: &str, domains: &[TestDomain]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, render_fasta(domains)).expect("Failed to write fixture");
        path
    }
}

/// Sequences named s0, s1, ... in the given order
pub fn numbered(residues: &[&str]) -> Vec<Sequence> {
    residues
        .iter()
        .enumerate()
        .map(|(i, r)| Sequence::new(format!("s{}", i), r.as_bytes().to_vec()))
        .collect()
}

/// A mixed set of short domains across the four main classes
pub fn astral_sample() -> Vec<TestDomain> {
    vec![
        TestDomain::new("d1dlwa_", "a.1.1.1", "SLFEQLGGQAAVQAVTAQFYANIQADATVATFF"),
        TestDomain::new("d1uvya_", "a.1.1.1", "SLFEQLGGQAAVQAVTAQFYANIQADATVATFF"),
        TestDomain::new("d1b7va_", "b.1.1.1", "DIQMTQSPSSLSASVGDRVTITCRAS"),
        TestDomain::new("d2gb1a_", "d.15.7.1", "MTYKLILNGKTLKGETTTEAVDAATAEKVFKQYANDNGVDGEWTYDDATKTFTVTE"),
        TestDomain::new("d1crna_", "g.3.6.1", "TTCCPSIVARSNFNVCRLPGTPEA"),
        TestDomain::new("d3chya_", "c.23.1.1", "ADKELKFLVVDDFSTMRRIVRNLLEELGF"),
        TestDomain::new("d1tena_", "b.1.2.1", "RLDAPSQIEVKDVTDTTALITWFKPLAEIDGIELTYGIKDVPGDRTTIDLTEDENQYSIGNLKPDTEYEVSLISRRGDMSSNPAKETFTT"),
        TestDomain::new("d1fkja_", "d.26.1.1", "GVQVETISPGDGRTFPKRGQTCVVHYTGMLEDGKK"),
    ]
}
