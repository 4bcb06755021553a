//! `sitelist normalize <entry>...` – show the site key each entry groups under.

use anyhow::Result;
use serde::Serialize;
use sitelist_core::canonical::{self, CanonicalKey};

use super::{print_json, Output};

#[derive(Debug, Serialize)]
struct Normalized<'a> {
    raw: &'a str,
    key: CanonicalKey,
}

pub fn run_normalize(entries: &[String], out: Output) -> Result<()> {
    let rows: Vec<Normalized<'_>> = entries
        .iter()
        .map(|raw| Normalized {
            raw,
            key: canonical::normalize(raw.trim()),
        })
        .collect();

    if out.json {
        return print_json(&rows);
    }
    for row in rows {
        println!("{}\t{}", row.raw, row.key);
    }
    Ok(())
}
