// src/io/fastq.rs
use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};
use bio::io::fastq;
use flate2::read::MultiGzDecoder;

/// Open a FASTQ file for reading, handles gzipped files automatically
pub fn open_fastq(path: &str) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Unable to open FASTQ file {}", path))?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read every sequence line of a FASTQ stream, upper-cased, in file order
pub fn read_fastq_sequences<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut sequences = Vec::new();
    for (i, record) in fastq::Reader::from_bufread(reader).records().enumerate() {
        let record = record.with_context(|| format!("Malformed FASTQ record {}", i + 1))?;
        let seq = String::from_utf8(record.seq().to_ascii_uppercase())
            .with_context(|| format!("FASTQ record {} is not valid UTF-8", record.id()))?;
        sequences.push(seq);
    }
    Ok(sequences)
}
