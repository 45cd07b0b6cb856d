// src/io/fasta.rs
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Residues per FASTA sequence line.
pub const LINE_WIDTH: usize = 80;

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta(path: &str) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("Unable to open FASTA file {}", path))?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read every record's sequence, upper-cased, in file order.
/// Multi-line records are joined.
pub fn read_fasta_sequences<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut sequences = Vec::new();
    for (i, record) in fasta::Reader::from_bufread(reader).records().enumerate() {
        let record = record.with_context(|| format!("Malformed FASTA record {}", i + 1))?;
        if record.seq().is_empty() {
            continue;
        }
        let seq = String::from_utf8(record.seq().to_ascii_uppercase())
            .with_context(|| format!("FASTA record {} is not valid UTF-8", record.id()))?;
        sequences.push(seq);
    }
    Ok(sequences)
}

impl FastaWriter {
    pub fn new(path: &str) -> Result<Self> {
        let file = File::create(path).with_context(|| format!("Unable to create FASTA file {}", path))?;
        if path.ends_with(".gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    fn inner(&mut self) -> &mut dyn Write {
        match self {
            FastaWriter::Plain(writer) => writer,
            FastaWriter::Compressed(writer) => writer,
        }
    }

    /// Write one record, wrapping the sequence at [`LINE_WIDTH`]
    pub fn write_record(&mut self, header: &str, sequence: &str) -> std::io::Result<()> {
        let writer = self.inner();
        writeln!(writer, ">{}", header)?;
        for line in sequence.as_bytes().chunks(LINE_WIDTH) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Flush buffers and, for gzip output, write the trailer
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}
