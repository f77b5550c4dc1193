use anyhow::Context;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// A named sequence read from a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub name: String,
    pub seq: Vec<u8>,
}

/// ```
/// use std::io::BufRead;
/// let reader = dnatopo::reader("tests/dna/promoter.fa").unwrap();
/// let lines = reader.lines().collect::<Vec<_>>();
/// assert_eq!(lines.len(), 2);
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path)
            .with_context(|| format!("could not open {}", path.display()))?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("could not create {}", output))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}

/// Reads every record of a FASTA file, keeping input order.
///
/// ```
/// let records = dnatopo::read_fasta("tests/dna/promoter.fa").unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].name, "promoter");
/// ```
pub fn read_fasta(input: &str) -> anyhow::Result<Vec<SeqRecord>> {
    let mut fa_in = noodles_fasta::io::Reader::new(reader(input)?);

    let mut records = vec![];
    for result in fa_in.records() {
        let record = result.with_context(|| format!("malformed FASTA in {}", input))?;
        let name = String::from_utf8(record.name().into())?;
        let seq = record.sequence().as_ref().to_vec();
        records.push(SeqRecord { name, seq });
    }

    Ok(records)
}
