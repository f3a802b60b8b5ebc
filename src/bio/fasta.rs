use crate::bio::sequence::Sequence;
use crate::DiverseError;
use flate2::read::GzDecoder;
use memmap2::Mmap;
use nom::{
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{line_ending, not_line_ending},
    combinator::{cut, map_res, opt},
    sequence::preceded,
    IResult,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Parse a FASTA header line. Headers must be valid UTF-8.
fn parse_header(input: &[u8]) -> IResult<&[u8], (&str, Option<&str>)> {
    let (input, _) = tag(b">")(input)?;
    let (input, id) = map_res(
        take_till(|c: u8| c == b' ' || c == b'\t' || c == b'\n' || c == b'\r'),
        std::str::from_utf8,
    )(input)?;
    let (input, description) = opt(preceded(
        take_while1(|c: u8| c == b' ' || c == b'\t'),
        cut(map_res(not_line_ending, std::str::from_utf8)),
    ))(input)?;
    let (input, _) = opt(line_ending)(input)?;
    Ok((input, (id, description.filter(|d| !d.trim().is_empty()))))
}

/// Parse sequence lines until next header or EOF. Residues keep their case.
fn parse_sequence(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let mut sequence = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() && remaining[0] != b'>' {
        let (rest, line) =
            take_till::<_, _, nom::error::Error<_>>(|c: u8| c == b'\n' || c == b'\r')(remaining)?;
        let (rest, _) = opt(line_ending)(rest)?;

        for &c in line {
            if !c.is_ascii_whitespace() {
                sequence.push(c);
            }
        }

        // A lone '\r' is not a line ending for nom
        remaining = match rest.first() {
            Some(b'\r') => &rest[1..],
            _ => rest,
        };
    }

    Ok((remaining, sequence))
}

/// Parse a single FASTA record
fn parse_record(input: &[u8]) -> IResult<&[u8], Sequence> {
    let (input, (id, description)) = parse_header(input)?;
    let (input, sequence) = parse_sequence(input)?;

    let mut seq = Sequence::new(id.to_string(), sequence);
    if let Some(desc) = description {
        seq = seq.with_description(desc.trim_end().to_string());
    }

    Ok((input, seq))
}

/// Parse FASTA from bytes. Records keep file order; empty records are kept.
pub fn parse_fasta_from_bytes(data: &[u8]) -> Result<Vec<Sequence>, DiverseError> {
    let mut input = data;
    let mut sequences = Vec::new();

    loop {
        while !input.is_empty() && input[0].is_ascii_whitespace() {
            input = &input[1..];
        }

        if input.is_empty() {
            break;
        }

        if input[0] != b'>' {
            return Err(DiverseError::Parse(format!(
                "Expected '>' at start of record {}, found {:?}",
                sequences.len() + 1,
                input[0] as char
            )));
        }

        let (remaining, seq) = parse_record(input).map_err(|e| {
            DiverseError::Parse(format!(
                "Malformed header in record {} (headers must be UTF-8 text): {:?}",
                sequences.len() + 1,
                e
            ))
        })?;
        if seq.id.is_empty() {
            return Err(DiverseError::Parse(format!(
                "Record {} has an empty identifier",
                sequences.len() + 1
            )));
        }
        sequences.push(seq);
        input = remaining;
    }

    Ok(sequences)
}

/// Parse a FASTA file into sequences (supports .gz compression)
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>, DiverseError> {
    let path = path.as_ref();

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        parse_fasta_gzip(path)
    } else {
        parse_fasta_uncompressed(path)
    }
}

fn parse_fasta_uncompressed(path: &Path) -> Result<Vec<Sequence>, DiverseError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }
    // SAFETY: the map is read-only and dropped before this function returns
    let mmap = unsafe { Mmap::map(&file)? };

    parse_fasta_from_bytes(&mmap[..])
}

fn parse_fasta_gzip(path: &Path) -> Result<Vec<Sequence>, DiverseError> {
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut buffer = Vec::new();
    decoder.read_to_end(&mut buffer)?;

    parse_fasta_from_bytes(&buffer)
}

/// Write sequences to a FASTA file (supports .gz compression)
pub fn write_fasta<'a, P, I>(path: P, sequences: I, line_width: usize) -> Result<(), DiverseError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Sequence>,
{
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let path = path.as_ref();
    let file = File::create(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let encoder = GzEncoder::new(file, Compression::default());
        let mut writer = BufWriter::new(encoder);
        write_fasta_to_writer(&mut writer, sequences, line_width)?;
        writer
            .into_inner()
            .map_err(|e| DiverseError::Io(e.into_error()))?
            .finish()?;
    } else {
        let mut writer = BufWriter::new(file);
        write_fasta_to_writer(&mut writer, sequences, line_width)?;
        writer.flush()?;
    }

    Ok(())
}

/// Write sequences to any writer, wrapping residues at `line_width` columns
pub fn write_fasta_to_writer<'a, W, I>(
    writer: &mut W,
    sequences: I,
    line_width: usize,
) -> Result<(), DiverseError>
where
    W: Write,
    I: IntoIterator<Item = &'a Sequence>,
{
    let width = line_width.max(1);
    for seq in sequences {
        writeln!(writer, "{}", seq.header())?;

        for chunk in seq.sequence.chunks(width) {
            writeln!(writer, "{}", String::from_utf8_lossy(chunk))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let input = b">d1dlwa_ a.1.1.1 (A:) Protozoan/bacterial hemoglobin\nSLFEQ";
        let (remaining, (id, desc)) = parse_header(input).unwrap();
        assert_eq!(id, "d1dlwa_");
        assert_eq!(desc, Some("a.1.1.1 (A:) Protozoan/bacterial hemoglobin"));
        assert_eq!(remaining, b"SLFEQ");
    }

    #[test]
    fn test_parse_header_without_newline() {
        let (remaining, (id, desc)) = parse_header(b">only_id").unwrap();
        assert_eq!(id, "only_id");
        assert_eq!(desc, None);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_parse_sequence_keeps_case_and_joins() {
        let (remaining, seq) = parse_sequence(b"slfe\nQLGG\r\n>next").unwrap();
        assert_eq!(seq, b"slfeQLGG");
        assert_eq!(remaining, b">next");
    }

    #[test]
    fn test_rejects_non_utf8_header() {
        let bad_id = parse_fasta_from_bytes(b">ok\nAC\n>d1\xff\nAC\n");
        match bad_id {
            Err(DiverseError::Parse(msg)) => assert!(msg.contains("record 2")),
            other => panic!("expected parse error, got {:?}", other),
        }

        let bad_description = parse_fasta_from_bytes(b">d1 a.1.1.1 \xfe\xff\nAC\n");
        assert!(matches!(bad_description, Err(DiverseError::Parse(_))));
    }

    #[test]
    fn test_rejects_leading_garbage() {
        let result = parse_fasta_from_bytes(b"ACGT\n>s1\nACGT\n");
        assert!(matches!(result, Err(DiverseError::Parse(_))));
    }

    #[test]
    fn test_keeps_empty_records() {
        let sequences = parse_fasta_from_bytes(b">empty\n>full\nAC\n").unwrap();
        assert_eq!(sequences.len(), 2);
        assert!(sequences[0].is_empty());
        assert_eq!(sequences[1].sequence, b"AC");
    }

    #[test]
    fn test_write_wraps_lines() {
        let seq = Sequence::new("s1".to_string(), b"ACGTACGTAC".to_vec())
            .with_description("a.1.1.1".to_string());
        let mut buffer = Vec::new();
        write_fasta_to_writer(&mut buffer, [&seq], 4).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            ">s1 a.1.1.1\nACGT\nACGT\nAC\n"
        );
    }
}
