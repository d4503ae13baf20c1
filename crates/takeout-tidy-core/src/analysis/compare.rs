use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

const CHUNK_LENGTH: usize = 64 * 1024;

/// Byte-for-byte comparison of two files. Reads both to the end unless a
/// difference shows up earlier.
pub fn files_identical(a: &Path, b: &Path) -> io::Result<bool> {
    let mut reader_a = BufReader::new(File::open(a)?);
    let mut reader_b = BufReader::new(File::open(b)?);
    let mut buffer_a = vec![0u8; CHUNK_LENGTH];
    let mut buffer_b = vec![0u8; CHUNK_LENGTH];

    loop {
        let read_a = read_chunk(&mut reader_a, &mut buffer_a)?;
        let read_b = read_chunk(&mut reader_b, &mut buffer_b)?;
        if read_a != read_b || buffer_a[..read_a] != buffer_b[..read_b] {
            return Ok(false);
        }
        if read_a == 0 {
            return Ok(true);
        }
    }
}

/// Fills `buffer` unless the end of the file comes first.
fn read_chunk(reader: &mut impl Read, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
