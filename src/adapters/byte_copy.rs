//! Streaming copy of a byte source into a file.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

pub const COPY_BUFFER_SIZE: usize = 1024;

/// Copy `reader` into `dest` (created or truncated) through a fixed-size buffer.
///
/// Returns the number of bytes written. The destination is flushed and synced
/// before returning; both handles are closed on every exit path when they go
/// out of scope.
pub fn copy_to_file<R: Read>(mut reader: R, dest: &Path) -> io::Result<u64> {
    let mut file = File::create(dest)?;
    let copied = copy_stream(&mut reader, &mut file)?;
    file.flush()?;
    file.sync_all()?;
    Ok(copied)
}

fn copy_stream<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<u64> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..read])?;
        total += read as u64;
    }
}
