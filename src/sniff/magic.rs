//! Magic-number matching against short byte prefixes.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Longest prefix any signature check will read.
pub const MAGIC_PREFIX_LEN: usize = 56;

/// Compare the leading bytes of the file at `path` against `magic`.
///
/// Matches only when the file holds strictly more than `magic.len()`
/// bytes and every leading byte equals the signature positionally. Any
/// I/O failure reads as "no match"; the handle is scoped and released
/// on every exit path.
pub fn matches_magic(path: &Path, magic: &[u8]) -> bool {
    let mut buf = [0u8; MAGIC_PREFIX_LEN];
    let filled = match File::open(path).and_then(|mut file| read_up_to(&mut file, &mut buf)) {
        Ok(n) => n,
        Err(_) => return false,
    };
    filled > magic.len() && buf[..magic.len()] == *magic
}

/// Fill `buf` from the reader, stopping at EOF or when full.
fn read_up_to(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
