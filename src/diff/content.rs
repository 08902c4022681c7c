use anyhow::{Context, Result};
use sha2::{Digest, Sha512};
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;
use tracing::{Level, debug, span};

/// Read buffer used while hashing.
const BUFFER_SIZE: usize = 65536;

/// Outcome of comparing a live file against its snapshot copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Both files exist and their SHA-512 digests match.
    Identical,
    /// Both files exist and their digests differ.
    Different,
    /// The destination does not exist. Reported as "not different" by
    /// [`Comparison::is_different`], but it is not [`Comparison::Identical`]
    /// either, so change filtering still offers the file.
    DestinationMissing,
}

impl Comparison {
    /// Whether the comparison found differing content.
    ///
    /// A missing destination answers `false`: a file that has never been
    /// synced shows no diff.
    #[must_use]
    pub const fn is_different(self) -> bool {
        matches!(self, Self::Different)
    }

    /// Whether both files exist with byte-identical content.
    #[must_use]
    pub const fn is_identical(self) -> bool {
        matches!(self, Self::Identical)
    }
}

/// Compare `a` (the live file) with `b` (the snapshot copy) by digest.
///
/// # Errors
///
/// Returns an error if `a` cannot be opened, if `b` exists but cannot be
/// opened, or if reading either stream fails part way.
pub fn diff_file(a: &Path, b: &Path) -> Result<Comparison> {
    let span = span!(Level::DEBUG, "diff_file", source = %a.display(), dest = %b.display());
    let _guard = span.enter();

    let source = File::open(a).with_context(|| format!("Failed to open {}", a.display()))?;

    let dest = match File::open(b) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Destination missing");
            return Ok(Comparison::DestinationMissing);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to open {}", b.display())),
    };

    let source_digest =
        digest_reader(source).with_context(|| format!("Failed to hash {}", a.display()))?;
    let dest_digest =
        digest_reader(dest).with_context(|| format!("Failed to hash {}", b.display()))?;

    let comparison = if source_digest == dest_digest {
        Comparison::Identical
    } else {
        Comparison::Different
    };
    debug!(?comparison, "Comparison complete");

    Ok(comparison)
}

/// Hash a whole stream with SHA-512.
fn digest_reader(mut reader: impl Read) -> io::Result<Vec<u8>> {
    let mut hasher = Sha512::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_vec())
}
