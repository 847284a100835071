//! Loading system files from disk
//!
//! Files are memory-mapped read-only when the `mmap` feature is enabled and
//! read into memory otherwise. Either way the decoder sees one bounded slice.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};
use savio_core::ByteSource;

use crate::config::DecodeConfig;
use crate::decode::{decode_source, DecodedFile};
use crate::Result;

/// Bytes of a loaded file
#[derive(Debug)]
enum FileData {
    #[cfg(feature = "mmap")]
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl ByteSource for FileData {
    fn as_slice(&self) -> &[u8] {
        match self {
            #[cfg(feature = "mmap")]
            FileData::Mapped(mmap) => &mmap[..],
            FileData::Owned(bytes) => bytes.as_slice(),
        }
    }
}

/// File handle for system files
#[derive(Debug)]
pub struct SavFile {
    pub path: PathBuf,
    data: FileData,
}

impl SavFile {
    /// Open a system file, checking its extension and size first
    pub fn open<P: AsRef<Path>>(path: P, config: &DecodeConfig) -> Result<Self> {
        let path = path.as_ref();
        config.check_extension(path)?;

        let file = File::open(path)?;
        let size = file.metadata()?.len();
        config.check_size(size)?;

        let data = Self::load(file, size)?;
        debug!("loaded {} ({} bytes)", path.display(), size);

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    #[cfg(feature = "mmap")]
    fn load(file: File, size: u64) -> Result<FileData> {
        // zero-length maps are rejected on some platforms
        if size == 0 {
            return Ok(FileData::Owned(Vec::new()));
        }
        // SAFETY: Read-only mapping; the file is not modified while mapped
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Ok(FileData::Mapped(mmap))
    }

    #[cfg(not(feature = "mmap"))]
    fn load(mut file: File, size: u64) -> Result<FileData> {
        use std::io::Read;

        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes)?;
        Ok(FileData::Owned(bytes))
    }

    /// Raw bytes of the file
    pub fn bytes(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Decode the loaded bytes
    pub fn decode(&self) -> Result<DecodedFile> {
        // the size limit was applied when the file was opened
        decode_source(&self.data, &DecodeConfig::default())
    }
}

impl ByteSource for SavFile {
    fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }
}

/// Open and decode a file in one step
pub fn decode_path<P: AsRef<Path>>(path: P, config: &DecodeConfig) -> Result<DecodedFile> {
    SavFile::open(path, config)?.decode()
}
