use std::{fs::File, io::Write, path::Path};

#[cfg(feature = "serialize")]
use base64::{prelude::BASE64_STANDARD, Engine};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::{FillPolicy, GridError, GridParameters, Record};

use super::{Grid, GridAttribute};

/// Cell types with a fixed-width raw byte encoding. Fields are encoded
/// little-endian so the on-disk layout is the same on every target.
pub trait GridAttributeRaw: GridAttribute {
    fn write_bytes(&self, out: &mut Vec<u8>);
    fn from_bytes(bytes: &[u8]) -> Result<Self, GridError>;
    fn len_bytes() -> usize;
}

impl GridAttributeRaw for f32 {
    fn write_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, GridError> {
        let bytes: [u8; 4] = bytes.try_into().map_err(|_| GridError::LengthMismatch {
            expected: 4,
            actual: bytes.len() as u64,
        })?;
        Ok(f32::from_le_bytes(bytes))
    }

    fn len_bytes() -> usize {
        4
    }
}

impl GridAttributeRaw for Record {
    fn write_bytes(&self, out: &mut Vec<u8>) {
        self.r.write_bytes(out);
        self.g.write_bytes(out);
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, GridError> {
        if bytes.len() != Self::len_bytes() {
            return Err(GridError::LengthMismatch {
                expected: Self::len_bytes() as u64,
                actual: bytes.len() as u64,
            });
        }
        Ok(Self {
            r: f32::from_bytes(&bytes[0..4])?,
            g: f32::from_bytes(&bytes[4..8])?,
        })
    }

    fn len_bytes() -> usize {
        8
    }
}

impl<T: GridAttributeRaw> Grid<T> {
    /// Serialize the grid as one contiguous byte sequence, cell by cell in
    /// storage order. No header, no delimiters: the length is always
    /// `width * height * len_bytes`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.cells.len() * T::len_bytes());
        for cell in self.iter() {
            cell.write_bytes(&mut buf);
        }
        buf
    }

    /// Decode a grid from the raw byte layout produced by [`Self::to_bytes`].
    /// The format carries no dimensions, so the caller supplies them; a byte
    /// count that disagrees is rejected rather than truncated.
    pub fn from_bytes(params: GridParameters, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = params.cell_count() * T::len_bytes() as u64;
        if bytes.len() as u64 != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: bytes.len() as u64,
            });
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(bytes.len() / T::len_bytes())
            .map_err(|_| GridError::Allocation {
                width: params.width,
                height: params.height,
            })?;
        for chunk in bytes.chunks_exact(T::len_bytes()) {
            cells.push(T::from_bytes(chunk)?);
        }

        Ok(Self { params, cells })
    }

    /// Write the complete serialized grid to `path`, creating or truncating
    /// the file. Open and write failures are propagated; nothing is retried.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), GridError> {
        let data = self.to_bytes();
        let mut file = File::create(path)?;
        file.write_all(&data)?;

        Ok(())
    }

    /// Read back a grid written by [`Self::write_to_file`].
    pub fn read_from_file(
        params: GridParameters,
        path: impl AsRef<Path>,
    ) -> Result<Self, GridError> {
        let data = std::fs::read(path)?;
        Self::from_bytes(params, &data)
    }
}

impl Grid<Record> {
    /// Generate a fixture grid and persist it in one call.
    pub fn generate_to_file(
        params: GridParameters,
        policy: FillPolicy,
        path: impl AsRef<Path>,
    ) -> Result<(), GridError> {
        Self::generate(params, policy)?.write_to_file(path)
    }
}

#[cfg(feature = "serialize")]
#[derive(Serialize, Deserialize)]
struct GridRepr {
    params: GridParameters,
    data: String,
}

#[cfg(feature = "serialize")]
impl<T: GridAttributeRaw> Serialize for Grid<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = GridRepr {
            params: *self.params(),
            data: BASE64_STANDARD.encode(self.to_bytes()),
        };
        repr.serialize(serializer)
    }
}

#[cfg(feature = "serialize")]
impl<'de, T: GridAttributeRaw> Deserialize<'de> for Grid<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = GridRepr::deserialize(deserializer)?;
        let bytes = BASE64_STANDARD
            .decode(repr.data)
            .map_err(serde::de::Error::custom)?;
        Self::from_bytes(repr.params, &bytes).map_err(serde::de::Error::custom)
    }
}
