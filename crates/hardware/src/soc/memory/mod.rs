//! Main Memory (RAM).
//!
//! Flat array of byte cells, zero-initialised and bounds-checked. It provides:
//! 1. **Storage:** A fixed-capacity buffer allocated once at startup.
//! 2. **Access:** Single-byte `read`/`write`; every out-of-range access is a `Fault`,
//!    memory never grows or wraps.
//! 3. **Loading:** Slice writes used by the program loader.

use std::fmt;

use crate::common::Fault;
use crate::common::constants::RAM_SIZE;

/// Byte-addressed RAM of fixed capacity.
#[derive(Clone, PartialEq, Eq)]
pub struct Ram {
    cells: Vec<u8>,
}

impl Ram {
    /// Allocates `size` zeroed cells.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size],
        }
    }

    /// Capacity in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` for a zero-capacity RAM.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if `addr >= capacity`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.cells
            .get(addr)
            .copied()
            .ok_or_else(|| self.out_of_bounds(addr))
    }

    /// Writes `val` at `addr`.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if `addr >= capacity`; memory is left untouched.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        let capacity = self.cells.len();
        match self.cells.get_mut(addr) {
            Some(cell) => {
                *cell = val;
                Ok(())
            }
            None => Err(Fault::MemoryOutOfBounds { addr, capacity }),
        }
    }

    /// Writes `data` starting at `offset`.
    ///
    /// The whole range is checked before anything is written.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] naming the first address past the end of RAM.
    pub fn write_slice(&mut self, offset: usize, data: &[u8]) -> Result<(), Fault> {
        let end = offset.saturating_add(data.len());
        if end > self.cells.len() {
            return Err(self.out_of_bounds(self.cells.len().max(offset)));
        }
        self.cells[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Read-only view of the whole memory.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Hex dump, 16 bytes per row.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (row, chunk) in self.cells.chunks(16).enumerate() {
            out.push_str(&format!("{:#04x}:", row * 16));
            for byte in chunk {
                out.push_str(&format!(" {byte:02x}"));
            }
            out.push('\n');
        }
        out
    }

    fn out_of_bounds(&self, addr: usize) -> Fault {
        Fault::MemoryOutOfBounds {
            addr,
            capacity: self.cells.len(),
        }
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new(RAM_SIZE)
    }
}

impl fmt::Debug for Ram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ram")
            .field("capacity", &self.cells.len())
            .finish_non_exhaustive()
    }
}
