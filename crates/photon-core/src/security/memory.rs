use std::ops::{Deref, DerefMut};
use std::ptr;
use std::sync::atomic::{compiler_fence, Ordering};

use crate::consts::MAX_SECURE_ALLOC;
use crate::error::{PhotonError, Result};

/// Overwrite every byte with zero through a volatile pointer so the
/// store cannot be elided, even when the buffer is about to be freed.
pub fn secure_wipe(buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        // SAFETY: `byte` is a valid, exclusive reference into `buf`.
        unsafe { ptr::write_volatile(byte, 0) };
    }
    compiler_fence(Ordering::SeqCst);
}

/// Copy at most `dest.len() - 1` bytes from `src` and zero-fill the
/// remainder, leaving the destination length-terminated. Returns the
/// number of bytes copied. A zero-capacity destination is left alone.
pub fn secure_copy(dest: &mut [u8], src: &[u8]) -> usize {
    if dest.is_empty() {
        return 0;
    }

    let count = src.len().min(dest.len() - 1);
    dest[..count].copy_from_slice(&src[..count]);
    for byte in &mut dest[count..] {
        *byte = 0;
    }
    count
}

/// Zero-filled scratch buffer that wipes itself on drop.
///
/// Holds transient copies of attacker-influenced bytes (raw paths,
/// metadata scratch). The drop wipe covers every exit path, early
/// returns and errors included.
#[derive(Debug)]
pub struct SecureBuffer {
    data: Vec<u8>,
}

impl SecureBuffer {
    /// Allocate `size` zeroed bytes. Rejects zero-size requests and
    /// anything above `MAX_SECURE_ALLOC`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_SECURE_ALLOC {
            return Err(PhotonError::MemoryAllocation);
        }
        Ok(Self {
            data: vec![0u8; size],
        })
    }

    /// Bounded, length-terminated copy of `src` with `capacity` bytes.
    pub fn from_bytes(src: &[u8], capacity: usize) -> Result<Self> {
        let mut buf = Self::new(capacity)?;
        secure_copy(&mut buf.data, src);
        Ok(buf)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Deref for SecureBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for SecureBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Drop for SecureBuffer {
    fn drop(&mut self) {
        secure_wipe(&mut self.data);
    }
}
