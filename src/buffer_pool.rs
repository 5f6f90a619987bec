//! Per-thread pool of scratch character buffers used during search.
//!
//! This is the optimization spec.md §5 describes ("character buffers ...
//! may be drawn from a per-thread pool of fixed-capacity arrays (default
//! 256) to avoid per-query allocation; the pool is an optimization, not
//! an invariant"). Search correctness does not depend on it.

use std::cell::RefCell;

const DEFAULT_CAPACITY: usize = 256;

thread_local! {
    static POOL: RefCell<Vec<Vec<char>>> = RefCell::new(Vec::new());
}

/// A pooled character buffer. Returned to the thread-local pool when
/// dropped.
pub struct PooledBuffer {
    buffer: Option<Vec<char>>,
}

impl PooledBuffer {
    pub fn get_mut(&mut self) -> &mut Vec<char> {
        self.buffer.as_mut().expect("buffer taken before drop")
    }

    pub fn as_slice(&self) -> &[char] {
        self.buffer.as_deref().unwrap_or(&[])
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        if let Some(mut buffer) = self.buffer.take() {
            buffer.clear();
            POOL.with(|pool| pool.borrow_mut().push(buffer));
        }
    }
}

/// Checks a buffer out of the thread-local pool, allocating a fresh one
/// (with room for `DEFAULT_CAPACITY` characters) if the pool is empty.
pub fn checkout() -> PooledBuffer {
    let buffer = POOL
        .with(|pool| pool.borrow_mut().pop())
        .unwrap_or_else(|| Vec::with_capacity(DEFAULT_CAPACITY));
    PooledBuffer {
        buffer: Some(buffer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_are_reused() {
        {
            let mut buf = checkout();
            buf.get_mut().push('a');
        }
        let buf = checkout();
        assert!(buf.as_slice().is_empty());
    }
}
