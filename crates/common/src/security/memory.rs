//! Non-elidable wiping and memory barriers

use zeroize::Zeroize;

/// Overwrite every byte of `buffer` with zero
///
/// The write goes through `zeroize`'s volatile path and is followed by a
/// compiler fence, so it survives optimisation even when the buffer is never
/// read again. An empty buffer is a no-op.
pub fn secure_zeroize(buffer: &mut [u8]) {
    buffer.zeroize();
    barrier::compiler_fence_seq_cst();
}

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }
}
