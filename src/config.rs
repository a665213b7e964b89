use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_BLOCKS: OnceLock<usize> = OnceLock::new();

/// Minimum Reed-Solomon block count before block encoding uses the rayon pool.
pub(crate) fn parallel_min_blocks() -> usize {
    *PARALLEL_MIN_BLOCKS
        .get_or_init(|| parse_env_usize("QR_PARALLEL_MIN_BLOCKS", 4).clamp(1, 256))
}

static BIT_VECTOR_CAPACITY: OnceLock<usize> = OnceLock::new();

/// Initial byte capacity of a fresh `BitVector`.
pub(crate) fn bit_vector_capacity() -> usize {
    *BIT_VECTOR_CAPACITY
        .get_or_init(|| parse_env_usize("QR_BIT_VECTOR_CAPACITY", 32).clamp(1, 4096))
}
