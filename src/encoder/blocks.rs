//! Reed-Solomon block split and codeword interleaving
//!
//! A symbol's data codewords are cut into blocks of two sizes (the second group
//! one codeword longer), each block gets the same number of EC codewords, and
//! the final sequence reads the blocks column by column: all first data bytes,
//! all second data bytes, ..., then the EC bytes the same way.

use crate::config;
use crate::error::{QrError, Result};
use crate::models::BitVector;
use crate::reed_solomon::ReedSolomonEncoder;
use log::debug;
use rayon::prelude::*;

/// One block's data codewords and the EC codewords computed for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPair {
    data_bytes: Vec<u8>,
    error_correction_bytes: Vec<u8>,
}

impl BlockPair {
    /// Data codewords of this block
    pub fn data_bytes(&self) -> &[u8] {
        &self.data_bytes
    }

    /// EC codewords computed for the data
    pub fn error_correction_bytes(&self) -> &[u8] {
        &self.error_correction_bytes
    }
}

/// `(data bytes, EC bytes)` for block `block_id` of a symbol.
pub fn num_data_and_ec_bytes_for_block(
    num_total_bytes: usize,
    num_data_bytes: usize,
    num_rs_blocks: usize,
    block_id: usize,
) -> Result<(usize, usize)> {
    if num_rs_blocks == 0 {
        return Err(QrError::InvalidBlockLayout("no RS blocks".into()));
    }
    if block_id >= num_rs_blocks {
        return Err(QrError::InvalidBlockLayout(format!(
            "block id {} out of {} blocks",
            block_id, num_rs_blocks
        )));
    }

    let num_rs_blocks_in_group2 = num_total_bytes % num_rs_blocks;
    let num_rs_blocks_in_group1 = num_rs_blocks - num_rs_blocks_in_group2;
    let num_total_bytes_in_group1 = num_total_bytes / num_rs_blocks;
    let num_total_bytes_in_group2 = num_total_bytes_in_group1 + 1;
    let num_data_bytes_in_group1 = num_data_bytes / num_rs_blocks;
    let num_data_bytes_in_group2 = num_data_bytes_in_group1 + 1;

    let (Some(num_ec_bytes_in_group1), Some(num_ec_bytes_in_group2)) = (
        num_total_bytes_in_group1.checked_sub(num_data_bytes_in_group1),
        num_total_bytes_in_group2.checked_sub(num_data_bytes_in_group2),
    ) else {
        return Err(QrError::InvalidBlockLayout(format!(
            "{} data bytes exceed {} total bytes",
            num_data_bytes, num_total_bytes
        )));
    };

    if num_ec_bytes_in_group1 != num_ec_bytes_in_group2 {
        return Err(QrError::InvalidBlockLayout("EC bytes mismatch".into()));
    }
    let computed_total = (num_data_bytes_in_group1 + num_ec_bytes_in_group1)
        * num_rs_blocks_in_group1
        + (num_data_bytes_in_group2 + num_ec_bytes_in_group2) * num_rs_blocks_in_group2;
    if computed_total != num_total_bytes {
        return Err(QrError::InvalidBlockLayout("total bytes mismatch".into()));
    }
    let computed_data = num_data_bytes_in_group1 * num_rs_blocks_in_group1
        + num_data_bytes_in_group2 * num_rs_blocks_in_group2;
    if computed_data != num_data_bytes {
        return Err(QrError::InvalidBlockLayout("data bytes mismatch".into()));
    }

    if block_id < num_rs_blocks_in_group1 {
        Ok((num_data_bytes_in_group1, num_ec_bytes_in_group1))
    } else {
        Ok((num_data_bytes_in_group2, num_ec_bytes_in_group2))
    }
}

/// Split the data codewords in `bits` into blocks and compute each block's EC bytes.
///
/// Blocks are encoded on the rayon pool once their count reaches
/// `QR_PARALLEL_MIN_BLOCKS`; every worker owns its own encoder.
pub fn encode_blocks(
    bits: &BitVector,
    num_total_bytes: usize,
    num_data_bytes: usize,
    num_rs_blocks: usize,
) -> Result<Vec<BlockPair>> {
    if bits.size_in_bytes() != num_data_bytes {
        return Err(QrError::InvalidBlockLayout(format!(
            "{} data bytes supplied, {} expected",
            bits.size_in_bytes(),
            num_data_bytes
        )));
    }

    let data = &bits.array()[..num_data_bytes];
    let mut blocks = Vec::with_capacity(num_rs_blocks);
    let mut ec_bytes = 0;
    let mut offset = 0;
    for block_id in 0..num_rs_blocks {
        let (size, ec) =
            num_data_and_ec_bytes_for_block(num_total_bytes, num_data_bytes, num_rs_blocks, block_id)?;
        let mut codewords = Vec::with_capacity(size + ec);
        codewords.extend_from_slice(&data[offset..offset + size]);
        codewords.resize(size + ec, 0);
        blocks.push(codewords);
        ec_bytes = ec;
        offset += size;
    }
    if offset != num_data_bytes {
        return Err(QrError::InvalidBlockLayout(format!(
            "blocks cover {} of {} data bytes",
            offset, num_data_bytes
        )));
    }

    if num_rs_blocks >= config::parallel_min_blocks() {
        debug!("encoding {} RS blocks in parallel ({} EC bytes each)", num_rs_blocks, ec_bytes);
        blocks
            .par_iter_mut()
            .try_for_each_init(ReedSolomonEncoder::qr, |encoder, block| {
                encoder.encode(block, ec_bytes)
            })?;
    } else {
        debug!("encoding {} RS blocks ({} EC bytes each)", num_rs_blocks, ec_bytes);
        let mut encoder = ReedSolomonEncoder::qr();
        for block in &mut blocks {
            encoder.encode(block, ec_bytes)?;
        }
    }

    Ok(blocks
        .into_iter()
        .map(|mut codewords| {
            let error_correction_bytes = codewords.split_off(codewords.len() - ec_bytes);
            BlockPair {
                data_bytes: codewords,
                error_correction_bytes,
            }
        })
        .collect())
}

/// Interleave data and EC codewords of all blocks into the final codeword sequence.
pub fn interleave_with_ec_bytes(
    bits: &BitVector,
    num_total_bytes: usize,
    num_data_bytes: usize,
    num_rs_blocks: usize,
) -> Result<BitVector> {
    let blocks = encode_blocks(bits, num_total_bytes, num_data_bytes, num_rs_blocks)?;

    let max_num_data_bytes = blocks.iter().map(|b| b.data_bytes.len()).max().unwrap_or(0);
    let max_num_ec_bytes = blocks
        .iter()
        .map(|b| b.error_correction_bytes.len())
        .max()
        .unwrap_or(0);

    let mut result = BitVector::with_capacity(num_total_bytes);
    for i in 0..max_num_data_bytes {
        for block in &blocks {
            if let Some(&byte) = block.data_bytes.get(i) {
                result.append_bits(byte as u32, 8)?;
            }
        }
    }
    for i in 0..max_num_ec_bytes {
        for block in &blocks {
            if let Some(&byte) = block.error_correction_bytes.get(i) {
                result.append_bits(byte as u32, 8)?;
            }
        }
    }

    if result.size_in_bytes() != num_total_bytes {
        return Err(QrError::InvalidBlockLayout(format!(
            "interleaving produced {} bytes, expected {}",
            result.size_in_bytes(),
            num_total_bytes
        )));
    }
    debug!(
        "interleaved {} blocks into {} codewords",
        blocks.len(),
        num_total_bytes
    );
    Ok(result)
}
