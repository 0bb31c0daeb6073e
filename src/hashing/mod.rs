use crate::pairs::Pair;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// The truncated value is only used to fingerprint inputs in reports (so two runs can be
/// checked for identical pair lists); it is not a security boundary.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    truncate_to_u64(blake3::hash(data).as_bytes())
}

/// Fingerprints an ordered pair table.
///
/// Every row contributes `index_a`, `index_b` (little-endian `u64`) and the label byte, so the
/// result changes if any row is edited, dropped, or reordered. Row order matters because fold
/// membership is positional.
pub fn hash_pairs(pairs: &[Pair]) -> u64 {
    hash_to_u64(&encode_pairs(pairs))
}

const PAIR_ROW_BYTES: usize = 8 + 8 + 1;

fn encode_pairs(pairs: &[Pair]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + pairs.len() * PAIR_ROW_BYTES);
    bytes.extend_from_slice(&(pairs.len() as u64).to_le_bytes());
    for pair in pairs {
        bytes.extend_from_slice(&(pair.index_a as u64).to_le_bytes());
        bytes.extend_from_slice(&(pair.index_b as u64).to_le_bytes());
        bytes.push(pair.label.as_u8());
    }
    bytes
}

#[inline]
fn truncate_to_u64(hash: &[u8; 32]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(bytes)
}
