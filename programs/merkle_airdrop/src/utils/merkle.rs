use anchor_lang::solana_program::hash::hashv;
use anchor_lang::prelude::Pubkey;
use crate::constants::MAX_PROOF_LEN;

/// Leaf of the entitlement tree: sha256(recipient bytes || amount as u64 big-endian).
///
/// No domain prefix. Off-chain tree builders must produce exactly these 40 bytes.
pub fn hash_leaf(recipient: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[recipient.as_ref(), &amount.to_be_bytes()]).to_bytes()
}

/// Parent of two nodes: the pair is hashed in ascending byte order, so the
/// result does not depend on which side each child sits on.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` over `leaf` and compares the result with `root`.
///
/// An empty proof only verifies a single-leaf tree (leaf == root).
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    if proof.len() > MAX_PROOF_LEN {
        return false;
    }
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}
