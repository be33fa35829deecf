use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Claim errors
    #[msg("Recipient has already claimed from this distribution")]
    AlreadyClaimed,
    #[msg("Claim amount exceeds the distribution's remaining balance")]
    InsufficientRemaining,
    #[msg("Merkle proof does not match the distribution root")]
    BadProof,
    #[msg("Token transfer to the recipient failed")]
    TransferFailed,

    // Creation errors
    #[msg("Creator could not fund the distribution")]
    Underfunded,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid merkle root")]
    InvalidRoot,

    // Lookup errors
    #[msg("Distribution not found")]
    DistributionNotFound,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distribution's token mint")]
    TokenMintMismatch,
    #[msg("Token account is not owned by the expected wallet")]
    RecipientMismatch,
}
