use super::*;
use crate::state::{ClaimStatus, Distribution, DistributionView};

/// Serialized account data (discriminator + borsh) for `account`.
fn account_data<T: AccountSerialize>(account: &T) -> Vec<u8> {
    let mut data = Vec::new();
    account.try_serialize(&mut data).unwrap();
    data
}

#[test]
fn test_is_claimed_reads_flag() {
    let key = wallet(1);
    let owner = crate::ID;
    let mut lamports = 0;
    let mut data = account_data(&ClaimStatus { claimed: true });
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
    assert!(ClaimStatus::is_claimed(&info));
}

#[test]
fn test_is_claimed_false_for_unclaimed_status() {
    let key = wallet(1);
    let owner = crate::ID;
    let mut lamports = 0;
    let mut data = account_data(&ClaimStatus::default());
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
    assert!(!ClaimStatus::is_claimed(&info));
}

#[test]
fn test_is_claimed_false_for_missing_account() {
    let key = wallet(1);
    let owner = Pubkey::default();
    let mut lamports = 0;
    let mut data: Vec<u8> = Vec::new();
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
    assert!(!ClaimStatus::is_claimed(&info));
}

#[test]
fn test_is_claimed_false_for_foreign_account() {
    let key = wallet(1);
    let owner = wallet(0xEE);
    let mut lamports = 0;
    let mut data = account_data(&ClaimStatus { claimed: true });
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
    assert!(!ClaimStatus::is_claimed(&info));
}

#[test]
fn test_is_claimed_false_for_other_account_type() {
    let key = wallet(1);
    let owner = crate::ID;
    let mut lamports = 0;
    let mut data = account_data(&Distribution::default());
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
    assert!(!ClaimStatus::is_claimed(&info));
}

#[test]
fn test_load_existing_distribution() {
    let stored = Distribution {
        bump: 254,
        id: 3,
        root: [5; 32],
        token_mint: wallet(0xAA),
        initial_amount: 100,
        remaining_amount: 40,
    };
    let key = wallet(2);
    let owner = crate::ID;
    let mut lamports = 0;
    let mut data = account_data(&stored);
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

    let loaded = Distribution::load(&info).unwrap();
    assert_eq!(loaded, stored);
    assert_eq!(
        DistributionView::from(&loaded),
        DistributionView {
            id: 3,
            root: [5; 32],
            token_mint: wallet(0xAA),
            initial_amount: 100,
            remaining_amount: 40,
            claimed_amount: 60,
        }
    );
}

#[test]
fn test_load_unknown_distribution() {
    let key = wallet(2);
    let owner = Pubkey::default();
    let mut lamports = 0;
    let mut data: Vec<u8> = Vec::new();
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

    let err = Distribution::load(&info).unwrap_err();
    assert_error(err, AirdropError::DistributionNotFound);
}

#[test]
fn test_load_rejects_claim_status_account() {
    let key = wallet(2);
    let owner = crate::ID;
    let mut lamports = 0;
    let mut data = account_data(&ClaimStatus::default());
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

    let err = Distribution::load(&info).unwrap_err();
    assert_error(err, AirdropError::DistributionNotFound);
}

#[test]
fn test_status_follows_harness_claims() {
    let entitlements = [merkle_tree::Entitlement::new(wallet(2), 50)];
    let (mut harness, tree, id) = funded_distribution(&entitlements, 50);

    assert!(!harness.is_claimed(id, &wallet(2)));
    harness.claim(id, wallet(2), 50, &tree.proof(0)).unwrap();
    assert!(harness.is_claimed(id, &wallet(2)));

    let err = harness.claim(id, wallet(2), 50, &tree.proof(0)).unwrap_err();
    assert_error(err, AirdropError::AlreadyClaimed);
    assert!(harness.is_claimed(id, &wallet(2)));
}

#[test]
fn test_claim_load_reports_unknown_distribution() {
    let key = wallet(2);
    let owner = Pubkey::default();
    let mut lamports = 0;
    let mut data: Vec<u8> = Vec::new();
    let info = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &owner, false, 0);

    let err = Distribution::load_for_claim(&info, &wallet(0xAA)).unwrap_err();
    assert_error(err, AirdropError::DistributionNotFound);
}

#[test]
fn test_claim_load_rejects_other_mint() {
    let stored = Distribution {
        id: 1,
        root: [5; 32],
        token_mint: wallet(0xAA),
        initial_amount: 100,
        remaining_amount: 100,
        ..Default::default()
    };
    let key = wallet(2);
    let owner = crate::ID;
    let mut lamports = 0;
    let mut data = account_data(&stored);
    let info = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &owner, false, 0);

    let err = Distribution::load_for_claim(&info, &wallet(0xBB)).unwrap_err();
    assert_error(err, AirdropError::TokenMintMismatch);
    assert_eq!(Distribution::load_for_claim(&info, &wallet(0xAA)).unwrap(), stored);
}

#[test]
fn test_claim_writes_distribution_back() {
    let entitlements = [merkle_tree::Entitlement::new(wallet(2), 30)];
    let tree = merkle_tree::EntitlementTree::new(&entitlements);
    let stored = Distribution {
        bump: 253,
        id: 4,
        root: tree.root(),
        token_mint: wallet(0xAA),
        initial_amount: 100,
        remaining_amount: 100,
    };
    let key = wallet(3);
    let owner = crate::ID;
    let mut lamports = 0;
    let mut data = account_data(&stored);
    let info = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &owner, false, 0);

    let mut distribution = Distribution::load_for_claim(&info, &wallet(0xAA)).unwrap();
    let mut status = ClaimStatus::default();
    let mut token = mock_token::MockToken {
        custody: 100,
        ..Default::default()
    };
    crate::instructions::process_claim(
        &mut distribution,
        &mut status,
        &wallet(2),
        30,
        &tree.proof(0),
        &mut token,
    )
    .unwrap();
    distribution.store(&info).unwrap();

    let reloaded = Distribution::load(&info).unwrap();
    assert_eq!(reloaded.remaining_amount, 70);
    assert_eq!(DistributionView::from(&reloaded).claimed_amount, 30);
    assert_eq!(reloaded.bump, 253);
}
