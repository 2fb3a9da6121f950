use anchor_lang::solana_program::pubkey::Pubkey;

use crate::state::ClaimStakeLedger;

/// Builds a ledger with the scenario fixture parameters: a 10,000 token
/// allocation and a 24-hour staking lock.
fn test_ledger() -> ClaimStakeLedger {
    ClaimStakeLedger {
        airdrop_amount: 10_000,
        staking_duration: 86_400,
        ..ClaimStakeLedger::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_PARTICIPANTS;
    use crate::error::ClaimStakeLedgerError;
    use crate::state::ParticipantRecord;

    #[test]
    fn test_grant_eligibility_batch() {
        let mut ledger = test_ledger();
        let addresses = vec![
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        ];

        let added = ledger.grant_eligibility(&addresses).unwrap();
        assert_eq!(added, 3);
        assert_eq!(ledger.eligible.len(), 3);
        for address in &addresses {
            assert!(ledger.is_eligible(address));
        }
    }

    #[test]
    fn test_grant_eligibility_is_idempotent() {
        let mut ledger = test_ledger();
        let known = Pubkey::new_unique();
        ledger.grant_eligibility(&[known]).unwrap();

        // Re-granting a known address is a no-op, not an error
        let fresh = Pubkey::new_unique();
        let added = ledger.grant_eligibility(&[known, fresh]).unwrap();
        assert_eq!(added, 1);
        assert_eq!(ledger.eligible.len(), 2);
    }

    #[test]
    fn test_grant_eligibility_dedupes_within_batch() {
        let mut ledger = test_ledger();
        let address = Pubkey::new_unique();

        let added = ledger.grant_eligibility(&[address, address]).unwrap();
        assert_eq!(added, 1);
        assert_eq!(ledger.eligible.len(), 1);
    }

    #[test]
    fn test_grant_eligibility_rejects_zero_address() {
        let mut ledger = test_ledger();
        let before = vec![Pubkey::new_unique()];
        ledger.grant_eligibility(&before).unwrap();

        // One zero address anywhere in the batch rejects the whole call
        let good = Pubkey::new_unique();
        let result = ledger.grant_eligibility(&[good, Pubkey::default()]);
        assert!(matches!(result, Err(ClaimStakeLedgerError::InvalidAddress)));

        // No address from the rejected batch was applied
        assert_eq!(ledger.eligible, before);
        assert!(!ledger.is_eligible(&good));
    }

    #[test]
    fn test_grant_eligibility_capacity() {
        let mut ledger = test_ledger();
        let full: Vec<Pubkey> = (0..MAX_PARTICIPANTS).map(|_| Pubkey::new_unique()).collect();
        ledger.grant_eligibility(&full).unwrap();
        assert_eq!(ledger.eligible.len(), MAX_PARTICIPANTS);

        // A batch that would exceed capacity is rejected wholly
        let result = ledger.grant_eligibility(&[Pubkey::new_unique()]);
        assert!(matches!(
            result,
            Err(ClaimStakeLedgerError::ParticipantListFull)
        ));
        assert_eq!(ledger.eligible.len(), MAX_PARTICIPANTS);

        // Known addresses still pass: they add nothing to the list
        let added = ledger.grant_eligibility(&[full[0]]).unwrap();
        assert_eq!(added, 0);
    }

    #[test]
    fn test_half_amount_split() {
        let ledger = test_ledger();
        assert_eq!(ledger.half_amount(), 5_000);

        // For odd allocations the remainder is never paid out, so the
        // lifetime payout stays within the allocation
        let odd = ClaimStakeLedger {
            airdrop_amount: 10_001,
            ..ClaimStakeLedger::default()
        };
        assert_eq!(odd.half_amount(), 5_000);
        assert!(odd.half_amount() * 2 <= odd.airdrop_amount);
    }

    #[test]
    fn test_record_staker_updates_totals_and_cohort() {
        let mut ledger = test_ledger();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();

        ledger.record_staker(first, 5_000).unwrap();
        assert_eq!(ledger.total_participants_staked, 1);
        assert_eq!(ledger.total_amount_staked, 5_000);
        assert_eq!(ledger.staker_count(), 1);

        ledger.record_staker(second, 5_000).unwrap();
        assert_eq!(ledger.total_participants_staked, 2);
        assert_eq!(ledger.total_amount_staked, 10_000);
        assert_eq!(ledger.staker_count(), 2);
    }

    #[test]
    fn test_record_staker_overflow_leaves_totals_untouched() {
        let mut ledger = ClaimStakeLedger {
            airdrop_amount: 10_000,
            total_amount_staked: u64::MAX - 1,
            ..ClaimStakeLedger::default()
        };

        let result = ledger.record_staker(Pubkey::new_unique(), 5_000);
        assert!(matches!(
            result,
            Err(ClaimStakeLedgerError::ArithmeticOverflow)
        ));

        // Neither total moved and the cohort did not grow
        assert_eq!(ledger.total_participants_staked, 0);
        assert_eq!(ledger.total_amount_staked, u64::MAX - 1);
        assert_eq!(ledger.staker_count(), 0);
    }

    #[test]
    fn test_record_non_staker_is_idempotent() {
        let mut ledger = test_ledger();
        let participant = Pubkey::new_unique();

        ledger.record_non_staker(participant);
        ledger.record_non_staker(participant);
        assert_eq!(ledger.non_staker_count(), 1);
    }

    /// Mirrors the reference scenario: a 10,000 allocation with a 24-hour
    /// lock, claimed with the preference on at t=1000, staked immediately,
    /// unstake failing before the unlock and succeeding at exactly the
    /// unlock time, for a lifetime receipt of exactly the allocation.
    #[test]
    fn test_scenario_half_claim_then_stake_then_unstake() {
        println!("=== Testing claim -> stake -> unstake scenario ===");

        let mut ledger = test_ledger();
        let mut record = ParticipantRecord::default();
        let participant = Pubkey::new_unique();
        let mut received: u64 = 0;

        ledger.grant_eligibility(&[participant]).unwrap();

        // Claim at t=1000 pays the liquid half and records the preference
        record.validate_claim(ledger.is_eligible(&participant)).unwrap();
        record.record_claim(true);
        received += ledger.half_amount();
        assert_eq!(received, 5_000);

        // Stake at t=1000 pins the unlock time and updates the totals
        record.validate_stake().unwrap();
        let unlock_time = 1_000 + ledger.staking_duration;
        ledger.record_staker(participant, ledger.half_amount()).unwrap();
        record.record_stake(unlock_time);
        assert_eq!(record.unlock_time, Some(87_400));
        assert_eq!(ledger.total_participants_staked, 1);
        assert_eq!(ledger.total_amount_staked, 5_000);
        assert_eq!(ledger.staker_count(), 1);
        assert_eq!(ledger.non_staker_count(), 0);

        // Before the unlock time the payout is refused
        assert!(matches!(
            record.validate_unstake(87_399),
            Err(ClaimStakeLedgerError::CanNotUnstakeNow)
        ));

        // At exactly the unlock time the reserved half pays out
        record.validate_unstake(87_400).unwrap();
        record.record_unstake();
        received += ledger.half_amount();

        // Lifetime receipt equals the configured allocation, never more
        assert_eq!(received, 10_000);
        assert_eq!(received, ledger.airdrop_amount);

        // The totals are cumulative and never decremented by the payout
        assert_eq!(ledger.total_amount_staked, 5_000);

        println!("✅ Scenario complete: lifetime receipt = {}", received);
    }

    #[test]
    fn test_opt_out_joins_non_staking_cohort() {
        let mut ledger = test_ledger();
        let mut record = ParticipantRecord::default();
        let participant = Pubkey::new_unique();

        ledger.grant_eligibility(&[participant]).unwrap();
        record.validate_claim(ledger.is_eligible(&participant)).unwrap();
        record.record_claim(false);
        ledger.record_non_staker(participant);

        assert_eq!(ledger.non_staker_count(), 1);
        assert_eq!(ledger.staker_count(), 0);

        // The opt-out can never enter the staking path
        assert!(matches!(
            record.validate_stake(),
            Err(ClaimStakeLedgerError::DoesNotWantToStake)
        ));
    }

    #[test]
    fn test_ledger_space_fits_allocation_limit() {
        // The three participant lists are reserved at full capacity when the
        // account is created, which must stay within the runtime's
        // per-allocation limit of 10240 bytes
        assert!(
            ClaimStakeLedger::LEN <= 10_240,
            "ledger space {} exceeds the allocation limit",
            ClaimStakeLedger::LEN
        );
    }
}
