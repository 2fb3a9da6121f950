use crate::state::ParticipantRecord;

/// Builds a record that has claimed with the given preference.
fn claimed_record(wants_stake: bool) -> ParticipantRecord {
    let mut record = ParticipantRecord::default();
    record
        .validate_claim(true)
        .expect("fresh eligible record must be claimable");
    record.record_claim(wants_stake);
    record
}

/// Builds a record that has claimed with the preference on and staked,
/// with the unlock time pinned to the given timestamp.
fn staked_record(unlock_time: i64) -> ParticipantRecord {
    let mut record = claimed_record(true);
    record.validate_stake().expect("claimed record must be stakeable");
    record.record_stake(unlock_time);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClaimStakeLedgerError;
    use crate::state::ParticipantRecord;

    #[test]
    fn test_claim_requires_eligibility() {
        let record = ParticipantRecord::default();

        let result = record.validate_claim(false);
        assert!(
            matches!(result, Err(ClaimStakeLedgerError::NotEligible)),
            "never-granted address must fail with NotEligible, got {:?}",
            result
        );
    }

    #[test]
    fn test_claim_is_exactly_once() {
        let mut record = ParticipantRecord::default();

        record.validate_claim(true).expect("first claim must pass");
        record.record_claim(true);
        assert!(record.claimed);
        assert!(record.wants_stake);

        // Repeat attempts fail regardless of the eligibility flag: once
        // claimed, eligibility is no longer consulted
        assert!(matches!(
            record.validate_claim(true),
            Err(ClaimStakeLedgerError::AlreadyClaimed)
        ));
        assert!(matches!(
            record.validate_claim(false),
            Err(ClaimStakeLedgerError::AlreadyClaimed)
        ));
    }

    #[test]
    fn test_claim_records_preference() {
        let opted_in = claimed_record(true);
        assert!(opted_in.wants_stake);

        let opted_out = claimed_record(false);
        assert!(opted_out.claimed);
        assert!(!opted_out.wants_stake);
    }

    #[test]
    fn test_stake_requires_claim() {
        let record = ParticipantRecord::default();

        assert!(matches!(
            record.validate_stake(),
            Err(ClaimStakeLedgerError::NotClaimed)
        ));
    }

    #[test]
    fn test_stake_requires_preference() {
        let record = claimed_record(false);

        assert!(matches!(
            record.validate_stake(),
            Err(ClaimStakeLedgerError::DoesNotWantToStake)
        ));
    }

    #[test]
    fn test_stake_is_exactly_once() {
        let mut record = claimed_record(true);

        record.validate_stake().expect("first stake must pass");
        record.record_stake(87_400);
        assert!(record.staked);
        assert_eq!(record.unlock_time, Some(87_400));

        assert!(matches!(
            record.validate_stake(),
            Err(ClaimStakeLedgerError::AlreadyStaked)
        ));
    }

    #[test]
    fn test_unstake_requires_stake() {
        let fresh = ParticipantRecord::default();
        assert!(matches!(
            fresh.validate_unstake(i64::MAX),
            Err(ClaimStakeLedgerError::NotStaked)
        ));

        // Claimed but never staked is still NotStaked, however late the call
        let claimed = claimed_record(true);
        assert!(matches!(
            claimed.validate_unstake(i64::MAX),
            Err(ClaimStakeLedgerError::NotStaked)
        ));
    }

    #[test]
    fn test_unstake_lock_boundary() {
        let record = staked_record(87_400);

        // One timestamp before the unlock still fails
        assert!(matches!(
            record.validate_unstake(87_399),
            Err(ClaimStakeLedgerError::CanNotUnstakeNow)
        ));

        // The lock is considered elapsed at exactly the unlock time
        assert!(record.validate_unstake(87_400).is_ok());
        assert!(record.validate_unstake(87_401).is_ok());
    }

    #[test]
    fn test_unstake_is_terminal() {
        let mut record = staked_record(87_400);

        record.validate_unstake(87_400).expect("matured stake must pass");
        record.record_unstake();
        assert!(record.unstaked);

        // Repeating the payout fails
        assert!(matches!(
            record.validate_unstake(i64::MAX),
            Err(ClaimStakeLedgerError::AlreadyUnstaked)
        ));

        // Staking is permanently foreclosed once unstaked
        assert!(matches!(
            record.validate_stake(),
            Err(ClaimStakeLedgerError::AlreadyUnstaked)
        ));
    }

    #[test]
    fn test_unlock_time_is_write_once() {
        let mut record = staked_record(87_400);

        // The unlock time survives the terminal transition untouched
        record.validate_unstake(90_000).expect("matured stake must pass");
        record.record_unstake();
        assert_eq!(record.unlock_time, Some(87_400));
    }

    #[test]
    fn test_lifecycle_is_forward_only() {
        println!("=== Testing full participant lifecycle ===");

        let mut record = ParticipantRecord::default();

        record.validate_claim(true).unwrap();
        record.record_claim(true);

        record.validate_stake().unwrap();
        record.record_stake(87_400);

        record.validate_unstake(87_400).unwrap();
        record.record_unstake();

        // Every flag that was set stays set
        assert!(record.claimed);
        assert!(record.wants_stake);
        assert!(record.staked);
        assert!(record.unstaked);
        assert_eq!(record.unlock_time, Some(87_400));

        // And no operation can run a second time
        assert!(record.validate_claim(true).is_err());
        assert!(record.validate_stake().is_err());
        assert!(record.validate_unstake(i64::MAX).is_err());

        println!("✅ Lifecycle flags are monotonic and operations are exactly-once");
    }
}
