pub mod test_ledger;
pub mod test_participant;
