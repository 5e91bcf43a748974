multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_INVALID_AMOUNT, ERR_TRANSFER_FAILED};

// ============================================================
// Treasury
// Pooled balance: sum of contributions minus paid proposals.
// ============================================================

#[multiversx_sc::module]
pub trait TreasuryModule {
    fn deposit(&self, amount: &BigUint) {
        require!(*amount > 0u64, ERR_INVALID_AMOUNT);
        self.treasury_balance().update(|balance| *balance += amount);
    }

    /// Debits the treasury, then sends `amount` EGLD to `beneficiary`.
    /// Returns the treasury balance after the payout.
    fn disburse(&self, beneficiary: &ManagedAddress, amount: &BigUint) -> BigUint {
        let balance = self.treasury_balance().get();
        require!(balance >= *amount, ERR_INSUFFICIENT_FUNDS);

        // Accounting is settled before any value leaves the contract
        let remaining = &balance - amount;
        self.treasury_balance().set(&remaining);

        self.transfer_egld(beneficiary, amount);
        remaining
    }

    fn transfer_egld(&self, beneficiary: &ManagedAddress, amount: &BigUint) {
        let sc_address = self.blockchain().get_sc_address();
        require!(
            !beneficiary.is_zero() && *beneficiary != sc_address,
            ERR_TRANSFER_FAILED
        );

        let on_chain = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(on_chain >= *amount, ERR_TRANSFER_FAILED);

        self.send().direct_egld(beneficiary, amount);
    }

    #[view(getBalance)]
    fn get_balance(&self) -> BigUint {
        self.treasury_balance().get()
    }

    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;
}
