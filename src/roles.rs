multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_AMOUNT, ERR_UNAUTHORIZED};
use crate::types::Role;

// ============================================================
// Role Registry
// Contributor on any positive deposit, stakeholder once the
// cumulative deposit reaches the threshold. Roles are never revoked.
// ============================================================

#[multiversx_sc::module]
pub trait RolesModule {
    /// Credits `amount` to the contributor and returns the role it holds afterwards.
    fn record_contribution(&self, contributor: &ManagedAddress, amount: &BigUint) -> Role {
        require!(*amount > 0u64, ERR_INVALID_AMOUNT);

        if self.stakeholders().contains(contributor) {
            self.contributor_balance(contributor).update(|b| *b += amount);
            self.stakeholder_balance(contributor).update(|b| *b += amount);
            return Role::Stakeholder;
        }

        let total = self.contributor_balance(contributor).update(|b| {
            *b += amount;
            b.clone()
        });
        self.contributors().insert(contributor.clone());

        if total >= self.stakeholder_threshold().get() {
            self.stakeholder_balance(contributor).set(&total);
            self.stakeholders().insert(contributor.clone());
            return Role::Stakeholder;
        }

        Role::Contributor
    }

    fn has_role(&self, address: &ManagedAddress, role: Role) -> bool {
        match role {
            Role::Contributor => self.contributors().contains(address),
            Role::Stakeholder => self.stakeholders().contains(address),
        }
    }

    fn require_role(&self, address: &ManagedAddress, role: Role) {
        require!(self.has_role(address, role), ERR_UNAUTHORIZED);
    }

    /// Highest role held by a member.
    fn member_role(&self, address: &ManagedAddress) -> Role {
        if self.stakeholders().contains(address) {
            Role::Stakeholder
        } else {
            Role::Contributor
        }
    }

    // ========================================================
    // VIEWS — scoped to the caller
    // ========================================================

    #[view(isStakeholder)]
    fn is_stakeholder(&self) -> bool {
        let caller = self.blockchain().get_caller();
        self.stakeholders().contains(&caller)
    }

    #[view(isContributor)]
    fn is_contributor(&self) -> bool {
        let caller = self.blockchain().get_caller();
        self.contributors().contains(&caller)
    }

    #[view(getStakeholderBalance)]
    fn get_stakeholder_balance(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Stakeholder);
        self.stakeholder_balance(&caller).get()
    }

    #[view(getContributorBalance)]
    fn get_contributor_balance(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Contributor);
        self.contributor_balance(&caller).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("stakeholderThreshold")]
    fn stakeholder_threshold(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("contributors")]
    fn contributors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("stakeholders")]
    fn stakeholders(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("contributorBalance")]
    fn contributor_balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stakeholderBalance")]
    fn stakeholder_balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
