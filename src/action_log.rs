multiversx_sc::imports!();

use crate::types::{ActionKind, ActionRecord, Role};

// ============================================================
// Action Log
// Append-only: one entry per state-changing call, stored and
// emitted as an `action` event.
// ============================================================

#[multiversx_sc::module]
pub trait ActionLogModule {
    fn log_action(
        &self,
        actor: &ManagedAddress,
        role: Role,
        action: ActionKind,
        beneficiary: &ManagedAddress,
        amount: &BigUint,
    ) {
        let record = ActionRecord {
            actor: actor.clone(),
            role,
            action,
            beneficiary: beneficiary.clone(),
            amount: amount.clone(),
            timestamp: self.blockchain().get_block_timestamp(),
        };
        self.actions().push(&record);

        self.action_event(actor, role, action, beneficiary, amount);
    }

    /// Entries at positions `from .. from + count` (0-based, log order).
    #[view(getActions)]
    fn get_actions(&self, from: u64, count: u64) -> MultiValueEncoded<ActionRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.actions().len() as u64;
        let end = core::cmp::min(from.saturating_add(count), total);

        for position in from..end {
            // VecMapper is 1-indexed
            result.push(self.actions().get(position as usize + 1));
        }
        result
    }

    #[view(getActionCount)]
    fn get_action_count(&self) -> u64 {
        self.actions().len() as u64
    }

    #[event("action")]
    fn action_event(
        &self,
        #[indexed] actor: &ManagedAddress,
        #[indexed] role: Role,
        #[indexed] action: ActionKind,
        #[indexed] beneficiary: &ManagedAddress,
        amount: &BigUint,
    );

    #[storage_mapper("actions")]
    fn actions(&self) -> VecMapper<ActionRecord<Self::Api>>;
}
