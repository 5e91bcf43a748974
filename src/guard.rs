multiversx_sc::imports!();

use crate::errors::ERR_REENTRANT_CALL;

#[multiversx_sc::module]
pub trait GuardModule {
    /// Runs `body` with the payout marker held. A nested entry fails
    /// immediately; a failing body reverts the marker along with the
    /// rest of the transaction.
    fn non_reentrant<R, F: FnOnce() -> R>(&self, body: F) -> R {
        require!(!self.payout_in_progress().get(), ERR_REENTRANT_CALL);
        self.payout_in_progress().set(true);

        let result = body();

        self.payout_in_progress().clear();
        result
    }

    #[storage_mapper("payoutInProgress")]
    fn payout_in_progress(&self) -> SingleValueMapper<bool>;
}
