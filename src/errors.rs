pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_INVALID_AMOUNT: &str = "ERR_INVALID_AMOUNT";
pub const ERR_INVALID_BENEFICIARY: &str = "ERR_INVALID_BENEFICIARY";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "ERR_PROPOSAL_NOT_FOUND";
pub const ERR_VOTING_CLOSED: &str = "ERR_VOTING_CLOSED";
pub const ERR_VOTING_OPEN: &str = "ERR_VOTING_OPEN";
pub const ERR_DUPLICATE_VOTE: &str = "ERR_DUPLICATE_VOTE";
pub const ERR_INSUFFICIENT_FUNDS: &str = "ERR_INSUFFICIENT_FUNDS";
pub const ERR_INSUFFICIENT_VOTES: &str = "ERR_INSUFFICIENT_VOTES";
pub const ERR_ALREADY_PAID: &str = "ERR_ALREADY_PAID";
pub const ERR_TRANSFER_FAILED: &str = "ERR_TRANSFER_FAILED";
pub const ERR_REENTRANT_CALL: &str = "ERR_REENTRANT_CALL";
