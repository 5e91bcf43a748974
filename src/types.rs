multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Before the deadline. Stakeholders can vote up/down.
    Open,
    /// Deadline passed. No further votes; payout still possible if up > down.
    Expired,
    /// Funds sent to the beneficiary. Terminal state.
    Paid,
}

// ============================================================
// Proposal — a funding request with a bounded voting window
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub proposer: ManagedAddress<M>,
    pub beneficiary: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub upvotes: u64,
    pub downvotes: u64,
    pub status: ProposalStatus,
    pub created_at: u64,
    /// Block timestamp at which the voting window closes (exclusive)
    pub deadline: u64,
    /// Stakeholder who triggered the payout (zero address until paid)
    pub executor: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_paid(&self) -> bool {
        self.status == ProposalStatus::Paid
    }

    pub fn is_voting_open(&self, now: u64) -> bool {
        self.status == ProposalStatus::Open && now < self.deadline
    }

    /// Status as seen at `now`: a stored `Open` proposal past its deadline
    /// reports as `Expired` even if nobody persisted the transition.
    pub fn effective_status(&self, now: u64) -> ProposalStatus {
        match self.status {
            ProposalStatus::Open if now >= self.deadline => ProposalStatus::Expired,
            status => status,
        }
    }

    pub fn has_majority(&self) -> bool {
        self.upvotes > self.downvotes
    }
}

// ============================================================
// Vote Record — one per (voter, proposal), immutable
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteChoice {
    Up,
    Down,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub timestamp: u64,
    pub choice: VoteChoice,
}

// ============================================================
// Action Log entries
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Role {
    Contributor,
    Stakeholder,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ActionKind {
    ContributionReceived,
    ProposalRaised,
    ProposalVote,
    VotingClosed,
    PaymentTransferred,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ActionRecord<M: ManagedTypeApi> {
    pub actor: ManagedAddress<M>,
    pub role: Role,
    pub action: ActionKind,
    pub beneficiary: ManagedAddress<M>,
    pub amount: BigUint<M>,
    pub timestamp: u64,
}
