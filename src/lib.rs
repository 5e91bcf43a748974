#![no_std]

multiversx_sc::imports!();

pub mod action_log;
pub mod errors;
pub mod guard;
pub mod roles;
pub mod treasury;
pub mod types;

use errors::{
    ERR_ALREADY_PAID, ERR_DUPLICATE_VOTE, ERR_INSUFFICIENT_FUNDS, ERR_INSUFFICIENT_VOTES,
    ERR_INVALID_AMOUNT, ERR_INVALID_BENEFICIARY, ERR_PROPOSAL_NOT_FOUND, ERR_VOTING_CLOSED,
    ERR_VOTING_OPEN,
};
use types::{ActionKind, Proposal, ProposalStatus, Role, VoteChoice, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Voting window: 10 minutes in seconds
pub const VOTING_PERIOD: u64 = 600;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait MembershipDao:
    roles::RolesModule
    + treasury::TreasuryModule
    + guard::GuardModule
    + action_log::ActionLogModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, stakeholder_threshold: BigUint) {
        require!(stakeholder_threshold > 0u64, ERR_INVALID_AMOUNT);

        self.stakeholder_threshold().set(&stakeholder_threshold);
        self.treasury_balance().set(BigUint::zero());
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: contribute
    // Any positive EGLD deposit makes the caller a contributor;
    // reaching the threshold makes it a stakeholder.
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        let role = self.record_contribution(&caller, &amount);
        self.deposit(&amount);

        let sc_address = self.blockchain().get_sc_address();
        self.log_action(
            &caller,
            role,
            ActionKind::ContributionReceived,
            &sc_address,
            &amount,
        );
    }

    // ========================================================
    // ENDPOINT: createProposal
    // Stakeholders only. The amount is a request; nothing is escrowed.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        beneficiary: ManagedAddress,
        amount: BigUint,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Stakeholder);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        require!(!beneficiary.is_zero(), ERR_INVALID_BENEFICIARY);

        let proposal_id = self.proposal_count().get();
        let now = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            title,
            description,
            proposer: caller.clone(),
            beneficiary,
            amount,
            upvotes: 0,
            downvotes: 0,
            status: ProposalStatus::Open,
            created_at: now,
            deadline: now + VOTING_PERIOD,
            executor: ManagedAddress::zero(),
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.log_action(
            &caller,
            Role::Stakeholder,
            ActionKind::ProposalRaised,
            &proposal.beneficiary,
            &proposal.amount,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per stakeholder per proposal, before the deadline.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, choice: VoteChoice) -> VoteRecord<Self::Api> {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Stakeholder);

        let mut proposal = self.require_proposal(proposal_id);
        let now = self.blockchain().get_block_timestamp();

        require!(proposal.is_voting_open(now), ERR_VOTING_CLOSED);
        require!(
            !self.has_voted(proposal_id, &caller).get(),
            ERR_DUPLICATE_VOTE
        );

        match choice {
            VoteChoice::Up => proposal.upvotes += 1,
            VoteChoice::Down => proposal.downvotes += 1,
        }

        let record = VoteRecord {
            voter: caller.clone(),
            timestamp: now,
            choice,
        };
        self.vote_records(proposal_id).push(&record);
        self.has_voted(proposal_id, &caller).set(true);
        self.stakeholder_votes(&caller).push(&proposal_id);
        self.proposals(proposal_id).set(&proposal);

        self.log_action(
            &caller,
            Role::Stakeholder,
            ActionKind::ProposalVote,
            &proposal.beneficiary,
            &proposal.amount,
        );

        record
    }

    // ========================================================
    // ENDPOINT: payBeneficiary
    // Allowed as soon as upvotes > downvotes, deadline or not.
    // ========================================================

    #[endpoint(payBeneficiary)]
    fn pay_beneficiary(&self, proposal_id: u64) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Stakeholder);

        self.non_reentrant(|| {
            let mut proposal = self.require_proposal(proposal_id);

            require!(
                self.treasury_balance().get() >= proposal.amount,
                ERR_INSUFFICIENT_FUNDS
            );
            require!(!proposal.is_paid(), ERR_ALREADY_PAID);
            require!(proposal.has_majority(), ERR_INSUFFICIENT_VOTES);

            proposal.status = ProposalStatus::Paid;
            proposal.executor = caller.clone();
            self.proposals(proposal_id).set(&proposal);

            let balance = self.disburse(&proposal.beneficiary, &proposal.amount);

            self.log_action(
                &caller,
                Role::Stakeholder,
                ActionKind::PaymentTransferred,
                &proposal.beneficiary,
                &proposal.amount,
            );

            balance
        })
    }

    // ========================================================
    // ENDPOINT: closeVoting
    // Any member can persist Open -> Expired once the deadline passed.
    // ========================================================

    #[endpoint(closeVoting)]
    fn close_voting(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Contributor);

        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.status == ProposalStatus::Open, ERR_VOTING_CLOSED);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.deadline, ERR_VOTING_OPEN);

        proposal.status = ProposalStatus::Expired;
        self.proposals(proposal_id).set(&proposal);

        self.log_action(
            &caller,
            self.member_role(&caller),
            ActionKind::VotingClosed,
            &proposal.beneficiary,
            &proposal.amount,
        );
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(proposal_id).get()
    }

    fn proposal_as_of(&self, proposal_id: u64, now: u64) -> Proposal<Self::Api> {
        let mut proposal = self.proposals(proposal_id).get();
        proposal.status = proposal.effective_status(now);
        proposal
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposals)]
    fn get_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();

        for id in 0..self.proposal_count().get() {
            result.push(self.proposal_as_of(id, now));
        }
        result
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposal_as_of(proposal_id, self.blockchain().get_block_timestamp())
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();

        for id in 0..self.proposal_count().get() {
            let proposal = self.proposals(id).get();
            if proposal.is_voting_open(now) {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(getVotesOf)]
    fn get_votes_of(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(proposal_id).iter() {
            result.push(record);
        }
        result
    }

    #[view(getStakeholderVotes)]
    fn get_stakeholder_votes(&self) -> MultiValueEncoded<u64> {
        let caller = self.blockchain().get_caller();
        self.require_role(&caller, Role::Stakeholder);

        let mut result = MultiValueEncoded::new();
        for proposal_id in self.stakeholder_votes(&caller).iter() {
            result.push(proposal_id);
        }
        result
    }

    #[view(hasVoted)]
    fn has_stakeholder_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> bool {
        self.has_voted(proposal_id, voter).get()
    }

    #[view(getDaoStats)]
    fn get_dao_stats(&self) -> MultiValue4<BigUint, u64, u64, u64> {
        let balance = self.treasury_balance().get();
        let contributor_count = self.contributors().len() as u64;
        let stakeholder_count = self.stakeholders().len() as u64;
        let proposal_count = self.proposal_count().get();
        (balance, contributor_count, stakeholder_count, proposal_count).into()
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue2<BigUint, u64> {
        (self.stakeholder_threshold().get(), VOTING_PERIOD).into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Per-stakeholder list of voted proposal ids ──

    #[storage_mapper("stakeholderVotes")]
    fn stakeholder_votes(&self, voter: &ManagedAddress) -> VecMapper<u64>;
}
