//! Negotiation reconciliation module
//!
//! This module provides the logic which concludes association negotiation:
//! matching the answers in an association acknowledgement
//! against the locally proposed presentation contexts,
//! yielding the accepted context set
//! and the negotiated maximum PDU lengths
//! which govern the data transfer phase.
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use tracing::{debug, warn};

use crate::association::context::PresentationContext;
use crate::association::uid::SyntaxUid;
use crate::pdu::{
    AssociationAC, AssociationRQ, PresentationContextProposed, PresentationContextResult,
    PresentationContextResultReason, UserVariableItem, MAXIMUM_PDU_SIZE,
};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display(
        "peer answered with unknown presentation context identifier {}",
        id
    ))]
    UnknownContextId { id: u8, backtrace: Backtrace },

    #[snafu(display(
        "no resolvable transfer syntax in accepted presentation context {}",
        id
    ))]
    MissingTransferSyntax { id: u8, backtrace: Backtrace },

    /// could not build accepted presentation context
    InvalidContext {
        #[snafu(backtrace)]
        source: crate::association::context::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Match the peer's presentation context answers
/// against the locally proposed contexts,
/// producing the accepted context set of the association.
///
/// Each accepted answer is resolved into a [`PresentationContext`]
/// carrying the abstract syntax from the matching proposal
/// and the single transfer syntax chosen by the peer,
/// in the order in which the answers were received.
/// Rejected contexts are left out;
/// partial acceptance is normal and not an error.
///
/// An answer referring to an identifier which was never proposed
/// means that the two nodes disagree on the state of the negotiation,
/// and fails with [`Error::UnknownContextId`].
/// An accepted answer without a well formed chosen transfer syntax
/// fails with [`Error::MissingTransferSyntax`].
/// Both conditions are fatal to the negotiation:
/// the caller should release the association rather than retry.
pub fn reconcile_presentation_contexts(
    proposed: &[PresentationContextProposed],
    results: &[PresentationContextResult],
) -> Result<Vec<PresentationContext>> {
    let mut accepted: Vec<PresentationContext> = Vec::with_capacity(results.len());

    for answer in results {
        let proposal = proposed.iter().find(|context| context.id == answer.id);

        if answer.reason != PresentationContextResultReason::Acceptance {
            // an answer for an identifier which was never proposed
            // reveals a non-conformant peer even when it is a rejection
            ensure!(proposal.is_some(), UnknownContextIdSnafu { id: answer.id });
            debug!(
                "presentation context {} not accepted: {}",
                answer.id, answer.reason
            );
            continue;
        }

        let proposal = proposal.context(UnknownContextIdSnafu { id: answer.id })?;

        let transfer_syntax: SyntaxUid = answer
            .transfer_syntax
            .parse()
            .ok()
            .context(MissingTransferSyntaxSnafu { id: answer.id })?;

        // the acknowledgement carries no abstract syntax,
        // recover it from the matching proposal
        let abstract_syntax = proposal.abstract_syntax.parse().ok();

        let mut context = PresentationContext::new(u16::from(answer.id), abstract_syntax)
            .context(InvalidContextSnafu)?;
        context.push_transfer_syntax(transfer_syntax);
        context.set_result(PresentationContextResultReason::Acceptance);

        // tolerate duplicate answers for the same identifier,
        // the last one seen wins
        if let Some(i) = accepted.iter().position(|c| c.id() == answer.id) {
            warn!(
                "duplicate answer for presentation context {}, keeping the last one",
                answer.id
            );
            accepted.remove(i);
        }
        accepted.push(context);
    }

    Ok(accepted)
}

/// The outcome of a completed association negotiation:
/// the accepted presentation contexts
/// and the parameters agreed between the two nodes,
/// reconciled from the association request and acknowledgement messages.
///
/// A value of this type is built once per association attempt
/// and is immutable thereafter.
/// If construction fails,
/// the association should be released rather than retried.
#[derive(Debug)]
pub struct NegotiationResult<'a> {
    /// the association request message, as sent by this node
    request: &'a AssociationRQ,
    /// the association acknowledgement message, as received from the peer
    accept: &'a AssociationAC,
    /// the maximum PDU length that this node is expecting to receive
    max_pdu_local: Option<u32>,
    /// the maximum PDU length that the peer accepts
    max_pdu_peer: Option<u32>,
    /// the application context name requested by this node
    application_context_local: Option<String>,
    /// the accepted presentation contexts, in answer order
    accepted_contexts: Vec<PresentationContext>,
    /// the rejected context identifiers and their reasons, for diagnostics
    rejected_contexts: Vec<(u8, PresentationContextResultReason)>,
}

impl<'a> NegotiationResult<'a> {
    /// Reconcile the two negotiation messages of an association attempt.
    pub fn new(request: &'a AssociationRQ, accept: &'a AssociationAC) -> Result<Self> {
        let accepted_contexts = reconcile_presentation_contexts(
            &request.presentation_contexts,
            &accept.presentation_contexts,
        )?;

        let rejected_contexts = accept
            .presentation_contexts
            .iter()
            .filter(|answer| answer.reason != PresentationContextResultReason::Acceptance)
            .map(|answer| (answer.id, answer.reason.clone()))
            .collect();

        Ok(NegotiationResult {
            max_pdu_local: max_pdu_length(&request.user_variables),
            max_pdu_peer: max_pdu_length(&accept.user_variables),
            application_context_local: Some(request.application_context_name.clone()),
            accepted_contexts,
            rejected_contexts,
            request,
            accept,
        })
    }

    /// The association request message.
    pub fn request(&self) -> &AssociationRQ {
        self.request
    }

    /// The association acknowledgement message.
    pub fn accept(&self) -> &AssociationAC {
        self.accept
    }

    /// The maximum PDU length that this node is expecting to receive,
    /// if one was announced in the request.
    pub fn max_pdu_local(&self) -> Option<u32> {
        self.max_pdu_local
    }

    /// The maximum PDU length that the peer accepts,
    /// if one was announced in the acknowledgement.
    pub fn max_pdu_peer(&self) -> Option<u32> {
        self.max_pdu_peer
    }

    /// The application context name requested by this node.
    pub fn application_context_local(&self) -> Option<&str> {
        self.application_context_local.as_deref()
    }

    /// The accepted presentation contexts,
    /// in the order in which the peer answered.
    ///
    /// Each context carries exactly one transfer syntax,
    /// the one chosen by the peer.
    pub fn accepted_contexts(&self) -> &[PresentationContext] {
        &self.accepted_contexts
    }

    /// The presentation contexts which the peer did not accept,
    /// as pairs of identifier and reason.
    ///
    /// For diagnostic purposes only.
    pub fn rejected_contexts(&self) -> &[(u8, PresentationContextResultReason)] {
        &self.rejected_contexts
    }
}

fn max_pdu_length(user_variables: &[UserVariableItem]) -> Option<u32> {
    user_variables
        .iter()
        .find_map(|item| match item {
            UserVariableItem::MaxLength(len) => Some(*len),
            _ => None,
        })
        // 0 means the maximum size admitted by the standard
        .map(|len| if len == 0 { MAXIMUM_PDU_SIZE } else { len })
}
