//! Presentation context model.
//!
//! A presentation context pairs one abstract syntax
//! with one or more candidate transfer syntaxes,
//! under an identifier which is unique within the association.
//! A context proposed by the requester carries all candidate transfer syntaxes,
//! whereas a context accepted by the other node
//! collapses to the single agreed transfer syntax.
use snafu::{ensure, Backtrace, Snafu};
use tracing::debug;

use crate::association::uid::SyntaxUid;
use crate::pdu::PresentationContextResultReason;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display(
        "invalid presentation context identifier {}: must be an odd integer between 1 and 255",
        id
    ))]
    InvalidIdentifier { id: u16, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A single presentation context of an association,
/// either as proposed by this node
/// or as accepted at the end of negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PresentationContext {
    /// the presentation context identifier,
    /// an odd integer between 1 and 255
    id: u8,
    /// the abstract syntax UID,
    /// only absent on the accepting side before matching
    abstract_syntax: Option<SyntaxUid>,
    /// the candidate transfer syntax UIDs, in proposal order
    transfer_syntaxes: Vec<SyntaxUid>,
    /// whether this node takes the SCU role in this context
    scu_role: Option<bool>,
    /// whether this node takes the SCP role in this context
    scp_role: Option<bool>,
    /// the negotiation outcome, unset until the other node has answered
    result: Option<PresentationContextResultReason>,
}

impl PresentationContext {
    /// Create a new presentation context under the given identifier.
    ///
    /// The identifier must be an odd integer between 1 and 255,
    /// any other value fails with [`Error::InvalidIdentifier`].
    pub fn new(id: u16, abstract_syntax: Option<SyntaxUid>) -> Result<Self> {
        ensure!(
            (1..=255).contains(&id) && id % 2 == 1,
            InvalidIdentifierSnafu { id }
        );
        Ok(PresentationContext {
            id: id as u8,
            abstract_syntax,
            transfer_syntaxes: Vec::new(),
            scu_role: None,
            scp_role: None,
            result: None,
        })
    }

    /// The presentation context identifier.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// The abstract syntax UID, if already known.
    pub fn abstract_syntax(&self) -> Option<&SyntaxUid> {
        self.abstract_syntax.as_ref()
    }

    /// The transfer syntax UIDs accumulated so far, in insertion order.
    pub fn transfer_syntaxes(&self) -> &[SyntaxUid] {
        &self.transfer_syntaxes
    }

    /// Whether this node takes the SCU role in this context, if negotiated.
    pub fn scu_role(&self) -> Option<bool> {
        self.scu_role
    }

    /// Whether this node takes the SCP role in this context, if negotiated.
    pub fn scp_role(&self) -> Option<bool> {
        self.scp_role
    }

    /// The outcome of the negotiation for this context,
    /// or `None` if the other node has not answered yet.
    pub fn result(&self) -> Option<&PresentationContextResultReason> {
        self.result.as_ref()
    }

    /// Include this transfer syntax in the candidate list,
    /// in its raw byte or text form.
    ///
    /// The value is normalized into a [`SyntaxUid`] first.
    /// Values which are not well formed UIDs are silently dropped,
    /// so that malformed optional fields from the other node
    /// cannot abort negotiation.
    /// Adding a syntax which is already in the list is a no-op.
    pub fn add_transfer_syntax(&mut self, transfer_syntax: impl AsRef<[u8]>) {
        match SyntaxUid::new(transfer_syntax) {
            Ok(uid) => self.push_transfer_syntax(uid),
            Err(e) => {
                debug!("ignoring transfer syntax in presentation context {}: {}", self.id, e);
            }
        }
    }

    /// Include this already normalized transfer syntax in the candidate list,
    /// unless it is already present.
    pub fn push_transfer_syntax(&mut self, transfer_syntax: SyntaxUid) {
        if !self.transfer_syntaxes.contains(&transfer_syntax) {
            self.transfer_syntaxes.push(transfer_syntax);
        }
    }

    /// Record the role selection negotiated for this context.
    pub fn set_role_selection(&mut self, scu_role: bool, scp_role: bool) {
        self.scu_role = Some(scu_role);
        self.scp_role = Some(scp_role);
    }

    /// Record the negotiation outcome for this context.
    pub fn set_result(&mut self, result: PresentationContextResultReason) {
        self.result = Some(result);
    }
}

/// Multi-line summary of the context for diagnostic purposes.
impl std::fmt::Display for PresentationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        if let Some(abstract_syntax) = &self.abstract_syntax {
            writeln!(f, "Abstract Syntax: {}", abstract_syntax)?;
        }
        writeln!(f, "Transfer Syntax(es):")?;
        for syntax in &self.transfer_syntaxes {
            writeln!(f, "\t={}", syntax)?;
        }
        if let Some(scu_role) = self.scu_role {
            writeln!(f, "SCU Role: {}", scu_role)?;
        }
        if let Some(scp_role) = self.scp_role {
            writeln!(f, "SCP Role: {}", scp_role)?;
        }
        if let Some(result) = &self.result {
            writeln!(f, "Result: {}", result)?;
        }
        Ok(())
    }
}
