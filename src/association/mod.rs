//! DICOM association negotiation module
//!
//! This module contains the model side of association negotiation:
//! the [`PresentationContext`] type,
//! which pairs an abstract syntax with its candidate
//! (and eventually agreed) transfer syntaxes,
//! and the reconciliation logic which matches
//! the answers in an association acknowledgement
//! back to the locally proposed contexts,
//! producing the accepted context set of the association
//! (see [`NegotiationResult`]).
pub mod context;
pub mod negotiation;
pub mod uid;

pub use context::PresentationContext;
pub use negotiation::{reconcile_presentation_contexts, NegotiationResult};
pub use uid::SyntaxUid;
