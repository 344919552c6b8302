//! This crate contains the data types and logic needed to negotiate
//! a DICOM association between two application entities.
//!
//! It covers the model side of association establishment:
//! the presentation contexts proposed by a requester,
//! the answers returned by the acceptor,
//! and the reconciliation of the two
//! into the set of contexts which govern all subsequent data exchange.
//! Reading and writing the messages from the wire
//! is left to a protocol data unit (PDU) codec layer,
//! which hands the messages over here in structured form.
//!
//! - The [`pdu`] module
//!   provides data structures representing the association negotiation messages
//!   as they arrive from the PDU layer.
//! - The [`association`] module
//!   comprises the presentation context model
//!   and the negotiation reconciliation logic.
//! - The [`ae_title`] module
//!   provides validation of application entity titles.
//! - The [`dump`] module
//!   provides a byte dump formatter for diagnostic logging.

pub mod ae_title;
pub mod association;
pub mod dump;
pub mod pdu;

/// The current implementation class UID generically referring to DICOM-rs.
///
/// Automatically generated as per the standard, part 5, section B.2.
///
/// This UID may change in future versions,
/// even between patch versions.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.156227610253341005307660858504280353500";

/// The current implementation version name generically referring to DICOM-rs.
///
/// This name may change in future versions,
/// even between patch versions.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DICOM-rs 0.8.0";

// re-exports

pub use ae_title::validate_ae_title;
pub use association::context::PresentationContext;
pub use association::negotiation::{reconcile_presentation_contexts, NegotiationResult};
pub use association::uid::SyntaxUid;
pub use pdu::{AssociationAC, AssociationRQ};
