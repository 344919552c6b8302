//! End-to-end exercise of the negotiation model over the public API,
//! from the messages handed over by the PDU layer
//! to the accepted context set consumed by the data transfer phase.
use dicom_association::pdu::{
    AssociationAC, AssociationRQ, PresentationContextProposed, PresentationContextResult,
    PresentationContextResultReason, UserVariableItem,
};
use dicom_association::{
    validate_ae_title, NegotiationResult, IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME,
};

const VERIFICATION: &str = "1.2.840.10008.1.1";
const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
const IMPLICIT_VR_LE: &str = "1.2.840.10008.1.2";
const EXPLICIT_VR_LE: &str = "1.2.840.10008.1.2.1";

#[test]
fn full_negotiation_round() {
    let calling_ae_title = validate_ae_title("  STORE-SCU ").unwrap();
    let called_ae_title = validate_ae_title("MAIN-STORAGE").unwrap();

    let request = AssociationRQ {
        protocol_version: 1,
        calling_ae_title,
        called_ae_title,
        application_context_name: "1.2.840.10008.3.1.1.1".to_string(),
        presentation_contexts: vec![
            PresentationContextProposed {
                id: 1,
                abstract_syntax: VERIFICATION.to_string(),
                transfer_syntaxes: vec![EXPLICIT_VR_LE.to_string(), IMPLICIT_VR_LE.to_string()],
            },
            PresentationContextProposed {
                id: 3,
                abstract_syntax: CT_IMAGE_STORAGE.to_string(),
                transfer_syntaxes: vec![EXPLICIT_VR_LE.to_string(), IMPLICIT_VR_LE.to_string()],
            },
            PresentationContextProposed {
                id: 5,
                abstract_syntax: MR_IMAGE_STORAGE.to_string(),
                transfer_syntaxes: vec![EXPLICIT_VR_LE.to_string()],
            },
        ],
        user_variables: vec![
            UserVariableItem::MaxLength(16_384),
            UserVariableItem::ImplementationClassUID(IMPLEMENTATION_CLASS_UID.to_string()),
            UserVariableItem::ImplementationVersionName(IMPLEMENTATION_VERSION_NAME.to_string()),
        ],
    };

    // the acceptor answers out of proposal order,
    // takes one context, rejects another,
    // and pads one chosen transfer syntax
    let accept = AssociationAC {
        protocol_version: 1,
        calling_ae_title: request.calling_ae_title.clone(),
        called_ae_title: request.called_ae_title.clone(),
        application_context_name: request.application_context_name.clone(),
        presentation_contexts: vec![
            PresentationContextResult {
                id: 3,
                reason: PresentationContextResultReason::Acceptance,
                transfer_syntax: format!("{}\0", IMPLICIT_VR_LE),
            },
            PresentationContextResult {
                id: 5,
                reason: PresentationContextResultReason::TransferSyntaxesNotSupported,
                transfer_syntax: String::new(),
            },
            PresentationContextResult {
                id: 1,
                reason: PresentationContextResultReason::Acceptance,
                transfer_syntax: EXPLICIT_VR_LE.to_string(),
            },
        ],
        user_variables: vec![UserVariableItem::MaxLength(32_768)],
    };

    let negotiation = NegotiationResult::new(&request, &accept).unwrap();

    assert_eq!(negotiation.max_pdu_local(), Some(16_384));
    assert_eq!(negotiation.max_pdu_peer(), Some(32_768));
    assert_eq!(
        negotiation.application_context_local(),
        Some("1.2.840.10008.3.1.1.1")
    );

    // accepted contexts follow the answer order, not the proposal order
    let accepted = negotiation.accepted_contexts();
    assert_eq!(accepted.len(), 2);

    assert_eq!(accepted[0].id(), 3);
    assert_eq!(accepted[0].abstract_syntax().unwrap().as_str(), CT_IMAGE_STORAGE);
    assert_eq!(accepted[0].transfer_syntaxes().len(), 1);
    assert_eq!(accepted[0].transfer_syntaxes()[0], IMPLICIT_VR_LE);

    assert_eq!(accepted[1].id(), 1);
    assert_eq!(accepted[1].abstract_syntax().unwrap().as_str(), VERIFICATION);
    assert_eq!(accepted[1].transfer_syntaxes()[0], EXPLICIT_VR_LE);

    // the rejection is available for diagnostics
    assert_eq!(
        negotiation.rejected_contexts(),
        &[(
            5,
            PresentationContextResultReason::TransferSyntaxesNotSupported
        )]
    );

    // the diagnostic summary shows every negotiated field
    let summary = accepted[0].to_string();
    assert!(summary.contains("ID: 3"));
    assert!(summary.contains(CT_IMAGE_STORAGE));
    assert!(summary.contains(IMPLICIT_VR_LE));
    assert!(summary.contains("acceptance"));
}
