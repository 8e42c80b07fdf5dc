mod common;

use common::{Doc, Party};
use fatture::ImportError;
use fatture::extract::extract_invoice;
use rust_decimal_macros::dec;

fn err_of(doc: &Doc) -> ImportError {
    extract_invoice(doc.render().as_bytes()).unwrap_err()
}

// --- Happy path ---

#[test]
fn extracts_all_fields() {
    let doc = extract_invoice(Doc::default().render().as_bytes()).unwrap();
    assert_eq!(doc.supplier_vat, "IT12345678901");
    assert_eq!(doc.supplier_name, "Rossi S.r.l.");
    assert_eq!(doc.customer_vat, "IT98765432109");
    assert_eq!(doc.customer_name, "Bianchi S.p.A.");
    assert_eq!(doc.number, "2024/001");
    assert_eq!(doc.issue_date, "2024-03-15");
    assert_eq!(doc.total, dec!(150.00));
}

#[test]
fn namespaced_and_bare_documents_extract_identically() {
    let namespaced = Doc::default();
    let bare = Doc {
        namespaced: false,
        ..Doc::default()
    };
    let a = extract_invoice(namespaced.render().as_bytes()).unwrap();
    let b = extract_invoice(bare.render().as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn issue_date_is_kept_as_opaque_text() {
    let doc = Doc {
        data: Some("15/03/2024".into()),
        ..Doc::default()
    };
    let record = extract_invoice(doc.render().as_bytes()).unwrap();
    assert_eq!(record.issue_date, "15/03/2024");
}

#[test]
fn amount_text_is_trimmed_before_parsing() {
    let doc = Doc {
        importo: Some("  1234.56 ".into()),
        ..Doc::default()
    };
    // Builder whitespace survives into the text node; the extractor trims it.
    let record = extract_invoice(doc.render().as_bytes()).unwrap();
    assert_eq!(record.total, dec!(1234.56));
}

#[test]
fn first_document_block_wins_in_multi_body_files() {
    let mut xml = Doc::default().render();
    let second_body = "<FatturaElettronicaBody><DatiGenerali><DatiGeneraliDocumento><Numero>2024/002</Numero><Data>2024-04-01</Data><ImportoTotaleDocumento>99.00</ImportoTotaleDocumento></DatiGeneraliDocumento></DatiGenerali></FatturaElettronicaBody>";
    xml = xml.replace(
        "</p:FatturaElettronica>",
        &format!("{second_body}</p:FatturaElettronica>"),
    );
    let record = extract_invoice(xml.as_bytes()).unwrap();
    assert_eq!(record.number, "2024/001");
    assert_eq!(record.total, dec!(150.00));
}

#[test]
fn party_sections_are_found_at_any_depth() {
    let doc = Doc::default().render();
    let wrapped = doc
        .replace(
            "<FatturaElettronicaHeader>",
            "<FatturaElettronicaHeader><Wrapper>",
        )
        .replace(
            "</FatturaElettronicaHeader>",
            "</Wrapper></FatturaElettronicaHeader>",
        );
    let record = extract_invoice(wrapped.as_bytes()).unwrap();
    assert_eq!(record.supplier_vat, "IT12345678901");
}

// --- Missing sections ---

#[test]
fn missing_supplier_section_fails_fast() {
    let doc = Doc {
        supplier: None,
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(matches!(err, ImportError::MissingSection(s) if s == "CedentePrestatore"));
}

#[test]
fn missing_customer_section_fails_fast() {
    let doc = Doc {
        customer: None,
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(matches!(err, ImportError::MissingSection(s) if s == "CessionarioCommittente"));
}

#[test]
fn supplier_section_is_checked_before_customer_section() {
    let doc = Doc {
        supplier: None,
        customer: None,
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(matches!(err, ImportError::MissingSection(s) if s == "CedentePrestatore"));
}

// --- Missing fields ---

#[test]
fn missing_supplier_vat_code() {
    let doc = Doc {
        supplier: Some(Party {
            codice: None,
            ..Party::new("IT", "", "Rossi S.r.l.")
        }),
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(
        matches!(err, ImportError::MissingField(f) if f == "CedentePrestatore.IdFiscaleIVA.IdCodice")
    );
}

#[test]
fn empty_denominazione_counts_as_absent() {
    let doc = Doc {
        supplier: Some(Party::new("IT", "12345678901", "")),
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(
        matches!(err, ImportError::MissingField(f) if f == "CedentePrestatore.Anagrafica.Denominazione")
    );
}

#[test]
fn whitespace_only_text_counts_as_absent() {
    let doc = Doc {
        numero: Some("   ".into()),
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(matches!(err, ImportError::MissingField(f) if f == "DatiGeneraliDocumento.Numero"));
}

#[test]
fn supplier_fields_are_checked_before_customer_fields() {
    let doc = Doc {
        supplier: Some(Party::new("IT", "12345678901", "")),
        customer: Some(Party {
            codice: None,
            ..Party::new("IT", "", "Bianchi S.p.A.")
        }),
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(matches!(err, ImportError::MissingField(f) if f.starts_with("CedentePrestatore")));
}

#[test]
fn missing_issue_date() {
    let doc = Doc {
        data: None,
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(matches!(err, ImportError::MissingField(f) if f == "DatiGeneraliDocumento.Data"));
}

#[test]
fn missing_total_amount() {
    let doc = Doc {
        importo: None,
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(
        matches!(err, ImportError::MissingField(f) if f == "DatiGeneraliDocumento.ImportoTotaleDocumento")
    );
}

// --- Invalid input ---

#[test]
fn non_numeric_total_is_invalid_amount() {
    let doc = Doc {
        importo: Some("abc".into()),
        ..Doc::default()
    };
    let err = err_of(&doc);
    assert!(matches!(err, ImportError::InvalidAmount(raw) if raw == "abc"));
}

#[test]
fn non_utf8_input_is_malformed() {
    let err = extract_invoice(&[0xff, 0xfe, 0x00]).unwrap_err();
    assert!(matches!(err, ImportError::MalformedXml(_)));
}

#[test]
fn plain_text_is_malformed() {
    let err = extract_invoice(b"questo non e' XML").unwrap_err();
    assert!(matches!(err, ImportError::MalformedXml(_)));
}

#[test]
fn mismatched_tags_are_malformed() {
    let err = extract_invoice(b"<FatturaElettronica><Numero></FatturaElettronica>").unwrap_err();
    assert!(matches!(err, ImportError::MalformedXml(_)));
}

#[test]
fn unknown_entity_is_malformed() {
    let err =
        extract_invoice(b"<FatturaElettronica><Numero>&nope;</Numero></FatturaElettronica>")
            .unwrap_err();
    assert!(matches!(err, ImportError::MalformedXml(_)));
}
