use quick_xml::Reader;
use quick_xml::events::Event;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::core::{ExtractedInvoice, ImportError};

/// Parse a FatturaPA document into the flat record the importer consumes.
///
/// Extraction is fail-fast: the first missing mandatory field aborts with
/// [`ImportError::MissingField`] instead of accumulating partial data.
/// Mandatory sections are checked first (supplier, then customer), then the
/// party fields, then the document-level fields.
///
/// # Errors
///
/// [`ImportError::MalformedXml`] for non-UTF-8 or unparseable input,
/// [`ImportError::MissingSection`] / [`ImportError::MissingField`] for
/// absent mandatory structure, [`ImportError::InvalidAmount`] when the
/// document total is not a decimal number.
pub fn extract_invoice(bytes: &[u8]) -> Result<ExtractedInvoice, ImportError> {
    let xml = std::str::from_utf8(bytes)
        .map_err(|e| ImportError::MalformedXml(format!("not valid UTF-8: {e}")))?;

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut p = FatturaParsed::default();
    // Path of local names from the root down to the current element; prefix
    // variance never reaches the matching logic below.
    let mut path: Vec<String> = Vec::new();
    let mut saw_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                saw_element = true;
                let name = name_str(e.local_name().as_ref());
                p.note_section(&name);
                path.push(name);
            }
            Ok(Event::Empty(ref e)) => {
                saw_element = true;
                p.note_section(&name_str(e.local_name().as_ref()));
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| ImportError::MalformedXml(err.to_string()))?;
                let text = text.trim();
                // A present-but-empty text node counts as absent.
                if !text.is_empty() {
                    p.handle_text(&path, text);
                }
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ImportError::MalformedXml(e.to_string())),
            _ => {}
        }
    }

    if !saw_element {
        return Err(ImportError::MalformedXml("no root element".into()));
    }

    p.into_record()
}

fn name_str(local: &[u8]) -> String {
    std::str::from_utf8(local).unwrap_or("").to_string()
}

#[derive(Default)]
struct PartyParsed {
    id_paese: Option<String>,
    id_codice: Option<String>,
    denominazione: Option<String>,
}

impl PartyParsed {
    /// VAT number (IdPaese + IdCodice) and display name, or the first
    /// missing mandatory field in document order.
    fn into_party(self, section: &str) -> Result<(String, String), ImportError> {
        let missing = |field: &str| ImportError::MissingField(format!("{section}.{field}"));
        let paese = self.id_paese.ok_or_else(|| missing("IdFiscaleIVA.IdPaese"))?;
        let codice = self.id_codice.ok_or_else(|| missing("IdFiscaleIVA.IdCodice"))?;
        let name = self
            .denominazione
            .ok_or_else(|| missing("Anagrafica.Denominazione"))?;
        Ok((format!("{paese}{codice}"), name))
    }
}

#[derive(Default)]
struct FatturaParsed {
    saw_cedente: bool,
    saw_cessionario: bool,
    cedente: PartyParsed,
    cessionario: PartyParsed,
    numero: Option<String>,
    data: Option<String>,
    importo: Option<String>,
}

impl FatturaParsed {
    fn note_section(&mut self, name: &str) {
        match name {
            "CedentePrestatore" => self.saw_cedente = true,
            "CessionarioCommittente" => self.saw_cessionario = true,
            _ => {}
        }
    }

    fn handle_text(&mut self, path: &[String], text: &str) {
        let Some(leaf) = path.last().map(String::as_str) else {
            return;
        };

        // The party sections can sit at any depth; membership is decided by
        // ancestry, not by absolute position.
        let party = if path.iter().any(|s| s == "CedentePrestatore") {
            Some(&mut self.cedente)
        } else if path.iter().any(|s| s == "CessionarioCommittente") {
            Some(&mut self.cessionario)
        } else {
            None
        };

        if let Some(party) = party {
            let in_fiscale = path.iter().any(|s| s == "IdFiscaleIVA");
            match leaf {
                "IdPaese" if in_fiscale => set_first(&mut party.id_paese, text),
                "IdCodice" if in_fiscale => set_first(&mut party.id_codice, text),
                "Denominazione" if path.iter().any(|s| s == "Anagrafica") => {
                    set_first(&mut party.denominazione, text);
                }
                _ => {}
            }
            return;
        }

        if path.iter().any(|s| s == "DatiGeneraliDocumento") {
            match leaf {
                "Numero" => set_first(&mut self.numero, text),
                "Data" => set_first(&mut self.data, text),
                "ImportoTotaleDocumento" => set_first(&mut self.importo, text),
                _ => {}
            }
        }
    }

    fn into_record(self) -> Result<ExtractedInvoice, ImportError> {
        if !self.saw_cedente {
            return Err(ImportError::MissingSection("CedentePrestatore".into()));
        }
        if !self.saw_cessionario {
            return Err(ImportError::MissingSection("CessionarioCommittente".into()));
        }

        let (supplier_vat, supplier_name) = self.cedente.into_party("CedentePrestatore")?;
        let (customer_vat, customer_name) = self.cessionario.into_party("CessionarioCommittente")?;

        let missing = |field: &str| ImportError::MissingField(format!("DatiGeneraliDocumento.{field}"));
        let number = self.numero.ok_or_else(|| missing("Numero"))?;
        let issue_date = self.data.ok_or_else(|| missing("Data"))?;
        let raw_total = self.importo.ok_or_else(|| missing("ImportoTotaleDocumento"))?;
        let total = Decimal::from_str(raw_total.trim())
            .map_err(|_| ImportError::InvalidAmount(raw_total.clone()))?;

        Ok(ExtractedInvoice {
            supplier_vat,
            supplier_name,
            customer_vat,
            customer_name,
            number,
            issue_date,
            total,
        })
    }
}

/// Multi-body documents carry several DatiGeneraliDocumento blocks; the
/// first occurrence of each field wins.
fn set_first(slot: &mut Option<String>, text: &str) {
    if slot.is_none() {
        *slot = Some(text.to_string());
    }
}
