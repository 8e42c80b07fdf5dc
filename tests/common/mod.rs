//! Document builders shared by the integration tests.

#![allow(dead_code)]

pub const FATTURAPA_NS: &str =
    "http://ivaservizi.agenziaentrate.gov.it/docs/xsd/fatture/v1.2";

#[derive(Clone)]
pub struct Party {
    pub paese: Option<String>,
    pub codice: Option<String>,
    pub denominazione: Option<String>,
}

impl Party {
    pub fn new(paese: &str, codice: &str, denominazione: &str) -> Self {
        Self {
            paese: Some(paese.into()),
            codice: Some(codice.into()),
            denominazione: Some(denominazione.into()),
        }
    }

    fn render(&self, section: &str) -> String {
        let mut fiscale = String::new();
        if let Some(p) = &self.paese {
            fiscale.push_str(&format!("<IdPaese>{p}</IdPaese>"));
        }
        if let Some(c) = &self.codice {
            fiscale.push_str(&format!("<IdCodice>{c}</IdCodice>"));
        }
        let anagrafica = match &self.denominazione {
            Some(d) => format!("<Anagrafica><Denominazione>{d}</Denominazione></Anagrafica>"),
            None => String::new(),
        };
        format!(
            "<{section}><DatiAnagrafici><IdFiscaleIVA>{fiscale}</IdFiscaleIVA>{anagrafica}</DatiAnagrafici></{section}>"
        )
    }
}

/// A synthetic FatturaPA document. Defaults match the reference scenario:
/// supplier IT12345678901, customer IT98765432109, number 2024/001,
/// total 150.00.
#[derive(Clone)]
pub struct Doc {
    pub namespaced: bool,
    pub supplier: Option<Party>,
    pub customer: Option<Party>,
    pub numero: Option<String>,
    pub data: Option<String>,
    pub importo: Option<String>,
}

impl Default for Doc {
    fn default() -> Self {
        Self {
            namespaced: true,
            supplier: Some(Party::new("IT", "12345678901", "Rossi S.r.l.")),
            customer: Some(Party::new("IT", "98765432109", "Bianchi S.p.A.")),
            numero: Some("2024/001".into()),
            data: Some("2024-03-15".into()),
            importo: Some("150.00".into()),
        }
    }
}

impl Doc {
    pub fn render(&self) -> String {
        let mut header = String::new();
        if let Some(s) = &self.supplier {
            header.push_str(&s.render("CedentePrestatore"));
        }
        if let Some(c) = &self.customer {
            header.push_str(&c.render("CessionarioCommittente"));
        }

        let mut documento = String::new();
        if let Some(n) = &self.numero {
            documento.push_str(&format!("<Numero>{n}</Numero>"));
        }
        if let Some(d) = &self.data {
            documento.push_str(&format!("<Data>{d}</Data>"));
        }
        if let Some(i) = &self.importo {
            documento.push_str(&format!(
                "<ImportoTotaleDocumento>{i}</ImportoTotaleDocumento>"
            ));
        }

        let body = format!(
            "<FatturaElettronicaBody><DatiGenerali><DatiGeneraliDocumento>{documento}</DatiGeneraliDocumento></DatiGenerali></FatturaElettronicaBody>"
        );

        if self.namespaced {
            format!(
                "<?xml version=\"1.0\"?><p:FatturaElettronica xmlns:p=\"{FATTURAPA_NS}\"><FatturaElettronicaHeader>{header}</FatturaElettronicaHeader>{body}</p:FatturaElettronica>"
            )
        } else {
            format!(
                "<?xml version=\"1.0\"?><FatturaElettronica><FatturaElettronicaHeader>{header}</FatturaElettronicaHeader>{body}</FatturaElettronica>"
            )
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.render().into_bytes()
    }
}
