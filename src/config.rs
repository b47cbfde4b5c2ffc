//! Fixed texts and styling of the proposal, overridable from JSON.
//!
//! Every field has a default, so `{}` is a valid configuration and yields the
//! stock proposal.

use crate::error::PipelineError;
use chrono::Datelike;
use quotegen_types::{Color, QuoteDocument};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SENDER_CONTACT: &str = "DEPARTAMENTO TÉCNICO
Email: delzioav@yahoo.com.br
Tel: (31) 98229.9162

DELZIO DE AVELAR - COMERCIAL
Email: delzioseda@gmail.com
Fone: 31-98229.9162";

const INTRO_TEXT: &str = "Honrados pela oportunidade de apresentarmos nossos serviços, vimos por esta apresentar-lhes a
nossa Proposta Técnica para o fornecimento em questão.

Antecipadamente agradecemos e colocamo-nos ao seu dispor para quaisquer esclarecimentos
adicionais.";

const CLOSING_TEXT: &str = "Desde já, agradecemos o seu contato e permanecemos à disposição para maiores
informações. Cordialmente,";

/// Letterhead drawn under every page unless the configuration sets `null`.
pub const DEFAULT_BACKGROUND: &str = "fundo.jpg";

const EXCLUSIONS: [&str; 8] = [
    "Fornecimento de água potável no local da obra.",
    "Fornecimento de energia elétrica no local da obra.",
    "Instalações sanitárias no local da obra.",
    "Local para armazenamento de materiais e ferramentas.",
    "Qualquer outra atividade e materiais não incluída no objeto da proposta.",
    "Obras externas Cemig (Ramal de ligação, religador, extensão de rede, etc)",
    "Fornecimento de gerador",
    "Transporte do equipamento",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteConfig {
    /// Top-left block of the information grid.
    pub sender_contact: String,
    pub validity_days: u32,
    pub proposal_title: String,
    /// Used for the default proposal number `NNNNN/YYYY`.
    pub proposal_sequence: u32,
    pub intro_text: String,
    pub object_heading: String,
    pub exclusions_heading: String,
    pub exclusions: Vec<String>,
    pub payment_terms: String,
    pub closing_text: String,
    pub signatory_name: String,
    pub signatory_id: String,
    /// Resource path of a full-page image drawn beneath every page. `null` in
    /// JSON turns the background off.
    pub background_image: Option<String>,
    pub table_fill: Color,
    pub draw_color: Color,
    pub compress: bool,
    /// Document title stored in the PDF metadata.
    pub title: String,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            sender_contact: SENDER_CONTACT.to_string(),
            validity_days: 10,
            proposal_title: "PROPOSTA TÉCNICA E COMERCIAL".to_string(),
            proposal_sequence: 109,
            intro_text: INTRO_TEXT.to_string(),
            object_heading: "1. OBJETO DA PROPOSTA:".to_string(),
            exclusions_heading:
                "Consideramos fora do nosso escopo de fornecimento os seguintes itens:".to_string(),
            exclusions: EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            payment_terms: "Na entrega do serviço".to_string(),
            closing_text: CLOSING_TEXT.to_string(),
            signatory_name: "Délzio de Avelar".to_string(),
            signatory_id: "12.045.144/0001-43".to_string(),
            background_image: Some(DEFAULT_BACKGROUND.to_string()),
            table_fill: Color::gray(200),
            draw_color: Color::gray(150),
            compress: true,
            title: "Proposta Técnica e Comercial".to_string(),
        }
    }
}

impl QuoteConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PipelineError> {
        let config: QuoteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read configuration from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&source)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.validity_days == 0 {
            return Err(PipelineError::Config(
                "validityDays must be at least 1".to_string(),
            ));
        }
        if self.background_image.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(PipelineError::Config(
                "backgroundImage must not be an empty path".to_string(),
            ));
        }
        Ok(())
    }

    /// The document's own number, or `{sequence:05}/{issue year}`.
    pub fn proposal_number(&self, document: &QuoteDocument) -> String {
        if document.proposal_number.trim().is_empty() {
            format!("{:05}/{}", self.proposal_sequence, document.issue_date.year())
        } else {
            document.proposal_number.clone()
        }
    }
}
