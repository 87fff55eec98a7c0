//! Tipos de dados para requisições e respostas da API Generative Language.
//!
//! Todas as structs derivam `Serialize` e `Deserialize` para conversão JSON
//! conforme o formato esperado pelo endpoint `models/{model}:generateContent`.
//! Os campos seguem a convenção camelCase do wire format via
//! `#[serde(rename_all = "camelCase")]`.

use serde::{Deserialize, Serialize};

/// Corpo da requisição para o endpoint `generateContent`.
///
/// Contém o conteúdo do prompt e a configuração de geração que restringe
/// a resposta a JSON com um schema fixo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conteúdos compondo o prompt (normalmente um único item de usuário).
    pub contents: Vec<Content>,
    /// Configuração de geração; obrigatória aqui porque toda chamada deste
    /// crate exige saída JSON com schema.
    pub generation_config: GenerationConfig,
}

/// Um bloco de conteúdo — uma lista de partes com um papel opcional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Papel do remetente ("user" na requisição, "model" na resposta).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Partes do conteúdo (atualmente apenas texto).
    pub parts: Vec<Part>,
}

/// Uma parte textual de um conteúdo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Configuração de geração: tipo MIME da resposta e schema de saída.
///
/// `response_schema` é um valor JSON livre no formato de schema da API
/// (tipos em maiúsculas: "OBJECT", "ARRAY", "STRING", "NUMBER").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

/// Resposta retornada pelo endpoint `generateContent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidatos gerados (normalmente um).
    pub candidates: Vec<Candidate>,
    /// Estatísticas de uso de tokens, quando presentes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// Um candidato de resposta com seu conteúdo e motivo de parada.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
    /// Motivo da parada da geração (ex.: "STOP", "MAX_TOKENS").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Estatísticas de consumo de tokens para uma chamada à API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentRequest {
    /// Monta uma requisição de usuário único com saída JSON restrita ao
    /// schema fornecido.
    pub fn json_prompt(prompt: String, schema: serde_json::Value) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        }
    }

    /// Texto do prompt do primeiro conteúdo, para inspeção em testes.
    #[allow(dead_code)]
    pub fn prompt_text(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|c| c.parts.first())
            .map(|p| p.text.as_str())
    }
}

impl GenerateContentResponse {
    /// Texto do primeiro candidato, se houver.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}
