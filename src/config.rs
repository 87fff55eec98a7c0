//! Configuração do JoyPath carregada a partir de `joypath.toml`.
//!
//! A struct [`JoyPathConfig`] contém todos os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `GEMINI_API_KEY` tem precedência sobre o arquivo.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuração de nível superior carregada de `joypath.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct JoyPathConfig {
    /// Chave da API Generative Language.
    #[serde(default)]
    pub api_key: String,

    /// Modelo usado para gerar tarefas a partir dos cargos.
    #[serde(default = "default_task_model")]
    pub task_model: String,

    /// Modelo usado para gerar o relatório de carreira.
    #[serde(default = "default_report_model")]
    pub report_model: String,

    /// Máximo de tarefas aceitas do modelo (truncamento defensivo).
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,
}

// Valor padrão para o modelo de tarefas.
fn default_task_model() -> String {
    crate::gateway::DEFAULT_TASK_MODEL.to_string()
}

// Valor padrão para o modelo de relatório.
fn default_report_model() -> String {
    crate::gateway::DEFAULT_REPORT_MODEL.to_string()
}

// Valor padrão para o limite de tarefas: 25.
fn default_max_tasks() -> usize {
    crate::gateway::DEFAULT_MAX_TASKS
}

impl Default for JoyPathConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            task_model: default_task_model(),
            report_model: default_report_model(),
            max_tasks: default_max_tasks(),
        }
    }
}

impl JoyPathConfig {
    /// Carrega a configuração de `joypath.toml` no diretório atual.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("joypath.toml"))
    }

    /// Carrega a configuração de um caminho específico.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<JoyPathConfig>(&contents)?
        } else {
            Self::default()
        };

        // Variável de ambiente tem precedência sobre o arquivo de configuração para a chave API.
        if let Ok(key) = std::env::var("GEMINI_API_KEY")
            && !key.is_empty()
        {
            config.api_key = key;
        }

        Ok(config)
    }
}
