//! Interface de linha de comando do JoyPath baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (run, demo)
//! e flags globais (--max-tasks, --config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// JoyPath — Assistente de descoberta de carreira guiado por IA.
#[derive(Debug, Parser)]
#[command(name = "joypath", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Máximo de tarefas geradas nesta sessão (sobrepõe a configuração).
    #[arg(long, global = true)]
    pub max_tasks: Option<usize>,

    /// Caminho para um arquivo de configuração alternativo.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Executa o assistente interativo contra o serviço de modelo hospedado.
    Run,

    /// Executa o assistente com um modelo embutido, sem rede.
    Demo,
}
