//! Interface de terminal do JoyPath — spinners, prompts e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner exibido enquanto uma chamada ao
//! modelo está em andamento e `console` para estilização com cores e leitura
//! de linhas. O [`WizardScreen`] concentra toda a apresentação dos três
//! passos do assistente.

use std::io;

use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};

use crate::wizard::{CareerReport, Job, Rating, SessionRecord, Step, Task};

/// Spinner exibido enquanto uma requisição ao modelo está em voo.
///
/// Espelha o estado `is_loading` da sessão: inicia quando a transição começa
/// e é limpo quando ela termina, com ou sem sucesso.
pub struct ModelSpinner {
    pb: ProgressBar,
}

impl ModelSpinner {
    /// Inicia o spinner com a mensagem fornecida.
    pub fn start(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb }
    }

    /// Finaliza e remove o spinner do terminal.
    pub fn clear(self) {
        self.pb.finish_and_clear();
    }
}

/// Apresentação de terminal para os três passos do assistente.
pub struct WizardScreen {
    term: Term,
    green: Style,
    red: Style,
    yellow: Style,
    cyan: Style,
    bold: Style,
    dim: Style,
}

impl WizardScreen {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            cyan: Style::new().cyan().bold(),
            bold: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Exibe o indicador de passo atual (ex.: "Step 1/3 · JOB_INPUT").
    pub fn banner(&self, step: Step) {
        println!();
        println!(
            "{}",
            self.cyan.apply_to(format!("── Step {}/3 · {step} ──", step.position()))
        );
    }

    /// Lê uma linha do usuário após exibir o rótulo.
    pub fn prompt(&self, label: &str) -> io::Result<String> {
        print!("{} ", self.bold.apply_to(label));
        io::Write::flush(&mut io::stdout())?;
        self.term.read_line()
    }

    /// Exibe uma mensagem de erro em vermelho.
    pub fn error(&self, message: &str) {
        println!("  {} {message}", self.red.apply_to("✗"));
    }

    /// Exibe uma mensagem de sucesso em verde.
    pub fn success(&self, message: &str) {
        println!("  {} {message}", self.green.apply_to("✓"));
    }

    /// Exibe uma dica discreta.
    pub fn hint(&self, message: &str) {
        println!("  {}", self.dim.apply_to(message));
    }

    /// Lista os cargos adicionados até agora.
    pub fn jobs(&self, jobs: &[Job]) {
        if jobs.is_empty() {
            self.hint("No jobs added yet. Add your first role above.");
            return;
        }
        for (i, job) in jobs.iter().enumerate() {
            println!("  {} {}", self.dim.apply_to(format!("{}.", i + 1)), job.title);
        }
    }

    /// Exibe uma tarefa a ser avaliada, com posição e categoria.
    pub fn task(&self, index: usize, total: usize, task: &Task) {
        println!();
        println!(
            "  {} {}",
            self.dim.apply_to(format!("[{}/{}]", index + 1, total)),
            self.bold.apply_to(&task.description)
        );
        println!("      {}", self.dim.apply_to(&task.category));
    }

    /// Confirma a avaliação registrada.
    pub fn rated(&self, rating: Rating) {
        println!("      {}", self.yellow.apply_to(format!("→ {rating}")));
    }

    /// Exibe o relatório de carreira completo com estilos.
    pub fn report(&self, report: &CareerReport) {
        println!();
        println!("{}", self.green.apply_to("═══ Your Career Report ═══"));
        println!();
        println!(
            "  {} {}",
            self.bold.apply_to("Archetype:"),
            self.cyan.apply_to(&report.archetype.name)
        );
        println!("  {}", report.archetype.description);
        println!(
            "  {} {}",
            self.bold.apply_to("Power move:"),
            report.archetype.power_move
        );
        println!();
        println!(
            "  {} {}",
            self.bold.apply_to("Environment:"),
            report.environment.culture_type
        );
        println!("  Ideal setup: {}", report.environment.ideal_setup);
        for sign in &report.environment.warning_signs {
            println!("  {} {sign}", self.yellow.apply_to("⚠"));
        }
        if !report.top_tasks.is_empty() {
            println!();
            println!("  {}", self.bold.apply_to("Tasks you enjoy most:"));
            for top in &report.top_tasks {
                println!(
                    "    {} {} {}",
                    self.green.apply_to("•"),
                    top.task_description,
                    self.dim.apply_to(format!("({:.0}/5)", top.rating))
                );
            }
        }
        println!();
        println!("  {}", self.bold.apply_to("Recommended roles:"));
        for rec in &report.recommendations {
            println!(
                "    {} {} {}",
                self.green.apply_to("•"),
                self.bold.apply_to(&rec.job_title),
                self.dim.apply_to(format!("({:.0}% fit)", rec.alignment_score))
            );
            println!("      {}", rec.reason);
        }
        println!();
        println!("  {}", report.summary);
    }

    /// Imprime o registro da sessão formatado em JSON.
    pub fn record(&self, record: &SessionRecord) {
        println!();
        println!("{}", self.dim.apply_to("─── Session Record ───"));
        println!(
            "{}",
            serde_json::to_string_pretty(record).unwrap_or_default()
        );
    }
}

impl Default for WizardScreen {
    fn default() -> Self {
        Self::new()
    }
}
