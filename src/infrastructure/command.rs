use std::process::Command;

use crate::domain::NetError;

/// Exécution synchrone de commandes système.
///
/// Les deux formes du collaborateur : capturer la sortie, ou seulement
/// vérifier le code de retour. Un exit non nul produit toujours
/// `NetError::External`, distinguable par l'appelant.
pub trait CommandRunner {
    /// Lance la commande et capture stdout ; échec si exit non nul.
    fn output(&self, program: &str, args: &[&str]) -> Result<String, NetError>;

    /// Lance la commande et vérifie seulement le code de retour.
    fn run(&self, program: &str, args: &[&str]) -> Result<(), NetError> {
        self.output(program, args).map(|_| ())
    }
}

/// Implémentation de production sur `std::process::Command`.
///
/// Bloquant, sans timeout : une commande qui pend, pend l'appelant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn output(&self, program: &str, args: &[&str]) -> Result<String, NetError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| NetError::External(format!("{program}: {e}")))?;

        if !output.status.success() {
            return Err(NetError::External(format!(
                "{program} exit code: {}",
                output.status
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| NetError::Parse(format!("utf8: {e}")))
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<(), NetError> {
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| NetError::External(format!("{program}: {e}")))?;

        if !status.success() {
            return Err(NetError::External(format!(
                "{program} exit code: {status}"
            )));
        }
        Ok(())
    }
}
