use std::process::ExitCode;

use pwd_rubric::diagnostics::{self_check, SAMPLE_PASSWORD};
use pwd_rubric::StrengthReport;
use secrecy::ExposeSecret;

fn main() -> ExitCode {
    match self_check() {
        Ok(readiness) => {
            println!(
                "evaluate: '{}' -> {} ({}/{})",
                SAMPLE_PASSWORD,
                readiness.sample_strength,
                readiness.sample_score,
                StrengthReport::MAX_SCORE
            );
            let generated = readiness.generated.expose_secret();
            println!(
                "generate: '{}' (length: {})",
                generated,
                generated.chars().count()
            );
            println!("ready");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("self-check failed: {e}");
            ExitCode::FAILURE
        }
    }
}
