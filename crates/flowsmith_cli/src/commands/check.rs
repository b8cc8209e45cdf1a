//! Check command - report the environment's capabilities.

use anyhow::Result;
use clap::Args;

use flowsmith_interview::{CapabilityProbe, ProbeId, SystemProbe};

#[derive(Args)]
pub struct CheckArgs {}

pub async fn execute(_args: CheckArgs) -> Result<()> {
    let probe = SystemProbe::new();

    println!("Environment capabilities:");
    for id in ProbeId::ALL {
        let available = probe.check(id).await.unwrap_or(false);
        let mark = if available { "✅" } else { "❌" };
        println!("  {} {}", mark, id.label());
    }

    Ok(())
}
