use std::io;

use bank_ledger::{demo::Demo, report::LogReporter, telemetry};

#[tokio::main] // SharedAccount locks are async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let stdout = io::stdout().lock();
    let mut demo = Demo::new(stdout, LogReporter::default());
    demo.run().await?;

    Ok(())
}
