use abstractor::config::JobSpec;
use abstractor::pool::types::WorkUnit;
use abstractor::pool::PoolCoordinator;
use abstractor::report::RankedReport;
use abstractor::scoring::types::Query;
use abstractor::store::fs::FsDocumentStore;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 5 {
        eprintln!(
            "Usage: {} --input <job_file> --output <report_file> [--root <document_dir>]",
            args[0]
        );
        eprintln!(
            "Example: {} --input job.txt --output report.txt --root ./abstracts",
            args[0]
        );

        std::process::exit(1);
    }

    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut document_root = PathBuf::from(".");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                input_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--output" => {
                output_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--root" => {
                document_root = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let input_path = input_path.expect("--input is required");
    let output_path = output_path.expect("--output is required");

    let spec = JobSpec::load(&input_path).await?;
    tracing::info!(
        "Scoring {} documents against {:?} with {} workers, reporting top {}",
        spec.documents.len(),
        spec.query,
        spec.workers,
        spec.top_k
    );

    let store = Arc::new(FsDocumentStore::new(document_root));
    let query = Query::new(&spec.query);
    let units: Vec<WorkUnit> = spec.documents.iter().cloned().map(WorkUnit).collect();

    let pool = PoolCoordinator::new(store, query, units, spec.workers);
    let results = pool.run().await?;

    let report = RankedReport::assemble(&spec.query, &results, spec.top_k);
    report.write_to(&output_path).await?;

    tracing::info!("Report written to {}", output_path.display());

    Ok(())
}
