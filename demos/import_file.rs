//! Import one FatturaPA XML file from disk.
//!
//! ```sh
//! FATTURE_STORE_URL=https://example.supabase.co/rest/v1 \
//! FATTURE_STORE_KEY=... \
//! cargo run --example import_file -- fattura.xml
//! ```

use fatture::import::Importer;
use fatture::store::StoreConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: import_file <file.xml>")?;
    let config = StoreConfig::new(
        std::env::var("FATTURE_STORE_URL")?,
        std::env::var("FATTURE_STORE_KEY")?,
    );

    let bytes = std::fs::read(&path)?;
    let filename = std::path::Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.xml");

    let importer = Importer::new(config)?;
    match importer.import(filename, &bytes).await {
        Ok(report) => println!("{}: {}", report.status, report.message),
        Err(err) => {
            eprintln!("errore: {err}");
            std::process::exit(1);
        }
    }
    Ok(())
}
