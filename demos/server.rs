//! Run the upload endpoint on 0.0.0.0:8080.
//!
//! ```sh
//! FATTURE_STORE_URL=https://example.supabase.co/rest/v1 \
//! FATTURE_STORE_KEY=... \
//! cargo run --example server --features server
//! ```

use std::sync::Arc;

use fatture::import::Importer;
use fatture::server::router;
use fatture::store::StoreConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let config = StoreConfig::new(
        std::env::var("FATTURE_STORE_URL")?,
        std::env::var("FATTURE_STORE_KEY")?,
    );
    let importer = Arc::new(Importer::new(config)?);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("fatture importer listening on 0.0.0.0:8080");
    axum::serve(listener, router(importer)).await?;
    Ok(())
}
