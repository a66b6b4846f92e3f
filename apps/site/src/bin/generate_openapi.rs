//! # OpenAPI YAML 生成ツール
//!
//! サイトの JSON API 仕様を YAML 形式で標準出力に出力する。
//!
//! ```bash
//! cargo run --bin generate-openapi -p canvas-site > openapi/openapi.yaml
//! ```

use canvas_site::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let yaml = ApiDoc::openapi().to_yaml()?;
    print!("{yaml}");
    Ok(())
}
