//! # OpenAPI 仕様テスト

use canvas_site::openapi::ApiDoc;
use utoipa::OpenApi;

#[test]
fn test_openapi仕様がパニックせず生成される() {
    let yaml = ApiDoc::openapi().to_yaml().unwrap();

    assert!(yaml.contains("Canvas Site API"));
}

#[test]
fn test_全パスが含まれている() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(|k| k.as_str()).collect();

    assert_eq!(paths.len(), 3, "パス数が 3 であること: {paths:?}");
    assert!(paths.contains(&"/health"));
    assert!(paths.contains(&"/api/admin/logout"));
    assert!(paths.contains(&"/include/subscribe"));
}

#[test]
fn test_エンベロープと購読フォームのスキーマが登録されている() {
    let doc = ApiDoc::openapi();
    let components = doc.components.as_ref().expect("components が存在すること");

    assert!(components.schemas.contains_key("ApiResponse"));
    assert!(components.schemas.contains_key("SubscribeForm"));
}

#[test]
fn test_全タグが含まれている() {
    let doc = ApiDoc::openapi();
    let tags: Vec<&str> = doc
        .tags
        .as_ref()
        .expect("tags が存在すること")
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    assert!(tags.contains(&"health"));
    assert!(tags.contains(&"admin"));
    assert!(tags.contains(&"newsletter"));
}
