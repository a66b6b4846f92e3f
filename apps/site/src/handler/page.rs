//! # 静的ページハンドラ
//!
//! HTML テンプレートから移行した固定内容のページを返す。
//! 各ページは [`PAGES`] テーブルに定義し、ルートもテーブルから登録する。
//!
//! - `GET /` - ホーム（各ページへのリンク一覧）
//! - `GET /intro`, `/intro-1`, `/intro-lazyload` - イントロページ
//! - `GET /intro/` などページパス + 末尾スラッシュ - 正規パスへ 308 リダイレクト
//! - その他 - 404 ページ

use axum::{
    Router,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

/// 静的ページの定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// ルートパス
    pub path:    &'static str,
    /// `<title>` と `<h1>` に使う見出し
    pub heading: &'static str,
    /// 見出し直下のリード文
    pub lead:    &'static str,
    /// 本文 HTML
    pub body:    &'static str,
}

/// ホームへ戻るリンク
const HOME_LINK: &str = r#"<a href="/" class="button">Back to Home</a>"#;

/// サイト名（`<title>` の接尾辞）
const SITE_NAME: &str = "Canvas";

pub const PAGES: &[Page] = &[
    Page {
        path:    "/intro",
        heading: "Intro",
        lead:    "The multi-purpose template, now served as a set of simple pages.",
        body:    r#"<section class="intro">
<p>Build once, reuse everywhere: the layouts from the original template are rendered here as plain pages.</p>
</section>"#,
    },
    Page {
        path:    "/intro-1",
        heading: "Intro 1",
        lead:    "An alternative introduction layout.",
        body:    r#"<section class="intro intro-alt">
<p>This variant keeps the same content with a different arrangement of the hero section.</p>
</section>"#,
    },
    Page {
        path:    "/intro-lazyload",
        heading: "Intro Lazyload",
        lead:    "The introduction layout with images loaded on demand.",
        body:    r#"<section class="intro intro-lazyload">
<p>Images below the fold are only fetched when they scroll into view.</p>
<img src="/images/intro/1.jpg" alt="Intro preview 1" loading="lazy" width="1200" height="800">
<img src="/images/intro/2.jpg" alt="Intro preview 2" loading="lazy" width="1200" height="800">
<img src="/images/intro/3.jpg" alt="Intro preview 3" loading="lazy" width="1200" height="800">
</section>"#,
    },
];

/// パスからページ定義を引く
fn find_page(path: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| page.path == path)
}

/// 末尾スラッシュ付きのページパスなら、リダイレクト先（クエリ付き）を返す
fn canonical_redirect_target(uri: &Uri) -> Option<String> {
    let trimmed = uri.path().strip_suffix('/')?.trim_end_matches('/');
    let page = find_page(trimmed)?;
    Some(match uri.query() {
        Some(query) => format!("{}?{query}", page.path),
        None => page.path.to_string(),
    })
}

/// 共通レイアウトで HTML 文書を組み立てる
fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {SITE_NAME}</title>
</head>
<body>
<main class="container">
{content}
</main>
</body>
</html>
"#
    )
}

/// ページ定義を HTML 文書にレンダリングする
pub fn render_page(page: &Page) -> String {
    let content = format!(
        "<h1>{heading}</h1>\n<p class=\"lead\">{lead}</p>\n{body}\n{HOME_LINK}",
        heading = page.heading,
        lead = page.lead,
        body = page.body,
    );
    layout(page.heading, &content)
}

/// ホームページをレンダリングする
pub fn render_home() -> String {
    let links: String = PAGES
        .iter()
        .map(|page| format!("<li><a href=\"{}\">{}</a></li>\n", page.path, page.heading))
        .collect();
    let content = format!("<h1>{SITE_NAME}</h1>\n<ul class=\"page-list\">\n{links}</ul>");
    layout("Home", &content)
}

/// [`PAGES`] の全ページを GET ルートとして登録したルーターを返す
pub fn page_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    PAGES.iter().fold(Router::new(), |router, page| {
        router.route(page.path, get(move || async move { Html(render_page(page)) }))
    })
}

/// GET /
pub async fn home() -> Html<String> {
    Html(render_home())
}

/// 未定義パスのフォールバック
///
/// ページパスに末尾スラッシュが付いているだけなら正規パスへリダイレクトする。
pub async fn not_found(uri: Uri) -> Response {
    if let Some(target) = canonical_redirect_target(&uri) {
        return Redirect::permanent(&target).into_response();
    }

    let content = format!(
        "<h1>Page Not Found</h1>\n<p class=\"lead\">The page you are looking for does not exist.</p>\n{HOME_LINK}"
    );
    (StatusCode::NOT_FOUND, Html(layout("Page Not Found", &content))).into_response()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[test]
    fn test_ページのパスは重複しない() {
        let paths: HashSet<_> = PAGES.iter().map(|page| page.path).collect();

        assert_eq!(paths.len(), PAGES.len());
    }

    #[rstest]
    #[case("/intro", "Intro")]
    #[case("/intro-1", "Intro 1")]
    #[case("/intro-lazyload", "Intro Lazyload")]
    fn test_render_page_見出しとホームリンクを含む(#[case] path: &str, #[case] heading: &str) {
        let page = find_page(path).unwrap();

        let html = render_page(page);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<h1>{heading}</h1>")));
        assert!(html.contains(&format!("<title>{heading} | Canvas</title>")));
        assert!(html.contains(r#"<a href="/""#));
    }

    #[test]
    fn test_lazyloadページの画像は遅延読み込みになる() {
        let html = render_page(find_page("/intro-lazyload").unwrap());

        let img_count = html.matches("<img ").count();
        assert!(img_count > 0);
        assert_eq!(html.matches(r#"loading="lazy""#).count(), img_count);
    }

    #[test]
    fn test_render_home_全ページへのリンクを含む() {
        let html = render_home();

        for page in PAGES {
            assert!(html.contains(&format!("<a href=\"{}\">", page.path)));
        }
    }

    #[test]
    fn test_find_page_未定義パスはnone() {
        assert!(find_page("/missing").is_none());
        assert!(find_page("/").is_none());
    }

    #[rstest]
    #[case("/intro/", Some("/intro"))]
    #[case("/intro-1//", Some("/intro-1"))]
    #[case("/intro-lazyload/?ref=nav", Some("/intro-lazyload?ref=nav"))]
    #[case("/intro", None)]
    #[case("/missing/", None)]
    #[case("/", None)]
    fn test_canonical_redirect_target_ページパスの末尾スラッシュのみ対象(
        #[case] uri: &str,
        #[case] expected: Option<&str>,
    ) {
        let uri: Uri = uri.parse().unwrap();

        assert_eq!(canonical_redirect_target(&uri).as_deref(), expected);
    }

    #[tokio::test]
    async fn test_not_found_404とホームリンクを返す() {
        let response = not_found(Uri::from_static("/missing")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8(body.to_vec()).unwrap().contains(HOME_LINK));
    }

    #[tokio::test]
    async fn test_not_found_末尾スラッシュ付きページは308でリダイレクトする() {
        let response = not_found(Uri::from_static("/intro/")).await;

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()["location"], "/intro");
    }
}
