use crate::form::FormState;
use download_contract::{looks_like_tiktok_url, DownloadFormat, DownloadResult};

const SUBMIT_LABEL: &str = "ダウンロード";
const LOADING_LABEL: &str = "処理中...";

// Mirrors `looks_like_tiktok_url` so the button state follows typing.
const FORM_SCRIPT: &str = r#"<script>
(function () {
  var form = document.getElementById('download-form');
  var input = document.getElementById('tiktok-url');
  var button = document.getElementById('submit');
  var check = document.getElementById('url-check');
  function refresh() {
    var valid = input.value.indexOf('tiktok.com') !== -1;
    button.disabled = !valid;
    check.hidden = !valid;
  }
  input.addEventListener('input', refresh);
  form.addEventListener('submit', function () {
    button.disabled = true;
    button.textContent = '処理中...';
  });
})();
</script>"#;

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

fn checked(state: &FormState, format: DownloadFormat) -> &'static str {
    if state.format == format {
        " checked"
    } else {
        ""
    }
}

fn render_form(state: &FormState) -> String {
    let url = escape_html(&state.url);
    let check_hidden = if looks_like_tiktok_url(&state.url) {
        ""
    } else {
        " hidden"
    };
    let disabled = if state.can_submit() { "" } else { " disabled" };
    let label = if state.loading {
        LOADING_LABEL
    } else {
        SUBMIT_LABEL
    };
    let mp4_checked = checked(state, DownloadFormat::Mp4);
    let mp3_checked = checked(state, DownloadFormat::Mp3);

    format!(
        r#"<form id="download-form" method="post" action="/form">
  <label for="tiktok-url">TikTok動画のURL</label>
  <input id="tiktok-url" name="url" type="text" value="{url}" placeholder="TikTok動画のURLを貼り付けてください" required>
  <span id="url-check"{check_hidden}>&#10003;</span>
  <fieldset>
    <legend>フォーマット</legend>
    <label><input type="radio" name="format" value="mp4"{mp4_checked}> MP4動画</label>
    <label><input type="radio" name="format" value="mp3"{mp3_checked}> MP3音声</label>
  </fieldset>
  <button id="submit" type="submit"{disabled}>{label}</button>
</form>
"#
    )
}

fn render_error(error: &str) -> String {
    format!(
        "<div class=\"error\" role=\"alert\"><p>{}</p></div>\n",
        escape_html(error)
    )
}

fn render_result(result: &DownloadResult) -> String {
    format!(
        r#"<div class="result">
  <h3>{title}</h3>
  <span class="author">{author}</span>
  <a href="{download_url}" download>今すぐダウンロード</a>
</div>
"#,
        title = escape_html(&result.title),
        author = escape_html(&result.author),
        download_url = escape_html(&result.download_url),
    )
}

/// Renders the whole page for the given form state. At most one of the
/// error message and the result card is present.
pub(crate) fn render_page(state: &FormState) -> String {
    let mut content = render_form(state);
    let script = FORM_SCRIPT;

    if let Some(error) = &state.error {
        content.push_str(&render_error(error));
    } else if let Some(result) = &state.result {
        content.push_str(&render_result(result));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>TikTok動画ダウンローダー</title>
</head>
<body>
<main>
<h1>TikTok動画ダウンローダー</h1>
<p>TikTok動画を簡単・高速にダウンロード</p>
{content}
<footer>
<p>&#9888;&#65039; このツールは個人使用のみを目的としています。本サービスを利用することで、利用規約に同意したものとみなされます。</p>
<p>コンテンツのダウンロードと使用に関する権利を確認してください。</p>
</footer>
</main>
{script}
</body>
</html>
"#
    )
}
