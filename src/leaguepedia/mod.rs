pub(crate) mod schedule;

use ::scraper::Html;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::USER_AGENT;
use tracing::debug;
use url::Url;

use crate::error::{Result, ScheduleError};

/// Characters `encodeURI` leaves untouched besides alphanumerics.
const URI_RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// GET `url` and return the response body as text.
pub(crate) async fn get_text(client: &reqwest::Client, url: &Url, user_agent: &str) -> Result<String> {
    debug!(%url, "fetching cargo query");

    let response = client
        .get(url.clone())
        .header(USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| ScheduleError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScheduleError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|e| ScheduleError::ResponseBody {
        url: url.to_string(),
        source: e,
    })
}

/// Decode HTML character references (`&amp;`, `&eacute;`, `&#39;` ...) in
/// wiki-sourced text.
pub(crate) fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    Html::parse_fragment(raw).root_element().text().collect()
}

/// Canonical wiki URL for an overview page: whitespace becomes `_`, the
/// rest is escaped like `encodeURI` and joined onto `base`.
pub(crate) fn wiki_url(base: &str, page: &str) -> Result<Url> {
    let page: String = page
        .chars()
        .map(|c| if is_js_whitespace(c) { '_' } else { c })
        .collect();
    let encoded = utf8_percent_encode(&page, URI_RESERVED);
    Url::parse(&format!("{base}{encoded}")).map_err(|e| ScheduleError::InvalidUrl { page, source: e })
}

/// ECMAScript `\s`: unlike `char::is_whitespace` it matches U+FEFF and
/// not U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
