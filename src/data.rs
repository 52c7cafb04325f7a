use std::borrow::Cow;
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use mousegram_core::loader::{self, SourceTable};
use mousegram_core::{AppConfig, LoadError, Session};

/// Optional overrides, served next to index.html.
pub const CONFIG_URL: &str = "mousegram.json";

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Fetch every URL and resolve only when all bodies are in, so nothing is
/// drawn from a partial set. Bodies are raw bytes; decoding is the parser's job.
async fn fetch_all(urls: &[&str]) -> Result<Vec<Vec<u8>>, LoadError> {
    let joined = urls.join(", ");
    let window = web_sys::window().ok_or_else(|| LoadError::fetch(&joined, "no window"))?;

    let requests: Array = urls.iter().map(|url| window.fetch_with_str(url)).collect();
    let responses = JsFuture::from(Promise::all(&requests))
        .await
        .map_err(|e| LoadError::fetch(&joined, js_reason(&e)))?;
    let responses: Array = responses.unchecked_into();

    let mut bodies = Vec::with_capacity(urls.len());
    for (url, value) in urls.iter().zip(responses.iter()) {
        let resp: Response = value
            .dyn_into()
            .map_err(|_| LoadError::fetch(*url, "fetch did not return a Response"))?;
        if !resp.ok() {
            return Err(LoadError::Http { url: url.to_string(), status: resp.status() });
        }
        bodies.push(resp.array_buffer().map_err(|e| LoadError::fetch(*url, js_reason(&e)))?);
    }

    let bodies: Array = bodies.into_iter().collect();
    let buffers = JsFuture::from(Promise::all(&bodies))
        .await
        .map_err(|e| LoadError::fetch(&joined, js_reason(&e)))?;
    let buffers: Array = buffers.unchecked_into();

    Ok(buffers.iter().map(|buf| Uint8Array::new(&buf).to_vec()).collect())
}

/// Settings from [`CONFIG_URL`], or the built-in defaults when it is missing
/// or malformed.
pub async fn load_config() -> AppConfig {
    let parsed = fetch_all(&[CONFIG_URL])
        .await
        .and_then(|bodies| {
            let body = bodies.first().map(|b| String::from_utf8_lossy(b)).unwrap_or(Cow::Borrowed("{}"));
            AppConfig::from_json(&body)
        });
    match parsed {
        Ok(config) => {
            log::info!("Loaded settings from {CONFIG_URL}");
            config
        }
        Err(e) if e.is_not_found() => {
            log::warn!("No {CONFIG_URL}; using default settings");
            AppConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring {CONFIG_URL}: {e}");
            AppConfig::default()
        }
    }
}

pub async fn load_session(config: &AppConfig) -> Result<Session, LoadError> {
    let urls = config.files.all();
    log::debug!("Fetching {}", urls.join(", "));
    let bodies = fetch_all(&urls).await?;
    let [fa, ma, ft, mt]: [Vec<u8>; 4] = bodies
        .try_into()
        .map_err(|_| LoadError::fetch(urls.join(", "), "wrong number of responses"))?;
    loader::load_session([
        SourceTable::new(urls[0], &fa),
        SourceTable::new(urls[1], &ma),
        SourceTable::new(urls[2], &ft),
        SourceTable::new(urls[3], &mt),
    ])
}
