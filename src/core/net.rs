//! Response capture and outcome classification.

use serde_json::Value;

use crate::core::error::{FLINKS_CODE, FlinksError, RawResponse};

/// Message used when a `FlinksCode` is present but not a string.
const FALLBACK_CODE: &str = "FLINKS_ERROR";

/// Read status, headers and body of a response into a [`RawResponse`].
pub(crate) async fn read_response(resp: reqwest::Response) -> Result<RawResponse, reqwest::Error> {
    let status = resp.status().as_u16();
    let url = resp.url().to_string();
    let headers = resp.headers().clone();
    let body = resp.text().await?;
    Ok(RawResponse {
        status,
        url,
        headers,
        body,
    })
}

/// Turn a captured response into the decoded body or a typed error.
///
/// Failure statuses (401 to 599) are transport errors and the body is never
/// decoded. A 400 is an ordinary carrier of application errors and goes
/// through decoding like a success. Once decoded, a non-2xx body with a
/// `FlinksCode` is a protocol error; everything else is returned as-is.
pub(crate) fn classify(raw: RawResponse) -> Result<Value, FlinksError> {
    let status = raw.status;

    // 400 carries application errors and is decoded below.
    if (401..600).contains(&status) {
        return Err(FlinksError::Transport {
            message: format!("Got unsuccessful response from server (status code: {status})"),
            response: Some(Box::new(raw)),
            source: None,
        });
    }

    let data: Value = match serde_json::from_str(&raw.body) {
        Ok(v) => v,
        Err(e) => {
            return Err(FlinksError::Protocol {
                message: format!("Unable to deserialize response body: {e}"),
                response: Some(Box::new(raw)),
                data: None,
            });
        }
    };

    if status > 299
        && let Some(code) = data.get(FLINKS_CODE).filter(|c| is_truthy(c))
    {
        let message = code.as_str().unwrap_or(FALLBACK_CODE).to_string();
        #[cfg(feature = "tracing")]
        tracing::debug!(status, code = %message, "service reported an application error");
        return Err(FlinksError::Protocol {
            message,
            response: Some(Box::new(raw)),
            data: Some(data),
        });
    }

    Ok(data)
}

/// JSON truthiness: null, `false`, zero, and empty strings/arrays/objects are falsy.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
