//! Sharing a listing by copying its link.

use thiserror::Error;

use crate::core::catalog::Property;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard copy blocked")]
    Blocked,
}

/// Text placed on the clipboard for a listing.
pub fn share_text(property: &Property, origin: &str) -> String {
    format!(
        "{} ({}) - {}/property/{}",
        property.title,
        property.price,
        origin.trim_end_matches('/'),
        property.id
    )
}

pub fn current_origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "https://findmyhome.app".into())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        "https://findmyhome.app".into()
    }
}

pub fn copy_to_clipboard(payload: &str) -> Result<(), ShareError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let unavailable = |what: &str| ShareError::Unavailable(what.to_string());
        let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
        let document = window.document().ok_or_else(|| unavailable("document"))?;
        let body = document.body().ok_or_else(|| unavailable("body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| unavailable("textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| unavailable("textarea cast"))?;
        textarea.set_value(payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|html| html.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(ShareError::Blocked)
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ShareError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(payload.to_string())
            .map_err(|err| ShareError::Unavailable(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::find_property;

    #[test]
    fn share_text_links_to_detail_route() {
        let property = find_property("1").expect("seed listing");
        let text = share_text(&property, "http://localhost:8080/");
        assert!(text.starts_with(&property.title));
        assert!(text.ends_with("http://localhost:8080/property/1"));
    }
}
