use crate::constants::{OVERLAY_CLASS, OVERLAY_CSS, OVERLAY_PRE_Z_INDEX};
use crate::core::EffectError;
use crate::dom;
use web_sys as web;

/// DOM node inserted into the host container: a scoped stylesheet, the
/// mosaic `<pre>`, and the down-sampled canvas shown pixelated behind it.
///
/// Dropping the overlay detaches it.
pub struct Overlay {
    root: web::HtmlElement,
    pre: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    container: web::HtmlElement,
    attached: bool,
}

impl Overlay {
    pub fn mount(document: &web::Document, container: &web::HtmlElement) -> anyhow::Result<Self> {
        let root = dom::create_html(document, "div")?;
        _ = root.class_list().add_1(OVERLAY_CLASS);
        dom::set_styles(
            &root,
            &[
                ("position", "absolute"),
                ("top", "0"),
                ("left", "0"),
                ("width", "100%"),
                ("height", "100%"),
            ],
        );

        let style = dom::create_html(document, "style")?;
        style.set_text_content(Some(OVERLAY_CSS));
        let pre = dom::create_html(document, "pre")?;
        let canvas = dom::create_canvas(document)?;

        let children: [&web::Node; 3] = [style.as_ref(), pre.as_ref(), canvas.as_ref()];
        for child in children {
            root.append_child(child)
                .map_err(|e| EffectError::Dom(format!("{:?}", e)))?;
        }
        container
            .append_child(&root)
            .map_err(|e| EffectError::Dom(format!("{:?}", e)))?;

        Ok(Self {
            root,
            pre,
            canvas,
            container: container.clone(),
            attached: true,
        })
    }

    /// Canvas that receives the down-sampled frame.
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    #[cfg(test)]
    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    pub fn apply_font(&self, family: &str, size_px: f64) {
        let size = format!("{}px", size_px);
        dom::set_styles(
            &self.pre,
            &[
                ("font-family", family),
                ("font-size", size.as_str()),
                ("margin", "0"),
                ("padding", "0"),
                ("line-height", "1em"),
                ("position", "absolute"),
                ("left", "0"),
                ("top", "0"),
                ("z-index", OVERLAY_PRE_Z_INDEX),
                ("background-attachment", "fixed"),
                ("mix-blend-mode", "difference"),
            ],
        );
    }

    #[inline]
    pub fn set_text(&self, text: &str) {
        self.pre.set_text_content(Some(text));
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.pre.text_content().unwrap_or_default()
    }

    #[inline]
    pub fn set_hue(&self, deg: f32) {
        let filter = format!("hue-rotate({:.1}deg)", deg);
        _ = self.root.style().set_property("filter", &filter);
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Remove the node from the container. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Err(e) = self.container.remove_child(&self.root) {
            log::warn!("[dispose] overlay already gone: {:?}", e);
        }
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container(document: &web::Document) -> web::HtmlElement {
        let el = dom::create_html(document, "div").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn mount_inserts_one_scoped_node_and_detach_removes_it() {
        let document = dom::document().unwrap();
        let host = container(&document);
        let mut overlay = Overlay::mount(&document, &host).unwrap();
        assert_eq!(host.child_element_count(), 1);
        assert!(overlay.root().class_list().contains(OVERLAY_CLASS));

        overlay.set_text("a&b\n");
        assert_eq!(overlay.text(), "a&b\n");

        overlay.detach();
        overlay.detach();
        assert!(!overlay.is_attached());
        assert_eq!(host.child_element_count(), 0);
    }

    #[wasm_bindgen_test]
    fn drop_detaches() {
        let document = dom::document().unwrap();
        let host = container(&document);
        {
            let _overlay = Overlay::mount(&document, &host).unwrap();
            assert_eq!(host.child_element_count(), 1);
        }
        assert_eq!(host.child_element_count(), 0);
    }
}
