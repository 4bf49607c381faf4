use std::fmt::Write as _;

use crate::render::{DrawSurface, ElementState, RecordingSurface, SurfaceElement, attr};

impl RecordingSurface {
    /// Serializes the current scene to a standalone SVG document.
    ///
    /// The tooltip lives outside the drawing and is not part of the output.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let size = self.pixel_size();
        let mut out = String::new();
        let root = self.element(SurfaceElement::Root);
        let view_box = root
            .and_then(|state| state.attributes.get(attr::VIEW_BOX))
            .map_or("0 0 100 100", String::as_str);

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" width="{}" height="{}">"#,
            escape(view_box),
            size.width,
            size.height
        );
        for (class, element) in [
            ("bg", SurfaceElement::Background),
            ("overlay", SurfaceElement::Overlay),
            ("line", SurfaceElement::Line),
        ] {
            if let Some(state) = self.element(element) {
                write_element(&mut out, "path", Some(class), state);
            }
        }
        for (element, state) in self.elements() {
            if matches!(element, SurfaceElement::Marker(_)) {
                write_element(&mut out, "circle", None, state);
            }
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_element(out: &mut String, tag: &str, class: Option<&str>, state: &ElementState) {
    let _ = write!(out, "  <{tag}");
    let classes: Vec<&str> = class
        .into_iter()
        .chain(state.classes.iter().map(String::as_str))
        .collect();
    if !classes.is_empty() {
        let _ = write!(out, r#" class="{}""#, escape(&classes.join(" ")));
    }
    for (name, value) in &state.attributes {
        let _ = write!(out, r#" {name}="{}""#, escape(value));
    }
    if !state.styles.is_empty() {
        let css = state
            .styles
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        let _ = write!(out, r#" style="{}""#, escape(&css));
    }
    out.push_str(" />\n");
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape;
    use crate::core::SurfaceSize;
    use crate::render::RecordingSurface;

    #[test]
    fn escape_quotes_and_markup() {
        assert_eq!(escape(r#"a<"b">&"#), "a&lt;&quot;b&quot;&gt;&amp;");
    }

    #[test]
    fn empty_surface_still_produces_document() {
        let svg = RecordingSurface::new(SurfaceSize::new(300.0, 150.0)).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="300""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
