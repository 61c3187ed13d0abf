//! Component source template.
//!
//! The template is fixed: it is the contract every generated component
//! satisfies. Only the name, body, defaults, and fill mode vary.

use std::path::{Path, PathBuf};

use glyphforge_core::GeneratedFile;

/// One generated `.tsx` component file.
pub struct ComponentTsx {
    /// Exported component name (optionally prefixed).
    pub component_name: String,
    /// Output file stem.
    pub file_name: String,
    /// Sanitized inner markup, embedded verbatim.
    pub body: String,
    /// Default for the `size` prop.
    pub size: f64,
    /// Default for the `strokeWidth` prop (outline mode only).
    pub stroke_width: f64,
    /// Filled mode: fill="currentColor", stroke="none", strokeWidth
    /// suppressed entirely rather than defaulted.
    pub filled: bool,
}

impl GeneratedFile for ComponentTsx {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.tsx", self.file_name))
    }

    fn render(&self) -> String {
        let name = &self.component_name;
        let size = format_number(self.size);

        let stroke_destructure = if self.filled {
            "strokeWidth".to_string()
        } else {
            format!("strokeWidth = {}", format_number(self.stroke_width))
        };

        let color_attrs = if self.filled {
            concat!(
                "      fill=\"currentColor\"\n",
                "      stroke=\"none\"\n",
            )
            .to_string()
        } else {
            concat!(
                "      fill=\"none\"\n",
                "      stroke=\"currentColor\"\n",
                "      strokeWidth={strokeWidth}\n",
            )
            .to_string()
        };

        let body = indent_body(&self.body);

        format!(
            r#"import * as React from "react";

export interface {name}Props extends React.SVGProps<SVGSVGElement> {{
  title?: string;
  titleId?: string;
  size?: number | string;
  strokeWidth?: number | string;
}}

const {name} = React.forwardRef<SVGSVGElement, {name}Props>(
  ({{ title, titleId, size = {size}, {stroke_destructure}, ...props }}, ref) => (
    <svg
      ref={{ref}}
      width={{size}}
      height={{size}}
      viewBox="0 0 24 24"
{color_attrs}      strokeLinecap="round"
      strokeLinejoin="round"
      role={{title ? "img" : "presentation"}}
      aria-hidden={{title ? undefined : true}}
      aria-labelledby={{title ? titleId : undefined}}
      {{...props}}
    >
      {{title ? <title id={{titleId}}>{{title}}</title> : null}}
{body}    </svg>
  )
);

export default {name};
"#
        )
    }
}

/// Indent each body line to sit inside the root element. An empty body
/// contributes nothing.
fn indent_body(body: &str) -> String {
    if body.is_empty() {
        return String::new();
    }
    body.lines().map(|line| format!("      {}\n", line)).collect()
}

/// Render a default value the way it was configured: whole numbers without
/// a decimal point.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(filled: bool) -> ComponentTsx {
        ComponentTsx {
            component_name: "ArrowLeft".to_string(),
            file_name: "ArrowLeft".to_string(),
            body: r#"<path d="M19 12H5"/>"#.to_string(),
            size: 24.0,
            stroke_width: 2.0,
            filled,
        }
    }

    #[test]
    fn test_path_uses_file_name() {
        let path = component(false).path(Path::new("out"));
        assert_eq!(path, Path::new("out").join("ArrowLeft.tsx"));
    }

    #[test]
    fn test_render_outline_component() {
        let expected = r#"import * as React from "react";

export interface ArrowLeftProps extends React.SVGProps<SVGSVGElement> {
  title?: string;
  titleId?: string;
  size?: number | string;
  strokeWidth?: number | string;
}

const ArrowLeft = React.forwardRef<SVGSVGElement, ArrowLeftProps>(
  ({ title, titleId, size = 24, strokeWidth = 2, ...props }, ref) => (
    <svg
      ref={ref}
      width={size}
      height={size}
      viewBox="0 0 24 24"
      fill="none"
      stroke="currentColor"
      strokeWidth={strokeWidth}
      strokeLinecap="round"
      strokeLinejoin="round"
      role={title ? "img" : "presentation"}
      aria-hidden={title ? undefined : true}
      aria-labelledby={title ? titleId : undefined}
      {...props}
    >
      {title ? <title id={titleId}>{title}</title> : null}
      <path d="M19 12H5"/>
    </svg>
  )
);

export default ArrowLeft;
"#;
        assert_eq!(component(false).render(), expected);
    }

    #[test]
    fn test_render_filled_component_suppresses_stroke_width() {
        let rendered = component(true).render();

        assert!(rendered.contains(r#"fill="currentColor""#));
        assert!(rendered.contains(r#"stroke="none""#));
        assert!(!rendered.contains("strokeWidth={strokeWidth}"));
        assert!(!rendered.contains("strokeWidth = 2"));
        // the prop is still destructured so it never leaks into the spread
        assert!(rendered.contains("size = 24, strokeWidth, ...props"));
    }

    #[test]
    fn test_render_empty_body() {
        let mut empty = component(false);
        empty.body = String::new();
        let rendered = empty.render();

        assert!(rendered.contains(
            "      {title ? <title id={titleId}>{title}</title> : null}\n    </svg>"
        ));
    }

    #[test]
    fn test_render_fractional_defaults() {
        let mut fractional = component(false);
        fractional.stroke_width = 1.5;
        assert!(fractional.render().contains("strokeWidth = 1.5"));
    }
}
