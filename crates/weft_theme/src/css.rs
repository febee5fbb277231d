//! CSS custom-property generation.
//!
//! Turns a [`Theme`] into the flat `--name: value;` block Weft
//! stylesheets consume. Emission order is fixed, so identical themes
//! always serialize byte-for-byte identically.

use crate::breakpoint::Breakpoint;
use crate::theme::Theme;
use crate::tokens::{TextMetric, TextStyle};

impl Theme {
    /// Render every theme variable as CSS custom-property declarations.
    ///
    /// The eight base variables come first, then 15 per text style (three
    /// metrics by five tiers), one declaration per line:
    ///
    /// ```text
    /// --bg-header: #111111;
    /// --fontsize-h1-xs: 2rem;
    /// ```
    ///
    /// Numbers render in shortest decimal form (`2`, not `2.0`), font
    /// sizes and letter spacings carry a `rem` suffix, and line heights
    /// stay unitless.
    pub fn to_css_variables(&self) -> String {
        let palette = &self.palette;
        let mut css = String::with_capacity(4096);

        push_declaration(&mut css, "bg-header", &palette.black);
        push_declaration(&mut css, "text-header", &palette.white);
        push_declaration(&mut css, "bg-nav", &palette.white);
        push_declaration(&mut css, "bg-main", &palette.primary.main);
        push_declaration(&mut css, "bg-secondary", &palette.secondary.main);
        push_declaration(&mut css, "text", &palette.primary.contrast_text);
        push_declaration(&mut css, "text-nav", &palette.black);
        push_declaration(&mut css, "margin", &self.margin);

        for style in TextStyle::ALL {
            let tokens = self.typography.get(style);
            for metric in TextMetric::ALL {
                let scale = tokens.metric(metric);
                for breakpoint in Breakpoint::ALL {
                    let name = format!(
                        "{}-{}-{}",
                        metric.css_name(),
                        style.as_str(),
                        breakpoint.label()
                    );
                    let value =
                        format!("{}{}", scale.resolve(breakpoint.index()), metric.unit());
                    push_declaration(&mut css, &name, &value);
                }
            }
        }

        css
    }

    /// The same declarations wrapped in a `:root { ... }` rule, ready
    /// for direct stylesheet injection.
    pub fn to_css_root_rule(&self) -> String {
        let declarations = self.to_css_variables();
        let mut css = String::with_capacity(declarations.len() + 256);

        css.push_str(":root {\n");
        for line in declarations.lines() {
            css.push_str("  ");
            css.push_str(line);
            css.push('\n');
        }
        css.push_str("}\n");
        css
    }
}

fn push_declaration(css: &mut String, name: &str, value: &str) {
    css.push_str("--");
    css.push_str(name);
    css.push_str(": ");
    css.push_str(value);
    css.push_str(";\n");
}
