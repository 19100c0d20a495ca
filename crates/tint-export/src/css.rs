//! CSS custom properties.
//!
//! Colors are written as space-separated RGB triplets (`59 130 246`) so
//! they compose with `rgb(var(--color-x) / <alpha>)`.

use tint_color::Rgb;
use tint_palette::{BasePalette, ProjectColors, optimal_text_color};

use crate::{capitalize, identifier};

fn triplet(color: Rgb) -> String {
    let [r, g, b] = color.channels();
    format!("{r} {g} {b}")
}

fn project_block(lines: &mut Vec<String>, colors: &ProjectColors) {
    lines.push("  /* Project-specific colors */".to_owned());
    for (name, color) in colors.iter() {
        lines.push(format!("  --color-{}: {};", identifier(name), triplet(color)));
    }
    lines.push(String::new());
}

/// `:root` variables for every scale, semantic roles, buttons and project
/// colors, followed by a `[data-theme="dark"]` override block.
#[must_use]
pub fn export_css(palette: &BasePalette, extras: &ProjectColors) -> String {
    let mut lines = vec![":root {".to_owned()];

    for (name, scale) in palette.scales() {
        lines.push(format!("  /* {} colors */", capitalize(name)));
        for (step, color) in scale.iter() {
            lines.push(format!("  --color-{name}-{step}: {};", triplet(color)));
        }
        lines.push(String::new());
    }

    let card = format!("  --color-card: {};", triplet(Rgb::WHITE));
    let button_text = format!(
        "  --color-button-primary-text: {};",
        triplet(optimal_text_color(palette.primary[500]))
    );
    lines.extend(
        [
            "  /* Semantic colors */",
            "  --color-background: var(--color-neutral-50);",
            card.as_str(),
            "  --color-border: var(--color-neutral-200);",
            "  --color-border-focus: var(--color-primary-500);",
            "  --color-accent: var(--color-primary-500);",
            "",
            "  --color-text: var(--color-neutral-800);",
            "  --color-text-muted: var(--color-neutral-600);",
            "  --color-text-subtle: var(--color-neutral-500);",
            "",
            "  /* Button system */",
            "  --color-button-primary: var(--color-primary-500);",
            "  --color-button-primary-hover: var(--color-primary-600);",
            button_text.as_str(),
            "",
            "  --color-button-secondary: var(--color-card);",
            "  --color-button-secondary-hover: var(--color-neutral-50);",
            "  --color-button-secondary-text: var(--color-text);",
            "  --color-button-secondary-border: var(--color-border);",
            "",
        ]
        .map(str::to_owned),
    );

    if !extras.is_empty() {
        project_block(&mut lines, extras);
    }

    lines.extend(
        [
            "}",
            "",
            "/* Dark mode */",
            "[data-theme=\"dark\"] {",
            "  --color-background: var(--color-neutral-900);",
            "  --color-card: var(--color-neutral-800);",
            "  --color-border: var(--color-neutral-700);",
            "  --color-text: var(--color-neutral-100);",
            "  --color-text-muted: var(--color-neutral-400);",
            "  --color-text-subtle: var(--color-neutral-500);",
            "}",
        ]
        .map(str::to_owned),
    );

    lines.join("\n")
}

/// A `:root` block holding only `colors`.
#[must_use]
pub fn export_css_colors(colors: &ProjectColors) -> String {
    let mut lines = vec![":root {".to_owned()];
    project_block(&mut lines, colors);
    lines.pop();
    lines.push("}".to_owned());
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tint_palette::{Style, generate_base_palette};

    fn blue() -> BasePalette {
        generate_base_palette("#3b82f6", Style::Modern).unwrap()
    }

    #[test]
    fn scale_variables_are_rgb_triplets() {
        let css = export_css(&blue(), &ProjectColors::new());
        assert!(css.starts_with(":root {\n  /* Primary colors */\n"), "{css}");
        assert!(css.contains("  --color-primary-500: 11 100 244;\n"));
        assert!(css.contains("  --color-neutral-50: 243 242 242;\n"));
        assert!(css.contains("  /* Info colors */\n"));
        assert_eq!(css.matches("--color-warning-").count(), 10);
    }

    #[test]
    fn semantic_and_button_variables() {
        let css = export_css(&blue(), &ProjectColors::new());
        assert!(css.contains("  --color-card: 255 255 255;"));
        assert!(css.contains("  --color-accent: var(--color-primary-500);"));
        // #0b64f4 is dark enough to need white text.
        assert!(css.contains("  --color-button-primary-text: 255 255 255;"));
        assert!(!css.contains("Project-specific"));
    }

    #[test]
    fn dark_block_closes_the_output() {
        let css = export_css(&blue(), &ProjectColors::new());
        let dark = css.find("[data-theme=\"dark\"] {").unwrap();
        let root_end = css.find("\n}\n").unwrap();
        assert!(root_end < dark);
        assert!(css.ends_with("  --color-text-subtle: var(--color-neutral-500);\n}"));
    }

    #[test]
    fn project_colors_sit_inside_root() {
        let extras: ProjectColors = [("price-sale", Rgb::from_u32(0xef4444))].into_iter().collect();
        let css = export_css(&blue(), &extras);
        let project = css.find("  --color-price-sale: 239 68 68;").unwrap();
        assert!(project < css.find("/* Dark mode */").unwrap());
    }

    #[test]
    fn project_names_become_valid_identifiers() {
        let colors: ProjectColors = [("User's Pick}", Rgb::from_u32(0x06b6d4))].into_iter().collect();
        assert_eq!(
            export_css_colors(&colors),
            ":root {\n  /* Project-specific colors */\n  --color-user-s-pick: 6 182 212;\n}"
        );
    }

    #[test]
    fn standalone_colors() {
        let colors: ProjectColors =
            [("calm", Rgb::from_u32(0x06b6d4)), ("love", Rgb::from_u32(0xec4899))].into_iter().collect();
        assert_eq!(
            export_css_colors(&colors),
            ":root {\n  /* Project-specific colors */\n  --color-calm: 6 182 212;\n  --color-love: 236 72 153;\n}"
        );
    }
}
